//! REST API handlers.
//!
//! Handlers validate request values, dispatch into the computation
//! crates, and wrap results in the `{success, data}` envelope of the
//! original service. CPU-bound simulation runs on the blocking pool so
//! the async executor stays responsive.

use std::collections::BTreeMap;

use advisor_allocation::{portfolio_metrics, Allocation, AllocationModel, PortfolioMetrics};
use advisor_core::math::round_dp;
use advisor_core::{AssetId, RiskLevel};
use advisor_rebalance::{plan_rebalance, RebalancePlan};
use advisor_simulation::{GoalSimulator, SimulationConfig, SimulationOutcome};
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::ServerError;
use crate::rest::AppState;

const METHODOLOGY: &str = "Modern Portfolio Theory (Mean-Variance Optimization)";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Success envelope shared by all data endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Service banner.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Allocation request.
#[derive(Deserialize)]
pub struct OptimizeRequest {
    pub risk_score: u8,
    pub investment_amount: f64,
    #[serde(default)]
    pub exclude_assets: Vec<String>,
}

/// One recommended position.
#[derive(Debug, Serialize)]
pub struct RecommendedHolding {
    pub asset_class: AssetId,
    pub allocation: i64,
    pub amount: f64,
    pub recommended_etf: &'static str,
}

/// Allocation response payload.
#[derive(Debug, Serialize)]
pub struct OptimizeData {
    pub risk_score: u8,
    pub allocation: Allocation,
    pub metrics: PortfolioMetrics,
    pub recommended_holdings: Vec<RecommendedHolding>,
    pub methodology: &'static str,
}

/// Goal-simulation request.
#[derive(Deserialize)]
pub struct MonteCarloRequest {
    pub current_amount: f64,
    pub target_amount: f64,
    #[serde(default)]
    pub monthly_contribution: f64,
    pub years_until_target: f64,
    /// Risk tier name; parsed explicitly so unknown names produce a
    /// domain error rather than a deserialisation rejection.
    pub risk_level: Option<String>,
    pub num_simulations: Option<usize>,
    /// Request-scoped seed; falls back to the configured default.
    pub seed: Option<u64>,
}

/// Rebalance request.
#[derive(Deserialize)]
pub struct RebalanceRequest {
    pub current_holdings: BTreeMap<String, f64>,
    pub target_allocation: BTreeMap<String, f64>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    5.0
}

// ============================================================================
// Handlers
// ============================================================================

/// Service banner endpoint.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "WealthWise Advisory Service",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Computes a risk-scored allocation with metrics and recommended ETFs.
pub async fn optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<ApiResponse<OptimizeData>>, ServerError> {
    if !(request.investment_amount > 0.0) {
        return Err(ServerError::InvalidInput(format!(
            "investment_amount must be > 0, got {}",
            request.investment_amount
        )));
    }

    let excluded = request
        .exclude_assets
        .iter()
        .map(|name| name.parse::<AssetId>())
        .collect::<Result<Vec<_>, _>>()?;

    let model = AllocationModel::new(&state.universe);
    let allocation = model.optimise_for_risk_score(request.risk_score)?;
    let allocation = model.exclude_and_redistribute(allocation, &excluded);
    let metrics = portfolio_metrics(&state.universe, &allocation);

    let recommended_holdings = allocation
        .iter()
        .filter(|(_, weight)| *weight > 0)
        .map(|(id, weight)| RecommendedHolding {
            asset_class: id,
            allocation: weight,
            amount: round_dp(weight as f64 / 100.0 * request.investment_amount, 2),
            recommended_etf: state.universe.lookup(id).ticker,
        })
        .collect();

    Ok(ApiResponse::ok(OptimizeData {
        risk_score: request.risk_score,
        allocation,
        metrics,
        recommended_holdings,
        methodology: METHODOLOGY,
    }))
}

/// Runs a goal-achievement Monte Carlo simulation.
pub async fn monte_carlo(
    State(state): State<AppState>,
    Json(request): Json<MonteCarloRequest>,
) -> Result<Json<ApiResponse<SimulationOutcome>>, ServerError> {
    let risk_level = match &request.risk_level {
        Some(name) => name.parse::<RiskLevel>()?,
        None => RiskLevel::default(),
    };

    let mut builder = SimulationConfig::builder()
        .current_amount(request.current_amount)
        .target_amount(request.target_amount)
        .monthly_contribution(request.monthly_contribution)
        .years_until_target(request.years_until_target)
        .risk_level(risk_level)
        .seed(request.seed.unwrap_or(state.default_seed));
    if let Some(count) = request.num_simulations {
        builder = builder.num_simulations(count);
    }

    let simulator = GoalSimulator::new(builder.build()?)?;
    let outcome = tokio::task::spawn_blocking(move || simulator.run())
        .await
        .map_err(|err| {
            error!(?err, "simulation task panicked");
            ServerError::ComputationFailed
        })?;

    Ok(ApiResponse::ok(outcome))
}

/// Computes drift against a target allocation and rebalancing trades.
pub async fn rebalance(
    State(_state): State<AppState>,
    Json(request): Json<RebalanceRequest>,
) -> Result<Json<ApiResponse<RebalancePlan>>, ServerError> {
    if !(1.0..=20.0).contains(&request.threshold) {
        return Err(ServerError::InvalidInput(format!(
            "threshold must be in [1, 20], got {}",
            request.threshold
        )));
    }
    for (symbol, value) in &request.current_holdings {
        if !value.is_finite() || *value < 0.0 {
            return Err(ServerError::InvalidInput(format!(
                "holding {symbol} has invalid market value {value}"
            )));
        }
    }
    for (asset, percent) in &request.target_allocation {
        if !percent.is_finite() {
            return Err(ServerError::InvalidInput(format!(
                "target allocation for {asset} is not finite"
            )));
        }
    }

    let plan = plan_rebalance(
        &request.current_holdings,
        &request.target_allocation,
        request.threshold,
    );
    Ok(ApiResponse::ok(plan))
}
