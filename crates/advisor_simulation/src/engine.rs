//! Monte Carlo goal-simulation engine.
//!
//! Simulates independent balance trajectories under Gaussian monthly
//! returns and aggregates terminal balances into percentile bands and a
//! success probability. Paths are statistically independent, so the loop
//! fans out across the rayon pool; ordering is irrelevant to the
//! aggregation.

use advisor_core::math::{percentile, round_dp};
use advisor_core::RiskProfile;
use rand_distr::Normal;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::rng::SimulationRng;

/// Terminal-balance aggregates at the labelled percentiles, rounded to
/// whole currency units.
///
/// Labels map to percentiles 10/25/50/75/90 plus the arithmetic mean, in
/// the order the original service emits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectedAmounts {
    pub worst_case: i64,
    pub pessimistic: i64,
    pub median: i64,
    pub mean: i64,
    pub optimistic: i64,
    pub best_case: i64,
}

/// Aggregated result of one simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SimulationOutcome {
    /// Share of paths ending at or above the target, as a whole percent.
    pub success_probability: u8,
    pub projected_amounts: ProjectedAmounts,
    pub num_simulations: usize,
    /// The return/volatility assumptions the run used.
    pub risk_profile: RiskProfile,
}

/// Monte Carlo goal simulator.
///
/// Owns a validated configuration; [`GoalSimulator::run`] is a pure
/// function of that configuration, safe to invoke from any worker thread.
///
/// # Examples
///
/// ```
/// use advisor_simulation::{GoalSimulator, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .current_amount(50_000.0)
///     .target_amount(300_000.0)
///     .monthly_contribution(500.0)
///     .years_until_target(15.0)
///     .num_simulations(1_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let outcome = GoalSimulator::new(config).unwrap().run();
/// assert!(outcome.success_probability <= 100);
/// ```
pub struct GoalSimulator {
    config: SimulationConfig,
    monthly: Normal<f64>,
    total_months: u32,
}

impl GoalSimulator {
    /// Creates a simulator from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration fails validation or the
    /// derived monthly distribution is unusable.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let monthly = Normal::new(config.monthly_return(), config.monthly_volatility())
            .map_err(|_| ConfigError::InvalidVolatility {
                volatility: config.profile().annual_volatility,
            })?;
        let total_months = config.total_months();

        Ok(Self {
            config,
            monthly,
            total_months,
        })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the simulation and aggregates terminal balances.
    ///
    /// Deterministic for a fixed configuration (including seed),
    /// independent of rayon's scheduling. The terminal-balance buffer is
    /// scoped to this call and dropped after aggregation.
    pub fn run(&self) -> SimulationOutcome {
        let n = self.config.num_simulations();
        let seed = self.config.seed();
        let target = self.config.target_amount();

        debug!(
            num_simulations = n,
            total_months = self.total_months,
            seed,
            "running goal simulation"
        );

        let mut terminals: Vec<f64> = (0..n as u64)
            .into_par_iter()
            .map(|path| self.simulate_path(SimulationRng::for_path(seed, path)))
            .collect();

        let successes = terminals.iter().filter(|&&b| b >= target).count();
        let mean = terminals.iter().sum::<f64>() / n as f64;

        terminals.sort_by(|a, b| a.total_cmp(b));

        SimulationOutcome {
            success_probability: round_dp(successes as f64 / n as f64 * 100.0, 0) as u8,
            projected_amounts: ProjectedAmounts {
                worst_case: round_currency(percentile(&terminals, 10.0)),
                pessimistic: round_currency(percentile(&terminals, 25.0)),
                median: round_currency(percentile(&terminals, 50.0)),
                mean: round_currency(mean),
                optimistic: round_currency(percentile(&terminals, 75.0)),
                best_case: round_currency(percentile(&terminals, 90.0)),
            },
            num_simulations: n,
            risk_profile: self.config.profile(),
        }
    }

    /// Simulates one path and returns its terminal balance.
    fn simulate_path(&self, mut rng: SimulationRng) -> f64 {
        let contribution = self.config.monthly_contribution();
        let mut balance = self.config.current_amount();
        for _ in 0..self.total_months {
            let monthly_return = rng.sample(&self.monthly);
            balance = balance * (1.0 + monthly_return) + contribution;
        }
        balance
    }
}

#[inline]
fn round_currency(x: f64) -> i64 {
    x.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> SimulationConfig {
        SimulationConfig::builder()
            .current_amount(10_000.0)
            .target_amount(50_000.0)
            .monthly_contribution(200.0)
            .years_until_target(10.0)
            .num_simulations(2_000)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_run_is_deterministic_for_fixed_seed() {
        let first = GoalSimulator::new(base_config()).unwrap().run();
        let second = GoalSimulator::new(base_config()).unwrap().run();
        assert_eq!(first, second);
    }

    #[test]
    fn test_percentiles_ordered() {
        let outcome = GoalSimulator::new(base_config()).unwrap().run();
        let p = outcome.projected_amounts;

        assert!(p.worst_case <= p.pessimistic);
        assert!(p.pessimistic <= p.median);
        assert!(p.median <= p.optimistic);
        assert!(p.optimistic <= p.best_case);
        assert!(p.mean >= p.worst_case && p.mean <= p.best_case);
    }

    #[test]
    fn test_zero_volatility_is_deterministic_growth() {
        let profile = RiskProfile {
            annual_return: 0.06,
            annual_volatility: 0.0,
        };
        let config = SimulationConfig::builder()
            .current_amount(10_000.0)
            .target_amount(11_000.0)
            .monthly_contribution(100.0)
            .years_until_target(1.0)
            .profile(profile)
            .num_simulations(1_000)
            .seed(7)
            .build()
            .unwrap();

        // With zero volatility every path follows the same recurrence.
        let mut expected = 10_000.0f64;
        for _ in 0..12 {
            expected = expected * (1.0 + 0.06 / 12.0) + 100.0;
        }
        let expected = expected.round() as i64;

        let outcome = GoalSimulator::new(config).unwrap().run();
        let p = outcome.projected_amounts;
        assert_eq!(p.worst_case, expected);
        assert_eq!(p.median, expected);
        assert_eq!(p.best_case, expected);
        assert_eq!(p.mean, expected);
        // 10_000 * ~1.0617 + contributions ~ 11_851 >= 11_000.
        assert_eq!(outcome.success_probability, 100);
    }

    #[test]
    fn test_outcome_echoes_inputs() {
        let outcome = GoalSimulator::new(base_config()).unwrap().run();
        assert_eq!(outcome.num_simulations, 2_000);
        assert_eq!(
            outcome.risk_profile,
            advisor_core::RiskLevel::Moderate.profile()
        );
    }
}
