//! WealthWise Advisory Server - REST API for the advisory core.
//!
//! Thin transport shell over the quantitative engines. All computation
//! lives in the `advisor_*` crates; this binary handles request
//! validation, dispatch, and structured error mapping.
//!
//! # Endpoints
//!
//! - `GET /` - Service banner
//! - `GET /health` - Health check
//! - `POST /optimize` - Risk-score portfolio allocation
//! - `POST /monte-carlo` - Goal-achievement simulation
//! - `POST /rebalance` - Drift detection and trade generation

use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod rest;

pub use error::ServerError;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting WealthWise Advisory Server...");

    // Load configuration
    let config = config::ServerConfig::from_env()?;

    info!("Configuration loaded");
    info!("  Bind address: {}", config.bind_addr);
    info!("  Default simulation seed: {}", config.default_seed);

    let addr: SocketAddr = config.bind_addr.parse()?;
    let app = rest::create_router(config);

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
