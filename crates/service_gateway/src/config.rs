//! Environment-driven server configuration.

use advisor_simulation::DEFAULT_SEED;
use anyhow::Context;

/// Server configuration, read from the environment at startup.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Socket address the REST listener binds to.
    pub bind_addr: String,
    /// Seed used for `/monte-carlo` requests that do not supply one.
    pub default_seed: u64,
}

impl ServerConfig {
    /// Reads configuration from the environment.
    ///
    /// - `ADVISOR_BIND_ADDR` (default `0.0.0.0:8000`)
    /// - `ADVISOR_DEFAULT_SEED` (default 42, kept for output parity with
    ///   the original service)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("ADVISOR_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        let default_seed = match std::env::var("ADVISOR_DEFAULT_SEED") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("ADVISOR_DEFAULT_SEED is not a valid seed: {raw}"))?,
            Err(_) => DEFAULT_SEED,
        };

        Ok(Self {
            bind_addr,
            default_seed,
        })
    }
}
