//! Simulation configuration errors.

use thiserror::Error;

/// Errors from simulation configuration validation.
///
/// Each variant names the violated bound so the transport layer can
/// surface a precise message without inspecting the config itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Starting balance below zero.
    #[error("Current amount must be >= 0, got {amount}")]
    NegativeCurrentAmount { amount: f64 },

    /// Goal amount not strictly positive.
    #[error("Target amount must be > 0, got {amount}")]
    NonPositiveTargetAmount { amount: f64 },

    /// Monthly contribution below zero.
    #[error("Monthly contribution must be >= 0, got {amount}")]
    NegativeContribution { amount: f64 },

    /// Projection horizon not strictly positive.
    #[error("Years until target must be > 0, got {years}")]
    NonPositiveHorizon { years: f64 },

    /// Path count outside the supported range.
    #[error("Number of simulations must be in [{min}, {max}], got {count}")]
    SimulationCountOutOfRange {
        count: usize,
        min: usize,
        max: usize,
    },

    /// Risk-profile volatility unusable for sampling.
    #[error("Annual volatility must be finite and >= 0, got {volatility}")]
    InvalidVolatility { volatility: f64 },
}
