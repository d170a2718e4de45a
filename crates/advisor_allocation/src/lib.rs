//! # Advisor Allocation (L2: Models)
//!
//! Mean-variance portfolio statistics and the risk-score allocation model.
//!
//! This crate provides:
//! - [`Allocation`]: integer percentage weights over the asset universe
//! - [`AllocationModel`]: risk-score interpolation between calibration
//!   portfolios, exclusion with proportional redistribution, and
//!   calibration-curve sampling
//! - [`statistics`]: expected return, covariance-based volatility, and
//!   Sharpe ratio for a weight vector
//!
//! Allocation selection is calibrated interpolation between three fixed
//! reference portfolios. It is deliberately not a convex optimiser; the
//! curve produced by [`AllocationModel::sample_allocation_curve`] is a
//! calibration curve, not an efficient frontier.

pub mod error;
pub mod model;
pub mod statistics;

pub use error::AllocationError;
pub use model::{Allocation, AllocationModel, CurvePoint};
pub use statistics::{portfolio_metrics, PortfolioMetrics, RISK_FREE_RATE};
