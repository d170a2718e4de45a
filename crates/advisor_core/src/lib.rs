//! # Advisor Core (L1: Foundation)
//!
//! Reference data and shared numerics for the WealthWise advisory engines.
//!
//! This crate provides:
//! - The frozen asset-class catalog and correlation matrix ([`AssetUniverse`])
//! - The risk-tier lookup table ([`RiskLevel`], [`RiskProfile`])
//! - Rounding and percentile helpers shared by the computation crates
//!
//! All reference data is constructed once at process start and shared
//! immutably across concurrent computations; nothing in this crate holds
//! mutable state.

pub mod error;
pub mod math;
pub mod risk_profile;
pub mod universe;

pub use error::UniverseError;
pub use risk_profile::{RiskLevel, RiskProfile};
pub use universe::{AssetClass, AssetId, AssetUniverse, CorrelationMatrix};
