//! Error types for reference-data lookups.

use thiserror::Error;

/// Errors arising from asset-universe and risk-profile lookups.
///
/// # Variants
///
/// - `UnknownAsset`: an asset name did not match any catalog entry
/// - `UnknownRiskLevel`: a risk-level name did not match any tier
/// - `InvalidCorrelation`: the correlation matrix failed construction checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UniverseError {
    /// Asset name not present in the catalog.
    #[error("Unknown asset class: {0}")]
    UnknownAsset(String),

    /// Risk level name not present in the tier table.
    #[error("Unknown risk level: {0}")]
    UnknownRiskLevel(String),

    /// Correlation matrix violated a structural invariant.
    #[error("Invalid correlation matrix: {0}")]
    InvalidCorrelation(String),
}
