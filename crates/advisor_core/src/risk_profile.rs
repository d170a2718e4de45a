//! Risk-tier lookup table for goal simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UniverseError;

/// Named risk tier selecting a return/volatility assumption pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskLevel {
    /// Returns the wire name of this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Conservative => "conservative",
            RiskLevel::Moderate => "moderate",
            RiskLevel::Aggressive => "aggressive",
        }
    }

    /// Returns the calibrated return/volatility assumptions for this tier.
    pub fn profile(&self) -> RiskProfile {
        match self {
            RiskLevel::Conservative => RiskProfile {
                annual_return: 0.05,
                annual_volatility: 0.08,
            },
            RiskLevel::Moderate => RiskProfile {
                annual_return: 0.07,
                annual_volatility: 0.12,
            },
            RiskLevel::Aggressive => RiskProfile {
                annual_return: 0.09,
                annual_volatility: 0.18,
            },
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = UniverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conservative" => Ok(RiskLevel::Conservative),
            "moderate" => Ok(RiskLevel::Moderate),
            "aggressive" => Ok(RiskLevel::Aggressive),
            other => Err(UniverseError::UnknownRiskLevel(other.to_string())),
        }
    }
}

/// Annualised return/volatility assumptions for a risk tier.
///
/// Wire keys (`return`, `vol`) are kept compatible with the original
/// service response.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Annualised expected return (decimal).
    #[serde(rename = "return")]
    pub annual_return: f64,
    /// Annualised volatility (decimal).
    #[serde(rename = "vol")]
    pub annual_volatility: f64,
}
