//! Asset-class catalog and correlation structure.
//!
//! The [`AssetUniverse`] is the canonical reference data for every
//! vector/matrix computation in the workspace: the ordered asset list
//! defined by [`AssetId::ALL`] fixes the index of each asset in weight
//! vectors and in the correlation matrix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UniverseError;

/// Identifier for an asset class in the advisory universe.
///
/// The variant order is the canonical ordering used by every weight vector
/// and by the correlation matrix; see [`AssetId::ALL`].
///
/// Wire representation uses the upper-snake names of the original service
/// (`US_STOCKS`, `INTL_STOCKS`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetId {
    UsStocks,
    IntlStocks,
    EmergingMarkets,
    Bonds,
    Tips,
    RealEstate,
    Commodities,
    Cash,
}

impl AssetId {
    /// Canonical asset ordering for all vector and matrix operations.
    pub const ALL: [AssetId; 8] = [
        AssetId::UsStocks,
        AssetId::IntlStocks,
        AssetId::EmergingMarkets,
        AssetId::Bonds,
        AssetId::Tips,
        AssetId::RealEstate,
        AssetId::Commodities,
        AssetId::Cash,
    ];

    /// Returns the wire name of this asset class.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetId::UsStocks => "US_STOCKS",
            AssetId::IntlStocks => "INTL_STOCKS",
            AssetId::EmergingMarkets => "EMERGING_MARKETS",
            AssetId::Bonds => "BONDS",
            AssetId::Tips => "TIPS",
            AssetId::RealEstate => "REAL_ESTATE",
            AssetId::Commodities => "COMMODITIES",
            AssetId::Cash => "CASH",
        }
    }

    /// Returns the position of this asset in the canonical ordering.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetId {
    type Err = UniverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetId::ALL
            .iter()
            .find(|id| id.as_str() == s)
            .copied()
            .ok_or_else(|| UniverseError::UnknownAsset(s.to_string()))
    }
}

/// A broad investable category with aggregate risk/return characteristics.
///
/// Distinct from an individual security; the `ticker` names the ETF
/// recommended as the implementation vehicle for the class.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssetClass {
    /// Asset identifier.
    pub id: AssetId,
    /// Annualised expected return (decimal, e.g. 0.10 for 10%).
    pub expected_return: f64,
    /// Annualised volatility (decimal).
    pub volatility: f64,
    /// Recommended ETF ticker.
    pub ticker: &'static str,
}

/// Symmetric correlation matrix over the canonical asset ordering.
///
/// Construction validates squareness, symmetry, a unit diagonal, and that
/// off-diagonal entries lie in [-1, 1]. Positive-semi-definiteness is NOT
/// validated: a non-PSD matrix would surface downstream as NaN portfolio
/// volatility, matching the behaviour of the original service.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelationMatrix {
    n: usize,
    data: Vec<f64>,
}

impl CorrelationMatrix {
    /// Creates a correlation matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns `UniverseError::InvalidCorrelation` if the data is not a
    /// square `n x n` block, is asymmetric, has a non-unit diagonal, or
    /// contains entries outside [-1, 1].
    pub fn new(n: usize, data: Vec<f64>) -> Result<Self, UniverseError> {
        if data.len() != n * n {
            return Err(UniverseError::InvalidCorrelation(format!(
                "expected {} entries for a {n}x{n} matrix, got {}",
                n * n,
                data.len()
            )));
        }
        for i in 0..n {
            if data[i * n + i] != 1.0 {
                return Err(UniverseError::InvalidCorrelation(format!(
                    "diagonal entry ({i}, {i}) is {}, expected 1.0",
                    data[i * n + i]
                )));
            }
            for j in 0..n {
                let v = data[i * n + j];
                if !(-1.0..=1.0).contains(&v) {
                    return Err(UniverseError::InvalidCorrelation(format!(
                        "entry ({i}, {j}) = {v} outside [-1, 1]"
                    )));
                }
                if data[i * n + j] != data[j * n + i] {
                    return Err(UniverseError::InvalidCorrelation(format!(
                        "asymmetric at ({i}, {j}): {} != {}",
                        data[i * n + j],
                        data[j * n + i]
                    )));
                }
            }
        }
        Ok(Self { n, data })
    }

    /// Builds a matrix from pairwise entries, mirroring them symmetrically.
    ///
    /// Unlisted off-diagonal pairs default to 0.0; the diagonal is 1.0.
    pub fn from_pairs(
        n: usize,
        pairs: &[(usize, usize, f64)],
    ) -> Result<Self, UniverseError> {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        for &(i, j, v) in pairs {
            if i >= n || j >= n {
                return Err(UniverseError::InvalidCorrelation(format!(
                    "pair index ({i}, {j}) outside {n}x{n} matrix"
                )));
            }
            data[i * n + j] = v;
            data[j * n + i] = v;
        }
        Self::new(n, data)
    }

    /// Matrix dimension.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Correlation between the assets at positions `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }
}

/// Frozen catalog of asset classes plus their correlation structure.
///
/// Constructed once at process start and shared immutably across all
/// concurrent computations; every operation is a pure lookup.
#[derive(Clone, Debug)]
pub struct AssetUniverse {
    assets: Vec<AssetClass>,
    correlations: CorrelationMatrix,
}

impl AssetUniverse {
    /// Creates a universe from an asset list and correlation matrix.
    ///
    /// The asset list must follow the canonical [`AssetId::ALL`] ordering.
    ///
    /// # Errors
    ///
    /// Returns `UniverseError::InvalidCorrelation` if the matrix dimension
    /// does not match the asset count.
    pub fn new(
        assets: Vec<AssetClass>,
        correlations: CorrelationMatrix,
    ) -> Result<Self, UniverseError> {
        if correlations.size() != assets.len() {
            return Err(UniverseError::InvalidCorrelation(format!(
                "matrix dimension {} does not match {} assets",
                correlations.size(),
                assets.len()
            )));
        }
        Ok(Self {
            assets,
            correlations,
        })
    }

    /// Looks up the catalog entry for an asset.
    #[inline]
    pub fn lookup(&self, id: AssetId) -> &AssetClass {
        &self.assets[id.index()]
    }

    /// Symmetric correlation lookup between two assets.
    #[inline]
    pub fn correlation(&self, a: AssetId, b: AssetId) -> f64 {
        self.correlations.get(a.index(), b.index())
    }

    /// Canonical asset ordering used by all weight vectors.
    #[inline]
    pub fn ordered_ids(&self) -> &'static [AssetId] {
        &AssetId::ALL
    }

    /// Number of assets in the universe.
    #[inline]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// True if the universe is empty (never the case for the default).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Per-asset expected returns in canonical order.
    pub fn expected_returns(&self) -> Vec<f64> {
        self.assets.iter().map(|a| a.expected_return).collect()
    }

    /// Per-asset volatilities in canonical order.
    pub fn volatilities(&self) -> Vec<f64> {
        self.assets.iter().map(|a| a.volatility).collect()
    }
}

impl Default for AssetUniverse {
    /// Builds the production catalog.
    ///
    /// Expected returns, volatilities, tickers, and pairwise correlations
    /// are the calibrated estimates carried over from the original
    /// advisory service.
    fn default() -> Self {
        use AssetId::*;

        let assets = vec![
            AssetClass { id: UsStocks, expected_return: 0.10, volatility: 0.15, ticker: "VTI" },
            AssetClass { id: IntlStocks, expected_return: 0.08, volatility: 0.18, ticker: "VXUS" },
            AssetClass { id: EmergingMarkets, expected_return: 0.09, volatility: 0.22, ticker: "VWO" },
            AssetClass { id: Bonds, expected_return: 0.04, volatility: 0.05, ticker: "BND" },
            AssetClass { id: Tips, expected_return: 0.035, volatility: 0.06, ticker: "VTIP" },
            AssetClass { id: RealEstate, expected_return: 0.07, volatility: 0.14, ticker: "VNQ" },
            AssetClass { id: Commodities, expected_return: 0.05, volatility: 0.20, ticker: "GSG" },
            AssetClass { id: Cash, expected_return: 0.03, volatility: 0.01, ticker: "SGOV" },
        ];

        let pair = |a: AssetId, b: AssetId, v: f64| (a.index(), b.index(), v);
        let pairs = [
            pair(UsStocks, IntlStocks, 0.75),
            pair(UsStocks, EmergingMarkets, 0.65),
            pair(UsStocks, Bonds, 0.10),
            pair(UsStocks, Tips, 0.05),
            pair(UsStocks, RealEstate, 0.60),
            pair(UsStocks, Commodities, 0.30),
            pair(UsStocks, Cash, 0.00),
            pair(IntlStocks, EmergingMarkets, 0.80),
            pair(IntlStocks, Bonds, 0.15),
            pair(IntlStocks, Tips, 0.10),
            pair(IntlStocks, RealEstate, 0.55),
            pair(IntlStocks, Commodities, 0.35),
            pair(IntlStocks, Cash, 0.00),
            pair(EmergingMarkets, Bonds, 0.10),
            pair(EmergingMarkets, Tips, 0.05),
            pair(EmergingMarkets, RealEstate, 0.50),
            pair(EmergingMarkets, Commodities, 0.40),
            pair(EmergingMarkets, Cash, 0.00),
            pair(Bonds, Tips, 0.70),
            pair(Bonds, RealEstate, 0.20),
            pair(Bonds, Commodities, 0.05),
            pair(Bonds, Cash, 0.10),
            pair(Tips, RealEstate, 0.15),
            pair(Tips, Commodities, 0.20),
            pair(Tips, Cash, 0.10),
            pair(RealEstate, Commodities, 0.25),
            pair(RealEstate, Cash, 0.00),
            pair(Commodities, Cash, 0.00),
        ];

        let correlations = CorrelationMatrix::from_pairs(assets.len(), &pairs)
            .expect("static catalog correlations are valid");

        Self {
            assets,
            correlations,
        }
    }
}
