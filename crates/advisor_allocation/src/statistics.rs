//! Mean-variance statistics for a percentage weight vector.
//!
//! All computations run over the canonical asset ordering of the universe.
//! The covariance matrix is derived on the fly from per-asset volatilities
//! and the correlation structure:
//!
//! ```text
//! C[i][j] = vol_i * vol_j * corr_ij
//! variance = w' C w
//! ```

use advisor_core::math::round_dp;
use advisor_core::{AssetUniverse, AssetId};
use serde::Serialize;

use crate::model::Allocation;

/// Risk-free rate assumed by the Sharpe ratio (annualised decimal).
pub const RISK_FREE_RATE: f64 = 0.03;

/// Portfolio metrics in presentation form.
///
/// `expected_return` and `volatility` are percentages rounded to 2 dp;
/// `sharpe_ratio` is a plain ratio rounded to 2 dp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PortfolioMetrics {
    pub expected_return: f64,
    pub volatility: f64,
    pub sharpe_ratio: f64,
}

/// Raw (unrounded, decimal) expected return and volatility for a weight
/// vector. Percentage weights are divided by 100 before use; the vector is
/// not required to sum to 1.
///
/// A non-positive-semi-definite correlation matrix would produce a
/// negative variance and hence NaN volatility; this is intentionally left
/// unchecked to match the original behaviour (the shipped catalog is PSD).
pub fn raw_statistics(universe: &AssetUniverse, allocation: &Allocation) -> (f64, f64) {
    let ids = universe.ordered_ids();
    let weights: Vec<f64> = ids
        .iter()
        .map(|id| allocation.weight(*id) as f64 / 100.0)
        .collect();

    let expected_return: f64 = ids
        .iter()
        .zip(&weights)
        .map(|(id, w)| w * universe.lookup(*id).expected_return)
        .sum();

    let variance = portfolio_variance(universe, ids, &weights);

    (expected_return, variance.sqrt())
}

fn portfolio_variance(universe: &AssetUniverse, ids: &[AssetId], weights: &[f64]) -> f64 {
    let mut variance = 0.0;
    for (i, a) in ids.iter().enumerate() {
        let vol_a = universe.lookup(*a).volatility;
        for (j, b) in ids.iter().enumerate() {
            let vol_b = universe.lookup(*b).volatility;
            variance += weights[i] * weights[j] * vol_a * vol_b * universe.correlation(*a, *b);
        }
    }
    variance
}

/// Computes presentation metrics for an allocation.
///
/// The Sharpe ratio is exactly 0.0 when volatility is zero; the guard
/// avoids division by zero rather than raising an error.
pub fn portfolio_metrics(universe: &AssetUniverse, allocation: &Allocation) -> PortfolioMetrics {
    let (expected_return, volatility) = raw_statistics(universe, allocation);

    let sharpe_ratio = if volatility > 0.0 {
        (expected_return - RISK_FREE_RATE) / volatility
    } else {
        0.0
    };

    PortfolioMetrics {
        expected_return: round_dp(expected_return * 100.0, 2),
        volatility: round_dp(volatility * 100.0, 2),
        sharpe_ratio: round_dp(sharpe_ratio, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn single_asset(id: AssetId, weight: i64) -> Allocation {
        let mut allocation = Allocation::empty();
        allocation.set(id, weight);
        allocation
    }

    #[test]
    fn test_single_asset_portfolio() {
        let universe = AssetUniverse::default();
        let allocation = single_asset(AssetId::Bonds, 100);

        let metrics = portfolio_metrics(&universe, &allocation);
        assert_relative_eq!(metrics.expected_return, 4.0);
        assert_relative_eq!(metrics.volatility, 5.0);
        // (0.04 - 0.03) / 0.05 = 0.2
        assert_relative_eq!(metrics.sharpe_ratio, 0.2);
    }

    #[test]
    fn test_empty_allocation_zero_sharpe() {
        let universe = AssetUniverse::default();
        let allocation = Allocation::empty();

        let metrics = portfolio_metrics(&universe, &allocation);
        assert_eq!(metrics.expected_return, 0.0);
        assert_eq!(metrics.volatility, 0.0);
        assert_eq!(metrics.sharpe_ratio, 0.0);
    }

    #[test]
    fn test_correlation_reduces_volatility() {
        let universe = AssetUniverse::default();

        // 50/50 stocks and bonds is less volatile than the weighted average
        // of the individual volatilities (corr = 0.10).
        let mut mixed = Allocation::empty();
        mixed.set(AssetId::UsStocks, 50);
        mixed.set(AssetId::Bonds, 50);

        let (_, vol) = raw_statistics(&universe, &mixed);
        let naive = 0.5 * 0.15 + 0.5 * 0.05;
        assert!(vol < naive, "vol {vol} should be below naive {naive}");
    }

    #[test]
    fn test_statistics_deterministic() {
        let universe = AssetUniverse::default();
        let allocation = single_asset(AssetId::UsStocks, 60);

        let first = portfolio_metrics(&universe, &allocation);
        let second = portfolio_metrics(&universe, &allocation);
        assert_eq!(first, second);
    }
}
