//! Risk-score allocation model.
//!
//! Maps a 1..=10 risk score to integer percentage weights by piecewise
//! linear interpolation between three calibration portfolios, with a
//! residual-settlement step that pins the total to exactly 100.

use std::collections::BTreeMap;

use advisor_core::{AssetId, AssetUniverse};
use serde::{Deserialize, Serialize};

use crate::error::AllocationError;
use crate::statistics::raw_statistics;

/// Calibration portfolios, aligned to [`AssetId::ALL`].
///
/// Anchors for the piecewise interpolation: scores 1..=4 interpolate
/// conservative -> moderate, scores 5..=10 moderate -> aggressive.
const CONSERVATIVE: [f64; 8] = [10.0, 5.0, 0.0, 60.0, 15.0, 5.0, 0.0, 5.0];
const MODERATE: [f64; 8] = [30.0, 15.0, 5.0, 30.0, 5.0, 10.0, 0.0, 5.0];
const AGGRESSIVE: [f64; 8] = [45.0, 20.0, 10.0, 5.0, 0.0, 15.0, 5.0, 0.0];

/// Integer percentage weights over the asset universe.
///
/// After [`AllocationModel::optimise_for_risk_score`] every weight is
/// non-negative and the total is exactly 100. Exclusion redistribution
/// can leave the total off 100 (see
/// [`AllocationModel::exclude_and_redistribute`]).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Allocation(BTreeMap<AssetId, i64>);

impl Allocation {
    /// An allocation with no positions.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Weight of an asset in percent (0 when absent).
    #[inline]
    pub fn weight(&self, id: AssetId) -> i64 {
        self.0.get(&id).copied().unwrap_or(0)
    }

    /// Sets the weight of an asset.
    pub fn set(&mut self, id: AssetId, weight: i64) {
        self.0.insert(id, weight);
    }

    /// Iterates over `(asset, weight)` pairs in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetId, i64)> + '_ {
        self.0.iter().map(|(id, w)| (*id, *w))
    }

    /// Sum of all weights.
    pub fn total(&self) -> i64 {
        self.0.values().sum()
    }
}

/// A sampled point on the risk-score calibration curve.
///
/// `expected_return` and `volatility` are raw annualised decimals, not
/// presentation percentages.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurvePoint {
    pub expected_return: f64,
    pub volatility: f64,
    pub allocation: Allocation,
}

/// Risk-score allocation model over a fixed asset universe.
///
/// Stateless beyond the borrowed universe; every operation is a pure
/// function of its inputs.
pub struct AllocationModel<'a> {
    universe: &'a AssetUniverse,
}

impl<'a> AllocationModel<'a> {
    /// Creates a model over the given universe.
    pub fn new(universe: &'a AssetUniverse) -> Self {
        Self { universe }
    }

    /// Maps a risk score to an allocation.
    ///
    /// Interpolation factor: `(score - 1) / 3` between conservative and
    /// moderate for scores up to 4, `(score - 4) / 6` between moderate and
    /// aggressive above. Per-asset weights round to the nearest integer
    /// percent; any rounding residual is settled into BONDS so the total
    /// is exactly 100.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::RiskScoreOutOfRange` for scores outside
    /// 1..=10.
    pub fn optimise_for_risk_score(&self, score: u8) -> Result<Allocation, AllocationError> {
        if !(1..=10).contains(&score) {
            return Err(AllocationError::RiskScoreOutOfRange { score });
        }

        let (lower, upper, factor) = if score <= 4 {
            (&CONSERVATIVE, &MODERATE, (score - 1) as f64 / 3.0)
        } else {
            (&MODERATE, &AGGRESSIVE, (score - 4) as f64 / 6.0)
        };

        let mut allocation = Allocation::empty();
        for (i, id) in AssetId::ALL.iter().enumerate() {
            let blended = lower[i] * (1.0 - factor) + upper[i] * factor;
            allocation.set(*id, blended.round() as i64);
        }

        settle_residual_into_bonds(&mut allocation);
        Ok(allocation)
    }

    /// Zeroes excluded assets and redistributes their weight
    /// proportionally among the remaining non-zero assets.
    ///
    /// Exclusions are applied one at a time in the order given, each step
    /// reading the running allocation, so results depend on exclusion
    /// order. Each redistribution share rounds independently and no final
    /// renormalisation is applied, so the total can drift off 100 by up to
    /// one point per remaining asset. Preserved literally from the
    /// original service; do not "fix" without a product decision.
    pub fn exclude_and_redistribute(
        &self,
        mut allocation: Allocation,
        excluded: &[AssetId],
    ) -> Allocation {
        for &asset in excluded {
            let excluded_weight = allocation.weight(asset);
            allocation.set(asset, 0);

            let remaining: Vec<(AssetId, i64)> =
                allocation.iter().filter(|(_, w)| *w > 0).collect();
            let total_remaining: i64 = remaining.iter().map(|(_, w)| w).sum();
            if total_remaining == 0 {
                continue;
            }

            for (id, weight) in remaining {
                let share = (excluded_weight as f64 * weight as f64 / total_remaining as f64)
                    .round() as i64;
                allocation.set(id, allocation.weight(id) + share);
            }
        }
        allocation
    }

    /// Samples the return/volatility calibration curve across the
    /// risk-score range.
    ///
    /// Point `i` uses score `1 + (i / (num_points - 1)) * 9` truncated to
    /// an integer, so the linear spacing produces duplicate integer scores
    /// (and therefore duplicate points). This is a calibration curve over
    /// the fixed reference portfolios, not an efficient frontier.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::TooFewCurvePoints` for fewer than 2
    /// points.
    pub fn sample_allocation_curve(
        &self,
        num_points: usize,
    ) -> Result<Vec<CurvePoint>, AllocationError> {
        if num_points < 2 {
            return Err(AllocationError::TooFewCurvePoints { points: num_points });
        }

        let mut curve = Vec::with_capacity(num_points);
        for i in 0..num_points {
            let score = 1.0 + (i as f64 / (num_points - 1) as f64) * 9.0;
            let allocation = self.optimise_for_risk_score(score as u8)?;
            let (expected_return, volatility) = raw_statistics(self.universe, &allocation);
            curve.push(CurvePoint {
                expected_return,
                volatility,
                allocation,
            });
        }
        Ok(curve)
    }
}

/// Settles the rounding residual into BONDS so the total is exactly 100.
///
/// Asset-specific by design (not largest-remainder rounding): the original
/// service dumps the signed residual into the bond sleeve, and the rule is
/// preserved for output compatibility.
fn settle_residual_into_bonds(allocation: &mut Allocation) {
    let residual = 100 - allocation.total();
    if residual != 0 {
        allocation.set(AssetId::Bonds, allocation.weight(AssetId::Bonds) + residual);
    }
}
