//! Rebalance drift and trade computation.

use std::collections::BTreeMap;

use advisor_core::math::round_dp;
use serde::Serialize;

/// Minimum trade size in currency units; smaller differences are left
/// alone to avoid churn.
pub const MIN_TRADE_AMOUNT: f64 = 100.0;

/// Direction of a rebalancing trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TradeAction {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

/// One rebalancing instruction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trade {
    pub asset: String,
    pub action: TradeAction,
    /// Absolute trade size in currency units, rounded to 2 dp.
    pub amount: f64,
    /// Current allocation percent, rounded to 1 dp.
    pub current_allocation: f64,
    /// Target allocation percent as requested.
    pub target_allocation: f64,
}

/// Result of a rebalance computation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RebalancePlan {
    pub needs_rebalancing: bool,
    /// Largest absolute drift across target assets, percent, 2 dp.
    pub max_drift: f64,
    /// Signed drift (current minus target) per target asset, percent, 2 dp.
    pub drifts: BTreeMap<String, f64>,
    pub trades: Vec<Trade>,
    pub total_portfolio_value: f64,
}

/// Computes drift against a target allocation and, when the largest drift
/// exceeds `threshold` percent, the trades that restore it.
///
/// Semantics preserved from the original service:
/// - a portfolio with zero total value short-circuits to a no-op plan
///   (no division by zero, `needs_rebalancing = false`);
/// - drift is evaluated only for assets named in `target_allocation`;
///   symbols held but absent from the target are never traded, whatever
///   value they hold;
/// - trades smaller than [`MIN_TRADE_AMOUNT`] are suppressed.
///
/// Drifts and trades are emitted in lexicographic symbol order.
pub fn plan_rebalance(
    current_holdings: &BTreeMap<String, f64>,
    target_allocation: &BTreeMap<String, f64>,
    threshold: f64,
) -> RebalancePlan {
    let total_value: f64 = current_holdings.values().sum();
    if total_value == 0.0 {
        return RebalancePlan::default();
    }

    let current_percent = |asset: &str| -> f64 {
        current_holdings
            .get(asset)
            .map(|value| value / total_value * 100.0)
            .unwrap_or(0.0)
    };

    let mut max_drift = 0.0f64;
    let mut drifts = BTreeMap::new();
    for (asset, target) in target_allocation {
        let drift = current_percent(asset) - target;
        drifts.insert(asset.clone(), round_dp(drift, 2));
        max_drift = max_drift.max(drift.abs());
    }

    let needs_rebalancing = max_drift > threshold;

    let mut trades = Vec::new();
    if needs_rebalancing {
        for (asset, target) in target_allocation {
            let target_value = target / 100.0 * total_value;
            let current_value = current_holdings.get(asset).copied().unwrap_or(0.0);
            let diff = target_value - current_value;

            if diff.abs() > MIN_TRADE_AMOUNT {
                trades.push(Trade {
                    asset: asset.clone(),
                    action: if diff > 0.0 {
                        TradeAction::Buy
                    } else {
                        TradeAction::Sell
                    },
                    amount: round_dp(diff.abs(), 2),
                    current_allocation: round_dp(current_percent(asset), 1),
                    target_allocation: *target,
                });
            }
        }
    }

    RebalancePlan {
        needs_rebalancing,
        max_drift: round_dp(max_drift, 2),
        drifts,
        trades,
        total_portfolio_value: round_dp(total_value, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn holdings(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_worked_example() {
        // A 6000 / B 4000 against a 50/50 target: A is at 60%, drift 10
        // over a threshold of 5, so sell 1000 of A and buy 1000 of B.
        let current = holdings(&[("A", 6_000.0), ("B", 4_000.0)]);
        let target = holdings(&[("A", 50.0), ("B", 50.0)]);

        let plan = plan_rebalance(&current, &target, 5.0);

        assert!(plan.needs_rebalancing);
        assert_relative_eq!(plan.max_drift, 10.0);
        assert_relative_eq!(plan.drifts["A"], 10.0);
        assert_relative_eq!(plan.drifts["B"], -10.0);
        assert_relative_eq!(plan.total_portfolio_value, 10_000.0);

        assert_eq!(plan.trades.len(), 2);
        let a = &plan.trades[0];
        assert_eq!(a.asset, "A");
        assert_eq!(a.action, TradeAction::Sell);
        assert_relative_eq!(a.amount, 1_000.0);
        assert_relative_eq!(a.current_allocation, 60.0);
        assert_relative_eq!(a.target_allocation, 50.0);

        let b = &plan.trades[1];
        assert_eq!(b.asset, "B");
        assert_eq!(b.action, TradeAction::Buy);
        assert_relative_eq!(b.amount, 1_000.0);
    }

    #[test]
    fn test_within_threshold_no_trades() {
        let current = holdings(&[("A", 5_200.0), ("B", 4_800.0)]);
        let target = holdings(&[("A", 50.0), ("B", 50.0)]);

        let plan = plan_rebalance(&current, &target, 5.0);

        assert!(!plan.needs_rebalancing);
        assert!(plan.trades.is_empty());
        assert_relative_eq!(plan.max_drift, 2.0);
    }

    #[test]
    fn test_zero_portfolio_short_circuits() {
        let current = holdings(&[]);
        let target = holdings(&[("A", 100.0)]);

        let plan = plan_rebalance(&current, &target, 5.0);

        assert!(!plan.needs_rebalancing);
        assert!(plan.trades.is_empty());
        assert_eq!(plan.total_portfolio_value, 0.0);
        assert!(plan.drifts.is_empty());
    }

    #[test]
    fn test_untargeted_symbols_never_traded() {
        // C holds value but is not in the target; it is ignored for both
        // drift and trades.
        let current = holdings(&[("A", 3_000.0), ("B", 3_000.0), ("C", 4_000.0)]);
        let target = holdings(&[("A", 50.0), ("B", 50.0)]);

        let plan = plan_rebalance(&current, &target, 5.0);

        assert!(plan.needs_rebalancing);
        assert!(!plan.drifts.contains_key("C"));
        assert!(plan.trades.iter().all(|t| t.asset != "C"));
    }

    #[test]
    fn test_small_differences_suppressed() {
        // Drift breaches the 1% threshold but the value difference is
        // under the minimum trade size for B.
        let current = holdings(&[("A", 5_110.0), ("B", 4_890.0)]);
        let target = holdings(&[("A", 50.0), ("B", 50.0)]);

        let plan = plan_rebalance(&current, &target, 1.0);

        assert!(plan.needs_rebalancing);
        // Both diffs are exactly 110 > 100, so both trade.
        assert_eq!(plan.trades.len(), 2);

        // Smaller book: 1.2% drift breaches the threshold but the value
        // differences (60) sit under the minimum trade size.
        let current = holdings(&[("A", 2_560.0), ("B", 2_440.0)]);
        let plan = plan_rebalance(&current, &target, 1.0);
        assert!(plan.needs_rebalancing);
        assert!(plan.trades.is_empty());
    }

    #[test]
    fn test_missing_holding_counts_as_zero() {
        let current = holdings(&[("A", 10_000.0)]);
        let target = holdings(&[("A", 60.0), ("B", 40.0)]);

        let plan = plan_rebalance(&current, &target, 5.0);

        assert!(plan.needs_rebalancing);
        assert_relative_eq!(plan.drifts["A"], 40.0);
        assert_relative_eq!(plan.drifts["B"], -40.0);

        let b = plan.trades.iter().find(|t| t.asset == "B").unwrap();
        assert_eq!(b.action, TradeAction::Buy);
        assert_relative_eq!(b.amount, 4_000.0);
        assert_relative_eq!(b.current_allocation, 0.0);
    }

    #[test]
    fn test_trade_action_wire_names() {
        assert_eq!(serde_json::to_string(&TradeAction::Buy).unwrap(), "\"BUY\"");
        assert_eq!(
            serde_json::to_string(&TradeAction::Sell).unwrap(),
            "\"SELL\""
        );
    }

    proptest! {
        #[test]
        fn prop_trades_only_when_flagged(
            a in 0.0f64..100_000.0,
            b in 0.0f64..100_000.0,
            target_a in 0.0f64..=100.0,
            threshold in 1.0f64..=20.0,
        ) {
            let current = holdings(&[("A", a), ("B", b)]);
            let target = holdings(&[("A", target_a), ("B", 100.0 - target_a)]);

            let plan = plan_rebalance(&current, &target, threshold);

            if !plan.needs_rebalancing {
                prop_assert!(plan.trades.is_empty());
            }
            for trade in &plan.trades {
                prop_assert!(trade.amount > MIN_TRADE_AMOUNT - 0.01);
            }
            prop_assert!(plan.max_drift >= 0.0);
        }
    }
}
