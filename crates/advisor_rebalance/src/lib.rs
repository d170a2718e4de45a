//! # Advisor Rebalance (L3: Engine)
//!
//! Drift detection and trade generation against a target allocation.
//!
//! Compares current holding percentages with a target allocation, flags
//! drift beyond a threshold, and emits BUY/SELL instructions sized in
//! currency units. Pure request-scoped computation with no shared state.

pub mod calculator;

pub use calculator::{plan_rebalance, RebalancePlan, Trade, TradeAction, MIN_TRADE_AMOUNT};
