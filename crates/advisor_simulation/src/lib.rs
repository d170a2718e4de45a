//! # Advisor Simulation (L3: Engine)
//!
//! Monte Carlo goal-achievement simulator.
//!
//! Projects account balances over a monthly grid under Gaussian monthly
//! returns derived from a risk tier, then aggregates terminal balances
//! into percentile bands and a goal-success probability.
//!
//! # Reproducibility
//!
//! Every simulation owns its random state: the caller-supplied seed is
//! mixed with the path index to derive an independent stream per path
//! (see [`rng`]), so results are identical for a fixed seed regardless of
//! how rayon schedules the paths, and concurrent simulations cannot
//! cross-contaminate. There is no process-global generator state.
//!
//! # Cost
//!
//! `O(num_simulations * total_months)` Gaussian draws; the path loop is
//! the dominant cost centre of the whole workspace and fans out across
//! the rayon thread pool.

pub mod config;
pub mod engine;
pub mod error;
pub mod rng;

pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_SEED};
pub use engine::{GoalSimulator, ProjectedAmounts, SimulationOutcome};
pub use error::ConfigError;
pub use rng::SimulationRng;
