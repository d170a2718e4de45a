//! Simulation configuration with builder and validation.

use advisor_core::{RiskLevel, RiskProfile};

use crate::error::ConfigError;

/// Minimum supported path count.
pub const MIN_SIMULATIONS: usize = 1_000;
/// Maximum supported path count.
pub const MAX_SIMULATIONS: usize = 100_000;
/// Default path count.
pub const DEFAULT_SIMULATIONS: usize = 10_000;
/// Default seed, kept for output parity with the original service.
pub const DEFAULT_SEED: u64 = 42;

/// Validated configuration for one goal simulation.
///
/// Construct via [`SimulationConfig::builder`]; `build()` validates every
/// bound and returns a config that the engine can trust.
///
/// # Examples
///
/// ```
/// use advisor_simulation::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .current_amount(50_000.0)
///     .target_amount(500_000.0)
///     .monthly_contribution(1_000.0)
///     .years_until_target(20.0)
///     .num_simulations(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.total_months(), 240);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    current_amount: f64,
    target_amount: f64,
    monthly_contribution: f64,
    years_until_target: f64,
    profile: RiskProfile,
    num_simulations: usize,
    seed: u64,
}

impl SimulationConfig {
    /// Starts a builder with defaults: zero contribution, moderate
    /// profile, 10_000 paths, seed 42.
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Validates all bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.current_amount >= 0.0) {
            return Err(ConfigError::NegativeCurrentAmount {
                amount: self.current_amount,
            });
        }
        if !(self.target_amount > 0.0) {
            return Err(ConfigError::NonPositiveTargetAmount {
                amount: self.target_amount,
            });
        }
        if !(self.monthly_contribution >= 0.0) {
            return Err(ConfigError::NegativeContribution {
                amount: self.monthly_contribution,
            });
        }
        if !(self.years_until_target > 0.0) {
            return Err(ConfigError::NonPositiveHorizon {
                years: self.years_until_target,
            });
        }
        if !(MIN_SIMULATIONS..=MAX_SIMULATIONS).contains(&self.num_simulations) {
            return Err(ConfigError::SimulationCountOutOfRange {
                count: self.num_simulations,
                min: MIN_SIMULATIONS,
                max: MAX_SIMULATIONS,
            });
        }
        if !(self.profile.annual_volatility >= 0.0) || !self.profile.annual_volatility.is_finite() {
            return Err(ConfigError::InvalidVolatility {
                volatility: self.profile.annual_volatility,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn current_amount(&self) -> f64 {
        self.current_amount
    }

    #[inline]
    pub fn target_amount(&self) -> f64 {
        self.target_amount
    }

    #[inline]
    pub fn monthly_contribution(&self) -> f64 {
        self.monthly_contribution
    }

    #[inline]
    pub fn years_until_target(&self) -> f64 {
        self.years_until_target
    }

    #[inline]
    pub fn profile(&self) -> RiskProfile {
        self.profile
    }

    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Projection horizon in whole months (`floor(years * 12)`).
    #[inline]
    pub fn total_months(&self) -> u32 {
        (self.years_until_target * 12.0).floor() as u32
    }

    /// Mean of the monthly return draw (`annual_return / 12`).
    #[inline]
    pub fn monthly_return(&self) -> f64 {
        self.profile.annual_return / 12.0
    }

    /// Standard deviation of the monthly return draw
    /// (`annual_volatility / sqrt(12)`).
    #[inline]
    pub fn monthly_volatility(&self) -> f64 {
        self.profile.annual_volatility / 12f64.sqrt()
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    current_amount: f64,
    target_amount: f64,
    monthly_contribution: f64,
    years_until_target: f64,
    profile: RiskProfile,
    num_simulations: usize,
    seed: u64,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            current_amount: 0.0,
            target_amount: 0.0,
            monthly_contribution: 0.0,
            years_until_target: 0.0,
            profile: RiskLevel::Moderate.profile(),
            num_simulations: DEFAULT_SIMULATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationConfigBuilder {
    pub fn current_amount(mut self, amount: f64) -> Self {
        self.current_amount = amount;
        self
    }

    pub fn target_amount(mut self, amount: f64) -> Self {
        self.target_amount = amount;
        self
    }

    pub fn monthly_contribution(mut self, amount: f64) -> Self {
        self.monthly_contribution = amount;
        self
    }

    pub fn years_until_target(mut self, years: f64) -> Self {
        self.years_until_target = years;
        self
    }

    /// Selects the return/volatility assumptions of a named tier.
    pub fn risk_level(mut self, level: RiskLevel) -> Self {
        self.profile = level.profile();
        self
    }

    /// Sets explicit return/volatility assumptions.
    pub fn profile(mut self, profile: RiskProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn num_simulations(mut self, count: usize) -> Self {
        self.num_simulations = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates and produces the configuration.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let config = SimulationConfig {
            current_amount: self.current_amount,
            target_amount: self.target_amount,
            monthly_contribution: self.monthly_contribution,
            years_until_target: self.years_until_target,
            profile: self.profile,
            num_simulations: self.num_simulations,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_builder() -> SimulationConfigBuilder {
        SimulationConfig::builder()
            .current_amount(10_000.0)
            .target_amount(100_000.0)
            .years_until_target(10.0)
    }

    #[test]
    fn test_build_with_defaults() {
        let config = valid_builder().build().unwrap();
        assert_eq!(config.monthly_contribution(), 0.0);
        assert_eq!(config.num_simulations(), DEFAULT_SIMULATIONS);
        assert_eq!(config.seed(), DEFAULT_SEED);
        assert_eq!(config.profile(), RiskLevel::Moderate.profile());
    }

    #[test]
    fn test_months_floor() {
        let config = valid_builder().years_until_target(1.99).build().unwrap();
        assert_eq!(config.total_months(), 23);
    }

    #[test]
    fn test_monthly_derivation() {
        let config = valid_builder()
            .risk_level(RiskLevel::Aggressive)
            .build()
            .unwrap();
        assert!((config.monthly_return() - 0.09 / 12.0).abs() < 1e-15);
        assert!((config.monthly_volatility() - 0.18 / 12f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_rejects_negative_current() {
        let err = valid_builder().current_amount(-1.0).build().unwrap_err();
        assert!(matches!(err, ConfigError::NegativeCurrentAmount { .. }));
    }

    #[test]
    fn test_rejects_zero_target() {
        let err = valid_builder().target_amount(0.0).build().unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveTargetAmount { .. }));
    }

    #[test]
    fn test_rejects_negative_contribution() {
        let err = valid_builder()
            .monthly_contribution(-5.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NegativeContribution { .. }));
    }

    #[test]
    fn test_rejects_zero_horizon() {
        let err = valid_builder().years_until_target(0.0).build().unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveHorizon { .. }));
    }

    #[test]
    fn test_rejects_simulation_count_bounds() {
        let err = valid_builder().num_simulations(999).build().unwrap_err();
        assert!(matches!(err, ConfigError::SimulationCountOutOfRange { .. }));

        let err = valid_builder().num_simulations(100_001).build().unwrap_err();
        assert!(matches!(err, ConfigError::SimulationCountOutOfRange { .. }));

        assert!(valid_builder().num_simulations(1_000).build().is_ok());
        assert!(valid_builder().num_simulations(100_000).build().is_ok());
    }

    #[test]
    fn test_rejects_nan_inputs() {
        let err = valid_builder().current_amount(f64::NAN).build().unwrap_err();
        assert!(matches!(err, ConfigError::NegativeCurrentAmount { .. }));
    }
}
