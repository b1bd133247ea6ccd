//! Simulation inputs and run configuration

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, YieldError};

/// Default number of Monte Carlo trials per run
pub const DEFAULT_NUM_SIMULATIONS: usize = 10_000;

/// Periods in the demo schedule (monthly for one year)
pub const DEMO_PERIODS: usize = 12;

fn default_num_simulations() -> usize {
    DEFAULT_NUM_SIMULATIONS
}

/// Deal and swap parameters for one simulation
///
/// All rates are in percentage units, so `5.0` means 5%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// ABS coupon rate
    pub abs_coupon: f64,
    /// Fixed leg rate paid on the swap
    pub swap_fixed: f64,
    /// Mean of the floating leg rate
    pub swap_float_mean: f64,
    /// Volatility of the floating leg rate
    pub swap_float_std: f64,
    /// Scheduled gross cash flow per period
    pub cash_flows: Vec<f64>,
}

impl SimulationInput {
    pub fn new(
        abs_coupon: f64,
        swap_fixed: f64,
        swap_float_mean: f64,
        swap_float_std: f64,
        cash_flows: Vec<f64>,
    ) -> Self {
        Self {
            abs_coupon,
            swap_fixed,
            swap_float_mean,
            swap_float_std,
            cash_flows,
        }
    }

    /// The reference deal: 5% coupon, 3% fixed vs 2.5% +/- 0.5% floating,
    /// twelve monthly cash flows of 1000
    pub fn demo() -> Self {
        Self::new(5.0, 3.0, 2.5, 0.5, vec![1000.0; DEMO_PERIODS])
    }

    /// Number of periods in the cash-flow schedule
    pub fn num_periods(&self) -> usize {
        self.cash_flows.len()
    }

    /// Sum of the un-adjusted schedule, used as the yield denominator
    pub fn total_investment(&self) -> f64 {
        self.cash_flows.iter().sum()
    }

    /// Copy of this input with every cash flow multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            cash_flows: self.cash_flows.iter().map(|cf| cf * factor).collect(),
            ..self.clone()
        }
    }
}

/// How strictly inputs are checked before sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Only reject what makes sampling impossible; degenerate schedules
    /// produce NaN or infinite yields
    #[default]
    Permissive,
    /// Additionally reject non-finite inputs and zero total investment
    Strict,
}

/// Run configuration shared by every simulation of a runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of independent trials
    #[serde(default = "default_num_simulations")]
    pub num_simulations: usize,

    /// Seed for the generator; `None` draws one from the OS
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub validation: ValidationMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_NUM_SIMULATIONS,
            seed: None,
            validation: ValidationMode::Permissive,
        }
    }
}

impl SimulationConfig {
    /// Default configuration with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_num_simulations(mut self, num_simulations: usize) -> Self {
        self.num_simulations = num_simulations;
        self
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }
}

/// Check an input against the configured validation mode
///
/// The trial count and the floating-rate volatility are checked in every
/// mode since sampling cannot proceed without them.
pub fn validate(input: &SimulationInput, config: &SimulationConfig) -> Result<()> {
    if config.num_simulations == 0 {
        return Err(YieldError::invalid_input(
            "num_simulations",
            "must be a positive integer",
        ));
    }

    if !input.swap_float_std.is_finite() || input.swap_float_std < 0.0 {
        return Err(YieldError::InvalidDistribution {
            mean: input.swap_float_mean,
            std_dev: input.swap_float_std,
        });
    }

    if config.validation == ValidationMode::Permissive {
        return Ok(());
    }

    let scalars = [
        ("abs_coupon", input.abs_coupon),
        ("swap_fixed", input.swap_fixed),
        ("swap_float_mean", input.swap_float_mean),
    ];
    for (field, value) in scalars {
        if !value.is_finite() {
            warn!("Rejecting non-finite {}: {}", field, value);
            return Err(YieldError::invalid_input(field, format!("{} is not finite", value)));
        }
    }

    if let Some(period) = input.cash_flows.iter().position(|cf| !cf.is_finite()) {
        warn!("Rejecting non-finite cash flow in period {}", period + 1);
        return Err(YieldError::invalid_input(
            "cash_flows",
            format!("period {} is not finite", period + 1),
        ));
    }

    if input.total_investment() == 0.0 {
        warn!(
            "Rejecting schedule of {} periods with zero total investment",
            input.num_periods()
        );
        return Err(YieldError::ZeroInvestment);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_input() {
        let input = SimulationInput::demo();
        assert_eq!(input.num_periods(), 12);
        assert_eq!(input.total_investment(), 12_000.0);
        assert_eq!(input.abs_coupon, 5.0);
    }

    #[test]
    fn test_scaled_keeps_rates() {
        let input = SimulationInput::demo().scaled(2.0);
        assert_eq!(input.total_investment(), 24_000.0);
        assert_eq!(input.swap_fixed, 3.0);
        assert_eq!(input.swap_float_std, 0.5);
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: SimulationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.num_simulations, 10_000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_permissive_accepts_zero_sum() {
        let input = SimulationInput::new(5.0, 3.0, 2.5, 0.5, vec![0.0, 0.0, 0.0]);
        assert!(validate(&input, &SimulationConfig::default()).is_ok());
    }

    #[test]
    fn test_strict_rejects_zero_sum() {
        let input = SimulationInput::new(5.0, 3.0, 2.5, 0.5, vec![100.0, -100.0]);
        let config = SimulationConfig::default().with_validation(ValidationMode::Strict);
        assert!(matches!(validate(&input, &config), Err(YieldError::ZeroInvestment)));
    }

    #[test]
    fn test_strict_rejects_nan_cash_flow() {
        let input = SimulationInput::new(5.0, 3.0, 2.5, 0.5, vec![100.0, f64::NAN]);
        let config = SimulationConfig::default().with_validation(ValidationMode::Strict);
        assert!(matches!(
            validate(&input, &config),
            Err(YieldError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_negative_std_rejected_in_every_mode() {
        let input = SimulationInput::new(5.0, 3.0, 2.5, -0.5, vec![1000.0; 12]);
        for mode in [ValidationMode::Permissive, ValidationMode::Strict] {
            let config = SimulationConfig::default().with_validation(mode);
            assert!(matches!(
                validate(&input, &config),
                Err(YieldError::InvalidDistribution { .. })
            ));
        }
    }

    #[test]
    fn test_zero_simulations_rejected() {
        let config = SimulationConfig::default().with_num_simulations(0);
        assert!(validate(&SimulationInput::demo(), &config).is_err());
    }
}
