//! Monte Carlo engine for swap-adjusted ABS yields

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::input::{validate, SimulationConfig, SimulationInput};
use super::scenario::ScenarioMatrix;
use super::summary::{YieldSample, YieldSummary};
use crate::error::Result;

/// Output of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Total yield per trial
    pub yields: YieldSample,
    /// Median and 95% confidence interval of `yields`
    pub summary: YieldSummary,
    /// Periods in the simulated schedule
    pub num_periods: usize,
}

impl SimulationResult {
    pub fn median(&self) -> f64 {
        self.summary.median
    }

    pub fn ci_lower(&self) -> f64 {
        self.summary.ci_lower
    }

    pub fn ci_upper(&self) -> f64 {
        self.summary.ci_upper
    }
}

/// Yield simulator
///
/// Holds only the run configuration; every call builds its own scenario
/// matrix and discards it on return.
#[derive(Debug, Clone, Default)]
pub struct YieldSimulator {
    config: SimulationConfig,
}

impl YieldSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run a simulation with a generator built from the configured seed,
    /// or from OS entropy when no seed is set
    pub fn simulate(&self, input: &SimulationInput) -> Result<SimulationResult> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.simulate_with_rng(input, &mut rng)
    }

    /// Run a simulation drawing from a caller-supplied generator
    pub fn simulate_with_rng<R: Rng + ?Sized>(
        &self,
        input: &SimulationInput,
        rng: &mut R,
    ) -> Result<SimulationResult> {
        validate(input, &self.config)?;

        let num_simulations = self.config.num_simulations;
        let num_periods = input.num_periods();
        debug!(
            "Simulating {} trials x {} periods (seed: {:?})",
            num_simulations, num_periods, self.config.seed
        );

        let scenarios = ScenarioMatrix::sample(
            rng,
            input.swap_float_mean,
            input.swap_float_std,
            num_simulations,
            num_periods,
        )?;

        let abs_yield = input.abs_coupon / 100.0;
        let total_investment = input.total_investment();

        let yields: Vec<f64> = scenarios
            .rows()
            .map(|float_rates| {
                let proceeds =
                    net_proceeds(&input.cash_flows, float_rates, abs_yield, input.swap_fixed);
                (proceeds - total_investment) / total_investment * 100.0
            })
            .collect();

        let yields = YieldSample::new(yields);
        let summary = yields.summarize();
        debug!(
            "Median {:.4}%, 95% CI [{:.4}%, {:.4}%]",
            summary.median, summary.ci_lower, summary.ci_upper
        );

        Ok(SimulationResult {
            yields,
            summary,
            num_periods,
        })
    }
}

/// Sum over periods of the coupon-grossed cash flow less the swap cost
///
/// Swap cost is positive when the fixed leg paid exceeds the floating leg
/// received, and is applied to the period's cash flow as notional.
fn net_proceeds(cash_flows: &[f64], float_rates: &[f64], abs_yield: f64, swap_fixed: f64) -> f64 {
    cash_flows
        .iter()
        .zip(float_rates)
        .map(|(&cf, &float_rate)| {
            let swap_cost = swap_fixed - float_rate;
            cf * (1.0 + abs_yield) - cf * swap_cost / 100.0
        })
        .sum()
}

/// Simulate with the default configuration (10,000 trials, unseeded)
pub fn simulate(input: &SimulationInput) -> Result<SimulationResult> {
    YieldSimulator::default().simulate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YieldError;
    use crate::simulation::input::ValidationMode;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn seeded(seed: u64) -> YieldSimulator {
        YieldSimulator::new(SimulationConfig::seeded(seed))
    }

    #[test]
    fn test_sample_length_matches_trials() {
        let result = seeded(1).simulate(&SimulationInput::demo()).unwrap();
        assert_eq!(result.yields.len(), 10_000);
        assert_eq!(result.num_periods, 12);

        let small = YieldSimulator::new(SimulationConfig::seeded(1).with_num_simulations(250));
        assert_eq!(small.simulate(&SimulationInput::demo()).unwrap().yields.len(), 250);
    }

    #[test]
    fn test_unseeded_default_run() {
        let result = simulate(&SimulationInput::demo()).unwrap();
        assert_eq!(result.yields.len(), 10_000);
        assert!(result.ci_lower() <= result.median());
        assert!(result.median() <= result.ci_upper());
    }

    #[test]
    fn test_ci_ordering() {
        let inputs = [
            SimulationInput::demo(),
            SimulationInput::new(0.0, 1.0, 4.0, 2.0, vec![250.0, 500.0, 1000.0]),
            SimulationInput::new(8.0, 5.0, 5.0, 1.5, vec![-100.0, 300.0]),
        ];
        for (i, input) in inputs.iter().enumerate() {
            let result = seeded(100 + i as u64).simulate(input).unwrap();
            assert!(result.ci_lower() <= result.median(), "input {}", i);
            assert!(result.median() <= result.ci_upper(), "input {}", i);
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let a = seeded(42).simulate(&SimulationInput::demo()).unwrap();
        let b = seeded(42).simulate(&SimulationInput::demo()).unwrap();
        assert_eq!(a, b);

        let c = seeded(43).simulate(&SimulationInput::demo()).unwrap();
        assert_ne!(a.yields, c.yields);
    }

    #[test]
    fn test_injected_rng_matches_seeded_config() {
        let mut rng = StdRng::seed_from_u64(5);
        let injected = YieldSimulator::default()
            .simulate_with_rng(&SimulationInput::demo(), &mut rng)
            .unwrap();
        let configured = seeded(5).simulate(&SimulationInput::demo()).unwrap();
        assert_eq!(injected.yields, configured.yields);
    }

    #[test]
    fn test_zero_sum_schedule_is_degenerate() {
        let input = SimulationInput::new(5.0, 3.0, 2.5, 0.5, vec![0.0, 0.0, 0.0]);
        let result = seeded(3).simulate(&input).unwrap();
        assert_eq!(result.yields.len(), 10_000);
        assert!(result.yields.values().iter().all(|y| !y.is_finite()));
        assert!(result.median().is_nan());
        assert!(result.ci_lower().is_nan());
        assert!(result.ci_upper().is_nan());
        assert!(result.summary.is_degenerate());
    }

    #[test]
    fn test_empty_schedule_is_degenerate() {
        let input = SimulationInput::new(5.0, 3.0, 2.5, 0.5, Vec::new());
        let result = seeded(3).simulate(&input).unwrap();
        assert_eq!(result.num_periods, 0);
        assert!(result.yields.values().iter().all(|y| y.is_nan()));
    }

    #[test]
    fn test_strict_mode_rejects_zero_sum() {
        let input = SimulationInput::new(5.0, 3.0, 2.5, 0.5, vec![0.0, 0.0, 0.0]);
        let simulator = YieldSimulator::new(
            SimulationConfig::seeded(3).with_validation(ValidationMode::Strict),
        );
        assert!(matches!(simulator.simulate(&input), Err(YieldError::ZeroInvestment)));
    }

    #[test]
    fn test_negative_volatility_rejected() {
        let input = SimulationInput::new(5.0, 3.0, 2.5, -0.5, vec![1000.0; 12]);
        assert!(matches!(
            seeded(3).simulate(&input),
            Err(YieldError::InvalidDistribution { .. })
        ));
    }

    #[test]
    fn test_doubling_cash_flows_preserves_statistics() {
        let input = SimulationInput::demo();
        let base = seeded(11).simulate(&input).unwrap();
        let doubled = seeded(11).simulate(&input.scaled(2.0)).unwrap();
        assert_eq!(base.median(), doubled.median());
        assert_eq!(base.ci_lower(), doubled.ci_lower());
        assert_eq!(base.ci_upper(), doubled.ci_upper());
    }

    #[test]
    fn test_demo_scenario_median() {
        let result = seeded(2024).simulate(&SimulationInput::demo()).unwrap();
        // 5% coupon less a 0.5% expected swap cost
        assert!(result.median() > 4.0 && result.median() < 5.0, "median {}", result.median());
        assert_abs_diff_eq!(result.median(), 4.5, epsilon = 0.05);
        assert!(result.summary.ci_width() > 0.0);
        assert!(result.ci_lower() < 4.5 && result.ci_upper() > 4.5);
    }

    #[test]
    fn test_zero_volatility_collapses() {
        let input = SimulationInput::new(5.0, 3.0, 2.0, 0.0, vec![1000.0; 12]);
        let result = seeded(8).simulate(&input).unwrap();
        let first = result.yields.values()[0];
        assert!(result.yields.values().iter().all(|&y| y == first));
        assert_eq!(result.ci_lower(), result.median());
        assert_eq!(result.median(), result.ci_upper());
        // 5% coupon less a 1% swap cost
        assert_relative_eq!(result.median(), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_net_proceeds_formula() {
        let cash_flows = [1000.0, 2000.0];
        let float_rates = [2.0, 4.0];
        // 1000 * 1.05 - 1000 * 1.0 / 100 + 2000 * 1.05 - 2000 * (-1.0) / 100
        let expected = 1050.0 - 10.0 + 2100.0 + 20.0;
        assert_relative_eq!(net_proceeds(&cash_flows, &float_rates, 0.05, 3.0), expected);
    }
}
