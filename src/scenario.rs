//! Scenario runner for batches of yield simulations
//!
//! Holds one configuration and runs many deal/swap inputs through it. When the
//! configuration carries a seed every run reuses it, so scenarios differ only
//! in their inputs and not in their random draws.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::simulation::{SimulationConfig, SimulationInput, SimulationResult, YieldSimulator, YieldSummary};

/// Summary of one scenario in a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub label: String,
    pub input: SimulationInput,
    pub summary: YieldSummary,
}

/// Pre-configured runner for batch simulations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(SimulationConfig::seeded(7));
/// let outcomes = runner.sweep_float_mean(&SimulationInput::demo(), &[2.0, 2.5, 3.0])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: SimulationConfig,
}

impl ScenarioRunner {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Run a single simulation with the runner's configuration
    pub fn run(&self, input: &SimulationInput) -> Result<SimulationResult> {
        YieldSimulator::new(self.config.clone()).simulate(input)
    }

    /// Run several inputs in order, stopping at the first error
    pub fn run_batch(&self, inputs: &[SimulationInput]) -> Result<Vec<SimulationResult>> {
        let simulator = YieldSimulator::new(self.config.clone());
        inputs.iter().map(|input| simulator.simulate(input)).collect()
    }

    /// Run labelled scenarios and keep only their summaries
    pub fn run_scenarios(&self, scenarios: &[(String, SimulationInput)]) -> Result<Vec<ScenarioOutcome>> {
        let simulator = YieldSimulator::new(self.config.clone());
        scenarios
            .iter()
            .map(|(label, input)| {
                let result = simulator.simulate(input)?;
                info!(
                    "{}: median {:.2}%, 95% CI [{:.2}%, {:.2}%]",
                    label, result.summary.median, result.summary.ci_lower, result.summary.ci_upper
                );
                Ok(ScenarioOutcome {
                    label: label.clone(),
                    input: input.clone(),
                    summary: result.summary,
                })
            })
            .collect()
    }

    /// Re-run `base` once per floating-rate mean
    pub fn sweep_float_mean(&self, base: &SimulationInput, means: &[f64]) -> Result<Vec<ScenarioOutcome>> {
        let scenarios: Vec<(String, SimulationInput)> = means
            .iter()
            .map(|&mean| {
                let input = SimulationInput {
                    swap_float_mean: mean,
                    ..base.clone()
                };
                (format!("float mean {:.2}%", mean), input)
            })
            .collect();
        self.run_scenarios(&scenarios)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }
}
