//! Serializable record of a simulation run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::simulation::{SimulationConfig, SimulationInput, SimulationResult, YieldSummary};

/// Descriptive statistics of the yield sample beyond the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleMoments {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// One run: what went in, what came out, and when
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub generated_at: DateTime<Utc>,
    pub input: SimulationInput,
    pub config: SimulationConfig,
    pub num_simulations: usize,
    pub total_investment: f64,
    pub summary: YieldSummary,
    pub moments: SampleMoments,
    /// Full sample, only when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yields: Option<Vec<f64>>,
}

impl SimulationReport {
    pub fn new(
        input: &SimulationInput,
        config: &SimulationConfig,
        result: &SimulationResult,
        include_yields: bool,
    ) -> Self {
        let sample = &result.yields;
        Self {
            generated_at: Utc::now(),
            input: input.clone(),
            config: config.clone(),
            num_simulations: sample.len(),
            total_investment: input.total_investment(),
            summary: result.summary,
            moments: SampleMoments {
                mean: sample.mean(),
                std_dev: sample.std_dev(),
                min: sample.min(),
                max: sample.max(),
            },
            yields: include_yields.then(|| sample.values().to_vec()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
