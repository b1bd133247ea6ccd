//! Monte Carlo simulation of swap-adjusted ABS yields

mod engine;
mod input;
mod scenario;
mod summary;

pub use engine::{simulate, SimulationResult, YieldSimulator};
pub use input::{
    validate, SimulationConfig, SimulationInput, ValidationMode, DEFAULT_NUM_SIMULATIONS,
    DEMO_PERIODS,
};
pub use scenario::ScenarioMatrix;
pub use summary::{
    percentile_sorted, YieldSample, YieldSummary, CI_LOWER_PERCENTILE, CI_UPPER_PERCENTILE,
};
