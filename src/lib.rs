//! ABS Swap Yield - Monte Carlo estimation of swap-adjusted ABS yields
//!
//! This library provides:
//! - Floating-rate scenario generation for the floating leg of a swap
//! - Per-trial swap-adjusted total yield and its median / 95% interval
//! - Batch runs over several deal or swap inputs
//! - Histogram, CSV and chart-specification presenters
//! - JSON request and CSV cash-flow loaders

pub mod error;
pub mod inputs;
pub mod presenter;
pub mod report;
pub mod scenario;
pub mod simulation;

// Re-export commonly used types
pub use error::{Result, YieldError};
pub use presenter::DistributionPresenter;
pub use report::SimulationReport;
pub use scenario::ScenarioRunner;
pub use simulation::{
    simulate, SimulationConfig, SimulationInput, SimulationResult, ValidationMode, YieldSample,
    YieldSimulator, YieldSummary,
};
