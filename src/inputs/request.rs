//! JSON simulation requests

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::simulation::{
    SimulationConfig, SimulationInput, ValidationMode, DEFAULT_NUM_SIMULATIONS, DEMO_PERIODS,
};

/// A simulation request as read from a JSON file
///
/// Every field is optional; missing ones fall back to the reference deal.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationRequest {
    /// ABS coupon rate in percent (default: 5.0)
    #[serde(default = "default_abs_coupon")]
    pub abs_coupon: f64,

    /// Fixed swap rate in percent (default: 3.0)
    #[serde(default = "default_swap_fixed")]
    pub swap_fixed: f64,

    /// Mean floating rate in percent (default: 2.5)
    #[serde(default = "default_swap_float_mean")]
    pub swap_float_mean: f64,

    /// Floating rate volatility in percent (default: 0.5)
    #[serde(default = "default_swap_float_std")]
    pub swap_float_std: f64,

    /// Per-period cash flows (default: twelve periods of 1000)
    #[serde(default = "default_cash_flows")]
    pub cash_flows: Vec<f64>,

    #[serde(default = "default_num_simulations")]
    pub num_simulations: usize,

    #[serde(default)]
    pub seed: Option<u64>,

    /// Reject degenerate inputs instead of returning NaN yields
    #[serde(default)]
    pub strict: bool,
}

fn default_abs_coupon() -> f64 { 5.0 }
fn default_swap_fixed() -> f64 { 3.0 }
fn default_swap_float_mean() -> f64 { 2.5 }
fn default_swap_float_std() -> f64 { 0.5 }
fn default_cash_flows() -> Vec<f64> { vec![1000.0; DEMO_PERIODS] }
fn default_num_simulations() -> usize { DEFAULT_NUM_SIMULATIONS }

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            abs_coupon: default_abs_coupon(),
            swap_fixed: default_swap_fixed(),
            swap_float_mean: default_swap_float_mean(),
            swap_float_std: default_swap_float_std(),
            cash_flows: default_cash_flows(),
            num_simulations: default_num_simulations(),
            seed: None,
            strict: false,
        }
    }
}

impl SimulationRequest {
    pub fn input(&self) -> SimulationInput {
        SimulationInput::new(
            self.abs_coupon,
            self.swap_fixed,
            self.swap_float_mean,
            self.swap_float_std,
            self.cash_flows.clone(),
        )
    }

    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            num_simulations: self.num_simulations,
            seed: self.seed,
            validation: if self.strict {
                ValidationMode::Strict
            } else {
                ValidationMode::Permissive
            },
        }
    }
}

/// Read a request from a JSON file
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<SimulationRequest> {
    let file = File::open(path)?;
    let request = serde_json::from_reader(BufReader::new(file))?;
    Ok(request)
}
