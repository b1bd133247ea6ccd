//! Loading simulation inputs from JSON requests and CSV schedules

mod loader;
mod request;

pub use loader::{load_cash_flows, load_cash_flows_from_reader};
pub use request::{load_request, SimulationRequest};
