//! Presentation of simulated yield distributions
//!
//! Presenters receive the yield sample and its summary and never alter the
//! yields themselves; the only derived data is the probability-normalized
//! histogram.

mod chart;
mod csv_export;
mod histogram;
mod text;

pub use chart::{ChartSpec, ChartSpecPresenter, ChartTheme, ReferenceLine};
pub use csv_export::CsvPresenter;
pub use histogram::{Histogram, HistogramBin};
pub use text::TextPresenter;

use crate::error::Result;
use crate::simulation::{SimulationResult, YieldSummary};

/// Default number of histogram bins
pub const DEFAULT_BINS: usize = 30;

/// Consumer of a yield distribution and its median and confidence bounds
pub trait DistributionPresenter {
    fn present(&mut self, yields: &[f64], summary: &YieldSummary) -> Result<()>;

    /// Present a full simulation result
    fn present_result(&mut self, result: &SimulationResult) -> Result<()> {
        self.present(result.yields.values(), &result.summary)
    }
}
