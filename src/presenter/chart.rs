//! JSON chart specification for an external renderer
//!
//! The chart spec carries the binned distribution, the three reference lines and
//! the dark theme, so a plotting front end needs no further computation.

use serde::{Deserialize, Serialize};
use std::io::Write;

use super::{DistributionPresenter, Histogram, DEFAULT_BINS};
use crate::error::Result;
use crate::simulation::YieldSummary;

/// Colour for observed reference values (median and CI lines)
pub const COLOR_ACTUAL: &str = "#FF6B6B";
/// Colour for the simulated distribution
pub const COLOR_FORECAST: &str = "#4ECDC4";

/// Visual theme of the distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub bar_color: String,
    pub bar_opacity: f64,
    pub line_color: String,
    pub line_dash: String,
    pub background: String,
    pub font_color: String,
    pub grid_color: String,
    pub grid_width: f64,
    /// Left, right, top, bottom
    pub margin: [u32; 4],
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            bar_color: COLOR_FORECAST.to_string(),
            bar_opacity: 0.7,
            line_color: COLOR_ACTUAL.to_string(),
            line_dash: "dash".to_string(),
            background: "rgb(40, 40, 40)".to_string(),
            font_color: "white".to_string(),
            grid_color: "rgba(255, 255, 255, 0.1)".to_string(),
            grid_width: 0.5,
            margin: [50, 50, 50, 50],
        }
    }
}

/// Vertical marker at a summary statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub name: String,
    /// Yield in percent; serialized as `null` when not finite
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub histogram_norm: String,
    pub series_name: String,
    pub show_legend: bool,
    pub histogram: Histogram,
    pub reference_lines: Vec<ReferenceLine>,
    pub theme: ChartTheme,
}

impl ChartSpec {
    pub fn build(yields: &[f64], summary: &YieldSummary, bins: usize, theme: ChartTheme) -> Self {
        Self {
            title: "ABS Swap-Adjusted Yield Distribution".to_string(),
            x_axis_title: "Yield (%)".to_string(),
            y_axis_title: "Probability".to_string(),
            histogram_norm: "probability".to_string(),
            series_name: "Yield Distribution".to_string(),
            show_legend: true,
            histogram: Histogram::probability(yields, bins),
            reference_lines: vec![
                ReferenceLine { name: "Median Yield".to_string(), x: summary.median },
                ReferenceLine { name: "95% CI Lower".to_string(), x: summary.ci_lower },
                ReferenceLine { name: "95% CI Upper".to_string(), x: summary.ci_upper },
            ],
            theme,
        }
    }
}

/// Writes a pretty-printed [`ChartSpec`] to the wrapped writer
pub struct ChartSpecPresenter<W: Write> {
    out: W,
    bins: usize,
    theme: ChartTheme,
}

impl<W: Write> ChartSpecPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            bins: DEFAULT_BINS,
            theme: ChartTheme::default(),
        }
    }

    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DistributionPresenter for ChartSpecPresenter<W> {
    fn present(&mut self, yields: &[f64], summary: &YieldSummary) -> Result<()> {
        let spec = ChartSpec::build(yields, summary, self.bins, self.theme.clone());
        serde_json::to_writer_pretty(&mut self.out, &spec)?;
        writeln!(self.out)?;
        Ok(())
    }
}
