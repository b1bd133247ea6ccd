//! Yield sample and percentile reductions

use serde::{Deserialize, Serialize};

/// Lower bound of the 95% confidence interval
pub const CI_LOWER_PERCENTILE: f64 = 2.5;
/// Upper bound of the 95% confidence interval
pub const CI_UPPER_PERCENTILE: f64 = 97.5;

/// Simulated total yields (percent), one per trial, in trial order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldSample {
    values: Vec<f64>,
}

impl YieldSample {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Copy of the sample in ascending IEEE total order (NaN sorts to the ends)
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Percentile by linear interpolation between order statistics
    pub fn percentile(&self, p: f64) -> f64 {
        percentile_sorted(&self.sorted(), p)
    }

    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Population standard deviation
    pub fn std_dev(&self) -> f64 {
        let mean = self.mean();
        let variance = self
            .values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / self.values.len() as f64;
        variance.sqrt()
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Median and 95% confidence bounds
    pub fn summarize(&self) -> YieldSummary {
        let sorted = self.sorted();
        YieldSummary {
            median: percentile_sorted(&sorted, 50.0),
            ci_lower: percentile_sorted(&sorted, CI_LOWER_PERCENTILE),
            ci_upper: percentile_sorted(&sorted, CI_UPPER_PERCENTILE),
        }
    }
}

/// Median and 95% confidence interval of a yield sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldSummary {
    pub median: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
}

impl YieldSummary {
    /// Width of the confidence interval in percentage points
    pub fn ci_width(&self) -> f64 {
        self.ci_upper - self.ci_lower
    }

    /// True when any statistic is NaN or infinite
    pub fn is_degenerate(&self) -> bool {
        !(self.median.is_finite() && self.ci_lower.is_finite() && self.ci_upper.is_finite())
    }
}

/// Percentile of an ascending slice at rank `p / 100 * (n - 1)`
///
/// Interpolates linearly between the two neighbouring order statistics.
/// Returns NaN for an empty slice.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }

    let frac = rank - lower as f64;
    let (a, b) = (sorted[lower], sorted[upper]);
    // a + (b - a) * frac keeps equal neighbours exact
    a + (b - a) * frac
}
