//! Probability-normalized histogram of a yield sample

use serde::{Deserialize, Serialize};

/// A single histogram bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    /// Share of the finite sample falling in this bin
    pub probability: f64,
}

/// Equal-width histogram whose bin probabilities sum to one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    /// Values left out of the binning because they are NaN or infinite
    pub excluded: usize,
}

impl Histogram {
    /// Bin the finite values of `values` into `num_bins` equal-width bins
    ///
    /// A constant sample collapses to a single bin holding everything.
    pub fn probability(values: &[f64], num_bins: usize) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let excluded = values.len() - finite.len();

        if finite.is_empty() || num_bins == 0 {
            return Self {
                bins: Vec::new(),
                excluded,
            };
        }

        let min_val = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max_val = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let n = finite.len() as f64;

        if max_val - min_val <= f64::EPSILON * max_val.abs().max(1.0) {
            return Self {
                bins: vec![HistogramBin {
                    lower: min_val,
                    upper: max_val,
                    count: finite.len(),
                    probability: 1.0,
                }],
                excluded,
            };
        }

        let bin_width = (max_val - min_val) / num_bins as f64;
        let mut bins: Vec<HistogramBin> = (0..num_bins)
            .map(|i| HistogramBin {
                lower: min_val + i as f64 * bin_width,
                upper: if i == num_bins - 1 {
                    max_val
                } else {
                    min_val + (i + 1) as f64 * bin_width
                },
                count: 0,
                probability: 0.0,
            })
            .collect();

        for &val in &finite {
            let idx = (((val - min_val) / bin_width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }
        for bin in &mut bins {
            bin.probability = bin.count as f64 / n;
        }

        Self { bins, excluded }
    }

    /// Index of the bin containing `value`, if any
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        if !value.is_finite() {
            return None;
        }
        let last = self.bins.len().checked_sub(1)?;
        self.bins
            .iter()
            .position(|b| value >= b.lower && value < b.upper)
            .or_else(|| {
                let end = &self.bins[last];
                (value >= end.lower && value <= end.upper).then_some(last)
            })
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Largest bin probability, used to scale bars
    pub fn max_probability(&self) -> f64 {
        self.bins.iter().map(|b| b.probability).fold(0.0, f64::max)
    }
}
