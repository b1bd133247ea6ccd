//! ASCII histogram for terminals

use std::io::Write;

use super::{DistributionPresenter, Histogram, DEFAULT_BINS};
use crate::error::Result;
use crate::simulation::YieldSummary;

const BAR_WIDTH: usize = 50;

/// Renders the distribution as a horizontal bar chart, marking the bins
/// that hold the median and the confidence bounds
pub struct TextPresenter<W: Write> {
    out: W,
    bins: usize,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            bins: DEFAULT_BINS,
        }
    }

    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DistributionPresenter for TextPresenter<W> {
    fn present(&mut self, yields: &[f64], summary: &YieldSummary) -> Result<()> {
        let hist = Histogram::probability(yields, self.bins);

        writeln!(self.out, "ABS Swap-Adjusted Yield Distribution")?;
        if hist.is_empty() {
            writeln!(self.out, "(no finite yields to display)")?;
            return Ok(());
        }

        writeln!(self.out, "{:>19}   {:<width$} {:>11}", "Yield (%)", "", "Probability", width = BAR_WIDTH)?;
        writeln!(self.out, "{}", "-".repeat(19 + 3 + BAR_WIDTH + 12))?;

        let markers = [
            (hist.bin_index(summary.ci_lower), "95% CI Lower"),
            (hist.bin_index(summary.median), "Median Yield"),
            (hist.bin_index(summary.ci_upper), "95% CI Upper"),
        ];
        let scale = hist.max_probability();

        for (i, bin) in hist.bins.iter().enumerate() {
            let len = if scale > 0.0 {
                (bin.probability / scale * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let labels: Vec<&str> = markers
                .iter()
                .filter(|(idx, _)| *idx == Some(i))
                .map(|(_, label)| *label)
                .collect();

            write!(
                self.out,
                "{:>8.3} - {:>8.3} | {:<width$} {:>10.4}",
                bin.lower,
                bin.upper,
                "#".repeat(len),
                bin.probability,
                width = BAR_WIDTH
            )?;
            if labels.is_empty() {
                writeln!(self.out)?;
            } else {
                writeln!(self.out, "  <- {}", labels.join(", "))?;
            }
        }

        if hist.excluded > 0 {
            writeln!(self.out, "({} non-finite yields not shown)", hist.excluded)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::YieldSample;

    fn render(values: Vec<f64>) -> String {
        let sample = YieldSample::new(values);
        let mut presenter = TextPresenter::new(Vec::new()).with_bins(5);
        presenter.present(sample.values(), &sample.summarize()).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_marks_reference_bins() {
        let output = render((0..100).map(|i| i as f64 / 10.0).collect());
        assert!(output.starts_with("ABS Swap-Adjusted Yield Distribution"));
        assert!(output.contains("Median Yield"));
        assert!(output.contains("95% CI Lower"));
        assert!(output.contains("95% CI Upper"));
        assert!(output.contains('#'));
    }

    #[test]
    fn test_constant_sample_marks_single_bin() {
        let output = render(vec![4.0; 20]);
        assert!(output.contains("<- 95% CI Lower, Median Yield, 95% CI Upper"));
    }

    #[test]
    fn test_degenerate_sample() {
        let output = render(vec![f64::NAN; 10]);
        assert!(output.contains("no finite yields"));
    }
}
