//! Histogram export as CSV

use csv::Writer;
use std::io::Write;

use super::{DistributionPresenter, Histogram, DEFAULT_BINS};
use crate::error::Result;
use crate::simulation::YieldSummary;

/// Writes one `lower,upper,count,probability` row per histogram bin
pub struct CsvPresenter<W: Write> {
    writer: Writer<W>,
    bins: usize,
}

impl<W: Write> CsvPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: Writer::from_writer(out),
            bins: DEFAULT_BINS,
        }
    }

    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> DistributionPresenter for CsvPresenter<W> {
    fn present(&mut self, yields: &[f64], _summary: &YieldSummary) -> Result<()> {
        let hist = Histogram::probability(yields, self.bins);
        for bin in &hist.bins {
            self.writer.serialize(bin)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
