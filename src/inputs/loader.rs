//! Load cash-flow schedules from CSV

use csv::Reader;
use log::debug;
use serde::Deserialize;
use std::path::Path;

use crate::error::{Result, YieldError};

/// Raw CSV row; `Period` is optional
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Period", default)]
    period: Option<u32>,
    #[serde(rename = "CashFlow")]
    cash_flow: f64,
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<f64>> {
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        rows.push(row);
    }

    let with_period = rows.iter().filter(|r| r.period.is_some()).count();
    if with_period > 0 && with_period < rows.len() {
        return Err(YieldError::invalid_input(
            "Period",
            "column must be filled for every row or for none",
        ));
    }
    if with_period > 0 {
        rows.sort_by_key(|r| r.period);
    }

    debug!("Loaded {} cash-flow periods", rows.len());
    Ok(rows.into_iter().map(|r| r.cash_flow).collect())
}

/// Load a cash-flow schedule from a CSV file with a `CashFlow` column
///
/// When a `Period` column is present the rows are ordered by it.
pub fn load_cash_flows<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    collect_rows(Reader::from_path(path)?)
}

/// Load a cash-flow schedule from any reader (e.g., string buffer, stdin)
pub fn load_cash_flows_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<f64>> {
    collect_rows(Reader::from_reader(reader))
}
