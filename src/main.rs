//! ABS swap-adjusted yield CLI
//!
//! With no arguments runs the reference deal (5% coupon, 3% fixed swap against
//! a 2.5% +/- 0.5% floating leg, twelve monthly cash flows of 1000) and prints
//! the median yield and 95% confidence interval followed by a text histogram.

use abs_swap_yield::inputs::{load_cash_flows, load_request, SimulationRequest};
use abs_swap_yield::presenter::{ChartSpecPresenter, CsvPresenter, TextPresenter, DEFAULT_BINS};
use abs_swap_yield::{DistributionPresenter, SimulationReport, ValidationMode, YieldSimulator};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "abs-yield", version, about = "Monte Carlo swap-adjusted ABS yield distribution")]
struct Args {
    /// JSON request file; flags below override its fields
    #[arg(long)]
    input: Option<PathBuf>,

    /// ABS coupon rate in percent
    #[arg(long)]
    abs_coupon: Option<f64>,

    /// Fixed swap rate in percent
    #[arg(long)]
    swap_fixed: Option<f64>,

    /// Mean floating rate in percent
    #[arg(long, allow_negative_numbers = true)]
    swap_float_mean: Option<f64>,

    /// Floating rate volatility in percent
    #[arg(long, allow_negative_numbers = true)]
    swap_float_std: Option<f64>,

    /// Number of periods in a flat schedule
    #[arg(long)]
    periods: Option<usize>,

    /// Cash flow per period in a flat schedule
    #[arg(long, allow_negative_numbers = true)]
    cash_flow: Option<f64>,

    /// CSV schedule with a CashFlow column
    #[arg(long)]
    cash_flows_csv: Option<PathBuf>,

    /// Number of Monte Carlo trials
    #[arg(long)]
    simulations: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Reject degenerate inputs instead of reporting NaN yields
    #[arg(long)]
    strict: bool,

    /// Histogram bins
    #[arg(long, default_value_t = DEFAULT_BINS)]
    bins: usize,

    /// Write histogram bins to this CSV file
    #[arg(long)]
    histogram_csv: Option<PathBuf>,

    /// Write a chart specification to this JSON file
    #[arg(long)]
    chart_json: Option<PathBuf>,

    /// Print a JSON report instead of text output
    #[arg(long)]
    json: bool,

    /// Include every simulated yield in the JSON report
    #[arg(long)]
    include_yields: bool,
}

/// Merge the request file and command-line overrides
fn build_request(args: &Args) -> Result<SimulationRequest> {
    let mut request = match &args.input {
        Some(path) => load_request(path)
            .with_context(|| format!("Failed to load request {}", path.display()))?,
        None => SimulationRequest::default(),
    };

    if let Some(v) = args.abs_coupon {
        request.abs_coupon = v;
    }
    if let Some(v) = args.swap_fixed {
        request.swap_fixed = v;
    }
    if let Some(v) = args.swap_float_mean {
        request.swap_float_mean = v;
    }
    if let Some(v) = args.swap_float_std {
        request.swap_float_std = v;
    }

    if let Some(path) = &args.cash_flows_csv {
        request.cash_flows = load_cash_flows(path)
            .with_context(|| format!("Failed to load cash flows {}", path.display()))?;
    } else if args.periods.is_some() || args.cash_flow.is_some() {
        let periods = args.periods.unwrap_or(request.cash_flows.len());
        let amount = args.cash_flow.unwrap_or(1000.0);
        request.cash_flows = vec![amount; periods];
    }

    if let Some(n) = args.simulations {
        request.num_simulations = n;
    }
    if args.seed.is_some() {
        request.seed = args.seed;
    }
    request.strict |= args.strict;

    Ok(request)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let request = build_request(&args)?;
    let input = request.input();
    let config = request.config();

    info!(
        "Running {} simulations over {} periods ({:?} validation)",
        config.num_simulations,
        input.num_periods(),
        config.validation
    );
    if config.validation == ValidationMode::Permissive && input.total_investment() == 0.0 {
        info!("Cash flows sum to zero; yields will be undefined");
    }

    let simulator = YieldSimulator::new(config.clone());
    let result = simulator.simulate(&input).context("Simulation failed")?;

    if args.json {
        let report = SimulationReport::new(&input, &config, &result, args.include_yields);
        println!("{}", report.to_json()?);
    } else {
        println!("Median Yield: {:.2}%", result.median());
        println!("95% CI: [{:.2}%, {:.2}%]", result.ci_lower(), result.ci_upper());
        println!();

        let stdout = io::stdout();
        let mut presenter = TextPresenter::new(stdout.lock()).with_bins(args.bins);
        presenter.present_result(&result)?;
    }

    if let Some(path) = &args.histogram_csv {
        let file = File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        CsvPresenter::new(BufWriter::new(file))
            .with_bins(args.bins)
            .present_result(&result)?;
        info!("Histogram written to {}", path.display());
    }

    if let Some(path) = &args.chart_json {
        let file = File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        let mut presenter = ChartSpecPresenter::new(BufWriter::new(file)).with_bins(args.bins);
        presenter.present_result(&result)?;
        presenter.into_inner().flush()?;
        info!("Chart specification written to {}", path.display());
    }

    Ok(())
}
