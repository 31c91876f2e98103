//! RegimeLab CLI — validate OHLCV data and run the regime-switching backtest.
//!
//! Commands:
//! - `run` — load a daily OHLCV CSV, run the strategy, print the tail of
//!   the report and optionally export the full report as CSV
//! - `validate` — boundary validation only: report the input error or
//!   the accepted bar count and date range
//!
//! CSV schema: `date,open,high,low,close,volume` with ISO dates.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use regimelab_core::domain::{Bar, BarSeries};
use regimelab_core::strategy::{run_strategy, ReportRow, RunReport, StrategyParams};

#[derive(Parser)]
#[command(
    name = "regimelab",
    about = "RegimeLab CLI — ADX regime-switching strategy backtest"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the backtest over a daily OHLCV CSV file.
    Run {
        /// Path to the input CSV (date,open,high,low,close,volume).
        #[arg(long)]
        data: PathBuf,

        /// Path to a TOML file with strategy parameters. Defaults apply
        /// to any parameter the file omits; no file means all defaults.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of trailing report rows to print.
        #[arg(long, default_value_t = 20)]
        tail: usize,

        /// Write the full report to this CSV path.
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Validate a CSV against the input contract without running.
    Validate {
        /// Path to the input CSV.
        #[arg(long)]
        data: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            data,
            config,
            tail,
            export,
        } => run_cmd(&data, config.as_deref(), tail, export.as_deref()),
        Commands::Validate { data } => validate_cmd(&data),
    }
}

fn run_cmd(
    data: &Path,
    config: Option<&Path>,
    tail: usize,
    export: Option<&Path>,
) -> Result<()> {
    let series = load_bars(data)?;
    let params = load_params(config)?;

    let report = run_strategy(&series, &params)
        .with_context(|| format!("invalid strategy parameters for {}", data.display()))?;

    print_summary(&series, &report);
    print_tail(&report, tail);

    if let Some(path) = export {
        export_report(&report, path)?;
        println!("Report written to: {}", path.display());
    }

    Ok(())
}

fn validate_cmd(data: &Path) -> Result<()> {
    match load_bars(data) {
        Ok(series) => {
            println!(
                "OK: {} bars, {} to {}",
                series.len(),
                series.first_date(),
                series.last_date()
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("Rejected: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Read and validate a daily OHLCV CSV. Any contract violation is fatal.
fn load_bars(path: &Path) -> Result<BarSeries> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut bars = Vec::new();
    for (line, record) in reader.deserialize::<Bar>().enumerate() {
        let bar = record.with_context(|| format!("malformed CSV record {}", line + 1))?;
        bars.push(bar);
    }

    let series = BarSeries::new(bars)
        .with_context(|| format!("input contract violated in {}", path.display()))?;
    Ok(series)
}

/// Load strategy parameters from an optional TOML file.
fn load_params(path: Option<&Path>) -> Result<StrategyParams> {
    let params = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => StrategyParams::default(),
    };
    Ok(params)
}

fn print_summary(series: &BarSeries, report: &RunReport) {
    println!("Run:          {}", report.run_id);
    println!(
        "Bars:         {} ({} to {})",
        series.len(),
        series.first_date(),
        series.last_date()
    );
    println!("Total return: {:+.2}%", report.total_return() * 100.0);
    println!();
}

fn print_tail(report: &RunReport, tail: usize) {
    let start = report.rows.len().saturating_sub(tail);
    println!(
        "{:<12} {:>10} {:>8} {:>10} {:>10} {:>10} {:>4} {:>9} {:>9}",
        "date", "close", "adx", "ma_short", "ma_long", "bb_mid", "pos", "ret", "cum"
    );
    for row in &report.rows[start..] {
        println!("{}", format_row(row));
    }
}

fn format_row(row: &ReportRow) -> String {
    format!(
        "{:<12} {:>10.2} {:>8} {:>10} {:>10} {:>10} {:>4} {:>8.3}% {:>8.2}%",
        row.date,
        row.close,
        format_opt(row.adx, 2),
        format_opt(row.ma_short, 2),
        format_opt(row.ma_long, 2),
        format_opt(row.bb_middle, 2),
        row.final_position,
        row.strategy_return * 100.0,
        row.cumulative_return * 100.0,
    )
}

/// Undefined values print as a dash, never as zero.
fn format_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "-".to_string(),
    }
}

fn export_report(report: &RunReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for row in &report.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
