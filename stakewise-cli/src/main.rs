//! Stakewise CLI — position sizing and portfolio allocation commands.
//!
//! Commands:
//! - `size` — risk-based quantity for one trade from entry/stop/target prices
//! - `allocate` — split capital across a sector/company tree read from a file
//!
//! Both print a summary followed by the chart series, or a single JSON
//! document with `--output json`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use stakewise_core::{
    allocate, size, AllocationForm, ChartSeries, EngineConfig, Palette, SizingForm, Stamped,
    Summarize, Summary, ToSeries,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stakewise",
    about = "Stakewise CLI — position sizing and portfolio allocation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size one trade from capital, risk %, and entry/stop/target prices.
    Size {
        /// Entry price.
        #[arg(long)]
        entry: String,

        /// Stop-loss price (below entry for longs, above for shorts).
        #[arg(long)]
        stop: String,

        /// Target price.
        #[arg(long)]
        target: String,

        /// Percent of capital to risk, in (0, 100].
        #[arg(long)]
        risk: String,

        /// Total capital available.
        #[arg(long)]
        capital: String,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Allocate capital across sectors and companies described in a TOML or JSON file.
    Allocate {
        /// Path to the allocation request (.toml or .json).
        #[arg(long)]
        request: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Path to a TOML engine config (currency, grouping, palette).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Output::Text)]
    output: Output,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    Text,
    Html,
    Json,
}

/// JSON document printed with `--output json`.
#[derive(Serialize)]
struct Report<'a, T> {
    result: &'a Stamped<T>,
    summary: Summary,
    chart: ChartSeries,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Size {
            entry,
            stop,
            target,
            risk,
            capital,
            common,
        } => {
            let form = SizingForm {
                entry_price: entry,
                stop_loss: stop,
                target_price: target,
                risk_percentage: risk,
                total_capital: capital,
            };
            run_size(&form, &common)
        }
        Commands::Allocate { request, common } => run_allocate(&request, &common),
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(p) => Ok(EngineConfig::from_file(p)?),
        None => Ok(EngineConfig::default()),
    }
}

fn run_size(form: &SizingForm, common: &CommonArgs) -> Result<()> {
    let config = load_config(common.config.as_deref())?;
    let input = form.parse()?;
    let result = size(&input)?;
    tracing::info!(quantity = result.quantity, clamped = result.clamped, "sized position");

    let stamped = Stamped::new(&input, result)?;
    emit(&stamped, &config, common.output)
}

fn run_allocate(path: &Path, common: &CommonArgs) -> Result<()> {
    let config = load_config(common.config.as_deref())?;
    let form = read_allocation_form(path)?;
    let request = form.parse()?;
    let summary = allocate(&request)?;
    tracing::info!(
        lines = summary.lines.len(),
        cash_in_hand = summary.cash_in_hand,
        "allocated portfolio"
    );

    let stamped = Stamped::new(&request, summary)?;
    emit(&stamped, &config, common.output)
}

fn read_allocation_form(path: &Path) -> Result<AllocationForm> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let form: AllocationForm = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        _ => bail!(
            "unsupported request file '{}': expected a .toml or .json extension",
            path.display()
        ),
    };
    Ok(form)
}

fn emit<T>(stamped: &Stamped<T>, config: &EngineConfig, output: Output) -> Result<()>
where
    T: Summarize + ToSeries + Serialize,
{
    let palette: Palette = config.chart.palette();
    let summary = stamped.value.summarize(&config.format);
    let chart = stamped.value.to_series(&palette);

    match output {
        Output::Text => {
            print!("{}", summary.to_text());
            println!();
            println!("--- Chart ---");
            print!("{}", chart.to_text());
        }
        Output::Html => {
            print!("{}", summary.to_html());
            println!("<table class=\"chart\">");
            for point in &chart.points {
                println!(
                    "<tr><td style=\"color: {}\">{}</td><td>{:.2}</td></tr>",
                    stakewise_core::format::escape_html(&point.color),
                    stakewise_core::format::escape_html(&point.label),
                    point.value
                );
            }
            println!("</table>");
        }
        Output::Json => {
            let report = Report {
                result: stamped,
                summary,
                chart,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
