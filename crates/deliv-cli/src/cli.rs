//! CLI argument definitions for the delivery dashboards.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "deliv",
    version,
    about = "Delivery marketplace dashboards - clean and aggregate courier delivery data",
    long_about = "Clean a delivery events dataset and compute the aggregates behind the\n\
                  company, courier and restaurant dashboard views.\n\n\
                  Each view loads the CSV, normalizes it once, applies the sidebar\n\
                  filters and prints render-ready tables or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Company view: order volumes by day, week, traffic and city.
    Company(ViewArgs),

    /// Courier view: ages, vehicle conditions, ratings and leaderboards.
    Couriers(ViewArgs),

    /// Restaurant view: delivery distances and delivery-time statistics.
    Restaurants(ViewArgs),
}

#[derive(Parser)]
pub struct ViewArgs {
    /// Path to the delivery events CSV file.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Upper-bound order date (dd-mm-yyyy); orders on or after it are
    /// excluded.
    #[arg(long = "until", value_name = "DATE", default_value = "13-04-2022")]
    pub until: String,

    /// Traffic-density categories to keep.
    #[arg(
        long = "traffic",
        value_name = "LIST",
        value_delimiter = ',',
        default_value = "Low,Medium,High,Jam"
    )]
    pub traffic: Vec<String>,

    /// Report output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

/// Report output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
