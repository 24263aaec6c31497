//! CLI argument definitions for the listing analysis tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "listing-analysis",
    version,
    about = "Normalize marketplace listing spreadsheets into a Rithum upload workbook",
    long_about = "Normalize marketplace listing spreadsheets into a Rithum upload workbook.\n\n\
                  Scans a listing file for target column coverage, fills gaps from a\n\
                  supplemental file and global defaults, and writes the canonical sheet\n\
                  with its ItemVendor, Item, Pack and ItemUPC companions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report which target columns a listing file already fills.
    Scan(ScanArgs),

    /// Reconcile a listing file and write the analysis workbook.
    Generate(GenerateArgs),

    /// List the target columns and the fields that accept defaults.
    Columns,
}

#[derive(Parser)]
pub struct ScanArgs {
    /// Listing file (xlsx, xls, xlsb, ods or csv).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Sheet to read instead of the detected listing sheet.
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Print the scan report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Listing file (xlsx, xls, xlsb, ods or csv).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Sheet to read instead of the detected listing sheet.
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Per-item data used to fill gaps before global defaults (first sheet only).
    #[arg(long = "supplemental", value_name = "FILE")]
    pub supplemental: Option<PathBuf>,

    /// Run configuration file (TOML).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Global default for a target column, as COLUMN=VALUE (repeatable).
    #[arg(long = "default", value_name = "COLUMN=VALUE")]
    pub defaults: Vec<String>,

    /// Harmonized code stamped on every Item sheet row.
    #[arg(long = "harmonized-code", value_name = "CODE")]
    pub harmonized_code: Option<String>,

    /// Origin country stamped on every Item sheet row.
    #[arg(long = "origin-country", value_name = "CC")]
    pub origin_country: Option<String>,

    /// Output directory (default: the listing file's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Build and summarize the workbook without writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
