//! CLI argument definitions for the survey ETL.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mmis-etl",
    version,
    about = "Maternal mental health & infant sleep survey ETL",
    long_about = "Normalize a raw maternal mental health survey export into two analysis \
                  tables.\n\n\
                  Produces participant.csv (demographics and infant sleep, categorical \
                  codes decoded) and mental_health.csv (instrument items), one row per \
                  participant."
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
    /// Process a survey export and write the two output tables.
    Run(RunArgs),

    /// List the categorical decode tables.
    Codes,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the raw survey export CSV.
    #[arg(value_name = "SURVEY_CSV")]
    pub survey_csv: PathBuf,

    /// Output directory (default: <SURVEY_CSV's directory>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Field delimiter of the export.
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = ',')]
    pub delimiter: char,

    /// Header rows in the export (2 for two-level question headers).
    #[arg(
        long = "header-rows",
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=2)
    )]
    pub header_rows: u8,

    /// Process and report without writing output files.
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
