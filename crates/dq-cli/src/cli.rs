//! CLI argument definitions for the dq validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dq",
    version,
    about = "dq - Validate tabular datasets against governance rules",
    long_about = "Validate delimited datasets against rules resolved from governance\n\
                  metadata.\n\n\
                  Supports record count bounds, date format, and card number format\n\
                  checks, with optional feedback delivery back to the governance API."
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

    /// Allow raw cell values (card numbers) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a data file against the configured rules.
    Check(CheckArgs),

    /// List the supported rule kinds and their config keys.
    Rules,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the delimited data file to validate.
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Validation config file (rule id map, column bindings, flag field).
    #[arg(long = "config", value_name = "PATH")]
    pub config: PathBuf,

    /// Read the metadata payload from a file instead of the API.
    #[arg(long = "metadata", value_name = "PATH")]
    pub metadata: Option<PathBuf>,

    /// Base URL of the governance API.
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Environment variable holding the API key.
    #[arg(long = "api-key-env", value_name = "VAR", default_value = "DQ_API_KEY")]
    pub api_key_env: String,

    /// Deliver field flag feedback for failed card number checks.
    #[arg(long = "send-feedback")]
    pub send_feedback: bool,

    /// Write a JSON validation report to this path.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,
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
