//! CLI argument definitions for the attachment exporter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use smartsheet_cli::config::ConfigOverrides;

#[derive(Parser)]
#[command(
    name = "smartsheet-attachments",
    version,
    about = "Export Smartsheet row attachments to CSV",
    long_about = "Export every row of a Smartsheet sheet with its attachments to CSV.\n\n\
                  Writes one line per attachment (or one line for a row without any)\n\
                  with columns row_id, row_number, primary_value, attachment_id,\n\
                  attachment_name.\n\n\
                  Reads SMARTSHEET_API (required), SHEET_ID, SMARTSHEET_OUTPUT_CSV and\n\
                  SMARTSHEET_API_BASE_URL from the environment or a .env file."
)]
pub struct Cli {
    /// Load environment variables from this file instead of searching for `.env`.
    #[arg(long = "env-file", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Sheet to export (overrides SHEET_ID).
    #[arg(long = "sheet-id", value_name = "ID")]
    pub sheet_id: Option<String>,

    /// CSV file to write (overrides SMARTSHEET_OUTPUT_CSV).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Smartsheet API root (overrides SMARTSHEET_API_BASE_URL).
    #[arg(long = "api-base-url", value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Include cell values in log output (redacted by default).
    #[arg(long = "log-data")]
    pub log_data: bool,
}

impl Cli {
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            sheet_id: self.sheet_id.clone(),
            output: self.output.clone(),
            api_base_url: self.api_base_url.clone(),
        }
    }
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
