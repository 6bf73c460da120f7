//! CLI type definitions
//!
//! This module contains the clap structure that defines the CLI interface.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::infrastructure::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "storj-addon")]
#[command(about = "Resolve and validate the Storj add-on startup configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Addon manifest to take Heroku defaults from (defaults to the bundled copy)
    #[arg(short, long, env = "ADDON_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// YAML file layered between the defaults and the environment
    #[arg(short, long, env = "STORJ_ADDON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormatArg::Json)]
    pub log_format: LogFormatArg,

    /// Output in JSON format; stdout becomes JSON Lines with the settings last
    #[arg(short, long)]
    pub json: bool,
}

impl Cli {
    /// Log format actually installed
    ///
    /// `--json` forces JSON log records so every stdout line parses as JSON.
    pub fn effective_log_format(&self) -> LogFormat {
        if self.json {
            LogFormat::Json
        } else {
            self.log_format.into()
        }
    }
}

/// Log format as accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormatArg {
    /// One JSON object per line
    Json,
    /// Multi-line human readable output
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Json => Self::Json,
            LogFormatArg::Pretty => Self::Pretty,
        }
    }
}
