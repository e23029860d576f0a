//! Shared CLI argument types
//!
//! This module provides the argument structs and enums shared across command
//! handlers, eliminating the need to thread individual flags through every
//! handler signature.

use clap::{Args, ValueEnum};

use crate::cli::Cli;

/// Output format for CLI results
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-friendly table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file, ignoring unknown values
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Scan behavior flags
#[derive(Debug, Clone, Args, Default)]
pub struct ScanArgs {
    /// Skip the spider stage
    #[arg(long)]
    pub skip_spider: bool,

    /// Skip the active scan stage
    #[arg(long)]
    pub skip_scan: bool,

    /// Do not save the daemon session
    #[arg(long)]
    pub skip_session: bool,

    /// Leave the daemon running after the scan
    #[arg(long)]
    pub keep_running: bool,

    /// Do not write the alert report file
    #[arg(long)]
    pub no_report: bool,

    /// Exit with code 2 when alerts remain after the ignore list is applied
    #[arg(long)]
    pub fail_on_alerts: bool,

    /// Alert names to ignore, comma-separated or repeated
    #[arg(long = "ignore-alert", value_delimiter = ',')]
    pub ignore_alerts: Vec<String>,

    /// Directory alert reports are written to
    #[arg(long)]
    pub report_dir: Option<String>,

    /// Seconds between progress polls
    #[arg(long)]
    pub poll_interval: Option<u64>,

    /// Overall wait limit per stage in seconds, 0 to wait forever
    #[arg(long)]
    pub max_wait: Option<u64>,
}

/// Global CLI options passed to all command handlers.
///
/// This struct consolidates all global flags from the CLI into a single unit,
/// making handler signatures cleaner and more maintainable. When new global
/// options are added, only this struct and `main.rs` need to change.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file values are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format, when given on the command line or via environment
    pub format: Option<OutputFormat>,

    /// ZAP daemon host override (bypasses config file)
    pub host: Option<String>,

    /// ZAP daemon port override (bypasses config file)
    pub port: Option<u16>,

    /// ZAP API key override (bypasses config file)
    pub api_key: Option<String>,

    /// Custom config file path (defaults to ~/.zapop/config.yaml)
    pub config: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    ///
    /// This is the primary constructor, called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            host: cli.host.clone(),
            port: cli.port,
            api_key: cli.api_key.clone(),
            config: cli.config.clone(),
        }
    }

    /// Get the host override as `Option<&str>`.
    pub fn host_ref(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Get the API key override as `Option<&str>`.
    pub fn api_key_ref(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get the config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
