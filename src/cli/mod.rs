//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod alerts;
pub mod args;
pub mod context;
pub mod init;
pub mod scan;
pub mod status;

pub use args::{GlobalOptions, OutputFormat, ScanArgs};
pub use context::CommandContext;

/// ZapOp CLI - Build-pipeline companion for the OWASP ZAP daemon
#[derive(Parser, Debug)]
#[command(name = "zapop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "ZAPOP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override the ZAP daemon host
    #[arg(long, global = true, env = "ZAPOP_HOST", hide_env = true)]
    pub host: Option<String>,

    /// Override the ZAP daemon port
    #[arg(long, global = true, env = "ZAPOP_PORT", hide_env = true)]
    pub port: Option<u16>,

    /// Override the ZAP API key
    #[arg(long, global = true, env = "ZAPOP_API_KEY", hide_env = true)]
    pub api_key: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "ZAPOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ZAPOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize ZapOp configuration
    Init,

    /// Show configuration and daemon status
    Status,

    /// Display version information
    Version,

    /// Spider and actively scan a target
    #[command(after_help = "EXAMPLES:\n  \
        zapop scan                                   # Scan the configured default target\n  \
        zapop scan http://localhost:3000             # Full run against a target\n  \
        zapop scan --skip-spider http://app.test     # Active scan only\n  \
        zapop scan --fail-on-alerts --keep-running   # CI gate, daemon stays up\n  \
        zapop scan --ignore-alert \"X-Content-Type-Options Header Missing\"")]
    Scan {
        /// Target URL (defaults to target_url from the config file)
        target: Option<String>,

        #[command(flatten)]
        args: ScanArgs,
    },

    /// List alerts the daemon raised for a target
    #[command(after_help = "EXAMPLES:\n  \
        zapop alerts http://localhost:3000           # All alerts for the target\n  \
        zapop alerts --risk high                     # Only high risk alerts\n  \
        zapop alerts --format json | jq '.data'")]
    Alerts {
        /// Base URL alerts were raised under (defaults to target_url from the config file)
        target: Option<String>,

        /// Filter by risk level (high, medium, low, informational)
        #[arg(long)]
        risk: Option<String>,
    },

    /// Generate shell completions
    #[command(after_help = "\
Completions:
  bash:   zapop completion bash > /etc/bash_completion.d/zapop
  zsh:    zapop completion zsh > \"${fpath[1]}/_zapop\"
  fish:   zapop completion fish > ~/.config/fish/completions/zapop.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
