//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, override resolution, and client initialization.

use std::path::PathBuf;

use crate::cli::args::{GlobalOptions, OutputFormat};
use crate::client::ZapClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
#[derive(Debug)]
pub struct CommandContext {
    /// Effective configuration after CLI overrides
    pub config: Config,
    /// Client for the daemon's JSON API
    pub client: ZapClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// This handles:
    /// - Loading config from path (or the default location)
    /// - Applying host, port, and API key overrides
    /// - Resolving the output format (flag/env, then config file, then table)
    /// - Creating the API client
    ///
    /// An explicit `--config` path must exist; the default location falls
    /// back to built-in defaults when no file has been written yet.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = match opts.config_ref() {
            Some(path) => Config::load_from(PathBuf::from(path))?,
            None => Config::load_or_default()?,
        };

        if let Some(host) = opts.host_ref() {
            config.host = host.to_string();
        }
        if let Some(port) = opts.port {
            config.port = port;
        }
        if let Some(key) = opts.api_key_ref() {
            config.api_key = Some(key.to_string());
        }

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_name)
            })
            .unwrap_or_default();

        let client = ZapClient::new(&config.host, config.port, config.api_key.clone())?;

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Get the scan target from an explicit argument or the config default.
    ///
    /// Use this in commands that need a target URL.
    pub fn require_target(&self, target: Option<&str>) -> Result<String> {
        target
            .map(str::to_string)
            .or_else(|| self.config.target_url.clone())
            .ok_or_else(|| crate::error::ConfigError::MissingTarget.into())
    }
}
