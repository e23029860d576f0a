//! Configuration management for ZapOp

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host the ZAP daemon listens on
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the ZAP daemon listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// ZAP API key, if the daemon requires one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Default target URL to scan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,

    /// Directory alert reports are written to
    #[serde(default = "default_report_dir")]
    pub report_dir: String,

    /// Alert names excluded from the fail-on-alerts decision
    #[serde(default)]
    pub ignored_alerts: Vec<String>,

    /// Fail scan runs when non-ignored alerts are present
    #[serde(default)]
    pub fail_on_alerts: bool,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Initial delay between progress polls, in seconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Overall deadline for each scan stage, in seconds. Zero waits forever.
    #[serde(default = "default_max_wait")]
    pub max_wait_secs: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_report_dir() -> String {
    "zap-reports".to_string()
}

fn default_poll_interval() -> u64 {
    1
}

fn default_max_wait() -> u64 {
    1800
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            poll_interval_secs: default_poll_interval(),
            max_wait_secs: default_max_wait(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".zapop").join("config.yaml"))
    }

    /// Load from the default path, falling back to defaults when no file exists
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::default_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Serialize config
        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        // Write to file
        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: None,
            target_url: None,
            report_dir: default_report_dir(),
            ignored_alerts: Vec::new(),
            fail_on_alerts: false,
            preferences: Preferences::default(),
        }
    }
}
