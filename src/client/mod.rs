//! ZAP JSON API client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod zap;

#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockZapClient;
pub use models::Alert;
pub use zap::ZapClient;

/// ZAP JSON API client trait
///
/// One method per daemon endpoint the CLI drives. Progress views return the
/// percentage already parsed, so callers never see the API's string-typed
/// numbers.
#[async_trait]
pub trait ZapApi: Send + Sync {
    /// Daemon version (`core/view/version`)
    async fn version(&self) -> Result<String>;

    /// Start a spider crawl of `target`, returning the spider scan id
    async fn start_spider(&self, target: &str) -> Result<String>;

    /// Spider progress for `scan_id` as a percentage (0..=100)
    async fn spider_status(&self, scan_id: &str) -> Result<u8>;

    /// Start an active scan of `target`, returning the scan id
    async fn start_active_scan(&self, target: &str) -> Result<String>;

    /// Active scan progress for `scan_id` as a percentage (0..=100)
    async fn active_scan_status(&self, scan_id: &str) -> Result<u8>;

    /// Persist the daemon's current session under `name`
    async fn save_session(&self, name: &str) -> Result<()>;

    /// Alerts raised for URLs under `base_url`
    async fn alerts(&self, base_url: &str) -> Result<Vec<Alert>>;

    /// Ask the daemon process to exit
    async fn shutdown(&self) -> Result<()>;
}
