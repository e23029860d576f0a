//! Mock ZAP API client for testing
//!
//! Provides a mock implementation of the API trait for unit testing
//! without a running daemon.

use std::collections::HashMap;

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::models::Alert;
use super::ZapApi;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockZapClient::new()
///     .with_spider_progress(vec![40, 100]).await
///     .with_alerts(vec![test_alert("SQL Injection", "High")]).await;
///
/// let id = mock.start_spider("http://example.com").await?;
/// assert_eq!(mock.spider_status(&id).await?, 40);
/// ```
pub struct MockZapClient {
    /// Version to return from version()
    daemon_version: Arc<Mutex<String>>,
    /// Progress values returned by successive spider_status calls.
    /// The last value repeats; an empty sequence reports 100 at once.
    spider_progress: Arc<Mutex<Vec<u8>>>,
    /// Progress values returned by successive active_scan_status calls
    scan_progress: Arc<Mutex<Vec<u8>>>,
    /// Alerts to return from alerts()
    alerts: Arc<Mutex<Vec<Alert>>>,
    /// Errors keyed by method name, each consumed on first use
    errors: Arc<Mutex<HashMap<&'static str, ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured calls, in order, for test assertions
    captured_calls: Arc<Mutex<Vec<CapturedCall>>>,
}

impl Default for MockZapClient {
    fn default() -> Self {
        Self {
            daemon_version: Arc::new(Mutex::new("2.14.0".to_string())),
            spider_progress: Arc::new(Mutex::new(Vec::new())),
            scan_progress: Arc::new(Mutex::new(Vec::new())),
            alerts: Arc::new(Mutex::new(Vec::new())),
            errors: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub version: usize,
    pub start_spider: usize,
    pub spider_status: usize,
    pub start_active_scan: usize,
    pub active_scan_status: usize,
    pub save_session: usize,
    pub alerts: usize,
    pub shutdown: usize,
}

/// A captured API call for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedCall {
    /// The API method called, e.g. "start_spider"
    pub method: String,
    /// Argument passed, if the method takes one
    pub arg: Option<String>,
}

/// Pop the next progress value, holding at the last one. An unconfigured
/// sequence reports immediate completion.
fn next_progress(seq: &mut Vec<u8>) -> u8 {
    if seq.is_empty() {
        100
    } else if seq.len() == 1 {
        seq[0]
    } else {
        seq.remove(0)
    }
}

impl MockZapClient {
    /// Create a new mock client that completes every stage at once.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the daemon version returned from version().
    #[allow(dead_code)]
    pub async fn with_version(self, version: &str) -> Self {
        *self.daemon_version.lock().await = version.to_string();
        self
    }

    /// Configure the progress sequence reported for the spider.
    pub async fn with_spider_progress(self, progress: Vec<u8>) -> Self {
        *self.spider_progress.lock().await = progress;
        self
    }

    /// Configure the progress sequence reported for the active scan.
    pub async fn with_scan_progress(self, progress: Vec<u8>) -> Self {
        *self.scan_progress.lock().await = progress;
        self
    }

    /// Configure alerts to return from alerts().
    pub async fn with_alerts(self, alerts: Vec<Alert>) -> Self {
        *self.alerts.lock().await = alerts;
        self
    }

    /// Configure an error for the named method's next call.
    /// The error is consumed after one use.
    pub async fn with_error_on(self, method: &'static str, error: ApiError) -> Self {
        self.errors.lock().await.insert(method, error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured calls, in order, for test assertions.
    pub async fn captured_calls(&self) -> Vec<CapturedCall> {
        self.captured_calls.lock().await.clone()
    }

    /// Just the method names, in call order.
    pub async fn called_methods(&self) -> Vec<String> {
        self.captured_calls
            .lock()
            .await
            .iter()
            .map(|c| c.method.clone())
            .collect()
    }

    /// Check for a pending error on this method and consume it.
    async fn check_error(&self, method: &str) -> Result<()> {
        let mut errors = self.errors.lock().await;
        if let Some(e) = errors.remove(method) {
            return Err(e.into());
        }
        Ok(())
    }

    /// Record a call for test assertions.
    async fn capture(&self, method: &str, arg: Option<&str>) {
        let mut calls = self.captured_calls.lock().await;
        calls.push(CapturedCall {
            method: method.to_string(),
            arg: arg.map(|s| s.to_string()),
        });
    }
}

#[async_trait]
impl ZapApi for MockZapClient {
    async fn version(&self) -> Result<String> {
        self.capture("version", None).await;
        self.check_error("version").await?;

        let mut counts = self.call_count.lock().await;
        counts.version += 1;

        Ok(self.daemon_version.lock().await.clone())
    }

    async fn start_spider(&self, target: &str) -> Result<String> {
        self.capture("start_spider", Some(target)).await;
        self.check_error("start_spider").await?;

        let mut counts = self.call_count.lock().await;
        counts.start_spider += 1;

        Ok("1".to_string())
    }

    async fn spider_status(&self, scan_id: &str) -> Result<u8> {
        self.capture("spider_status", Some(scan_id)).await;
        self.check_error("spider_status").await?;

        let mut counts = self.call_count.lock().await;
        counts.spider_status += 1;
        drop(counts);

        Ok(next_progress(&mut *self.spider_progress.lock().await))
    }

    async fn start_active_scan(&self, target: &str) -> Result<String> {
        self.capture("start_active_scan", Some(target)).await;
        self.check_error("start_active_scan").await?;

        let mut counts = self.call_count.lock().await;
        counts.start_active_scan += 1;

        Ok("2".to_string())
    }

    async fn active_scan_status(&self, scan_id: &str) -> Result<u8> {
        self.capture("active_scan_status", Some(scan_id)).await;
        self.check_error("active_scan_status").await?;

        let mut counts = self.call_count.lock().await;
        counts.active_scan_status += 1;
        drop(counts);

        Ok(next_progress(&mut *self.scan_progress.lock().await))
    }

    async fn save_session(&self, name: &str) -> Result<()> {
        self.capture("save_session", Some(name)).await;
        self.check_error("save_session").await?;

        let mut counts = self.call_count.lock().await;
        counts.save_session += 1;

        Ok(())
    }

    async fn alerts(&self, base_url: &str) -> Result<Vec<Alert>> {
        self.capture("alerts", Some(base_url)).await;
        self.check_error("alerts").await?;

        let mut counts = self.call_count.lock().await;
        counts.alerts += 1;
        drop(counts);

        Ok(self.alerts.lock().await.clone())
    }

    async fn shutdown(&self) -> Result<()> {
        self.capture("shutdown", None).await;
        self.check_error("shutdown").await?;

        let mut counts = self.call_count.lock().await;
        counts.shutdown += 1;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::test_alert;

    #[tokio::test]
    async fn test_mock_client_defaults_complete_immediately() {
        let mock = MockZapClient::new();

        let id = mock.start_spider("http://example.com").await.unwrap();
        assert_eq!(mock.spider_status(&id).await.unwrap(), 100);

        let id = mock.start_active_scan("http://example.com").await.unwrap();
        assert_eq!(mock.active_scan_status(&id).await.unwrap(), 100);

        let alerts = mock.alerts("http://example.com").await.unwrap();
        assert!(alerts.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_progress_sequence_drains_then_holds() {
        let mock = MockZapClient::new()
            .with_spider_progress(vec![10, 60, 100])
            .await;

        assert_eq!(mock.spider_status("1").await.unwrap(), 10);
        assert_eq!(mock.spider_status("1").await.unwrap(), 60);
        assert_eq!(mock.spider_status("1").await.unwrap(), 100);
        assert_eq!(mock.spider_status("1").await.unwrap(), 100);
    }

    #[tokio::test]
    async fn test_mock_client_with_alerts() {
        let mock = MockZapClient::new()
            .with_alerts(vec![test_alert("SQL Injection", "High")])
            .await;

        let alerts = mock.alerts("http://example.com").await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].name, "SQL Injection");
    }

    #[tokio::test]
    async fn test_mock_client_error_on_method_consumed_once() {
        let mock = MockZapClient::new()
            .with_error_on("save_session", ApiError::Network("down".to_string()))
            .await;

        // Other methods are unaffected
        assert!(mock.start_spider("http://example.com").await.is_ok());

        // First save fails, second succeeds
        assert!(mock.save_session("ZAP_1").await.is_err());
        assert!(mock.save_session("ZAP_2").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_captures_calls_in_order() {
        let mock = MockZapClient::new();

        mock.start_spider("http://example.com").await.unwrap();
        mock.spider_status("1").await.unwrap();
        mock.shutdown().await.unwrap();

        let calls = mock.captured_calls().await;
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].method, "start_spider");
        assert_eq!(calls[0].arg.as_deref(), Some("http://example.com"));
        assert_eq!(calls[1].method, "spider_status");
        assert_eq!(calls[2].method, "shutdown");
        assert_eq!(calls[2].arg, None);
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockZapClient::new();

        mock.version().await.unwrap();
        mock.version().await.unwrap();
        mock.shutdown().await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.version, 2);
        assert_eq!(counts.shutdown, 1);
        assert_eq!(counts.start_spider, 0);
    }
}
