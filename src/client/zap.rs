//! ZAP JSON API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;

use super::{Alert, ZapApi};
use crate::error::{ApiError, Result};

/// Request timeout for individual API calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// ZAP JSON API client
#[derive(Debug)]
pub struct ZapClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

/// Error body the daemon returns for failed API calls
#[derive(Debug, Deserialize)]
struct ZapErrorBody {
    code: String,
    message: String,
}

impl ZapClient {
    /// Create a client for the daemon listening at `host:port`
    pub fn new(host: &str, port: u16, api_key: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: format!("http://{}:{}", host, port),
            api_key,
        })
    }

    /// Base URL of the daemon, e.g. `http://localhost:8080`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call a JSON API endpoint: `/JSON/<component>/<kind>/<name>/`
    async fn call<T: for<'de> Deserialize<'de>>(
        &self,
        component: &str,
        kind: &str,
        name: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let path = format!("/JSON/{}/{}/{}/", component, kind, name);
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(key) = &self.api_key {
            request = request.header("X-ZAP-API-Key", key);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized.into()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(path).into()),
            _ => {
                // Failed calls carry a JSON body with code and message,
                // served as 4xx or 5xx depending on the cause.
                let body = response.text().await.unwrap_or_default();
                if let Ok(err) = serde_json::from_str::<ZapErrorBody>(&body) {
                    return Err(ApiError::Remote {
                        code: err.code,
                        message: err.message,
                    }
                    .into());
                }
                if status.is_server_error() {
                    Err(ApiError::ServerError(format!("{}: {}", status, body)).into())
                } else {
                    Err(ApiError::InvalidResponse(format!("Unexpected status code: {}", status))
                        .into())
                }
            }
        }
    }
}

/// Parse a progress value the API reports as a decimal string
fn parse_percent(raw: &str) -> std::result::Result<u8, ApiError> {
    raw.trim().parse::<u8>().map_err(|_| {
        ApiError::InvalidResponse(format!("Progress value {:?} is not a percentage", raw))
    })
}

#[async_trait]
impl ZapApi for ZapClient {
    async fn version(&self) -> Result<String> {
        #[derive(Deserialize)]
        struct VersionResponse {
            version: String,
        }

        let response: VersionResponse = self.call("core", "view", "version", &[]).await?;
        Ok(response.version)
    }

    async fn start_spider(&self, target: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct ScanResponse {
            scan: String,
        }

        let response: ScanResponse = self
            .call("spider", "action", "scan", &[("url", target)])
            .await?;
        Ok(response.scan)
    }

    async fn spider_status(&self, scan_id: &str) -> Result<u8> {
        #[derive(Deserialize)]
        struct StatusResponse {
            status: String,
        }

        let response: StatusResponse = self
            .call("spider", "view", "status", &[("scanId", scan_id)])
            .await?;
        Ok(parse_percent(&response.status)?)
    }

    async fn start_active_scan(&self, target: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct ScanResponse {
            scan: String,
        }

        let response: ScanResponse = self
            .call(
                "ascan",
                "action",
                "scan",
                &[("url", target), ("recurse", "true"), ("inScopeOnly", "false")],
            )
            .await?;
        Ok(response.scan)
    }

    async fn active_scan_status(&self, scan_id: &str) -> Result<u8> {
        #[derive(Deserialize)]
        struct StatusResponse {
            status: String,
        }

        let response: StatusResponse = self
            .call("ascan", "view", "status", &[("scanId", scan_id)])
            .await?;
        Ok(parse_percent(&response.status)?)
    }

    async fn save_session(&self, name: &str) -> Result<()> {
        #[derive(Deserialize)]
        struct ActionResponse {
            #[serde(rename = "Result")]
            result: String,
        }

        let response: ActionResponse = self
            .call(
                "core",
                "action",
                "saveSession",
                &[("name", name), ("overwrite", "true")],
            )
            .await?;

        if response.result != "OK" {
            return Err(ApiError::InvalidResponse(format!(
                "saveSession returned {:?}",
                response.result
            ))
            .into());
        }
        Ok(())
    }

    async fn alerts(&self, base_url: &str) -> Result<Vec<Alert>> {
        #[derive(Deserialize)]
        struct AlertsResponse {
            alerts: Vec<Alert>,
        }

        let response: AlertsResponse = self
            .call("core", "view", "alerts", &[("baseurl", base_url)])
            .await?;
        Ok(response.alerts)
    }

    async fn shutdown(&self) -> Result<()> {
        #[derive(Deserialize)]
        struct ActionResponse {
            #[serde(rename = "Result")]
            #[allow(dead_code)]
            result: String,
        }

        let _: ActionResponse = self.call("core", "action", "shutdown", &[]).await?;
        Ok(())
    }
}
