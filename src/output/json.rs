//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Envelope wrapping every `--format json` response.
///
/// Scripts consuming the CLI read the payload from `data`; `meta` carries
/// when the output was produced and by which CLI version.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Provenance metadata attached to JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// When the output was produced, RFC 3339
    pub timestamp: String,

    /// CLI version that produced it
    pub version: String,
}

impl<T> JsonOutput<T> {
    /// Wrap `data` with freshly generated metadata
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Serialize `data` inside the standard envelope, pretty-printed
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
