//! Serde models for ZAP API responses

use serde::{Deserialize, Serialize};

/// A single alert raised by the scanner.
///
/// Field names follow the JSON the daemon emits from `core/view/alerts`.
/// Everything except the name is optional in practice; the daemon omits or
/// blanks fields depending on the plugin that raised the alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Alert name, e.g. "Cross Site Scripting (Reflected)"
    #[serde(rename = "alert")]
    pub name: String,

    /// Risk rating: Informational, Low, Medium or High
    #[serde(default)]
    pub risk: String,

    /// Scanner confidence in the finding
    #[serde(default)]
    pub confidence: String,

    /// URL the alert was raised against
    #[serde(default)]
    pub url: String,

    /// HTTP method of the offending request
    #[serde(default)]
    pub method: String,

    /// Parameter the payload was injected into
    #[serde(default)]
    pub param: String,

    /// Attack payload used
    #[serde(default)]
    pub attack: String,

    /// Response evidence backing the finding
    #[serde(default)]
    pub evidence: String,

    /// Long-form description
    #[serde(default)]
    pub description: String,

    /// Suggested remediation
    #[serde(default)]
    pub solution: String,

    /// Reference links
    #[serde(default)]
    pub reference: String,

    /// CWE identifier
    #[serde(default)]
    pub cweid: String,

    /// WASC identifier
    #[serde(default)]
    pub wascid: String,

    /// Scanner plugin that raised the alert
    #[serde(default, rename = "pluginId")]
    pub plugin_id: String,

    /// Stable alert reference, e.g. "40012-1"
    #[serde(default, rename = "alertRef")]
    pub alert_ref: String,
}
