//! Test fixtures and builders for API model types
//!
//! Provides a builder for creating test alerts with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use super::models::Alert;

/// Builder for creating test Alert instances.
///
/// # Example
/// ```ignore
/// let alert = AlertBuilder::new("SQL Injection")
///     .risk("High")
///     .param("id")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct AlertBuilder {
    name: String,
    risk: String,
    confidence: String,
    url: String,
    param: String,
    plugin_id: String,
}

impl AlertBuilder {
    /// Create a new builder with the given alert name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            risk: "Medium".to_string(),
            confidence: "Medium".to_string(),
            url: "http://example.com/".to_string(),
            param: String::new(),
            plugin_id: "0".to_string(),
        }
    }

    /// Set the risk rating.
    pub fn risk(mut self, risk: impl Into<String>) -> Self {
        self.risk = risk.into();
        self
    }

    /// Set the confidence rating.
    pub fn confidence(mut self, confidence: impl Into<String>) -> Self {
        self.confidence = confidence.into();
        self
    }

    /// Set the URL the alert was raised against.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the offending parameter.
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    /// Set the plugin id.
    pub fn plugin_id(mut self, plugin_id: impl Into<String>) -> Self {
        self.plugin_id = plugin_id.into();
        self
    }

    /// Build the Alert.
    pub fn build(self) -> Alert {
        Alert {
            name: self.name,
            risk: self.risk,
            confidence: self.confidence,
            url: self.url,
            method: "GET".to_string(),
            param: self.param,
            attack: String::new(),
            evidence: String::new(),
            description: String::new(),
            solution: String::new(),
            reference: String::new(),
            cweid: String::new(),
            wascid: String::new(),
            plugin_id: self.plugin_id,
            alert_ref: String::new(),
        }
    }
}

/// Create a minimal test alert with a name and risk rating.
pub fn test_alert(name: &str, risk: &str) -> Alert {
    AlertBuilder::new(name).risk(risk).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_builder_defaults() {
        let alert = AlertBuilder::new("X-Frame-Options Header Not Set").build();
        assert_eq!(alert.name, "X-Frame-Options Header Not Set");
        assert_eq!(alert.risk, "Medium");
        assert_eq!(alert.method, "GET");
        assert!(alert.param.is_empty());
    }

    #[test]
    fn test_alert_builder_custom_fields() {
        let alert = AlertBuilder::new("SQL Injection")
            .risk("High")
            .confidence("High")
            .url("http://example.com/item?id=1")
            .param("id")
            .plugin_id("40018")
            .build();

        assert_eq!(alert.risk, "High");
        assert_eq!(alert.url, "http://example.com/item?id=1");
        assert_eq!(alert.param, "id");
        assert_eq!(alert.plugin_id, "40018");
    }

    #[test]
    fn test_convenience_function() {
        let alert = test_alert("Cross Site Scripting (Reflected)", "High");
        assert_eq!(alert.name, "Cross Site Scripting (Reflected)");
        assert_eq!(alert.risk, "High");
    }
}
