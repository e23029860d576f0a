//! Alert listing command

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::{GlobalOptions, OutputFormat};
use crate::cli::context::CommandContext;
use crate::client::{Alert, ZapApi};
use crate::error::Result;
use crate::output::{json, table};

/// Alert display model for the alerts table
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AlertDisplay {
    /// Alert name
    #[tabled(rename = "ALERT")]
    pub name: String,

    /// Risk level (High, Medium, Low, Informational)
    #[tabled(rename = "RISK")]
    pub risk: String,

    /// Confidence level
    #[tabled(rename = "CONFIDENCE")]
    pub confidence: String,

    /// Affected URL
    #[tabled(rename = "URL")]
    pub url: String,

    /// Affected parameter
    #[tabled(rename = "PARAM")]
    pub param: String,
}

impl From<&Alert> for AlertDisplay {
    fn from(alert: &Alert) -> Self {
        Self {
            name: truncate_string(&alert.name, 40),
            risk: alert.risk.clone(),
            confidence: alert.confidence.clone(),
            url: truncate_string(&alert.url, 50),
            param: truncate_string(&alert.param, 20),
        }
    }
}

/// Truncate string to max length with ellipsis
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Case-insensitive risk filter (high, medium, low, informational)
fn matches_risk(alert: &Alert, risk: &str) -> bool {
    alert.risk.eq_ignore_ascii_case(risk)
}

/// Run the alerts command
pub async fn run(opts: &GlobalOptions, target: Option<&str>, risk: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let target = ctx.require_target(target)?;

    let mut alerts = ctx.client.alerts(&target).await?;

    if let Some(risk) = risk {
        alerts.retain(|alert| matches_risk(alert, risk));
    }

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<AlertDisplay> = alerts.iter().map(AlertDisplay::from).collect();
            println!("{}", table::format_table(&rows));
            if !alerts.is_empty() {
                println!(
                    "{}",
                    format!("{} alert(s) for {}", alerts.len(), target).dimmed()
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&alerts)?);
        }
    }

    Ok(())
}
