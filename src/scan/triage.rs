//! Partition reported alerts into ignored and required sets

use crate::client::Alert;

/// Result of partitioning reported alerts against an ignore list
#[derive(Debug, Default)]
pub struct Triage {
    /// Alerts whose names matched the ignore list
    pub ignored: Vec<Alert>,
    /// Alerts that require attention
    pub required: Vec<Alert>,
}

/// Split `alerts` into ignored and required partitions.
///
/// An alert is ignored when its name equals one of `ignored_names`,
/// compared case-insensitively on the full name. Input order is preserved
/// within each partition.
pub fn triage(alerts: Vec<Alert>, ignored_names: &[String]) -> Triage {
    let mut result = Triage::default();

    for alert in alerts {
        if is_ignored(&alert.name, ignored_names) {
            result.ignored.push(alert);
        } else {
            result.required.push(alert);
        }
    }

    result
}

/// Case-insensitive full-name match against the ignore list
fn is_ignored(name: &str, ignored_names: &[String]) -> bool {
    let name = name.to_lowercase();
    ignored_names.iter().any(|n| n.to_lowercase() == name)
}
