//! Alert report file generation

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::client::Alert;
use crate::error::Result;

/// JSON document written for each scan run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    generated_at: String,
    target_url: &'a str,
    summary: Summary,
    required_alerts: &'a [Alert],
    reported_alerts: &'a [Alert],
    ignored_alerts: &'a [Alert],
}

#[derive(Debug, Serialize)]
struct Summary {
    reported: usize,
    required: usize,
    ignored: usize,
}

/// Write the alert report for a run, returning the path created.
///
/// The report always carries all three lists, even when one is empty.
/// The file name embeds a timestamp; a numeric suffix keeps it unique
/// when two runs land in the same second.
pub fn write_report(
    dir: &Path,
    target_url: &str,
    required: &[Alert],
    reported: &[Alert],
    ignored: &[Alert],
) -> Result<PathBuf> {
    write_report_at(dir, target_url, required, reported, ignored, Local::now())
}

fn write_report_at(
    dir: &Path,
    target_url: &str,
    required: &[Alert],
    reported: &[Alert],
    ignored: &[Alert],
    generated_at: DateTime<Local>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let report = Report {
        generated_at: generated_at.to_rfc3339(),
        target_url,
        summary: Summary {
            reported: reported.len(),
            required: required.len(),
            ignored: ignored.len(),
        },
        required_alerts: required,
        reported_alerts: reported,
        ignored_alerts: ignored,
    };
    let body = serde_json::to_vec_pretty(&report)?;

    let stamp = generated_at.format("%Y%m%d%H%M%S");
    let mut attempt = 0u32;
    loop {
        let file_name = if attempt == 0 {
            format!("zap-alerts-{}.json", stamp)
        } else {
            format!("zap-alerts-{}-{}.json", stamp, attempt)
        };
        let path = dir.join(file_name);

        // create_new loses the race to an existing file, never overwrites it
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(&body)?;
                return Ok(path);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
