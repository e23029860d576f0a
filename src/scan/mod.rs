//! Remote scan orchestration
//!
//! Drives the daemon through the scan sequence: spider, active scan,
//! session save, then alert triage and the fail-on-alerts decision.
//! Progress is surfaced through an observer so callers decide how to
//! render it.

use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::client::ZapApi;
use crate::error::{Error, Result};

pub mod poll;
pub mod report;
pub mod triage;

pub use poll::PollSettings;
pub use triage::{triage, Triage};

/// Stages of the scan sequence that report progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Spider,
    ActiveScan,
}

impl Stage {
    /// Stage name used in progress output and timeout errors
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Spider => "spider",
            Stage::ActiveScan => "active scan",
        }
    }
}

/// Receives progress callbacks while a scan runs.
///
/// The sequencer never prints; the CLI supplies an implementation that
/// renders progress bars.
pub trait ScanObserver {
    /// A stage started and will report progress up to 100
    fn stage_started(&self, _stage: Stage) {}

    /// Latest progress percentage for a running stage
    fn stage_progress(&self, _stage: Stage, _percent: u8) {}

    /// A stage reached 100 percent
    fn stage_completed(&self, _stage: Stage) {}
}

/// Observer that discards all progress events
pub struct SilentObserver;

impl ScanObserver for SilentObserver {}

/// Settings for one scan run
#[derive(Debug, Clone)]
pub struct ScanSettings {
    /// URL the spider and active scan start from
    pub target_url: String,

    /// Run the spider stage
    pub spider: bool,

    /// Run the active scan stage
    pub active_scan: bool,

    /// Save the daemon session after scanning
    pub save_session: bool,

    /// Ask the daemon to exit when the run ends
    pub shutdown: bool,

    /// Write the alert report file
    pub report_alerts: bool,

    /// Fail the run when required alerts remain
    pub fail_on_alerts: bool,

    /// Alert names excluded from the fail decision
    pub ignored_alerts: Vec<String>,

    /// Directory the report file is written into
    pub report_dir: PathBuf,

    /// Poll behavior for progress waits
    pub poll: PollSettings,
}

impl ScanSettings {
    /// Settings with every stage enabled and fail-on-alerts off
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            spider: true,
            active_scan: true,
            save_session: true,
            shutdown: true,
            report_alerts: true,
            fail_on_alerts: false,
            ignored_alerts: Vec::new(),
            report_dir: PathBuf::from("zap-reports"),
            poll: PollSettings::default(),
        }
    }
}

/// What happened during a scan run
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Spider stage ran to completion
    pub spidered: bool,

    /// Active scan stage ran to completion
    pub scanned: bool,

    /// Session name the daemon saved, when enabled
    pub session: Option<String>,

    /// Report file written for this run
    pub report_path: Option<PathBuf>,

    /// Total alerts the daemon reported
    pub reported: usize,

    /// Alerts requiring attention after the ignore list was applied
    pub required: usize,

    /// Alerts matched by the ignore list
    pub ignored: usize,
}

/// Run the scan sequence against `client` as configured by `settings`.
///
/// Stages run in order, each gated by its own toggle. Alerts are always
/// collected and triaged; the report toggle only gates the file write,
/// which is itself best-effort. When shutdown is enabled it is attempted
/// even after a failure, and a shutdown error never replaces the result
/// that preceded it.
pub async fn execute(
    client: &dyn ZapApi,
    settings: &ScanSettings,
    observer: &dyn ScanObserver,
) -> Result<ScanOutcome> {
    let result = run_stages(client, settings, observer).await;

    if settings.shutdown {
        log::debug!("Requesting daemon shutdown");
        if let Err(err) = client.shutdown().await {
            log::warn!("Failed to shut down ZAP daemon: {}", err);
        }
    }

    result
}

async fn run_stages(
    client: &dyn ZapApi,
    settings: &ScanSettings,
    observer: &dyn ScanObserver,
) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();

    if settings.spider {
        observer.stage_started(Stage::Spider);
        let scan_id = client.start_spider(&settings.target_url).await?;
        log::debug!("Spider started with scan id {}", scan_id);
        poll::wait_for_stage(client, Stage::Spider, &scan_id, &settings.poll, observer).await?;
        observer.stage_completed(Stage::Spider);
        outcome.spidered = true;
    } else {
        log::debug!("Skipping spider");
    }

    if settings.active_scan {
        observer.stage_started(Stage::ActiveScan);
        let scan_id = client.start_active_scan(&settings.target_url).await?;
        log::debug!("Active scan started with scan id {}", scan_id);
        poll::wait_for_stage(client, Stage::ActiveScan, &scan_id, &settings.poll, observer)
            .await?;
        observer.stage_completed(Stage::ActiveScan);
        outcome.scanned = true;
    } else {
        log::debug!("Skipping active scan");
    }

    if settings.save_session {
        let name = session_name(Local::now());
        client.save_session(&name).await?;
        log::debug!("Session saved as {}", name);
        outcome.session = Some(name);
    } else {
        log::debug!("Skipping session save");
    }

    let reported = client.alerts(&settings.target_url).await?;
    let result = triage(reported.clone(), &settings.ignored_alerts);

    outcome.reported = reported.len();
    outcome.required = result.required.len();
    outcome.ignored = result.ignored.len();

    if settings.report_alerts {
        match report::write_report(
            &settings.report_dir,
            &settings.target_url,
            &result.required,
            &reported,
            &result.ignored,
        ) {
            Ok(path) => outcome.report_path = Some(path),
            Err(err) => log::warn!("Failed to write alert report: {}", err),
        }
    }

    if settings.fail_on_alerts && !result.required.is_empty() {
        return Err(Error::AlertsFound {
            count: result.required.len(),
        });
    }

    Ok(outcome)
}

/// Session names carry the start timestamp, e.g. ZAP_20240131093000
fn session_name(now: DateTime<Local>) -> String {
    format!("ZAP_{}", now.format("%Y%m%d%H%M%S"))
}
