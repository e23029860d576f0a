//! Progress polling with backoff and a deadline

use std::time::{Duration, Instant};

use super::{ScanObserver, Stage};
use crate::client::ZapApi;
use crate::error::{Error, Result};

/// Cap for the backoff between polls
const MAX_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Polling behavior for a scan stage
#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    /// Initial delay between polls; doubles after each poll up to a cap
    pub interval: Duration,
    /// Overall deadline per stage; None waits until the daemon finishes
    pub timeout: Option<Duration>,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            timeout: Some(Duration::from_secs(1800)),
        }
    }
}

impl PollSettings {
    /// Build settings from config-level seconds. A zero wait disables the
    /// deadline; the poll interval has a floor of one second.
    pub fn from_secs(interval_secs: u64, max_wait_secs: u64) -> Self {
        Self {
            interval: Duration::from_secs(interval_secs.max(1)),
            timeout: (max_wait_secs > 0).then(|| Duration::from_secs(max_wait_secs)),
        }
    }
}

/// Next delay after a poll, doubling up to the cap
fn next_interval(current: Duration) -> Duration {
    (current * 2).min(MAX_POLL_INTERVAL)
}

/// Poll the daemon until `stage` reports 100 percent.
///
/// The status is checked once before the first sleep, so an already
/// finished stage never waits. Deadline expiry surfaces as a Timeout
/// error naming the stage.
pub async fn wait_for_stage(
    client: &dyn ZapApi,
    stage: Stage,
    scan_id: &str,
    settings: &PollSettings,
    observer: &dyn ScanObserver,
) -> Result<()> {
    let started = Instant::now();
    let mut interval = settings.interval;

    loop {
        let percent = match stage {
            Stage::Spider => client.spider_status(scan_id).await?,
            Stage::ActiveScan => client.active_scan_status(scan_id).await?,
        };
        observer.stage_progress(stage, percent);

        if percent >= 100 {
            return Ok(());
        }

        if let Some(timeout) = settings.timeout {
            if started.elapsed() >= timeout {
                return Err(Error::Timeout {
                    stage: stage.name(),
                    waited: timeout,
                });
            }
        }

        tokio::time::sleep(interval).await;
        interval = next_interval(interval);
    }
}
