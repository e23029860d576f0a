//! Scan command implementation

use std::path::PathBuf;
use std::sync::Mutex;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::cli::args::{GlobalOptions, OutputFormat, ScanArgs};
use crate::cli::context::CommandContext;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::json;
use crate::scan::{self, PollSettings, ScanObserver, ScanOutcome, ScanSettings, Stage};

/// Renders stage progress as a console progress bar
struct ConsoleObserver {
    enabled: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleObserver {
    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            bar: Mutex::new(None),
        }
    }
}

impl ScanObserver for ConsoleObserver {
    fn stage_started(&self, stage: Stage) {
        if !self.enabled {
            return;
        }

        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  {spinner:.cyan} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        bar.set_message(stage.name().to_string());

        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    fn stage_progress(&self, _stage: Stage, percent: u8) {
        if let Ok(slot) = self.bar.lock() {
            if let Some(bar) = slot.as_ref() {
                bar.set_position(percent as u64);
            }
        }
    }

    fn stage_completed(&self, stage: Stage) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_with_message(format!("{} complete", stage.name()));
            }
        }
    }
}

/// Combine config defaults and command-line flags into scan settings
fn build_settings(config: &Config, target: String, args: &ScanArgs) -> ScanSettings {
    let mut ignored = config.ignored_alerts.clone();
    ignored.extend(args.ignore_alerts.iter().cloned());

    ScanSettings {
        target_url: target,
        spider: !args.skip_spider,
        active_scan: !args.skip_scan,
        save_session: !args.skip_session,
        shutdown: !args.keep_running,
        report_alerts: !args.no_report,
        fail_on_alerts: args.fail_on_alerts || config.fail_on_alerts,
        ignored_alerts: ignored,
        report_dir: PathBuf::from(args.report_dir.as_deref().unwrap_or(&config.report_dir)),
        poll: PollSettings::from_secs(
            args.poll_interval
                .unwrap_or(config.preferences.poll_interval_secs),
            args.max_wait.unwrap_or(config.preferences.max_wait_secs),
        ),
    }
}

/// Scan outcome for JSON output
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanSummary<'a> {
    target_url: &'a str,
    spidered: bool,
    scanned: bool,
    session: Option<&'a str>,
    report_path: Option<String>,
    reported: usize,
    required: usize,
    ignored: usize,
}

impl<'a> ScanSummary<'a> {
    fn new(target_url: &'a str, outcome: &'a ScanOutcome) -> Self {
        Self {
            target_url,
            spidered: outcome.spidered,
            scanned: outcome.scanned,
            session: outcome.session.as_deref(),
            report_path: outcome
                .report_path
                .as_ref()
                .map(|path| path.display().to_string()),
            reported: outcome.reported,
            required: outcome.required,
            ignored: outcome.ignored,
        }
    }
}

/// Print the human-readable run summary
fn print_summary(outcome: &ScanOutcome) {
    println!();
    if outcome.spidered {
        println!("{} Spider finished", "✓".green());
    }
    if outcome.scanned {
        println!("{} Active scan finished", "✓".green());
    }
    if let Some(session) = &outcome.session {
        println!("{} Session saved as {}", "✓".green(), session);
    }

    let counts = format!(
        "{} reported, {} required, {} ignored",
        outcome.reported, outcome.required, outcome.ignored
    );
    if outcome.required > 0 {
        println!("{} Alerts: {}", "⚠".yellow(), counts);
    } else {
        println!("{} Alerts: {}", "✓".green(), counts);
    }

    if let Some(path) = &outcome.report_path {
        println!("{} Alert report: {}", "✓".green(), path.display());
    }
}

/// Run the scan command
pub async fn run(opts: &GlobalOptions, target: Option<&str>, args: &ScanArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let target = ctx.require_target(target)?;
    let settings = build_settings(&ctx.config, target, args);

    let console = ctx.format == OutputFormat::Table;
    if console {
        println!(
            "Scanning {} via {}\n",
            settings.target_url.bold(),
            ctx.client.base_url().cyan()
        );
    }

    let observer = ConsoleObserver::new(console);
    match scan::execute(&ctx.client, &settings, &observer).await {
        Ok(outcome) => {
            match ctx.format {
                OutputFormat::Table => print_summary(&outcome),
                OutputFormat::Json => {
                    let summary = ScanSummary::new(&settings.target_url, &outcome);
                    println!("{}", json::format_json(&summary)?);
                }
            }
            Ok(())
        }
        Err(err) => {
            // The report file is already on disk at this point, so point
            // at it before the error reaches the user.
            if console && matches!(err, Error::AlertsFound { .. }) && settings.report_alerts {
                println!(
                    "\n{} Alert details in {}",
                    "✗".red(),
                    settings.report_dir.display()
                );
            }
            Err(err)
        }
    }
}
