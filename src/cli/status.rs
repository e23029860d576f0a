//! Status command implementation

use std::path::PathBuf;

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::{ZapApi, ZapClient};
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration and daemon status
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "ZapOp Configuration Status".bold());

    let (config_path, config_result) = match opts.config_ref() {
        Some(path) => {
            let path = PathBuf::from(path);
            (path.clone(), Config::load_from(path))
        }
        None => (Config::default_path()?, Config::load_or_default()),
    };

    let mut config = match config_result {
        Ok(config) => {
            if config_path.exists() {
                println!("Config file: {}", config_path.display().to_string().cyan());
            } else {
                println!("{} No config file yet (using defaults)", "○".dimmed());
                println!("  → Run 'zapop init' to create one");
            }
            config
        }
        Err(err) => {
            println!("{} Could not load configuration: {}", "✗".red(), err);
            println!();
            println!(
                "Run {} to create a configuration file.",
                "zapop init".cyan()
            );
            println!();
            return Ok(());
        }
    };

    if let Some(host) = opts.host_ref() {
        config.host = host.to_string();
    }
    if let Some(port) = opts.port {
        config.port = port;
    }
    if let Some(key) = opts.api_key_ref() {
        config.api_key = Some(key.to_string());
    }

    println!();
    println!(
        "Daemon address: {}",
        format!("http://{}:{}", config.host, config.port).cyan()
    );

    // API key status
    if config.api_key.is_some() {
        println!("{} API key configured", "✓".green());
    } else {
        println!(
            "{} No API key (daemon must run with api.disablekey=true)",
            "○".dimmed()
        );
    }

    // Default target status
    match config.target_url {
        Some(ref target) => println!("{} Default target: {}", "✓".green(), target),
        None => {
            println!("{} No default target set", "○".dimmed());
            println!("  → Pass a TARGET argument to 'zapop scan'");
        }
    }

    if !config.ignored_alerts.is_empty() {
        println!(
            "{} Ignored alerts: {}",
            "○".dimmed(),
            config.ignored_alerts.join(", ").dimmed()
        );
    }

    // Probe the daemon. An unreachable daemon is status information here,
    // not a failure.
    println!();
    let client = ZapClient::new(&config.host, config.port, config.api_key.clone())?;
    match client.version().await {
        Ok(version) => println!(
            "{} ZAP daemon reachable (version {})",
            "✓".green(),
            version
        ),
        Err(err) => {
            println!("{} ZAP daemon not reachable: {}", "✗".red(), err);
            println!(
                "  → Start it with 'zap.sh -daemon -port {}' and retry",
                config.port
            );
        }
    }

    println!();

    Ok(())
}
