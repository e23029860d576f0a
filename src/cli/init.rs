//! Init command implementation

use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{ZapApi, ZapClient};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Walks through the daemon connection settings and writes the config file.
/// The daemon does not need to be running; a failed probe only prints a
/// warning so build images can be initialized offline.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to ZapOp!".bold().green());
    println!("Let's set up your ZAP daemon connection.\n");

    // Start from the existing config so re-running init keeps prior answers
    // as prompt defaults. Host/port flags seed the prompts too.
    let mut config = match opts.config_ref() {
        Some(path) => Config::load_from(PathBuf::from(path)).unwrap_or_default(),
        None => Config::load_or_default().unwrap_or_default(),
    };
    if let Some(host) = opts.host_ref() {
        config.host = host.to_string();
    }
    if let Some(port) = opts.port {
        config.port = port;
    }

    let host: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("ZAP daemon host")
        .default(config.host.clone())
        .interact_text()?;

    let port: u16 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("ZAP daemon port")
        .default(config.port)
        .interact_text()?;

    let needs_key = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Does the daemon require an API key?")
        .default(config.api_key.is_some())
        .interact()?;

    let api_key = if needs_key {
        let key: String = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter the ZAP API key")
            .interact()?;
        Some(key)
    } else {
        None
    };

    let target: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Default target URL (leave empty to pass one per scan)")
        .default(config.target_url.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    config.host = host;
    config.port = port;
    config.api_key = api_key;
    config.target_url = if target.is_empty() { None } else { Some(target) };

    // Probe the daemon so typos surface immediately
    println!("\n{}", "Checking the daemon...".cyan());
    let client = ZapClient::new(&config.host, config.port, config.api_key.clone())?;
    match client.version().await {
        Ok(version) => println!("{} Found ZAP {}", "✓".green(), version),
        Err(err) => {
            println!("{} Could not reach the daemon: {}", "⚠".yellow(), err);
            println!("  Settings are saved anyway; start ZAP before scanning.");
        }
    }

    let config_path = match opts.config_ref() {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };
    config.save_to(config_path.clone())?;

    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!(
        "  {} - Show daemon and configuration status",
        "zapop status".cyan()
    );
    println!(
        "  {} - Spider and scan a target",
        "zapop scan http://localhost:3000".cyan()
    );

    Ok(())
}
