//! ZapOp CLI - Build-pipeline companion for the OWASP ZAP daemon

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod error;
mod output;
mod scan;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(err.exit_code());
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts).await,
        Commands::Version => {
            println!("zapop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Scan { target, args } => cli::scan::run(&opts, target.as_deref(), &args).await,
        Commands::Alerts { target, risk } => {
            cli::alerts::run(&opts, target.as_deref(), risk.as_deref()).await
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "zapop", &mut std::io::stdout());
            Ok(())
        }
    }
}
