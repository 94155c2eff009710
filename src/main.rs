//! Snooze - Hack-or-Snooze client
//!
#![doc = "Main entry point for the snooze command-line client."]

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use snooze::api::ApiClient;
use snooze::cli::{Cli, Commands};
use snooze::commands;
use snooze::config::Config;
use snooze::session::{FileSessionStore, Session};

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    let command = cli.command.clone();
    if let Err(err) = run(cli).await {
        tracing::debug!("Command failed: {:#}", err);
        eprintln!("{}", commands::user_message(&command, &err).red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    let client = ApiClient::from_config(&config.api)?;
    let store = Arc::new(FileSessionStore::from_config(&config.session)?);
    tracing::debug!("Session file: {}", store.path().display());

    // Commands that replace or drop the session never need the stored one
    let mut session = match cli.command {
        Commands::Login { .. } | Commands::Signup { .. } | Commands::Logout => {
            Session::new(client, store)
        }
        _ => Session::restore(client, store).await?,
    };
    if let Some(user) = session.user() {
        tracing::info!("Resumed session for {}", user.username());
    }

    commands::dispatch(cli.command, &mut session).await
}

/// Initialize tracing subscriber
///
/// Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
/// takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "snooze=debug" } else { "snooze=warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
