//! # charlist Main Entry Point
//!
//! Opens the character list UI, or prints the list when asked for plain
//! output or when stdout is not a terminal.

use anyhow::{Context, Result};
use charlist::cmd_args::CommandLineArgs;
use charlist::config::{self, AppConfig};
use charlist::{run_plain, AppController, HttpCharacterSource};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{filter::Directive, fmt::time::ChronoLocal, EnvFilter};

const QUIET_DEPENDENCIES: &[&str] = &[
    "reqwest=warn",
    "hyper=warn",
    "hyper_util=warn",
    "rustls=warn",
    "tokio=warn",
    "mio=warn",
];

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    let plain = cmd_args.plain() || !atty::is(atty::Stream::Stdout);

    init_tracing_subscriber(plain)?;

    let profile_name = cmd_args.profile();
    let profile_path = config::get_profile_path();
    tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);
    let config = config::load_profile(profile_name, &profile_path)?
        .with_endpoint(cmd_args.endpoint());
    tracing::debug!("Resolved configuration: {:?}", config);

    if plain {
        run_plain_listing(&config, cmd_args.filter()).await
    } else {
        let mut app = AppController::new(&config)?;
        app.run().await
    }
}

async fn run_plain_listing(config: &AppConfig, filter: bool) -> Result<()> {
    let source = Arc::new(HttpCharacterSource::new(&config.source)?);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_plain(config, source, filter, &mut out).await
}

fn env_filter() -> EnvFilter {
    let mut filter = EnvFilter::try_from_env(config::LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("error"));
    for directive in QUIET_DEPENDENCIES {
        if let Ok(directive) = directive.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Plain mode logs to stderr; the UI owns the terminal, so it logs to a file.
fn init_tracing_subscriber(plain: bool) -> Result<()> {
    if plain {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_timer(ChronoLocal::rfc_3339())
            .init();
        return Ok(());
    }

    let log_path = config::get_log_file_path();
    if let Some(parent) = Path::new(&log_path).parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory '{}'", parent.display()))?;
    }
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file '{log_path}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
    Ok(())
}
