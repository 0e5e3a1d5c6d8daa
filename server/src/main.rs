//! Service entrypoint
//!
//! This is the binary that wires together all layers using dependency
//! injection: config, stores, seed data, and the HTTP server.

use anyhow::Result;
use clap::Parser;
use consult_infrastructure::{
    ConfigLoader, InMemoryConsultationStore, InMemoryQuestionStore, seed_demo_data,
};
use consult_presentation::{AppState, Cli, serve};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting consultation service");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // CLI flags override the config file
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.no_seed {
        config.seed_demo_data = false;
    }

    // === Dependency Injection ===
    let consultations = Arc::new(InMemoryConsultationStore::new());
    let questions = Arc::new(InMemoryQuestionStore::new());

    if config.seed_demo_data {
        seed_demo_data(consultations.as_ref(), questions.as_ref())?;
    }

    let state = AppState::new(consultations);

    serve(&config.server.bind_addr(), state).await?;

    Ok(())
}
