//! Creator Insights Web Server
//!
//! Run with: cargo run --bin creator-insights
//!
//! Configuration is read from `--config`, or the default locations, with
//! environment overrides applied on top. See [`creator_insights::config`].
//! Command-line flags win over both.

use anyhow::Context;
use clap::Parser;
use creator_insights::{logging, serve, AppState, Config, ConfigSource};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "creator-insights")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Web front-end for trending audio and hashtag insights")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Backend API origin
    #[arg(long)]
    api_base: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, source) = match &args.config {
        Some(path) => (
            Config::load_with_env(path)
                .with_context(|| format!("loading config from {:?}", path))?,
            ConfigSource::explicit(path),
        ),
        None => Config::load_default(),
    };

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(api_base) = args.api_base {
        config.backend.api_base = api_base;
    }

    config.validate()?;

    logging::init(&config.logging);
    source.log();

    tracing::info!("Starting Creator Insights v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Backend API: {}", config.backend.api_base);
    tracing::info!("Session cookie: {}", config.session.cookie_name);

    let state = AppState::new(config)?;
    serve(state).await?;

    tracing::info!("Creator Insights stopped");
    Ok(())
}
