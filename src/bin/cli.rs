//! Creator Insights CLI
//!
//! Command-line access to the same backend the web front-end uses:
//! - Fetch trending audio
//! - Generate a config file
//! - Check the effective configuration

use anyhow::Context;
use clap::{Parser, Subcommand};
use creator_insights::{generate_default_config, BackendClient, Config, Session, TrendQuery};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "creator-insights-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line tools for Creator Insights")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch trending audio and print it as JSON
    Trends {
        /// Only show trends for this niche
        #[arg(short, long)]
        niche: Option<String>,
        /// Session cookie value to send with the request
        #[arg(short, long, env = "INSIGHTS_ACCESS_TOKEN")]
        access: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load and validate the configuration, then print it
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Trends { niche, access } => {
            let config = load_config(cli.config.as_ref())?;
            config.validate()?;

            let client = BackendClient::new(&config.backend)?;
            let session = access.map(|value| Session::new(&config.session.cookie_name, value));

            let payload = client
                .get_trending_audio(&TrendQuery::new(niche), session.as_ref())
                .await
                .context("fetching trending audio")?;

            println!("{}", serde_json::to_string_pretty(&payload)?);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {:?}", path))?;
                    eprintln!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }

        Commands::CheckConfig => {
            let config = load_config(cli.config.as_ref())?;
            config.validate()?;
            print!("{}", toml::to_string_pretty(&config)?);
            eprintln!("Configuration OK");
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_with_env(path).with_context(|| format!("loading {:?}", path)),
        None => Ok(Config::load_default().0),
    }
}
