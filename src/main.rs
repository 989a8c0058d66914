use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use m3u_scout::{
    config::ScanConfig,
    playlist::{emitter, retag},
    scraper::catalog,
    utils::PoliteHttpClient,
};

#[derive(Parser)]
#[command(name = "m3u-scout")]
#[command(version = "0.1.0")]
#[command(about = "IPTV channel catalog scraper and M3U playlist re-tagger")]
#[command(long_about = None)]
struct Cli {
    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Discover channels and emit a JSON catalog plus an M3U playlist
    Scan {
        /// Catalog JSON path; reused without rescanning when it already exists
        #[arg(long, default_value = "daddylive_channels.json")]
        catalog: PathBuf,

        /// Output playlist path
        #[arg(short, long, default_value = "daddylive_all_channels.m3u")]
        output: PathBuf,
    },

    /// Rewrite group-title tags in an existing M3U playlist
    Retag {
        /// Input playlist
        #[arg(default_value = "tv.m3u")]
        input: PathBuf,

        /// Output playlist
        #[arg(default_value = "tv2.m3u")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("m3u_scout={}", cli.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Command::Scan { catalog, output } => {
            let config = ScanConfig {
                catalog_path: catalog,
                playlist_path: output,
                ..ScanConfig::default()
            };
            run_scan(config).await?;
        }
        Command::Retag { input, output } => {
            retag::retag_playlist(&input, &output)?;
        }
    }

    Ok(())
}

async fn run_scan(config: ScanConfig) -> Result<()> {
    let client = PoliteHttpClient::new(&config);
    let channels = catalog::load_or_scan(&client, &config).await?;

    info!("Found {} channels", channels.len());
    emitter::write_playlist(&channels, &config.playlist_path)?;

    Ok(())
}
