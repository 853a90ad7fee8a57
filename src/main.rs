// src/main.rs
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sight_test_scraper::config::{load_config, Config};
use sight_test_scraper::DirectoryBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.yml: {e}. Using defaults.");
            Config::default()
        }
    };

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("sight_test_scraper=info".parse().unwrap()),
        )
        .init();

    // Create output directory
    tokio::fs::create_dir_all(&config.output.directory).await?;

    info!("Building the NHS sight-test directory...");
    let builder = DirectoryBuilder::new(config)?;

    // Add graceful shutdown
    tokio::select! {
        result = builder.run() => {
            let written = result?;
            info!("Done: {} city files written", written);
        }
        _ = signal::ctrl_c() => {
            warn!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}
