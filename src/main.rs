use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tripplanner::{GeminiClient, GooglePlacesClient, PlannerConfig, TripPlanService, telemetry, web};

/// AI travel itinerary planner with verified place details
#[derive(Debug, Parser)]
#[command(name = "tripplanner", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on, overrides the config file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PlannerConfig::load_from_path(cli.config)?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let _telemetry = telemetry::init(&config.logging)?;
    info!("Starting tripplanner {}", tripplanner::VERSION);

    let places = Arc::new(GooglePlacesClient::new(&config.places)?);
    let generator = Arc::new(GeminiClient::new(&config.generation)?);
    let service = Arc::new(TripPlanService::new(generator, places));

    web::run(service, &config.server).await?;
    Ok(())
}
