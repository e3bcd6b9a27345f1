mod chart;

use anyhow::{Context, Result};
use sim::SimulationConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing; stderr keeps the chart's screen clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viewer=info,sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let seed: u64 = rand::random();

    tracing::info!("Starting birds simulation");
    tracing::info!("Seed: {}", seed);

    let series = sim::run_simulation(SimulationConfig::default(), seed)
        .context("Failed to start simulation")?;

    chart::run(&series, seed)
}
