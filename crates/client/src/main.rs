//! Vyuha skirmish simulator.
//!
//! Loads content, opens one session, plays a few scripted rounds and prints
//! every runtime event to stdout as a JSON line. Logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! VYUHA_SEED=7 VYUHA_ENVIRONMENT=abyssal cargo run -p vyuha-sim
//!
//! # Custom content, snapshots on disk
//! VYUHA_DATA_DIR=./data VYUHA_SAVE_DIR=./saves cargo run -p vyuha-sim
//! ```

use anyhow::Result;
use vyuha_sim::{SimConfig, Simulation};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    tracing::info!("Starting vyuha simulator");
    tracing::info!("Session ID: {}", config.session_id);
    tracing::info!("Seed: {}", config.seed);
    tracing::info!("Persistence: {:?}", config.save_dir);

    let simulation = Simulation::from_config(&config).await?;
    let report = simulation.run(&mut std::io::stdout().lock()).await?;

    match report.victor {
        Some(victor) => tracing::info!("{} won after {} rounds", victor, report.rounds),
        None => tracing::info!("Undecided after {} rounds", report.rounds),
    }
    tracing::info!(
        "{} events, final nonce {}",
        report.events,
        report.final_state.nonce
    );
    Ok(())
}
