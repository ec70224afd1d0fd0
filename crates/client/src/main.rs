//! Spelldawn client binary.
//!
//! Headless composition root: assembles the session from environment
//! configuration and logs session events until interrupted. The rendering
//! engine embeds the library crates directly; this binary exists for offline
//! development and transport smoke testing.

use anyhow::Result;
use runtime::{SessionEvent, Topic};
use spelldawn_client::{ClientBuilder, ClientConfig, PacedAnimator};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    spelldawn_client::logging::setup_logging()?;

    tracing::info!("Starting Spelldawn client");
    tracing::info!("Player ID: {:?}", config.player_id);
    tracing::info!("Offline mode: {}", config.offline);

    let session = ClientBuilder::new()
        .config(config)
        .animator(PacedAnimator::default())
        .build()?;

    let handle = session.handle();
    let mut actions = handle.subscribe(Topic::Action);
    let mut connection = handle.subscribe(Topic::Connection);
    let mut interface = handle.subscribe(Topic::Interface);

    loop {
        tokio::select! {
            Ok(event) = actions.recv() => log_event(event),
            Ok(event) = connection.recv() => log_event(event),
            Ok(event) = interface.recv() => log_event(event),
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    tracing::info!("Shutting down");
    drop(handle);
    session.shutdown().await?;
    Ok(())
}

fn log_event(event: SessionEvent) {
    match &event {
        SessionEvent::Connection(connection) => {
            tracing::info!(target: "client", event = ?connection, "connection");
        }
        SessionEvent::Action(action) => {
            tracing::info!(target: "client", event = ?action, "action");
        }
        SessionEvent::Interface(interface) => {
            tracing::info!(target: "client", event = ?interface, "interface");
        }
    }
}
