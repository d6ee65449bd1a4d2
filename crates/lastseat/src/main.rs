//! Runs one full musical-chairs simulation and narrates it to the console.

use lastseat::{GameError, GameEvent, SimConfig, Simulation};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), GameError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (events, mut narration) = mpsc::unbounded_channel();

    // The narrator drains the event channel into log lines; it exits on its
    // own once the simulation drops the last sender.
    let narrator = tokio::spawn(async move {
        while let Some(event) = narration.recv().await {
            match event {
                GameEvent::RoundStarted {
                    round,
                    players,
                    chairs,
                } => info!("round {round}: {players} players circle {chairs} chairs"),
                GameEvent::MusicStopped { round } => info!("round {round}: the music stops!"),
                GameEvent::Seated { player, .. } => info!("{player} grabs a seat"),
                GameEvent::Eliminated { player, .. } => info!("{player} is out"),
                GameEvent::Winner { player } => info!("{player} wins the game"),
            }
        }
    });

    let report = Simulation::new(SimConfig::default(), events)?.run().await;
    let _ = narrator.await;

    if let Some(winner) = report.winner {
        info!(%winner, rounds = report.rounds, "simulation complete");
    }
    Ok(())
}
