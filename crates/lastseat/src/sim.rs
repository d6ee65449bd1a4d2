//! Simulation wiring: builds the shared state, spawns the actors, runs a
//! game to completion.

use std::sync::Arc;

use lastseat_game::{EventSender, GameError, GameState, PlayerId, SimConfig};
use lastseat_sync::{ChairPool, RoundGate};
use tracing::info;

use crate::coordinator::Coordinator;
use crate::player::Player;

/// The outcome of a completed run.
#[derive(Debug, Clone)]
pub struct GameReport {
    /// The last player standing. Always present after a well-formed run.
    pub winner: Option<PlayerId>,
    /// Rounds played.
    pub rounds: u64,
    /// Everyone who went out, in elimination order.
    pub eliminated: Vec<PlayerId>,
}

/// A configured, not-yet-started simulation.
///
/// Construction validates the config, so a bad setup is rejected before any
/// task is spawned. Events are published to the channel handed in here; the
/// sink never back-pressures the game.
pub struct Simulation {
    config: SimConfig,
    events: EventSender,
}

impl Simulation {
    /// Validates `config` and prepares a run publishing to `events`.
    pub fn new(config: SimConfig, events: EventSender) -> Result<Self, GameError> {
        Ok(Self {
            config: config.validated()?,
            events,
        })
    }

    /// Runs the game to completion.
    ///
    /// Returns only once the winner is decided *and* every player task has
    /// terminated; no actor is ever left parked on the gate.
    pub async fn run(self) -> GameReport {
        let roster: Vec<PlayerId> = (1..=self.config.players as u64).map(PlayerId).collect();

        let pool = Arc::new(ChairPool::new(roster.len() - 1));
        let gate = Arc::new(RoundGate::new());
        let state = Arc::new(GameState::new(&roster));

        info!(
            players = roster.len(),
            chairs = pool.capacity(),
            "simulation starting"
        );

        // Every listener subscribes before the first round is armed.
        let handles: Vec<_> = roster
            .iter()
            .map(|&id| {
                let player = Player::new(
                    id,
                    Arc::clone(&pool),
                    Arc::clone(&gate),
                    Arc::clone(&state),
                    self.events.clone(),
                );
                tokio::spawn(player.run())
            })
            .collect();

        let coordinator = Coordinator::new(
            pool,
            gate,
            state,
            self.config.pacing.clone(),
            self.events.clone(),
            roster.len(),
        );
        let report = coordinator.run().await;

        for handle in handles {
            let _ = handle.await;
        }

        report
    }
}
