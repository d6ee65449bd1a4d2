//! Coordinator actor: drives the round loop.
//!
//! Each round is a strict prepare → pace → resolve → settle → flush cycle:
//!
//! 1. **Preparing**: shrink the chair count (floor 1), drain the pool to a
//!    known zero, restock exactly this round's seats, arm the gate.
//! 2. **Pacing**: the music plays for a bounded random duration while the
//!    players stay parked.
//! 3. **Resolving**: stop the music; every parked player races.
//! 4. **Settle**: a fixed pause for the races to resolve.
//! 5. **Flushing**: restock the pool toward full capacity. This runs every
//!    round, whatever happened in it, so no player can stay blocked and no
//!    late racer meets an empty pool.
//!
//! The loop repeats while more than one player remains, then flips the
//! game-over flag and reports the winner.

use std::sync::Arc;
use std::time::Duration;

use lastseat_game::{EventSender, GameEvent, GameState, PacingConfig};
use lastseat_sync::{ChairPool, RoundGate};
use rand::Rng;
use tokio::time;
use tracing::{debug, info, trace};

use crate::sim::GameReport;

pub(crate) struct Coordinator {
    pool: Arc<ChairPool>,
    gate: Arc<RoundGate>,
    state: Arc<GameState>,
    pacing: PacingConfig,
    events: EventSender,
    /// Size of the full starting roster; the flush burst is `roster - 1`.
    roster: usize,
}

impl Coordinator {
    pub(crate) fn new(
        pool: Arc<ChairPool>,
        gate: Arc<RoundGate>,
        state: Arc<GameState>,
        pacing: PacingConfig,
        events: EventSender,
        roster: usize,
    ) -> Self {
        Self {
            pool,
            gate,
            state,
            pacing,
            events,
            roster,
        }
    }

    pub(crate) async fn run(self) -> GameReport {
        let mut rounds = 0;

        while self.state.remaining() > 1 {
            // Preparing.
            let setup = self.state.begin_round();
            let stale = self.pool.drain();
            if stale > 0 {
                trace!(stale, "reclaimed leftover seats before re-arm");
            }
            self.pool.restock(setup.chairs);
            let round = self.gate.arm();
            rounds = round;
            let _ = self.events.send(GameEvent::RoundStarted {
                round,
                players: setup.players,
                chairs: setup.chairs,
            });
            debug!(round, players = setup.players, chairs = setup.chairs, "round armed");

            // Pacing: the deliberate race window while players stay parked.
            time::sleep(self.music_duration()).await;

            // Resolving.
            self.gate.stop_music();
            let _ = self.events.send(GameEvent::MusicStopped { round });

            time::sleep(self.pacing.settle).await;

            // Flushing: the burst is the full starting capacity, not this
            // round's chair count.
            self.pool.restock(self.roster - 1);
        }

        let winner = self.state.winner();
        self.gate.end_game();
        if let Some(player) = winner {
            let _ = self.events.send(GameEvent::Winner { player });
            info!(winner = %player, rounds, "game over");
        }

        GameReport {
            winner,
            rounds,
            eliminated: self.state.elimination_order(),
        }
    }

    /// Draws this round's music duration from the configured bounds.
    fn music_duration(&self) -> Duration {
        let (min, max) = (self.pacing.music_min, self.pacing.music_max);
        if min == max {
            min
        } else {
            rand::rng().random_range(min..=max)
        }
    }
}
