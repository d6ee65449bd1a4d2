//! Player actor: one task per participant.
//!
//! A player's whole life is a loop with a single suspension point, the
//! round gate. On release it races for a seat exactly once, then either
//! loops back to wait for the next round or records its own elimination
//! and exits. Every handle it touches is passed in at construction; there
//! is no ambient shared state.

use std::sync::Arc;

use lastseat_game::{EventSender, GameEvent, GameState, PlayerId};
use lastseat_sync::{ChairPool, GateListener, RoundGate, Wake};
use tracing::{debug, trace};

pub(crate) struct Player {
    id: PlayerId,
    pool: Arc<ChairPool>,
    gate: Arc<RoundGate>,
    listener: GateListener,
    state: Arc<GameState>,
    events: EventSender,
    /// Set at most once, by this task alone. Guards against racing again
    /// if the task is ever woken after its own elimination.
    eliminated: bool,
}

impl Player {
    pub(crate) fn new(
        id: PlayerId,
        pool: Arc<ChairPool>,
        gate: Arc<RoundGate>,
        state: Arc<GameState>,
        events: EventSender,
    ) -> Self {
        let listener = gate.listener();
        Self {
            id,
            pool,
            gate,
            listener,
            state,
            events,
            eliminated: false,
        }
    }

    pub(crate) async fn run(mut self) {
        trace!(player = %self.id, "player task started");
        loop {
            match self.listener.wait().await {
                Wake::GameOver => {
                    trace!(player = %self.id, "game over, standing down");
                    break;
                }
                Wake::Scramble { round } => {
                    if self.eliminated {
                        break;
                    }
                    if self.pool.try_claim() {
                        debug!(player = %self.id, round, "claimed a seat");
                        let _ = self.events.send(GameEvent::Seated {
                            round,
                            player: self.id,
                        });
                    } else {
                        self.eliminated = true;
                        let remaining = self.state.eliminate(self.id);
                        // The event goes out only after the elimination is
                        // durably recorded in the game state.
                        let _ = self.events.send(GameEvent::Eliminated {
                            round,
                            player: self.id,
                        });
                        self.gate.nudge();
                        debug!(player = %self.id, round, remaining, "no seat left, out of the game");
                        break;
                    }
                }
            }
        }
    }
}
