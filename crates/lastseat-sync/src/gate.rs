//! The round gate: broadcast pause/resume signaling between the coordinator
//! and the players.
//!
//! One [`watch`] channel carries the whole signaling state: the current
//! round number, the "music stopped" flag, and the game-over flag. Keeping
//! all three in a single synchronization domain means a waiter re-checks
//! everything on every wake and can never miss an edge.
//!
//! [`GateListener::wait`] is the only suspension point a player has. A
//! listener is released at most once per armed round: a player that reseats
//! and loops back while the music flag is still set from the round it just
//! played parks until the next [`RoundGate::arm`]/[`RoundGate::stop_music`]
//! edge instead of racing again against a drained pool.

use tokio::sync::watch;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct GateState {
    /// Monotonically increasing round number (first armed round is 1).
    round: u64,
    /// Set when the music stops for the current round, cleared by `arm`.
    music_stopped: bool,
    /// Monotone: set once at victory, never cleared.
    game_over: bool,
}

/// Why a [`GateListener::wait`] call resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// The music stopped for `round`; race for a seat now.
    Scramble {
        /// The round this wake releases the listener for.
        round: u64,
    },
    /// The game is over; stand down without racing.
    GameOver,
}

/// Writer side of the gate, held by the coordinator.
///
/// [`RoundGate::nudge`] is the one operation also reachable from players:
/// an eliminated player fires it so every waiter re-checks its condition.
#[derive(Debug)]
pub struct RoundGate {
    tx: watch::Sender<GateState>,
}

impl RoundGate {
    /// Creates a gate with the music playing and no round armed yet.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(GateState::default());
        Self { tx }
    }

    /// Starts a new round: bumps the round number and restarts the music.
    ///
    /// Returns the new round number.
    pub fn arm(&self) -> u64 {
        let mut armed = 0;
        self.tx.send_modify(|state| {
            state.round += 1;
            state.music_stopped = false;
            armed = state.round;
        });
        trace!(round = armed, "gate armed");
        armed
    }

    /// Stops the music for the current round, waking every listener.
    pub fn stop_music(&self) {
        self.tx.send_modify(|state| state.music_stopped = true);
    }

    /// Ends the game. Monotone: there is no way to restart.
    ///
    /// Every parked listener wakes with [`Wake::GameOver`], as does any
    /// listener that parks afterwards.
    pub fn end_game(&self) {
        self.tx.send_modify(|state| state.game_over = true);
    }

    /// Wakes every listener without changing the gate state.
    ///
    /// Fired by a player on elimination so that no sibling stays parked on a
    /// stale view after that player's task exits; each woken listener
    /// re-checks its condition and parks again if nothing changed.
    pub fn nudge(&self) {
        self.tx.send_modify(|_| {});
    }

    /// The most recently armed round (0 before the first [`arm`](Self::arm)).
    pub fn round(&self) -> u64 {
        self.tx.borrow().round
    }

    /// Subscribes a new listener.
    ///
    /// A listener created mid-round observes the current gate state, so a
    /// late subscriber still catches a round whose music has already stopped.
    pub fn listener(&self) -> GateListener {
        GateListener {
            rx: self.tx.subscribe(),
            last_played: 0,
        }
    }
}

impl Default for RoundGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Reader side of the gate, one per player.
#[derive(Debug)]
pub struct GateListener {
    rx: watch::Receiver<GateState>,
    /// The last round this listener was released for.
    last_played: u64,
}

impl GateListener {
    /// Parks until the music stops for a round this listener has not yet
    /// played, or until the game ends.
    ///
    /// Spurious wakes are safe: the condition is re-checked on every
    /// notification, including [`RoundGate::nudge`].
    pub async fn wait(&mut self) -> Wake {
        let last_played = self.last_played;
        let state = match self
            .rx
            .wait_for(|s| s.game_over || (s.music_stopped && s.round > last_played))
            .await
        {
            Ok(state) => *state,
            // Gate dropped: the simulation is being torn down.
            Err(_) => return Wake::GameOver,
        };

        if state.game_over {
            Wake::GameOver
        } else {
            self.last_played = state.round;
            Wake::Scramble { round: state.round }
        }
    }
}
