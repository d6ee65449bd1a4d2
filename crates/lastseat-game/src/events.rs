//! Observable game events.
//!
//! The narration of a run (round starts, seats taken, eliminations, the
//! winner) travels as values over an unbounded channel so the sink (console,
//! test harness, anything) is fully decoupled from the protocol. Sends are
//! fire-and-forget: a dropped receiver silently discards events and never
//! blocks or fails an actor.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::PlayerId;

/// Channel sender actors use to publish events.
pub type EventSender = mpsc::UnboundedSender<GameEvent>;

/// One observable moment in a simulation run.
///
/// Ordering is part of the contract: `Eliminated` is published only after
/// the elimination is recorded in the game state, and `Winner` only after
/// the game-over flag is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A round is set up and the music is about to start.
    RoundStarted {
        round: u64,
        players: usize,
        chairs: usize,
    },

    /// The music stopped; the scramble is on.
    MusicStopped { round: u64 },

    /// A player claimed a seat and survives the round.
    Seated { round: u64, player: PlayerId },

    /// A player found no seat and is out of the game.
    Eliminated { round: u64, player: PlayerId },

    /// The last player standing.
    Winner { player: PlayerId },
}
