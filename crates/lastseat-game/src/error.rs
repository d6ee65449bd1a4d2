//! Error types for the game layer.

/// Errors that can occur while setting up a simulation.
///
/// There is no recoverable runtime error in the round protocol itself:
/// losing a round is a normal outcome, not an error, and the seat pool's
/// saturating restock closes the only invariant-violation path. What
/// remains is configuration that must be rejected before any actor starts.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The game needs at least two players to play a round.
    #[error("at least 2 players required, got {0}")]
    NotEnoughPlayers(usize),
}
