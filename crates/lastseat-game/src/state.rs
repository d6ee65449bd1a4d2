//! Authoritative shared game state.
//!
//! One mutex guards everything the round/termination decisions read:
//! who is still in, who went out (and in what order), and how many chairs
//! the current round has. Every operation is non-blocking and the lock is
//! never held across a suspension point; the coordinator and the players
//! only take it for a handful of instructions at a time.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::warn;

use crate::PlayerId;

/// Snapshot handed to the coordinator at round start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSetup {
    /// Players still in the game.
    pub players: usize,
    /// Chairs available this round.
    pub chairs: usize,
}

#[derive(Debug)]
struct StateInner {
    /// Players still in, in roster order.
    alive: Vec<PlayerId>,
    /// Players out, in elimination order.
    eliminated: Vec<PlayerId>,
    /// Chairs for the current round.
    chairs: usize,
}

/// The authoritative source of round and termination status.
#[derive(Debug)]
pub struct GameState {
    inner: Mutex<StateInner>,
}

impl GameState {
    /// Creates the state for a fresh roster.
    ///
    /// `chairs` starts at the roster size so that the unconditional
    /// decrement in the first [`begin_round`](Self::begin_round) lands on
    /// `players - 1`: one fewer chair than players, every round.
    pub fn new(roster: &[PlayerId]) -> Self {
        Self {
            inner: Mutex::new(StateInner {
                alive: roster.to_vec(),
                eliminated: Vec::with_capacity(roster.len().saturating_sub(1)),
                chairs: roster.len(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StateInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a round: removes one chair (never going below one) and
    /// snapshots the round's numbers.
    pub fn begin_round(&self) -> RoundSetup {
        let mut inner = self.lock();
        if inner.chairs > 1 {
            inner.chairs -= 1;
        }
        RoundSetup {
            players: inner.alive.len(),
            chairs: inner.chairs,
        }
    }

    /// Records a player's elimination and returns the remaining count.
    ///
    /// Calling this twice for the same player is a caller bug; the second
    /// call is ignored (with a warning) so the count can never lose or
    /// duplicate a decrement.
    pub fn eliminate(&self, id: PlayerId) -> usize {
        let mut inner = self.lock();
        match inner.alive.iter().position(|p| *p == id) {
            Some(idx) => {
                inner.alive.remove(idx);
                inner.eliminated.push(id);
            }
            None => warn!(player = %id, "elimination for a player not in the game — ignored"),
        }
        inner.alive.len()
    }

    /// Players still in the game.
    pub fn remaining(&self) -> usize {
        self.lock().alive.len()
    }

    /// Chairs for the current round.
    pub fn chairs(&self) -> usize {
        self.lock().chairs
    }

    /// The sole survivor, once exactly one player remains.
    pub fn winner(&self) -> Option<PlayerId> {
        let inner = self.lock();
        match inner.alive.as_slice() {
            [sole] => Some(*sole),
            _ => None,
        }
    }

    /// Everyone who has gone out, in elimination order.
    pub fn elimination_order(&self) -> Vec<PlayerId> {
        self.lock().eliminated.clone()
    }
}
