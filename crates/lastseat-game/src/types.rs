//! Identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a player.
///
/// Newtype over `u64` so a player id can't be confused with any other
/// number floating through the simulation. Serializes as the plain inner
/// value thanks to `#[serde(transparent)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}
