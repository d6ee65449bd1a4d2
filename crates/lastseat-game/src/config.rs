//! Simulation configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::GameError;

/// Round pacing: how long the music plays and how long races get to settle.
///
/// These are tunable knobs, not contract values. The defaults reproduce the
/// classic cadence: music for a random 1-3 s, then a fixed 1 s for everyone
/// to find (or fail to find) a seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Shortest time the music plays in a round.
    pub music_min: Duration,

    /// Longest time the music plays in a round.
    pub music_max: Duration,

    /// Fixed pause after the music stops, letting every racer resolve
    /// before the pool is flushed for the next round.
    pub settle: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            music_min: Duration::from_secs(1),
            music_max: Duration::from_secs(3),
            settle: Duration::from_secs(1),
        }
    }
}

/// Full configuration for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of players at the starting whistle.
    pub players: usize,

    /// Round pacing knobs.
    pub pacing: PacingConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            players: 4,
            pacing: PacingConfig::default(),
        }
    }
}

impl SimConfig {
    /// Checks and fixes the config so it is safe to run.
    ///
    /// Rules:
    /// - fewer than 2 players is fatal; there is no round to play;
    /// - inverted music bounds are swapped (with a warning) rather than
    ///   rejected.
    pub fn validated(mut self) -> Result<Self, GameError> {
        if self.players < 2 {
            return Err(GameError::NotEnoughPlayers(self.players));
        }
        if self.pacing.music_min > self.pacing.music_max {
            warn!(
                min_ms = self.pacing.music_min.as_millis() as u64,
                max_ms = self.pacing.music_max.as_millis() as u64,
                "music bounds inverted — swapping"
            );
            std::mem::swap(&mut self.pacing.music_min, &mut self.pacing.music_max);
        }
        Ok(self)
    }

    /// A config with `players` participants and default pacing.
    pub fn with_players(players: usize) -> Self {
        Self {
            players,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.players, 4);
        assert_eq!(config.pacing.music_min, Duration::from_secs(1));
        assert_eq!(config.pacing.music_max, Duration::from_secs(3));
        assert_eq!(config.pacing.settle, Duration::from_secs(1));
    }

    #[test]
    fn test_validated_rejects_too_few_players() {
        for players in [0, 1] {
            let result = SimConfig::with_players(players).validated();
            assert!(matches!(result, Err(GameError::NotEnoughPlayers(n)) if n == players));
        }
    }

    #[test]
    fn test_validated_accepts_two_players() {
        assert!(SimConfig::with_players(2).validated().is_ok());
    }

    #[test]
    fn test_validated_swaps_inverted_music_bounds() {
        let mut config = SimConfig::default();
        config.pacing.music_min = Duration::from_secs(5);
        config.pacing.music_max = Duration::from_secs(2);

        let config = config.validated().unwrap();
        assert_eq!(config.pacing.music_min, Duration::from_secs(2));
        assert_eq!(config.pacing.music_max, Duration::from_secs(5));
    }

    #[test]
    fn test_validated_allows_zero_pacing() {
        let mut config = SimConfig::with_players(8);
        config.pacing.music_min = Duration::ZERO;
        config.pacing.music_max = Duration::ZERO;
        config.pacing.settle = Duration::ZERO;
        assert!(config.validated().is_ok());
    }
}
