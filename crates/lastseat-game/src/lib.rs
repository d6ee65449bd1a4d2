//! Rules layer for the lastseat simulation.
//!
//! Everything the actors share that is about the *game* rather than about
//! coordination plumbing: player identity, configuration, the authoritative
//! round/termination state, the observable event vocabulary, and errors.

pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use config::{PacingConfig, SimConfig};
pub use error::GameError;
pub use events::{EventSender, GameEvent};
pub use state::{GameState, RoundSetup};
pub use types::PlayerId;
