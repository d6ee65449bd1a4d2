//! # lastseat
//!
//! An elimination game ("musical chairs") as a concurrency coordination
//! exercise: N player tasks race, round after round, to claim one of a
//! shrinking pool of seats, while a coordinator task drives round timing,
//! shrinks the pool, and guarantees no straggler is ever left parked.
//!
//! [`Simulation`] wires the shared state into the actors and runs a game to
//! completion:
//!
//! ```rust,no_run
//! use lastseat::{SimConfig, Simulation};
//! use tokio::sync::mpsc;
//!
//! # async fn demo() -> Result<(), lastseat::GameError> {
//! let (events, _narration) = mpsc::unbounded_channel();
//! let report = Simulation::new(SimConfig::default(), events)?.run().await;
//! println!("winner: {:?}", report.winner);
//! # Ok(())
//! # }
//! ```

mod coordinator;
mod player;
mod sim;

pub use sim::{GameReport, Simulation};

pub use lastseat_game::{EventSender, GameError, GameEvent, PacingConfig, PlayerId, SimConfig};
