//! The seat pool: a fixed-capacity counting resource.
//!
//! Each permit is one free seat in the current round. Players only ever use
//! the non-blocking [`ChairPool::try_claim`]; a player that loses the race
//! is classified as eliminated in the same round instead of queueing.
//! The coordinator resets the pool between rounds with the
//! "drain-then-restock" sequence: [`ChairPool::drain`] to a known zero,
//! then [`ChairPool::restock`] to exactly the round's seat count.

use tokio::sync::Semaphore;
use tracing::warn;

/// A counting pool of seats with a fixed upper bound.
///
/// Wraps a [`Semaphore`]; claimed permits are forgotten rather than returned,
/// so the live count only ever grows through an explicit [`restock`].
/// The count never exceeds `capacity`: restocks saturate there.
///
/// [`restock`]: ChairPool::restock
#[derive(Debug)]
pub struct ChairPool {
    seats: Semaphore,
    capacity: usize,
}

impl ChairPool {
    /// Creates a pool with `capacity` seats, all initially available.
    pub fn new(capacity: usize) -> Self {
        Self {
            seats: Semaphore::new(capacity),
            capacity,
        }
    }

    /// Tries to claim one seat. Never blocks.
    ///
    /// Returns `true` and consumes a permit iff one is available. The permit
    /// is forgotten: a claimed seat stays claimed until the coordinator
    /// restocks the pool for the next round.
    pub fn try_claim(&self) -> bool {
        match self.seats.try_acquire() {
            Ok(permit) => {
                permit.forget();
                true
            }
            Err(_) => false,
        }
    }

    /// Claims every available seat, returning how many were reclaimed.
    ///
    /// Used at round start to reset the pool to zero regardless of how many
    /// permits the previous round's flush left behind.
    pub fn drain(&self) -> usize {
        let mut reclaimed = 0;
        while self.try_claim() {
            reclaimed += 1;
        }
        reclaimed
    }

    /// Adds up to `n` seats, saturating at the pool's capacity.
    ///
    /// Returns the number actually granted. The coordinator's generous
    /// end-of-round flush relies on the saturation; a clamp on any other
    /// call path means the caller skipped the drain, and the warning below
    /// is the detection signal.
    pub fn restock(&self, n: usize) -> usize {
        // A concurrent try_claim can only lower `available`, so the headroom
        // computed here is never an over-estimate.
        let headroom = self.capacity.saturating_sub(self.seats.available_permits());
        let granted = n.min(headroom);
        if granted < n {
            warn!(
                requested = n,
                granted,
                capacity = self.capacity,
                "seat restock clamped at capacity"
            );
        }
        self.seats.add_permits(granted);
        granted
    }

    /// Seats currently available to claim.
    pub fn available(&self) -> usize {
        self.seats.available_permits()
    }

    /// The fixed upper bound on available seats.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
