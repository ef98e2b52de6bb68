//! Request pacing
//!
//! The politeness side of the crawl: a semaphore caps how many detail
//! fetches are in flight at once, and a shared delay gate spaces request
//! starts so the site sees at most one new request per interval no matter
//! how many workers are running.

use std::time::Duration;
use tokio::sync::{Mutex, OwnedSemaphorePermit, Semaphore};
use tokio::time::Instant;

/// Shared pacing state for all detail-page fetches
#[derive(Debug)]
pub struct Pacer {
    permits: std::sync::Arc<Semaphore>,
    next_slot: Mutex<Instant>,
    min_delay: Duration,
}

impl Pacer {
    /// Creates a pacer with the given spacing and worker cap
    ///
    /// The first turn is handed out immediately; spacing applies between
    /// turns, not before the first one.
    pub fn new(min_delay: Duration, workers: usize) -> Self {
        Self {
            permits: std::sync::Arc::new(Semaphore::new(workers.max(1))),
            next_slot: Mutex::new(Instant::now()),
            min_delay,
        }
    }

    /// Claims a worker slot, waiting if all slots are taken
    ///
    /// Returns None only if the semaphore has been closed.
    pub async fn acquire(&self) -> Option<OwnedSemaphorePermit> {
        self.permits.clone().acquire_owned().await.ok()
    }

    /// Waits until this request's start slot arrives
    ///
    /// Slots are handed out `min_delay` apart. Callers that arrive
    /// concurrently are serialized behind the slot clock, so bursts from
    /// parallel workers still hit the site one at a time.
    pub async fn wait_turn(&self) {
        let turn = {
            let mut next_slot = self.next_slot.lock().await;
            let turn = (*next_slot).max(Instant::now());
            *next_slot = turn + self.min_delay;
            turn
        };
        tokio::time::sleep_until(turn).await;
    }
}
