//! In-memory record store.
//!
//! One mutex guards the record sequence. The acceptance timestamp is read
//! while the lock is held, so insertion order never disagrees with timestamp
//! order. Ordering for display is applied on every read, not on insert.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clock::{Clock, LocalClock};
use crate::record::{Outcome, Record, Submission};

/// Receives the outcome of every `submit` call (metrics hook).
pub trait OutcomeListener: Send + Sync {
    fn observe(&self, outcome: Outcome);
}

/// Listener that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl OutcomeListener for NoopListener {
    fn observe(&self, _outcome: Outcome) {}
}

pub struct RecordStore {
    records: Mutex<Vec<Record>>,
    clock: Arc<dyn Clock>,
    listener: Arc<dyn OutcomeListener>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Empty store on the local wall clock, with no listener.
    pub fn new() -> Self {
        Self::with_parts(Arc::new(LocalClock), Arc::new(NoopListener))
    }

    pub fn with_parts(clock: Arc<dyn Clock>, listener: Arc<dyn OutcomeListener>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            clock,
            listener,
        }
    }

    // Records are pushed whole, so a panic elsewhere can't leave a torn entry.
    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate and append. Blank `name` or `role` is a silent no-op.
    pub fn submit(&self, name: &str, role: &str, note: &str) -> Outcome {
        self.submit_form(&Submission::new(name, role, note))
    }

    pub fn submit_form(&self, sub: &Submission) -> Outcome {
        let outcome = match sub.normalize() {
            None => {
                tracing::debug!("submission rejected: name or role is blank");
                Outcome::Rejected
            }
            Some((name, role, note)) => {
                let mut records = self.lock();
                let timestamp = self.clock.now();
                tracing::info!(%timestamp, %name, %role, "attendance recorded");
                records.push(Record {
                    timestamp,
                    name,
                    role,
                    note,
                });
                Outcome::Accepted
            }
        };
        self.listener.observe(outcome);
        outcome
    }

    /// Snapshot of all records, newest first.
    ///
    /// Records sharing the same second keep insertion order (stable sort).
    pub fn list_ordered(&self) -> Vec<Record> {
        let mut snapshot = self.lock().clone();
        snapshot.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        snapshot
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
