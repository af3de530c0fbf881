use chrono::Local;

use crate::record::Timestamp;

/// Source of acceptance timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock in the process's local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_naive(Local::now().naive_local())
    }
}
