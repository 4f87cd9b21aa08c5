//! Bounded event log
//!
//! Keeps the most recent `capacity` named events, oldest first. Overflow
//! evicts from the front; there is no reordering or deduplication.

use std::collections::VecDeque;

use tracing::trace;

use crate::clock::{SharedClock, Timestamp};
use crate::render::{Notifier, RenderCallback};

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 3;

/// One recorded event. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRecord {
    label: String,
    recorded_at: Timestamp,
}

impl EventRecord {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn recorded_at(&self) -> Timestamp {
        self.recorded_at
    }
}

/// Fixed-capacity FIFO record of recent events
#[derive(Debug)]
pub struct BoundedEventLog {
    records: VecDeque<EventRecord>,
    capacity: usize,
    clock: SharedClock,
    notifier: Notifier,
}

impl BoundedEventLog {
    /// Create an empty log. A capacity of zero records nothing.
    pub fn new(capacity: usize, clock: SharedClock) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
            clock,
            notifier: Notifier::none(),
        }
    }

    pub fn with_render_callback(mut self, callback: RenderCallback) -> Self {
        self.notifier = Notifier::new(callback);
        self
    }

    /// Append an event, evicting the oldest ones past capacity.
    pub fn record(&mut self, label: impl Into<String>) {
        let record = EventRecord {
            label: label.into(),
            recorded_at: self.clock.now(),
        };
        trace!(label = %record.label, at = %record.recorded_at, "recording event");

        self.records.push_back(record);
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }

        self.notifier.notify();
    }

    /// Labels, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.records.iter().map(|r| r.label.clone()).collect()
    }

    /// Full records, oldest first
    pub fn records(&self) -> impl Iterator<Item = &EventRecord> {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.notifier.notify();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::render::DirtyFlag;
    use std::time::Duration;

    #[test]
    fn test_evicts_oldest() {
        let mut log = BoundedEventLog::new(3, ManualClock::shared());
        for label in ["A", "B", "C", "D"] {
            log.record(label);
        }
        assert_eq!(log.snapshot(), vec!["B", "C", "D"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_under_capacity_keeps_everything() {
        let mut log = BoundedEventLog::new(3, ManualClock::shared());
        log.record("Added item");
        log.record("Added item");
        assert_eq!(log.snapshot(), vec!["Added item", "Added item"]);
    }

    #[test]
    fn test_zero_capacity_records_nothing() {
        let mut log = BoundedEventLog::new(0, ManualClock::shared());
        log.record("A");
        assert!(log.is_empty());
    }

    #[test]
    fn test_records_carry_timestamps() {
        let clock = ManualClock::shared();
        let mut log = BoundedEventLog::new(2, clock.clone());

        log.record("first");
        clock.advance(Duration::from_millis(40));
        log.record("second");

        let stamps: Vec<u64> = log.records().map(|r| r.recorded_at().as_millis()).collect();
        assert_eq!(stamps, vec![0, 40]);
    }

    #[test]
    fn test_mutations_notify() {
        let dirty = DirtyFlag::new();
        let mut log =
            BoundedEventLog::new(3, ManualClock::shared()).with_render_callback(dirty.callback());

        log.record("A");
        assert!(dirty.take());

        // Reading does not notify
        let _ = log.snapshot();
        assert!(!dirty.take());

        log.clear();
        assert!(dirty.take());
        assert!(log.is_empty());
    }
}
