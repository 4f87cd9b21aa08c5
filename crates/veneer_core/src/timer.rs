//! One-shot deadline timer
//!
//! A [`Timer`] holds at most one pending deadline. Starting it again replaces
//! the previous deadline, so an owner can never accumulate overlapping
//! callbacks. The owner polls it from its frame tick.

use std::time::Duration;

use crate::clock::Timestamp;

/// A restartable, cancellable one-shot timer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Timestamp>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the timer to fire `delay` after `now`.
    ///
    /// Returns the deadline that was replaced, if one was pending.
    pub fn start(&mut self, now: Timestamp, delay: Duration) -> Option<Timestamp> {
        self.deadline.replace(now.saturating_add(delay))
    }

    /// Drop the pending deadline. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Timestamp> {
        self.deadline
    }

    /// Time left until the deadline, zero if overdue, `None` if idle.
    pub fn remaining(&self, now: Timestamp) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_since(now))
    }

    /// Fire the timer if its deadline has been reached.
    ///
    /// Returns `true` exactly once per `start`.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };

        if now < deadline {
            return false;
        }

        self.deadline = None;
        true
    }
}
