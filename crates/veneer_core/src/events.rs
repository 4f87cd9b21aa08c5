//! View events
//!
//! User actions reach an owning view as an [`Event`] naming the element
//! that was acted on.

use std::fmt;

use crate::clock::Timestamp;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const CLICK: EventType = 1;

    // View lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// A UI event addressed to one element of a view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub event_type: EventType,
    /// Element key inside the receiving view (e.g. `"toggle-subtitle"`)
    pub target: String,
    pub timestamp: Timestamp,
}

impl Event {
    pub fn new(event_type: EventType, target: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            event_type,
            target: target.into(),
            timestamp,
        }
    }

    pub fn click(target: impl Into<String>, timestamp: Timestamp) -> Self {
        Self::new(event_types::CLICK, target, timestamp)
    }

    pub fn is_click_on(&self, target: &str) -> bool {
        self.event_type == event_types::CLICK && self.target == target
    }
}

/// How a view responded to an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResponse {
    /// The event changed (or may have changed) the view's state
    Handled,
    /// The element exists but is currently inert (disabled, hidden)
    Ignored,
    /// The view has no element with that key
    Unknown,
}

impl fmt::Display for EventResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventResponse::Handled => "handled",
            EventResponse::Ignored => "ignored",
            EventResponse::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_matching() {
        let event = Event::click("add", Timestamp::zero());
        assert!(event.is_click_on("add"));
        assert!(!event.is_click_on("edit"));

        let mount = Event::new(event_types::MOUNT, "add", Timestamp::zero());
        assert!(!mount.is_click_on("add"));
    }
}
