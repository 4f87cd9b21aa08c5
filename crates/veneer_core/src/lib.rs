//! Veneer Core
//!
//! Interaction-state primitives for small presentational views:
//!
//! - **Bounded event log**: the last N named events, oldest first
//! - **Transient flag**: a value that auto-reverts after a delay
//! - **Toggle**: a plain boolean flip
//!
//! plus the pieces they share: a clock abstraction, a one-shot timer, a flat
//! state machine runtime, view events and render notification.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use veneer_core::{BoundedEventLog, ManualClock, TransientStateFlag};
//!
//! let clock = ManualClock::shared();
//!
//! let mut log = BoundedEventLog::new(3, clock.clone());
//! for label in ["A", "B", "C", "D"] {
//!     log.record(label);
//! }
//! assert_eq!(log.snapshot(), vec!["B", "C", "D"]);
//!
//! let mut saved = TransientStateFlag::new(clock.clone());
//! saved.trigger(Duration::from_millis(2000));
//! assert!(saved.is_active());
//!
//! clock.advance(Duration::from_millis(2100));
//! saved.tick();
//! assert!(!saved.is_active());
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod event_log;
pub mod events;
pub mod fsm;
pub mod render;
pub mod timer;
pub mod toggle;
pub mod transient;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock, Timestamp};
pub use config::{EventLogConfig, StateConfig, TransientConfig};
pub use error::{Error, Result};
pub use event_log::{BoundedEventLog, EventRecord};
pub use events::{Event, EventResponse, EventType};
pub use fsm::{StateId, StateMachine};
pub use render::{DirtyFlag, Notifier, RenderCallback};
pub use timer::Timer;
pub use toggle::Toggle;
pub use transient::TransientStateFlag;
