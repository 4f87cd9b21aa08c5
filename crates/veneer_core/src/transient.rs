//! Transient state flag
//!
//! A value that switches to its "active" form when triggered and reverts to
//! its default after a delay. Re-triggering while active extends the
//! deadline: the pending reversion is replaced, never duplicated.
//!
//! ```text
//! Default --trigger--> Active --trigger--> Active (deadline moved)
//!    ^                   |
//!    +--expire / reset---+
//! ```
//!
//! Expiry is observed by [`TransientStateFlag::tick`], which the owning
//! view calls from its frame loop.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::clock::{SharedClock, Timestamp};
use crate::fsm::{InputId, StateMachine};
use crate::render::{Notifier, RenderCallback};
use crate::timer::Timer;

/// Delay used when none is configured
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Flag states
pub mod states {
    use crate::fsm::StateId;

    pub const DEFAULT: StateId = 0;
    pub const ACTIVE: StateId = 1;
}

const TRIGGER: InputId = 1;
const EXPIRE: InputId = 2;
const RESET: InputId = 3;

fn flag_fsm() -> StateMachine {
    StateMachine::builder(states::DEFAULT)
        .on(states::DEFAULT, TRIGGER, states::ACTIVE)
        .on(states::ACTIVE, TRIGGER, states::ACTIVE)
        .on(states::ACTIVE, EXPIRE, states::DEFAULT)
        .on(states::ACTIVE, RESET, states::DEFAULT)
        .build()
}

/// A boolean or small enum value that auto-reverts after a delay.
///
/// The pending reversion is an owned [`Timer`]; dropping the flag drops it,
/// and [`cancel`](Self::cancel) disarms it while the owner is still alive.
pub struct TransientStateFlag<T> {
    default: T,
    active: T,
    delay: Duration,
    fsm: StateMachine,
    timer: Timer,
    clock: SharedClock,
    notifier: Notifier,
}

impl TransientStateFlag<bool> {
    /// A `false`/`true` flag with the default delay.
    pub fn new(clock: SharedClock) -> Self {
        Self::with_values(false, true, clock)
    }
}

impl<T: Copy + PartialEq + fmt::Debug> TransientStateFlag<T> {
    /// A flag that rests at `default` and shows `active` while triggered.
    pub fn with_values(default: T, active: T, clock: SharedClock) -> Self {
        Self {
            default,
            active,
            delay: DEFAULT_DELAY,
            fsm: flag_fsm(),
            timer: Timer::new(),
            clock,
            notifier: Notifier::none(),
        }
    }

    /// Set the delay used by [`trigger_default`](Self::trigger_default).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_render_callback(mut self, callback: RenderCallback) -> Self {
        self.notifier = Notifier::new(callback);
        self
    }

    /// Activate now and schedule a reversion `delay` from now.
    ///
    /// Any reversion still pending is cancelled first.
    pub fn trigger(&mut self, delay: Duration) {
        let now = self.clock.now();
        self.fsm.send(TRIGGER);

        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        match self.timer.start(now, delay) {
            Some(replaced) if replaced > now => {
                debug!(%replaced, %now, delay_ms, "transient flag re-triggered, deadline extended");
            }
            _ => debug!(%now, delay_ms, "transient flag triggered"),
        }

        self.notifier.notify();
    }

    /// Trigger with the configured delay.
    pub fn trigger_default(&mut self) {
        self.trigger(self.delay);
    }

    /// Whether the flag shows its active value right now.
    ///
    /// A reversion whose deadline has passed counts as applied even before
    /// [`tick`](Self::tick) observes it.
    pub fn is_active(&self) -> bool {
        self.fsm.is_in(states::ACTIVE) && !self.is_expired()
    }

    fn is_expired(&self) -> bool {
        self.timer
            .deadline()
            .is_some_and(|deadline| self.clock.now() >= deadline)
    }

    pub fn value(&self) -> T {
        if self.is_active() {
            self.active
        } else {
            self.default
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// When the pending reversion is due, if one is pending.
    pub fn deadline(&self) -> Option<Timestamp> {
        self.timer.deadline()
    }

    /// Disarm the pending reversion without changing the value.
    ///
    /// Returns `true` if a reversion was pending. A reversion that is
    /// already due is applied instead of cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.is_expired() {
            self.tick();
            return false;
        }

        let cancelled = self.timer.cancel();
        if cancelled {
            debug!("transient flag reversion cancelled");
        }
        cancelled
    }

    /// Cancel any pending reversion and return to the default value.
    pub fn reset(&mut self) {
        self.timer.cancel();
        if self.fsm.is_in(states::ACTIVE) {
            self.fsm.send(RESET);
            self.notifier.notify();
        }
    }

    /// Apply the reversion if its deadline has passed and notify the owner.
    ///
    /// Returns `true` if a reversion was applied.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        if !self.timer.poll(now) {
            return false;
        }

        self.fsm.send(EXPIRE);
        debug!(%now, "transient flag reverted");
        self.notifier.notify();
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for TransientStateFlag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransientStateFlag")
            .field("default", &self.default)
            .field("active", &self.active)
            .field("state", &self.fsm.current_state())
            .field("deadline", &self.timer.deadline())
            .finish()
    }
}
