//! Boolean toggle

use crate::render::{Notifier, RenderCallback};

/// A boolean that flips on demand
#[derive(Clone, Debug)]
pub struct Toggle {
    value: bool,
    initial: bool,
    notifier: Notifier,
}

impl Toggle {
    pub fn new(initial: bool) -> Self {
        Self {
            value: initial,
            initial,
            notifier: Notifier::none(),
        }
    }

    pub fn with_render_callback(mut self, callback: RenderCallback) -> Self {
        self.notifier = Notifier::new(callback);
        self
    }

    /// Flip the value and return the new one.
    pub fn toggle(&mut self) -> bool {
        self.value = !self.value;
        self.notifier.notify();
        self.value
    }

    pub fn get(&self) -> bool {
        self.value
    }

    pub fn set(&mut self, value: bool) {
        if self.value != value {
            self.value = value;
            self.notifier.notify();
        }
    }

    /// Return to the value the toggle was created with.
    pub fn reset(&mut self) {
        self.set(self.initial);
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new(false)
    }
}
