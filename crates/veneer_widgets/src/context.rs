//! Shared construction context for widgets

use veneer_core::{DirtyFlag, RenderCallback, SharedClock, StateConfig};

/// What every widget needs at construction time: a clock for its timed
/// state, the configured unit options, and the frame's dirty flag.
#[derive(Clone, Debug)]
pub struct WidgetContext {
    clock: SharedClock,
    config: StateConfig,
    dirty: DirtyFlag,
}

impl WidgetContext {
    pub fn new(clock: SharedClock, config: StateConfig) -> Self {
        Self {
            clock,
            config,
            dirty: DirtyFlag::new(),
        }
    }

    pub fn clock(&self) -> SharedClock {
        self.clock.clone()
    }

    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    pub fn dirty_flag(&self) -> &DirtyFlag {
        &self.dirty
    }

    /// Render callback that marks this context's frame dirty
    pub fn render_callback(&self) -> RenderCallback {
        self.dirty.callback()
    }
}
