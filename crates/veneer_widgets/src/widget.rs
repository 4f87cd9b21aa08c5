//! Base widget trait and types

use slotmap::new_key_type;
use veneer_core::{Event, EventResponse};

use crate::node::Node;

new_key_type! {
    pub struct WidgetId;
}

/// Base trait for all widgets
///
/// A widget owns its interaction state exclusively. `unmount` must disarm
/// every pending timer; `mount` starts the widget from fresh local state.
pub trait Widget: Send {
    /// Short component name, used in logs
    fn kind(&self) -> &'static str;

    /// Render the current state
    fn render(&self) -> Node;

    /// Handle an event addressed to one of this widget's elements
    fn handle_event(&mut self, event: &Event) -> EventResponse;

    /// Advance timers. Returns `true` if the rendered output may have changed.
    fn tick(&mut self) -> bool {
        false
    }

    fn mount(&mut self) {}

    fn unmount(&mut self) {}
}
