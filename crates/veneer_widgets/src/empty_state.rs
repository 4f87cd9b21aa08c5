//! Empty search results panel
//!
//! "Clear filters" shows a confirmation that reverts to the empty state
//! after the configured delay.

use std::fmt;

use tracing::debug;
use veneer_core::{Event, EventResponse, TransientStateFlag};

use crate::context::WidgetContext;
use crate::node::Node;
use crate::widget::Widget;

/// Element key of the clear-filters button
pub const CLEAR_FILTERS: &str = "clear-filters";

type Callback = Box<dyn FnMut() + Send>;

/// Empty-state panel with a timed confirmation
pub struct EmptyStateExample {
    cleared: TransientStateFlag<bool>,
    on_action: Option<Callback>,
}

impl EmptyStateExample {
    pub fn new(ctx: &WidgetContext) -> Self {
        let cleared = TransientStateFlag::new(ctx.clock())
            .with_delay(ctx.config().transient.delay())
            .with_render_callback(ctx.render_callback());

        Self {
            cleared,
            on_action: None,
        }
    }

    pub fn on_action<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_action = Some(Box::new(callback));
        self
    }

    pub fn filters_cleared(&self) -> bool {
        self.cleared.is_active()
    }

    fn clear_filters(&mut self) -> EventResponse {
        // The button is hidden while the confirmation is showing
        if self.cleared.is_active() {
            return EventResponse::Ignored;
        }

        self.cleared.trigger_default();
        if let Some(callback) = self.on_action.as_mut() {
            callback();
        }
        EventResponse::Handled
    }
}

impl Widget for EmptyStateExample {
    fn kind(&self) -> &'static str {
        "empty-state"
    }

    fn render(&self) -> Node {
        if self.cleared.is_active() {
            return Node::Group(vec![
                Node::heading("Filters cleared!"),
                Node::paragraph("Try searching again with updated criteria."),
            ]);
        }

        Node::Group(vec![
            Node::heading("No results found"),
            Node::paragraph("Try adjusting your search criteria or filters."),
            Node::button(CLEAR_FILTERS, "Clear filters"),
        ])
    }

    fn handle_event(&mut self, event: &Event) -> EventResponse {
        if event.is_click_on(CLEAR_FILTERS) {
            self.clear_filters()
        } else {
            EventResponse::Unknown
        }
    }

    fn tick(&mut self) -> bool {
        self.cleared.tick()
    }

    fn mount(&mut self) {
        self.cleared.reset();
    }

    fn unmount(&mut self) {
        if self.cleared.cancel() {
            debug!("empty state unmounted with a pending reset");
        }
    }
}

impl fmt::Debug for EmptyStateExample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmptyStateExample")
            .field("cleared", &self.cleared)
            .finish_non_exhaustive()
    }
}
