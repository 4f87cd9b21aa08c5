//! Page-wide interaction counter
//!
//! Component callbacks hold an [`InteractionHandle`] and report through it;
//! the counter widget renders the running total.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use veneer_core::{Event, EventResponse, Notifier};

use crate::context::WidgetContext;
use crate::node::Node;
use crate::widget::Widget;

/// Cloneable reporter handed to component callbacks
#[derive(Clone, Debug)]
pub struct InteractionHandle {
    count: Arc<AtomicUsize>,
    notifier: Notifier,
}

impl InteractionHandle {
    pub fn record(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.notifier.notify();
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

/// Shows how many component callbacks have fired
pub struct InteractionCounter {
    handle: InteractionHandle,
}

impl InteractionCounter {
    pub fn new(ctx: &WidgetContext) -> Self {
        Self {
            handle: InteractionHandle {
                count: Arc::new(AtomicUsize::new(0)),
                notifier: Notifier::new(ctx.render_callback()),
            },
        }
    }

    pub fn handle(&self) -> InteractionHandle {
        self.handle.clone()
    }

    pub fn count(&self) -> usize {
        self.handle.count()
    }
}

impl Widget for InteractionCounter {
    fn kind(&self) -> &'static str {
        "interaction-counter"
    }

    fn render(&self) -> Node {
        Node::small(format!("Interactions logged: {}", self.count()))
    }

    fn handle_event(&mut self, _event: &Event) -> EventResponse {
        EventResponse::Unknown
    }

    fn mount(&mut self) {
        self.handle.count.store(0, Ordering::SeqCst);
        self.handle.notifier.notify();
    }
}

impl fmt::Debug for InteractionCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionCounter")
            .field("count", &self.count())
            .finish()
    }
}
