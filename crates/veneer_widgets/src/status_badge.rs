//! Status badge with a click counter

use std::fmt;

use tracing::trace;
use veneer_core::{Event, EventResponse, Notifier};

use crate::context::WidgetContext;
use crate::node::Node;
use crate::widget::Widget;

/// Element key of the badge itself
pub const BADGE: &str = "badge";

/// Status shown by a badge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    Inactive,
    Pending,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Pending => "pending",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A status label that counts clicks unless disabled
#[derive(Debug)]
pub struct StatusBadge {
    status: Status,
    disabled: bool,
    clicks: u32,
    notifier: Notifier,
}

impl StatusBadge {
    pub fn new(ctx: &WidgetContext, status: Status) -> Self {
        Self {
            status,
            disabled: false,
            clicks: 0,
            notifier: Notifier::new(ctx.render_callback()),
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    fn click(&mut self) -> EventResponse {
        if self.disabled {
            trace!(status = %self.status, "click on disabled badge");
            return EventResponse::Ignored;
        }

        self.clicks += 1;
        self.notifier.notify();
        EventResponse::Handled
    }
}

impl Widget for StatusBadge {
    fn kind(&self) -> &'static str {
        "status-badge"
    }

    fn render(&self) -> Node {
        let mut children = vec![Node::button(BADGE, self.status.label()).disabled(self.disabled)];
        if self.clicks > 0 {
            children.push(Node::small(format!("Clicked {}x", self.clicks)));
        }
        Node::Group(children)
    }

    fn handle_event(&mut self, event: &Event) -> EventResponse {
        if event.is_click_on(BADGE) {
            self.click()
        } else {
            EventResponse::Unknown
        }
    }

    fn mount(&mut self) {
        self.clicks = 0;
        self.notifier.notify();
    }
}
