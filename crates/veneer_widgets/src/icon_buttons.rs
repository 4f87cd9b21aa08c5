//! Icon button row with a recent-actions log

use std::fmt;

use tracing::debug;
use veneer_core::events::event_types;
use veneer_core::{BoundedEventLog, Event, EventResponse};

use crate::context::WidgetContext;
use crate::node::Node;
use crate::widget::Widget;

/// The three icon buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconAction {
    Add,
    Edit,
    Delete,
}

impl IconAction {
    pub const ALL: [IconAction; 3] = [IconAction::Add, IconAction::Edit, IconAction::Delete];

    /// Element key
    pub fn key(&self) -> &'static str {
        match self {
            IconAction::Add => "add",
            IconAction::Edit => "edit",
            IconAction::Delete => "delete",
        }
    }

    /// Accessible button label
    pub fn label(&self) -> &'static str {
        match self {
            IconAction::Add => "Add",
            IconAction::Edit => "Edit",
            IconAction::Delete => "Delete",
        }
    }

    /// Text recorded in the action log
    pub fn log_label(&self) -> &'static str {
        match self {
            IconAction::Add => "Added item",
            IconAction::Edit => "Edited item",
            IconAction::Delete => "Deleted item",
        }
    }

    pub fn is_danger(&self) -> bool {
        matches!(self, IconAction::Delete)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.key() == key)
    }
}

type Callback = Box<dyn FnMut() + Send>;

/// Add/edit/delete buttons that keep a short log of what was clicked
pub struct IconButtons {
    log: BoundedEventLog,
    on_add: Option<Callback>,
    on_edit: Option<Callback>,
    on_delete: Option<Callback>,
}

impl IconButtons {
    pub fn new(ctx: &WidgetContext) -> Self {
        let log = BoundedEventLog::new(ctx.config().event_log.capacity, ctx.clock())
            .with_render_callback(ctx.render_callback());

        Self {
            log,
            on_add: None,
            on_edit: None,
            on_delete: None,
        }
    }

    pub fn on_add<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_add = Some(Box::new(callback));
        self
    }

    pub fn on_edit<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_edit = Some(Box::new(callback));
        self
    }

    pub fn on_delete<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_delete = Some(Box::new(callback));
        self
    }

    /// Recent actions, oldest first
    pub fn recent_actions(&self) -> Vec<String> {
        self.log.snapshot()
    }

    fn perform(&mut self, action: IconAction) {
        debug!(action = action.key(), "icon button clicked");
        self.log.record(action.log_label());

        let callback = match action {
            IconAction::Add => self.on_add.as_mut(),
            IconAction::Edit => self.on_edit.as_mut(),
            IconAction::Delete => self.on_delete.as_mut(),
        };
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl Widget for IconButtons {
    fn kind(&self) -> &'static str {
        "icon-buttons"
    }

    fn render(&self) -> Node {
        let mut children: Vec<Node> = IconAction::ALL
            .iter()
            .map(|action| Node::button(action.key(), action.label()).danger(action.is_danger()))
            .collect();

        if !self.log.is_empty() {
            children.push(Node::List {
                title: "Recent actions:".to_string(),
                items: self.log.snapshot(),
            });
        }

        Node::Group(children)
    }

    fn handle_event(&mut self, event: &Event) -> EventResponse {
        if event.event_type != event_types::CLICK {
            return EventResponse::Unknown;
        }

        match IconAction::from_key(&event.target) {
            Some(action) => {
                self.perform(action);
                EventResponse::Handled
            }
            None => EventResponse::Unknown,
        }
    }

    fn mount(&mut self) {
        self.log.clear();
    }
}

impl fmt::Debug for IconButtons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconButtons")
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use veneer_core::{ManualClock, StateConfig, Timestamp};

    fn ctx() -> WidgetContext {
        WidgetContext::new(ManualClock::shared(), StateConfig::default())
    }

    fn click(action: IconAction) -> Event {
        Event::click(action.key(), Timestamp::zero())
    }

    #[test]
    fn test_no_log_initially() {
        let ctx = ctx();
        let buttons = IconButtons::new(&ctx);
        let node = buttons.render();

        for action in IconAction::ALL {
            assert!(node.find_button(action.key()).is_some());
        }
        assert!(!node.contains_text("Recent actions"));
    }

    #[test]
    fn test_click_records_and_calls_back() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let add_calls = calls.clone();
        let delete_calls = calls.clone();

        let ctx = ctx();
        let mut buttons = IconButtons::new(&ctx)
            .on_add(move || add_calls.lock().unwrap().push("add"))
            .on_delete(move || delete_calls.lock().unwrap().push("delete"));

        buttons.handle_event(&click(IconAction::Add));
        buttons.handle_event(&click(IconAction::Delete));

        assert_eq!(*calls.lock().unwrap(), vec!["add", "delete"]);
        assert_eq!(buttons.recent_actions(), vec!["Added item", "Deleted item"]);
        assert!(buttons.render().contains_text("Added item"));
    }

    #[test]
    fn test_keeps_last_three() {
        let ctx = ctx();
        let mut buttons = IconButtons::new(&ctx);

        for action in [
            IconAction::Add,
            IconAction::Edit,
            IconAction::Delete,
            IconAction::Add,
        ] {
            buttons.handle_event(&click(action));
        }

        assert_eq!(
            buttons.recent_actions(),
            vec!["Edited item", "Deleted item", "Added item"]
        );
    }

    #[test]
    fn test_delete_is_danger() {
        let ctx = ctx();
        let node = IconButtons::new(&ctx).render();
        assert_eq!(
            node.find_button("delete"),
            Some(&Node::button("delete", "Delete").danger(true))
        );
    }

    #[test]
    fn test_remount_clears_log() {
        let ctx = ctx();
        let mut buttons = IconButtons::new(&ctx);
        buttons.handle_event(&click(IconAction::Edit));

        buttons.unmount();
        buttons.mount();
        assert!(buttons.recent_actions().is_empty());
    }
}
