//! Kebab-style action menu
//!
//! A dropdown with Edit and Delete entries. Picking an entry remembers it as
//! the last action, runs the matching callback and closes the menu.

use std::fmt;

use tracing::{debug, trace};
use veneer_core::fsm::{InputId, StateMachine};
use veneer_core::events::event_types;
use veneer_core::{Event, EventResponse, Notifier};

use crate::context::WidgetContext;
use crate::node::Node;
use crate::widget::Widget;

/// Menu states
pub mod states {
    use veneer_core::fsm::StateId;

    pub const CLOSED: StateId = 0;
    pub const OPEN: StateId = 1;
}

const TOGGLE: InputId = 1;
const SELECT: InputId = 2;

/// Element keys
pub mod keys {
    pub const TOGGLE: &str = "toggle";
    pub const EDIT: &str = "edit";
    pub const DELETE: &str = "delete";
}

/// Entries of the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Edit,
    Delete,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Edit => "Edit",
            MenuAction::Delete => "Delete",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            MenuAction::Edit => keys::EDIT,
            MenuAction::Delete => keys::DELETE,
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            keys::EDIT => Some(MenuAction::Edit),
            keys::DELETE => Some(MenuAction::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type Callback = Box<dyn FnMut() + Send>;

/// Dropdown menu with edit/delete actions
pub struct ActionMenu {
    fsm: StateMachine,
    disabled: bool,
    last_action: Option<MenuAction>,
    on_edit: Option<Callback>,
    on_delete: Option<Callback>,
    notifier: Notifier,
}

impl ActionMenu {
    pub fn new(ctx: &WidgetContext) -> Self {
        Self {
            fsm: Self::create_fsm(),
            disabled: false,
            last_action: None,
            on_edit: None,
            on_delete: None,
            notifier: Notifier::new(ctx.render_callback()),
        }
    }

    fn create_fsm() -> StateMachine {
        StateMachine::builder(states::CLOSED)
            .on(states::CLOSED, TOGGLE, states::OPEN)
            .on(states::OPEN, TOGGLE, states::CLOSED)
            .on(states::OPEN, SELECT, states::CLOSED)
            .on_enter(states::OPEN, || trace!("action menu opened"))
            .build()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
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

    pub fn is_open(&self) -> bool {
        self.fsm.is_in(states::OPEN)
    }

    pub fn last_action(&self) -> Option<MenuAction> {
        self.last_action
    }

    fn toggle(&mut self) -> EventResponse {
        if self.disabled {
            return EventResponse::Ignored;
        }
        self.fsm.send(TOGGLE);
        self.notifier.notify();
        EventResponse::Handled
    }

    fn select(&mut self, action: MenuAction) -> EventResponse {
        // Entries are only rendered while the menu is open
        if !self.fsm.can_send(SELECT) {
            return EventResponse::Ignored;
        }

        debug!(%action, "action menu selection");
        self.last_action = Some(action);

        let callback = match action {
            MenuAction::Edit => self.on_edit.as_mut(),
            MenuAction::Delete => self.on_delete.as_mut(),
        };
        if let Some(callback) = callback {
            callback();
        }

        self.fsm.send(SELECT);
        self.notifier.notify();
        EventResponse::Handled
    }
}

impl Widget for ActionMenu {
    fn kind(&self) -> &'static str {
        "action-menu"
    }

    fn render(&self) -> Node {
        let mut children = vec![Node::button(keys::TOGGLE, "Actions").disabled(self.disabled)];

        if self.is_open() {
            for action in [MenuAction::Edit, MenuAction::Delete] {
                children.push(Node::button(action.key(), action.label()));
            }
        }

        if let Some(action) = self.last_action {
            children.push(Node::small(format!("Last action: {action}")));
        }

        Node::Group(children)
    }

    fn handle_event(&mut self, event: &Event) -> EventResponse {
        if event.event_type != event_types::CLICK {
            return EventResponse::Unknown;
        }

        match event.target.as_str() {
            keys::TOGGLE => self.toggle(),
            other => match MenuAction::from_key(other) {
                Some(action) => self.select(action),
                None => EventResponse::Unknown,
            },
        }
    }

    fn mount(&mut self) {
        self.fsm.restart();
        self.last_action = None;
        self.notifier.notify();
    }
}

impl fmt::Debug for ActionMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionMenu")
            .field("open", &self.is_open())
            .field("disabled", &self.disabled)
            .field("last_action", &self.last_action)
            .finish_non_exhaustive()
    }
}
