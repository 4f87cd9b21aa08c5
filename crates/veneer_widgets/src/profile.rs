//! User profile card

use veneer_core::{Event, EventResponse};

use crate::node::Node;
use crate::widget::Widget;

/// Static card showing a person's name, role and email
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    name: String,
    role: String,
    email: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, role: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            email: email.into(),
        }
    }
}

impl Widget for UserProfile {
    fn kind(&self) -> &'static str {
        "user-profile"
    }

    fn render(&self) -> Node {
        Node::Group(vec![
            Node::heading(&self.name),
            Node::paragraph(&self.role),
            Node::small(&self.email),
        ])
    }

    fn handle_event(&mut self, _event: &Event) -> EventResponse {
        EventResponse::Unknown
    }
}
