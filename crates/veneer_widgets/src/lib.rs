//! Veneer Widget Library
//!
//! Headless demo components built on the veneer_core state units. Each
//! widget owns its interaction state, renders to a [`Node`] tree and is
//! driven by [`Event`](veneer_core::Event)s routed through a [`Gallery`].

pub mod action_menu;
pub mod context;
pub mod dynamic_panel;
pub mod empty_state;
pub mod error;
pub mod gallery;
pub mod icon_buttons;
pub mod interaction_counter;
pub mod node;
pub mod page_header;
pub mod profile;
pub mod status_badge;
pub mod widget;

pub use action_menu::{ActionMenu, MenuAction};
pub use context::WidgetContext;
pub use dynamic_panel::{DynamicPanel, PanelKind, Severity};
pub use empty_state::EmptyStateExample;
pub use error::{Result, WidgetError};
pub use gallery::Gallery;
pub use icon_buttons::{IconAction, IconButtons};
pub use interaction_counter::{InteractionCounter, InteractionHandle};
pub use node::Node;
pub use page_header::PageHeader;
pub use profile::UserProfile;
pub use status_badge::{Status, StatusBadge};
pub use widget::{Widget, WidgetId};
