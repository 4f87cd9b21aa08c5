//! Error types for veneer_widgets

use thiserror::Error;

/// Errors raised when routing events through a [`Gallery`](crate::Gallery)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("no widget named `{0}`")]
    UnknownWidget(String),

    #[error("widget `{widget}` has no element `{element}`")]
    UnknownElement { widget: String, element: String },

    #[error("a widget named `{0}` already exists")]
    DuplicateWidget(String),
}

/// Result type for widget routing
pub type Result<T> = std::result::Result<T, WidgetError>;
