//! Panel whose presentation is chosen from runtime variants
//!
//! Kind and severity are closed enums, so every combination is known at
//! compile time and no invalid tag can be constructed.

use std::fmt;

use veneer_core::{Event, EventResponse, Toggle};

use crate::context::WidgetContext;
use crate::node::Node;
use crate::widget::Widget;

/// Element key of the details toggle
pub const TOGGLE_DETAILS: &str = "toggle-details";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Alert,
    Card,
    Banner,
}

impl PanelKind {
    pub fn label(&self) -> &'static str {
        match self {
            PanelKind::Alert => "alert",
            PanelKind::Card => "card",
            PanelKind::Banner => "banner",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Whether the panel should be rendered as a call to action
    pub fn is_urgent(&self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A panel that switches between a summary and a detailed view
#[derive(Debug)]
pub struct DynamicPanel {
    kind: PanelKind,
    severity: Severity,
    show_details: Toggle,
}

impl DynamicPanel {
    pub fn new(ctx: &WidgetContext, kind: PanelKind, severity: Severity) -> Self {
        Self {
            kind,
            severity,
            show_details: Toggle::new(false).with_render_callback(ctx.render_callback()),
        }
    }

    pub fn panel_kind(&self) -> PanelKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_expanded(&self) -> bool {
        self.show_details.get()
    }
}

impl Widget for DynamicPanel {
    fn kind(&self) -> &'static str {
        "dynamic-panel"
    }

    fn render(&self) -> Node {
        let content = if self.show_details.get() {
            Node::paragraph(format!(
                "Detailed information for {} with {} status.",
                self.kind, self.severity
            ))
        } else {
            Node::small("Summary view")
        };

        Node::Group(vec![
            content,
            Node::button(TOGGLE_DETAILS, "Toggle Details").danger(self.severity.is_urgent()),
        ])
    }

    fn handle_event(&mut self, event: &Event) -> EventResponse {
        if !event.is_click_on(TOGGLE_DETAILS) {
            return EventResponse::Unknown;
        }
        self.show_details.toggle();
        EventResponse::Handled
    }

    fn mount(&mut self) {
        self.show_details.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::{ManualClock, StateConfig, Timestamp};

    #[test]
    fn test_summary_then_details() {
        let ctx = WidgetContext::new(ManualClock::shared(), StateConfig::default());
        let mut panel = DynamicPanel::new(&ctx, PanelKind::Alert, Severity::Warning);
        assert!(panel.render().contains_text("Summary view"));

        panel.handle_event(&Event::click(TOGGLE_DETAILS, Timestamp::zero()));
        assert!(panel
            .render()
            .contains_text("Detailed information for alert with warning status."));

        panel.handle_event(&Event::click(TOGGLE_DETAILS, Timestamp::zero()));
        assert!(!panel.is_expanded());
    }

    #[test]
    fn test_every_variant_renders() {
        let ctx = WidgetContext::new(ManualClock::shared(), StateConfig::default());
        for kind in [PanelKind::Alert, PanelKind::Card, PanelKind::Banner] {
            for severity in [Severity::Info, Severity::Warning, Severity::Error] {
                let mut panel = DynamicPanel::new(&ctx, kind, severity);
                panel.handle_event(&Event::click(TOGGLE_DETAILS, Timestamp::zero()));
                let text = panel.render().to_text();
                assert!(text.contains(kind.label()));
                assert!(text.contains(severity.label()));
            }
        }
    }
}
