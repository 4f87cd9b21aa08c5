//! Page header with a collapsible subtitle

use veneer_core::{Event, EventResponse, Toggle};

use crate::context::WidgetContext;
use crate::node::Node;
use crate::widget::Widget;

/// Element key of the subtitle toggle button
pub const TOGGLE_SUBTITLE: &str = "toggle-subtitle";

/// Title plus an optional subtitle the user can hide
#[derive(Debug)]
pub struct PageHeader {
    title: String,
    subtitle: Option<String>,
    show_subtitle: Toggle,
}

impl PageHeader {
    pub fn new(ctx: &WidgetContext, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            show_subtitle: Toggle::new(true).with_render_callback(ctx.render_callback()),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn is_subtitle_visible(&self) -> bool {
        self.subtitle.is_some() && self.show_subtitle.get()
    }
}

impl Widget for PageHeader {
    fn kind(&self) -> &'static str {
        "page-header"
    }

    fn render(&self) -> Node {
        let mut children = vec![Node::heading(&self.title)];

        if let Some(subtitle) = &self.subtitle {
            if self.show_subtitle.get() {
                children.push(Node::paragraph(subtitle));
            }
            let label = if self.show_subtitle.get() {
                "Hide subtitle"
            } else {
                "Show subtitle"
            };
            children.push(Node::button(TOGGLE_SUBTITLE, label));
        }

        Node::Group(children)
    }

    fn handle_event(&mut self, event: &Event) -> EventResponse {
        // Without a subtitle there is no toggle button
        if self.subtitle.is_none() || !event.is_click_on(TOGGLE_SUBTITLE) {
            return EventResponse::Unknown;
        }

        self.show_subtitle.toggle();
        EventResponse::Handled
    }

    fn mount(&mut self) {
        self.show_subtitle.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::{ManualClock, StateConfig, Timestamp};

    fn ctx() -> WidgetContext {
        WidgetContext::new(ManualClock::shared(), StateConfig::default())
    }

    fn toggle_click() -> Event {
        Event::click(TOGGLE_SUBTITLE, Timestamp::zero())
    }

    #[test]
    fn test_toggles_subtitle() {
        let ctx = ctx();
        let mut header = PageHeader::new(&ctx, "Test").subtitle("Subtitle text");
        assert!(header.render().contains_text("Subtitle text"));
        assert!(header.render().contains_text("Hide subtitle"));

        header.handle_event(&toggle_click());
        let node = header.render();
        assert!(!node.contains_text("Subtitle text"));
        assert!(node.contains_text("Show subtitle"));

        header.handle_event(&toggle_click());
        assert!(header.is_subtitle_visible());
    }

    #[test]
    fn test_no_subtitle_no_button() {
        let ctx = ctx();
        let mut header = PageHeader::new(&ctx, "Bare");

        assert!(header.render().find_button(TOGGLE_SUBTITLE).is_none());
        assert_eq!(header.handle_event(&toggle_click()), EventResponse::Unknown);
    }

    #[test]
    fn test_remount_shows_subtitle_again() {
        let ctx = ctx();
        let mut header = PageHeader::new(&ctx, "Test").subtitle("Sub");
        header.handle_event(&toggle_click());
        header.mount();
        assert!(header.is_subtitle_visible());
    }
}
