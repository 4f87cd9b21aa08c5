//! Integration tests for the demo gallery
//!
//! These tests drive the gallery the way the terminal driver does: clicks
//! addressed by widget name and element key, time advanced on a manual
//! clock, and output read back as text.

use std::time::Duration;

use veneer_core::{EventResponse, ManualClock, StateConfig};
use veneer_widgets::{Gallery, WidgetContext, WidgetError};

fn gallery_with_clock() -> (Gallery, std::sync::Arc<ManualClock>) {
    let clock = ManualClock::shared();
    let ctx = WidgetContext::new(clock.clone(), StateConfig::default());
    (Gallery::demo(&ctx).unwrap(), clock)
}

#[test]
fn test_all_components_render_together() {
    let (gallery, _clock) = gallery_with_clock();
    let text = gallery.render_text();

    assert!(text.contains("== profile (user-profile) =="));
    assert!(text.contains("Jane Smith"));
    assert!(text.contains("# Projects"));
    assert!(text.contains("[active] <badge>"));
    assert!(text.contains("[inactive] <badge> disabled"));
    assert!(text.contains("No results found"));
    assert!(text.contains("Summary view"));
    assert!(!text.contains("Recent actions:"));
}

#[test]
fn test_icon_log_keeps_last_three_actions() {
    let (mut gallery, _clock) = gallery_with_clock();

    for element in ["add", "edit", "delete", "add"] {
        assert_eq!(gallery.click("icons", element), Ok(EventResponse::Handled));
    }

    let node = gallery.render_widget("icons").unwrap();
    let text = node.to_text();
    assert_eq!(
        text.lines().filter(|line| line.trim_start().starts_with("- ")).collect::<Vec<_>>(),
        vec!["  - Edited item", "  - Deleted item", "  - Added item"]
    );
}

#[test]
fn test_empty_state_reverts_on_tick() {
    let (mut gallery, clock) = gallery_with_clock();
    gallery.dirty_flag().take();

    gallery.click("empty-state", "clear-filters").unwrap();
    assert!(gallery.dirty_flag().take());
    assert!(gallery.render_text().contains("Filters cleared!"));

    clock.advance(Duration::from_millis(1500));
    assert!(!gallery.tick());
    assert!(!gallery.dirty_flag().take());

    clock.advance(Duration::from_millis(600));
    assert!(gallery.tick());
    assert!(gallery.dirty_flag().take());
    assert!(gallery.render_text().contains("No results found"));
}

#[test]
fn test_remount_discards_pending_reset_and_log() {
    let (mut gallery, clock) = gallery_with_clock();

    gallery.click("empty-state", "clear-filters").unwrap();
    gallery.click("icons", "add").unwrap();

    gallery.remount("empty-state").unwrap();
    gallery.remount("icons").unwrap();

    let text = gallery.render_text();
    assert!(text.contains("No results found"));
    assert!(!text.contains("Recent actions:"));

    clock.advance(Duration::from_secs(3));
    assert!(!gallery.tick());
}

#[test]
fn test_disabled_badge_and_closed_menu_are_inert() {
    let (mut gallery, _clock) = gallery_with_clock();

    assert_eq!(
        gallery.click("badge-inactive", "badge"),
        Ok(EventResponse::Ignored)
    );
    assert_eq!(gallery.click("menu", "edit"), Ok(EventResponse::Ignored));

    gallery.click("menu", "toggle").unwrap();
    assert_eq!(gallery.click("menu", "edit"), Ok(EventResponse::Handled));
    assert!(gallery.render_text().contains("Last action: Edit"));
}

#[test]
fn test_header_toggle_and_badge_counter() {
    let (mut gallery, _clock) = gallery_with_clock();

    gallery.click("header", "toggle-subtitle").unwrap();
    let header = gallery.render_widget("header").unwrap();
    assert!(header.contains_text("Show subtitle"));
    assert!(!header.contains_text("Manage your projects"));

    gallery.click("badge-pending", "badge").unwrap();
    gallery.click("badge-pending", "badge").unwrap();
    assert!(gallery
        .render_widget("badge-pending")
        .unwrap()
        .contains_text("Clicked 2x"));
}

#[test]
fn test_routing_errors() {
    let (mut gallery, _clock) = gallery_with_clock();

    assert!(matches!(
        gallery.click("sidebar", "toggle"),
        Err(WidgetError::UnknownWidget(_))
    ));
    assert!(matches!(
        gallery.click("profile", "name"),
        Err(WidgetError::UnknownElement { .. })
    ));
}

#[test]
fn test_empty_state_expires_between_ticks() {
    let (mut gallery, clock) = gallery_with_clock();

    gallery.click("empty-state", "clear-filters").unwrap();
    clock.advance(Duration::from_millis(2500));

    // No frame has ticked since the deadline
    let node = gallery.render_widget("empty-state").unwrap();
    assert!(node.contains_text("No results found"));
    assert_eq!(
        gallery.click("empty-state", "clear-filters"),
        Ok(EventResponse::Handled)
    );
    assert!(gallery.render_text().contains("Filters cleared!"));
}

#[test]
fn test_unmounted_widget_is_inert() {
    let (mut gallery, clock) = gallery_with_clock();

    gallery.click("empty-state", "clear-filters").unwrap();
    gallery.click("icons", "add").unwrap();
    gallery.unmount("empty-state").unwrap();
    gallery.unmount("icons").unwrap();
    gallery.dirty_flag().take();

    assert_eq!(
        gallery.click("empty-state", "clear-filters"),
        Ok(EventResponse::Ignored)
    );
    assert_eq!(gallery.click("icons", "delete"), Ok(EventResponse::Ignored));
    assert!(!gallery.dirty_flag().take());

    clock.advance(Duration::from_secs(5));
    assert!(!gallery.tick());
    assert!(!gallery.render_text().contains("== icons"));

    // The recorded log survives until the widget is mounted again
    let icons = gallery.render_widget("icons").unwrap();
    assert!(icons.contains_text("Added item"));
    assert!(!icons.contains_text("Deleted item"));

    gallery.mount("icons").unwrap();
    assert!(!gallery.render_widget("icons").unwrap().contains_text("Recent actions:"));
}

#[test]
fn test_component_callbacks_feed_interaction_counter() {
    let (mut gallery, _clock) = gallery_with_clock();

    gallery.click("icons", "add").unwrap();
    gallery.click("menu", "toggle").unwrap();
    gallery.click("menu", "delete").unwrap();
    gallery.click("empty-state", "clear-filters").unwrap();
    // Badges have no callback
    gallery.click("badge-active", "badge").unwrap();

    let counter = gallery.render_widget("interactions").unwrap();
    assert!(counter.contains_text("Interactions logged: 3"));
}
