//! Widget gallery
//!
//! Owns a named set of widgets, routes events to them by name and renders
//! them in insertion order. [`Gallery::demo`] assembles the standard set of
//! demo components.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use tracing::{debug, info, warn};
use veneer_core::events::event_types;
use veneer_core::{DirtyFlag, Event, EventResponse, SharedClock};

use crate::action_menu::ActionMenu;
use crate::context::WidgetContext;
use crate::dynamic_panel::{DynamicPanel, PanelKind, Severity};
use crate::empty_state::EmptyStateExample;
use crate::error::{Result, WidgetError};
use crate::icon_buttons::IconButtons;
use crate::interaction_counter::{InteractionCounter, InteractionHandle};
use crate::node::Node;
use crate::page_header::PageHeader;
use crate::profile::UserProfile;
use crate::status_badge::{Status, StatusBadge};
use crate::widget::{Widget, WidgetId};

struct Entry {
    name: String,
    widget: Box<dyn Widget>,
    mounted: bool,
}

/// A named collection of mounted widgets
pub struct Gallery {
    widgets: SlotMap<WidgetId, Entry>,
    by_name: FxHashMap<String, WidgetId>,
    order: Vec<WidgetId>,
    clock: SharedClock,
    dirty: DirtyFlag,
}

impl Gallery {
    /// An empty gallery sharing `ctx`'s clock and dirty flag
    pub fn new(ctx: &WidgetContext) -> Self {
        Self {
            widgets: SlotMap::with_key(),
            by_name: FxHashMap::default(),
            order: Vec::new(),
            clock: ctx.clock(),
            dirty: ctx.dirty_flag().clone(),
        }
    }

    /// The demo component set.
    ///
    /// Component callbacks report to a shared "interactions" counter.
    pub fn demo(ctx: &WidgetContext) -> Result<Self> {
        let mut gallery = Self::new(ctx);
        let counter = InteractionCounter::new(ctx);
        let interactions = counter.handle();

        gallery.insert(
            "profile",
            UserProfile::new(
                "Jane Smith",
                "Senior Platform Engineer",
                "jane.smith@example.com",
            ),
        )?;
        gallery.insert(
            "header",
            PageHeader::new(ctx, "Projects").subtitle("Manage your projects and team members"),
        )?;
        gallery.insert("badge-active", StatusBadge::new(ctx, Status::Active))?;
        gallery.insert("badge-pending", StatusBadge::new(ctx, Status::Pending))?;
        gallery.insert(
            "badge-inactive",
            StatusBadge::new(ctx, Status::Inactive).disabled(true),
        )?;
        gallery.insert(
            "menu",
            ActionMenu::new(ctx)
                .on_edit(report(&interactions, "edit requested"))
                .on_delete(report(&interactions, "delete requested")),
        )?;
        gallery.insert(
            "icons",
            IconButtons::new(ctx)
                .on_add(report(&interactions, "add requested"))
                .on_edit(report(&interactions, "edit requested"))
                .on_delete(report(&interactions, "delete requested")),
        )?;
        gallery.insert(
            "empty-state",
            EmptyStateExample::new(ctx).on_action(report(&interactions, "filters cleared")),
        )?;
        gallery.insert(
            "panel-alert",
            DynamicPanel::new(ctx, PanelKind::Alert, Severity::Warning),
        )?;
        gallery.insert(
            "panel-card",
            DynamicPanel::new(ctx, PanelKind::Card, Severity::Info),
        )?;
        gallery.insert(
            "panel-banner",
            DynamicPanel::new(ctx, PanelKind::Banner, Severity::Error),
        )?;
        gallery.insert("interactions", counter)?;

        Ok(gallery)
    }

    /// Add and mount a widget under `name`
    pub fn insert<W: Widget + 'static>(&mut self, name: &str, widget: W) -> Result<WidgetId> {
        self.insert_boxed(name, Box::new(widget))
    }

    fn insert_boxed(&mut self, name: &str, mut widget: Box<dyn Widget>) -> Result<WidgetId> {
        if self.by_name.contains_key(name) {
            return Err(WidgetError::DuplicateWidget(name.to_string()));
        }

        widget.mount();
        let id = self.widgets.insert(Entry {
            name: name.to_string(),
            widget,
            mounted: true,
        });
        self.by_name.insert(name.to_string(), id);
        self.order.push(id);
        self.dirty.mark();
        Ok(id)
    }

    /// Unmount and drop a widget
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let id = self.lookup(name)?;
        self.by_name.remove(name);
        self.order.retain(|other| *other != id);
        if let Some(mut entry) = self.widgets.remove(id) {
            if entry.mounted {
                entry.widget.unmount();
            }
        }
        self.dirty.mark();
        Ok(())
    }

    /// Widget names in render order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter_map(|id| self.widgets.get(*id))
            .map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn dirty_flag(&self) -> &DirtyFlag {
        &self.dirty
    }

    /// Route an event to the widget called `name`.
    ///
    /// `MOUNT` and `UNMOUNT` events drive the widget's lifecycle; anything
    /// else goes to its event handler. An unmounted widget ignores
    /// everything but `MOUNT`.
    pub fn dispatch(&mut self, name: &str, event: &Event) -> Result<EventResponse> {
        let id = self.lookup(name)?;
        let entry = self
            .widgets
            .get_mut(id)
            .ok_or_else(|| WidgetError::UnknownWidget(name.to_string()))?;

        let response = match (event.event_type, entry.mounted) {
            (event_types::MOUNT, false) => {
                entry.widget.mount();
                entry.mounted = true;
                EventResponse::Handled
            }
            (event_types::UNMOUNT, true) => {
                entry.widget.unmount();
                entry.mounted = false;
                EventResponse::Handled
            }
            (event_types::MOUNT | event_types::UNMOUNT, _) => EventResponse::Ignored,
            (_, true) => entry.widget.handle_event(event),
            (_, false) => EventResponse::Ignored,
        };

        match response {
            EventResponse::Handled => debug!(widget = name, target = %event.target, "event handled"),
            EventResponse::Ignored => {
                debug!(widget = name, target = %event.target, "event ignored")
            }
            EventResponse::Unknown => {
                warn!(widget = name, target = %event.target, "no such element");
                return Err(WidgetError::UnknownElement {
                    widget: name.to_string(),
                    element: event.target.clone(),
                });
            }
        }

        Ok(response)
    }

    /// Click `element` on widget `name` at the current time
    pub fn click(&mut self, name: &str, element: &str) -> Result<EventResponse> {
        let event = Event::click(element, self.clock.now());
        self.dispatch(name, &event)
    }

    /// Tear a widget down, disarming its timers. It stays listed but
    /// inert until mounted again.
    pub fn unmount(&mut self, name: &str) -> Result<EventResponse> {
        let event = Event::new(event_types::UNMOUNT, "", self.clock.now());
        self.dispatch(name, &event)
    }

    /// Mount a widget from fresh local state
    pub fn mount(&mut self, name: &str) -> Result<EventResponse> {
        let event = Event::new(event_types::MOUNT, "", self.clock.now());
        self.dispatch(name, &event)
    }

    pub fn is_mounted(&self, name: &str) -> Result<bool> {
        let id = self.lookup(name)?;
        Ok(self.widgets.get(id).is_some_and(|entry| entry.mounted))
    }

    /// Unmount and mount a widget again, discarding its local state
    pub fn remount(&mut self, name: &str) -> Result<()> {
        self.unmount(name)?;
        self.mount(name)?;
        Ok(())
    }

    /// Advance every mounted widget's timers. Returns `true` if anything
    /// changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for (_, entry) in self.widgets.iter_mut().filter(|(_, entry)| entry.mounted) {
            changed |= entry.widget.tick();
        }
        changed
    }

    /// Render one widget
    pub fn render_widget(&self, name: &str) -> Result<Node> {
        let id = self.lookup(name)?;
        self.widgets
            .get(id)
            .map(|entry| entry.widget.render())
            .ok_or_else(|| WidgetError::UnknownWidget(name.to_string()))
    }

    /// Render every mounted widget as text, each under a
    /// `== name (kind) ==` banner
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let mounted = self
            .order
            .iter()
            .filter_map(|id| self.widgets.get(*id))
            .filter(|entry| entry.mounted);
        for entry in mounted {
            out.push_str(&format!("== {} ({}) ==\n", entry.name, entry.widget.kind()));
            out.push_str(&entry.widget.render().to_text());
        }
        out
    }

    fn lookup(&self, name: &str) -> Result<WidgetId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| WidgetError::UnknownWidget(name.to_string()))
    }
}

impl Drop for Gallery {
    fn drop(&mut self) {
        for (_, entry) in self.widgets.iter_mut().filter(|(_, entry)| entry.mounted) {
            entry.widget.unmount();
        }
    }
}

fn report(interactions: &InteractionHandle, what: &'static str) -> impl FnMut() + Send + 'static {
    let interactions = interactions.clone();
    move || {
        info!("{what}");
        interactions.record();
    }
}
