//! Handler registry and event dispatch.
//!
//! This module provides:
//! - `Handler`: closure type for widget event handlers
//! - `WidgetHandlers`: map of handler names passed into widget builders
//! - `HandlerRegistry`: stores handlers keyed by (element_id, event_type)
//! - `dispatch`: routes a high-level [`Event`] to registered handlers
//!
//! Widgets register their interaction closures during `build()`. The host
//! loop turns input into [`Event`]s (directly or via
//! [`crate::focus::FocusState::handle_key`]) and feeds them to [`dispatch`].

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::event::{Event, Key, Modifiers};

/// A handler closure that receives event-specific data.
///
/// The closure captures any state references at registration time.
pub type Handler = Arc<dyn Fn(&EventData) + Send + Sync>;

/// Map of handler names to handlers, used for passing callbacks to widgets.
///
/// Standard handler names:
/// - `"on_activate"` - click, Enter/Space on a focused element
/// - `"on_change"` - logical value changed (checkbox, radio, filter)
/// - `"on_click"` - raw click pass-through
/// - `"on_key"` - raw key pass-through
/// - `"on_focus"` - element gained focus
/// - `"on_blur"` - element lost focus
/// - `"on_dismiss"` - banner dismissed
pub type WidgetHandlers = HashMap<&'static str, Handler>;

/// Event-specific data passed to handlers.
///
/// Pass-through handlers receive the raw payload of the triggering event;
/// change handlers receive the widget's post-change logical value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventData {
    /// No event data.
    #[default]
    None,
    /// Checkbox toggled to a new checked state.
    Toggle { checked: bool, name: String },
    /// Radio option selected.
    Select { value: String, name: String },
    /// Multi-select filter list changed.
    Filter { values: Vec<String> },
    /// Raw key press.
    Key { key: Key, modifiers: Modifiers },
    /// Element lost focus.
    Blur {
        /// The element that received focus (if any).
        new_target: Option<String>,
    },
}

impl EventData {
    /// Get the new checked state from a Toggle event.
    pub fn checked(&self) -> Option<bool> {
        match self {
            EventData::Toggle { checked, .. } => Some(*checked),
            _ => None,
        }
    }

    /// Get the selected value from a Select event.
    pub fn value(&self) -> Option<&str> {
        match self {
            EventData::Select { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Get the filter value list from a Filter event.
    pub fn values(&self) -> Option<&[String]> {
        match self {
            EventData::Filter { values } => Some(values),
            _ => None,
        }
    }
}

/// Registry for widget event handlers.
///
/// Maps (element_id, event_type) to handler closures. Cleared at the start
/// of every build pass so handlers from stale or collapsed content don't
/// survive a re-render.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event.
    ///
    /// # Arguments
    /// - `element_id`: The element's unique ID (from Element.id)
    /// - `event`: The event type (e.g., "on_activate", "on_key")
    /// - `handler`: The handler closure
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Clear all handlers.
    ///
    /// Called at the start of each build pass to remove handlers from
    /// previous renders.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().map(|h| h.is_empty()).unwrap_or(true)
    }
}

/// Dispatch a high-level event to registered handlers.
///
/// Routing:
/// - `Click` fires `on_click`, then `on_activate`, on the target.
/// - `Key` fires `on_key` with the key payload; an unmodified Enter or
///   Space additionally fires `on_activate`.
/// - `Focus` fires `on_focus`; `Blur` fires `on_blur` with the new target.
///
/// Each registered handler fires at most once per dispatched event.
/// Returns true if any handler ran.
pub fn dispatch(event: &Event, registry: &HandlerRegistry) -> bool {
    let mut fired = false;

    match event {
        Event::Click {
            target: Some(id), ..
        } => {
            fired |= fire(registry, id, "on_click", &EventData::None);
            fired |= fire(registry, id, "on_activate", &EventData::None);
        }
        Event::Click { target: None, .. } => {}

        Event::Key {
            target: Some(id),
            key,
            modifiers,
        } => {
            fired |= fire(
                registry,
                id,
                "on_key",
                &EventData::Key {
                    key: *key,
                    modifiers: *modifiers,
                },
            );
            if modifiers.none() && matches!(key, Key::Enter | Key::Char(' ')) {
                fired |= fire(registry, id, "on_activate", &EventData::None);
            }
        }
        Event::Key { target: None, .. } => {}

        Event::Focus { target } => {
            fired |= fire(registry, target, "on_focus", &EventData::None);
        }

        Event::Blur { target, new_target } => {
            fired |= fire(
                registry,
                target,
                "on_blur",
                &EventData::Blur {
                    new_target: new_target.clone(),
                },
            );
        }
    }

    fired
}

fn fire(registry: &HandlerRegistry, id: &str, event: &str, data: &EventData) -> bool {
    match registry.get(id, event) {
        Some(handler) => {
            log::debug!("[dispatch] {id} {event}");
            handler(data);
            true
        }
        None => {
            log::trace!("[dispatch] {id} {event}: no handler");
            false
        }
    }
}
