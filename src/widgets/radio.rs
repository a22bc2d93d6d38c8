//! RadioGroup widget - a group of mutually exclusive radio buttons with
//! roving keyboard focus.

use std::sync::Arc;

use crate::dispatch::{EventData, HandlerRegistry, WidgetHandlers};
use crate::element::Element;
use crate::event::Key;
use crate::state::State;

/// State for a radio group widget.
///
/// Contains the selected value, the roving focus index, and available
/// options. Selection and focus are independent fields but normally move
/// together: [`select`](RadioState::select) sets both.
///
/// Option values must be unique within the group; supplying a value twice
/// is a caller contract violation and is not validated.
#[derive(Clone, Debug)]
pub struct RadioState<T: Clone> {
    /// The currently selected value, if any.
    pub value: Option<T>,
    /// The option holding the roving keyboard focus, if any.
    pub focused: Option<usize>,
    /// Available options as (value, label) pairs.
    pub options: Vec<(T, String)>,
}

impl<T: Clone> Default for RadioState<T> {
    fn default() -> Self {
        Self {
            value: None,
            focused: None,
            options: Vec::new(),
        }
    }
}

impl<T: Clone + PartialEq> RadioState<T> {
    /// Create a new RadioState with the given options.
    pub fn new(options: impl IntoIterator<Item = (T, impl Into<String>)>) -> Self {
        Self {
            value: None,
            focused: None,
            options: options.into_iter().map(|(v, l)| (v, l.into())).collect(),
        }
    }

    /// Set the initial selected value (the controlling seed).
    pub fn with_value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// Reconcile with a changed controlling value. Host wins.
    pub fn sync(&mut self, value: Option<T>) {
        self.value = value;
    }

    /// Index of the option carrying the given value.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.options.iter().position(|(v, _)| v == value)
    }

    /// Select the option at `index`, moving focus with it.
    /// Returns the selected value, or None if the index is out of range.
    pub fn select(&mut self, index: usize) -> Option<T> {
        let value = self.options.get(index)?.0.clone();
        self.value = Some(value.clone());
        self.focused = Some(index);
        Some(value)
    }

    /// The single roving tab stop: the focused option, else the selected
    /// option, else the first.
    pub fn roving_index(&self) -> usize {
        self.focused
            .or_else(|| self.value.as_ref().and_then(|v| self.index_of(v)))
            .unwrap_or(0)
    }

    /// The index reached by moving `delta` steps from `from`, wrapping at
    /// both ends.
    pub fn step_from(&self, from: usize, delta: isize) -> Option<usize> {
        if self.options.is_empty() {
            return None;
        }
        let len = self.options.len() as isize;
        Some((from as isize + delta).rem_euclid(len) as usize)
    }
}

/// Typestate marker: radio group needs a state reference.
pub struct NeedsState;

/// Typestate marker: radio group has a state reference.
pub struct HasState<'a, T: Clone>(&'a State<RadioState<T>>);

/// A radio group widget builder.
///
/// Renders a `radiogroup` container with one `radio` option per entry in
/// the state. Each option carries `name`, `value`, `aria-checked` and
/// `data-index` attributes; the roving option carries `tabindex="0"` and
/// all others `tabindex="-1"`.
///
/// Arrow keys (Up/Left previous, Down/Right next) move focus and selection
/// together, wrapping at both ends.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
#[derive(Clone, Debug)]
pub struct RadioGroup<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    name: Option<String>,
    label: Option<String>,
    disabled: bool,
}

impl Default for RadioGroup<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl RadioGroup<NeedsState> {
    /// Create a new radio group builder.
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            name: None,
            label: None,
            disabled: false,
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state<T: Clone + PartialEq + ToString + Send + Sync + 'static>(
        self,
        s: &State<RadioState<T>>,
    ) -> RadioGroup<HasState<'_, T>> {
        RadioGroup {
            state_marker: HasState(s),
            id: self.id,
            name: self.name,
            label: self.label,
            disabled: self.disabled,
        }
    }
}

impl<S> RadioGroup<S> {
    /// Set the radio group id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the form field name shared by every option.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the accessible group label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the radio group as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl<'a, T: Clone + PartialEq + ToString + Send + Sync + 'static> RadioGroup<HasState<'a, T>> {
    /// Build the radio group element.
    ///
    /// Registers per-option handlers unless disabled.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let current = state.get();
        let id = self.id.clone().unwrap_or_else(|| "radio".into());
        let name = self.name.clone().unwrap_or_else(|| "radio".into());
        let label = self.label.clone().unwrap_or_default();
        let roving = current.roving_index();

        let mut container = Element::container()
            .attr("role", "radiogroup")
            .attr("aria-label", &label)
            .attr("tabindex", "-1");

        for (i, (value, option_label)) in current.options.iter().enumerate() {
            let opt_id = format!("{id}-opt-{i}");
            let is_selected = current.value.as_ref() == Some(value);

            // Radio indicator: ● for selected, ○ for unselected
            let indicator = if is_selected { "●" } else { "○" };

            let opt_elem = Element::container()
                .id(&opt_id)
                .attr("role", "radio")
                .attr("name", &name)
                .attr("value", value.to_string())
                .attr("aria-checked", if is_selected { "true" } else { "false" })
                .attr("data-index", i.to_string())
                .attr("tabindex", if i == roving { "0" } else { "-1" })
                .focusable(!self.disabled)
                .clickable(!self.disabled)
                .disabled(self.disabled)
                .child(Element::text(indicator))
                .child(Element::text(option_label));

            container = container.child(opt_elem);

            if !self.disabled {
                self.register_option(registry, handlers, state, &opt_id, &name, i);
            }
        }

        container.id(&id)
    }

    fn register_option(
        &self,
        registry: &HandlerRegistry,
        handlers: &WidgetHandlers,
        state: &State<RadioState<T>>,
        opt_id: &str,
        name: &str,
        index: usize,
    ) {
        // Activation (click or Enter/Space) selects the option.
        {
            let state_clone = state.clone();
            let name = name.to_string();
            let on_change = handlers.get("on_change").cloned();
            registry.register(
                opt_id,
                "on_activate",
                Arc::new(move |_data| {
                    let mut selected = None;
                    state_clone.update(|s| selected = s.select(index));
                    if let Some(value) = selected {
                        log::debug!("[radio] {name} selected index {index}");
                        if let Some(ref handler) = on_change {
                            handler(&EventData::Select {
                                value: value.to_string(),
                                name: name.clone(),
                            });
                        }
                    }
                }),
            );
        }

        // Click pass-through (activation is routed separately).
        if let Some(on_click) = handlers.get("on_click") {
            registry.register(opt_id, "on_click", on_click.clone());
        }

        // Focus moves the roving index; compose with the user's pass-through.
        {
            let state_clone = state.clone();
            let on_focus = handlers.get("on_focus").cloned();
            registry.register(
                opt_id,
                "on_focus",
                Arc::new(move |data| {
                    state_clone.update(|s| s.focused = Some(index));
                    if let Some(ref handler) = on_focus {
                        handler(data);
                    }
                }),
            );
        }

        // Blur pass-through.
        if let Some(on_blur) = handlers.get("on_blur") {
            registry.register(opt_id, "on_blur", on_blur.clone());
        }

        // Keys: user pass-through first, then arrow navigation. Focus and
        // selection move together (standard roving-radio behavior).
        {
            let state_clone = state.clone();
            let name = name.to_string();
            let on_change = handlers.get("on_change").cloned();
            let on_key = handlers.get("on_key").cloned();
            registry.register(
                opt_id,
                "on_key",
                Arc::new(move |data| {
                    if let Some(ref handler) = on_key {
                        handler(data);
                    }
                    let EventData::Key { key, modifiers } = data else {
                        return;
                    };
                    if !modifiers.none() {
                        return;
                    }
                    let delta = match key {
                        Key::Up | Key::Left => -1,
                        Key::Down | Key::Right => 1,
                        _ => return,
                    };
                    let mut selected = None;
                    let mut next_index = None;
                    state_clone.update(|s| {
                        if let Some(next) = s.step_from(index, delta) {
                            next_index = Some(next);
                            selected = s.select(next);
                        }
                    });
                    if let Some(value) = selected {
                        log::debug!("[radio] {name} arrow moved to index {next_index:?}");
                        if let Some(ref handler) = on_change {
                            handler(&EventData::Select {
                                value: value.to_string(),
                                name: name.clone(),
                            });
                        }
                    }
                }),
            );
        }
    }
}
