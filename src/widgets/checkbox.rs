//! Checkbox widget - a toggleable checkbox with a label.

use std::sync::Arc;

use crate::dispatch::{EventData, HandlerRegistry, WidgetHandlers};
use crate::element::Element;
use crate::state::State;

/// State for a checkbox widget.
///
/// The checkbox owns a local copy of its checked state. A host that
/// controls the value seeds it through [`CheckboxState::new`] and calls
/// [`sync`](CheckboxState::sync) whenever the controlling value changes;
/// sync always wins over local interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckboxState {
    /// Current logical toggle state.
    pub checked: bool,
}

impl CheckboxState {
    /// Create a new state, seeded from an optional controlling value.
    ///
    /// An absent value means the checkbox starts uncontrolled at `false`.
    pub fn new(initial: Option<bool>) -> Self {
        Self {
            checked: initial.unwrap_or(false),
        }
    }

    /// Reconcile with a changed controlling value.
    ///
    /// Overwrites the local state, discarding any unsynced interaction.
    /// Last write wins: calling this from within a change callback is fine.
    pub fn sync(&mut self, value: bool) {
        self.checked = value;
    }

    /// Flip the checked state. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}

/// Typestate marker: checkbox needs a state reference.
pub struct NeedsState;

/// Typestate marker: checkbox has a state reference.
pub struct HasState<'a>(&'a State<CheckboxState>);

/// A checkbox widget builder.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
///
/// # Example
///
/// ```
/// use formdom::{Checkbox, CheckboxState, HandlerRegistry, State, WidgetHandlers};
///
/// let agree = State::new(CheckboxState::new(None));
/// let registry = HandlerRegistry::new();
/// let elem = Checkbox::new()
///     .name("agree")
///     .label("I agree to terms")
///     .state(&agree)
///     .build(&registry, &WidgetHandlers::new());
/// assert_eq!(elem.get_attr("aria-checked"), Some("false"));
/// ```
#[derive(Clone, Debug)]
pub struct Checkbox<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    name: Option<String>,
    label: Option<String>,
    disabled: bool,
}

impl Default for Checkbox<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkbox<NeedsState> {
    /// Create a new checkbox builder.
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
    pub fn state(self, s: &State<CheckboxState>) -> Checkbox<HasState<'_>> {
        Checkbox {
            state_marker: HasState(s),
            id: self.id,
            name: self.name,
            label: self.label,
            disabled: self.disabled,
        }
    }
}

impl<S> Checkbox<S> {
    /// Set the checkbox id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the form field name reported alongside change events.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the checkbox label (the accessible name).
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the checkbox as disabled.
    ///
    /// Disabled checkboxes are not focusable, not clickable, and never
    /// invoke `on_change`.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl<'a> Checkbox<HasState<'a>> {
    /// Build the checkbox element.
    ///
    /// Registers the toggle handler unless disabled.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let checked = state.get().checked;
        let id = self.id.clone().unwrap_or_else(|| "checkbox".into());
        let name = self.name.clone().unwrap_or_else(|| "checkbox".into());
        let label = self.label.clone().unwrap_or_default();

        let indicator = if checked { "[x]" } else { "[ ]" };

        let elem = Element::container()
            .id(&id)
            .attr("type", "checkbox")
            .attr("role", "checkbox")
            .attr("name", &name)
            .attr("aria-checked", if checked { "true" } else { "false" })
            .attr("aria-label", &label)
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled)
            .child(Element::text(indicator))
            .child(Element::text(&label));

        // Register toggle handler if not disabled
        if !self.disabled {
            let state_clone = state.clone();
            let on_change = handlers.get("on_change").cloned();
            registry.register(
                &id,
                "on_activate",
                Arc::new(move |_data| {
                    let mut new_checked = false;
                    state_clone.update(|s| new_checked = s.toggle());
                    log::debug!("[checkbox] {name} toggled to {new_checked}");
                    if let Some(ref handler) = on_change {
                        handler(&EventData::Toggle {
                            checked: new_checked,
                            name: name.clone(),
                        });
                    }
                }),
            );
        }

        elem
    }
}
