//! MultiSelectFilter widget - a collapsible list of filter checkboxes that
//! reports an ordered set of selected values to its host.

use std::sync::Arc;

use crate::dispatch::{EventData, HandlerRegistry, WidgetHandlers};
use crate::element::Element;
use crate::state::State;

/// One selectable filter choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterChoice {
    /// Display name, also the choice's accessible label.
    pub name: String,
    /// The value reported to the host when this choice is checked.
    pub value: String,
    /// Optional count rendered as a badge next to the name.
    pub count: Option<u64>,
}

impl FilterChoice {
    /// Create a choice without a count badge.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            count: None,
        }
    }

    /// Attach a count badge.
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }
}

/// State for a multi-select filter widget.
///
/// `values` is an ordered set: a subset of the choice values with no
/// duplicates, where order changes only by append-on-check and
/// remove-on-uncheck. Per-choice checked state is never stored; it is
/// always derived from membership in `values`.
#[derive(Clone, Debug, Default)]
pub struct FilterState {
    /// Whether the disclosure is open. Starts closed.
    pub open: bool,
    /// The currently selected values, in selection order.
    pub values: Vec<String>,
    /// Available choices, treated as read-only.
    pub choices: Vec<FilterChoice>,
}

impl FilterState {
    /// Create a new FilterState with the given choices.
    pub fn new(choices: impl IntoIterator<Item = FilterChoice>) -> Self {
        Self {
            open: false,
            values: Vec::new(),
            choices: choices.into_iter().collect(),
        }
    }

    /// Seed the selected values from the host's filter list.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn with_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values = dedup_ordered(values.into_iter().map(Into::into));
        self
    }

    /// Reconcile with a changed host filter list. Host wins.
    pub fn sync_values(&mut self, values: Vec<String>) {
        self.values = dedup_ordered(values.into_iter());
    }

    /// Whether the choice with the given value is currently selected.
    pub fn is_selected(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// The filter list after toggling `value`.
    ///
    /// Checking appends to the end of the current list; unchecking removes
    /// the value while preserving the relative order of the rest.
    pub fn toggled(&self, value: &str) -> Vec<String> {
        if self.is_selected(value) {
            self.values.iter().filter(|v| *v != value).cloned().collect()
        } else {
            let mut next = self.values.clone();
            next.push(value.to_string());
            next
        }
    }
}

fn dedup_ordered(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for value in values {
        if !result.contains(&value) {
            result.push(value);
        }
    }
    result
}

/// Typestate marker: filter needs a state reference.
pub struct NeedsState;

/// Typestate marker: filter has a state reference.
pub struct HasState<'a>(&'a State<FilterState>);

/// A multi-select filter widget builder.
///
/// Shows a disclosure header; when open, one checkbox per choice. The
/// widget does not own the authoritative filter list: every toggle
/// computes the new list from the current one and reports it through the
/// host's `on_change` handler (the `set_filter` channel), updating its
/// local copy optimistically.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
#[derive(Clone, Debug)]
pub struct MultiSelectFilter<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    header: String,
}

impl Default for MultiSelectFilter<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiSelectFilter<NeedsState> {
    /// Create a new filter builder.
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            header: "Filter".into(),
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<FilterState>) -> MultiSelectFilter<HasState<'_>> {
        MultiSelectFilter {
            state_marker: HasState(s),
            id: self.id,
            header: self.header,
        }
    }
}

impl<S> MultiSelectFilter<S> {
    /// Set the filter id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the disclosure header text.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }
}

impl<'a> MultiSelectFilter<HasState<'a>> {
    /// Build the filter element.
    ///
    /// Choice handlers are registered only while the disclosure is open;
    /// closed content is neither rendered nor interactive.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let current = state.get();
        let id = self.id.clone().unwrap_or_else(|| "filter".into());
        let header_id = format!("{id}-header");

        // Arrow indicator
        let arrow = if current.open { "▼" } else { "▶" };

        let header_row = Element::container()
            .id(&header_id)
            .focusable(true)
            .clickable(true)
            .child(Element::text(arrow))
            .child(Element::text(&self.header));

        // Register disclosure toggle handler
        {
            let state_clone = state.clone();
            registry.register(
                &header_id,
                "on_activate",
                Arc::new(move |_data| {
                    state_clone.update(|s| s.open = !s.open);
                }),
            );
        }

        let mut container = Element::container().child(header_row);

        if current.open {
            log::debug!("[filter] {id} open with {} choices", current.choices.len());
            let mut choices_col = Element::container();

            for (i, choice) in current.choices.iter().enumerate() {
                let choice_id = format!("{id}-choice-{i}");
                let checked = current.is_selected(&choice.value);
                let indicator = if checked { "[x]" } else { "[ ]" };

                let mut choice_elem = Element::container()
                    .id(&choice_id)
                    .attr("type", "checkbox")
                    .attr("role", "checkbox")
                    .attr("name", &choice.name)
                    .attr("value", &choice.value)
                    .attr("aria-checked", if checked { "true" } else { "false" })
                    .attr("aria-label", &choice.name)
                    .focusable(true)
                    .clickable(true)
                    .child(Element::text(indicator))
                    .child(Element::text(&choice.name));

                // Count badge only exists when a count was supplied
                if let Some(count) = choice.count {
                    choice_elem = choice_elem
                        .child(Element::text(count.to_string()).attr("class", "badge"));
                }

                choices_col = choices_col.child(choice_elem);

                let state_clone = state.clone();
                let value = choice.value.clone();
                let set_filter = handlers.get("on_change").cloned();
                registry.register(
                    &choice_id,
                    "on_activate",
                    Arc::new(move |_data| {
                        let mut next = Vec::new();
                        state_clone.update(|s| {
                            next = s.toggled(&value);
                            s.values = next.clone();
                        });
                        log::debug!("[filter] toggled {value}, now {next:?}");
                        if let Some(ref handler) = set_filter {
                            handler(&EventData::Filter {
                                values: next.clone(),
                            });
                        }
                    }),
                );
            }

            container = container.child(choices_col);
        }

        container.id(&id)
    }
}
