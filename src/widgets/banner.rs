//! Banner widget - a page-level alert strip with an optional dismiss button.
//!
//! Stateless: the host controls visibility through the `show` flag and
//! reacts to the `on_dismiss` handler. There is no internal state machine.

use crate::dispatch::{HandlerRegistry, WidgetHandlers};
use crate::element::Element;

/// Banner color variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerVariant {
    Light,
    Dark,
    Warning,
    #[default]
    AccentA,
}

impl BannerVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerVariant::Light => "light",
            BannerVariant::Dark => "dark",
            BannerVariant::Warning => "warning",
            BannerVariant::AccentA => "accent-a",
        }
    }
}

/// A banner widget builder.
#[derive(Clone, Debug)]
pub struct Banner {
    id: Option<String>,
    show: bool,
    dismissible: bool,
    dismiss_alt_text: String,
    variant: BannerVariant,
    children: Vec<Element>,
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}

impl Banner {
    /// Create a new banner builder.
    pub fn new() -> Self {
        Self {
            id: None,
            show: true,
            dismissible: false,
            dismiss_alt_text: "Dismiss".into(),
            variant: BannerVariant::default(),
            children: Vec::new(),
        }
    }

    /// Set the banner id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Control whether the banner renders at all.
    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Add a dismiss button.
    pub fn dismissible(mut self) -> Self {
        self.dismissible = true;
        self
    }

    /// Set the dismiss button's accessible label.
    pub fn dismiss_alt_text(mut self, text: impl Into<String>) -> Self {
        self.dismiss_alt_text = text.into();
        self
    }

    /// Set the color variant.
    pub fn variant(mut self, variant: BannerVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Add a content child.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set the banner content children.
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Build the banner element, or `None` when hidden.
    ///
    /// Registers the `on_dismiss` handler on the dismiss button when
    /// dismissible.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Option<Element> {
        if !self.show {
            return None;
        }

        let id = self.id.unwrap_or_else(|| "banner".into());

        let content = Element::container().children(self.children);

        let mut banner = Element::container()
            .id(&id)
            .attr("role", "alert")
            .attr("aria-live", "polite")
            .attr("aria-atomic", "true")
            .attr("data-variant", self.variant.as_str())
            .child(content);

        if self.dismissible {
            let dismiss_id = format!("{id}-dismiss");
            let button = Element::container()
                .id(&dismiss_id)
                .attr("aria-label", &self.dismiss_alt_text)
                .focusable(true)
                .clickable(true)
                .child(Element::text("✕"));

            banner = banner.child(button);

            if let Some(on_dismiss) = handlers.get("on_dismiss") {
                registry.register(&dismiss_id, "on_activate", on_dismiss.clone());
            }
        }

        Some(banner)
    }
}
