//! Built-in form-control widgets.
//!
//! Widgets are builders that produce an [`Element`](crate::Element) tree.
//! Stateful widgets read a [`State`](crate::State) reference during
//! `build()` and register their interaction closures in a
//! [`HandlerRegistry`](crate::HandlerRegistry); host callbacks are passed
//! in through a [`WidgetHandlers`](crate::WidgetHandlers) map.
//!
//! The shared pattern: each widget owns a local copy of its toggle or
//! selection state, seeded from an optional controlling value, and reports
//! every change through its callback immediately. If the host controls the
//! value, it resynchronizes the state via the state type's `sync` method;
//! the host always wins.

pub mod banner;
pub mod checkbox;
pub mod filter;
pub mod radio;

pub use banner::{Banner, BannerVariant};
pub use checkbox::{Checkbox, CheckboxState};
pub use filter::{FilterChoice, FilterState, MultiSelectFilter};
pub use radio::{RadioGroup, RadioState};
