pub mod dispatch;
pub mod element;
pub mod event;
pub mod focus;
pub mod state;
pub mod widgets;

pub use dispatch::{dispatch, EventData, Handler, HandlerRegistry, WidgetHandlers};
pub use element::{
    find_all_by_attr, find_all_by_role, find_by_attr, find_by_label, find_by_text, find_element,
    Content, Element,
};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use state::State;
pub use widgets::{
    Banner, BannerVariant, Checkbox, CheckboxState, FilterChoice, FilterState, MultiSelectFilter,
    RadioGroup, RadioState,
};
