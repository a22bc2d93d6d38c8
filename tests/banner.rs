use std::sync::{Arc, Mutex};

use formdom::{
    dispatch, find_by_label, Banner, BannerVariant, Element, Event, EventData, Handler,
    HandlerRegistry, WidgetHandlers,
};

fn dismiss_spy() -> (Arc<Mutex<usize>>, Handler) {
    let count = Arc::new(Mutex::new(0));
    let recorder = Arc::clone(&count);
    let handler: Handler = Arc::new(move |_data: &EventData| {
        *recorder.lock().unwrap() += 1;
    });
    (count, handler)
}

#[test]
fn test_hidden_banner_renders_nothing() {
    let registry = HandlerRegistry::new();
    let banner = Banner::new()
        .show(false)
        .child(Element::text("hello"))
        .build(&registry, &WidgetHandlers::new());
    assert!(banner.is_none());
    assert!(registry.is_empty());
}

#[test]
fn test_renders_alert_attributes() {
    let registry = HandlerRegistry::new();
    let banner = Banner::new()
        .child(Element::text("maintenance tonight"))
        .build(&registry, &WidgetHandlers::new())
        .expect("banner not rendered");

    assert_eq!(banner.get_attr("role"), Some("alert"));
    assert_eq!(banner.get_attr("aria-live"), Some("polite"));
    assert_eq!(banner.get_attr("aria-atomic"), Some("true"));
    assert_eq!(banner.get_attr("data-variant"), Some("accent-a"));
}

#[test]
fn test_variant_attribute() {
    let registry = HandlerRegistry::new();
    let banner = Banner::new()
        .variant(BannerVariant::Warning)
        .build(&registry, &WidgetHandlers::new())
        .expect("banner not rendered");
    assert_eq!(banner.get_attr("data-variant"), Some("warning"));
}

#[test]
fn test_dismiss_button_fires_on_dismiss() {
    let registry = HandlerRegistry::new();
    let (count, handler) = dismiss_spy();
    let mut handlers = WidgetHandlers::new();
    handlers.insert("on_dismiss", handler);

    let banner = Banner::new()
        .dismissible()
        .build(&registry, &handlers)
        .expect("banner not rendered");

    let button = find_by_label(&banner, "Dismiss").expect("dismiss button not found");
    assert!(button.clickable);

    dispatch(&Event::click(button.id.clone()), &registry);
    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn test_no_dismiss_button_unless_dismissible() {
    let registry = HandlerRegistry::new();
    let banner = Banner::new()
        .build(&registry, &WidgetHandlers::new())
        .expect("banner not rendered");
    assert!(find_by_label(&banner, "Dismiss").is_none());
}
