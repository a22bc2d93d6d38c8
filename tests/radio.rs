use std::sync::{Arc, Mutex};

use formdom::{
    dispatch, find_all_by_role, find_by_attr, Element, Event, EventData, Handler, HandlerRegistry,
    Key, Modifiers, RadioGroup, RadioState, State, WidgetHandlers,
};

fn two_options() -> State<RadioState<String>> {
    State::new(RadioState::new([
        ("firstValue".to_string(), "firstText"),
        ("secondValue".to_string(), "secondText"),
    ]))
}

fn select_spy() -> (Arc<Mutex<Vec<(String, String)>>>, Handler) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&calls);
    let handler: Handler = Arc::new(move |data: &EventData| {
        if let EventData::Select { value, name } = data {
            recorder.lock().unwrap().push((value.clone(), name.clone()));
        }
    });
    (calls, handler)
}

fn counter_spy() -> (Arc<Mutex<usize>>, Handler) {
    let count = Arc::new(Mutex::new(0));
    let recorder = Arc::clone(&count);
    let handler: Handler = Arc::new(move |_data: &EventData| {
        *recorder.lock().unwrap() += 1;
    });
    (count, handler)
}

fn build(
    state: &State<RadioState<String>>,
    registry: &HandlerRegistry,
    handlers: &WidgetHandlers,
) -> Element {
    registry.clear();
    RadioGroup::new()
        .name("name")
        .label("label")
        .state(state)
        .build(registry, handlers)
}

#[test]
fn test_renders_group_and_options() {
    let state = two_options();
    let registry = HandlerRegistry::new();
    let root = build(&state, &registry, &WidgetHandlers::new());

    assert_eq!(root.get_attr("role"), Some("radiogroup"));
    assert_eq!(root.get_attr("aria-label"), Some("label"));
    assert_eq!(root.get_attr("tabindex"), Some("-1"));

    let radios = find_all_by_role(&root, "radio");
    assert_eq!(radios.len(), 2);

    for (index, radio) in radios.iter().enumerate() {
        assert_eq!(radio.get_attr("name"), Some("name"));
        assert_eq!(
            radio.get_attr("value"),
            Some(if index == 0 { "firstValue" } else { "secondValue" })
        );
        assert_eq!(radio.get_attr("aria-checked"), Some("false"));
        assert_eq!(radio.get_attr("data-index"), Some(index.to_string().as_str()));
    }
}

#[test]
fn test_selecting_an_option() {
    let state = two_options();
    let registry = HandlerRegistry::new();
    let (calls, handler) = select_spy();
    let mut handlers = WidgetHandlers::new();
    handlers.insert("on_change", handler);

    build(&state, &registry, &handlers);
    dispatch(&Event::click("radio-opt-1"), &registry);

    assert_eq!(
        *calls.lock().unwrap(),
        vec![("secondValue".to_string(), "name".to_string())]
    );

    let root = build(&state, &registry, &handlers);
    let checked: Vec<_> = find_all_by_role(&root, "radio")
        .into_iter()
        .filter(|r| r.get_attr("aria-checked") == Some("true"))
        .collect();
    assert_eq!(checked.len(), 1);
    assert_eq!(checked[0].get_attr("value"), Some("secondValue"));
}

#[test]
fn test_pass_through_handlers_fire_once() {
    let state = two_options();
    let registry = HandlerRegistry::new();

    let (clicks, on_click) = counter_spy();
    let (focuses, on_focus) = counter_spy();
    let (blurs, on_blur) = counter_spy();
    let (keys, on_key) = counter_spy();

    let mut handlers = WidgetHandlers::new();
    handlers.insert("on_click", on_click);
    handlers.insert("on_focus", on_focus);
    handlers.insert("on_blur", on_blur);
    handlers.insert("on_key", on_key);

    build(&state, &registry, &handlers);

    dispatch(&Event::click("radio-opt-0"), &registry);
    assert_eq!(*clicks.lock().unwrap(), 1);

    dispatch(
        &Event::Focus {
            target: "radio-opt-0".into(),
        },
        &registry,
    );
    assert_eq!(*focuses.lock().unwrap(), 1);

    dispatch(
        &Event::Blur {
            target: "radio-opt-0".into(),
            new_target: None,
        },
        &registry,
    );
    assert_eq!(*blurs.lock().unwrap(), 1);

    dispatch(&Event::key("radio-opt-0", Key::Char('a')), &registry);
    assert_eq!(*keys.lock().unwrap(), 1);
}

#[test]
fn test_arrow_keys_move_selection_and_wrap() {
    let state = two_options();
    let registry = HandlerRegistry::new();
    let (calls, handler) = select_spy();
    let mut handlers = WidgetHandlers::new();
    handlers.insert("on_change", handler);

    build(&state, &registry, &handlers);

    // Select the last option, then arrow Down wraps to the first
    dispatch(&Event::click("radio-opt-1"), &registry);
    build(&state, &registry, &handlers);
    dispatch(&Event::key("radio-opt-1", Key::Down), &registry);
    assert_eq!(state.get().value.as_deref(), Some("firstValue"));
    assert_eq!(state.get().focused, Some(0));

    // Arrow Up from the first option wraps back to the last
    build(&state, &registry, &handlers);
    dispatch(&Event::key("radio-opt-0", Key::Up), &registry);
    assert_eq!(state.get().value.as_deref(), Some("secondValue"));
    assert_eq!(state.get().focused, Some(1));

    let calls = calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            ("secondValue".to_string(), "name".to_string()),
            ("firstValue".to_string(), "name".to_string()),
            ("secondValue".to_string(), "name".to_string()),
        ]
    );
}

#[test]
fn test_modified_arrow_key_does_not_move_selection() {
    let state = two_options();
    let registry = HandlerRegistry::new();
    let (changes, on_change) = select_spy();
    let (keys, on_key) = counter_spy();
    let mut handlers = WidgetHandlers::new();
    handlers.insert("on_change", on_change);
    handlers.insert("on_key", on_key);

    build(&state, &registry, &handlers);
    dispatch(&Event::click("radio-opt-0"), &registry);
    build(&state, &registry, &handlers);

    // Shift+Down reaches the key pass-through but is not navigation
    dispatch(
        &Event::Key {
            target: Some("radio-opt-0".into()),
            key: Key::Down,
            modifiers: Modifiers::shift(),
        },
        &registry,
    );
    assert_eq!(*keys.lock().unwrap(), 1);
    assert_eq!(state.get().value.as_deref(), Some("firstValue"));
    assert_eq!(
        *changes.lock().unwrap(),
        vec![("firstValue".to_string(), "name".to_string())]
    );
}

#[test]
fn test_roving_tabindex_follows_selection() {
    let state = two_options();
    let registry = HandlerRegistry::new();
    let handlers = WidgetHandlers::new();

    // Before any selection the first option is the tab stop
    let root = build(&state, &registry, &handlers);
    let radios = find_all_by_role(&root, "radio");
    assert_eq!(radios[0].get_attr("tabindex"), Some("0"));
    assert_eq!(radios[1].get_attr("tabindex"), Some("-1"));

    dispatch(&Event::click("radio-opt-1"), &registry);
    let root = build(&state, &registry, &handlers);
    let radios = find_all_by_role(&root, "radio");
    assert_eq!(radios[0].get_attr("tabindex"), Some("-1"));
    assert_eq!(radios[1].get_attr("tabindex"), Some("0"));
}

#[test]
fn test_enter_activates_focused_option() {
    let state = two_options();
    let registry = HandlerRegistry::new();
    let handlers = WidgetHandlers::new();

    build(&state, &registry, &handlers);
    dispatch(&Event::key("radio-opt-0", Key::Enter), &registry);
    assert_eq!(state.get().value.as_deref(), Some("firstValue"));
}

#[test]
fn test_focus_event_moves_roving_index() {
    let state = two_options();
    let registry = HandlerRegistry::new();
    let handlers = WidgetHandlers::new();

    build(&state, &registry, &handlers);
    dispatch(
        &Event::Focus {
            target: "radio-opt-1".into(),
        },
        &registry,
    );
    assert_eq!(state.get().focused, Some(1));
    assert_eq!(state.get().value, None); // focus alone does not select
}

#[test]
fn test_host_sync_overrides_selection() {
    let state = two_options();
    let registry = HandlerRegistry::new();
    let handlers = WidgetHandlers::new();

    build(&state, &registry, &handlers);
    dispatch(&Event::click("radio-opt-1"), &registry);
    assert_eq!(state.get().value.as_deref(), Some("secondValue"));

    state.update(|s| s.sync(Some("firstValue".to_string())));
    let root = build(&state, &registry, &handlers);
    let selected = find_by_attr(&root, "aria-checked", "true").expect("no selected option");
    assert_eq!(selected.get_attr("value"), Some("firstValue"));
}

#[test]
fn test_disabled_group_registers_no_handlers() {
    let state = two_options();
    let registry = HandlerRegistry::new();
    let (calls, handler) = select_spy();
    let mut handlers = WidgetHandlers::new();
    handlers.insert("on_change", handler);

    registry.clear();
    let root = RadioGroup::new()
        .name("name")
        .label("label")
        .disabled()
        .state(&state)
        .build(&registry, &handlers);

    for radio in find_all_by_role(&root, "radio") {
        assert!(radio.disabled);
        assert!(!radio.focusable);
    }

    assert!(!dispatch(&Event::click("radio-opt-0"), &registry));
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(state.get().value, None);
}
