use formdom::{collect_focusable, Element, Event, FocusState, Key, Modifiers};

fn form() -> Element {
    Element::container()
        .id("root")
        .child(Element::text("Input 1").id("input1").focusable(true))
        .child(Element::text("Input 2").id("input2").focusable(true))
        .child(Element::text("Input 3").id("input3").focusable(true))
}

#[test]
fn test_focus_state_focus_blur() {
    let mut focus = FocusState::new();

    assert_eq!(focus.focused(), None);

    // Focus an element
    assert!(focus.focus("input1"));
    assert_eq!(focus.focused(), Some("input1"));

    // Focus same element - no change
    assert!(!focus.focus("input1"));

    // Focus different element
    assert!(focus.focus("input2"));
    assert_eq!(focus.focused(), Some("input2"));

    // Blur
    assert!(focus.blur());
    assert_eq!(focus.focused(), None);

    // Blur when nothing focused
    assert!(!focus.blur());
}

#[test]
fn test_focus_next_navigation() {
    let root = form();
    let mut focus = FocusState::new();

    // Focus first when nothing focused
    assert_eq!(focus.focus_next(&root), Some("input1".to_string()));
    assert_eq!(focus.focus_next(&root), Some("input2".to_string()));
    assert_eq!(focus.focus_next(&root), Some("input3".to_string()));

    // Wrap around
    assert_eq!(focus.focus_next(&root), Some("input1".to_string()));
}

#[test]
fn test_focus_prev_navigation() {
    let root = form();
    let mut focus = FocusState::new();

    // Focus last when nothing focused
    assert_eq!(focus.focus_prev(&root), Some("input3".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("input2".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("input1".to_string()));

    // Wrap around
    assert_eq!(focus.focus_prev(&root), Some("input3".to_string()));
}

#[test]
fn test_focus_no_focusable_elements() {
    let root = Element::container()
        .child(Element::text("Not focusable").id("text1"))
        .child(Element::text("Also not").id("text2"));

    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), None);
    assert_eq!(focus.focus_prev(&root), None);
}

#[test]
fn test_collect_focusable_order() {
    let root = Element::container()
        .id("root")
        .child(
            Element::container()
                .id("group1")
                .child(Element::text("A").id("a").focusable(true))
                .child(Element::text("B").id("b").focusable(true)),
        )
        .child(Element::text("C").id("c").focusable(true));

    let focusable = collect_focusable(&root);
    assert_eq!(focusable, vec!["a", "b", "c"]);
}

#[test]
fn test_handle_key_tab_emits_blur_and_focus() {
    let root = form();
    let mut focus = FocusState::new();

    // First Tab: focus only, nothing to blur
    let events = focus.handle_key(Key::Tab, Modifiers::new(), &root);
    assert_eq!(
        events,
        vec![Event::Focus {
            target: "input1".to_string()
        }]
    );

    // Second Tab: blur then focus
    let events = focus.handle_key(Key::Tab, Modifiers::new(), &root);
    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "input1".to_string(),
                new_target: Some("input2".to_string())
            },
            Event::Focus {
                target: "input2".to_string()
            },
        ]
    );
}

#[test]
fn test_handle_key_escape_blurs() {
    let root = form();
    let mut focus = FocusState::new();
    focus.focus("input2");

    let events = focus.handle_key(Key::Escape, Modifiers::new(), &root);
    assert_eq!(
        events,
        vec![Event::Blur {
            target: "input2".to_string(),
            new_target: None
        }]
    );
    assert_eq!(focus.focused(), None);

    // With nothing focused, Escape falls through as a key event
    let events = focus.handle_key(Key::Escape, Modifiers::new(), &root);
    assert_eq!(
        events,
        vec![Event::Key {
            target: None,
            key: Key::Escape,
            modifiers: Modifiers::new()
        }]
    );
}

#[test]
fn test_handle_key_targets_focused_element() {
    let root = form();
    let mut focus = FocusState::new();
    focus.focus("input3");

    let events = focus.handle_key(Key::Char('x'), Modifiers::new(), &root);
    assert_eq!(
        events,
        vec![Event::Key {
            target: Some("input3".to_string()),
            key: Key::Char('x'),
            modifiers: Modifiers::new()
        }]
    );
}
