use formdom::{CheckboxState, State};

#[test]
fn test_dirty_flag_lifecycle() {
    let state = State::new(CheckboxState::new(None));

    // Fresh state is clean
    assert!(!state.take_dirty());

    // update marks it dirty; the take clears it
    state.update(|s| {
        s.toggle();
    });
    assert!(state.take_dirty());
    assert!(!state.take_dirty());

    // set marks it dirty again
    state.set(CheckboxState::new(Some(true)));
    assert!(state.take_dirty());
    assert!(!state.take_dirty());
}

#[test]
fn test_dirty_flag_shared_across_clones() {
    let state = State::new(CheckboxState::new(None));
    let clone = state.clone();

    clone.update(|s| {
        s.toggle();
    });

    // Either handle observes the change; taking through one clears both
    assert!(state.take_dirty());
    assert!(!clone.take_dirty());
}
