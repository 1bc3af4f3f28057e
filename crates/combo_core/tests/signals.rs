use std::sync::Once;

use combo_core::{update, Action, Item, Signal, State};
use serde_json::json;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(combo_logging::initialize_for_tests);
}

fn apply(state: State, actions: impl IntoIterator<Item = Action>) -> (State, Vec<Signal>) {
    actions
        .into_iter()
        .fold((state, Vec::new()), |(state, _), action| update(state, action))
}

#[test]
fn items_alone_emit_nothing() {
    init_logging();
    let (_, signals) = update(State::new(), Action::items(["a", "b"]));
    assert!(signals.is_empty());
}

#[test]
fn focus_emits_focus_and_touched() {
    init_logging();
    let (state, _) = update(State::new(), Action::items(["a", "b"]));
    let (state, signals) = update(state, Action::Focus);
    assert_eq!(
        signals,
        vec![
            Signal::FocusChanged {
                focused: true,
                opened: false
            },
            Signal::Touched,
        ]
    );

    let (_, signals) = update(state, Action::Down);
    assert_eq!(
        signals,
        vec![
            Signal::FocusChanged {
                focused: true,
                opened: true
            },
            Signal::Touched,
        ]
    );
}

#[test]
fn committing_active_reports_value_and_close() {
    init_logging();
    let (state, _) = apply(
        State::new(),
        [Action::items(["a", "b"]), Action::Focus, Action::Down],
    );
    let (_, signals) = update(state, Action::SelectActive);
    assert_eq!(
        signals,
        vec![
            Signal::ValueChanged(Some(json!("a"))),
            Signal::FocusChanged {
                focused: false,
                opened: false
            },
        ]
    );
}

#[test]
fn typing_reports_filter_changes() {
    init_logging();
    let (state, _) = apply(State::new(), [Action::items(["a", "b"]), Action::Focus]);
    let (state, signals) = update(state, Action::filter_input("a"));
    assert!(signals.contains(&Signal::FilterChanged(Some("a".into()))));

    let (_, signals) = update(state, Action::filter_input("a"));
    assert!(signals.is_empty());
}

#[test]
fn committing_placeholder_reports_new_item() {
    init_logging();
    let (state, _) = apply(
        State::new(),
        [
            Action::AutoAdd(true),
            Action::items(["a"]),
            Action::Focus,
            Action::filter_input("kiwi"),
        ],
    );
    let (state, signals) = update(state, Action::SelectActive);
    assert_eq!(state.selected(), None);
    assert!(!signals.iter().any(|s| matches!(s, Signal::ValueChanged(_))));
    assert_eq!(signals.last(), Some(&Signal::NewItem(json!("kiwi"))));

    let (_, signals) = update(state, Action::select(Item::placeholder("fig")));
    assert_eq!(signals, vec![Signal::NewItem(json!("fig"))]);
}

#[test]
fn deselecting_reports_none() {
    init_logging();
    let (state, _) = apply(State::new(), [Action::items(["a"]), Action::select("a")]);
    let (_, signals) = update(state, Action::items(["b"]));
    assert_eq!(signals, vec![Signal::ValueChanged(None)]);
}

#[test]
fn disabled_is_neither_focused_nor_opened() {
    init_logging();
    let (state, _) = apply(State::new(), [Action::items(["a"]), Action::Focus, Action::Down]);
    let (state, signals) = update(state, Action::Disable);
    assert_eq!(
        signals,
        vec![
            Signal::FocusChanged {
                focused: false,
                opened: false
            },
            Signal::Touched,
        ]
    );
    let view = state.view();
    assert!(view.disabled);
    assert!(!view.focused);
    assert!(!view.opened);

    let (_, signals) = update(State::new(), Action::Disable);
    assert_eq!(signals, vec![Signal::Touched]);
}
