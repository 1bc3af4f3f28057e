use std::sync::Once;

use combo_core::{reduce, Action, State, StateName};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(combo_logging::initialize_for_tests);
}

fn in_state(name: StateName) -> State {
    let state = reduce(State::new(), Action::items(["a", "b", "c"]));
    let steps = match name {
        StateName::Idle => vec![],
        StateName::Disabled => vec![Action::Disable],
        StateName::Focused => vec![Action::Focus],
        StateName::Expanded => vec![Action::Focus, Action::Down],
        StateName::Filtering => vec![Action::Focus, Action::filter_input("b")],
    };
    let state = steps.into_iter().fold(state, reduce);
    assert_eq!(state.name(), name);
    state
}

fn state_specific_actions() -> Vec<Action> {
    vec![
        Action::Blur,
        Action::Focus,
        Action::Click,
        Action::SelectActive,
        Action::FilterInput(Some("a".into())),
        Action::Up,
        Action::Down,
        Action::Enable,
    ]
}

fn handled(name: StateName, action: &Action) -> bool {
    match name {
        StateName::Idle => matches!(action, Action::Focus | Action::Click),
        StateName::Disabled => matches!(action, Action::Enable),
        StateName::Focused => matches!(
            action,
            Action::Click | Action::FilterInput(_) | Action::Blur | Action::Down
        ),
        StateName::Expanded => matches!(
            action,
            Action::Up
                | Action::Down
                | Action::SelectActive
                | Action::Blur
                | Action::Click
                | Action::FilterInput(_)
        ),
        StateName::Filtering => matches!(
            action,
            Action::FilterInput(_) | Action::Up | Action::Down | Action::Blur | Action::SelectActive
        ),
    }
}

#[test]
fn unhandled_actions_leave_state_untouched() {
    init_logging();
    for name in StateName::ALL {
        let state = in_state(name);
        for action in state_specific_actions() {
            if handled(name, &action) {
                continue;
            }
            let next = reduce(state.clone(), action.clone());
            assert_eq!(next, state, "{name} should ignore {}", action.kind());
        }
    }
}

#[test]
fn same_action_twice_from_same_state_is_deterministic() {
    init_logging();
    for name in StateName::ALL {
        let state = in_state(name);
        for action in state_specific_actions() {
            let first = reduce(state.clone(), action.clone());
            let second = reduce(state.clone(), action.clone());
            assert_eq!(first, second, "{name} / {}", action.kind());
        }
    }
}
