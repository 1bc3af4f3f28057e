use combo_core::{reduce, Action, Filter, Item, State, StateName};
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "ab", "b", "bc", "c", "zz"]).prop_map(str::to_owned)
}

fn action_strategy() -> impl Strategy<Value = Action> {
    let inputs = prop_oneof![
        prop::collection::vec(value_strategy(), 0..5).prop_map(Action::items),
        value_strategy().prop_map(Action::select),
        prop::option::of(prop::sample::select(vec!["", "a", "b", "c", "q"]))
            .prop_map(|text| Action::FilterInput(text.map(str::to_owned))),
        any::<bool>().prop_map(Action::Filtering),
        any::<bool>().prop_map(Action::AutoAdd),
        Just(Action::Filter(Filter::prefix())),
    ];
    let gestures = prop::sample::select(vec![
        Action::Blur,
        Action::Focus,
        Action::Click,
        Action::SelectActive,
        Action::Up,
        Action::Down,
        Action::Enable,
        Action::Disable,
    ]);
    prop_oneof![inputs, gestures]
}

fn contains_value(items: &[Item], item: &Item) -> bool {
    items.iter().any(|candidate| candidate.value() == item.value())
}

fn check_invariants(state: &State) -> Result<(), TestCaseError> {
    if let Some(selected) = state.selected() {
        prop_assert!(!selected.is_placeholder());
        prop_assert!(contains_value(state.items(), selected));
    }
    if let Some(active) = state.active() {
        match state.name() {
            StateName::Filtering => prop_assert!(state.filtered_items().contains(active)),
            StateName::Expanded => prop_assert!(state.items().contains(active)),
            _ => {}
        }
    }
    if state.name() == StateName::Filtering {
        let placeholders = state
            .filtered_items()
            .iter()
            .filter(|item| item.is_placeholder())
            .count();
        prop_assert!(placeholders <= 1);
        if placeholders == 1 {
            prop_assert_eq!(state.filtered_items().len(), 1);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn reachable_states_keep_invariants(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let mut state = State::new();
        for action in actions {
            state = reduce(state, action);
            check_invariants(&state)?;
        }
    }

    #[test]
    fn navigation_never_leaves_the_list(downs in 0usize..10, ups in 0usize..10) {
        let state = reduce(State::new(), Action::items(["a", "b", "c"]));
        let mut state = reduce(reduce(state, Action::Focus), Action::Down);
        for _ in 0..downs {
            state = reduce(state, Action::Down);
        }
        for _ in 0..ups {
            state = reduce(state, Action::Up);
        }
        let index = state
            .items()
            .iter()
            .position(|item| Some(item) == state.active());
        let expected = downs.min(2).saturating_sub(ups);
        prop_assert_eq!(index, Some(expected));
    }
}
