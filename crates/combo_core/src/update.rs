use combo_logging::{combo_debug, combo_trace};
use serde_json::Value;

use crate::item::wrap_entries;
use crate::{find_by_value, signals, Action, Entry, Filter, Item, Signal, State, StateName, TextGetter};

/// Pure reducer: applies an action to a state snapshot.
///
/// Global actions are handled first, whatever the current state; everything
/// else goes through the table of the current state. Actions a state does not
/// handle return the input unchanged.
pub fn reduce(state: State, action: Action) -> State {
    combo_trace!("{} <- {}", state.name, action.kind());
    match action {
        Action::Select(entry) => select_value(state, Some(&entry)),
        Action::Disable => go_to(state, StateName::Disabled),
        Action::Filtering(enabled) => {
            let filter = if enabled {
                Filter::substring()
            } else {
                Filter::identity()
            };
            reduce(
                State {
                    filtering: enabled,
                    ..state
                },
                Action::Filter(filter),
            )
        }
        Action::AutoAdd(auto_add) => State { auto_add, ..state },
        Action::TextField(field) => State {
            text_getter: TextGetter::field(field.as_deref()),
            ..state
        },
        Action::Filter(filter) => set_filter(state, filter),
        Action::Items(entries) => set_items(state, entries),
        action => match state.name {
            StateName::Idle => idle(state, action),
            StateName::Disabled => disabled(state, action),
            StateName::Focused => focused(state, action),
            StateName::Expanded => expanded(state, action),
            StateName::Filtering => filtering(state, action),
        },
    }
}

/// Applies an action and reports what the host should observe.
///
/// Signals are derived by comparing the snapshots before and after the
/// transition, plus [`Signal::NewItem`] when a placeholder gets committed.
pub fn update(state: State, action: Action) -> (State, Vec<Signal>) {
    let new_item = committed_placeholder(&state, &action);
    let before = state.clone();
    let next = reduce(state, action);

    let mut out = signals(&before, &next);
    if let Some(value) = new_item {
        combo_debug!("placeholder committed: {}", value);
        out.push(Signal::NewItem(value));
    }
    (next, out)
}

fn committed_placeholder(state: &State, action: &Action) -> Option<Value> {
    let item = match action {
        Action::Select(Entry::Item(item)) => Some(item),
        Action::SelectActive
            if matches!(state.name, StateName::Expanded | StateName::Filtering) =>
        {
            state.active.as_ref()
        }
        _ => None,
    }?;
    item.is_placeholder().then(|| item.value().clone())
}

///// per-state tables

fn idle(state: State, action: Action) -> State {
    match action {
        Action::Focus => {
            let text = state.selected_text();
            State {
                name: StateName::Focused,
                text,
                ..state
            }
        }
        Action::Click => {
            let text = state.selected_text();
            let filter_value = text.clone().filter(|t| !t.is_empty());
            let active = state.selected.clone();
            State {
                name: StateName::Expanded,
                active,
                text,
                filter_value,
                ..state
            }
        }
        _ => state,
    }
}

fn disabled(state: State, action: Action) -> State {
    match action {
        Action::Enable => go_to(state, StateName::Idle),
        _ => state,
    }
}

fn focused(state: State, action: Action) -> State {
    match action {
        Action::Click => {
            let active = state.selected.clone();
            go_to(activate(state, active), StateName::Expanded)
        }
        Action::FilterInput(text) => go_to(apply_filter(state, text), StateName::Filtering),
        Action::Blur => go_to(state, StateName::Idle),
        Action::Down => {
            let active = state.selected.clone().or_else(|| state.items.first().cloned());
            go_to(activate(state, active), StateName::Expanded)
        }
        _ => state,
    }
}

fn expanded(state: State, action: Action) -> State {
    match action {
        Action::Up => {
            let active = step(&state.items, state.active.as_ref(), Direction::Up);
            activate(state, active)
        }
        Action::Down => {
            let active = step(&state.items, state.active.as_ref(), Direction::Down);
            activate(state, active)
        }
        Action::SelectActive => select_active(state),
        Action::Blur => go_to(state, StateName::Idle),
        Action::Click => go_to(state, StateName::Focused),
        Action::FilterInput(text) => go_to(apply_filter(state, text), StateName::Filtering),
        _ => state,
    }
}

fn filtering(state: State, action: Action) -> State {
    match action {
        Action::FilterInput(text) => apply_filter(state, text),
        Action::Up => {
            let active = step(&state.filtered_items, state.active.as_ref(), Direction::Up);
            activate(state, active)
        }
        Action::Down => {
            let active = step(&state.filtered_items, state.active.as_ref(), Direction::Down);
            activate(state, active)
        }
        Action::Blur => go_to(state, StateName::Idle),
        Action::SelectActive => select_active(state),
        _ => state,
    }
}

///// transitions

fn go_to(state: State, name: StateName) -> State {
    if state.name != name {
        combo_debug!("{} -> {}", state.name, name);
    }
    State { name, ..state }
}

fn activate(state: State, active: Option<Item>) -> State {
    State { active, ..state }
}

/// Resolves the probe against the known items and commits it as the selection.
///
/// Placeholders and unknown values clear the selection. Either way the
/// control returns to idle with nothing active.
fn select_value(state: State, probe: Option<&Entry>) -> State {
    let selected = probe
        .and_then(|probe| find_by_value(&state.items, probe))
        .filter(|item| !item.is_placeholder())
        .cloned();
    if selected.is_none() && probe.is_some() {
        combo_debug!("selection cleared: value not among {} items", state.items.len());
    }
    State {
        name: StateName::Idle,
        selected,
        active: None,
        ..state
    }
}

fn select_active(state: State) -> State {
    let probe = state.active.clone().map(Entry::Item);
    select_value(state, probe.as_ref())
}

fn set_filter(state: State, filter: Filter) -> State {
    combo_debug!("filter set to {}", filter.name());
    let next = State { filter, ..state };
    if next.name == StateName::Filtering {
        let text = next.filter_value.clone();
        apply_filter(next, text)
    } else {
        next
    }
}

/// Replaces the items and refreshes what depends on them.
///
/// An existing selection is re-committed against the new items, which closes
/// the control. The filtered items or the active item are then refreshed
/// according to the state the control was in before.
fn set_items(state: State, entries: Vec<Entry>) -> State {
    let items = wrap_entries(entries);
    combo_debug!("{} items received in {}", items.len(), state.name);

    let previous = state.name;
    let previous_active = state.active.clone();
    let selected = state.selected.clone().map(Entry::Item);
    let mut next = State { items, ..state };
    if let Some(selected) = selected {
        next = select_value(next, Some(&selected));
    }

    match previous {
        StateName::Filtering => {
            let text = next.filter_value.clone();
            apply_filter(next, text)
        }
        StateName::Expanded => {
            let active = previous_active.filter(|active| next.items.contains(active));
            activate(next, active)
        }
        _ => next,
    }
}

/// Recomputes the filtered items for `text` and re-anchors the active item.
///
/// Clearing the filter text while something is selected deselects it.
pub(crate) fn apply_filter(state: State, text: Option<String>) -> State {
    let filter_value = text.filter(|t| !t.is_empty());

    let mut filtered_items = state.filter.apply(
        &state.items,
        filter_value.as_deref(),
        &state.text_getter,
    );
    if filtered_items.is_empty() && state.auto_add {
        let raw = filter_value.clone().map_or(Value::Null, Value::String);
        filtered_items.push(Item::placeholder(raw));
    }

    let mut active = state
        .active
        .clone()
        .filter(|active| filtered_items.contains(active))
        .or_else(|| filtered_items.first().cloned());
    let mut selected = state.selected.clone();
    if filter_value.is_none() && selected.is_some() {
        selected = None;
        active = None;
    }

    combo_trace!(
        "filter {:?} kept {} of {} items",
        filter_value,
        filtered_items.len(),
        state.items.len()
    );
    State {
        text: filter_value.clone(),
        filter_value,
        selected,
        filtered_items,
        active,
        ..state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Moves one position within `list`, clamping at both ends.
fn step(list: &[Item], active: Option<&Item>, direction: Direction) -> Option<Item> {
    let last = list.len().checked_sub(1)?;
    let current = active.and_then(|active| list.iter().position(|item| item == active));
    let next = match (current, direction) {
        (None, _) => 0,
        (Some(i), Direction::Up) => i.saturating_sub(1),
        (Some(i), Direction::Down) => (i + 1).min(last),
    };
    list.get(next).cloned()
}
