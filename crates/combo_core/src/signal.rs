use serde_json::Value;

use crate::{State, StateName};

/// Host-observable consequence of a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// The selected value changed; `None` when nothing is selected.
    ValueChanged(Option<Value>),
    /// Focus or popover visibility changed.
    FocusChanged { focused: bool, opened: bool },
    /// The filter text changed.
    FilterChanged(Option<String>),
    /// The control left idle for an interactive state.
    Touched,
    /// A placeholder item was committed; the host may add its value to the item source.
    NewItem(Value),
}

/// Has focus: any interactive state.
pub fn is_focused(name: StateName) -> bool {
    matches!(
        name,
        StateName::Focused | StateName::Expanded | StateName::Filtering
    )
}

/// The option popover is shown.
pub fn is_opened(name: StateName) -> bool {
    matches!(name, StateName::Expanded | StateName::Filtering)
}

/// Compares two consecutive snapshots.
pub fn signals(before: &State, after: &State) -> Vec<Signal> {
    let mut out = Vec::new();

    let old_value = before.selected().map(|item| item.value());
    let new_value = after.selected().map(|item| item.value());
    if old_value != new_value {
        out.push(Signal::ValueChanged(new_value.cloned()));
    }

    let focused = is_focused(after.name());
    let opened = is_opened(after.name());
    if focused != is_focused(before.name()) || opened != is_opened(before.name()) {
        out.push(Signal::FocusChanged { focused, opened });
    }

    if before.filter_value() != after.filter_value() {
        out.push(Signal::FilterChanged(after.filter_value().map(ToOwned::to_owned)));
    }

    if before.name() != after.name() && after.name() != StateName::Idle {
        out.push(Signal::Touched);
    }

    out
}
