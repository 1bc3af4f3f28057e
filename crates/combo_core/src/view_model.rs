use serde::Serialize;

use crate::signal::{is_focused, is_opened};
use crate::{Item, State, StateName};

/// Presentation-ready projection of a [`State`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComboView {
    pub state: StateName,
    pub focused: bool,
    pub opened: bool,
    pub disabled: bool,
    /// Input box text; empty when there is none.
    pub text: String,
    pub placeholder_visible: bool,
    pub selected: Option<Item>,
    pub active: Option<Item>,
    /// Options to list: the filtered items while filtering, all items otherwise.
    pub items: Vec<Item>,
}

impl ComboView {
    pub(crate) fn from_state(state: &State) -> Self {
        let name = state.name();
        let placeholder_visible = match name {
            StateName::Idle => state.selected().is_none(),
            _ => state.text().is_none(),
        };
        let items = match name {
            StateName::Filtering => state.filtered_items(),
            _ => state.items(),
        };

        Self {
            state: name,
            focused: is_focused(name),
            opened: is_opened(name),
            disabled: name == StateName::Disabled,
            text: state.text().unwrap_or_default().to_owned(),
            placeholder_visible,
            selected: state.selected().cloned(),
            active: state.active().cloned(),
            items: items.to_vec(),
        }
    }
}
