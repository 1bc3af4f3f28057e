use std::fmt;

use crate::view_model::ComboView;
use crate::{Filter, Item, TextGetter};

/// Machine state name; selects which transition table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub enum StateName {
    /// Inactive, showing the selected value.
    #[default]
    Idle,
    Disabled,
    /// Has focus with the popover closed.
    Focused,
    /// Popover open over the full item list.
    Expanded,
    /// Popover open over the items matching the filter text.
    Filtering,
}

impl StateName {
    pub const ALL: [StateName; 5] = [
        StateName::Idle,
        StateName::Disabled,
        StateName::Focused,
        StateName::Expanded,
        StateName::Filtering,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StateName::Idle => "IDLE",
            StateName::Disabled => "DISABLED",
            StateName::Focused => "FOCUSED",
            StateName::Expanded => "EXPANDED",
            StateName::Filtering => "FILTERING",
        }
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of the combobox. Every transition yields a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub(crate) name: StateName,
    pub(crate) text: Option<String>,
    pub(crate) text_getter: TextGetter,
    pub(crate) auto_add: bool,
    pub(crate) items: Vec<Item>,
    pub(crate) selected: Option<Item>,
    pub(crate) active: Option<Item>,
    pub(crate) filter_value: Option<String>,
    pub(crate) filtering: bool,
    pub(crate) filter: Filter,
    pub(crate) filtered_items: Vec<Item>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            name: StateName::Idle,
            text: None,
            text_getter: TextGetter::passthrough(),
            auto_add: false,
            items: Vec::new(),
            selected: None,
            active: None,
            filter_value: None,
            filtering: true,
            filter: Filter::substring(),
            filtered_items: Vec::new(),
        }
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ComboView {
        ComboView::from_state(self)
    }

    pub fn name(&self) -> StateName {
        self.name
    }

    /// Text shown in the input box.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn text_getter(&self) -> &TextGetter {
        &self.text_getter
    }

    pub fn auto_add(&self) -> bool {
        self.auto_add
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn selected(&self) -> Option<&Item> {
        self.selected.as_ref()
    }

    /// Highlighted candidate while expanded or filtering.
    pub fn active(&self) -> Option<&Item> {
        self.active.as_ref()
    }

    pub fn filter_value(&self) -> Option<&str> {
        self.filter_value.as_deref()
    }

    pub fn filtering(&self) -> bool {
        self.filtering
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn filtered_items(&self) -> &[Item] {
        &self.filtered_items
    }

    /// Display text of the selected item, if any.
    pub fn selected_text(&self) -> Option<String> {
        self.selected
            .as_ref()
            .and_then(|item| self.text_getter.text(item.value()))
    }
}
