use crate::{Entry, Filter};

/// Input to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the known items.
    Items(Vec<Entry>),
    /// Lost focus; deactivate the control.
    Blur,
    /// Got focus; make the control editable.
    Focus,
    /// Click on the expand button.
    Click,
    /// Select a value directly (mouse pick or host-written value).
    Select(Entry),
    /// Commit the active item (enter key).
    SelectActive,
    /// Replace the filter factory.
    Filter(Filter),
    /// Filter text typed by the user.
    FilterInput(Option<String>),
    Up,
    Down,
    /// Turn internal filtering on or off.
    Filtering(bool),
    Enable,
    Disable,
    AutoAdd(bool),
    /// Field read off item values for display; `None` shows the value itself.
    TextField(Option<String>),
}

impl Action {
    /// Stable upper-case name, as used in recorded action logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Items(_) => "ITEMS",
            Action::Blur => "BLUR",
            Action::Focus => "FOCUS",
            Action::Click => "CLICK",
            Action::Select(_) => "SELECT",
            Action::SelectActive => "SELECT_ACTIVE",
            Action::Filter(_) => "FILTER",
            Action::FilterInput(_) => "FILTER_INPUT",
            Action::Up => "UP",
            Action::Down => "DOWN",
            Action::Filtering(_) => "FILTERING",
            Action::Enable => "ENABLE",
            Action::Disable => "DISABLE",
            Action::AutoAdd(_) => "AUTO_ADD",
            Action::TextField(_) => "TEXT_FIELD",
        }
    }

    pub fn items<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        Action::Items(entries.into_iter().map(Into::into).collect())
    }

    pub fn select(entry: impl Into<Entry>) -> Self {
        Action::Select(entry.into())
    }

    pub fn filter_input(text: impl Into<String>) -> Self {
        Action::FilterInput(Some(text.into()))
    }
}
