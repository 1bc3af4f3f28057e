use std::mem;

use combo_core::{update, Action, ComboView, Entry, Item, Signal, State, StateName, Value};
use combo_logging::{combo_debug, combo_trace};

use crate::{ComboConfig, ConfigError};

/// Owns the current combobox state and turns host events into actions.
///
/// Every call that dispatches returns the signals the transition produced,
/// in the order a host should deliver them.
#[derive(Debug, Clone, Default)]
pub struct Combobox {
    state: State,
}

impl Combobox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &ComboConfig) -> Result<Self, ConfigError> {
        let mut combo = Self::new();
        for action in config.initial_actions()? {
            combo.dispatch(action);
        }
        Ok(combo)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn view(&self) -> ComboView {
        self.state.view()
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Signal> {
        let kind = action.kind();
        let (next, signals) = update(mem::take(&mut self.state), action);
        self.state = next;
        if signals.is_empty() {
            combo_trace!("{} handled in {}, nothing to report", kind, self.state.name());
        } else {
            combo_debug!("{} -> {:?}", kind, signals);
        }
        signals
    }

    ///// inputs

    /// Selects `value` unless it is already the selected value.
    pub fn set_value(&mut self, value: Value) -> Vec<Signal> {
        if self.value() == Some(&value) {
            return Vec::new();
        }
        self.dispatch(Action::Select(Entry::Raw(value)))
    }

    pub fn set_items<I, E>(&mut self, entries: I) -> Vec<Signal>
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        self.dispatch(Action::items(entries))
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Vec<Signal> {
        self.dispatch(if disabled {
            Action::Disable
        } else {
            Action::Enable
        })
    }

    pub fn set_filtering(&mut self, enabled: bool) -> Vec<Signal> {
        self.dispatch(Action::Filtering(enabled))
    }

    pub fn set_auto_add(&mut self, enabled: bool) -> Vec<Signal> {
        self.dispatch(Action::AutoAdd(enabled))
    }

    pub fn set_text_field(&mut self, field: Option<&str>) -> Vec<Signal> {
        self.dispatch(Action::TextField(field.map(ToOwned::to_owned)))
    }

    ///// events

    pub fn click(&mut self) -> Vec<Signal> {
        self.dispatch(Action::Click)
    }

    pub fn focus(&mut self) -> Vec<Signal> {
        self.dispatch(Action::Focus)
    }

    pub fn blur(&mut self) -> Vec<Signal> {
        self.dispatch(Action::Blur)
    }

    pub fn filter_input(&mut self, text: &str) -> Vec<Signal> {
        self.dispatch(Action::filter_input(text))
    }

    pub fn up(&mut self) -> Vec<Signal> {
        self.dispatch(Action::Up)
    }

    pub fn down(&mut self) -> Vec<Signal> {
        self.dispatch(Action::Down)
    }

    /// Picks an option, typically one of [`Combobox::items`].
    pub fn select(&mut self, entry: impl Into<Entry>) -> Vec<Signal> {
        self.dispatch(Action::Select(entry.into()))
    }

    /// Commits the highlighted option.
    pub fn commit_active(&mut self) -> Vec<Signal> {
        self.dispatch(Action::SelectActive)
    }

    ///// accessors

    /// The selected domain value.
    pub fn value(&self) -> Option<&Value> {
        self.state.selected().map(Item::value)
    }

    /// Options to list: the filtered items while filtering, all items otherwise.
    pub fn items(&self) -> &[Item] {
        match self.state.name() {
            StateName::Filtering => self.state.filtered_items(),
            _ => self.state.items(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.state.name() == StateName::Disabled
    }
}
