//! Combobox core: pure state machine for a searchable select.
mod action;
mod filter;
mod item;
mod signal;
mod state;
mod text;
mod update;
mod view_model;

pub use action::Action;
pub use filter::{
    Filter, FilterFactory, IdentityFilter, Predicate, PrefixFilter, SubstringFilter,
};
pub use item::{find_by_value, Entry, Item};
pub use signal::{is_focused, is_opened, signals, Signal};
pub use state::{State, StateName};
pub use text::TextGetter;
pub use update::{reduce, update};
pub use view_model::ComboView;

pub use serde_json::Value;
