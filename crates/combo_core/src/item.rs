use serde::Serialize;
use serde_json::Value;

/// A domain value wrapped for display in the option list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    value: Value,
    placeholder: bool,
}

impl Item {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            placeholder: false,
        }
    }

    /// Synthetic item standing in for unmatched filter text while auto-add is on.
    pub fn placeholder(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            placeholder: true,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Either a raw domain value or an already wrapped [`Item`].
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Raw(Value),
    Item(Item),
}

impl Entry {
    /// The domain value used for equality lookups.
    pub fn value(&self) -> &Value {
        match self {
            Entry::Raw(value) => value,
            Entry::Item(item) => item.value(),
        }
    }
}

impl From<Entry> for Item {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Raw(value) => Item::new(value),
            Entry::Item(item) => item,
        }
    }
}

impl From<Item> for Entry {
    fn from(item: Item) -> Self {
        Entry::Item(item)
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry::Raw(value)
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::Raw(Value::from(value))
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Entry::Raw(Value::from(value))
    }
}

/// Finds the first item whose value equals the probe's value.
pub fn find_by_value<'a>(items: &'a [Item], probe: &Entry) -> Option<&'a Item> {
    let value = probe.value();
    items.iter().find(|item| item.value() == value)
}

/// Wraps each entry into an [`Item`], reusing entries that are already wrapped.
pub(crate) fn wrap_entries(entries: Vec<Entry>) -> Vec<Item> {
    entries.into_iter().map(Item::from).collect()
}
