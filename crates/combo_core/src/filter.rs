//! Item filtering driven by the free-text filter input.
//!
//! A [`FilterFactory`] turns the current filter text and text projector into
//! an item predicate. [`Filter`] is the shareable handle stored in the state.
use std::fmt;
use std::sync::Arc;

use crate::{Item, TextGetter};

pub type Predicate<'a> = Box<dyn Fn(&Item) -> bool + 'a>;

/// Builds an item predicate from filter text and a text projector.
pub trait FilterFactory: Send + Sync {
    /// Short name used in logs and debug output.
    fn name(&self) -> &str;

    fn build<'a>(&'a self, text: Option<&'a str>, text_getter: &'a TextGetter) -> Predicate<'a>;
}

/// Matches every item. Used when internal filtering is turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFilter;

impl FilterFactory for IdentityFilter {
    fn name(&self) -> &str {
        "identity"
    }

    fn build<'a>(&'a self, _text: Option<&'a str>, _text_getter: &'a TextGetter) -> Predicate<'a> {
        Box::new(|_: &Item| true)
    }
}

/// Case-insensitive substring match on the item's display text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringFilter;

impl FilterFactory for SubstringFilter {
    fn name(&self) -> &str {
        "substring"
    }

    fn build<'a>(&'a self, text: Option<&'a str>, text_getter: &'a TextGetter) -> Predicate<'a> {
        match lowered(text) {
            None => Box::new(|_: &Item| true),
            Some(needle) => Box::new(move |item: &Item| {
                text_getter
                    .text(item.value())
                    .is_some_and(|hay| hay.to_lowercase().contains(&needle))
            }),
        }
    }
}

/// Case-insensitive prefix match on the item's display text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixFilter;

impl FilterFactory for PrefixFilter {
    fn name(&self) -> &str {
        "prefix"
    }

    fn build<'a>(&'a self, text: Option<&'a str>, text_getter: &'a TextGetter) -> Predicate<'a> {
        match lowered(text) {
            None => Box::new(|_: &Item| true),
            Some(needle) => Box::new(move |item: &Item| {
                text_getter
                    .text(item.value())
                    .is_some_and(|hay| hay.to_lowercase().starts_with(&needle))
            }),
        }
    }
}

fn lowered(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.is_empty()).map(str::to_lowercase)
}

struct FnFilter<F> {
    name: String,
    matches: F,
}

impl<F> FilterFactory for FnFilter<F>
where
    F: Fn(Option<&str>, &TextGetter, &Item) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn build<'a>(&'a self, text: Option<&'a str>, text_getter: &'a TextGetter) -> Predicate<'a> {
        Box::new(move |item: &Item| (self.matches)(text, text_getter, item))
    }
}

/// Shared handle to a filter factory.
///
/// Two handles are equal only when they point at the same factory instance.
#[derive(Clone)]
pub struct Filter(Arc<dyn FilterFactory>);

impl Filter {
    pub fn new(factory: impl FilterFactory + 'static) -> Self {
        Self(Arc::new(factory))
    }

    pub fn identity() -> Self {
        Self::new(IdentityFilter)
    }

    pub fn substring() -> Self {
        Self::new(SubstringFilter)
    }

    pub fn prefix() -> Self {
        Self::new(PrefixFilter)
    }

    /// Wraps a plain matching function as a factory.
    pub fn from_fn<F>(name: impl Into<String>, matches: F) -> Self
    where
        F: Fn(Option<&str>, &TextGetter, &Item) -> bool + Send + Sync + 'static,
    {
        Self::new(FnFilter {
            name: name.into(),
            matches,
        })
    }

    /// Looks up a built-in factory by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "identity" => Some(Self::identity()),
            "substring" | "default" => Some(Self::substring()),
            "prefix" => Some(Self::prefix()),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Items matching `text`, in their original order.
    pub fn apply(&self, items: &[Item], text: Option<&str>, text_getter: &TextGetter) -> Vec<Item> {
        let predicate = self.0.build(text, text_getter);
        items.iter().filter(|item| predicate(*item)).cloned().collect()
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::substring()
    }
}

impl PartialEq for Filter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Filter").field(&self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items() -> Vec<Item> {
        vec![
            Item::new("Apple"),
            Item::new("banana"),
            Item::new(json!(null)),
            Item::new("Pineapple"),
        ]
    }

    #[test]
    fn substring_is_case_insensitive_and_keeps_order() {
        let found = Filter::substring().apply(&items(), Some("APP"), &TextGetter::passthrough());
        assert_eq!(found, vec![Item::new("Apple"), Item::new("Pineapple")]);
    }

    #[test]
    fn empty_text_matches_everything() {
        let getter = TextGetter::passthrough();
        assert_eq!(Filter::substring().apply(&items(), None, &getter).len(), 4);
        assert_eq!(Filter::substring().apply(&items(), Some(""), &getter).len(), 4);
    }

    #[test]
    fn items_without_text_never_match_non_empty_filter() {
        let found = Filter::substring().apply(&items(), Some("n"), &TextGetter::passthrough());
        assert!(!found.contains(&Item::new(json!(null))));
    }

    #[test]
    fn identity_ignores_text() {
        let found = Filter::identity().apply(&items(), Some("zzz"), &TextGetter::passthrough());
        assert_eq!(found, items());
    }

    #[test]
    fn prefix_matches_start_only() {
        let found = Filter::prefix().apply(&items(), Some("app"), &TextGetter::passthrough());
        assert_eq!(found, vec![Item::new("Apple")]);
    }

    #[test]
    fn from_fn_sees_text_and_getter() {
        let exact = Filter::from_fn("exact", |text, getter, item| {
            text.is_none() || getter.text(item.value()).as_deref() == text
        });
        let found = exact.apply(&items(), Some("banana"), &TextGetter::passthrough());
        assert_eq!(found, vec![Item::new("banana")]);
        assert_eq!(exact.name(), "exact");
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = Filter::substring();
        assert_eq!(a, a.clone());
        assert_ne!(a, Filter::substring());
        assert!(Filter::builtin("nope").is_none());
    }
}
