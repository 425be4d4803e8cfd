//! Toggle collection with an optional size cap.
//!
//! Every multi-select answer in the wizard (objectives, features, languages,
//! integrations) is a [`SelectionSet`]; only the bound differs.

use serde::{Deserialize, Serialize};

/// What a [`SelectionSet::toggle`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Not present and the set is full (or the item is unknown to the caller).
    Rejected,
}

impl ToggleOutcome {
    pub fn changed(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Ordered set of distinct items with an optional maximum size.
///
/// Serializes as a plain sequence; the bound is not part of the wire form
/// and two sets are equal when they hold the same items in the same order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet<T = String> {
    items: Vec<T>,
    #[serde(skip)]
    max: Option<usize>,
}

impl<T> Default for SelectionSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            max: None,
        }
    }
}

impl<T: PartialEq> PartialEq for SelectionSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for SelectionSet<T> {}

impl<T: PartialEq> SelectionSet<T> {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn bounded(max: usize) -> Self {
        Self::with_bound(Some(max))
    }

    pub fn with_bound(max: Option<usize>) -> Self {
        Self {
            items: Vec::new(),
            max,
        }
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Remove `item` if present, otherwise add it when there is room.
    pub fn toggle(&mut self, item: T) -> ToggleOutcome {
        if let Some(pos) = self.items.iter().position(|x| *x == item) {
            self.items.remove(pos);
            return ToggleOutcome::Removed;
        }
        if self.is_full() {
            return ToggleOutcome::Rejected;
        }
        self.items.push(item);
        ToggleOutcome::Added
    }

    /// Add `item` unless it is already present or the set is full.
    pub fn insert(&mut self, item: T) -> bool {
        if self.contains(&item) || self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: std::borrow::Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.items.iter().any(|x| x.borrow() == item)
    }

    pub fn is_full(&self) -> bool {
        self.max.is_some_and(|max| self.items.len() >= max)
    }

    /// Whether toggling `item` would change the set; UIs disable the rest.
    pub fn is_selectable<Q>(&self, item: &Q) -> bool
    where
        T: std::borrow::Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.contains(item) || !self.is_full()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<'a, T> IntoIterator for &'a SelectionSet<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
