// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Array-backed identifier collection.
//!
//! Complexity:
//! - add: O(1) amortized
//! - get / set / swap: O(1)
//! - contains / remove: O(n), O(log n) via binary_search once sorted
//! - remove_at: O(n)

use super::DbidIter;
use super::Dbids;
use super::ModifiableDbids;
use crate::id::Dbid;

/// Identifiers in insertion order. Duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DbidArray {
    items: Vec<Dbid>,
}

impl DbidArray {
    /// Create an empty array.
    pub fn new() -> DbidArray {
        return DbidArray { items: Vec::new() };
    }

    /// Create an empty array with room for `capacity` identifiers.
    pub fn with_capacity(capacity: usize) -> DbidArray {
        return DbidArray { items: Vec::with_capacity(capacity) };
    }

    /// Copy every member of `existing`, in its iteration order.
    pub fn from_dbids(existing: &dyn Dbids) -> DbidArray {
        let mut items = Vec::with_capacity(existing.len());
        items.extend(existing.iter());
        return DbidArray { items };
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Dbid> {
        return self.items.get(index).copied();
    }

    /// Replace the identifier at `index`, returning the old one.
    ///
    /// Returns `None` and leaves the array unchanged if out of bounds.
    pub fn set(&mut self, index: usize, id: Dbid) -> Option<Dbid> {
        let slot = self.items.get_mut(index)?;
        let old = *slot;
        *slot = id;
        return Some(old);
    }

    /// Remove and return the identifier at `index`, shifting the tail left.
    pub fn remove_at(&mut self, index: usize) -> Option<Dbid> {
        if index >= self.items.len() {
            return None;
        }
        return Some(self.items.remove(index));
    }

    /// Swap two positions. Panics if either is out of bounds, like `slice::swap`.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    /// Sort ascending. Duplicates stay adjacent.
    pub fn sort(&mut self) {
        self.items.sort_unstable();
    }

    /// Binary search for `id`. The array must be sorted.
    pub fn binary_search(&self, id: Dbid) -> Result<usize, usize> {
        return self.items.binary_search(&id);
    }

    #[inline]
    pub fn as_slice(&self) -> &[Dbid] {
        return &self.items;
    }
}

impl Dbids for DbidArray {
    #[inline]
    fn len(&self) -> usize {
        return self.items.len();
    }

    fn contains(&self, id: Dbid) -> bool {
        return self.items.contains(&id);
    }

    fn iter(&self) -> DbidIter<'_> {
        return DbidIter::slice(&self.items);
    }
}

impl ModifiableDbids for DbidArray {
    /// Always appends, so always returns true.
    fn add(&mut self, id: Dbid) -> bool {
        self.items.push(id);
        return true;
    }

    fn remove(&mut self, id: Dbid) -> bool {
        let Some(index) = self.items.iter().position(|&item| item == id) else {
            return false;
        };
        self.items.remove(index);
        return true;
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn add_all(&mut self, other: &dyn Dbids) -> bool {
        let before = self.items.len();
        self.items.extend(other.iter());
        return self.items.len() != before;
    }
}

impl FromIterator<Dbid> for DbidArray {
    fn from_iter<I: IntoIterator<Item = Dbid>>(iter: I) -> DbidArray {
        return DbidArray { items: iter.into_iter().collect() };
    }
}

impl Extend<Dbid> for DbidArray {
    fn extend<I: IntoIterator<Item = Dbid>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a DbidArray {
    type Item = Dbid;
    type IntoIter = DbidIter<'a>;

    fn into_iter(self) -> DbidIter<'a> {
        return Dbids::iter(self);
    }
}
