// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Hash-backed identifier set.
//!
//! Uses `FxHashSet`: identifiers are small integers, so a fast
//! non-cryptographic hasher is enough.
//!
//! Complexity:
//! - add / remove / contains: O(1) expected
//! - retain_all: O(n) lookups into the other collection

use rustc_hash::FxHashSet;

use super::DbidIter;
use super::Dbids;
use super::ModifiableDbids;
use crate::id::Dbid;

/// An unordered set of identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DbidHashSet {
    items: FxHashSet<Dbid>,
}

impl DbidHashSet {
    /// Create an empty set.
    pub fn new() -> DbidHashSet {
        return DbidHashSet { items: FxHashSet::default() };
    }

    /// Create an empty set sized for `capacity` identifiers.
    pub fn with_capacity(capacity: usize) -> DbidHashSet {
        return DbidHashSet {
            items: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        };
    }

    /// Copy the distinct members of `existing`.
    pub fn from_dbids(existing: &dyn Dbids) -> DbidHashSet {
        let mut set = DbidHashSet::with_capacity(existing.len());
        set.items.extend(existing.iter());
        return set;
    }

    /// Keep only members also present in `other`. Returns whether anything
    /// was removed.
    pub fn retain_all(&mut self, other: &dyn Dbids) -> bool {
        let before = self.items.len();
        self.items.retain(|&id| other.contains(id));
        return self.items.len() != before;
    }
}

impl Dbids for DbidHashSet {
    #[inline]
    fn len(&self) -> usize {
        return self.items.len();
    }

    #[inline]
    fn contains(&self, id: Dbid) -> bool {
        return self.items.contains(&id);
    }

    fn iter(&self) -> DbidIter<'_> {
        return DbidIter::hash(self.items.iter());
    }
}

impl ModifiableDbids for DbidHashSet {
    #[inline]
    fn add(&mut self, id: Dbid) -> bool {
        return self.items.insert(id);
    }

    #[inline]
    fn remove(&mut self, id: Dbid) -> bool {
        return self.items.remove(&id);
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl FromIterator<Dbid> for DbidHashSet {
    fn from_iter<I: IntoIterator<Item = Dbid>>(iter: I) -> DbidHashSet {
        let mut set = DbidHashSet::new();
        set.items.extend(iter);
        return set;
    }
}

impl Extend<Dbid> for DbidHashSet {
    fn extend<I: IntoIterator<Item = Dbid>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a DbidHashSet {
    type Item = Dbid;
    type IntoIter = DbidIter<'a>;

    fn into_iter(self) -> DbidIter<'a> {
        return Dbids::iter(self);
    }
}
