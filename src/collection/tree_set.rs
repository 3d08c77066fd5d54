// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Sorted identifier set.
//!
//! Complexity:
//! - add / remove / contains: O(log n)
//! - first / last: O(log n)
//! - between: O(log n + k)

use std::collections::BTreeSet;

use super::DbidIter;
use super::Dbids;
use super::ModifiableDbids;
use crate::id::Dbid;

/// A set of identifiers that iterates in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DbidTreeSet {
    items: BTreeSet<Dbid>,
}

impl DbidTreeSet {
    /// Create an empty set.
    pub fn new() -> DbidTreeSet {
        return DbidTreeSet { items: BTreeSet::new() };
    }

    /// Copy the distinct members of `existing`.
    pub fn from_dbids(existing: &dyn Dbids) -> DbidTreeSet {
        return DbidTreeSet { items: existing.iter().collect() };
    }

    /// Smallest member.
    pub fn first(&self) -> Option<Dbid> {
        return self.items.first().copied();
    }

    /// Largest member.
    pub fn last(&self) -> Option<Dbid> {
        return self.items.last().copied();
    }

    /// Members `id` with `lo <= id < hi`, ascending.
    pub fn between(&self, lo: Dbid, hi: Dbid) -> impl DoubleEndedIterator<Item = Dbid> + '_ {
        let upper = if hi < lo { lo } else { hi };
        return self.items.range(lo..upper).copied();
    }
}

impl Dbids for DbidTreeSet {
    #[inline]
    fn len(&self) -> usize {
        return self.items.len();
    }

    #[inline]
    fn contains(&self, id: Dbid) -> bool {
        return self.items.contains(&id);
    }

    fn iter(&self) -> DbidIter<'_> {
        return DbidIter::tree(self.items.iter());
    }
}

impl ModifiableDbids for DbidTreeSet {
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

impl FromIterator<Dbid> for DbidTreeSet {
    fn from_iter<I: IntoIterator<Item = Dbid>>(iter: I) -> DbidTreeSet {
        return DbidTreeSet { items: iter.into_iter().collect() };
    }
}

impl Extend<Dbid> for DbidTreeSet {
    fn extend<I: IntoIterator<Item = Dbid>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a DbidTreeSet {
    type Item = Dbid;
    type IntoIter = DbidIter<'a>;

    fn into_iter(self) -> DbidIter<'a> {
        return Dbids::iter(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(values: &[u64]) -> DbidTreeSet {
        return values.iter().map(|&v| Dbid::from_raw(v)).collect();
    }

    fn values<I: Iterator<Item = Dbid>>(iter: I) -> Vec<u64> {
        return iter.map(|id| id.value()).collect();
    }

    #[test]
    fn iterates_ascending_without_duplicates() {
        let t = tree(&[9, 2, 7, 2, 4]);
        assert_eq!(values(Dbids::iter(&t)), vec![2, 4, 7, 9]);
    }

    #[test]
    fn first_and_last() {
        let t = tree(&[9, 2, 7]);
        assert_eq!(t.first(), Some(Dbid::from_raw(2)));
        assert_eq!(t.last(), Some(Dbid::from_raw(9)));
        assert_eq!(DbidTreeSet::new().first(), None);
    }

    #[test]
    fn between_is_half_open() {
        let t = tree(&[1, 3, 5, 7, 9]);
        assert_eq!(values(t.between(Dbid::from_raw(3), Dbid::from_raw(7))), vec![3, 5]);
        assert_eq!(values(t.between(Dbid::from_raw(8), Dbid::from_raw(2))), Vec::<u64>::new());
    }

    #[test]
    fn add_and_remove() {
        let mut t = DbidTreeSet::new();
        assert!(t.add(Dbid::from_raw(4)));
        assert!(!t.add(Dbid::from_raw(4)));
        assert!(t.contains(Dbid::from_raw(4)));
        assert!(t.remove(Dbid::from_raw(4)));
        assert!(t.is_empty());
    }
}
