// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Collections of identifiers.
//!
//! One contract, three storage strategies:
//!
//! - [`DbidArray`]: insertion order, duplicates allowed, positional access.
//!   Use it when building an index in arrival order.
//! - [`DbidHashSet`]: set semantics, O(1) expected membership, no order.
//!   Use it when only membership matters.
//! - [`DbidTreeSet`]: set semantics, ascending iteration. Use it when the
//!   output must be reproducible.
//!
//! Membership is pure value equality. Converting between variants is an
//! explicit bulk copy (`DbidFactory::new_*_from`), never implicit.
//!
//! Collections are not synchronized. Each instance belongs to one thread
//! at a time.

mod array;
mod hash_set;
pub mod ops;
mod tree_set;

use std::collections::btree_set;
use std::collections::hash_set as std_hash_set;
use std::iter::Copied;
use std::slice;

pub use array::DbidArray;
pub use hash_set::DbidHashSet;
pub use tree_set::DbidTreeSet;

use crate::id::Dbid;
use crate::range::DbidRange;
use crate::range::RangeIter;

/// Read-only view of a group of identifiers.
pub trait Dbids {
    /// Number of stored identifiers, counting duplicates.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Whether `id` is a member.
    fn contains(&self, id: Dbid) -> bool;

    /// Iterate the members. Order depends on the backing store.
    fn iter(&self) -> DbidIter<'_>;
}

/// A group of identifiers that can be changed in place.
pub trait ModifiableDbids: Dbids {
    /// Add `id`. Returns whether the collection changed.
    fn add(&mut self, id: Dbid) -> bool;

    /// Remove `id` (one occurrence for arrays). Returns whether it was present.
    fn remove(&mut self, id: Dbid) -> bool;

    /// Remove every member.
    fn clear(&mut self);

    /// Add every member of `other`. Returns whether anything changed.
    fn add_all(&mut self, other: &dyn Dbids) -> bool {
        let mut changed = false;
        for id in other.iter() {
            changed |= self.add(id);
        }
        return changed;
    }

    /// Remove every member of `other`. Returns whether anything changed.
    fn remove_all(&mut self, other: &dyn Dbids) -> bool {
        let mut changed = false;
        for id in other.iter() {
            changed |= self.remove(id);
        }
        return changed;
    }
}

/// Iterator over any [`Dbids`] implementation.
///
/// Wraps the concrete store iterators so `Dbids` stays object safe without
/// boxing. The backing iterator types are not part of the API.
#[derive(Clone, Debug)]
pub struct DbidIter<'a> {
    source: Source<'a>,
}

#[derive(Clone, Debug)]
enum Source<'a> {
    Slice(Copied<slice::Iter<'a, Dbid>>),
    Hash(Copied<std_hash_set::Iter<'a, Dbid>>),
    Tree(Copied<btree_set::Iter<'a, Dbid>>),
    Range(RangeIter),
}

impl<'a> DbidIter<'a> {
    pub(crate) fn slice(items: &'a [Dbid]) -> DbidIter<'a> {
        return DbidIter { source: Source::Slice(items.iter().copied()) };
    }

    pub(crate) fn hash(iter: std_hash_set::Iter<'a, Dbid>) -> DbidIter<'a> {
        return DbidIter { source: Source::Hash(iter.copied()) };
    }

    pub(crate) fn tree(iter: btree_set::Iter<'a, Dbid>) -> DbidIter<'a> {
        return DbidIter { source: Source::Tree(iter.copied()) };
    }

    pub(crate) fn range(iter: RangeIter) -> DbidIter<'a> {
        return DbidIter { source: Source::Range(iter) };
    }
}

impl Iterator for DbidIter<'_> {
    type Item = Dbid;

    #[inline]
    fn next(&mut self) -> Option<Dbid> {
        return match &mut self.source {
            Source::Slice(iter) => iter.next(),
            Source::Hash(iter) => iter.next(),
            Source::Tree(iter) => iter.next(),
            Source::Range(iter) => iter.next(),
        };
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        return match &self.source {
            Source::Slice(iter) => iter.size_hint(),
            Source::Hash(iter) => iter.size_hint(),
            Source::Tree(iter) => iter.size_hint(),
            Source::Range(iter) => iter.size_hint(),
        };
    }
}

impl ExactSizeIterator for DbidIter<'_> {}

// A range is a static collection.
impl Dbids for DbidRange {
    fn len(&self) -> usize {
        return DbidRange::len(self);
    }

    fn contains(&self, id: Dbid) -> bool {
        return DbidRange::contains(self, id);
    }

    fn iter(&self) -> DbidIter<'_> {
        return DbidIter::range(DbidRange::iter(self));
    }
}
