// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Pairs of identifiers, used as keys for pairwise results.
//!
//! # Construction rule
//!
//! A `DbidPair` is ordered. [`DbidPair::new`] (and
//! [`DbidFactory::make_pair`](crate::factory::DbidFactory::make_pair)) keep
//! the arguments in the order given, so `(a, b)` and `(b, a)` are different
//! keys unless `a == b`. Callers memoizing a symmetric relation build keys
//! with [`DbidPair::symmetric`] instead, which always stores the smaller
//! identifier first. Nothing is normalized behind the caller's back.

use crate::id::Dbid;

/// An ordered pair of identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DbidPair {
    first: Dbid,
    second: Dbid,
}

impl DbidPair {
    /// Pair `first` with `second`, in that order.
    #[inline]
    pub fn new(first: Dbid, second: Dbid) -> DbidPair {
        return DbidPair { first, second };
    }

    /// Pair two identifiers with the smaller one first.
    ///
    /// `symmetric(a, b) == symmetric(b, a)` for all `a`, `b`.
    #[inline]
    pub fn symmetric(a: Dbid, b: Dbid) -> DbidPair {
        if b < a {
            return DbidPair { first: b, second: a };
        }
        return DbidPair { first: a, second: b };
    }

    #[inline]
    pub fn first(&self) -> Dbid {
        return self.first;
    }

    #[inline]
    pub fn second(&self) -> Dbid {
        return self.second;
    }

    /// The same pair in the opposite order.
    #[inline]
    pub fn swapped(&self) -> DbidPair {
        return DbidPair { first: self.second, second: self.first };
    }

    /// This pair with the smaller identifier first.
    #[inline]
    pub fn canonical(&self) -> DbidPair {
        return DbidPair::symmetric(self.first, self.second);
    }

    /// Whether `id` is either member.
    #[inline]
    pub fn contains(&self, id: Dbid) -> bool {
        return self.first == id || self.second == id;
    }

    /// The partner of `id`, or `None` if `id` is not in the pair.
    pub fn other(&self, id: Dbid) -> Option<Dbid> {
        if self.first == id {
            return Some(self.second);
        }
        if self.second == id {
            return Some(self.first);
        }
        return None;
    }
}

impl From<(Dbid, Dbid)> for DbidPair {
    fn from((first, second): (Dbid, Dbid)) -> DbidPair {
        return DbidPair::new(first, second);
    }
}
