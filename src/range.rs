// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Contiguous blocks of identifiers.
//!
//! A range covers the half-open interval `[start, start + len)`. It is
//! allocated and released as a unit and never materializes its members:
//! iteration is lazy and can be restarted by calling `iter()` again.
//!
//! Complexity:
//! - contains: O(1)
//! - get / offset_of: O(1)
//! - iter: O(1) to create, O(1) per step

use std::iter::FusedIterator;

use crate::error::IdError;
use crate::error::IdResult;
use crate::id::Dbid;

/// A contiguous, immutable block of identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRange"))]
pub struct DbidRange {
    start: u64,
    len: usize,
}

impl DbidRange {
    /// The factory guarantees `len > 0` and that `start + len` fits in u64.
    pub(crate) fn new(start: u64, len: usize) -> DbidRange {
        debug_assert!(len > 0);
        debug_assert!(start.checked_add(len as u64).is_some());
        return DbidRange { start, len };
    }

    /// Rebuild a range from stored parts, e.g. when reopening persisted
    /// data. Rejects empty ranges and ranges that run past `u64::MAX`.
    ///
    /// Like imported identifiers, the result is not known to any factory;
    /// releasing it through one fails.
    pub fn checked(start: u64, len: usize) -> IdResult<DbidRange> {
        if len == 0 {
            return Err(IdError::InvalidArgument("range size must be positive".to_string()));
        }
        if start.checked_add(len as u64).is_none() {
            return Err(IdError::InvalidArgument(format!(
                "range of {} identifiers at {} overflows the identifier space",
                len, start
            )));
        }
        return Ok(DbidRange { start, len });
    }

    /// First value in the range.
    #[inline]
    pub fn start(&self) -> u64 {
        return self.start;
    }

    /// One past the last value in the range.
    #[inline]
    pub fn end(&self) -> u64 {
        return self.start + self.len as u64;
    }

    #[inline]
    pub fn len(&self) -> usize {
        return self.len;
    }

    /// Always false; ranges are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    #[inline]
    pub fn contains(&self, id: Dbid) -> bool {
        let value = id.value();
        return self.start <= value && value < self.end();
    }

    /// The identifier at `offset`, if inside the range.
    #[inline]
    pub fn get(&self, offset: usize) -> Option<Dbid> {
        if offset >= self.len {
            return None;
        }
        return Some(Dbid::from_raw(self.start + offset as u64));
    }

    /// Position of `id` within the range.
    #[inline]
    pub fn offset_of(&self, id: Dbid) -> Option<usize> {
        if !self.contains(id) {
            return None;
        }
        return Some((id.value() - self.start) as usize);
    }

    /// Whether the two ranges share any value.
    #[inline]
    pub fn overlaps(&self, other: &DbidRange) -> bool {
        return self.start < other.end() && other.start < self.end();
    }

    /// Lazily iterate the members in ascending order.
    #[inline]
    pub fn iter(&self) -> RangeIter {
        return RangeIter { next: self.start, end: self.end() };
    }
}

impl IntoIterator for DbidRange {
    type Item = Dbid;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        return self.iter();
    }
}

impl IntoIterator for &DbidRange {
    type Item = Dbid;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        return self.iter();
    }
}

/// Serialized form of a range, checked before it becomes a [`DbidRange`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRange {
    start: u64,
    len: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRange> for DbidRange {
    type Error = IdError;

    fn try_from(raw: RawRange) -> IdResult<DbidRange> {
        return DbidRange::checked(raw.start, raw.len);
    }
}

/// Iterator over the members of a [`DbidRange`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    next: u64,
    end: u64,
}

impl Iterator for RangeIter {
    type Item = Dbid;

    #[inline]
    fn next(&mut self) -> Option<Dbid> {
        if self.next >= self.end {
            return None;
        }
        let value = self.next;
        self.next += 1;
        return Some(Dbid::from_raw(value));
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        return (remaining, Some(remaining));
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Dbid> {
        self.next = self.next.saturating_add(n as u64).min(self.end);
        return self.next();
    }
}

impl DoubleEndedIterator for RangeIter {
    #[inline]
    fn next_back(&mut self) -> Option<Dbid> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        return Some(Dbid::from_raw(self.end));
    }
}

impl ExactSizeIterator for RangeIter {}

impl FusedIterator for RangeIter {}
