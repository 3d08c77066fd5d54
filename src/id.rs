// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! The record identifier.
//!
//! A `Dbid` is a plain `u64` underneath: equal iff the integers are equal,
//! ordered by the integer. There is no public constructor; identifiers come
//! from a [`DbidFactory`](crate::factory::DbidFactory), either freshly
//! generated or imported from an external source, or from a
//! [`DbidRange`](crate::range::DbidRange).

use std::fmt;

/// A record identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dbid(u64);

impl Dbid {
    /// Largest value a factory hands out.
    ///
    /// Kept at `u32::MAX` so every issued identifier fits the 4-byte
    /// [`FixedCodec`](crate::codec::FixedCodec). Imported values may be
    /// wider.
    pub const MAX_ISSUED: u64 = u32::MAX as u64;

    #[inline]
    pub(crate) fn from_raw(value: u64) -> Dbid {
        return Dbid(value);
    }

    /// The underlying integer.
    #[inline]
    pub fn value(&self) -> u64 {
        return self.0;
    }
}

impl fmt::Display for Dbid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl From<Dbid> for u64 {
    fn from(id: Dbid) -> u64 {
        return id.0;
    }
}
