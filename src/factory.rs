// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! The identifier factory.
//!
//! A `DbidFactory` is the single authority for identifier uniqueness within
//! the components that share it. It is an ordinary owned value: construct
//! one, wrap it in an `Arc`, and hand it to every loader, index and query
//! that needs identifiers. Independent factories do not know about each
//! other.
//!
//! # Arenas
//!
//! Fresh values come from one monotonically advancing counter, shared by
//! singles and ranges. After that the two kinds are kept apart:
//!
//! - Freed singles go to a free list and are only handed out as singles,
//!   in LIFO or FIFO order per [`ReusePolicy`].
//! - Released ranges go to a released-range table (adjacent blocks are
//!   merged) and are only handed out as ranges, first fit. Their values
//!   never reach the single free list.
//!
//! So a range never overlaps a live single or another live range.
//!
//! Fresh values stop at [`Dbid::MAX_ISSUED`], so everything a factory
//! issues fits the fixed-width codec. Past that point `generate_single`
//! panics and `generate_static_range` returns an error.
//!
//! # Liveness
//!
//! Range releases are always checked against the live range table. Single
//! releases are only checked when [`FactoryConfig::track_liveness`] is set
//! (the default in debug builds). Without it, releasing a value twice, or
//! one that was never issued, is accepted and may later produce duplicate
//! identifiers.
//!
//! # Concurrency
//!
//! All mutable state sits behind one mutex, so concurrent callers never
//! receive the same value and never observe a half-updated free list. No
//! operation blocks on anything else.

use std::collections::BTreeMap;
use std::collections::VecDeque;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::codec::FixedCodec;
use crate::codec::VarintCodec;
use crate::collection::DbidArray;
use crate::collection::DbidHashSet;
use crate::collection::DbidTreeSet;
use crate::collection::Dbids;
use crate::config::FactoryConfig;
use crate::config::ReusePolicy;
use crate::error::IdError;
use crate::error::IdResult;
use crate::id::Dbid;
use crate::pair::DbidPair;
use crate::range::DbidRange;

/// Mutable allocation state, guarded by the factory mutex.
#[derive(Debug)]
struct FactoryState {
    /// Next never-issued value.
    next: u64,
    /// Freed single values awaiting reuse.
    free: VecDeque<u64>,
    /// Currently issued single values, when tracking is on.
    live_singles: Option<FxHashSet<u64>>,
    /// Live ranges, start -> len.
    live_ranges: BTreeMap<u64, usize>,
    /// Released ranges available for reuse, start -> len. Never adjacent.
    released: BTreeMap<u64, u64>,
}

impl FactoryState {
    fn take_fresh_single(&mut self) -> u64 {
        assert!(self.next <= Dbid::MAX_ISSUED, "identifier space exhausted");
        let value = self.next;
        self.next += 1;
        return value;
    }

    fn take_fresh_block(&mut self, len: u64) -> Option<u64> {
        let end = self.next.checked_add(len)?;
        if end > Dbid::MAX_ISSUED + 1 {
            return None;
        }
        let start = self.next;
        self.next = end;
        return Some(start);
    }

    fn take_released_block(&mut self, len: u64) -> Option<u64> {
        let (start, available) = self
            .released
            .iter()
            .find(|&(_, &available)| available >= len)
            .map(|(&start, &available)| (start, available))?;
        self.released.remove(&start);
        if available > len {
            self.released.insert(start + len, available - len);
        }
        return Some(start);
    }

    fn release_block(&mut self, start: u64, len: u64) {
        let mut start = start;
        let mut len = len;

        let before = self.released.range(..start).next_back().map(|(&s, &l)| (s, l));
        if let Some((prev_start, prev_len)) = before {
            if prev_start + prev_len == start {
                self.released.remove(&prev_start);
                start = prev_start;
                len += prev_len;
            }
        }

        if let Some(next_len) = self.released.remove(&(start + len)) {
            len += next_len;
        }

        self.released.insert(start, len);
    }
}

/// Snapshot of a factory's allocation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FactoryStats {
    /// The value the fresh counter hands out next.
    pub next_fresh: u64,
    /// Freed singles waiting for reuse.
    pub free_singles: usize,
    /// Issued singles not yet freed; `None` when tracking is off.
    pub live_singles: Option<usize>,
    /// Ranges allocated and not yet released.
    pub live_ranges: usize,
    /// Values held by released ranges, available to future ranges.
    pub released_values: u64,
}

/// Creates, recycles and bulk-allocates identifiers.
#[derive(Debug)]
pub struct DbidFactory {
    config: FactoryConfig,
    state: Mutex<FactoryState>,
}

impl Default for DbidFactory {
    fn default() -> Self {
        return DbidFactory::new();
    }
}

impl DbidFactory {
    /// Create a factory with the default configuration.
    pub fn new() -> DbidFactory {
        return DbidFactory::with_config(FactoryConfig::default());
    }

    /// Create a factory with `config`.
    pub fn with_config(config: FactoryConfig) -> DbidFactory {
        debug!(
            reuse = ?config.reuse,
            track_liveness = config.track_liveness,
            first_value = config.first_value,
            "creating identifier factory"
        );
        if config.first_value > Dbid::MAX_ISSUED {
            warn!(
                first_value = config.first_value,
                "first value is past the issuable range; allocation will fail"
            );
        }
        let live_singles = if config.track_liveness {
            Some(FxHashSet::default())
        } else {
            None
        };
        return DbidFactory {
            config,
            state: Mutex::new(FactoryState {
                next: config.first_value,
                free: VecDeque::new(),
                live_singles,
                live_ranges: BTreeMap::new(),
                released: BTreeMap::new(),
            }),
        };
    }

    pub fn config(&self) -> &FactoryConfig {
        return &self.config;
    }

    /// Wrap an externally known integer as an identifier.
    ///
    /// No uniqueness check is made and no state changes. The caller must not
    /// import a value that collides with one this factory hands out; see
    /// [`FactoryConfig::with_first_value`].
    pub fn import_integer(&self, value: u64) -> Dbid {
        return Dbid::from_raw(value);
    }

    /// Hand out an identifier no other live identifier holds.
    ///
    /// Reuses a freed single if there is one, otherwise takes the next fresh
    /// value. Panics if the free list is empty and the fresh counter is
    /// past [`Dbid::MAX_ISSUED`]; a range request in the same state returns
    /// [`IdError::InvalidArgument`] instead.
    pub fn generate_single(&self) -> Dbid {
        let mut state = self.state.lock();
        let reused = match self.config.reuse {
            ReusePolicy::Lifo => state.free.pop_back(),
            ReusePolicy::Fifo => state.free.pop_front(),
        };
        let value = match reused {
            Some(value) => value,
            None => state.take_fresh_single(),
        };
        if let Some(live) = state.live_singles.as_mut() {
            live.insert(value);
        }
        trace!(value, reused = reused.is_some(), "generated single identifier");
        return Dbid::from_raw(value);
    }

    /// Return a single identifier for reuse.
    ///
    /// The caller must make sure nothing still uses `id`. With liveness
    /// tracking on, releasing a value that is not currently issued fails
    /// with [`IdError::CallerContractViolation`] and changes nothing. With
    /// tracking off the value is queued unchecked.
    pub fn deallocate_single(&self, id: Dbid) -> IdResult<()> {
        let value = id.value();
        let mut state = self.state.lock();
        if let Some(live) = state.live_singles.as_mut() {
            if !live.remove(&value) {
                warn!(value, "rejected release of identifier that is not live");
                return Err(IdError::CallerContractViolation {
                    value,
                    reason: "not a live single identifier",
                });
            }
        }
        state.free.push_back(value);
        trace!(value, "released single identifier");
        return Ok(());
    }

    /// Reserve `size` contiguous identifiers.
    ///
    /// Never served from freed singles. Fails with
    /// [`IdError::InvalidArgument`] if `size` is zero or the block would run
    /// past [`Dbid::MAX_ISSUED`].
    pub fn generate_static_range(&self, size: usize) -> IdResult<DbidRange> {
        if size == 0 {
            return Err(IdError::InvalidArgument("range size must be positive".to_string()));
        }
        let len = size as u64;

        let mut state = self.state.lock();
        let (start, reused) = match state.take_released_block(len) {
            Some(start) => (start, true),
            None => {
                let Some(start) = state.take_fresh_block(len) else {
                    return Err(IdError::InvalidArgument(format!(
                        "range of {} identifiers exceeds the identifier space",
                        size
                    )));
                };
                (start, false)
            }
        };
        state.live_ranges.insert(start, size);
        debug!(start, size, reused, "allocated static range");
        return Ok(DbidRange::new(start, size));
    }

    /// Release a whole range.
    ///
    /// Fails with [`IdError::CallerContractViolation`] if `range` is not a
    /// live range of this factory, e.g. when released twice.
    pub fn deallocate_range(&self, range: DbidRange) -> IdResult<()> {
        let start = range.start();
        let mut state = self.state.lock();
        if state.live_ranges.get(&start) != Some(&range.len()) {
            warn!(start, size = range.len(), "rejected release of range that is not live");
            return Err(IdError::CallerContractViolation {
                value: start,
                reason: "not a live range",
            });
        }
        state.live_ranges.remove(&start);
        state.release_block(start, range.len() as u64);
        debug!(start, size = range.len(), "released static range");
        return Ok(());
    }

    /// Pair two identifiers, keeping the given order. See [`DbidPair`].
    pub fn make_pair(&self, first: Dbid, second: Dbid) -> DbidPair {
        return DbidPair::new(first, second);
    }

    pub fn new_array(&self) -> DbidArray {
        return DbidArray::new();
    }

    /// `capacity` is only a sizing hint.
    pub fn new_array_with_capacity(&self, capacity: usize) -> DbidArray {
        return DbidArray::with_capacity(capacity);
    }

    /// Copy `existing` into a new array, in its iteration order.
    pub fn new_array_from(&self, existing: &dyn Dbids) -> DbidArray {
        return DbidArray::from_dbids(existing);
    }

    pub fn new_hash_set(&self) -> DbidHashSet {
        return DbidHashSet::new();
    }

    /// `capacity` is only a sizing hint.
    pub fn new_hash_set_with_capacity(&self, capacity: usize) -> DbidHashSet {
        return DbidHashSet::with_capacity(capacity);
    }

    /// Copy the distinct members of `existing` into a new hash set.
    pub fn new_hash_set_from(&self, existing: &dyn Dbids) -> DbidHashSet {
        return DbidHashSet::from_dbids(existing);
    }

    pub fn new_tree_set(&self) -> DbidTreeSet {
        return DbidTreeSet::new();
    }

    /// Copy the distinct members of `existing` into a new tree set.
    pub fn new_tree_set_from(&self, existing: &dyn Dbids) -> DbidTreeSet {
        return DbidTreeSet::from_dbids(existing);
    }

    /// The general identifier codec.
    pub fn codec(&self) -> VarintCodec {
        return VarintCodec;
    }

    /// The fixed-width identifier codec for paged storage.
    pub fn fixed_width_codec(&self) -> FixedCodec {
        return FixedCodec;
    }

    /// Current allocation counters.
    pub fn stats(&self) -> FactoryStats {
        let state = self.state.lock();
        return FactoryStats {
            next_fresh: state.next,
            free_singles: state.free.len(),
            live_singles: state.live_singles.as_ref().map(|live| live.len()),
            live_ranges: state.live_ranges.len(),
            released_values: state.released.values().sum(),
        };
    }
}
