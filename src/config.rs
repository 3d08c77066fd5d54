// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Factory configuration.

/// Order in which freed single identifiers are handed out again.
///
/// Either order is deterministic for a single-threaded caller. LIFO keeps
/// recently freed values hot; FIFO spreads reuse out so a stale handle is
/// less likely to alias a fresh one soon after release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReusePolicy {
    /// Most recently freed value first.
    #[default]
    Lifo,
    /// Least recently freed value first.
    Fifo,
}

/// Settings for a [`DbidFactory`](crate::factory::DbidFactory).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactoryConfig {
    /// Reuse order of the single-identifier free list.
    pub reuse: ReusePolicy,
    /// Track issued single identifiers so bad releases are rejected.
    /// Costs one hash set insert/remove per allocation.
    pub track_liveness: bool,
    /// First value handed out by the fresh counter.
    pub first_value: u64,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        return FactoryConfig {
            reuse: ReusePolicy::Lifo,
            track_liveness: cfg!(debug_assertions),
            first_value: 0,
        };
    }
}

impl FactoryConfig {
    /// Default configuration.
    pub fn new() -> FactoryConfig {
        return FactoryConfig::default();
    }

    /// Set the free list reuse order.
    pub fn with_reuse(mut self, reuse: ReusePolicy) -> FactoryConfig {
        self.reuse = reuse;
        return self;
    }

    /// Enable or disable liveness tracking.
    pub fn with_liveness_tracking(mut self, enabled: bool) -> FactoryConfig {
        self.track_liveness = enabled;
        return self;
    }

    /// Start the fresh counter at `value`.
    ///
    /// Used when reopening a store whose identifiers were imported with
    /// [`import_integer`](crate::factory::DbidFactory::import_integer), so
    /// fresh values do not collide with them.
    ///
    /// A value above [`Dbid::MAX_ISSUED`](crate::id::Dbid::MAX_ISSUED)
    /// leaves no fresh values: `generate_single` then panics unless a freed
    /// single is available, while `generate_static_range` returns
    /// `InvalidArgument`.
    pub fn with_first_value(mut self, value: u64) -> FactoryConfig {
        self.first_value = value;
        return self;
    }
}
