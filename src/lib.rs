// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Dbid - record identity for an analytical database layer.
//!
//! Every stored record gets a compact `u64` identifier from a
//! [`DbidFactory`]. Identifiers are handed out one at a time for mutable
//! workloads or as contiguous [`DbidRange`]s for bulk loads, can be returned
//! for reuse, and are grouped in one of three collection variants
//! ([`DbidArray`], [`DbidHashSet`], [`DbidTreeSet`]) sharing the [`Dbids`]
//! contract. [`FixedCodec`] writes identifiers as fixed-width keys for
//! paged storage.
//!
//! # Quick Start
//!
//! ```
//! use dbid::DbidFactory;
//! use dbid::Dbids;
//! use dbid::ModifiableDbids;
//!
//! let factory = DbidFactory::new();
//!
//! // Bulk load: one contiguous block.
//! let range = factory.generate_static_range(3).unwrap();
//! assert_eq!((range.start(), range.end()), (0, 3));
//!
//! // Mutable workload: single identifiers, recycled on release.
//! let id = factory.generate_single();
//! assert_eq!(id.value(), 3);
//! factory.deallocate_single(id).unwrap();
//! assert_eq!(factory.generate_single(), id);
//!
//! // Group records.
//! let mut members = factory.new_tree_set_from(&range);
//! members.add(id);
//! assert_eq!(members.len(), 4);
//! ```

pub mod codec;
pub mod collection;
pub mod config;
pub mod error;
pub mod factory;
pub mod id;
pub mod pair;
pub mod range;

pub use codec::ByteCodec;
pub use codec::FixedCodec;
pub use codec::FixedWidthCodec;
pub use codec::VarintCodec;
pub use collection::DbidArray;
pub use collection::DbidHashSet;
pub use collection::DbidIter;
pub use collection::DbidTreeSet;
pub use collection::Dbids;
pub use collection::ModifiableDbids;
pub use config::FactoryConfig;
pub use config::ReusePolicy;
pub use error::IdError;
pub use error::IdResult;
pub use factory::DbidFactory;
pub use factory::FactoryStats;
pub use id::Dbid;
pub use pair::DbidPair;
pub use range::DbidRange;
pub use range::RangeIter;
