//! AFL fuzz harness for the identifier factory.
//!
//! Replays a byte-driven sequence of allocations and releases against a
//! tracked factory and checks, after every step:
//! 1. Uniqueness: no value is held by two live singles or ranges at once
//! 2. Rejection: releasing a value that is not live fails and changes nothing
//! 3. Bookkeeping: factory stats agree with the model

use std::collections::BTreeSet;

use afl::fuzz;
use dbid::Dbid;
use dbid::DbidFactory;
use dbid::DbidRange;
use dbid::FactoryConfig;
use dbid::ReusePolicy;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Allocate one single identifier
    Single,
    /// Release the live single at a position in the model
    ReleaseSingle { pick: u8 },
    /// Release a value the model says is not live
    ReleaseStale { pick: u8 },
    /// Allocate a range of 1-64 identifiers
    Range { size: u8 },
    /// Release the live range at a position in the model
    ReleaseRange { pick: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 5;
        let rest = &bytes[1..];

        match op_type {
            0 => Some((FuzzOp::Single, rest)),
            1 if !rest.is_empty() => Some((FuzzOp::ReleaseSingle { pick: rest[0] }, &rest[1..])),
            2 if !rest.is_empty() => Some((FuzzOp::ReleaseStale { pick: rest[0] }, &rest[1..])),
            3 if !rest.is_empty() => Some((FuzzOp::Range { size: (rest[0] % 64).saturating_add(1) }, &rest[1..])),
            4 if !rest.is_empty() => Some((FuzzOp::ReleaseRange { pick: rest[0] }, &rest[1..])),
            _ => None,
        }
    }
}

fn assert_disjoint(singles: &[Dbid], ranges: &[DbidRange]) {
    let mut seen = BTreeSet::new();
    for id in singles {
        assert!(seen.insert(id.value()), "single {} issued twice", id);
    }
    for range in ranges {
        for id in range.iter() {
            assert!(seen.insert(id.value()), "value {} in range {:?} already live", id, range);
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        let reuse = match data.first() {
            Some(byte) if byte & 1 == 1 => ReusePolicy::Fifo,
            _ => ReusePolicy::Lifo,
        };
        let factory = DbidFactory::with_config(
            FactoryConfig::new().with_reuse(reuse).with_liveness_tracking(true),
        );
        let mut singles: Vec<Dbid> = Vec::new();
        let mut freed: Vec<Dbid> = Vec::new();
        let mut ranges: Vec<DbidRange> = Vec::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Single => {
                    let id = factory.generate_single();
                    freed.retain(|&f| f != id);
                    singles.push(id);
                }

                FuzzOp::ReleaseSingle { pick } => {
                    if !singles.is_empty() {
                        let id = singles.swap_remove(pick as usize % singles.len());
                        factory.deallocate_single(id).expect("live single must release");
                        freed.push(id);
                    }
                }

                FuzzOp::ReleaseStale { pick } => {
                    if !freed.is_empty() {
                        let id = freed[pick as usize % freed.len()];
                        let before = factory.stats();
                        assert!(factory.deallocate_single(id).is_err(), "stale release of {} accepted", id);
                        assert_eq!(factory.stats(), before, "rejected release changed state");
                    }
                }

                FuzzOp::Range { size } => {
                    let range = factory.generate_static_range(size as usize).expect("range must allocate");
                    assert_eq!(range.len(), size as usize);
                    ranges.push(range);
                }

                FuzzOp::ReleaseRange { pick } => {
                    if !ranges.is_empty() {
                        let range = ranges.swap_remove(pick as usize % ranges.len());
                        factory.deallocate_range(range).expect("live range must release");
                        assert!(factory.deallocate_range(range).is_err(), "double range release accepted");
                    }
                }
            }

            assert_disjoint(&singles, &ranges);

            let stats = factory.stats();
            assert_eq!(stats.live_singles, Some(singles.len()), "live single count mismatch");
            assert_eq!(stats.live_ranges, ranges.len(), "live range count mismatch");
        }
    });
}
