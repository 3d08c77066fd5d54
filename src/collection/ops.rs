// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Set algebra over any mix of collection variants.
//!
//! Where the result does not depend on which side is iterated, the smaller
//! input is iterated and looked up in the larger one. Array lookups are linear
//! time, so prefer a hash or tree set on the larger side.

use super::DbidHashSet;
use super::Dbids;
use super::ModifiableDbids;

fn smaller_first<'a>(a: &'a dyn Dbids, b: &'a dyn Dbids) -> (&'a dyn Dbids, &'a dyn Dbids) {
    if a.len() <= b.len() {
        return (a, b);
    }
    return (b, a);
}

/// Members present in both `a` and `b`.
pub fn intersection(a: &dyn Dbids, b: &dyn Dbids) -> DbidHashSet {
    let (small, large) = smaller_first(a, b);
    let mut out = DbidHashSet::with_capacity(small.len());
    for id in small.iter() {
        if large.contains(id) {
            out.add(id);
        }
    }
    return out;
}

/// Number of distinct members present in both `a` and `b`.
pub fn intersection_size(a: &dyn Dbids, b: &dyn Dbids) -> usize {
    return intersection(a, b).len();
}

/// Members present in `a` or `b`.
pub fn union(a: &dyn Dbids, b: &dyn Dbids) -> DbidHashSet {
    let mut out = DbidHashSet::with_capacity(a.len() + b.len());
    out.add_all(a);
    out.add_all(b);
    return out;
}

/// Members of `a` not present in `b`.
pub fn difference(a: &dyn Dbids, b: &dyn Dbids) -> DbidHashSet {
    let mut out = DbidHashSet::with_capacity(a.len());
    for id in a.iter() {
        if !b.contains(id) {
            out.add(id);
        }
    }
    return out;
}
