//! Deterministic ordering of hits by significance

use std::cmp::Ordering;

/// Anything that can be ranked like a BLAST hit
pub trait Significance {
    fn e_value(&self) -> f64;
    fn score(&self) -> f64;
    fn percent_identity(&self) -> f64;
}

/// Ascending e-value, then descending score, then ascending percent identity.
/// Records equal on all three keys compare equal.
pub fn compare_significance<T: Significance + ?Sized>(a: &T, b: &T) -> Ordering {
    a.e_value()
        .total_cmp(&b.e_value())
        .then_with(|| b.score().total_cmp(&a.score()))
        .then_with(|| a.percent_identity().total_cmp(&b.percent_identity()))
}

/// Stable sort: equal-key records keep their input order
pub fn sort_by_significance<T: Significance>(records: &mut [T]) {
    records.sort_by(compare_significance);
}
