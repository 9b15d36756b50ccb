//! Merging of overlapping closed ranges

/// Merge overlapping or touching-at-an-endpoint intervals.
///
/// Intervals are `(start, end)` pairs with `start <= end`. The output is
/// sorted by start and pairwise disjoint; nested intervals are absorbed.
pub fn merge_intervals<T>(intervals: &[(T, T)]) -> Vec<(T, T)>
where
    T: Ord + Copy,
{
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|&(start, _)| start);

    let mut merged: Vec<(T, T)> = Vec::with_capacity(sorted.len());
    for (start, end) in sorted {
        match merged.last_mut() {
            Some(last) if start <= last.1 => {
                last.1 = last.1.max(end);
            }
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Number of positions covered by closed intervals (both ends inclusive)
pub fn covered_length(intervals: &[(u64, u64)]) -> u64 {
    merge_intervals(intervals)
        .iter()
        .map(|&(start, end)| end - start + 1)
        .sum()
}

/// Percentage of a query of `query_len` positions spanned by the intervals
pub fn query_coverage(intervals: &[(u64, u64)], query_len: u64) -> f64 {
    if query_len == 0 {
        return 0.0;
    }
    let covered = covered_length(intervals).min(query_len);
    covered as f64 / query_len as f64 * 100.0
}
