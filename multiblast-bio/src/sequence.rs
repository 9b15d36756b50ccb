//! Splitting a multi-sequence query into its individual sequences

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A single defline-free sequence, or one deflined sequence per match
    static ref INDIVIDUAL_SEQUENCE_REGEX: Regex =
        Regex::new(r"^[^>\s]+$|>.+(\n[^>\s]+)+").unwrap();
}

pub fn split_individual_queries(multi_query: &str) -> Vec<&str> {
    INDIVIDUAL_SEQUENCE_REGEX
        .find_iter(multi_query.trim())
        .map(|m| m.as_str())
        .collect()
}

/// The `result_index`-th (1-based) sequence of a query, falling back to the
/// whole query when there is no such sequence
pub fn individual_query_sequence(multi_query: &str, result_index: usize) -> &str {
    result_index
        .checked_sub(1)
        .and_then(|i| split_individual_queries(multi_query).get(i).copied())
        .unwrap_or_else(|| {
            tracing::debug!("No sequence {} in query, using the whole query", result_index);
            multi_query
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MULTI: &str = ">seq1 first\nACGTACGT\nGGCC\n>seq2\nTTTT\n";

    #[test]
    fn test_split_deflined() {
        assert_eq!(
            split_individual_queries(MULTI),
            vec![">seq1 first\nACGTACGT\nGGCC", ">seq2\nTTTT"]
        );
    }

    #[test]
    fn test_bare_sequence() {
        assert_eq!(split_individual_queries("  ACGTACGT\n"), vec!["ACGTACGT"]);
    }

    #[test]
    fn test_individual_lookup() {
        assert_eq!(individual_query_sequence(MULTI, 2), ">seq2\nTTTT");
        assert_eq!(individual_query_sequence(MULTI, 3), MULTI);
        assert_eq!(individual_query_sequence(MULTI, 0), MULTI);
    }
}
