use multiblast_bio::Significance;
use serde::{Deserialize, Serialize};

/// One (query, hit) pair of a result page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResultRow {
    pub accession: String,
    pub alignment_length: u64,
    pub e_value: f64,
    /// Percent identity of the best HSP
    pub identity: f64,
    pub organism: Option<String>,
    pub query_id: String,
    /// Percentage of the query covered by this hit's HSPs
    pub query_coverage: f64,
    pub score: f64,
    pub subject_rank: usize,
    pub query_rank: usize,
    pub wdk_primary_key: Option<String>,
}

impl Significance for CombinedResultRow {
    fn e_value(&self) -> f64 {
        self.e_value
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn percent_identity(&self) -> f64 {
        self.identity
    }
}
