//! NCBI BLAST JSON output (`BlastOutput2`) as served by the single-file
//! JSON report. Only the fields consumed downstream are modelled; anything
//! else in the document is ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiQueryReport {
    #[serde(rename = "BlastOutput2")]
    pub blast_output2: Vec<BlastOutput2>,
}

/// One entry per input query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlastOutput2 {
    pub report: QueryReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryReport {
    #[serde(default)]
    pub program: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub search_target: SearchTarget,
    pub results: SearchResults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTarget {
    /// One or more database paths separated by single spaces
    pub db: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub search: Search,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Search {
    pub query_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_title: Option<String>,
    pub query_len: u64,
    #[serde(default)]
    pub hits: Vec<Hit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub num: u32,
    pub description: Vec<HitDescription>,
    pub len: u64,
    #[serde(default)]
    pub hsps: Vec<Hsp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitDescription {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accession: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sciname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsp {
    pub num: u32,
    pub bit_score: f64,
    pub score: f64,
    pub evalue: f64,
    pub identity: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive: Option<u64>,
    pub query_from: u64,
    pub query_to: u64,
    pub hit_from: u64,
    pub hit_to: u64,
    pub align_len: u64,
    #[serde(default)]
    pub gaps: u64,
}

impl MultiQueryReport {
    pub fn query_count(&self) -> usize {
        self.blast_output2.len()
    }

    pub fn searches(&self) -> impl Iterator<Item = &Search> {
        self.blast_output2.iter().map(|entry| &entry.report.results.search)
    }
}

impl SearchTarget {
    pub fn databases(&self) -> impl Iterator<Item = &str> {
        self.db.split(' ').filter(|db| !db.is_empty())
    }
}

impl Search {
    /// First word of the query defline, or the service-assigned id
    pub fn display_id(&self) -> &str {
        self.query_title
            .as_deref()
            .and_then(|title| title.split_whitespace().next())
            .unwrap_or(&self.query_id)
    }
}

impl Hit {
    pub fn primary_description(&self) -> Option<&HitDescription> {
        self.description.first()
    }

    /// HSPs are reported best-first
    pub fn best_hsp(&self) -> Option<&Hsp> {
        self.hsps.first()
    }

    pub fn accession(&self) -> &str {
        self.primary_description()
            .map(|d| d.accession.as_deref().unwrap_or(&d.id))
            .unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.primary_description()
            .map(|d| d.title.as_str())
            .unwrap_or_default()
    }
}

impl Hsp {
    /// Percent identity over the alignment length
    pub fn percent_identity(&self) -> f64 {
        if self.align_len == 0 {
            return 0.0;
        }
        self.identity as f64 / self.align_len as f64 * 100.0
    }

    /// Aligned query span, normalised so that start <= end
    pub fn query_interval(&self) -> (u64, u64) {
        (self.query_from.min(self.query_to), self.query_from.max(self.query_to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_minimal_report() {
        let report: MultiQueryReport = serde_json::from_value(json!({
            "BlastOutput2": [{
                "report": {
                    "program": "blastn",
                    "search_target": {"db": "data/Pf3D7Genome data/PvP01Genome"},
                    "results": {"search": {
                        "query_id": "Query_1",
                        "query_title": "seq1 some description",
                        "query_len": 120,
                        "hits": [{
                            "num": 1,
                            "description": [{"id": "gnl|x|1", "accession": "PF3D7_01", "title": "PF3D7_01 | gene=PF3D7_0100100 | len"}],
                            "len": 500,
                            "hsps": [{
                                "num": 1, "bit_score": 200.5, "score": 108.0, "evalue": 1e-50,
                                "identity": 95, "query_from": 1, "query_to": 100,
                                "hit_from": 300, "hit_to": 201, "align_len": 100, "gaps": 0
                            }]
                        }]
                    }}
                }
            }]
        }))
        .unwrap();

        assert_eq!(report.query_count(), 1);
        let entry = &report.blast_output2[0].report;
        let dbs: Vec<&str> = entry.search_target.databases().collect();
        assert_eq!(dbs, vec!["data/Pf3D7Genome", "data/PvP01Genome"]);

        let search = &entry.results.search;
        assert_eq!(search.display_id(), "seq1");
        let hit = &search.hits[0];
        assert_eq!(hit.accession(), "PF3D7_01");
        let hsp = hit.best_hsp().unwrap();
        assert_eq!(hsp.percent_identity(), 95.0);
        assert_eq!(hsp.query_interval(), (1, 100));
    }

    #[test]
    fn test_accession_falls_back_to_id() {
        let hit = Hit {
            num: 1,
            description: vec![HitDescription {
                id: "seq42".to_string(),
                accession: None,
                title: String::new(),
                taxid: None,
                sciname: None,
            }],
            len: 10,
            hsps: vec![],
        };
        assert_eq!(hit.accession(), "seq42");
        assert!(hit.best_hsp().is_none());
    }
}
