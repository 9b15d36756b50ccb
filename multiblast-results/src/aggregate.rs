//! Flattening a multi-query report into ranked result rows

use crate::rows::CombinedResultRow;
use indexmap::{IndexMap, IndexSet};
use multiblast_bio::{
    db_to_target_name, gene_hit_title_to_wdk_primary_key, hit_title_to_organism, query_coverage,
    sort_by_significance, OrganismResolver,
};
use multiblast_core::{Hit, MultiQueryReport, Search};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    /// Queries with at least one hit
    pub hit_query_count: usize,
    pub total_query_count: usize,
    /// Distinct subject accessions over all queries
    pub hit_subject_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResult {
    /// All rows, most significant first
    pub rows: Vec<CombinedResultRow>,
    /// Target names searched, deduplicated in first-seen order
    pub databases: Vec<String>,
    pub summary: ResultSummary,
}

fn row_for_hit(hit: &Hit, search: &Search, fallback_organism: Option<&str>) -> Option<CombinedResultRow> {
    let best = hit.best_hsp()?;
    let intervals: Vec<(u64, u64)> = hit.hsps.iter().map(|hsp| hsp.query_interval()).collect();
    let title = hit.title();

    Some(CombinedResultRow {
        accession: hit.accession().to_string(),
        alignment_length: best.align_len,
        e_value: best.evalue,
        identity: best.percent_identity(),
        organism: hit_title_to_organism(title).or_else(|| fallback_organism.map(str::to_string)),
        query_id: search.display_id().to_string(),
        query_coverage: query_coverage(&intervals, search.query_len),
        score: best.bit_score,
        subject_rank: 0,
        query_rank: 0,
        wdk_primary_key: gene_hit_title_to_wdk_primary_key(title).map(str::to_string),
    })
}

/// Rows, searched databases and counts for a completed report.
///
/// `queryRank` is a row's position among its query's hits and `subjectRank`
/// its position among rows of the same accession, both by significance.
/// Hits are attributed to an organism by their defline, or by the search
/// target when the query was run against a single database.
pub fn aggregate(
    report: &MultiQueryReport,
    files_to_organisms: &IndexMap<String, String>,
) -> AggregatedResult {
    let resolver = OrganismResolver::new(files_to_organisms);
    let mut databases: IndexSet<String> = IndexSet::new();
    let mut rows: Vec<CombinedResultRow> = Vec::new();
    let mut hit_query_count = 0;

    for entry in &report.blast_output2 {
        let search_dbs: Vec<&str> = entry.report.search_target.databases().collect();
        for db in &search_dbs {
            databases.insert(db_to_target_name(db).to_string());
        }
        let target_organism = match search_dbs.as_slice() {
            [only] => resolver.resolve(only),
            _ => None,
        };

        let search = &entry.report.results.search;
        let mut query_rows: Vec<CombinedResultRow> = search
            .hits
            .iter()
            .filter_map(|hit| row_for_hit(hit, search, target_organism))
            .collect();
        if !query_rows.is_empty() {
            hit_query_count += 1;
        }

        sort_by_significance(&mut query_rows);
        for (rank, row) in query_rows.iter_mut().enumerate() {
            row.query_rank = rank + 1;
        }
        rows.extend(query_rows);
    }

    sort_by_significance(&mut rows);
    let mut subject_counts: HashMap<String, usize> = HashMap::new();
    for row in rows.iter_mut() {
        let seen = subject_counts.entry(row.accession.clone()).or_insert(0);
        *seen += 1;
        row.subject_rank = *seen;
    }

    tracing::debug!(
        "Aggregated {} rows over {} queries",
        rows.len(),
        report.query_count()
    );

    AggregatedResult {
        rows,
        databases: databases.into_iter().collect(),
        summary: ResultSummary {
            hit_query_count,
            total_query_count: report.query_count(),
            hit_subject_count: subject_counts.len(),
        },
    }
}
