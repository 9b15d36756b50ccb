//! Revise and rerun: map a stored job back onto the form's raw parameters.
//!
//! This is the inverse of [`param_values_to_blast_config`]; for any
//! configuration the translator produces, translating the result of
//! [`blast_config_to_param_values`] yields the same configuration.
//!
//! [`param_values_to_blast_config`]: crate::param_values_to_blast_config

use crate::names::*;
use crate::translate::comp_based_stats_label;
use crate::ParamValues;
use indexmap::IndexMap;
use multiblast_bio::OrganismResolver;
use multiblast_core::{BlastConfig, JobDetails};

fn join_pair(first: Option<i32>, second: Option<i32>) -> Option<String> {
    if first.is_none() && second.is_none() {
        return None;
    }
    let show = |n: Option<i32>| n.map(|n| n.to_string()).unwrap_or_default();
    Some(format!("{},{}", show(first), show(second)))
}

fn flag(value: bool) -> String {
    if value { "true" } else { "" }.to_string()
}

pub fn blast_config_to_param_values(config: &BlastConfig) -> ParamValues {
    let mut values = ParamValues::new();
    let common = config.common();
    let mut set = |name: &str, value: Option<String>| {
        if let Some(value) = value {
            values.insert(name.to_string(), value);
        }
    };

    set(BLAST_ALGORITHM, Some(config.tool().as_str().to_string()));
    set(BLAST_QUERY_SEQUENCE, common.query.clone());
    set(EXPECTATION_VALUE, common.e_value.clone());
    set(
        NUM_QUERY_RESULTS,
        common
            .num_descriptions
            .or(common.max_target_seqs)
            .map(|n| n.to_string()),
    );
    set(MAX_MATCHES_QUERY_RANGE, common.max_hsps.map(|n| n.to_string()));
    set(WORD_SIZE, common.word_size.map(|n| n.to_string()));
    set(SCORING_MATRIX, config.matrix().map(|m| m.as_str().to_string()));
    set(
        COMP_ADJUST,
        config
            .comp_based_stats()
            .map(|stats| comp_based_stats_label(stats).to_string()),
    );

    let filter = match (config.filters_low_complexity(), config.tool().uses_dust()) {
        (false, _) => NO_FILTER,
        (true, true) => DUST_FILTER,
        (true, false) => SEG_FILTER,
    };
    set(FILTER_LOW_COMPLEX, Some(filter.to_string()));
    set(SOFT_MASK, Some(flag(common.soft_masking)));
    set(LOWER_CASE_MASK, Some(flag(common.lcase_masking)));
    set(GAP_COSTS, join_pair(common.gap_open, common.gap_extend));

    if let BlastConfig::Blastn(blastn) = config {
        set(MATCH_MISMATCH_SCORE, join_pair(blastn.reward, blastn.penalty));
    }

    values
}

/// Raw parameters that resubmit `job` with `query` against the organisms
/// behind `databases`.
///
/// `databases` are target names in display order; organisms are resolved
/// by file-name prefix and deduplicated, unresolvable databases dropped.
pub fn config_to_param_values<S: AsRef<str>>(
    job: &JobDetails,
    query: &str,
    target_type: &str,
    databases: &[S],
    files_to_organisms: &IndexMap<String, String>,
) -> ParamValues {
    let mut values = blast_config_to_param_values(&job.config.with_query(query));

    let resolver = OrganismResolver::new(files_to_organisms);
    let mut organisms: Vec<&str> = Vec::new();
    for db in databases {
        match resolver.resolve(db.as_ref()) {
            Some(organism) if !organisms.contains(&organism) => organisms.push(organism),
            Some(_) => {}
            None => tracing::debug!("No organism for database {}", db.as_ref()),
        }
    }

    values.insert(
        BLAST_DATABASE_ORGANISM.to_string(),
        serde_json::Value::from(organisms).to_string(),
    );
    values.insert(BLAST_DATABASE_TYPE.to_string(), target_type.to_string());
    if let Some(description) = &job.description {
        values.insert(JOB_DESCRIPTION.to_string(), description.clone());
    }

    values
}
