//! Form parameter values → [`BlastConfig`]

use crate::names::*;
use crate::{ParamValues, TranslateError};
use indexmap::IndexMap;
use multiblast_core::{
    BlastConfig, BlastTool, BlastnConfig, BlastpConfig, BlastxConfig, CommonConfig,
    CompBasedStats, DustConfig, ScoringMatrix, SegConfig, TblastnConfig, TblastxConfig,
};

/// Fixed DUST parameters applied whenever blastn filtering is on
pub const DUST_CONFIG: DustConfig = DustConfig {
    level: 20,
    window: 64,
    linker: 1,
};

/// Fixed SEG parameters applied whenever protein-space filtering is on
pub const SEG_CONFIG: SegConfig = SegConfig {
    window: 12,
    locut: 2.2,
    hicut: 2.5,
};

const QUERY_GENETIC_CODE: u32 = 1;

pub fn strip_default_suffix(value: &str) -> &str {
    value.strip_suffix(DEFAULT_SUFFIX).unwrap_or(value)
}

/// Map a `CompAdjust` label to its wire token.
///
/// Anything unrecognised, including a missing value, selects the
/// unconditional adjustment.
pub fn comp_based_stats_from_label(label: Option<&str>) -> CompBasedStats {
    match label {
        Some(COMP_ADJUST_CONDITIONAL) => CompBasedStats::ConditionalCompBasedScoreAdjustment,
        Some(COMP_ADJUST_NONE) => CompBasedStats::None,
        Some(COMP_ADJUST_COMP_BASED_STATS) => CompBasedStats::CompBasedStats,
        _ => CompBasedStats::UnconditionalCompBasedScoreAdjustment,
    }
}

pub fn comp_based_stats_label(stats: CompBasedStats) -> &'static str {
    match stats {
        CompBasedStats::None => COMP_ADJUST_NONE,
        CompBasedStats::CompBasedStats => COMP_ADJUST_COMP_BASED_STATS,
        CompBasedStats::ConditionalCompBasedScoreAdjustment => COMP_ADJUST_CONDITIONAL,
        CompBasedStats::UnconditionalCompBasedScoreAdjustment => COMP_ADJUST_UNCONDITIONAL,
    }
}

fn parse_number<T: std::str::FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Split `"a,b"` into two numbers; either side is `None` when absent or
/// unparseable
fn parse_pair(value: Option<&str>) -> (Option<i32>, Option<i32>) {
    let mut parts = value.unwrap_or_default().split(',');
    let first = parse_number(parts.next());
    let second = parse_number(parts.next());
    (first, second)
}

fn parse_flag(value: Option<&str>) -> bool {
    value.map_or(false, |v| !v.is_empty())
}

/// Translate raw form values into the configuration for the selected tool.
///
/// Only the tool is checked: numeric fields that do not parse are left
/// unset for the service to validate.
pub fn param_values_to_blast_config(raw: &ParamValues) -> Result<BlastConfig, TranslateError> {
    let values: IndexMap<&str, &str> = raw
        .iter()
        .map(|(name, value)| (name.as_str(), strip_default_suffix(value)))
        .collect();
    let get = |name: &str| values.get(name).copied();

    let tool_name = get(BLAST_ALGORITHM).unwrap_or_default();
    let tool: BlastTool = tool_name.parse().map_err(TranslateError::UnsupportedTool)?;

    let num_query_results = parse_number(get(NUM_QUERY_RESULTS));
    let (gap_open, gap_extend) = parse_pair(get(GAP_COSTS));

    let common = CommonConfig {
        query: get(BLAST_QUERY_SEQUENCE).map(str::to_string),
        e_value: get(EXPECTATION_VALUE).map(str::to_string),
        num_descriptions: num_query_results,
        num_alignments: num_query_results,
        max_target_seqs: num_query_results,
        max_hsps: parse_number(get(MAX_MATCHES_QUERY_RANGE)),
        word_size: parse_number(get(WORD_SIZE)),
        soft_masking: parse_flag(get(SOFT_MASK)),
        lcase_masking: parse_flag(get(LOWER_CASE_MASK)),
        gap_open,
        gap_extend,
    };

    let comp_based_stats = Some(comp_based_stats_from_label(get(COMP_ADJUST)));
    let filter_low_complexity = get(FILTER_LOW_COMPLEX) != Some(NO_FILTER);
    let dust = filter_low_complexity.then_some(DUST_CONFIG);
    let seg = filter_low_complexity.then_some(SEG_CONFIG);
    let matrix = get(SCORING_MATRIX).and_then(|label| {
        let matrix = ScoringMatrix::parse(label);
        if matrix.is_none() {
            tracing::warn!("Unknown scoring matrix '{}', using the service default", label);
        }
        matrix
    });
    let task = Some(tool.as_str().to_string());

    let config = match tool {
        BlastTool::Blastn => {
            let (reward, penalty) = parse_pair(get(MATCH_MISMATCH_SCORE));
            BlastConfig::Blastn(BlastnConfig {
                common,
                task,
                dust,
                reward,
                penalty,
            })
        }
        BlastTool::Blastp => BlastConfig::Blastp(BlastpConfig {
            common,
            task,
            seg,
            matrix,
            comp_based_stats,
        }),
        BlastTool::Blastx => BlastConfig::Blastx(BlastxConfig {
            common,
            task,
            query_genetic_code: Some(QUERY_GENETIC_CODE),
            seg,
            matrix,
            comp_based_stats,
        }),
        BlastTool::Tblastn => BlastConfig::Tblastn(TblastnConfig {
            common,
            task,
            seg,
            matrix,
            comp_based_stats,
        }),
        BlastTool::Tblastx => BlastConfig::Tblastx(TblastxConfig {
            common,
            query_genetic_code: Some(QUERY_GENETIC_CODE),
            seg,
            matrix,
        }),
    };

    tracing::debug!("Translated form values into {} config", tool);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(pairs: &[(&str, &str)]) -> ParamValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn blastn_values() -> ParamValues {
        values(&[
            (BLAST_ALGORITHM, "blastn"),
            (BLAST_QUERY_SEQUENCE, ">q1\nACGTACGTACGT"),
            (EXPECTATION_VALUE, "10 (default)"),
            (NUM_QUERY_RESULTS, "50 (default)"),
            (MAX_MATCHES_QUERY_RANGE, "0"),
            (WORD_SIZE, "11 (default)"),
            (FILTER_LOW_COMPLEX, "dust"),
            (SOFT_MASK, "true"),
            (LOWER_CASE_MASK, ""),
            (GAP_COSTS, "11,1"),
            (MATCH_MISMATCH_SCORE, "1,-3"),
        ])
    }

    #[test]
    fn test_strip_default_suffix() {
        assert_eq!(strip_default_suffix("BLOSUM62 (default)"), "BLOSUM62");
        assert_eq!(strip_default_suffix("BLOSUM62"), "BLOSUM62");
        assert_eq!(strip_default_suffix("(default) BLOSUM62"), "(default) BLOSUM62");
    }

    #[test]
    fn test_blastn_translation() {
        let config = param_values_to_blast_config(&blastn_values()).unwrap();
        let BlastConfig::Blastn(blastn) = config else {
            panic!("expected blastn config");
        };

        assert_eq!(blastn.task.as_deref(), Some("blastn"));
        assert_eq!(blastn.common.e_value.as_deref(), Some("10"));
        assert_eq!(blastn.common.num_descriptions, Some(50));
        assert_eq!(blastn.common.num_alignments, Some(50));
        assert_eq!(blastn.common.max_target_seqs, Some(50));
        assert_eq!(blastn.common.max_hsps, Some(0));
        assert_eq!(blastn.common.word_size, Some(11));
        assert!(blastn.common.soft_masking);
        assert!(!blastn.common.lcase_masking);
        assert_eq!(blastn.common.gap_open, Some(11));
        assert_eq!(blastn.common.gap_extend, Some(1));
        assert_eq!(blastn.reward, Some(1));
        assert_eq!(blastn.penalty, Some(-3));
        assert_eq!(blastn.dust, Some(DUST_CONFIG));
    }

    #[test]
    fn test_no_filter_disables_dust_and_seg() {
        let mut raw = blastn_values();
        raw.insert(FILTER_LOW_COMPLEX.to_string(), "no filter".to_string());
        let config = param_values_to_blast_config(&raw).unwrap();
        assert!(!config.filters_low_complexity());
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("dust").is_none());

        raw.insert(BLAST_ALGORITHM.to_string(), "tblastn".to_string());
        let json = serde_json::to_value(param_values_to_blast_config(&raw).unwrap()).unwrap();
        assert!(json.get("seg").is_none());
    }

    #[test]
    fn test_protein_filter_uses_seg_constants() {
        let mut raw = blastn_values();
        raw.insert(BLAST_ALGORITHM.to_string(), "blastp".to_string());
        raw.insert(FILTER_LOW_COMPLEX.to_string(), "seg".to_string());
        let BlastConfig::Blastp(blastp) = param_values_to_blast_config(&raw).unwrap() else {
            panic!("expected blastp config");
        };
        assert_eq!(blastp.seg, Some(SegConfig { window: 12, locut: 2.2, hicut: 2.5 }));
    }

    #[test]
    fn test_comp_adjust_labels() {
        assert_eq!(
            comp_based_stats_from_label(Some("No adjustment")),
            CompBasedStats::None
        );
        assert_eq!(
            comp_based_stats_from_label(Some("Composition-based statistics")),
            CompBasedStats::CompBasedStats
        );
        assert_eq!(
            comp_based_stats_from_label(Some("Conditional compositional score matrix adjustment")),
            CompBasedStats::ConditionalCompBasedScoreAdjustment
        );
        assert_eq!(
            comp_based_stats_from_label(Some("Universal compositional score matrix adjustment")),
            CompBasedStats::UnconditionalCompBasedScoreAdjustment
        );
        assert_eq!(
            comp_based_stats_from_label(Some("something else entirely")),
            CompBasedStats::UnconditionalCompBasedScoreAdjustment
        );
        assert_eq!(
            comp_based_stats_from_label(None),
            CompBasedStats::UnconditionalCompBasedScoreAdjustment
        );
    }

    #[test]
    fn test_missing_pairs_are_unset() {
        let raw = values(&[(BLAST_ALGORITHM, "blastn")]);
        let BlastConfig::Blastn(blastn) = param_values_to_blast_config(&raw).unwrap() else {
            panic!("expected blastn config");
        };
        assert_eq!(blastn.common.gap_open, None);
        assert_eq!(blastn.common.gap_extend, None);
        assert_eq!(blastn.reward, None);
        assert_eq!(blastn.penalty, None);
        // filtering defaults to on when the parameter is absent
        assert_eq!(blastn.dust, Some(DUST_CONFIG));
    }

    #[test]
    fn test_unparseable_numbers_are_unset() {
        let mut raw = blastn_values();
        raw.insert(WORD_SIZE.to_string(), "eleven".to_string());
        raw.insert(GAP_COSTS.to_string(), "11".to_string());
        let config = param_values_to_blast_config(&raw).unwrap();
        assert_eq!(config.common().word_size, None);
        assert_eq!(config.common().gap_open, Some(11));
        assert_eq!(config.common().gap_extend, None);
    }

    #[test]
    fn test_unknown_matrix_is_unset() {
        let raw = values(&[
            (BLAST_ALGORITHM, "blastp"),
            (BLAST_QUERY_SEQUENCE, ">p1\nMKVLAAGIV"),
            (SCORING_MATRIX, "blosum62"),
        ]);
        let config = param_values_to_blast_config(&raw).unwrap();
        assert_eq!(config.matrix(), None);

        let raw = values(&[
            (BLAST_ALGORITHM, "blastp"),
            (SCORING_MATRIX, "PAM70 (default)"),
        ]);
        let config = param_values_to_blast_config(&raw).unwrap();
        assert_eq!(config.matrix(), Some(ScoringMatrix::Pam70));
    }

    #[test]
    fn test_unsupported_tool() {
        let raw = values(&[(BLAST_ALGORITHM, "psiblast")]);
        assert_eq!(
            param_values_to_blast_config(&raw),
            Err(TranslateError::UnsupportedTool("psiblast".to_string()))
        );

        let missing = values(&[(WORD_SIZE, "3")]);
        assert_eq!(
            param_values_to_blast_config(&missing),
            Err(TranslateError::UnsupportedTool(String::new()))
        );
    }

    #[test]
    fn test_tool_specific_fields() {
        let mut raw = blastn_values();
        raw.insert(SCORING_MATRIX.to_string(), "BLOSUM62 (default)".to_string());
        raw.insert(COMP_ADJUST.to_string(), "No adjustment".to_string());

        for tool in BlastTool::ALL {
            raw.insert(BLAST_ALGORITHM.to_string(), tool.as_str().to_string());
            let config = param_values_to_blast_config(&raw).unwrap();
            let json = serde_json::to_value(&config).unwrap();

            assert_eq!(config.tool(), tool);
            assert_eq!(json["tool"], tool.as_str());
            match tool {
                BlastTool::Blastn => {
                    assert_eq!(json["task"], "blastn");
                    assert!(json.get("matrix").is_none());
                    assert!(json.get("compBasedStats").is_none());
                    assert!(json.get("queryGeneticCode").is_none());
                    assert_eq!(json["reward"], 1);
                }
                BlastTool::Tblastx => {
                    assert!(json.get("task").is_none());
                    assert!(json.get("compBasedStats").is_none());
                    assert!(json.get("reward").is_none());
                    assert_eq!(json["queryGeneticCode"], 1);
                    assert_eq!(json["matrix"], "BLOSUM62");
                }
                _ => {
                    assert_eq!(json["task"], tool.as_str());
                    assert_eq!(json["matrix"], "BLOSUM62");
                    assert_eq!(json["compBasedStats"], "none");
                    assert!(json.get("dust").is_none());
                    assert!(json.get("reward").is_none());
                    assert_eq!(
                        json.get("queryGeneticCode").is_some(),
                        tool == BlastTool::Blastx
                    );
                }
            }
        }
    }
}
