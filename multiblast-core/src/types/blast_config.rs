//! Tool-specific BLAST configuration as exchanged with the service

use super::BlastTool;
use serde::{Deserialize, Deserializer, Serialize};

/// A complete BLAST configuration. Exactly one variant exists per tool and
/// the `tool` field on the wire selects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "lowercase")]
pub enum BlastConfig {
    Blastn(BlastnConfig),
    Blastp(BlastpConfig),
    Blastx(BlastxConfig),
    Tblastn(TblastnConfig),
    Tblastx(TblastxConfig),
}

/// Fields shared by every tool.
///
/// Numeric fields that fail to parse from form input are `None` and are left
/// off the wire; the service validates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(
        rename = "eValue",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub e_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_descriptions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_alignments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_target_seqs: Option<u32>,
    #[serde(rename = "maxHSPs", default, skip_serializing_if = "Option::is_none")]
    pub max_hsps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_size: Option<u32>,
    #[serde(default)]
    pub soft_masking: bool,
    #[serde(default)]
    pub lcase_masking: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_open: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_extend: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlastnConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dust: Option<DustConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlastpConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seg: Option<SegConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<ScoringMatrix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comp_based_stats: Option<CompBasedStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlastxConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_genetic_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seg: Option<SegConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<ScoringMatrix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comp_based_stats: Option<CompBasedStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TblastnConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seg: Option<SegConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<ScoringMatrix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comp_based_stats: Option<CompBasedStats>,
}

/// tblastx has no task and no compositional statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TblastxConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_genetic_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seg: Option<SegConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<ScoringMatrix>,
}

/// DUST low-complexity filter parameters (nucleotide)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DustConfig {
    pub level: u32,
    pub window: u32,
    pub linker: u32,
}

/// SEG low-complexity filter parameters (protein)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegConfig {
    pub window: u32,
    pub locut: f64,
    pub hicut: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoringMatrix {
    Blosum45,
    Blosum50,
    Blosum62,
    Blosum80,
    Blosum90,
    Pam30,
    Pam70,
    Pam250,
    Identity,
}

impl ScoringMatrix {
    pub const ALL: [ScoringMatrix; 9] = [
        ScoringMatrix::Blosum45,
        ScoringMatrix::Blosum50,
        ScoringMatrix::Blosum62,
        ScoringMatrix::Blosum80,
        ScoringMatrix::Blosum90,
        ScoringMatrix::Pam30,
        ScoringMatrix::Pam70,
        ScoringMatrix::Pam250,
        ScoringMatrix::Identity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMatrix::Blosum45 => "BLOSUM45",
            ScoringMatrix::Blosum50 => "BLOSUM50",
            ScoringMatrix::Blosum62 => "BLOSUM62",
            ScoringMatrix::Blosum80 => "BLOSUM80",
            ScoringMatrix::Blosum90 => "BLOSUM90",
            ScoringMatrix::Pam30 => "PAM30",
            ScoringMatrix::Pam70 => "PAM70",
            ScoringMatrix::Pam250 => "PAM250",
            ScoringMatrix::Identity => "IDENTITY",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        ScoringMatrix::ALL.iter().copied().find(|m| m.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompBasedStats {
    None,
    CompBasedStats,
    ConditionalCompBasedScoreAdjustment,
    UnconditionalCompBasedScoreAdjustment,
}

impl BlastConfig {
    pub fn tool(&self) -> BlastTool {
        match self {
            BlastConfig::Blastn(_) => BlastTool::Blastn,
            BlastConfig::Blastp(_) => BlastTool::Blastp,
            BlastConfig::Blastx(_) => BlastTool::Blastx,
            BlastConfig::Tblastn(_) => BlastTool::Tblastn,
            BlastConfig::Tblastx(_) => BlastTool::Tblastx,
        }
    }

    pub fn common(&self) -> &CommonConfig {
        match self {
            BlastConfig::Blastn(c) => &c.common,
            BlastConfig::Blastp(c) => &c.common,
            BlastConfig::Blastx(c) => &c.common,
            BlastConfig::Tblastn(c) => &c.common,
            BlastConfig::Tblastx(c) => &c.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut CommonConfig {
        match self {
            BlastConfig::Blastn(c) => &mut c.common,
            BlastConfig::Blastp(c) => &mut c.common,
            BlastConfig::Blastx(c) => &mut c.common,
            BlastConfig::Tblastn(c) => &mut c.common,
            BlastConfig::Tblastx(c) => &mut c.common,
        }
    }

    pub fn task(&self) -> Option<&str> {
        match self {
            BlastConfig::Blastn(c) => c.task.as_deref(),
            BlastConfig::Blastp(c) => c.task.as_deref(),
            BlastConfig::Blastx(c) => c.task.as_deref(),
            BlastConfig::Tblastn(c) => c.task.as_deref(),
            BlastConfig::Tblastx(_) => None,
        }
    }

    /// Program name for display: the task when one is set, otherwise the tool
    pub fn program(&self) -> &str {
        self.task().unwrap_or_else(|| self.tool().as_str())
    }

    pub fn matrix(&self) -> Option<ScoringMatrix> {
        match self {
            BlastConfig::Blastn(_) => None,
            BlastConfig::Blastp(c) => c.matrix,
            BlastConfig::Blastx(c) => c.matrix,
            BlastConfig::Tblastn(c) => c.matrix,
            BlastConfig::Tblastx(c) => c.matrix,
        }
    }

    pub fn comp_based_stats(&self) -> Option<CompBasedStats> {
        match self {
            BlastConfig::Blastp(c) => c.comp_based_stats,
            BlastConfig::Blastx(c) => c.comp_based_stats,
            BlastConfig::Tblastn(c) => c.comp_based_stats,
            BlastConfig::Blastn(_) | BlastConfig::Tblastx(_) => None,
        }
    }

    /// Whether dust or seg filtering is switched on
    pub fn filters_low_complexity(&self) -> bool {
        match self {
            BlastConfig::Blastn(c) => c.dust.is_some(),
            BlastConfig::Blastp(c) => c.seg.is_some(),
            BlastConfig::Blastx(c) => c.seg.is_some(),
            BlastConfig::Tblastn(c) => c.seg.is_some(),
            BlastConfig::Tblastx(c) => c.seg.is_some(),
        }
    }

    /// A copy with the inline query removed, for query-less storage or upload
    pub fn without_query(&self) -> Self {
        let mut config = self.clone();
        config.common_mut().query = None;
        config
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        let mut config = self.clone();
        config.common_mut().query = Some(query.into());
        config
    }
}

/// The service stores `eValue` as given; accept either JSON strings or numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}
