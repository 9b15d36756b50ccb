//! The BLAST programs offered by the service

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum BlastTool {
    Blastn,
    Blastp,
    Blastx,
    Tblastn,
    Tblastx,
}

impl BlastTool {
    pub const ALL: [BlastTool; 5] = [
        BlastTool::Blastn,
        BlastTool::Blastp,
        BlastTool::Blastx,
        BlastTool::Tblastn,
        BlastTool::Tblastx,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlastTool::Blastn => "blastn",
            BlastTool::Blastp => "blastp",
            BlastTool::Blastx => "blastx",
            BlastTool::Tblastn => "tblastn",
            BlastTool::Tblastx => "tblastx",
        }
    }

    /// Low-complexity filtering is dust for nucleotide queries against
    /// nucleotide targets and seg everywhere else
    pub fn uses_dust(&self) -> bool {
        matches!(self, BlastTool::Blastn)
    }

    /// Programs that translate the query carry a genetic code
    pub fn translates_query(&self) -> bool {
        matches!(self, BlastTool::Blastx | BlastTool::Tblastx)
    }
}

impl fmt::Display for BlastTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlastTool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlastTool::ALL
            .iter()
            .copied()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
