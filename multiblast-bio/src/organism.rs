//! Resolution of BLAST database names to organisms and WDK record types

use crate::defline::db_to_target_name;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Organism ↔ file-name maps published by the WDK site.
///
/// Order is significant: lookups are first-match-wins in the order the
/// site lists the files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganismMaps {
    pub files_to_organisms: IndexMap<String, String>,
    pub organisms_to_files: IndexMap<String, String>,
}

impl OrganismMaps {
    /// Build both directions from `(file, organism)` pairs
    pub fn from_pairs<I, F, O>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, O)>,
        F: Into<String>,
        O: Into<String>,
    {
        let mut maps = OrganismMaps::default();
        for (file, organism) in pairs {
            let (file, organism) = (file.into(), organism.into());
            maps.organisms_to_files
                .entry(organism.clone())
                .or_insert_with(|| file.clone());
            maps.files_to_organisms.insert(file, organism);
        }
        maps
    }

    pub fn resolver(&self) -> OrganismResolver<'_> {
        OrganismResolver::new(&self.files_to_organisms)
    }
}

/// Maps database identifiers to organism display names by file-name prefix
#[derive(Debug, Clone)]
pub struct OrganismResolver<'a> {
    files_to_organisms: &'a IndexMap<String, String>,
}

impl<'a> OrganismResolver<'a> {
    pub fn new(files_to_organisms: &'a IndexMap<String, String>) -> Self {
        Self { files_to_organisms }
    }

    /// The first mapped file name that prefixes the target name wins.
    /// `None` means the organism is unknown, not that anything failed.
    pub fn resolve(&self, db: &str) -> Option<&'a str> {
        let target_name = db_to_target_name(db);
        self.files_to_organisms
            .iter()
            .find(|(filename, _)| target_name.starts_with(filename.as_str()))
            .map(|(_, organism)| organism.as_str())
    }
}

/// WDK record class a BLAST target type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WdkRecordType {
    #[serde(rename = "gene")]
    Gene,
    #[serde(rename = "genomic-sequence")]
    GenomicSequence,
    #[serde(rename = "est")]
    Est,
    #[serde(rename = "popsetSequence")]
    PopsetSequence,
}

impl WdkRecordType {
    /// Classify by the target-type suffix of a database name
    pub fn from_db_name(blast_db_name: &str) -> Option<Self> {
        if blast_db_name.ends_with("AnnotatedTranscripts")
            || blast_db_name.ends_with("AnnotatedProteins")
        {
            Some(WdkRecordType::Gene)
        } else if blast_db_name.ends_with("Genome") {
            Some(WdkRecordType::GenomicSequence)
        } else if blast_db_name.ends_with("ESTs") {
            Some(WdkRecordType::Est)
        } else if blast_db_name.ends_with("PopSet") {
            Some(WdkRecordType::PopsetSequence)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WdkRecordType::Gene => "gene",
            WdkRecordType::GenomicSequence => "genomic-sequence",
            WdkRecordType::Est => "est",
            WdkRecordType::PopsetSequence => "popsetSequence",
        }
    }
}

impl fmt::Display for WdkRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
