//! Token extraction from sequence deflines and hit titles.
//!
//! Database-generated deflines look like
//! `PF3D7_0100100-t26_1 | transcript=PF3D7_0100100.1 | gene=PF3D7_0100100 | organism=Plasmodium_falciparum_3D7 | ...`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref GENE_REGEX: Regex = Regex::new(r"\|\s*gene=([^|\s]+) ").unwrap();
    static ref ORGANISM_REGEX: Regex = Regex::new(r"\|\s*organism=([^|\s]+) ").unwrap();
    static ref SOURCE_ID_REGEX: Regex = Regex::new(r"^\s*([^|\s]+)").unwrap();
    static ref TARGET_NAME_REGEX: Regex = Regex::new(r"[\s\S]*/").unwrap();
}

/// First capture group of `regex` in `text`
fn retrieve_from_hit_title<'a>(regex: &Regex, text: &'a str) -> Option<&'a str> {
    regex
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Gene id used as the WDK primary key of gene hits
pub fn gene_hit_title_to_wdk_primary_key(hit_title: &str) -> Option<&str> {
    retrieve_from_hit_title(&GENE_REGEX, hit_title)
}

/// Organism token of a defline, with underscores restored to spaces
pub fn hit_title_to_organism(hit_title: &str) -> Option<String> {
    retrieve_from_hit_title(&ORGANISM_REGEX, hit_title).map(|token| token.replace('_', " "))
}

/// Leading identifier of a defline
pub fn hit_title_to_source_id(hit_title: &str) -> Option<&str> {
    retrieve_from_hit_title(&SOURCE_ID_REGEX, hit_title)
}

/// Strip everything up to and including the last `/` of a database path
pub fn db_to_target_name(db: &str) -> &str {
    match TARGET_NAME_REGEX.find(db) {
        Some(prefix) if prefix.start() == 0 => &db[prefix.end()..],
        _ => db,
    }
}
