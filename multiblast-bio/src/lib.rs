//! Pure helpers over BLAST output: interval merging, significance ordering,
//! defline extraction and organism resolution

pub mod defline;
pub mod intervals;
pub mod organism;
pub mod sequence;
pub mod significance;

pub use defline::{
    db_to_target_name, gene_hit_title_to_wdk_primary_key, hit_title_to_organism,
    hit_title_to_source_id,
};
pub use intervals::{covered_length, merge_intervals, query_coverage};
pub use organism::{OrganismMaps, OrganismResolver, WdkRecordType};
pub use sequence::{individual_query_sequence, split_individual_queries};
pub use significance::{compare_significance, sort_by_significance, Significance};
