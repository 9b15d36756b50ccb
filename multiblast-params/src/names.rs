//! Names of the BLAST form parameters and the fixed vocabulary terms the
//! translator understands

pub const BLAST_DATABASE_ORGANISM: &str = "BlastDatabaseOrganism";
pub const BLAST_DATABASE_TYPE: &str = "BlastDatabaseType";
pub const BLAST_QUERY_SEQUENCE: &str = "BlastQuerySequence";
pub const BLAST_ALGORITHM: &str = "BlastAlgorithm";
pub const JOB_DESCRIPTION: &str = "JobDescription";

// General config for all BLAST applications
pub const EXPECTATION_VALUE: &str = "ExpectationValue";
pub const NUM_QUERY_RESULTS: &str = "NumQueryResults";
pub const MAX_MATCHES_QUERY_RANGE: &str = "MaxMatchesQueryRange";

// General config specific to each BLAST application
pub const WORD_SIZE: &str = "WordSize";
pub const SCORING_MATRIX: &str = "ScoringMatrix";
pub const COMP_ADJUST: &str = "CompAdjust";

// Filter and masking config
pub const FILTER_LOW_COMPLEX: &str = "FilterLowComplex";
pub const SOFT_MASK: &str = "SoftMask";
pub const LOWER_CASE_MASK: &str = "LowerCaseMask";

// Scoring config
pub const GAP_COSTS: &str = "GapCosts";
pub const MATCH_MISMATCH_SCORE: &str = "MatchMismatchScore";

/// Suffix the form appends to a value it pre-selected as the default
pub const DEFAULT_SUFFIX: &str = " (default)";

pub const NO_FILTER: &str = "no filter";
pub const DUST_FILTER: &str = "dust";
pub const SEG_FILTER: &str = "seg";

/// Vocabulary term marking a parameter as not applicable to the chosen tool
pub const OMIT_PARAM_TERM: &str = "none";

pub const COMP_ADJUST_NONE: &str = "No adjustment";
pub const COMP_ADJUST_COMP_BASED_STATS: &str = "Composition-based statistics";
pub const COMP_ADJUST_CONDITIONAL: &str = "Conditional compositional score matrix adjustment";
pub const COMP_ADJUST_UNCONDITIONAL: &str = "Universal compositional score matrix adjustment";
