//! Translation between loosely-typed form parameter values and
//! tool-specific BLAST configurations, in both directions

pub mod names;
pub mod rerun;
pub mod submission;
pub mod targets;
pub mod translate;

use indexmap::IndexMap;
use multiblast_core::MultiBlastError;
use thiserror::Error;

pub use rerun::{blast_config_to_param_values, config_to_param_values};
pub use submission::submission_from_param_values;
pub use targets::{build_targets, is_omitted_param, organism_param_value_to_filenames};
pub use translate::{
    comp_based_stats_from_label, comp_based_stats_label, param_values_to_blast_config,
    strip_default_suffix, DUST_CONFIG, SEG_CONFIG,
};

/// Raw form values keyed by parameter name, in form order
pub type ParamValues = IndexMap<String, String>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("The BLAST tool '{0}' is not supported")]
    UnsupportedTool(String),

    #[error("Invalid organism parameter value: {0}")]
    InvalidOrganismParam(String),

    #[error("Missing parameter: {0}")]
    MissingParam(String),
}

impl From<TranslateError> for MultiBlastError {
    fn from(err: TranslateError) -> Self {
        MultiBlastError::InvalidInput(err.to_string())
    }
}
