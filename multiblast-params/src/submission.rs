//! Assembly of a complete job submission from form values

use crate::names::{BLAST_DATABASE_ORGANISM, BLAST_DATABASE_TYPE, JOB_DESCRIPTION};
use crate::targets::{build_targets, organism_param_value_to_filenames};
use crate::translate::{param_values_to_blast_config, strip_default_suffix};
use crate::{ParamValues, TranslateError};
use indexmap::IndexMap;
use multiblast_core::CreateJobRequest;

pub fn submission_from_param_values(
    values: &ParamValues,
    organisms_to_files: &IndexMap<String, String>,
    site: &str,
    max_result_size: u64,
) -> Result<CreateJobRequest, TranslateError> {
    let required = |name: &str| {
        values
            .get(name)
            .map(|value| strip_default_suffix(value))
            .ok_or_else(|| TranslateError::MissingParam(name.to_string()))
    };

    let config = param_values_to_blast_config(values)?;
    let filenames =
        organism_param_value_to_filenames(required(BLAST_DATABASE_ORGANISM)?, organisms_to_files)?;
    let targets = build_targets(&filenames, required(BLAST_DATABASE_TYPE)?);
    let description = values
        .get(JOB_DESCRIPTION)
        .filter(|description| !description.trim().is_empty())
        .cloned();

    tracing::info!(
        "Prepared {} submission against {} target(s)",
        config.tool(),
        targets.len()
    );

    Ok(CreateJobRequest {
        site: site.to_string(),
        targets,
        config,
        max_result_size,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::*;
    use pretty_assertions::assert_eq;

    fn values() -> ParamValues {
        [
            (BLAST_ALGORITHM, "tblastn"),
            (BLAST_QUERY_SEQUENCE, "MKVLAAGIV"),
            (BLAST_DATABASE_ORGANISM, r#"["Plasmodium falciparum 3D7"]"#),
            (BLAST_DATABASE_TYPE, "AnnotatedTranscripts (default)"),
            (JOB_DESCRIPTION, "  "),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn organisms_to_files() -> IndexMap<String, String> {
        IndexMap::from([(
            "Plasmodium falciparum 3D7".to_string(),
            "Pfalciparum3D7".to_string(),
        )])
    }

    #[test]
    fn test_submission() {
        let request =
            submission_from_param_values(&values(), &organisms_to_files(), "PlasmoDB", 0).unwrap();

        assert_eq!(request.site, "PlasmoDB");
        assert_eq!(request.targets.len(), 1);
        assert_eq!(request.targets[0].target, "Pfalciparum3D7AnnotatedTranscripts");
        assert_eq!(request.config.tool().as_str(), "tblastn");
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_missing_target_type() {
        let mut values = values();
        values.shift_remove(BLAST_DATABASE_TYPE);
        assert_eq!(
            submission_from_param_values(&values, &organisms_to_files(), "PlasmoDB", 0),
            Err(TranslateError::MissingParam(BLAST_DATABASE_TYPE.to_string()))
        );
    }
}
