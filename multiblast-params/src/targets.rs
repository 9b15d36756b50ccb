//! Target selection from the organism parameter

use crate::names::OMIT_PARAM_TERM;
use crate::TranslateError;
use indexmap::IndexMap;
use multiblast_core::Target;

/// Decode the organism parameter (a JSON array of organism terms) into the
/// file names the service knows them by. Unmapped organisms are dropped.
pub fn organism_param_value_to_filenames(
    value: &str,
    organisms_to_files: &IndexMap<String, String>,
) -> Result<Vec<String>, TranslateError> {
    let organisms: Vec<String> = serde_json::from_str(value)
        .map_err(|e| TranslateError::InvalidOrganismParam(e.to_string()))?;

    Ok(organisms
        .iter()
        .filter_map(|organism| {
            let file = organisms_to_files.get(organism);
            if file.is_none() {
                tracing::debug!("No target file for organism {}", organism);
            }
            file.cloned()
        })
        .collect())
}

pub fn build_targets<S: AsRef<str>>(filenames: &[S], target_type: &str) -> Vec<Target> {
    filenames
        .iter()
        .map(|filename| Target::new(filename.as_ref(), target_type))
        .collect()
}

/// An enum parameter whose only vocabulary term is `none` does not apply to
/// the selected tool and is hidden from the form
pub fn is_omitted_param<S: AsRef<str>>(vocabulary: &[S]) -> bool {
    matches!(vocabulary, [only] if only.as_ref() == OMIT_PARAM_TERM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn organisms_to_files() -> IndexMap<String, String> {
        [
            ("Plasmodium falciparum 3D7", "Pfalciparum3D7"),
            ("Plasmodium vivax P01", "PvivaxP01"),
        ]
        .into_iter()
        .map(|(o, f)| (o.to_string(), f.to_string()))
        .collect()
    }

    #[test]
    fn test_organisms_to_filenames() {
        let filenames = organism_param_value_to_filenames(
            r#"["Plasmodium vivax P01","Unknown organism","Plasmodium falciparum 3D7"]"#,
            &organisms_to_files(),
        )
        .unwrap();
        assert_eq!(filenames, vec!["PvivaxP01", "Pfalciparum3D7"]);
    }

    #[test]
    fn test_invalid_organism_value() {
        let result = organism_param_value_to_filenames("Plasmodium", &organisms_to_files());
        assert!(matches!(result, Err(TranslateError::InvalidOrganismParam(_))));
    }

    #[test]
    fn test_build_targets_preserves_order() {
        let targets = build_targets(&["PvivaxP01", "Pfalciparum3D7"], "AnnotatedProteins");
        assert_eq!(
            targets,
            vec![
                Target {
                    organism: "PvivaxP01".to_string(),
                    target: "PvivaxP01AnnotatedProteins".to_string(),
                },
                Target {
                    organism: "Pfalciparum3D7".to_string(),
                    target: "Pfalciparum3D7AnnotatedProteins".to_string(),
                },
            ]
        );
        assert!(build_targets::<&str>(&[], "Genome").is_empty());
    }

    #[test]
    fn test_omitted_param() {
        assert!(is_omitted_param(&["none"]));
        assert!(!is_omitted_param(&["none", "BLOSUM62"]));
        assert!(!is_omitted_param(&["BLOSUM62"]));
        assert!(!is_omitted_param::<&str>(&[]));
    }
}
