pub mod jobs;
pub mod report;
pub mod rerun;
pub mod results;
pub mod status;
pub mod submit;

use indexmap::IndexMap;
use multiblast_bio::OrganismMaps;
use multiblast_client::BlastApi;
use multiblast_core::{load_config, load_or_default, ClientConfig, MultiBlastError, MultiBlastResult};
use std::path::Path;
use std::time::Duration;

/// Loaded configuration and the API client built from it
pub struct Session {
    pub config: ClientConfig,
    pub api: BlastApi,
}

impl Session {
    pub fn open(config_file: Option<&Path>) -> MultiBlastResult<Self> {
        let config = match config_file {
            Some(path) => {
                let mut config = load_config(path)?;
                config.apply_env_overrides()?;
                config
            }
            None => load_or_default()?,
        };
        let api = BlastApi::from_config(&config)?;
        Ok(Self { config, api })
    }

    pub fn poll_interval(&self) -> Duration {
        self.config.polling.interval()
    }
}

/// Read organism maps from a JSON object of file name → organism name.
///
/// Entry order is kept; the first file listed for an organism is the one
/// submissions target.
pub fn read_organism_maps(path: &Path) -> MultiBlastResult<OrganismMaps> {
    let contents = std::fs::read_to_string(path)?;
    let files: IndexMap<String, String> = serde_json::from_str(&contents).map_err(|e| {
        MultiBlastError::Parse(format!("{}: expected file → organism map: {}", path.display(), e))
    })?;
    Ok(OrganismMaps::from_pairs(files))
}

/// Split a `NAME=VALUE` assignment; the value may itself contain `=`
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("GapCosts=11,1").unwrap(),
            ("GapCosts".to_string(), "11,1".to_string())
        );
        assert_eq!(
            parse_assignment("LowerCaseMask=").unwrap(),
            ("LowerCaseMask".to_string(), String::new())
        );
        assert_eq!(
            parse_assignment("JobDescription=a=b").unwrap().1,
            "a=b".to_string()
        );
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=x").is_err());
    }

    #[test]
    fn test_read_organism_maps() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Pfalciparum3D7": "Plasmodium falciparum 3D7", "PvivaxP01": "Plasmodium vivax P01"}}"#
        )
        .unwrap();

        let maps = read_organism_maps(file.path()).unwrap();
        assert_eq!(
            maps.organisms_to_files["Plasmodium vivax P01"],
            "PvivaxP01".to_string()
        );
        assert_eq!(
            maps.files_to_organisms.keys().collect::<Vec<_>>(),
            vec!["Pfalciparum3D7", "PvivaxP01"]
        );
    }

    #[test]
    fn test_malformed_organism_maps_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2]").unwrap();

        assert!(matches!(
            read_organism_maps(file.path()),
            Err(MultiBlastError::Parse(_))
        ));
    }
}
