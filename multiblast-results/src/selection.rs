//! Which part of a multi-query result is being viewed

use multiblast_core::MultiBlastError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "resultIndex", rename_all = "lowercase")]
pub enum ResultSelection {
    /// All queries together
    Combined,
    /// The n-th query on its own, 1-based
    Individual(usize),
}

impl ResultSelection {
    /// Combined when there is more than one query, else the only query
    pub fn default_for(query_count: usize) -> Self {
        if query_count > 1 {
            ResultSelection::Combined
        } else {
            ResultSelection::Individual(1)
        }
    }

    /// Check the selection exists for a result with `query_count` queries
    pub fn validate(self, query_count: usize) -> Result<Self, MultiBlastError> {
        match self {
            ResultSelection::Combined if query_count <= 1 => Err(MultiBlastError::NotFound(
                "combined result of a single-query job".to_string(),
            )),
            ResultSelection::Individual(index) if index == 0 || index > query_count => {
                Err(MultiBlastError::NotFound(format!("individual result {}", index)))
            }
            selection => Ok(selection),
        }
    }
}

impl fmt::Display for ResultSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultSelection::Combined => write!(f, "combined"),
            ResultSelection::Individual(index) => write!(f, "individual/{}", index),
        }
    }
}

/// Parses `combined`, `individual/<n>` or a bare `<n>`
impl FromStr for ResultSelection {
    type Err = MultiBlastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "combined" {
            return Ok(ResultSelection::Combined);
        }
        let index = s.strip_prefix("individual/").unwrap_or(s);
        index
            .parse()
            .map(ResultSelection::Individual)
            .map_err(|_| MultiBlastError::Parse(format!("Invalid result selection: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        assert_eq!(ResultSelection::default_for(3), ResultSelection::Combined);
        assert_eq!(ResultSelection::default_for(1), ResultSelection::Individual(1));
        assert_eq!(ResultSelection::default_for(0), ResultSelection::Individual(1));
    }

    #[test]
    fn test_not_found_selections() {
        assert!(matches!(
            ResultSelection::Combined.validate(1),
            Err(MultiBlastError::NotFound(_))
        ));
        assert!(ResultSelection::Individual(0).validate(2).is_err());
        assert!(ResultSelection::Individual(3).validate(2).is_err());
        assert_eq!(
            ResultSelection::Individual(2).validate(2).unwrap(),
            ResultSelection::Individual(2)
        );
        assert_eq!(
            ResultSelection::Combined.validate(2).unwrap(),
            ResultSelection::Combined
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("combined".parse::<ResultSelection>().unwrap(), ResultSelection::Combined);
        assert_eq!(
            "individual/2".parse::<ResultSelection>().unwrap(),
            ResultSelection::Individual(2)
        );
        assert_eq!("4".parse::<ResultSelection>().unwrap(), ResultSelection::Individual(4));
        assert!("individual/two".parse::<ResultSelection>().is_err());
    }
}
