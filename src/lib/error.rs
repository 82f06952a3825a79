use thiserror::Error;

use crate::country::KeyField;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// The query was malformed. Nothing was scanned.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The query was well formed but no record carries that key.
    #[error("No country with {field} {value:?}")]
    NotFound { field: KeyField, value: String },
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Could not read dataset file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Could not parse JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not parse YAML dataset: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported dataset format for {0}. Expected a .json, .yaml or .yml file")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod test_error {
    use super::*;

    #[test]
    fn not_found_names_field_and_value() {
        let err = LookupError::NotFound {
            field: KeyField::Alpha2,
            value: "ZZ".to_string(),
        };
        assert_eq!(err.to_string(), "No country with alpha2 \"ZZ\"");
    }

    #[test]
    fn invalid_argument_and_not_found_are_distinct() {
        let invalid = LookupError::InvalidArgument("alpha2".to_string());
        let missing = LookupError::NotFound {
            field: KeyField::Alpha2,
            value: "alpha2".to_string(),
        };
        assert_ne!(invalid, missing);
    }
}
