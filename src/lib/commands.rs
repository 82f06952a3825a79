use thiserror::Error;

use crate::{
    dataset,
    error::{DatasetError, LookupError},
    registry::Registry,
    telemetry::{warn, LogKey},
};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("Could not render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Builds the registry a command runs against: the bundled table, or the
/// dataset file when one is configured. Integrity problems in a dataset file
/// are logged and otherwise tolerated.
pub fn load_registry(dataset_path: Option<&str>) -> Result<Registry, CommandError> {
    let path = match dataset_path {
        Some(path) => path,
        None => return Ok(Registry::new()),
    };
    let countries = dataset::load_file(path)?;
    for issue in dataset::check(&countries) {
        warn(&LogKey::DatasetIntegrity, &format!("{}: {}", path, issue));
    }
    Ok(Registry::with_countries(countries))
}

pub fn lookup(registry: &Registry, by: &str, value: &str) -> Result<String, CommandError> {
    let country = registry.lookup_by(by, value)?;
    Ok(serde_json::to_string_pretty(country)?)
}

pub fn list(registry: &Registry, key: &str) -> Result<Vec<String>, CommandError> {
    Ok(registry
        .enumerate_by(key)?
        .map(|(key, country)| format!("{}\t{}", key, country.short_name))
        .collect())
}

pub fn count(registry: &Registry) -> String {
    registry.count().to_string()
}

pub fn export(registry: &Registry) -> Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(registry.all())?)
}

#[cfg(test)]
mod test_commands {
    use super::*;
    use crate::test_utils::two_countries;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn lookup_renders_the_record_as_json() {
        let registry = Registry::new();
        let output = lookup(&registry, "numeric", "250").unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["alpha2"], "FR");
        assert_eq!(value["currency"][0], "EUR");
    }

    #[test]
    fn lookup_surfaces_both_error_kinds() {
        let registry = Registry::new();
        assert!(matches!(
            lookup(&registry, "alpha2", "U1"),
            Err(CommandError::Lookup(LookupError::InvalidArgument(_)))
        ));
        assert!(matches!(
            lookup(&registry, "alpha2", "ZZ"),
            Err(CommandError::Lookup(LookupError::NotFound { .. }))
        ));
        assert!(matches!(
            lookup(&registry, "flag", "US"),
            Err(CommandError::Lookup(LookupError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn list_prints_key_and_short_name() {
        let registry = Registry::with_countries(two_countries());
        assert_eq!(
            list(&registry, "alpha3").unwrap(),
            vec!["XAA\tXanadu", "XBB\tXibalba"]
        );
    }

    #[test]
    fn count_and_export_agree() {
        let registry = Registry::with_countries(two_countries());
        assert_eq!(count(&registry), "2");
        let exported: Vec<Value> = serde_json::from_str(&export(&registry).unwrap()).unwrap();
        assert_eq!(exported.len(), 2);
        assert_eq!(exported[0]["currency"], serde_json::json!(["XTS", "EUR"]));
    }

    #[test]
    fn load_registry_defaults_to_the_bundled_table() {
        let registry = load_registry(None).unwrap();
        assert_eq!(registry.count(), 249);
    }

    #[test]
    fn load_registry_reports_unreadable_datasets() {
        assert!(matches!(
            load_registry(Some("countries.txt")),
            Err(CommandError::Dataset(DatasetError::UnsupportedFormat(_)))
        ));
    }
}
