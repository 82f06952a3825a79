use crate::utils::{init_test_tracing, sample_countries, write_dataset};
use iso3166::commands::{count, export, list, load_registry, lookup, CommandError};
use iso3166::{DatasetError, LookupError};
use pretty_assertions::assert_eq;
use serde_json::Value;

#[test]
fn commands_run_against_a_dataset_file() {
    init_test_tracing();
    let file = write_dataset(".json", &serde_json::to_string(&sample_countries()).unwrap());
    let path = file.path().to_str().unwrap();
    let registry = load_registry(Some(path)).unwrap();
    assert_eq!(count(&registry), "2");
    assert_eq!(
        list(&registry, "numeric").unwrap(),
        vec!["990\tTesting", "991\tFixtures"]
    );
    let output = lookup(&registry, "name", "FIXTURE ISLANDS").unwrap();
    let record: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(record["alpha3"], "XFF");
}

#[test]
fn dataset_with_integrity_issues_still_loads() {
    init_test_tracing();
    let mut countries = sample_countries();
    countries[1].numeric = countries[0].numeric.clone();
    let file = write_dataset(".json", &serde_json::to_string(&countries).unwrap());
    let registry = load_registry(file.path().to_str()).unwrap();
    let output = lookup(&registry, "numeric", "990").unwrap();
    let record: Value = serde_json::from_str(&output).unwrap();
    // First match wins for the repeated numeric code.
    assert_eq!(record["alpha2"], "XT");
}

#[test]
fn export_of_the_bundled_table_keeps_the_record_shape() {
    let registry = load_registry(None).unwrap();
    let exported: Vec<Value> = serde_json::from_str(&export(&registry).unwrap()).unwrap();
    assert_eq!(exported.len(), 249);
    let mut keys: Vec<&String> = exported[0].as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["alpha2", "alpha3", "currency", "name", "numeric", "short_name"]
    );
}

#[test]
fn errors_keep_their_kind() {
    let registry = load_registry(None).unwrap();
    assert!(matches!(
        list(&registry, "currency"),
        Err(CommandError::Lookup(LookupError::InvalidArgument(_)))
    ));
    assert!(matches!(
        load_registry(Some("missing.json")),
        Err(CommandError::Dataset(DatasetError::Io { .. }))
    ));
}
