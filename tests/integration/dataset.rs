use crate::utils::{init_test_tracing, sample_countries, write_dataset};
use iso3166::dataset::{check, default_countries, load_file, DatasetIssue};
use iso3166::{DatasetError, KeyField, Registry};
use pretty_assertions::assert_eq;

#[test]
fn exported_json_loads_back_into_an_equal_registry() {
    init_test_tracing();
    let json = serde_json::to_string(&sample_countries()).unwrap();
    let file = write_dataset(".json", &json);
    let countries = load_file(file.path()).unwrap();
    assert_eq!(countries, sample_countries());
    let registry = Registry::with_countries(countries);
    assert_eq!(registry.lookup_by_alpha3("xff").unwrap().name, "Fixture Islands");
}

#[test]
fn yaml_datasets_load_with_either_extension() {
    let yaml = "\
- name: Republic of Testing
  short_name: Testing
  alpha2: XT
  alpha3: XTT
  numeric: '990'
  currency:
    - XTS
    - CHF
    - AED
- name: Fixture Islands
  short_name: Fixtures
  alpha2: XF
  alpha3: XFF
  numeric: '991'
  currency: [EUR]
";
    for suffix in [".yaml", ".yml", ".YAML"] {
        let file = write_dataset(suffix, yaml);
        assert_eq!(load_file(file.path()).unwrap(), sample_countries());
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = write_dataset(".json", "[{\"name\": \"Testland\"}]");
    assert!(matches!(load_file(file.path()), Err(DatasetError::Json(_))));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let file = write_dataset(".yml", "- name: [unclosed");
    assert!(matches!(load_file(file.path()), Err(DatasetError::Yaml(_))));
}

#[test]
fn loading_does_not_validate_the_collection() {
    let mut countries = sample_countries();
    countries[1].alpha2 = "xt".to_string();
    let file = write_dataset(".json", &serde_json::to_string(&countries).unwrap());
    let loaded = load_file(file.path()).unwrap();
    let registry = Registry::with_countries(loaded.clone());
    assert_eq!(registry.lookup_by_alpha2("XT").unwrap().name, "Republic of Testing");
    assert!(check(&loaded).contains(&DatasetIssue::DuplicateKey {
        field: KeyField::Alpha2,
        value: "XT".to_string(),
        first: 0,
        duplicate: 1,
    }));
}

#[test]
fn bundled_table_round_trips_through_json() {
    let json = serde_json::to_string(default_countries()).unwrap();
    let file = write_dataset(".json", &json);
    assert_eq!(load_file(file.path()).unwrap(), default_countries().to_vec());
}
