use crate::utils::{init_test_tracing, random_string_from, sample_countries};
use iso3166::{KeyField, LookupError, Registry};
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::thread;

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

#[test]
fn every_record_is_found_by_every_key() {
    init_test_tracing();
    let registry = Registry::new();
    for country in registry.all() {
        assert_eq!(registry.lookup_by_alpha2(&country.alpha2), Ok(country));
        assert_eq!(registry.lookup_by_alpha3(&country.alpha3), Ok(country));
        assert_eq!(registry.lookup_by_numeric(&country.numeric), Ok(country));
        assert_eq!(registry.lookup_by_name(&country.name), Ok(country));
    }
}

#[test]
fn every_record_is_found_ignoring_ascii_case() {
    let registry = Registry::new();
    for country in registry.all() {
        let lower = |s: &str| s.to_ascii_lowercase();
        let upper = |s: &str| s.to_ascii_uppercase();
        assert_eq!(registry.lookup_by_alpha2(&lower(&country.alpha2)), Ok(country));
        assert_eq!(registry.lookup_by_alpha3(&lower(&country.alpha3)), Ok(country));
        assert_eq!(registry.lookup_by_name(&lower(&country.name)), Ok(country));
        assert_eq!(registry.lookup_by_name(&upper(&country.name)), Ok(country));
    }
}

#[test]
fn count_matches_all() {
    let registry = Registry::new();
    assert_eq!(registry.count(), registry.all().len());
    assert_eq!(registry.count(), 249);
}

#[test]
fn enumerate_alpha2_mirrors_all() {
    let registry = Registry::new();
    let pairs: Vec<_> = registry.enumerate(KeyField::Alpha2).collect();
    assert_eq!(pairs.len(), registry.count());
    for ((key, country), expected) in pairs.into_iter().zip(registry.all()) {
        assert_eq!(key, expected.alpha2);
        assert_eq!(country, expected);
    }
}

#[test]
fn enumerate_default_key_is_alpha2() {
    let registry = Registry::new();
    let by_default: Vec<&str> = registry
        .enumerate(KeyField::default())
        .map(|(key, _)| key)
        .collect();
    let by_name: Vec<&str> = registry
        .enumerate_by("alpha2")
        .unwrap()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(by_default, by_name);
}

#[test]
fn default_codes_are_unique() {
    let registry = Registry::new();
    for field in [KeyField::Alpha2, KeyField::Alpha3, KeyField::Numeric] {
        let keys: HashSet<&str> = registry.enumerate(field).map(|(key, _)| key).collect();
        assert_eq!(keys.len(), registry.count(), "Duplicate {} codes", field);
    }
}

#[test]
fn random_malformed_codes_are_invalid_arguments() {
    let registry = Registry::new();
    for _ in 0..50 {
        let too_long = random_string_from(LETTERS, 3..8);
        assert!(matches!(
            registry.lookup_by_alpha2(&too_long),
            Err(LookupError::InvalidArgument(_))
        ));
        let digits = random_string_from(DIGITS, 2..3);
        assert!(matches!(
            registry.lookup_by_alpha2(&digits),
            Err(LookupError::InvalidArgument(_))
        ));
        let letters = random_string_from(LETTERS, 3..4);
        assert!(matches!(
            registry.lookup_by_numeric(&letters),
            Err(LookupError::InvalidArgument(_))
        ));
        let short = random_string_from(LETTERS, 1..3);
        assert!(matches!(
            registry.lookup_by_alpha3(&short),
            Err(LookupError::InvalidArgument(_))
        ));
    }
}

#[test]
fn concrete_shape_failures() {
    let registry = Registry::new();
    assert!(matches!(
        registry.lookup_by_alpha2("USA"),
        Err(LookupError::InvalidArgument(_))
    ));
    assert!(matches!(
        registry.lookup_by_alpha2("U1"),
        Err(LookupError::InvalidArgument(_))
    ));
}

#[test]
fn unassigned_code_is_not_found() {
    let registry = Registry::new();
    assert!(matches!(
        registry.lookup_by_alpha2("ZZ"),
        Err(LookupError::NotFound { .. })
    ));
    assert!(matches!(
        registry.lookup_by_alpha3("ZZZ"),
        Err(LookupError::NotFound { .. })
    ));
}

#[test]
fn united_states() {
    let registry = Registry::new();
    let us = registry.lookup_by_alpha2("us").unwrap();
    assert_eq!(us.alpha2, "US");
    assert_eq!(us.alpha3, "USA");
    assert_eq!(us.numeric, "840");
    assert_eq!(us.name, "United States of America");
    assert_eq!(us.short_name, "United States");
    assert_eq!(us.currencies, vec!["USD"]);
}

#[test]
fn antarctica_has_many_currencies() {
    let registry = Registry::new();
    let antarctica = registry.lookup_by_alpha3("ATA").unwrap();
    assert_eq!(antarctica.alpha2, "AQ");
    assert!(antarctica.currencies.len() > 1);
    assert_eq!(antarctica.currencies[0], "ARS");
    assert_eq!(antarctica.currencies[1], "AUD");
    assert_eq!(antarctica.currencies.last().unwrap(), "ZAR");
}

#[test]
fn curated_currency_order_survives() {
    let registry = Registry::new();
    assert_eq!(
        registry.lookup_by_alpha2("CU").unwrap().currencies,
        vec!["CUP", "CUC"]
    );
    let custom = Registry::with_countries(sample_countries());
    assert_eq!(
        custom.lookup_by_alpha2("XT").unwrap().currencies,
        vec!["XTS", "CHF", "AED"]
    );
}

#[test]
fn custom_registry_only_sees_its_records() {
    init_test_tracing();
    let registry = Registry::with_countries(sample_countries());
    assert_eq!(registry.count(), 2);
    assert_eq!(registry.lookup_by_numeric("991").unwrap().short_name, "Fixtures");
    assert_eq!(
        registry.lookup_by_name("republic of testing").unwrap().alpha2,
        "XT"
    );
    assert!(matches!(
        registry.lookup_by_alpha2("US"),
        Err(LookupError::NotFound { .. })
    ));
    // The bundled table is untouched by a custom registry.
    assert_eq!(Registry::new().lookup_by_alpha2("US").unwrap().numeric, "840");
}

#[test]
fn registry_serves_concurrent_readers() {
    let registry = Registry::new();
    thread::scope(|scope| {
        let handles: Vec<_> = ["DE", "JP", "BR", "ZA"]
            .into_iter()
            .map(|code| {
                let registry = &registry;
                scope.spawn(move || registry.lookup_by_alpha2(code).map(|c| c.alpha3.clone()))
            })
            .collect();
        let alpha3: Vec<String> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();
        assert_eq!(alpha3, vec!["DEU", "JPN", "BRA", "ZAF"]);
    });
}
