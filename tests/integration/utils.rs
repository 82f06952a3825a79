use fake::{Fake, StringFaker};
use iso3166::country::Country;
use iso3166::telemetry::init_tracing;
use once_cell::sync::Lazy;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_tracing("debug", std::io::stdout);
    } else {
        init_tracing("debug", std::io::sink);
    };
});

pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}

pub fn random_string_from(alphabet: &str, len: std::ops::Range<usize>) -> String {
    let f = StringFaker::with(Vec::from(alphabet), len);
    f.fake()
}

pub fn sample_countries() -> Vec<Country> {
    vec![
        Country::new(
            "Republic of Testing",
            "Testing",
            "XT",
            "XTT",
            "990",
            ["XTS", "CHF", "AED"],
        ),
        Country::new("Fixture Islands", "Fixtures", "XF", "XFF", "991", ["EUR"]),
    ]
}

pub fn write_dataset(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Could not create dataset file.");
    file.write_all(contents.as_bytes())
        .expect("Could not write dataset file.");
    file
}
