mod iso3166;

use once_cell::sync::Lazy;
use std::collections::hash_map::{Entry, HashMap};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use strum::IntoEnumIterator;

use crate::{
    country::{Country, KeyField},
    error::DatasetError,
    telemetry::{info, LogKey},
    validation::{is_canonical, is_currency_code},
};

struct CountryData {
    name: &'static str,
    short_name: &'static str,
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: &'static str,
    currencies: &'static [&'static str],
}

impl From<&CountryData> for Country {
    fn from(data: &CountryData) -> Self {
        Country::new(
            data.name,
            data.short_name,
            data.alpha2,
            data.alpha3,
            data.numeric,
            data.currencies.iter().copied(),
        )
    }
}

static COUNTRIES: Lazy<Vec<Country>> =
    Lazy::new(|| iso3166::COUNTRY_DATA.iter().map(Country::from).collect());

/// The bundled ISO 3166-1 table, built on first use and shared for the life
/// of the process.
pub fn default_countries() -> &'static [Country] {
    &COUNTRIES
}

pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<Country>, DatasetError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Vec<Country>, DatasetError> {
    Ok(serde_yaml::from_reader(reader)?)
}

type FileParser = fn(BufReader<File>) -> Result<Vec<Country>, DatasetError>;

/// Reads a replacement dataset. The format follows the file extension.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Country>, DatasetError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);
    let parse: FileParser = match extension.as_deref() {
        Some("json") => from_json_reader::<BufReader<File>>,
        Some("yaml") | Some("yml") => from_yaml_reader::<BufReader<File>>,
        _ => return Err(DatasetError::UnsupportedFormat(display)),
    };
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: display.clone(),
        source,
    })?;
    let countries = parse(BufReader::new(file))?;
    info(
        &LogKey::DatasetLoad,
        &format!("Loaded {} countries from {}", countries.len(), display),
    );
    Ok(countries)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetIssue {
    /// Two records share a key that must be unique. Indexes are positions in
    /// the checked collection.
    DuplicateKey {
        field: KeyField,
        value: String,
        first: usize,
        duplicate: usize,
    },
    MalformedField {
        index: usize,
        field: String,
        value: String,
    },
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetIssue::DuplicateKey {
                field,
                value,
                first,
                duplicate,
            } => write!(
                f,
                "Record {} repeats {} {:?} first used by record {}",
                duplicate, field, value, first
            ),
            DatasetIssue::MalformedField {
                index,
                field,
                value,
            } => write!(f, "Record {} has a malformed {}: {:?}", index, field, value),
        }
    }
}

/// Reports duplicate keys and malformed fields in a collection.
///
/// Registries never run this themselves; a custom collection is accepted as
/// given and lookups answer with the first match.
pub fn check(countries: &[Country]) -> Vec<DatasetIssue> {
    let mut issues = vec![];
    for (index, country) in countries.iter().enumerate() {
        let mut malformed = |field: String, value: &str| {
            issues.push(DatasetIssue::MalformedField {
                index,
                field,
                value: value.to_string(),
            })
        };
        for field in KeyField::iter() {
            let value = country.key(field);
            if !is_canonical(field, value) {
                malformed(field.to_string(), value);
            }
        }
        if country.short_name.is_empty() {
            malformed("short_name".to_string(), &country.short_name);
        }
        for currency in country.currencies.iter().filter(|c| !is_currency_code(c)) {
            malformed("currency".to_string(), currency);
        }
    }
    for field in [KeyField::Alpha2, KeyField::Alpha3, KeyField::Numeric] {
        let mut seen: HashMap<String, usize> = HashMap::new();
        for (index, country) in countries.iter().enumerate() {
            let value = country.key(field).to_ascii_uppercase();
            match seen.entry(value) {
                Entry::Occupied(entry) => issues.push(DatasetIssue::DuplicateKey {
                    field,
                    value: entry.key().clone(),
                    first: *entry.get(),
                    duplicate: index,
                }),
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
            }
        }
    }
    issues
}
