use std::borrow::Cow;
use std::iter::FusedIterator;
use std::slice;

use crate::{
    country::{Country, KeyField},
    dataset::default_countries,
    error::LookupError,
    telemetry::{debug, LogKey},
    validation::validate,
};

/// An immutable, ordered collection of countries answering keyed lookups.
///
/// `Registry::new()` borrows the bundled table; `with_countries` owns a
/// replacement collection instead. Either way the records never change after
/// construction, so a registry can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Registry {
    countries: Cow<'static, [Country]>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry {
            countries: Cow::Borrowed(default_countries()),
        }
    }

    /// Replaces the bundled table entirely. The collection is not checked;
    /// see [`crate::dataset::check`].
    pub fn with_countries(countries: Vec<Country>) -> Registry {
        Registry {
            countries: Cow::Owned(countries),
        }
    }

    /// Returns the first country, in collection order, whose `field` matches
    /// `value` ignoring ASCII case.
    pub fn lookup(&self, field: KeyField, value: &str) -> Result<&Country, LookupError> {
        validate(field, value).map_err(|e| {
            debug(&LogKey::LookupInvalidArgument, &e.to_string());
            e
        })?;
        self.countries
            .iter()
            .find(|country| country.key(field).eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                let e = LookupError::NotFound {
                    field,
                    value: value.to_string(),
                };
                debug(&LogKey::LookupNotFound, &e.to_string());
                e
            })
    }

    pub fn lookup_by(&self, field: &str, value: &str) -> Result<&Country, LookupError> {
        self.lookup(KeyField::parse(field)?, value)
    }

    pub fn lookup_by_name(&self, name: &str) -> Result<&Country, LookupError> {
        self.lookup(KeyField::Name, name)
    }

    pub fn lookup_by_alpha2(&self, code: &str) -> Result<&Country, LookupError> {
        self.lookup(KeyField::Alpha2, code)
    }

    pub fn lookup_by_alpha3(&self, code: &str) -> Result<&Country, LookupError> {
        self.lookup(KeyField::Alpha3, code)
    }

    pub fn lookup_by_numeric(&self, code: &str) -> Result<&Country, LookupError> {
        self.lookup(KeyField::Numeric, code)
    }

    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    pub fn count(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Walks `(key, country)` pairs in collection order. Every call starts a
    /// fresh walk from the first record.
    pub fn enumerate(&self, key: KeyField) -> Enumerate<'_> {
        Enumerate {
            key,
            countries: self.countries.iter(),
        }
    }

    pub fn enumerate_by(&self, key: &str) -> Result<Enumerate<'_>, LookupError> {
        Ok(self.enumerate(KeyField::parse(key)?))
    }

    pub fn iter(&self) -> slice::Iter<'_, Country> {
        self.countries.iter()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

impl From<Vec<Country>> for Registry {
    fn from(countries: Vec<Country>) -> Self {
        Registry::with_countries(countries)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Country;
    type IntoIter = slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Enumerate<'a> {
    key: KeyField,
    countries: slice::Iter<'a, Country>,
}

impl<'a> Iterator for Enumerate<'a> {
    type Item = (&'a str, &'a Country);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.key;
        self.countries
            .next()
            .map(|country| (country.key(key), country))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.countries.size_hint()
    }
}

impl DoubleEndedIterator for Enumerate<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.key;
        self.countries
            .next_back()
            .map(|country| (country.key(key), country))
    }
}

impl ExactSizeIterator for Enumerate<'_> {}

impl FusedIterator for Enumerate<'_> {}
