use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display as EnumToString, EnumIter, EnumString};

use crate::error::LookupError;

/// The record fields a registry can be keyed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumToString, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum KeyField {
    Name,
    #[default]
    Alpha2,
    Alpha3,
    Numeric,
}

impl KeyField {
    /// Parses a field name, reporting the accepted names when it isn't one.
    pub fn parse(field: &str) -> Result<KeyField, LookupError> {
        KeyField::from_str(field).map_err(|_| {
            LookupError::InvalidArgument(format!(
                "Unknown key field {:?}. Expected one of: {}",
                field,
                KeyField::accepted()
            ))
        })
    }

    pub fn accepted() -> String {
        KeyField::iter()
            .map(|field| field.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    }
}

/// One ISO 3166-1 entry.
///
/// Serializes with the keys `name`, `short_name`, `alpha2`, `alpha3`,
/// `numeric` and `currency`; consumers of exported datasets rely on that shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub short_name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub numeric: String,
    #[serde(rename = "currency")]
    pub currencies: Vec<String>,
}

impl Country {
    pub fn new<C: Into<String>>(
        name: impl Into<String>,
        short_name: impl Into<String>,
        alpha2: impl Into<String>,
        alpha3: impl Into<String>,
        numeric: impl Into<String>,
        currencies: impl IntoIterator<Item = C>,
    ) -> Country {
        Country {
            name: name.into(),
            short_name: short_name.into(),
            alpha2: alpha2.into(),
            alpha3: alpha3.into(),
            numeric: numeric.into(),
            currencies: currencies.into_iter().map(Into::into).collect(),
        }
    }

    pub fn key(&self, field: KeyField) -> &str {
        match field {
            KeyField::Name => &self.name,
            KeyField::Alpha2 => &self.alpha2,
            KeyField::Alpha3 => &self.alpha3,
            KeyField::Numeric => &self.numeric,
        }
    }
}
