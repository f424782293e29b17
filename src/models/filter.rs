use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// FilterName
// ---------------------------------------------------------------------------

/// The filters offered by the catalog, in display order.
///
/// Each name doubles as the endpoint queried when the filter is the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterName {
    Classes,
    Sets,
    Types,
    Factions,
    Qualities,
    Races,
}

impl FilterName {
    pub const ALL: [FilterName; 6] = [
        FilterName::Classes,
        FilterName::Sets,
        FilterName::Types,
        FilterName::Factions,
        FilterName::Qualities,
        FilterName::Races,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterName::Classes => "classes",
            FilterName::Sets => "sets",
            FilterName::Types => "types",
            FilterName::Factions => "factions",
            FilterName::Qualities => "qualities",
            FilterName::Races => "races",
        }
    }

    /// Endpoint name used to fetch the cards matching one option.
    pub fn endpoint(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterName {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| CatalogError::UnsupportedEndpoint(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// AppliedFilter
// ---------------------------------------------------------------------------

/// One active `{name, value}` selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilter {
    pub filter_name: FilterName,
    pub filter_value: String,
}

// ---------------------------------------------------------------------------
// FilterCatalog
// ---------------------------------------------------------------------------

/// Option lists per filter, iterated in [`FilterName`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterCatalog {
    options: BTreeMap<FilterName, Vec<String>>,
}

impl FilterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from the `info` endpoint response.
    ///
    /// Keys other than the six filter names (patch, locales, ...) are
    /// ignored, as are non-string options.
    pub fn from_info(info: &Value) -> Self {
        let mut catalog = Self::new();
        let Some(map) = info.as_object() else {
            tracing::warn!("info response is not an object; filter catalog is empty");
            return catalog;
        };

        for name in FilterName::ALL {
            if let Some(Value::Array(values)) = map.get(name.as_str()) {
                let options = values
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect();
                catalog.insert(name, options);
            }
        }
        catalog
    }

    pub fn insert(&mut self, name: FilterName, options: Vec<String>) {
        self.options.insert(name, options);
    }

    pub fn get(&self, name: FilterName) -> Option<&[String]> {
        self.options.get(&name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = FilterName> + '_ {
        self.options.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterName, &[String])> + '_ {
        self.options.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl FromIterator<(FilterName, Vec<String>)> for FilterCatalog {
    fn from_iter<I: IntoIterator<Item = (FilterName, Vec<String>)>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}
