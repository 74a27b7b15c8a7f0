use serde::{Deserialize, Serialize};

/// Cities offered as suggestions when no catalog is configured.
pub const DEFAULT_CITIES: [&str; 10] = [
    "Alger",
    "Draa Ben Khedda",
    "Bejaia",
    "Tizi Ouzou",
    "Oran",
    "Constantine",
    "Annaba",
    "Batna",
    "Setif",
    "Blida",
];

/// Case-insensitive prefix match over `catalog`, keeping catalog order.
///
/// An empty prefix yields no suggestions.
pub fn filter_suggestions<S: AsRef<str>>(prefix: &str, catalog: &[S]) -> Vec<String> {
    if prefix.is_empty() {
        return Vec::new();
    }

    let prefix = prefix.to_lowercase();

    catalog
        .iter()
        .map(AsRef::as_ref)
        .filter(|city| city.to_lowercase().starts_with(&prefix))
        .map(str::to_owned)
        .collect()
}

/// Ordered, fixed list of city names used for autocompletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityCatalog {
    cities: Vec<String>,
}

impl CityCatalog {
    pub fn new(cities: Vec<String>) -> Self {
        Self { cities }
    }

    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        filter_suggestions(prefix, &self.cities)
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.cities.iter().any(|c| c.to_lowercase() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl Default for CityCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CITIES.iter().map(|c| c.to_string()).collect())
    }
}
