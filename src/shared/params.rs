//! Request parameters — the flat key/value set POSTed for one method call.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

/// Field names the dispatcher owns. Caller values under these keys are
/// always overwritten.
pub mod reserved {
    pub const METHOD: &str = "method";
    pub const API_KEY: &str = "api_key";
    pub const HASH_TIMESTAMP: &str = "hash_timestamp";
    pub const HASH_KEY: &str = "hash_key";

    pub const ALL: [&str; 4] = [METHOD, API_KEY, HASH_TIMESTAMP, HASH_KEY];
}

/// Flat string → string parameter map.
///
/// Values are stored in their textual form; anything `Display` (strings,
/// integers, booleans) can be inserted. Serializes as a plain map, so it
/// form-encodes directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) -> Option<String> {
        self.0.insert(key.into(), value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Extend with all entries of `other`; `other` wins on conflicts.
    pub fn merge(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    /// `application/x-www-form-urlencoded` body for these fields.
    pub fn to_form(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for Params {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for Params {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, String>> for Params {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_stringifies_primitives() {
        let params = Params::new()
            .with("language", "IT")
            .with("resource_id", 42)
            .with("detailed", true);
        assert_eq!(params.get("language"), Some("IT"));
        assert_eq!(params.get("resource_id"), Some("42"));
        assert_eq!(params.get("detailed"), Some("true"));
    }

    #[test]
    fn test_merge_prefers_incoming_values() {
        let mut params = Params::from([("method", "x"), ("language", "EN")]);
        params.merge(Params::from([("method", "api_test")]));
        assert_eq!(params.get("method"), Some("api_test"));
        assert_eq!(params.get("language"), Some("EN"));
    }

    #[test]
    fn test_to_form_encodes_special_characters() {
        let params = Params::new().with("email", "a+b@example.com").with("name", "Jan Kowalski");
        let body = params.to_form().unwrap();
        assert_eq!(body, "email=a%2Bb%40example.com&name=Jan+Kowalski");
    }

    #[test]
    fn test_empty_params_encode_to_empty_body() {
        assert_eq!(Params::new().to_form().unwrap(), "");
    }
}
