//! Query string model used for filter persistence in the URL.

use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

/// Decoded query parameters, keyed by name.
///
/// Parses from and renders to an `application/x-www-form-urlencoded`
/// query string, so it can sit directly in a router query segment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Writes `key`, or removes it when `value` is `None` or empty.
    pub fn set(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(v) if !v.is_empty() => {
                self.0.insert(key.to_string(), v.to_string());
            }
            _ => {
                self.0.remove(key);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn parse(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let pairs = form_urlencoded::parse(query.as_bytes())
            .filter(|(k, v)| !k.is_empty() && !v.is_empty())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self(pairs)
    }
}

impl From<&str> for QueryParams {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.iter() {
            serializer.append_pair(k, v);
        }
        write!(f, "{}", serializer.finish())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, Some(v));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encoded_pipes_and_spaces() {
        let params = QueryParams::parse("?agencies=BC+GOV%7CAB%20GOV&dateRangeFrom=2019-01-01");
        assert_eq!(params.get("agencies"), Some("BC GOV|AB GOV"));
        assert_eq!(params.get("dateRangeFrom"), Some("2019-01-01"));
        assert_eq!(params.get("dateRangeTo"), None);
    }

    #[test]
    fn empty_values_are_dropped() {
        let params = QueryParams::parse("agencies=&complianceDocumentTypes");
        assert!(params.is_empty());
    }

    #[test]
    fn set_none_removes() {
        let mut params: QueryParams = [("agencies", "BC GOV")].into_iter().collect();
        params.set("agencies", None);
        assert!(params.is_empty());
        params.set("agencies", Some(""));
        assert!(params.is_empty());
    }

    #[test]
    fn renders_back_to_same_values() {
        let params: QueryParams = [("agencies", "BC GOV|AB GOV"), ("dateRangeTo", "2020-01-01")].into_iter().collect();
        let rendered = params.to_string();
        assert!(!rendered.contains(' '));
        assert_eq!(QueryParams::from(rendered.as_str()), params);
    }

    #[test]
    fn empty_renders_empty() {
        assert_eq!(QueryParams::new().to_string(), "");
    }
}
