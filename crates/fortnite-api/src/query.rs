//! Query string encoding for API parameters
//!
//! Parameter structs derive `Serialize` with camelCase field names and
//! `Option` fields. [`QueryParams::encode`] walks the serialized form: `None`
//! fields are omitted, scalars become a single key, sequences of scalars
//! become repeated keys. Anything nested deeper is rejected.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};

/// Ordered multimap of query keys to string values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a parameter struct or map into query pairs
    pub fn encode<T: Serialize + ?Sized>(params: &T) -> Result<Self> {
        let value =
            serde_json::to_value(params).map_err(|e| Error::query_encoding(e.to_string()))?;

        let fields = match value {
            Value::Null => return Ok(Self::new()),
            Value::Object(fields) => fields,
            other => {
                return Err(Error::query_encoding(format!(
                    "expected a struct or map, found {}",
                    value_kind(&other)
                )));
            }
        };

        let mut query = Self::new();
        for (key, value) in fields {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        let item = scalar(&key, item)?;
                        query.append(key.clone(), item);
                    }
                }
                other => {
                    let value = scalar(&key, other)?;
                    query.append(key, value);
                }
            }
        }

        Ok(query)
    }

    /// Append a pair, keeping any existing values for the same key
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Append a pair and return self
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(key, value);
        self
    }

    /// Check if any value is present for key
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// First value for key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for key, in insertion order
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Write the pairs into the URL's query string, percent-encoded
    pub(crate) fn apply_to(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            return;
        }
        url.query_pairs_mut().extend_pairs(self.iter());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn scalar(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::query_encoding(format!(
            "field `{key}` is a {}, expected a scalar",
            value_kind(&other)
        ))),
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "map",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{ResponseFlag, ResponseFlags};
    use crate::language::Language;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct Filters {
        name: Option<String>,
        has_series: Option<bool>,
        added: Option<i64>,
        language: Option<Language>,
        response_flags: Option<ResponseFlags>,
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let query = QueryParams::encode(&Filters::default()).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_set_fields_use_declared_names() {
        let filters = Filters {
            name: Some("Peely".to_string()),
            has_series: Some(true),
            added: Some(1_700_000_000),
            language: Some(Language::SpanishLatinAmerica),
            response_flags: Some(ResponseFlag::IncludePaths | ResponseFlag::IncludeShopHistory),
        };
        let query = QueryParams::encode(&filters).unwrap();

        assert_eq!(query.get("name"), Some("Peely"));
        assert_eq!(query.get("hasSeries"), Some("true"));
        assert_eq!(query.get("added"), Some("1700000000"));
        assert_eq!(query.get("language"), Some("es-419"));
        assert_eq!(query.get("responseFlags"), Some("5"));
        assert_eq!(query.len(), 5);
    }

    #[test]
    fn test_explicit_zero_values_are_sent() {
        let filters = Filters {
            has_series: Some(false),
            added: Some(0),
            ..Default::default()
        };
        let query = QueryParams::encode(&filters).unwrap();

        assert_eq!(query.get("hasSeries"), Some("false"));
        assert_eq!(query.get("added"), Some("0"));
    }

    #[test]
    fn test_sequences_become_repeated_keys() {
        #[derive(Serialize)]
        struct Tags {
            tag: Vec<&'static str>,
        }

        let query = QueryParams::encode(&Tags { tag: vec!["a", "b"] }).unwrap();
        assert_eq!(query.get_all("tag").collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_map_input() {
        let mut map = BTreeMap::new();
        map.insert("keyFormat", "hex");
        let query = QueryParams::encode(&map).unwrap();
        assert_eq!(query.get("keyFormat"), Some("hex"));
    }

    #[test]
    fn test_unit_encodes_to_nothing() {
        assert!(QueryParams::encode(&()).unwrap().is_empty());
    }

    #[test]
    fn test_nested_values_are_rejected() {
        #[derive(Serialize)]
        struct Nested {
            inner: BTreeMap<&'static str, u32>,
        }

        let mut inner = BTreeMap::new();
        inner.insert("x", 1);
        let err = QueryParams::encode(&Nested { inner }).unwrap_err();
        assert!(matches!(err, Error::QueryEncoding(_)));
    }

    #[test]
    fn test_non_struct_is_rejected() {
        let err = QueryParams::encode(&42).unwrap_err();
        assert!(matches!(err, Error::QueryEncoding(msg) if msg.contains("number")));
    }

    #[test]
    fn test_apply_to_url() {
        let mut url = Url::parse("https://example.com/v2/shop").unwrap();
        QueryParams::new().apply_to(&mut url);
        assert_eq!(url.as_str(), "https://example.com/v2/shop");

        let query: QueryParams = [("language", "pt-BR"), ("name", "a b&c")].into_iter().collect();
        query.apply_to(&mut url);
        assert_eq!(
            url.as_str(),
            "https://example.com/v2/shop?language=pt-BR&name=a+b%26c"
        );
    }
}
