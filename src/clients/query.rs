//! Query parameters for BAPI calls.
//!
//! Parameters keep the order the request builder inserted them in; the
//! serialized query string is never sorted. Array values use bracket
//! notation (`key[]=a&key[]=b`).

use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A single query parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean, rendered as `true`/`false`.
    Bool(bool),
    /// A list of values, rendered with bracket notation.
    Array(Vec<ParamValue>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Array(items) => {
                let joined = items
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                f.write_str(&joined)
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Self::String(value.to_string()), Self::Integer)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl Serialize for ParamValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// Insertion-ordered query parameters.
///
/// # Example
///
/// ```rust
/// use bapi_client::clients::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.insert("filters[category]", 20201);
/// params.insert("sortScore", "category_scores");
/// params.insert("ids", vec![1, 2]);
///
/// assert_eq!(
///     params.to_query_string(),
///     "filters%5Bcategory%5D=20201&sortScore=category_scores&ids[]=1&ids[]=2"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a parameter.
    ///
    /// An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Inserts a parameter only when a value is present.
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the parameters without a leading `?`.
    ///
    /// Keys and values are percent-encoded. Array entries become `key[]=value`
    /// per element; empty arrays contribute nothing.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            let key = urlencoding::encode(key);
            match value {
                ParamValue::Array(items) => {
                    for item in items {
                        pairs.push(format!("{key}[]={}", urlencoding::encode(&item.to_string())));
                    }
                }
                scalar => {
                    pairs.push(format!("{key}={}", urlencoding::encode(&scalar.to_string())));
                }
            }
        }
        pairs.join("&")
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl Serialize for QueryParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Returns `?query` for non-empty parameters, or an empty string.
#[must_use]
pub fn params_string(params: &QueryParams) -> String {
    let query = params.to_query_string();
    if query.is_empty() {
        String::new()
    } else {
        format!("?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut params = QueryParams::new();
        params.insert("zeta", 1);
        params.insert("alpha", 2);
        params.insert("mid", 3);

        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(params.to_query_string(), "zeta=1&alpha=2&mid=3");
    }

    #[test]
    fn test_reinserting_key_keeps_position() {
        let mut params = QueryParams::new();
        params.insert("a", 1);
        params.insert("b", 2);
        params.insert("a", 3);

        assert_eq!(params.len(), 2);
        assert_eq!(params.to_query_string(), "a=3&b=2");
    }

    #[test]
    fn test_insert_opt_skips_none() {
        let mut params = QueryParams::new();
        params.insert_opt("perPage", None::<u32>);
        params.insert_opt("page", Some(2_u32));

        assert!(!params.contains_key("perPage"));
        assert_eq!(params.get("page"), Some(&ParamValue::Integer(2)));
    }

    #[test]
    fn test_arrays_use_bracket_notation() {
        let params: QueryParams = [("ids", vec!["a", "b c"])].into_iter().collect();
        assert_eq!(params.to_query_string(), "ids[]=a&ids[]=b%20c");
    }

    #[test]
    fn test_empty_array_contributes_nothing() {
        let mut params = QueryParams::new();
        params.insert("ids", Vec::<i64>::new());
        params.insert("x", true);

        assert_eq!(params.to_query_string(), "x=true");
    }

    #[test]
    fn test_keys_and_values_are_percent_encoded() {
        let mut params = QueryParams::new();
        params.insert("with", "images.attributes:legacy(false),categories");

        assert_eq!(
            params.to_query_string(),
            "with=images.attributes%3Alegacy%28false%29%2Ccategories"
        );
    }

    #[test]
    fn test_scalar_rendering() {
        let mut params = QueryParams::new();
        params.insert("s", "x");
        params.insert("i", -4_i64);
        params.insert("f", 1.5);
        params.insert("b", false);

        assert_eq!(params.to_query_string(), "s=x&i=-4&f=1.5&b=false");
    }

    #[test]
    fn test_params_string_omits_question_mark_when_empty() {
        assert_eq!(params_string(&QueryParams::new()), "");

        let params: QueryParams = [("shopId", 139)].into_iter().collect();
        assert_eq!(params_string(&params), "?shopId=139");
    }

    #[test]
    fn test_serializes_as_ordered_json_object() {
        let mut params = QueryParams::new();
        params.insert("filters[category]", 20201);
        params.insert("includeSellableForFree", true);

        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"filters[category]":20201,"includeSellableForFree":true}"#
        );
    }
}
