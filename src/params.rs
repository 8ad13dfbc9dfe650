//! Resolved parameter values and the ordered sets that carry them from the
//! resolver to the renderer.

use indexmap::IndexMap;
use serde::Serialize;

/// Unvalidated `key -> value` input, as read from a config file or from prompts.
pub type RawParams = IndexMap<String, String>;

/// A single resolved parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    List(Vec<String>),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ParamValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{s}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

/// Ordered mapping from field name to resolved value.
///
/// Insertion order follows the schema, then common fields, then derived fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: IndexMap<String, ParamValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    /// String value of `key`, or `""` when absent or not a string.
    pub fn get_str(&self, key: &str) -> &str {
        self.get(key).and_then(ParamValue::as_str).unwrap_or_default()
    }

    /// List value of `key`, or an empty slice when absent or not a list.
    pub fn get_list(&self, key: &str) -> &[String] {
        self.get(key).and_then(ParamValue::as_list).unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn insert<K: Into<String>, V: Into<ParamValue>>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.into());
    }

    /// Inserts `value` only when `key` is not present yet.
    pub fn insert_default<K: Into<String>, V: Into<ParamValue>>(&mut self, key: K, value: V) {
        self.values.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// JSON view used as the template rendering context.
    pub fn to_context(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
