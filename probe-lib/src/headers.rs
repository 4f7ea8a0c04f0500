use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Ordered header list. Names keep the casing they were given; lookups
/// are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds headers from a JSON object, coercing non-string values to
    /// their compact JSON text.
    pub fn from_json_object(object: Map<String, Value>) -> Self {
        Self(
            object
                .into_iter()
                .map(|(k, v)| (k, coerce_value(v)))
                .collect(),
        )
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

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.0[i].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Sets `name`, replacing an existing entry with the same
    /// case-insensitive name in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(i) => self.0[i] = (name, value),
            None => self.0.push((name, value)),
        }
    }

    /// Adds a value, joining it with `", "` onto an existing entry of the
    /// same name.
    pub fn append(&mut self, name: impl Into<String>, value: &str) {
        let name = name.into();
        match self.position(&name) {
            Some(i) => {
                let existing = &mut self.0[i].1;
                existing.push_str(", ");
                existing.push_str(value);
            }
            None => self.0.push((name, value.to_string())),
        }
    }

    /// Returns `defaults` overridden by `self`. Overridden defaults keep
    /// their position; new names are appended in order.
    pub fn merge_over(&self, defaults: &Headers) -> Headers {
        let mut merged = defaults.clone();
        for (k, v) in &self.0 {
            merged.set(k.clone(), v.clone());
        }
        merged
    }

    /// Two-space indented JSON object text.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|(k, _)| k.eq_ignore_ascii_case(name))
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for Headers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Stored records may carry `null` for "no headers".
        let object = Option::<Map<String, Value>>::deserialize(deserializer)?;
        Ok(object.map(Headers::from_json_object).unwrap_or_default())
    }
}

fn coerce_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderParseWarning {
    Malformed(String),
    NotAnObject,
}

impl fmt::Display for HeaderParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderParseWarning::Malformed(msg) => {
                write!(f, "headers are not valid JSON ({msg}); sending no custom headers")
            }
            HeaderParseWarning::NotAnObject => {
                write!(f, "headers must be a JSON object; sending no custom headers")
            }
        }
    }
}

impl std::error::Error for HeaderParseWarning {}

/// Parses header text leniently. Anything that is not a JSON object
/// yields an empty list.
pub fn parse_headers(text: &str) -> Headers {
    parse_headers_strict(text).unwrap_or_default()
}

/// Like [`parse_headers`], but reports why the text was discarded.
/// Blank text is not a warning.
pub fn parse_headers_strict(text: &str) -> Result<Headers, HeaderParseWarning> {
    if text.trim().is_empty() {
        return Ok(Headers::new());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => Ok(Headers::from_json_object(object)),
        Ok(_) => Err(HeaderParseWarning::NotAnObject),
        Err(e) => Err(HeaderParseWarning::Malformed(e.to_string())),
    }
}
