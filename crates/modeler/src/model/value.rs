//! Dynamic runtime values.
//!
//! The engine validates records whose shape is only known at runtime, so
//! values are represented by one enum rather than concrete Rust types.
//! `Null` stands in for an absent entry when a non-required field is
//! validated against a record that does not contain its key.

use rustc_hash::FxHashMap;

/// A dynamically-typed value checked by validators and threaded through
/// filters.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value. Absent record entries validate as `Null`.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// Keyed record of values.
    Record(FxHashMap<String, Value>),
}

impl Value {
    /// Builds a `Record` from key/value pairs.
    pub fn record<K, I>(pairs: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Record(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds a `List` from anything convertible to values.
    pub fn list<V, I>(items: I) -> Value
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns true only for keyed records: not a list, not null, not a
    /// scalar. This is the structural check behind the Object base
    /// validator.
    pub fn is_plain_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Borrows the underlying record map, if this is a `Record`.
    pub fn as_record(&self) -> Option<&FxHashMap<String, Value>> {
        match self {
            Value::Record(map) => Some(map),
            _ => None,
        }
    }

    /// Borrows the underlying items, if this is a `List`.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrows the text, if this is a `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Length of a `Text` (in characters) or `List` (in items).
    ///
    /// Scalars and records have no length.
    pub fn length(&self) -> Option<usize> {
        match self {
            Value::Text(s) => Some(s.chars().count()),
            Value::List(items) => Some(items.len()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Text(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Value {
        Value::List(v)
    }
}
