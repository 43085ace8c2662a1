use crate::enums::Kind;
use crate::error::Mismatch;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// String-keyed mapping of child values, in insertion order.
pub type Dictionary = IndexMap<String, Value>;

/// A node in a test or state tree.
///
/// Anything that is not a sequence or a dictionary is a [`Leaf`], and leaves
/// are never inspected by the comparator.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Leaf(Leaf),
    Sequence(Vec<Value>),
    Dictionary(Dictionary),
}

/// An opaque, non-decomposed value.
#[derive(Clone, Debug, PartialEq)]
pub enum Leaf {
    /// A missing value, distinct from an explicit `null`.
    Absent,
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Opaque(Opaque),
}

/// A foreign object carried as a leaf, such as a timestamp.
///
/// Only `type_name` and `repr` are kept, and only for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opaque {
    pub type_name: String,
    pub repr: String,
}

impl Value {
    pub fn absent() -> Self {
        Value::Leaf(Leaf::Absent)
    }

    pub fn null() -> Self {
        Value::Leaf(Leaf::Null)
    }

    /// Wraps a foreign object as an opaque leaf.
    ///
    /// ```rust
    /// use shapecheck::{Kind, Value};
    ///
    /// let created = Value::opaque("Date", "2016-03-01T00:00:00Z");
    /// assert_eq!(created.kind(), Kind::Leaf);
    /// ```
    pub fn opaque(type_name: impl Into<String>, repr: impl Into<String>) -> Self {
        Value::Leaf(Leaf::Opaque(Opaque {
            type_name: type_name.into(),
            repr: repr.into(),
        }))
    }

    /// Classifies the value. Total over every `Value`.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Leaf(_) => Kind::Leaf,
            Value::Sequence(_) => Kind::Sequence,
            Value::Dictionary(_) => Kind::Dictionary,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Value::Leaf(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    pub fn is_dictionary(&self) -> bool {
        matches!(self, Value::Dictionary(_))
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(map) => Some(map),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::absent()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render_full(self))
    }
}

// ─── Conversions ────────────────────────────────────────────────────────────

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::null(),
            serde_json::Value::Bool(b) => Value::Leaf(Leaf::Bool(b)),
            serde_json::Value::Number(n) => Value::Leaf(Leaf::Number(n)),
            serde_json::Value::String(s) => Value::Leaf(Leaf::String(s)),
            serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect(),
        }
    }
}

impl From<Leaf> for Value {
    fn from(leaf: Leaf) -> Self {
        Value::Leaf(leaf)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Leaf(Leaf::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Leaf(Leaf::Number(n.into()))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::from(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Leaf(Leaf::Number(n.into()))
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no JSON number form and become opaque leaves.
    fn from(n: f64) -> Self {
        match serde_json::Number::from_f64(n) {
            Some(num) => Value::Leaf(Leaf::Number(num)),
            None => Value::opaque("f64", n.to_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Leaf(Leaf::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Leaf(Leaf::String(s))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Value::absent, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Dictionary> for Value {
    fn from(map: Dictionary) -> Self {
        Value::Dictionary(map)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Dictionary(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// ─── Serde ──────────────────────────────────────────────────────────────────

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Leaf(leaf) => leaf.serialize(serializer),
            Value::Sequence(items) => items.serialize(serializer),
            Value::Dictionary(map) => map.serialize(serializer),
        }
    }
}

impl Serialize for Leaf {
    /// Absent values serialize as `null`; opaque values as their `repr`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Leaf::Absent | Leaf::Null => serializer.serialize_unit(),
            Leaf::Bool(b) => serializer.serialize_bool(*b),
            Leaf::Number(n) => n.serialize(serializer),
            Leaf::String(s) => serializer.serialize_str(s),
            Leaf::Opaque(o) => serializer.serialize_str(&o.repr),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

// ─── Comparison ─────────────────────────────────────────────────────────────

/// Outcome of a comparison: whether the state matches the test's shape and,
/// if not, a description of the first divergence.
///
/// `err` is `Some` exactly when `passes` is false.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub passes: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub err: Option<String>,
}

impl Comparison {
    pub fn pass() -> Self {
        Comparison {
            passes: true,
            err: None,
        }
    }

    pub fn fail(err: impl Into<String>) -> Self {
        Comparison {
            passes: false,
            err: Some(err.into()),
        }
    }
}

impl From<Result<(), Mismatch>> for Comparison {
    fn from(result: Result<(), Mismatch>) -> Self {
        match result {
            Ok(()) => Comparison::pass(),
            Err(mismatch) => Comparison::fail(mismatch.to_string()),
        }
    }
}
