//! Decoded tree model: scalars, nodes and promoted lists.
//!
//! Decoding produces plain nested data with no schema attached: maps in
//! first-seen key order, sequences, and coerced primitives. The whole
//! model serializes with serde, so a decoded tree can be handed straight
//! to `serde_json` (or any other backend) without a conversion step.

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

/// A coerced leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Anything the scalar grammar did not claim, including the empty
    /// string and ISO-8601 timestamps.
    Text(String),
}

impl Scalar {
    /// Returns the text form when this is a [`Scalar::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Renders any scalar as display text.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Bool(value) => value.to_string(),
            Scalar::Int(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
            Scalar::Text(text) => text.clone(),
        }
    }

    /// Reads an integer leniently: native ints, or text that parses as one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(value) => Some(*value),
            Scalar::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Reads a float leniently: native floats, ints widened, or numeric text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Float(value) => Some(*value),
            Scalar::Int(value) => Some(*value as f64),
            Scalar::Text(text) => text.trim().parse().ok(),
            Scalar::Bool(_) => None,
        }
    }

    /// Reads a boolean leniently: native bools, `true`/`false` text in any
    /// casing, or the vendor's occasional `0`/`1`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(value) => Some(*value),
            Scalar::Int(0) => Some(false),
            Scalar::Int(1) => Some(true),
            Scalar::Text(text) if text.eq_ignore_ascii_case("true") => Some(true),
            Scalar::Text(text) if text.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }
}

/// One decoded XML subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Leaf text after scalar coercion.
    Scalar(Scalar),
    /// An element with child elements.
    Node(Tree),
    /// Repeated sibling tags promoted to a list.
    List(Vec<Value>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Tree> {
        match self {
            Value::Node(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    pub fn as_int(&self) -> Option<i64> {
        self.as_scalar().and_then(Scalar::as_int)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_f64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Scalar(Scalar::Int(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::Text(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(Scalar::Text(value))
    }
}

impl From<Tree> for Value {
    fn from(tree: Tree) -> Self {
        Value::Node(tree)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// Children of a node, keyed by tag local name in first-seen order.
///
/// Duplicate keys are compared by exact name only. The second occurrence
/// of a key converts its stored value into a [`Value::List`] holding both,
/// and later occurrences append, so repeated sibling tags come out as one
/// list in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree {
    entries: IndexMap<String, Value>,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Inserts a child under `key`, promoting repeats to a list.
    ///
    /// # Examples
    ///
    /// ```
    /// use tmsoap_core::value::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("b", 1i64);
    /// tree.insert("b", 2i64);
    /// assert_eq!(tree.get("b").unwrap().as_list().unwrap().len(), 2);
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.get_mut(&key) {
            None => {
                self.entries.insert(key, value);
            }
            Some(Value::List(items)) => items.push(value),
            Some(existing) => {
                let first = std::mem::replace(existing, Value::List(Vec::new()));
                if let Value::List(items) = existing {
                    items.push(first);
                    items.push(value);
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::ops::Index<&str> for Tree {
    type Output = Value;

    /// Panics when the key is absent. Use [`Tree::get`] for fallible
    /// access.
    fn index(&self, key: &str) -> &Value {
        self.get(key)
            .unwrap_or_else(|| panic!("no child named {key:?}"))
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Bool(value) => serializer.serialize_bool(*value),
            Scalar::Int(value) => serializer.serialize_i64(*value),
            Scalar::Float(value) => serializer.serialize_f64(*value),
            Scalar::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Scalar(scalar) => scalar.serialize(serializer),
            Value::Node(tree) => tree.serialize(serializer),
            Value::List(items) => serializer.collect_seq(items),
        }
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}
