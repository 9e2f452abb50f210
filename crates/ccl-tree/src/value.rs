//! Value types for built CCL configurations.
//!
//! After hierarchy building every key resolves to one of three shapes:
//! - `String` for a leaf value,
//! - `List` for repeated keys or a block of `= item` lines,
//! - `Object` for a value that was itself CCL.

use std::fmt;

/// A resolved CCL value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
#[repr(u8)]
pub enum Value {
    /// Leaf text, exactly as the flat parser produced it.
    String(String),
    /// Ordered list of leaf strings.
    List(Vec<String>),
    /// Nested configuration.
    Object(Object),
}

/// Which shape a [`Value`] has, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    List,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Object => "object",
        })
    }
}

/// An ordered mapping from keys to values. Keys are unique.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct Object {
    /// Fields in the order their keys first appeared.
    pub fields: Vec<Field>,
}

/// One key of an [`Object`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct Field {
    pub key: String,
    pub value: Value,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Get as string (leaf values only).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get as object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Rewrite every leaf string in place, e.g. to expand tabs.
    pub fn map_text<F: FnMut(&mut String)>(&mut self, f: &mut F) {
        match self {
            Value::String(s) => f(s),
            Value::List(items) => items.iter_mut().for_each(|s| f(s)),
            Value::Object(obj) => obj.map_text(f),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }

    /// Get a mutable value by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.fields
            .iter_mut()
            .find(|f| f.key == key)
            .map(|f| &mut f.value)
    }

    /// Iterate over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|f| (f.key.as_str(), &f.value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Insert or replace. A replaced key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.get_mut(&key) {
            Some(existing) => *existing = value,
            None => self.fields.push(Field { key, value }),
        }
    }

    /// Builder-style [`Object::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Rewrite every leaf string in place, at every depth.
    pub fn map_text<F: FnMut(&mut String)>(&mut self, f: &mut F) {
        for field in &mut self.fields {
            field.value.map_text(f);
        }
    }
}
