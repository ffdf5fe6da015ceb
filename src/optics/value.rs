//! A dynamic value tree for optics over schemaless data.
//!
//! [`Value`] models the data shapes that key lenses and path prisms walk
//! through: scalars, lists, generic string-keyed maps and typed records.
//! A [`Record`] remembers its [`RecordType`], so an optic that rewrites a
//! field hands back a record of the same type with every sibling intact,
//! and a path prism can rebuild typed records from scratch.
//!
//! [`Value::Null`] is the neutral value. It stands in for "absent" when a
//! prism review has to fill fields it knows nothing about.
//!
//! # Examples
//!
//! ```rust
//! use opticore::optics::{RecordType, Value};
//!
//! let address = RecordType::new("Address", ["street", "city"]);
//! let value = Value::record(&address, [("city", Value::from("Paris"))]);
//!
//! assert_eq!(value.get("city"), Some(&Value::from("Paris")));
//! assert_eq!(value.get("street"), Some(&Value::Null));
//! assert_eq!(value.type_name(), "Address");
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

/// The declared shape of a typed record: a name and its field names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordType {
    name: Arc<str>,
    fields: Arc<[String]>,
}

impl RecordType {
    /// Declares a record type.
    pub fn new<N, I, F>(name: N, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            name: Arc::from(name.into()),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared field names, in declaration order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Whether `field` is declared on this type.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|declared| declared == field)
    }
}

/// A typed record: every declared field is present, `Null` when unset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    kind: RecordType,
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// A record of `kind` with every field set to `Null`.
    pub fn new(kind: &RecordType) -> Self {
        let fields = kind
            .fields()
            .iter()
            .map(|field| (field.clone(), Value::Null))
            .collect();
        Self {
            kind: kind.clone(),
            fields,
        }
    }

    /// The record's type.
    pub const fn kind(&self) -> &RecordType {
        &self.kind
    }

    /// Reads a declared field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Replaces a declared field, returning `None` if the type has no such
    /// field.
    pub fn with(mut self, field: &str, value: Value) -> Option<Self> {
        let slot = self.fields.get_mut(field)?;
        *slot = value;
        Some(self)
    }

    /// Iterates over `(field, value)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(field, value)| (field.as_str(), value))
    }
}

/// A dynamically shaped value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// The neutral, absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Text(String),
    /// An ordered list.
    List(Vec<Value>),
    /// A generic string-keyed map.
    Map(BTreeMap<String, Value>),
    /// A typed record.
    Record(Record),
}

impl Value {
    /// Builds a generic map from `(key, value)` pairs.
    pub fn map<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Map(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Builds a typed record. Undeclared keys in `pairs` are ignored and
    /// declared fields missing from `pairs` are `Null`.
    pub fn record<'k, I>(kind: &RecordType, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'k str, Self)>,
    {
        let mut record = Record::new(kind);
        for (field, value) in pairs {
            if let Some(slot) = record.fields.get_mut(field) {
                *slot = value;
            }
        }
        Self::Record(record)
    }

    /// Reads a field of a map or record. Other values have no fields.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Map(entries) => entries.get(key),
            Self::Record(record) => record.get(key),
            _ => None,
        }
    }

    /// Returns `true` for `Null`.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for maps and records.
    pub const fn is_keyed(&self) -> bool {
        matches!(self, Self::Map(_) | Self::Record(_))
    }

    /// A short name for the value's shape: the record type name for records.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Record(record) => record.kind().name(),
        }
    }

    /// The boolean payload.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer payload.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The float payload. Integers widen.
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// The string payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// The list payload.
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// The record payload.
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn point() -> RecordType {
        RecordType::new("Point", ["x", "y"])
    }

    #[rstest]
    fn record_fills_missing_fields_with_null() {
        let value = Value::record(&point(), [("x", Value::from(1))]);
        assert_eq!(value.get("x"), Some(&Value::Int(1)));
        assert_eq!(value.get("y"), Some(&Value::Null));
    }

    #[rstest]
    fn record_ignores_undeclared_keys() {
        let value = Value::record(&point(), [("z", Value::from(1))]);
        assert_eq!(value.get("z"), None);
    }

    #[rstest]
    fn with_rejects_undeclared_field() {
        assert!(Record::new(&point()).with("z", Value::Null).is_none());
    }

    #[rstest]
    #[case(Value::Null, "null")]
    #[case(Value::from(true), "bool")]
    #[case(Value::from("a"), "text")]
    #[case(Value::map([("a", Value::Null)]), "map")]
    #[case(Value::record(&point(), []), "Point")]
    fn type_name_describes_shape(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.type_name(), expected);
    }

    #[rstest]
    fn scalars_have_no_fields() {
        assert_eq!(Value::from(3).get("x"), None);
        assert!(!Value::from(3).is_keyed());
    }

    #[rstest]
    fn int_widens_to_float() {
        assert_eq!(Value::from(2).as_float(), Some(2.0));
    }
}
