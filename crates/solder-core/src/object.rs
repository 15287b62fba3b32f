//! Typed domain objects.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::value::FieldValue;

/// A schema-typed object hydrated from raw JSON.
///
/// Every field is optional at the data-model level: a field missing from the
/// raw input is simply absent, never an error. Instances are read-only after
/// hydration — there is no mutation API.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedObject {
    kind: &'static str,
    fields: BTreeMap<&'static str, FieldValue>,
}

impl TypedObject {
    /// Assembles an object from already-cast fields.
    ///
    /// Used by the caster; the invariant that every value matches its
    /// declared descriptor is established there.
    pub(crate) fn new(kind: &'static str, fields: BTreeMap<&'static str, FieldValue>) -> Self {
        Self { kind, fields }
    }

    /// The object's schema kind name (e.g. `"Message"`).
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Looks up a field; absent fields read as `None`.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Returns whether the field is present.
    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// String accessor shorthand.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field)?.as_str()
    }

    /// Integer accessor shorthand.
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field)?.as_i64()
    }

    /// Float accessor shorthand.
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field)?.as_f64()
    }

    /// Boolean accessor shorthand.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field)?.as_bool()
    }

    /// Nested object accessor shorthand.
    pub fn get_object(&self, field: &str) -> Option<&TypedObject> {
        self.get(field)?.as_object()
    }

    /// Sequence accessor shorthand.
    pub fn get_array(&self, field: &str) -> Option<&[FieldValue]> {
        self.get(field)?.as_array()
    }

    /// Iterates over present fields in field-name order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// Projects the object back into a plain JSON mapping.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.fields {
            map.insert((*name).to_string(), value.to_value());
        }
        Value::Object(map)
    }
}

impl Serialize for TypedObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
