//! Hydrated field values.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::object::TypedObject;

/// A hydrated value stored in a [`TypedObject`] field.
///
/// `Scalar` also carries *raw* JSON on its way into the caster: uncast
/// objects and arrays enter as `Scalar(Value::Object)` / `Scalar(Value::Array)`
/// and the descriptor decides what structure they become.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A primitive JSON value.
    Scalar(Value),
    /// A hydrated nested object.
    Object(TypedObject),
    /// A sequence of hydrated values.
    Array(Vec<FieldValue>),
}

impl FieldValue {
    /// Projects the value tree back into plain JSON.
    pub fn to_value(&self) -> Value {
        match self {
            FieldValue::Scalar(value) => value.clone(),
            FieldValue::Object(object) => object.to_value(),
            FieldValue::Array(items) => {
                Value::Array(items.iter().map(FieldValue::to_value).collect())
            }
        }
    }

    /// Returns the scalar as a string slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(value) => value.as_str(),
            _ => None,
        }
    }

    /// Returns the scalar as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Scalar(value) => value.as_i64(),
            _ => None,
        }
    }

    /// Returns the scalar as a float, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Scalar(value) => value.as_f64(),
            _ => None,
        }
    }

    /// Returns the scalar as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Scalar(value) => value.as_bool(),
            _ => None,
        }
    }

    /// Returns the hydrated object, if this is one.
    pub fn as_object(&self) -> Option<&TypedObject> {
        match self {
            FieldValue::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the hydrated sequence, if this is one.
    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Scalar(value)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// Human-readable kind of a raw JSON value, used in cast error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
