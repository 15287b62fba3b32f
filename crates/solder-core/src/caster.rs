//! The schema-driven cast engine.
//!
//! Three operations cover the whole object and method catalog:
//!
//! - [`cast_value`] — shape one raw value against one descriptor,
//! - [`cast_fields`] — shape a raw mapping against a schema (the schema
//!   drives inclusion: raw fields it does not declare are dropped),
//! - [`hydrate`] — build a [`TypedObject`] of a registered kind.
//!
//! JSON `null` and absent fields pass through as absence — schemas never
//! force presence. An already-hydrated object passed where a nested object
//! is expected is a pass-through, not a double cast.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::error::{CastError, CastResult};
use crate::object::TypedObject;
use crate::schema::{Scalar, Schema, SchemaRegistry, TypeRef};
use crate::value::{FieldValue, value_kind};

/// Casts one raw value against a descriptor.
///
/// Returns `Ok(None)` for JSON `null` (absence passes through). Fails with
/// [`CastError::TypeMismatch`] when the raw value cannot be shaped into the
/// descriptor, and with [`CastError::UnknownKind`] when a nested descriptor
/// names a kind the registry does not know.
pub fn cast_value(
    registry: &SchemaRegistry,
    raw: FieldValue,
    ty: &TypeRef,
) -> CastResult<Option<FieldValue>> {
    if matches!(raw, FieldValue::Scalar(Value::Null)) {
        return Ok(None);
    }

    match *ty {
        TypeRef::Scalar(kind) => match raw {
            FieldValue::Scalar(value) => Ok(Some(FieldValue::Scalar(coerce_scalar(value, kind)?))),
            other => Err(CastError::mismatch(ty, found_kind(&other))),
        },
        TypeRef::Object(kind) => match raw {
            // Already hydrated into the expected kind: pass through untouched.
            FieldValue::Object(object) if object.kind() == kind => {
                Ok(Some(FieldValue::Object(object)))
            }
            FieldValue::Object(object) => Err(CastError::mismatch(kind, object.kind())),
            FieldValue::Scalar(Value::Object(map)) => {
                Ok(Some(FieldValue::Object(hydrate_fields(registry, kind, &map)?)))
            }
            other => Err(CastError::mismatch(kind, found_kind(&other))),
        },
        TypeRef::Array(inner) => match raw {
            FieldValue::Scalar(Value::Array(items)) => {
                let mut cast = Vec::with_capacity(items.len());
                for item in items {
                    if let Some(value) = cast_value(registry, FieldValue::Scalar(item), inner)? {
                        cast.push(value);
                    }
                }
                Ok(Some(FieldValue::Array(cast)))
            }
            FieldValue::Array(items) => {
                let mut cast = Vec::with_capacity(items.len());
                for item in items {
                    if let Some(value) = cast_value(registry, item, inner)? {
                        cast.push(value);
                    }
                }
                Ok(Some(FieldValue::Array(cast)))
            }
            other => Err(CastError::mismatch(ty, found_kind(&other))),
        },
    }
}

/// Casts a raw mapping against a schema, field by field.
///
/// Only fields the schema declares are considered; anything else in the raw
/// input is dropped. Absent and `null` fields are omitted from the result.
pub fn cast_fields(
    registry: &SchemaRegistry,
    raw: &Map<String, Value>,
    schema: Schema,
) -> CastResult<BTreeMap<&'static str, FieldValue>> {
    let mut fields = BTreeMap::new();
    for (name, ty) in schema {
        let Some(value) = raw.get(*name) else {
            continue;
        };
        if let Some(cast) = cast_value(registry, FieldValue::Scalar(value.clone()), ty)? {
            fields.insert(*name, cast);
        }
    }
    Ok(fields)
}

/// Hydrates a registered object kind from a raw JSON value.
pub fn hydrate(registry: &SchemaRegistry, kind: &str, raw: Value) -> CastResult<TypedObject> {
    let Some((kind, _)) = registry.resolve(kind) else {
        return Err(CastError::UnknownKind(kind.to_string()));
    };
    match raw {
        Value::Object(map) => hydrate_fields(registry, kind, &map),
        other => Err(CastError::mismatch(kind, value_kind(&other))),
    }
}

fn hydrate_fields(
    registry: &SchemaRegistry,
    kind: &'static str,
    raw: &Map<String, Value>,
) -> CastResult<TypedObject> {
    let Some((kind, schema)) = registry.resolve(kind) else {
        return Err(CastError::UnknownKind(kind.to_string()));
    };
    let fields = cast_fields(registry, raw, schema)?;
    trace!(kind, fields = fields.len(), "hydrated object");
    Ok(TypedObject::new(kind, fields))
}

/// Coerces a raw JSON scalar into the requested scalar kind.
fn coerce_scalar(value: Value, kind: Scalar) -> CastResult<Value> {
    let mismatch = |value: &Value| CastError::mismatch(kind.name(), value_kind(value));
    match kind {
        Scalar::String => match value {
            Value::String(_) => Ok(value),
            Value::Number(number) => Ok(Value::String(number.to_string())),
            Value::Bool(flag) => Ok(Value::String(if flag { "true" } else { "false" }.into())),
            other => Err(mismatch(&other)),
        },
        Scalar::Integer => match &value {
            Value::Number(number) => {
                if number.is_i64() || number.is_u64() {
                    Ok(value)
                } else {
                    // Integral floats (e.g. 3.0) are accepted; 3.5 is not,
                    // and neither is anything outside the i64 range (`as`
                    // would saturate silently).
                    match number.as_f64() {
                        Some(float)
                            if float.fract() == 0.0
                                && float >= i64::MIN as f64
                                && float < i64::MAX as f64 =>
                        {
                            Ok(Value::from(float as i64))
                        }
                        _ => Err(mismatch(&value)),
                    }
                }
            }
            Value::String(text) => match text.trim().parse::<i64>() {
                Ok(parsed) => Ok(Value::from(parsed)),
                Err(_) => Err(mismatch(&value)),
            },
            Value::Bool(flag) => Ok(Value::from(*flag as i64)),
            _ => Err(mismatch(&value)),
        },
        Scalar::Float => match &value {
            Value::Number(_) => Ok(value),
            Value::String(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| mismatch(&value)),
            _ => Err(mismatch(&value)),
        },
        Scalar::Boolean => match &value {
            Value::Bool(_) => Ok(value),
            Value::Number(number) => match number.as_i64() {
                Some(0) => Ok(Value::Bool(false)),
                Some(1) => Ok(Value::Bool(true)),
                _ => Err(mismatch(&value)),
            },
            Value::String(text) => match text.as_str() {
                "true" | "1" => Ok(Value::Bool(true)),
                "false" | "0" => Ok(Value::Bool(false)),
                _ => Err(mismatch(&value)),
            },
            _ => Err(mismatch(&value)),
        },
    }
}

fn found_kind(value: &FieldValue) -> String {
    match value {
        FieldValue::Scalar(raw) => value_kind(raw).to_string(),
        FieldValue::Object(object) => object.kind().to_string(),
        FieldValue::Array(_) => "array".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STR: TypeRef = TypeRef::Scalar(Scalar::String);
    const INT: TypeRef = TypeRef::Scalar(Scalar::Integer);
    const FLOAT: TypeRef = TypeRef::Scalar(Scalar::Float);
    const BOOL: TypeRef = TypeRef::Scalar(Scalar::Boolean);

    const USER: Schema = &[("id", INT), ("name", STR), ("verified", BOOL)];
    const POST: Schema = &[
        ("id", INT),
        ("author", TypeRef::Object("User")),
        ("score", FLOAT),
        ("tags", TypeRef::Array(&STR)),
        ("replies", TypeRef::Array(&TypeRef::Object("Post"))),
    ];

    fn registry() -> SchemaRegistry {
        SchemaRegistry::from_entries(&[("User", USER), ("Post", POST)])
    }

    #[test]
    fn test_scalar_coercions() {
        let reg = registry();
        let cast = |raw: Value, ty: &TypeRef| {
            cast_value(&reg, FieldValue::Scalar(raw), ty)
                .unwrap()
                .unwrap()
                .to_value()
        };

        assert_eq!(cast(json!("42"), &INT), json!(42));
        assert_eq!(cast(json!(3.0), &INT), json!(3));
        assert_eq!(cast(json!(true), &INT), json!(1));
        assert_eq!(cast(json!(42), &STR), json!("42"));
        assert_eq!(cast(json!(false), &STR), json!("false"));
        assert_eq!(cast(json!("2.5"), &FLOAT), json!(2.5));
        assert_eq!(cast(json!(7), &FLOAT), json!(7));
        assert_eq!(cast(json!("true"), &BOOL), json!(true));
        assert_eq!(cast(json!(0), &BOOL), json!(false));
    }

    #[test]
    fn test_impossible_coercions_fail() {
        let reg = registry();
        for (raw, ty) in [
            (json!("not a number"), INT),
            (json!(3.5), INT),
            (json!(1e300), INT),
            (json!(-1e300), INT),
            (json!("maybe"), BOOL),
            (json!(2), BOOL),
            (json!({"a": 1}), STR),
            (json!([1, 2]), INT),
        ] {
            let result = cast_value(&reg, FieldValue::Scalar(raw.clone()), &ty);
            assert!(
                matches!(result, Err(CastError::TypeMismatch { .. })),
                "expected mismatch for {raw} into {ty}"
            );
        }
    }

    #[test]
    fn test_null_passes_through_as_absent() {
        let reg = registry();
        assert_eq!(cast_value(&reg, FieldValue::Scalar(Value::Null), &INT).unwrap(), None);

        let raw = json!({"id": 1, "name": null});
        let user = hydrate(&reg, "User", raw).unwrap();
        assert_eq!(user.get_i64("id"), Some(1));
        assert!(!user.has("name"));
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let reg = registry();
        let user = hydrate(&reg, "User", json!({"id": 1, "color": "red"})).unwrap();
        assert!(!user.has("color"));
        assert_eq!(user.to_value(), json!({"id": 1}));
    }

    #[test]
    fn test_round_trip_projection() {
        let reg = registry();
        let raw = json!({
            "id": "9",
            "author": {"id": 1, "name": "Ada", "verified": "true"},
            "score": "4.5",
            "tags": ["a", 2],
            "replies": [{"id": 10, "author": {"id": 1, "name": "Ada"}}],
        });

        let post = hydrate(&reg, "Post", raw.clone()).unwrap();
        let projected = post.to_value();
        assert_eq!(
            projected,
            json!({
                "id": 9,
                "author": {"id": 1, "name": "Ada", "verified": true},
                "score": 4.5,
                "tags": ["a", "2"],
                "replies": [{"id": 10, "author": {"id": 1, "name": "Ada"}}],
            })
        );

        // Projection is the inverse of hydration over cast data.
        let rehydrated = hydrate(&reg, "Post", projected.clone()).unwrap();
        assert_eq!(rehydrated.to_value(), projected);
    }

    #[test]
    fn test_hydrated_object_passes_through() {
        let reg = registry();
        let user = hydrate(&reg, "User", json!({"id": 1, "name": "Ada"})).unwrap();

        let cast = cast_value(&reg, FieldValue::Object(user.clone()), &TypeRef::Object("User"))
            .unwrap()
            .unwrap();
        assert_eq!(cast, FieldValue::Object(user.clone()));

        // A hydrated object of the wrong kind is a mismatch, not a re-cast.
        let result = cast_value(&reg, FieldValue::Object(user), &TypeRef::Object("Post"));
        assert!(matches!(result, Err(CastError::TypeMismatch { .. })));
    }

    #[test]
    fn test_non_sequence_into_array_fails() {
        let reg = registry();
        let result = cast_value(&reg, FieldValue::Scalar(json!("oops")), &TypeRef::Array(&STR));
        assert!(matches!(result, Err(CastError::TypeMismatch { .. })));
    }

    #[test]
    fn test_unknown_kind() {
        let reg = registry();
        assert_eq!(
            hydrate(&reg, "Ghost", json!({})),
            Err(CastError::UnknownKind("Ghost".into()))
        );
    }

    #[test]
    fn test_recursive_schema() {
        let reg = registry();
        let post = hydrate(
            &reg,
            "Post",
            json!({"id": 1, "replies": [{"id": 2, "replies": [{"id": 3}]}]}),
        )
        .unwrap();

        let replies = post.get_array("replies").unwrap();
        let inner = replies[0].as_object().unwrap();
        assert_eq!(inner.get_i64("id"), Some(2));
        assert_eq!(
            inner.get_array("replies").unwrap()[0].as_object().unwrap().get_i64("id"),
            Some(3)
        );
    }
}
