//! Method descriptors, the response envelope, and call outcomes.

use serde::Deserialize;
use serde_json::{Map, Value};

use solder_core::{FieldValue, Schema, SchemaRegistry, TypeRef, TypedObject, caster, value_kind};

use crate::error::{Error, Result};

/// Base URL of the Bot API.
pub const API_BASE: &str = "https://api.telegram.org";

// ============================================================================
// MethodSpec
// ============================================================================

/// Static wire descriptor for one Bot API operation.
///
/// Every catalogued operation POSTs to
/// `https://api.telegram.org/bot{token}/{name}` with a JSON body built from
/// its parameter schema, and expects the standard envelope back.
#[derive(Debug, Clone, Copy)]
pub struct MethodSpec {
    /// Remote method name, as it appears in the URL.
    pub name: &'static str,
    /// Request parameter schema; `None` for parameterless operations.
    pub params: Option<Schema>,
    /// Expected shape of the envelope's `result` field.
    pub returns: TypeRef,
}

impl MethodSpec {
    /// The operation's URL for the given credential token.
    pub fn url(&self, token: &str) -> String {
        format!("{API_BASE}/bot{token}/{}", self.name)
    }

    /// Builds the outgoing JSON body from the caller's argument mapping.
    ///
    /// Arguments are cast against the parameter schema (undeclared fields
    /// dropped, declared ones coerced) and projected to plain JSON, so typed
    /// nested arguments serialize correctly. Cast failures are always fatal.
    pub fn build_body(
        &self,
        registry: &SchemaRegistry,
        args: Option<&Value>,
    ) -> Result<Option<Value>> {
        let Some(schema) = self.params else {
            return Ok(None);
        };

        let empty = Map::new();
        let raw = match args {
            None => &empty,
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(Error::Cast(solder_core::CastError::mismatch(
                    "parameter object",
                    value_kind(other),
                )));
            }
        };

        let fields = caster::cast_fields(registry, raw, schema)?;
        let mut body = Map::new();
        for (name, value) in &fields {
            body.insert((*name).to_string(), value.to_value());
        }
        Ok(Some(Value::Object(body)))
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// The Bot API's standard response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Whether the call succeeded remotely.
    pub ok: bool,
    /// The payload (present when `ok` is true).
    #[serde(default)]
    pub result: Option<Value>,
    /// Human-readable failure description.
    #[serde(default)]
    pub description: Option<String>,
    /// Remote error code.
    #[serde(default)]
    pub error_code: Option<i64>,
}

impl Envelope {
    /// Splits the envelope into its raw result or the remote error.
    pub fn into_result(self) -> Result<Value> {
        if self.ok {
            Ok(self.result.unwrap_or(Value::Null))
        } else {
            Err(Error::Remote {
                code: self.error_code.unwrap_or(0),
                description: self
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            })
        }
    }
}

// ============================================================================
// Call policy and outcome
// ============================================================================

/// Per-call policy, passed explicitly with every invocation.
///
/// There is no transient controller state to arm and reset — concurrent
/// callers cannot observe each other's overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallOptions {
    /// Downgrade remote/transport failures to [`Outcome::Failed`] instead
    /// of returning an error.
    pub soft_fail: bool,
}

impl CallOptions {
    /// Options with soft failure enabled.
    pub fn soft() -> Self {
        Self { soft_fail: true }
    }
}

/// The result of a remote call.
///
/// A boolean API result arrives as `Success(Scalar(true))` and is never
/// conflated with a soft failure — `Failed` is a distinct tagged variant
/// carrying the error that would otherwise have been raised.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The envelope said `ok`; the payload is cast into the operation's
    /// declared result shape.
    Success(FieldValue),
    /// A policy-downgraded remote or transport failure.
    Failed(Error),
}

impl Outcome {
    /// Returns whether the call succeeded remotely.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Consumes the outcome, yielding the payload on success.
    pub fn success(self) -> Option<FieldValue> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failed(_) => None,
        }
    }

    /// Borrows the payload as a typed object, if the call returned one.
    pub fn as_object(&self) -> Option<&TypedObject> {
        match self {
            Outcome::Success(value) => value.as_object(),
            Outcome::Failed(_) => None,
        }
    }

    /// Borrows the payload as a boolean, if the call returned one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Outcome::Success(value) => value.as_bool(),
            Outcome::Failed(_) => None,
        }
    }

    /// Borrows the soft failure, if there was one.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Failed(error) => Some(error),
            Outcome::Success(_) => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
