//! Schema descriptors.
//!
//! A schema is static declarative data: a slice of `(field name, TypeRef)`
//! pairs. Object kinds reference each other by name, and the name → schema
//! table is resolved through a [`SchemaRegistry`] built once at startup.
//! The descriptor set is closed — the caster matches on it exhaustively.

use std::collections::HashMap;
use std::fmt;

/// Scalar kinds a field can be coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    String,
    Integer,
    Float,
    Boolean,
}

impl Scalar {
    /// Human-readable kind name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Scalar::String => "string",
            Scalar::Integer => "integer",
            Scalar::Float => "float",
            Scalar::Boolean => "boolean",
        }
    }
}

/// A type descriptor: scalar, reference to another object kind, or array-of.
///
/// `Array` holds a `&'static TypeRef` so that descriptor trees can live in
/// const tables (the inner reference is const-promoted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRef {
    /// A coercible scalar value.
    Scalar(Scalar),
    /// A nested object, resolved by kind name through the registry.
    Object(&'static str),
    /// A homogeneous sequence of the inner descriptor.
    Array(&'static TypeRef),
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Scalar(kind) => f.write_str(kind.name()),
            TypeRef::Object(kind) => f.write_str(kind),
            TypeRef::Array(inner) => write!(f, "{inner}[]"),
        }
    }
}

/// One object kind's field table.
pub type Schema = &'static [(&'static str, TypeRef)];

/// Kind-name → schema lookup table.
///
/// Populated once at process start from const tables; read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    kinds: HashMap<&'static str, Schema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Builds a registry from a table of `(kind, schema)` entries.
    pub fn from_entries(entries: &[(&'static str, Schema)]) -> Self {
        Self {
            kinds: entries.iter().copied().collect(),
        }
    }

    /// Registers (or replaces) a kind.
    pub fn register(&mut self, kind: &'static str, schema: Schema) {
        self.kinds.insert(kind, schema);
    }

    /// Resolves a kind name to its canonical name and schema.
    pub fn resolve(&self, kind: &str) -> Option<(&'static str, Schema)> {
        self.kinds.get_key_value(kind).map(|(name, schema)| (*name, *schema))
    }

    /// Returns whether the registry knows the given kind.
    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PAIR: Schema = &[
        ("first", TypeRef::Scalar(Scalar::String)),
        ("second", TypeRef::Array(&TypeRef::Scalar(Scalar::Integer))),
    ];

    #[test]
    fn test_registry_resolve() {
        let registry = SchemaRegistry::from_entries(&[("Pair", PAIR)]);
        let (kind, schema) = registry.resolve("Pair").unwrap();
        assert_eq!(kind, "Pair");
        assert_eq!(schema.len(), 2);
        assert!(registry.resolve("Triple").is_none());
    }

    #[test]
    fn test_descriptor_display() {
        assert_eq!(TypeRef::Scalar(Scalar::Boolean).to_string(), "boolean");
        assert_eq!(TypeRef::Object("User").to_string(), "User");
        assert_eq!(
            TypeRef::Array(&TypeRef::Array(&TypeRef::Object("User"))).to_string(),
            "User[][]"
        );
    }
}
