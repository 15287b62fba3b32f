//! Core casting engine for the Solder Telegram Bot API client.
//!
//! Everything the Bot API sends or receives is described by a [`Schema`]: a
//! static table mapping field names to [`TypeRef`] descriptors. The caster
//! turns raw `serde_json::Value` data into [`TypedObject`] graphs according
//! to those tables, and projects them back to plain JSON for serialization.
//!
//! The engine has no per-type code — every object kind is pure data, and
//! the same three operations ([`caster::cast_value`], [`caster::cast_fields`],
//! [`caster::hydrate`]) cover the whole catalog.
//!
//! # Example
//!
//! ```rust,ignore
//! use solder_core::{caster, SchemaRegistry, Scalar, Schema, TypeRef};
//!
//! const USER: Schema = &[
//!     ("id", TypeRef::Scalar(Scalar::Integer)),
//!     ("first_name", TypeRef::Scalar(Scalar::String)),
//! ];
//!
//! let mut registry = SchemaRegistry::new();
//! registry.register("User", USER);
//!
//! let user = caster::hydrate(&registry, "User", serde_json::json!({
//!     "id": 42,
//!     "first_name": "Ada",
//!     "unknown": "dropped",
//! }))?;
//! assert_eq!(user.get_i64("id"), Some(42));
//! ```

pub mod caster;
mod error;
mod object;
mod schema;
mod value;

pub use error::{CastError, CastResult};
pub use object::TypedObject;
pub use schema::{Scalar, Schema, SchemaRegistry, TypeRef};
pub use value::{FieldValue, value_kind};
