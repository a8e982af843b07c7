//! Runtime schema definition and validation for dynamic records.
//!
//! Callers declare the shape of a record as named, typed fields; the engine
//! materializes blank records conforming to that shape and validates
//! arbitrary values against it, recursively for nested collections and
//! nested objects.
//!
//! # Overview
//!
//! - A [`Field`] describes one entry: a type tag, a parameter bag, ordered
//!   validators, ordered filters, and a chainable configuration surface.
//! - A [`Registry`] maps type names to dual-mode access points: plain types
//!   materialize a fresh field per access ([`Registry::field`]),
//!   parameterized types finish configuration from caller arguments
//!   ([`Registry::construct`]). Custom types and aliases register the same
//!   way the built-ins do.
//! - A [`Model`] composes named fields into a schema, generates blank
//!   records (with a fresh [`ID_KEY`] identifier), and validates records.
//!
//! # Quick Start
//!
//! ```rust
//! use modeler::{Args, Model, Registry, Value};
//!
//! # fn main() -> Result<(), modeler::SchemaError> {
//! let types = Registry::with_builtins();
//!
//! let contact = Model::new([
//!     ("name", types.field("Text")?.required()),
//!     ("age", types.field("Number")?.at_least(0.0)),
//!     ("role", types.construct("Option", Args::values(["admin", "member"]))?),
//! ]);
//!
//! // A blank record carries a generated `_id` plus each field's default.
//! let blank = contact.blank();
//! assert!(blank.as_record().unwrap().contains_key("_id"));
//!
//! assert!(contact.validate(&Value::record([
//!     ("name", Value::from("Ada")),
//!     ("age", Value::from(36.0)),
//!     ("role", Value::from("admin")),
//! ])));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Value, Field, method sets, Model)
//! - [`registry`]: Type registry, built-in types, custom registration
//! - [`validate`]: The validator combination policy
//! - [`error`]: Error types
//!
//! # Validation semantics
//!
//! Validation never raises: non-conformance is a plain `false`. The way a
//! field's validators combine is deliberately not a conjunction — see
//! [`scan_validators`] for the pinned policy. Errors are reserved for
//! schema construction: unknown types, wrong invocation mode, and
//! conflicting object configuration.

pub mod error;
pub mod model;
pub mod registry;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::SchemaError;
pub use model::{
    generate_id, Args, Field, FieldMap, Filter, Method, MethodSet, Model, ObjectValidation,
    Params, Validator, Value, ID_KEY,
};
pub use registry::{builtin, Constructor, Registry, TypeDefinition, TypeEntry};
pub use validate::scan_validators;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
