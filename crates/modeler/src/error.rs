//! Error types for schema construction.
//!
//! Validation failure is never an error: [`Field::validate`] and
//! [`Model::validate`] report non-conformance as a plain `false`. Errors are
//! reserved for schema *construction* going wrong.
//!
//! [`Field::validate`]: crate::model::Field::validate
//! [`Model::validate`]: crate::model::Model::validate

use thiserror::Error;

/// Error raised while building a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The registry has no entry under this name.
    #[error("unknown type: {name}")]
    UnknownType { name: String },

    /// A parameterized type was accessed without arguments.
    ///
    /// Types that declare a constructor are only usable through
    /// [`Registry::construct`](crate::registry::Registry::construct).
    #[error("type `{name}` takes constructor arguments; use construct() instead of field()")]
    RequiresArguments { name: String },

    /// A plain type was invoked with constructor arguments.
    #[error("type `{name}` does not take constructor arguments; use field() instead of construct()")]
    NotParameterized { name: String },

    /// Incompatible object validation modes were combined on one field.
    ///
    /// `shape()` claims the whole record; `keys()`/`values()` restrict
    /// individual entries. Applying one after the other would silently
    /// misconfigure the field, so it fails loudly instead.
    #[error("cannot apply `{applied}` to an object field already configured with `{existing}`")]
    ConflictingValidation {
        applied: &'static str,
        existing: &'static str,
    },
}
