//! Core data types for schema definition.
//!
//! - Identifiers (generated record ids)
//! - Values (the dynamic runtime value enum)
//! - Fields (typed descriptors with validators, filters, and chainable
//!   configuration)
//! - Method sets (the declared chainable capability tables)
//! - Models (named fields composed into a schema)

pub mod field;
pub mod id;
pub mod methods;
pub mod schema;
pub mod value;

pub use field::{Args, Field, FieldMap, Filter, ObjectValidation, Params, Validator};
pub use id::{generate_id, ID_KEY};
pub use methods::{
    Method, MethodSet, ANY_METHODS, BASE_METHODS, DYNAMIC_METHODS, NUMBER_METHODS, OBJECT_METHODS,
    SERIES_METHODS,
};
pub use schema::Model;
pub use value::Value;
