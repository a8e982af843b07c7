//! The type registry: named type definitions exposed as dual-mode access
//! points that materialize fields.
//!
//! Whether a type is accessed plainly or invoked with arguments is declared
//! by its entry's shape — [`TypeEntry::Plain`] vs
//! [`TypeEntry::Parameterized`] — instead of being detected reflectively at
//! the call site. A registry is an explicit value created once per
//! application and passed to wherever schemas are built; there is no
//! module-level singleton.

pub mod builtin;

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::SchemaError;
use crate::model::methods::{MethodSet, BASE_METHODS};
use crate::model::{Args, Field, Params, Validator, Value};

/// Finishes configuring a freshly materialized field from caller-supplied
/// arguments.
pub type Constructor = fn(&mut Field, Args) -> Result<(), SchemaError>;

/// The static recipe a field is materialized from: a type tag, default
/// parameters, base validators, and the method sets its fields answer to.
#[derive(Clone)]
pub struct TypeDefinition {
    /// Type tag copied onto every materialized field.
    pub name: String,
    /// Default parameters.
    pub params: Params,
    /// Base validators, the first being the base type check.
    pub validators: Vec<Validator>,
    /// Method sets merged into each field, on top of the base set.
    pub method_sets: Vec<&'static MethodSet>,
}

impl TypeDefinition {
    /// Starts a definition with default parameters and no validators.
    pub fn new(name: impl Into<String>) -> TypeDefinition {
        TypeDefinition {
            name: name.into(),
            params: Params::default(),
            validators: Vec::new(),
            method_sets: Vec::new(),
        }
    }

    /// Replaces the default parameters.
    pub fn params(mut self, params: Params) -> TypeDefinition {
        self.params = params;
        self
    }

    /// Appends a base validator.
    pub fn base_validator(
        mut self,
        f: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> TypeDefinition {
        self.validators.push(Arc::new(f));
        self
    }

    /// Declares a method set for materialized fields.
    pub fn methods(mut self, set: &'static MethodSet) -> TypeDefinition {
        self.method_sets.push(set);
        self
    }

    /// Materializes a brand-new field: default parameters, base validators,
    /// the universal base methods, and the declared method sets. Two
    /// materializations never alias.
    pub fn materialize(&self) -> Field {
        let mut field = Field::new(self.name.clone(), self.params.clone(), self.validators.clone());
        field.bind_methods(&[&BASE_METHODS]);
        field.bind_methods(&self.method_sets);
        field
    }
}

/// A registered type, tagged by how it is accessed.
#[derive(Clone)]
pub enum TypeEntry {
    /// Accessed as a plain value: every access materializes a fresh field.
    Plain(TypeDefinition),
    /// Invoked with arguments: materialization runs the constructor to
    /// finish configuration. Plain access is an error.
    Parameterized(TypeDefinition, Constructor),
    /// A pre-built field bound under a new name; accesses clone it.
    Alias(Field),
}

/// Lookup table from type name to access point.
#[derive(Clone, Default)]
pub struct Registry {
    entries: FxHashMap<String, TypeEntry>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Registry {
        Registry::default()
    }

    /// A registry preloaded with the built-in types: `Text`, `Number`,
    /// `Flag`, `Series`, `Option`, `Collection`, `Object`, and `Any`.
    pub fn with_builtins() -> Registry {
        let mut registry = Registry::new();
        builtin::install(&mut registry);
        registry
    }

    /// Registers a type under a name. Re-registration replaces the entry.
    pub fn register(&mut self, name: impl Into<String>, entry: TypeEntry) {
        self.entries.insert(name.into(), entry);
    }

    /// Binds a fully-configured field under a new name. Lookups clone it,
    /// indistinguishable from a first-class plain type.
    pub fn alias(&mut self, name: impl Into<String>, field: Field) {
        self.entries.insert(name.into(), TypeEntry::Alias(field));
    }

    /// Whether a type of this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Plain access: materializes a fresh field from a plain or alias
    /// entry. Parameterized types are only usable through [`construct`].
    ///
    /// [`construct`]: Registry::construct
    pub fn field(&self, name: &str) -> Result<Field, SchemaError> {
        match self.entries.get(name) {
            Some(TypeEntry::Plain(definition)) => Ok(definition.materialize()),
            Some(TypeEntry::Alias(field)) => Ok(field.clone()),
            Some(TypeEntry::Parameterized(..)) => Err(SchemaError::RequiresArguments {
                name: name.to_string(),
            }),
            None => Err(SchemaError::UnknownType {
                name: name.to_string(),
            }),
        }
    }

    /// Parameterized access: materializes a fresh field and runs the
    /// entry's constructor on it with the given arguments.
    pub fn construct(&self, name: &str, args: Args) -> Result<Field, SchemaError> {
        match self.entries.get(name) {
            Some(TypeEntry::Parameterized(definition, constructor)) => {
                let mut field = definition.materialize();
                constructor(&mut field, args)?;
                Ok(field)
            }
            Some(_) => Err(SchemaError::NotParameterized {
                name: name.to_string(),
            }),
            None => Err(SchemaError::UnknownType {
                name: name.to_string(),
            }),
        }
    }
}
