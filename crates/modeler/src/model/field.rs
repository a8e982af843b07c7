//! Field descriptors: one schema entry's type tag, parameters, validators,
//! and filters, plus the chainable configuration surface.
//!
//! Chainable methods are not free-floating: each field carries a capability
//! table merged from the method sets its type definition declares (see
//! [`methods`](crate::model::methods)). Every chainable call routes through
//! that table, so a field only answers to the methods its type bound.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::SchemaError;
use crate::model::methods::{Method, MethodSet};
use crate::model::schema::Model;
use crate::model::value::Value;
use crate::validate::scan_validators;

/// A predicate checked against a candidate value.
pub type Validator = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A value transform applied only after successful validation.
pub type Filter = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// A named field mapping, the raw material of a [`Model`].
pub type FieldMap = Vec<(String, Field)>;

/// How an object field validates its entries.
///
/// `shape` claims the whole record and cannot be combined with the
/// per-entry `keys`/`values` restrictions; mixing them is a
/// [`SchemaError::ConflictingValidation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectValidation {
    /// Only the base record check applies.
    #[default]
    None,
    /// Keys and/or values are restricted to a supplied type.
    Simple,
    /// The record must match an exact nested schema.
    Full,
}

/// Configuration bag for a field.
///
/// `required`, `dynamic`, and `default` are always present, whatever the
/// type definition overrides. The remaining entries are only meaningful for
/// the types that set them.
#[derive(Debug, Clone)]
pub struct Params {
    /// A record missing this field fails model validation outright.
    pub required: bool,
    /// The field's value may be reshaped by filters.
    pub dynamic: bool,
    /// Value a blank record carries for this field.
    pub default: Value,
    /// Permitted values for an option field.
    pub options: Vec<Value>,
    /// Nested schema for collection and exact-shape object fields.
    pub model: Option<Model>,
    /// Blank item conforming to the nested schema of a collection field.
    pub default_item: Value,
    /// Object validation mode currently in effect.
    pub object_validation: ObjectValidation,
    /// Alternative types accepted by an any-of field.
    pub allowed: Vec<Field>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            required: false,
            dynamic: false,
            default: Value::Text(String::new()),
            options: Vec::new(),
            model: None,
            default_item: Value::Null,
            object_validation: ObjectValidation::None,
            allowed: Vec::new(),
        }
    }
}

/// Argument payload handed to an invocable method or a type constructor.
///
/// Declared rather than reflective: each method documents the variant it
/// expects, and passing anything else is a configuration-time defect.
#[derive(Clone)]
pub enum Args {
    /// No arguments.
    None,
    /// A single value.
    Value(Value),
    /// A variadic list of values.
    Values(Vec<Value>),
    /// A single number.
    Number(f64),
    /// A length bound.
    Count(usize),
    /// An inclusive numeric range.
    Range(f64, f64),
    /// A filter function.
    Filter(Filter),
    /// One field standing in for a type.
    Type(Box<Field>),
    /// Several fields standing in for alternative types.
    Types(Vec<Field>),
    /// A named field mapping describing a nested schema.
    Schema(FieldMap),
}

impl Args {
    /// Builds a variadic `Values` payload from anything value-convertible.
    pub fn values<V, I>(items: I) -> Args
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Args::Values(items.into_iter().map(Into::into).collect())
    }

    /// Builds a `Schema` payload from named fields.
    pub fn schema<S, I>(fields: I) -> Args
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Field)>,
    {
        Args::Schema(fields.into_iter().map(|(n, f)| (n.into(), f)).collect())
    }
}

/// One schema entry: a type tag, a parameter bag, ordered validators, and
/// ordered filters.
///
/// Fields are materialized by a [`Registry`](crate::registry::Registry) (or
/// a [`TypeDefinition`](crate::registry::TypeDefinition) directly) and then
/// configured in place through chainable methods, each of which returns the
/// same field handle.
#[derive(Clone)]
pub struct Field {
    /// Informational type tag ("text", "collection", ...). The engine never
    /// dispatches on it.
    pub kind: String,
    /// Configuration bag.
    pub params: Params,
    /// Ordered validator list. The first entry is the base type check; see
    /// [`scan_validators`] for how the rest combine.
    pub validators: Vec<Validator>,
    /// Ordered filter list, applied only to valid values.
    pub filters: Vec<Filter>,
    methods: FxHashMap<&'static str, Method>,
}

impl Field {
    /// Creates a bare field with no methods bound.
    pub fn new(kind: impl Into<String>, params: Params, validators: Vec<Validator>) -> Field {
        Field {
            kind: kind.into(),
            params,
            validators,
            filters: Vec::new(),
            methods: FxHashMap::default(),
        }
    }

    /// Checks a value against this field's validators.
    ///
    /// Combination semantics are pinned by [`scan_validators`]: a failing
    /// base check is an immediate `false`, after which the result of the
    /// last validator evaluated wins.
    pub fn validate(&self, value: &Value) -> bool {
        scan_validators(&self.validators, value)
    }

    /// Threads a value through this field's filters, in registration order.
    ///
    /// Invalid values are returned unchanged: filters assume their input
    /// already conforms.
    pub fn process(&self, value: Value) -> Value {
        if !self.validate(&value) {
            return value;
        }
        let mut result = value;
        for filter in &self.filters {
            result = filter(result);
        }
        result
    }

    /// Pushes an additional validator.
    pub fn add_validator(&mut self, f: impl Fn(&Value) -> bool + Send + Sync + 'static) {
        self.validators.push(Arc::new(f));
    }

    /// Merges method sets into this field's capability table.
    ///
    /// Later sets win on name collisions. Each entry's accessor/invocable
    /// arity is declared by the set, not inferred.
    pub fn bind_methods(&mut self, sets: &[&'static MethodSet]) {
        for set in sets {
            for &(name, method) in set.entries {
                self.methods.insert(name, method);
            }
        }
    }

    /// Whether a chainable method of this name is bound.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    // -------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------

    /// Runs a bound accessor. A missing or mis-declared entry is a
    /// configuration-time defect, not a runtime error.
    fn read(mut self, name: &'static str) -> Field {
        match self.methods.get(name).copied() {
            Some(Method::Accessor(run)) => run(&mut self),
            _ => debug_assert!(false, "`{name}` is not bound to `{}` as an accessor", self.kind),
        }
        self
    }

    /// Runs a bound invocable that may reject its configuration.
    fn invoke(mut self, name: &'static str, args: Args) -> Result<Field, SchemaError> {
        match self.methods.get(name).copied() {
            Some(Method::Invocable(run)) => run(&mut self, args)?,
            _ => debug_assert!(false, "`{name}` is not bound to `{}` as an invocable", self.kind),
        }
        Ok(self)
    }

    /// Runs a bound invocable whose arguments cannot conflict.
    fn invoke_infallible(mut self, name: &'static str, args: Args) -> Field {
        match self.methods.get(name).copied() {
            Some(Method::Invocable(run)) => {
                let applied = run(&mut self, args);
                debug_assert!(applied.is_ok(), "`{name}` rejected its arguments on `{}`", self.kind);
            }
            _ => debug_assert!(false, "`{name}` is not bound to `{}` as an invocable", self.kind),
        }
        self
    }

    // -------------------------------------------------------------------
    // Chainable configuration
    // -------------------------------------------------------------------

    /// Marks the field required.
    pub fn required(self) -> Field {
        self.read("required")
    }

    /// Marks the field dynamic, making it filterable.
    pub fn dynamic(self) -> Field {
        self.read("dynamic")
    }

    /// Requires a text or list value to be non-empty.
    pub fn not_empty(self) -> Field {
        self.read("not_empty")
    }

    /// Sets the field's default value.
    pub fn default_value(self, value: impl Into<Value>) -> Field {
        self.invoke_infallible("default", Args::Value(value.into()))
    }

    /// Appends a filter to the field's filter pipeline.
    pub fn filter(self, f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Field {
        self.invoke_infallible("filter", Args::Filter(Arc::new(f)))
    }

    /// Requires a number within the inclusive range `[min, max]`.
    pub fn between(self, min: f64, max: f64) -> Field {
        self.invoke_infallible("between", Args::Range(min, max))
    }

    /// Requires a number of at least `min`.
    pub fn at_least(self, min: f64) -> Field {
        self.invoke_infallible("at_least", Args::Number(min))
    }

    /// Requires a number of at most `max`.
    pub fn at_most(self, max: f64) -> Field {
        self.invoke_infallible("at_most", Args::Number(max))
    }

    /// Requires a text or list length of at least `len`.
    pub fn min_len(self, len: usize) -> Field {
        self.invoke_infallible("min_len", Args::Count(len))
    }

    /// Requires a text or list length of at most `len`.
    pub fn max_len(self, len: usize) -> Field {
        self.invoke_infallible("max_len", Args::Count(len))
    }

    /// Restricts every key of an object field to a supplied type.
    ///
    /// Fails if the field is already configured with an exact shape.
    pub fn keys(self, ty: Field) -> Result<Field, SchemaError> {
        self.invoke("keys", Args::Type(Box::new(ty)))
    }

    /// Restricts every value of an object field to a supplied type.
    ///
    /// Fails if the field is already configured with an exact shape.
    pub fn values(self, ty: Field) -> Result<Field, SchemaError> {
        self.invoke("values", Args::Type(Box::new(ty)))
    }

    /// Requires an object field to match an exact nested schema.
    ///
    /// Fails if the field is already configured with key/value restrictions.
    pub fn shape<S, I>(self, fields: I) -> Result<Field, SchemaError>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Field)>,
    {
        self.invoke("shape", Args::schema(fields))
    }

    /// Restricts an any field to a set of alternative types.
    pub fn of(self, types: impl IntoIterator<Item = Field>) -> Field {
        self.invoke_infallible("of", Args::Types(types.into_iter().collect()))
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("kind", &self.kind)
            .field("params", &self.params)
            .field("validators", &self.validators.len())
            .field("filters", &self.filters.len())
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}
