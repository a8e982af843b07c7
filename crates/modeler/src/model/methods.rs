//! Chainable method sets.
//!
//! A method set is a static table of named methods that a type definition
//! declares for its fields. Each entry is declared up front as an
//! *accessor* (no arguments, cannot fail) or an *invocable* (takes an
//! [`Args`] payload, may reject conflicting configuration) — the arity is a
//! property of the declaration, never inferred at call time.
//!
//! [`Field::bind_methods`](crate::model::Field::bind_methods) merges sets
//! into one capability table per field; the base set is merged into every
//! field a registry materializes.

use crate::error::SchemaError;
use crate::model::field::{Args, Field, ObjectValidation};
use crate::model::schema::Model;
use crate::model::value::Value;

/// One chainable method with its declared arity.
#[derive(Clone, Copy)]
pub enum Method {
    /// Read-style method: mutates the field, takes no arguments.
    Accessor(fn(&mut Field)),
    /// Call-style method: takes arguments, may fail on conflicting
    /// configuration.
    Invocable(fn(&mut Field, Args) -> Result<(), SchemaError>),
}

/// A named table of chainable methods.
pub struct MethodSet {
    /// Set name, for diagnostics only.
    pub name: &'static str,
    /// Method name → declared method.
    pub entries: &'static [(&'static str, Method)],
}

/// Methods every field type carries.
pub static BASE_METHODS: MethodSet = MethodSet {
    name: "base",
    entries: &[
        ("required", Method::Accessor(set_required)),
        ("default", Method::Invocable(set_default)),
    ],
};

/// Methods for types whose values can be filtered.
pub static DYNAMIC_METHODS: MethodSet = MethodSet {
    name: "dynamic",
    entries: &[
        ("dynamic", Method::Accessor(set_dynamic)),
        ("filter", Method::Invocable(push_filter)),
    ],
};

/// Range checks for numeric types.
pub static NUMBER_METHODS: MethodSet = MethodSet {
    name: "number",
    entries: &[
        ("between", Method::Invocable(push_between)),
        ("at_least", Method::Invocable(push_at_least)),
        ("at_most", Method::Invocable(push_at_most)),
    ],
};

/// Length checks for text and sequence types.
pub static SERIES_METHODS: MethodSet = MethodSet {
    name: "series",
    entries: &[
        ("not_empty", Method::Accessor(require_not_empty)),
        ("min_len", Method::Invocable(push_min_len)),
        ("max_len", Method::Invocable(push_max_len)),
    ],
};

/// Entry restrictions and exact shapes for object types.
pub static OBJECT_METHODS: MethodSet = MethodSet {
    name: "object",
    entries: &[
        ("keys", Method::Invocable(restrict_keys)),
        ("values", Method::Invocable(restrict_values)),
        ("shape", Method::Invocable(apply_shape)),
    ],
};

/// Type alternatives for the permissive any type.
pub static ANY_METHODS: MethodSet = MethodSet {
    name: "any",
    entries: &[("of", Method::Invocable(allow_types))],
};

fn set_required(field: &mut Field) {
    field.params.required = true;
}

fn set_dynamic(field: &mut Field) {
    field.params.dynamic = true;
}

fn require_not_empty(field: &mut Field) {
    field.add_validator(|v| v.length().is_some_and(|len| len > 0));
}

fn set_default(field: &mut Field, args: Args) -> Result<(), SchemaError> {
    match args {
        Args::Value(value) => field.params.default = value,
        _ => debug_assert!(false, "default takes a single value"),
    }
    Ok(())
}

fn push_filter(field: &mut Field, args: Args) -> Result<(), SchemaError> {
    match args {
        Args::Filter(f) => field.filters.push(f),
        _ => debug_assert!(false, "filter takes a filter function"),
    }
    Ok(())
}

fn push_between(field: &mut Field, args: Args) -> Result<(), SchemaError> {
    match args {
        Args::Range(min, max) => {
            field.add_validator(move |v| v.as_number().is_some_and(|n| n >= min && n <= max));
        }
        _ => debug_assert!(false, "between takes a numeric range"),
    }
    Ok(())
}

fn push_at_least(field: &mut Field, args: Args) -> Result<(), SchemaError> {
    match args {
        Args::Number(min) => {
            field.add_validator(move |v| v.as_number().is_some_and(|n| n >= min));
        }
        _ => debug_assert!(false, "at_least takes a number"),
    }
    Ok(())
}

fn push_at_most(field: &mut Field, args: Args) -> Result<(), SchemaError> {
    match args {
        Args::Number(max) => {
            field.add_validator(move |v| v.as_number().is_some_and(|n| n <= max));
        }
        _ => debug_assert!(false, "at_most takes a number"),
    }
    Ok(())
}

fn push_min_len(field: &mut Field, args: Args) -> Result<(), SchemaError> {
    match args {
        Args::Count(len) => {
            field.add_validator(move |v| v.length().is_some_and(|l| l >= len));
        }
        _ => debug_assert!(false, "min_len takes a length"),
    }
    Ok(())
}

fn push_max_len(field: &mut Field, args: Args) -> Result<(), SchemaError> {
    match args {
        Args::Count(len) => {
            field.add_validator(move |v| v.length().is_some_and(|l| l <= len));
        }
        _ => debug_assert!(false, "max_len takes a length"),
    }
    Ok(())
}

fn restrict_keys(field: &mut Field, args: Args) -> Result<(), SchemaError> {
    if field.params.object_validation == ObjectValidation::Full {
        return Err(SchemaError::ConflictingValidation {
            applied: "keys",
            existing: "shape",
        });
    }
    let Args::Type(ty) = args else {
        debug_assert!(false, "keys takes a type field");
        return Ok(());
    };

    field.params.object_validation = ObjectValidation::Simple;
    let ty = *ty;
    field.add_validator(move |value| match value.as_record() {
        Some(map) => {
            // Same last-result-wins scan as the validator policy.
            let mut valid = true;
            for key in map.keys() {
                valid = ty.validate(&Value::Text(key.clone()));
            }
            valid
        }
        None => false,
    });
    Ok(())
}

fn restrict_values(field: &mut Field, args: Args) -> Result<(), SchemaError> {
    if field.params.object_validation == ObjectValidation::Full {
        return Err(SchemaError::ConflictingValidation {
            applied: "values",
            existing: "shape",
        });
    }
    let Args::Type(ty) = args else {
        debug_assert!(false, "values takes a type field");
        return Ok(());
    };

    field.params.object_validation = ObjectValidation::Simple;
    let ty = *ty;
    field.add_validator(move |value| match value.as_record() {
        Some(map) => {
            let mut valid = true;
            for entry in map.values() {
                valid = ty.validate(entry);
            }
            valid
        }
        None => false,
    });
    Ok(())
}

fn apply_shape(field: &mut Field, args: Args) -> Result<(), SchemaError> {
    if field.params.object_validation == ObjectValidation::Simple {
        return Err(SchemaError::ConflictingValidation {
            applied: "shape",
            existing: "keys/values",
        });
    }
    let Args::Schema(fields) = args else {
        debug_assert!(false, "shape takes a field mapping");
        return Ok(());
    };

    let model = Model::new(fields);
    field.params.model = Some(model.clone());
    field.params.object_validation = ObjectValidation::Full;
    field.add_validator(move |value| model.validate(value));
    Ok(())
}

fn allow_types(field: &mut Field, args: Args) -> Result<(), SchemaError> {
    let Args::Types(types) = args else {
        debug_assert!(false, "of takes a list of type fields");
        return Ok(());
    };

    field.params.allowed = types.clone();
    field.add_validator(move |value| types.iter().any(|ty| ty.validate(value)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::Params;

    fn bare(kind: &str) -> Field {
        let mut field = Field::new(kind, Params::default(), Vec::new());
        field.bind_methods(&[&BASE_METHODS]);
        field
    }

    #[test]
    fn test_required_sets_param() {
        let field = bare("text").required();
        assert!(field.params.required);
    }

    #[test]
    fn test_default_sets_param() {
        let field = bare("text").default_value("test");
        assert_eq!(field.params.default, Value::from("test"));
    }

    #[test]
    fn test_dynamic_sets_param() {
        let mut field = bare("text");
        field.bind_methods(&[&DYNAMIC_METHODS]);
        let field = field.dynamic();
        assert!(field.params.dynamic);
    }

    #[test]
    fn test_filter_pushes_in_order() {
        let mut field = bare("text");
        field.bind_methods(&[&DYNAMIC_METHODS]);
        let field = field.filter(|v| v).filter(|v| v);
        assert_eq!(field.filters.len(), 2);
    }

    #[test]
    fn test_between_bounds_are_inclusive() {
        let mut field = bare("number");
        field.bind_methods(&[&NUMBER_METHODS]);
        let field = field.between(0.0, 1.0);

        let check = field.validators.last().unwrap();
        assert!(check(&Value::from(0.0)));
        assert!(check(&Value::from(0.5)));
        assert!(check(&Value::from(1.0)));
        assert!(!check(&Value::from(2.0)));
    }

    #[test]
    fn test_at_least_and_at_most() {
        let mut field = bare("number");
        field.bind_methods(&[&NUMBER_METHODS]);
        let field = field.at_least(0.0).at_most(1.0);

        let at_least = &field.validators[0];
        assert!(at_least(&Value::from(0.0)));
        assert!(!at_least(&Value::from(-1.0)));

        let at_most = &field.validators[1];
        assert!(at_most(&Value::from(1.0)));
        assert!(!at_most(&Value::from(2.0)));
    }

    #[test]
    fn test_length_methods_cover_text_and_lists() {
        let mut field = bare("series");
        field.bind_methods(&[&SERIES_METHODS]);
        let field = field.not_empty().max_len(2);

        let not_empty = &field.validators[0];
        assert!(not_empty(&Value::list(["a"])));
        assert!(!not_empty(&Value::List(Vec::new())));
        assert!(not_empty(&Value::from("a")));
        assert!(!not_empty(&Value::from("")));

        let max_len = &field.validators[1];
        assert!(max_len(&Value::list(["a", "b"])));
        assert!(!max_len(&Value::list(["a", "b", "c"])));
    }

    #[test]
    fn test_shape_then_keys_conflicts() {
        let mut field = bare("object");
        field.bind_methods(&[&OBJECT_METHODS]);

        let field = field.shape([("name", bare("text"))]).unwrap();
        let err = field.keys(bare("text")).unwrap_err();
        assert_eq!(
            err,
            SchemaError::ConflictingValidation {
                applied: "keys",
                existing: "shape",
            }
        );
    }

    #[test]
    fn test_keys_then_shape_conflicts() {
        let mut field = bare("object");
        field.bind_methods(&[&OBJECT_METHODS]);

        let field = field.keys(bare("text")).unwrap();
        assert_eq!(field.params.object_validation, ObjectValidation::Simple);

        let err = field.shape([("name", bare("text"))]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::ConflictingValidation {
                applied: "shape",
                existing: "keys/values",
            }
        );
    }

    #[test]
    fn test_keys_and_values_combine() {
        let mut field = bare("object");
        field.bind_methods(&[&OBJECT_METHODS]);

        let field = field
            .keys(bare("text"))
            .and_then(|f| f.values(bare("text")))
            .unwrap();
        assert_eq!(field.params.object_validation, ObjectValidation::Simple);
    }
}
