//! Built-in field types.
//!
//! Each function returns the [`TypeDefinition`] for one built-in;
//! [`install`] wires them all into a registry under their canonical names.
//! Definitions are also usable standalone via
//! [`TypeDefinition::materialize`] when no registry is wanted.

use crate::error::SchemaError;
use crate::model::methods::{
    ANY_METHODS, DYNAMIC_METHODS, NUMBER_METHODS, OBJECT_METHODS, SERIES_METHODS,
};
use crate::model::{Args, Field, Model, Params, Value};
use crate::registry::{Registry, TypeDefinition, TypeEntry};

/// Registers every built-in type.
pub fn install(registry: &mut Registry) {
    registry.register("Text", TypeEntry::Plain(text()));
    registry.register("Number", TypeEntry::Plain(number()));
    registry.register("Flag", TypeEntry::Plain(flag()));
    registry.register("Series", TypeEntry::Plain(series()));
    registry.register("Object", TypeEntry::Plain(object()));
    registry.register("Any", TypeEntry::Plain(any()));
    registry.register("Option", TypeEntry::Parameterized(option(), construct_option));
    registry.register(
        "Collection",
        TypeEntry::Parameterized(collection(), construct_collection),
    );
}

/// Text type. Base validator checks for a text value.
pub fn text() -> TypeDefinition {
    TypeDefinition::new("text")
        .base_validator(|v| matches!(v, Value::Text(_)))
        .methods(&DYNAMIC_METHODS)
        .methods(&SERIES_METHODS)
}

/// Number type. Base validator checks for a numeric value.
pub fn number() -> TypeDefinition {
    TypeDefinition::new("number")
        .base_validator(|v| matches!(v, Value::Number(_)))
        .methods(&DYNAMIC_METHODS)
        .methods(&NUMBER_METHODS)
}

/// Boolean type. Base validator checks for a boolean value.
pub fn flag() -> TypeDefinition {
    TypeDefinition::new("flag")
        .params(Params {
            default: Value::Bool(false),
            ..Params::default()
        })
        .base_validator(|v| matches!(v, Value::Bool(_)))
}

/// Sequence type. Base validator checks for a list value.
pub fn series() -> TypeDefinition {
    TypeDefinition::new("series")
        .params(Params {
            default: Value::List(Vec::new()),
            ..Params::default()
        })
        .base_validator(|v| matches!(v, Value::List(_)))
        .methods(&SERIES_METHODS)
}

/// Object type. Base validator checks for a plain keyed record. Entry
/// restrictions and exact shapes come from the object method set.
pub fn object() -> TypeDefinition {
    TypeDefinition::new("object")
        .params(Params {
            default: Value::record(Vec::<(String, Value)>::new()),
            ..Params::default()
        })
        .base_validator(Value::is_plain_record)
        .methods(&OBJECT_METHODS)
}

/// Permissive type. Base validator only rejects null; `of()` narrows it to
/// a set of alternative types.
pub fn any() -> TypeDefinition {
    TypeDefinition::new("any")
        .base_validator(|v| !matches!(v, Value::Null))
        .methods(&ANY_METHODS)
}

/// Enumeration type. The constructor supplies the option list; the base
/// membership validator is installed there, since it closes over the
/// options.
pub fn option() -> TypeDefinition {
    TypeDefinition::new("option")
}

/// Nested-schema sequence type. The constructor supplies the inner schema.
pub fn collection() -> TypeDefinition {
    TypeDefinition::new("collection")
        .params(Params {
            default: Value::List(Vec::new()),
            ..Params::default()
        })
        .base_validator(|v| matches!(v, Value::List(_)))
        .methods(&SERIES_METHODS)
}

/// Stores the option list and installs the membership validator. The first
/// option becomes the default (still overridable with `default_value`).
///
/// A single list argument is the option list itself; a single non-list
/// value is treated as the first of a variadic list. That tolerance is
/// deliberate call ergonomics, not an accident.
fn construct_option(field: &mut Field, args: Args) -> Result<(), SchemaError> {
    let options = match args {
        Args::Values(values) => values,
        Args::Value(Value::List(values)) => values,
        Args::Value(value) => vec![value],
        Args::None => Vec::new(),
        _ => {
            debug_assert!(false, "Option takes a list of values");
            Vec::new()
        }
    };

    field.params.default = options.first().cloned().unwrap_or(Value::Null);
    field.params.options = options.clone();
    field.add_validator(move |value| options.contains(value));
    Ok(())
}

/// Builds the inner [`Model`], stores it with a blank item, and installs a
/// validator requiring every element to conform to it.
fn construct_collection(field: &mut Field, args: Args) -> Result<(), SchemaError> {
    let Args::Schema(fields) = args else {
        debug_assert!(false, "Collection takes a field mapping");
        return Ok(());
    };

    let model = Model::new(fields);
    field.params.model = Some(model.clone());
    field.params.default_item = model.blank();

    field.add_validator(move |value| match value.as_list() {
        Some(items) => items.iter().all(|item| model.validate(item)),
        None => false,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ObjectValidation;

    #[test]
    fn test_every_builtin_carries_universal_params() {
        let registry = Registry::with_builtins();

        for name in ["Text", "Number", "Flag", "Series", "Object", "Any"] {
            let field = registry.field(name).unwrap();
            assert!(!field.params.required, "{name} defaults to optional");
            assert!(!field.params.dynamic, "{name} defaults to static");
            assert!(field.has_method("required"), "{name} binds base methods");
            assert!(field.has_method("default"), "{name} binds base methods");
        }
    }

    #[test]
    fn test_type_specific_defaults() {
        let registry = Registry::with_builtins();

        assert_eq!(
            registry.field("Text").unwrap().params.default,
            Value::Text(String::new())
        );
        assert_eq!(
            registry.field("Flag").unwrap().params.default,
            Value::Bool(false)
        );
        assert_eq!(
            registry.field("Series").unwrap().params.default,
            Value::List(Vec::new())
        );
        assert!(
            registry.field("Object").unwrap().params.default.is_plain_record()
        );
    }

    #[test]
    fn test_text_base_validator() {
        let field = text().materialize();
        assert!(field.validate(&Value::from("string")));

        assert!(!field.validate(&Value::from(0.0)));
        assert!(!field.validate(&Value::from(true)));
        assert!(!field.validate(&Value::Null));
        assert!(!field.validate(&Value::List(Vec::new())));
    }

    #[test]
    fn test_number_base_validator() {
        let field = number().materialize();
        assert!(field.validate(&Value::from(0.0)));

        assert!(!field.validate(&Value::from("string")));
        assert!(!field.validate(&Value::from(true)));
        assert!(!field.validate(&Value::Null));
    }

    #[test]
    fn test_flag_base_validator() {
        let field = flag().materialize();
        assert!(field.validate(&Value::from(true)));
        assert!(field.validate(&Value::from(false)));
        assert!(!field.validate(&Value::from(1.0)));
    }

    #[test]
    fn test_any_accepts_everything_but_null() {
        let field = any().materialize();
        assert!(field.validate(&Value::from("x")));
        assert!(field.validate(&Value::from(0.0)));
        assert!(field.validate(&Value::List(Vec::new())));
        assert!(!field.validate(&Value::Null));
    }

    #[test]
    fn test_any_of_narrows_to_alternatives() {
        let field = any()
            .materialize()
            .of([text().materialize(), number().materialize()]);

        assert!(field.validate(&Value::from("x")));
        assert!(field.validate(&Value::from(1.0)));
        assert!(!field.validate(&Value::from(true)));
    }

    #[test]
    fn test_option_accepts_list_or_variadic_arguments() {
        let registry = Registry::with_builtins();
        let options = Args::values(["one", "two", "three"]);

        let variadic = registry.construct("Option", options).unwrap();
        let as_list = registry
            .construct(
                "Option",
                Args::Value(Value::list(["one", "two", "three"])),
            )
            .unwrap();
        assert_eq!(variadic.params.options, as_list.params.options);

        // A lone non-list value starts a variadic list rather than erroring.
        let lone = registry
            .construct("Option", Args::Value(Value::from("one")))
            .unwrap();
        assert_eq!(lone.params.options, vec![Value::from("one")]);
    }

    #[test]
    fn test_option_first_option_becomes_default() {
        let registry = Registry::with_builtins();
        let field = registry
            .construct("Option", Args::values(["one", "two"]))
            .unwrap();

        assert_eq!(field.params.default, Value::from("one"));
        assert!(field.validate(&Value::from("two")));
        assert!(!field.validate(&Value::from("four")));
    }

    #[test]
    fn test_collection_validates_each_element() {
        let registry = Registry::with_builtins();
        let field = registry
            .construct(
                "Collection",
                Args::schema([
                    ("name", registry.field("Text").unwrap().required()),
                    ("age", registry.field("Number").unwrap().required()),
                ]),
            )
            .unwrap();

        let good = Value::List(vec![
            Value::record([("name", Value::from("Ada")), ("age", Value::from(36.0))]),
            Value::record([("name", Value::from("Grace")), ("age", Value::from(45.0))]),
        ]);
        assert!(field.validate(&good));

        let one_bad = Value::List(vec![
            Value::record([("name", Value::from("Ada")), ("age", Value::from(36.0))]),
            Value::record([("age", Value::from(45.0))]),
        ]);
        assert!(!field.validate(&one_bad));

        assert!(!field.validate(&Value::from("not a list")));
    }

    #[test]
    fn test_collection_stores_model_and_blank_item() {
        let registry = Registry::with_builtins();
        let field = registry
            .construct(
                "Collection",
                Args::schema([("name", registry.field("Text").unwrap())]),
            )
            .unwrap();

        assert!(field.params.model.is_some());
        let item = field.params.default_item.as_record().unwrap();
        assert!(item.contains_key("name"));
        assert!(item.contains_key("_id"));
    }

    #[test]
    fn test_object_shape_delegates_to_nested_model() {
        let registry = Registry::with_builtins();
        let field = registry
            .field("Object")
            .unwrap()
            .shape([("name", registry.field("Text").unwrap().required())])
            .unwrap();

        assert_eq!(field.params.object_validation, ObjectValidation::Full);
        assert!(field.validate(&Value::record([("name", Value::from("Ada"))])));
        assert!(!field.validate(&Value::record([("other", Value::from("x"))])));
        assert!(!field.validate(&Value::from("not a record")));
    }

    #[test]
    fn test_object_keys_and_values_restrictions() {
        let registry = Registry::with_builtins();

        let keyed = registry
            .field("Object")
            .unwrap()
            .keys(registry.field("Text").unwrap().min_len(3))
            .unwrap();
        assert!(keyed.validate(&Value::record([("long_enough", Value::from(1.0))])));
        assert!(!keyed.validate(&Value::record([("ab", Value::from(1.0))])));

        let valued = registry
            .field("Object")
            .unwrap()
            .values(registry.field("Number").unwrap())
            .unwrap();
        assert!(valued.validate(&Value::record([("count", Value::from(3.0))])));
        assert!(!valued.validate(&Value::record([("count", Value::from("three"))])));
    }
}
