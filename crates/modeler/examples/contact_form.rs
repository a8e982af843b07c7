//! Builds a contact-form schema and runs a few records through it.
//!
//! Usage: cargo run --example contact_form

use modeler::{Args, Model, Registry, SchemaError, Value};

fn main() -> Result<(), SchemaError> {
    let mut types = Registry::with_builtins();

    // A reusable address type, registered as an alias.
    let address = types
        .field("Object")?
        .shape([
            ("street", types.field("Text")?.required()),
            ("city", types.field("Text")?.required()),
        ])?;
    types.alias("Address", address);

    let contact = Model::new([
        ("name", types.field("Text")?.required().not_empty()),
        ("age", types.field("Number")?.between(0.0, 130.0)),
        ("role", types.construct("Option", Args::values(["member", "admin"]))?),
        ("newsletter", types.field("Flag")?.default_value(false)),
        ("address", types.field("Address")?),
        (
            "phones",
            types.construct(
                "Collection",
                Args::schema([
                    ("label", types.field("Text")?.required()),
                    ("number", types.field("Text")?.required().min_len(7)),
                ]),
            )?,
        ),
    ]);

    println!("blank record: {:#?}", contact.blank());

    let good = Value::record([
        ("name", Value::from("Ada Lovelace")),
        ("age", Value::from(36.0)),
        ("role", Value::from("admin")),
        ("newsletter", Value::from(true)),
        (
            "address",
            Value::record([
                ("street", Value::from("12 St James's Square")),
                ("city", Value::from("London")),
            ]),
        ),
        (
            "phones",
            Value::List(vec![Value::record([
                ("label", Value::from("home")),
                ("number", Value::from("020 7946 0000")),
            ])]),
        ),
    ]);
    println!("complete record validates: {}", contact.validate(&good));

    let missing_name = Value::record([("age", Value::from(36.0))]);
    println!(
        "record missing a required field validates: {}",
        contact.validate(&missing_name)
    );

    Ok(())
}
