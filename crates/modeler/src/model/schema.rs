//! Schema composition: named fields, blank records, recursive validation.

use rustc_hash::FxHashMap;

use crate::model::field::{Field, FieldMap};
use crate::model::id::{generate_id, ID_KEY};
use crate::model::value::Value;

/// A named collection of fields forming a schema.
///
/// A model is immutable once constructed. It may itself be owned by a
/// field (`params.model`) to express nested collections and exact-shape
/// objects — an owned tree, never a cycle.
#[derive(Debug, Clone)]
pub struct Model {
    fields: FieldMap,
}

impl Model {
    /// Composes named fields into a schema. Insertion order is preserved;
    /// it affects only which field's verdict is reported last, not whether
    /// a conforming record validates.
    pub fn new<S, I>(fields: I) -> Model
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Field)>,
    {
        Model {
            fields: fields.into_iter().map(|(n, f)| (n.into(), f)).collect(),
        }
    }

    /// The schema's fields, in insertion order.
    pub fn fields(&self) -> &[(String, Field)] {
        &self.fields
    }

    /// Looks up one field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f)
    }

    /// Produces a blank record conforming to this schema: a generated
    /// [`ID_KEY`] entry plus each field's current default.
    ///
    /// Defaults are read fresh on every call, so two blanks never share a
    /// default the caller did not deliberately share.
    pub fn blank(&self) -> Value {
        let mut record = FxHashMap::default();
        record.insert(ID_KEY.to_string(), Value::Text(generate_id()));

        for (name, field) in &self.fields {
            record.insert(name.clone(), field.params.default.clone());
        }

        Value::Record(record)
    }

    /// Validates a record against this schema.
    ///
    /// A required field missing from the record fails the whole call
    /// immediately. Otherwise each field validates its entry in insertion
    /// order (absent non-required entries validate [`Value::Null`]), and
    /// the last field's verdict is the one reported — the same
    /// last-result-wins scan as
    /// [`scan_validators`](crate::validate::scan_validators).
    pub fn validate(&self, value: &Value) -> bool {
        let record = value.as_record();
        let mut valid = true;

        for (name, field) in &self.fields {
            let entry = record.and_then(|map| map.get(name));
            if field.params.required && entry.is_none() {
                return false;
            }
            valid = field.validate(entry.unwrap_or(&Value::Null));
        }

        valid
    }
}
