//! Schema: the complete mapping from field name to field definition.

use indexmap::IndexMap;

use crate::condition::FieldName;
use crate::errors::SchemaError;
use crate::field::Field;
use crate::generate;

/// An assembled address-word schema.
///
/// Fields keep their insertion order, which is what makes the serialized
/// document deterministic. Built once by combining hand-authored entries with
/// generator-produced ones; not meant to be mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: IndexMap<FieldName, Field>,
}

impl Schema {
    pub fn new() -> Self {
        Schema { fields: IndexMap::new() }
    }

    /// Adds a hand-authored field under `name`, replacing any field already
    /// stored under that name.
    pub fn insert(&mut self, name: impl Into<FieldName>, field: Field) {
        self.fields.insert(name.into(), field);
    }

    /// Adds the generated sub-selection field for a (class, group) pair.
    ///
    /// The assembly key and the field's embedded condition are derived from
    /// the same two ids, so they cannot disagree.
    pub fn insert_subselection(&mut self, class_id: u32, group_id: u32, option_count: u32) {
        self.fields.insert(
            generate::subfield_key(class_id, group_id),
            generate::subselection_field(class_id, group_id, option_count),
        );
    }

    /// Adds the generated numeric subfield for a (class, group) pair.
    pub fn insert_number_subfield(&mut self, class_id: u32, group_id: u32) {
        self.fields.insert(
            generate::subfield_key(class_id, group_id),
            generate::number_subfield(class_id, group_id),
        );
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Checks that every field name referenced by any condition is a key of
    /// this schema. Reports the first dangling reference found.
    pub fn check_references(&self) -> Result<(), SchemaError> {
        for (name, field) in &self.fields {
            let Some(condition) = &field.condition else {
                continue;
            };

            for target in condition.referenced_fields() {
                if !self.fields.contains_key(target) {
                    return Err(SchemaError::UnknownFieldRef {
                        field: name.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl From<&Schema> for crate::serde::SchemaDoc {
    fn from(value: &Schema) -> Self {
        crate::serde::SchemaDoc {
            fields: value
                .fields
                .iter()
                .map(|(name, field)| (name.clone(), field.into()))
                .collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::SchemaDoc> for Schema {
    fn from(value: crate::serde::SchemaDoc) -> Self {
        Schema {
            fields: value
                .fields
                .into_iter()
                .map(|(name, def)| (name, def.into()))
                .collect(),
        }
    }
}
