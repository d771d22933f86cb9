use super::{underscore_name, FieldDescriptor, ModelSchema};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Table and column mapping for one model type.
///
/// `field_map` and `column_map` index the same set of descriptors, by field
/// name and by column name. Both preserve declaration order.
#[derive(Debug, PartialEq, Eq)]
pub struct TableMetadata {
    pub table_name: String,

    field_map: IndexMap<String, Arc<FieldDescriptor>>,

    column_map: IndexMap<String, Arc<FieldDescriptor>>,
}

impl TableMetadata {
    /// Builds the metadata for a model schema.
    ///
    /// Fails with an invalid type error if the schema does not describe a
    /// usable record: a missing type name, no fields, or duplicate field or
    /// column names.
    pub fn from_schema(schema: &ModelSchema) -> Result<Self> {
        if schema.name.is_empty() {
            return Err(Error::invalid_type("<unnamed>", "model has no type name"));
        }

        if schema.fields.is_empty() {
            return Err(Error::invalid_type(&schema.name, "model declares no fields"));
        }

        let mut field_map = IndexMap::with_capacity(schema.fields.len());
        let mut column_map = IndexMap::with_capacity(schema.fields.len());

        for field in &schema.fields {
            if field.name.is_empty() {
                return Err(Error::invalid_type(&schema.name, "field has no name"));
            }

            let descriptor = Arc::new(FieldDescriptor {
                column_name: underscore_name(&field.name),
                field_name: field.name.clone(),
                ty: field.ty,
                nullable: field.nullable,
            });

            if field_map
                .insert(field.name.clone(), descriptor.clone())
                .is_some()
            {
                return Err(Error::invalid_type(
                    &schema.name,
                    format!("field `{}` is declared twice", field.name),
                ));
            }

            if let Some(other) =
                column_map.insert(descriptor.column_name.clone(), descriptor.clone())
            {
                return Err(Error::invalid_type(
                    &schema.name,
                    format!(
                        "fields `{}` and `{}` both map to column `{}`",
                        other.field_name, field.name, descriptor.column_name
                    ),
                ));
            }
        }

        Ok(Self {
            table_name: underscore_name(&schema.name),
            field_map,
            column_map,
        })
    }

    /// Field names in declaration order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.field_map.keys().map(String::as_str)
    }

    /// Field descriptors in declaration order.
    pub fn descriptors(&self) -> impl ExactSizeIterator<Item = &FieldDescriptor> + '_ {
        self.field_map.values().map(|field| &**field)
    }

    pub fn num_fields(&self) -> usize {
        self.field_map.len()
    }

    /// Looks up a field by its logical name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.field_map.get(name).map(|field| &**field)
    }

    /// Looks up a field by its column name.
    pub fn column(&self, name: &str) -> Option<&FieldDescriptor> {
        self.column_map.get(name).map(|field| &**field)
    }

    /// Like [`field`](Self::field), failing with an unknown column error.
    pub fn expect_field(&self, name: &str) -> Result<&FieldDescriptor> {
        self.field(name).ok_or_else(|| Error::unknown_column(name))
    }

    /// Like [`column`](Self::column), failing with an unknown column error.
    pub fn expect_column(&self, name: &str) -> Result<&FieldDescriptor> {
        self.column(name).ok_or_else(|| Error::unknown_column(name))
    }
}
