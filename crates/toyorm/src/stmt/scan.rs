use crate::{Error, Model, Result};

use toyorm_core::{
    driver::Row,
    schema::{FieldDescriptor, TableMetadata},
    stmt::Type,
};

/// Maps result columns to model fields.
///
/// Resolved once per result set and then applied to each row.
pub(super) struct Scan<'a> {
    fields: Vec<&'a FieldDescriptor>,
    tys: Vec<Type>,
}

impl<'a> Scan<'a> {
    /// Resolves every result column against the model's columns.
    ///
    /// Fails if the result has more columns than the model has fields, or if
    /// any column does not belong to the model.
    pub(super) fn new(table: &'a TableMetadata, columns: &[String]) -> Result<Self> {
        if columns.len() > table.num_fields() {
            return Err(Error::too_many_columns(columns.len(), table.num_fields()));
        }

        let fields = columns
            .iter()
            .map(|column| table.expect_column(column))
            .collect::<Result<Vec<_>>>()?;

        let tys = fields.iter().map(|field| field.ty).collect();

        Ok(Self { fields, tys })
    }

    /// Converts a row and assigns it to a fresh record.
    pub(super) fn load<T: Model>(&self, row: Row) -> Result<T> {
        let values = row.scan(&self.tys)?;
        let mut record = T::default();

        for (field, value) in self.fields.iter().zip(values) {
            record.set_field(&field.field_name, value)?;
        }

        Ok(record)
    }
}
