use crate::Result;

use toyorm_core::{schema::Register, stmt::Value};

/// A record type that maps to one table.
///
/// Usually derived with `#[derive(Model)]`. Fields are addressed by their
/// logical name, the identifier as declared on the struct.
pub trait Model: Register + Default + Send + Sync {
    /// Reads the value of a field, for binding it to a statement.
    fn field_value(&self, field: &str) -> Result<Value>;

    /// Assigns a value scanned from a result row to a field.
    fn set_field(&mut self, field: &str, value: Value) -> Result<()>;
}
