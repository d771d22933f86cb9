use crate::stmt::Type;

/// Maps one model field to its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Column name, derived from the field name
    pub column_name: String,

    /// Field name as declared on the model
    pub field_name: String,

    /// Type values of this field are scanned into
    pub ty: Type,

    /// True if the field accepts null (declared as `Option<T>`)
    pub nullable: bool,
}
