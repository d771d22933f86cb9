use crate::stmt::{Primitive, Type};

/// Describes a model type: its identifier and its fields in declaration
/// order.
///
/// This is what `#[derive(Model)]` generates. It replaces reflecting over the
/// type at runtime; the [`Registry`](super::Registry) turns it into
/// [`TableMetadata`](super::TableMetadata) the first time the type is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSchema {
    /// The type's identifier, e.g. `TestModel`
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: String,
    pub ty: Type,
    pub nullable: bool,
}

/// Types that can be registered with a [`Registry`](super::Registry).
pub trait Register: 'static {
    fn schema() -> ModelSchema;
}

impl ModelSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: vec![],
        }
    }

    /// Appends a field.
    pub fn field(mut self, name: impl Into<String>, ty: Type, nullable: bool) -> Self {
        self.fields.push(FieldSchema {
            name: name.into(),
            ty,
            nullable,
        });
        self
    }

    /// Appends a field whose type and nullability come from `T`.
    pub fn primitive<T: Primitive>(self, name: impl Into<String>) -> Self {
        self.field(name, T::TYPE, T::NULLABLE)
    }
}
