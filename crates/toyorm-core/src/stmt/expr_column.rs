use super::{Op, Predicate, Value};

/// A reference to a model field, by the field's logical name.
///
/// The name is resolved to a column when the statement is serialized, which
/// is also where unknown names are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprColumn {
    pub name: String,
}

/// Shorthand for [`ExprColumn::new`].
pub fn col(name: impl Into<String>) -> ExprColumn {
    ExprColumn::new(name)
}

impl ExprColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// `column = value`
    pub fn eq(self, value: impl Into<Value>) -> Predicate {
        Predicate::binary(self, Op::Eq, value.into())
    }

    /// `column < value`
    pub fn lt(self, value: impl Into<Value>) -> Predicate {
        Predicate::binary(self, Op::Lt, value.into())
    }

    /// `column > value`
    pub fn gt(self, value: impl Into<Value>) -> Predicate {
        Predicate::binary(self, Op::Gt, value.into())
    }
}
