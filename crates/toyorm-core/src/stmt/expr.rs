use super::{ExprColumn, Predicate, Value};

/// A node of a filter expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// References a model field by its logical name
    Column(ExprColumn),

    /// A constant bound to the statement as a positional argument
    Value(Value),

    /// Combines operands with a comparison or logical operator
    Predicate(Predicate),
}

impl Expr {
    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns true if the expression is a compound predicate. Serializers
    /// wrap these in parentheses when they appear as an operand.
    pub fn is_predicate(&self) -> bool {
        matches!(self, Self::Predicate(_))
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}

impl From<Predicate> for Expr {
    fn from(value: Predicate) -> Self {
        Self::Predicate(value)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
