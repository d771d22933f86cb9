use super::{Expr, Op};

/// A boolean expression: `lhs op rhs`, or `NOT rhs` when `lhs` is absent.
///
/// Predicates are immutable. Combinators take their operands by value and
/// return a new predicate wrapping them.
///
/// # Examples
///
/// ```text
/// col("Age").gt(18)                          // `age` > ?
/// col("Age").gt(18).and(col("Age").lt(35))   // (`age` > ?) AND (`age` < ?)
/// not(col("Age").gt(18))                     //  NOT (`age` > ?)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    lhs: Option<Box<Expr>>,
    op: Op,
    rhs: Box<Expr>,
}

/// Negates a predicate.
pub fn not(predicate: Predicate) -> Predicate {
    Predicate::not(predicate)
}

impl Predicate {
    pub fn binary(lhs: impl Into<Expr>, op: Op, rhs: impl Into<Expr>) -> Self {
        Self {
            lhs: Some(Box::new(lhs.into())),
            op,
            rhs: Box::new(rhs.into()),
        }
    }

    pub fn not(predicate: Predicate) -> Self {
        Self {
            lhs: None,
            op: Op::Not,
            rhs: Box::new(predicate.into()),
        }
    }

    pub fn and(self, rhs: Predicate) -> Self {
        Self::binary(self, Op::And, rhs)
    }

    pub fn or(self, rhs: Predicate) -> Self {
        Self::binary(self, Op::Or, rhs)
    }

    /// Joins predicates with `AND`, folding to the left: `p1, p2, p3` becomes
    /// `(p1 AND p2) AND p3`. Returns `None` for an empty list.
    pub fn and_all(predicates: impl IntoIterator<Item = Predicate>) -> Option<Self> {
        predicates.into_iter().reduce(Predicate::and)
    }

    pub fn lhs(&self) -> Option<&Expr> {
        self.lhs.as_deref()
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }

    pub fn is_not(&self) -> bool {
        self.lhs.is_none()
    }
}
