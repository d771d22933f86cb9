use std::fmt;

/// Operator joining the operands of a [`Predicate`](super::Predicate).
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Op {
    Eq,
    Lt,
    Gt,
    And,
    Or,
    Not,
}

impl Op {
    /// Returns the SQL token for the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Lt => "<",
            Op::Gt => ">",
            Op::And => "AND",
            Op::Or => "OR",
            Op::Not => "NOT",
        }
    }

    pub fn is_logical(self) -> bool {
        matches!(self, Op::And | Op::Or | Op::Not)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
