use super::{Ident, Params, ToSql};

use crate::stmt;
use toyorm_core::Result;

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        use stmt::Expr::*;

        match self {
            Column(expr_column) => fmt!(f, expr_column),
            Value(value) => fmt!(f, value),
            Predicate(predicate) => fmt!(f, predicate),
        }

        Ok(())
    }
}

impl ToSql for &stmt::ExprColumn {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        let table = f.serializer.table;
        let field = table.expect_field(&self.name)?;
        fmt!(f, Ident(&field.column_name));
        Ok(())
    }
}

impl ToSql for &stmt::Predicate {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        // A unary NOT has no left operand and renders as ` NOT (...)`
        let lhs = self.lhs().map(Operand);
        let op = self.op().as_str();
        let rhs = Operand(self.rhs());

        fmt!(f, lhs " " op " " rhs);
        Ok(())
    }
}

/// An operand of a predicate. Nested predicates are parenthesized.
struct Operand<'a>(&'a stmt::Expr);

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        if self.0.is_predicate() {
            fmt!(f, "(" self.0 ")");
        } else {
            fmt!(f, self.0);
        }
        Ok(())
    }
}
