use super::{Comma, Ident, Params, ToSql};

use crate::stmt;
use toyorm_core::{Error, Result};

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        match self {
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Select(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        let table = &self.table;

        fmt!(f, "SELECT * FROM " table);

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        Ok(())
    }
}

impl ToSql for &stmt::TableRef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        match self {
            stmt::TableRef::Model => {
                let table = f.serializer.table;
                fmt!(f, Ident(&table.table_name));
            }
            stmt::TableRef::Raw(sql) => fmt!(f, sql.as_str()),
        }
        Ok(())
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        if self.rows.is_empty() {
            return Err(Error::empty_values());
        }

        if let Some(row) = self.rows.iter().find(|row| row.len() != self.columns.len()) {
            toyorm_core::bail!(
                "insert row has {} values but {} columns were given",
                row.len(),
                self.columns.len()
            );
        }

        let table = f.serializer.table;
        let table = Ident(&table.table_name);
        let columns = Comma(&self.columns);
        let rows = Comma(self.rows.iter().map(Row));

        fmt!(f, "INSERT INTO " table "(" columns ") VALUES" rows);
        Ok(())
    }
}

struct Row<'a>(&'a Vec<stmt::Value>);

impl ToSql for Row<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        fmt!(f, "(" Comma(self.0) ")");
        Ok(())
    }
}
