use super::{ExecResult, Query};
use crate::{Db, Error, Model, Result, Session};

use toyorm_core::stmt::{col, Value};
use toyorm_sql::{self as sql, Serializer};

/// Builds and runs an `INSERT` of one or more records of model `T`.
///
/// Every field is inserted, in declaration order.
#[derive(Debug)]
pub struct Inserter<'a, T, S: ?Sized = Db> {
    session: &'a S,
    values: Vec<&'a T>,
}

impl<'a, T: Model, S: Session + ?Sized> Inserter<'a, T, S> {
    pub fn new(session: &'a S) -> Self {
        Self {
            session,
            values: vec![],
        }
    }

    /// Sets the records to insert, replacing any previously set.
    pub fn values(mut self, values: impl IntoIterator<Item = &'a T>) -> Self {
        self.values = values.into_iter().collect();
        self
    }

    pub fn build(&self) -> Result<Query> {
        if self.values.is_empty() {
            return Err(Error::empty_values());
        }

        let table = self.session.registry().get::<T>()?;
        let mut stmt = sql::stmt::Insert::new(table.fields().map(col));

        for record in &self.values {
            let row = table
                .fields()
                .map(|field| record.field_value(field))
                .collect::<Result<Vec<Value>>>()?;

            stmt.push_row(row);
        }

        let mut args = Vec::with_capacity(stmt.num_args());
        let sql = Serializer::new(&table).serialize(&stmt.into(), &mut args)?;

        Ok(Query { sql, args })
    }

    /// Runs the insert.
    ///
    /// If the statement cannot be built, the session is not touched and the
    /// returned result carries the build error.
    pub async fn exec(&self) -> ExecResult {
        let query = match self.build() {
            Ok(query) => query,
            Err(err) => return ExecResult::new(Err(err)),
        };

        ExecResult::new(self.session.exec(&query.sql, &query.args).await)
    }
}
