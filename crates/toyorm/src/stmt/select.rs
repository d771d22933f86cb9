use super::{Query, Scan};
use crate::{Db, Error, Model, Result, Session};

use toyorm_core::stmt::Predicate;
use toyorm_sql::{self as sql, Serializer};

use std::marker::PhantomData;

/// Builds and runs a `SELECT` for model `T`.
///
/// ```ignore
/// let user: User = Selector::new(&db)
///     .where_([col("id").eq(1)])
///     .get()
///     .await?;
/// ```
#[derive(Debug)]
pub struct Selector<'a, T, S: ?Sized = Db> {
    session: &'a S,

    /// Table to select from, the model's table unless overridden
    table: sql::stmt::TableRef,

    /// Joined with `AND`
    predicates: Vec<Predicate>,

    _p: PhantomData<fn() -> T>,
}

impl<'a, T: Model, S: Session + ?Sized> Selector<'a, T, S> {
    pub fn new(session: &'a S) -> Self {
        Self {
            session,
            table: sql::stmt::TableRef::Model,
            predicates: vec![],
            _p: PhantomData,
        }
    }

    /// Selects from `table` instead of the model's table.
    ///
    /// The text is emitted verbatim, so it may name a schema-qualified table.
    /// An empty string restores the default.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.table = sql::stmt::TableRef::raw(table);
        self
    }

    /// Sets the filter, replacing any previous one. Predicates are joined
    /// with `AND`.
    pub fn where_(mut self, predicates: impl IntoIterator<Item = Predicate>) -> Self {
        self.predicates = predicates.into_iter().collect();
        self
    }

    pub fn build(&self) -> Result<Query> {
        let table = self.session.registry().get::<T>()?;

        let stmt = sql::stmt::Select::new()
            .from(self.table.clone())
            .filter(Predicate::and_all(self.predicates.iter().cloned()));

        let mut args = vec![];
        let sql = Serializer::new(&table).serialize(&stmt.into(), &mut args)?;

        Ok(Query { sql, args })
    }

    /// Runs the query and loads the first row.
    ///
    /// Fails with a no rows error if the query returns nothing.
    pub async fn get(&self) -> Result<T> {
        let query = self.build()?;
        let mut rows = self.session.query(&query.sql, &query.args).await?;

        let Some(row) = rows.next() else {
            return Err(Error::no_rows());
        };

        let table = self.session.registry().get::<T>()?;
        Scan::new(&table, rows.columns())?.load(row)
    }

    /// Runs the query and loads every row, in result order.
    ///
    /// Stops at the first row that fails to load and returns its error; rows
    /// loaded before it are discarded.
    pub async fn get_multi(&self) -> Result<Vec<T>> {
        let query = self.build()?;
        let rows = self.session.query(&query.sql, &query.args).await?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        let table = self.session.registry().get::<T>()?;
        let scan = Scan::new(&table, rows.columns())?;

        let mut ret = Vec::with_capacity(rows.len());
        for row in rows {
            ret.push(scan.load(row)?);
        }

        Ok(ret)
    }
}
