use crate::Result;

use toyorm_core::{
    async_trait,
    driver::{ExecOutcome, Rows},
    schema::Registry,
    stmt::Value,
};

/// Something statements can be run against: a [`Db`](crate::Db) or an open
/// [`Transaction`](crate::Transaction).
///
/// Statement builders borrow a session for the metadata registry and to
/// execute the SQL they render.
#[async_trait]
pub trait Session: Send + Sync {
    /// Executes a statement that returns no rows.
    async fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecOutcome>;

    /// Executes a statement and returns its rows.
    async fn query(&self, sql: &str, args: &[Value]) -> Result<Rows>;

    /// Metadata registry used to resolve model types.
    fn registry(&self) -> &Registry;
}
