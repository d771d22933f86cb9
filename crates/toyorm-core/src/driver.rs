mod response;
pub use response::ExecOutcome;

mod rows;
pub use rows::{Row, Rows};

mod transaction;
pub use transaction::Transaction;

use crate::{async_trait, stmt::Value, Result};

use std::{borrow::Cow, fmt::Debug};

/// A database backend.
///
/// A driver knows how to reach a database; [`Driver::connect`] opens a
/// [`Connection`] that statements are sent through.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Returns the URL this driver connects to.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection to the database.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// An open connection that executes rendered SQL.
///
/// `sql` uses `?` placeholders; `args` are bound to them positionally.
#[async_trait]
pub trait Connection: Debug + Send + Sync + 'static {
    /// Executes a statement that returns no rows.
    async fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecOutcome>;

    /// Executes a statement and collects the rows it returns.
    async fn query(&self, sql: &str, args: &[Value]) -> Result<Rows>;

    /// Starts, commits or rolls back a transaction.
    async fn transaction(&self, op: Transaction) -> Result<()>;
}
