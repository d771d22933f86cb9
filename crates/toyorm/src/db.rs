mod builder;
pub use builder::Builder;

use crate::{driver::Transaction as TransactionOp, Result, Session, Transaction};

use toyorm_core::{
    async_trait,
    driver::{Connection, Driver, ExecOutcome, Rows},
    schema::Registry,
    stmt::Value,
};

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A database handle.
///
/// Clones share the connection and the metadata registry.
#[derive(Debug, Clone)]
pub struct Db {
    driver: Arc<dyn Driver>,
    connection: Arc<dyn Connection>,
    registry: Arc<Registry>,

    /// Set when a transaction is dropped unfinished. `Drop` cannot await, so
    /// the rollback is sent before the next statement on this connection.
    pending_rollback: Arc<AtomicBool>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects with default settings, picking the driver from the URL.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url).await
    }

    /// The driver this handle was built from.
    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    /// The registry shared by this handle, its clones and its transactions.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Executes a statement that returns no rows.
    pub async fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecOutcome> {
        self.flush_pending_rollback().await?;
        self.exec_unflushed(sql, args).await
    }

    /// Executes a statement and returns its rows.
    pub async fn query(&self, sql: &str, args: &[Value]) -> Result<Rows> {
        self.flush_pending_rollback().await?;
        self.query_unflushed(sql, args).await
    }

    /// Starts a transaction.
    ///
    /// The transaction borrows the handle mutably, so statements cannot be
    /// sent through the `Db` while it is open. If it is dropped before
    /// [`commit`](Transaction::commit) or [`rollback`](Transaction::rollback)
    /// is called, it is rolled back before the next statement.
    pub async fn transaction(&mut self) -> Result<Transaction<'_>> {
        self.flush_pending_rollback().await?;
        self.connection.transaction(TransactionOp::Start).await?;
        Ok(Transaction::new(self))
    }

    /// Runs `f` in a transaction, committing if it succeeds and rolling back
    /// if it fails.
    pub async fn in_transaction<O>(
        &mut self,
        f: impl AsyncFnOnce(&Transaction<'_>) -> Result<O>,
    ) -> Result<O> {
        let tx = self.transaction().await?;

        match f(&tx).await {
            Ok(res) => {
                tx.commit().await?;
                Ok(res)
            }
            Err(err) => {
                tx.rollback().await?;
                Err(err)
            }
        }
    }

    pub(crate) fn connection(&self) -> &Arc<dyn Connection> {
        &self.connection
    }

    pub(crate) fn schedule_rollback(&self) {
        self.pending_rollback.store(true, Ordering::Release);
    }

    async fn flush_pending_rollback(&self) -> Result<()> {
        if self.pending_rollback.swap(false, Ordering::AcqRel) {
            log::debug!("rolling back dropped transaction");
            self.connection.transaction(TransactionOp::Rollback).await?;
        }
        Ok(())
    }

    pub(crate) async fn exec_unflushed(&self, sql: &str, args: &[Value]) -> Result<ExecOutcome> {
        log::debug!("exec; sql={sql}; args={args:?}");
        self.connection.exec(sql, args).await
    }

    pub(crate) async fn query_unflushed(&self, sql: &str, args: &[Value]) -> Result<Rows> {
        log::debug!("query; sql={sql}; args={args:?}");
        self.connection.query(sql, args).await
    }
}

#[async_trait]
impl Session for Db {
    async fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecOutcome> {
        Db::exec(self, sql, args).await
    }

    async fn query(&self, sql: &str, args: &[Value]) -> Result<Rows> {
        Db::query(self, sql, args).await
    }

    fn registry(&self) -> &Registry {
        &self.registry
    }
}
