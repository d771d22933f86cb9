use crate::{driver::Transaction as TransactionOp, Db, Result, Session};

use toyorm_core::{
    async_trait,
    driver::{ExecOutcome, Rows},
    schema::Registry,
    stmt::Value,
};

/// An open transaction.
///
/// Statements run through the transaction, or through builders created from
/// it, are part of the transaction. It must be finished with
/// [`commit`](Self::commit) or [`rollback`](Self::rollback); if it is dropped
/// first, the `Db` rolls it back before running its next statement.
///
/// Borrows `&mut Db` for its lifetime, so the handle that started the
/// transaction cannot send statements outside of it.
#[derive(Debug)]
pub struct Transaction<'a> {
    db: &'a mut Db,

    /// Set once the transaction was committed or rolled back
    finished: bool,
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(db: &'a mut Db) -> Self {
        Self {
            db,
            finished: false,
        }
    }

    pub async fn commit(mut self) -> Result<()> {
        self.finish(TransactionOp::Commit).await
    }

    pub async fn rollback(mut self) -> Result<()> {
        self.finish(TransactionOp::Rollback).await
    }

    /// Executes a statement that returns no rows.
    pub async fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecOutcome> {
        self.db.exec_unflushed(sql, args).await
    }

    /// Executes a statement and returns its rows.
    pub async fn query(&self, sql: &str, args: &[Value]) -> Result<Rows> {
        self.db.query_unflushed(sql, args).await
    }

    // A failed commit leaves `finished` unset, so the rollback on drop still
    // closes the transaction.
    async fn finish(&mut self, op: TransactionOp) -> Result<()> {
        self.db.connection().transaction(op).await?;
        self.finished = true;
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished {
            log::warn!("transaction dropped without commit or rollback; rolling back");
            self.db.schedule_rollback();
        }
    }
}

#[async_trait]
impl Session for Transaction<'_> {
    async fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecOutcome> {
        Transaction::exec(self, sql, args).await
    }

    async fn query(&self, sql: &str, args: &[Value]) -> Result<Rows> {
        Transaction::query(self, sql, args).await
    }

    fn registry(&self) -> &Registry {
        self.db.registry()
    }
}
