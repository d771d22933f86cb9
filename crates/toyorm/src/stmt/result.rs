use crate::{Error, Result};

use toyorm_core::driver::ExecOutcome;

/// The result of executing an insert.
///
/// Holds either the driver's outcome or the error that prevented the statement
/// from being built or executed. The accessors return that error.
#[derive(Debug, Clone)]
pub struct ExecResult {
    res: Result<ExecOutcome>,
}

impl ExecResult {
    pub fn new(res: Result<ExecOutcome>) -> Self {
        Self { res }
    }

    /// Number of rows the statement affected.
    pub fn rows_affected(&self) -> Result<u64> {
        self.res
            .as_ref()
            .map(|outcome| outcome.rows_affected)
            .map_err(Clone::clone)
    }

    /// Row id generated by the insert.
    pub fn last_insert_id(&self) -> Result<i64> {
        let outcome = self.res.as_ref().map_err(Clone::clone)?;
        outcome
            .last_insert_id
            .ok_or_else(|| toyorm_core::err!("driver did not report a last insert id"))
    }

    /// The error, if the statement failed.
    pub fn err(&self) -> Option<&Error> {
        self.res.as_ref().err()
    }

    pub fn is_ok(&self) -> bool {
        self.res.is_ok()
    }

    pub fn into_result(self) -> Result<ExecOutcome> {
        self.res
    }
}

impl From<Result<ExecOutcome>> for ExecResult {
    fn from(res: Result<ExecOutcome>) -> Self {
        Self::new(res)
    }
}
