/// Outcome of a statement that returns no rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Number of rows inserted, updated or deleted
    pub rows_affected: u64,

    /// Row id generated by the last insert, if the backend reports one
    pub last_insert_id: Option<i64>,
}

impl ExecOutcome {
    pub fn new(rows_affected: u64, last_insert_id: Option<i64>) -> Self {
        Self {
            rows_affected,
            last_insert_id,
        }
    }

    pub fn count(rows_affected: u64) -> Self {
        Self::new(rows_affected, None)
    }
}
