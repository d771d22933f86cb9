#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Start a transaction
    Start,

    /// Commit a transaction
    Commit,

    /// Rollback a transaction
    Rollback,
}

impl Transaction {
    /// The SQL statement for this operation.
    pub fn sql(&self) -> &'static str {
        match self {
            Transaction::Start => "BEGIN",
            Transaction::Commit => "COMMIT",
            Transaction::Rollback => "ROLLBACK",
        }
    }
}
