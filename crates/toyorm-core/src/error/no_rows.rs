use super::Error;

/// Error when a query that must return a record returns nothing.
#[derive(Debug)]
pub(super) struct NoRowsError;

impl std::error::Error for NoRowsError {}

impl core::fmt::Display for NoRowsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no rows found")
    }
}

impl Error {
    /// Creates a no rows error.
    pub fn no_rows() -> Error {
        Error::from(super::ErrorKind::NoRows(NoRowsError))
    }

    /// Returns `true` if this error is a no rows error.
    pub fn is_no_rows(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoRows(_))
    }
}
