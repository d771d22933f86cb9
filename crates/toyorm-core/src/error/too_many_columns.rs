use super::Error;

/// Error when a result set has more columns than the model has fields.
#[derive(Debug)]
pub(super) struct TooManyColumnsError {
    columns: usize,
    fields: usize,
}

impl std::error::Error for TooManyColumnsError {}

impl core::fmt::Display for TooManyColumnsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "too many columns: result has {} columns but the model has {} fields",
            self.columns, self.fields
        )
    }
}

impl Error {
    /// Creates a too many columns error.
    pub fn too_many_columns(columns: usize, fields: usize) -> Error {
        Error::from(super::ErrorKind::TooManyColumns(TooManyColumnsError {
            columns,
            fields,
        }))
    }

    /// Returns `true` if this error is a too many columns error.
    pub fn is_too_many_columns(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TooManyColumns(_))
    }
}
