use super::Error;

/// Error when an insert statement is built without any rows.
#[derive(Debug)]
pub(super) struct EmptyValuesError;

impl std::error::Error for EmptyValuesError {}

impl core::fmt::Display for EmptyValuesError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no values to insert")
    }
}

impl Error {
    /// Creates an empty values error.
    pub fn empty_values() -> Error {
        Error::from(super::ErrorKind::EmptyValues(EmptyValuesError))
    }

    /// Returns `true` if this error is an empty values error.
    pub fn is_empty_values(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyValues(_))
    }
}
