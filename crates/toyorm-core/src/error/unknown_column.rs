use super::Error;

/// Error when a column or field name is not part of the model.
///
/// Raised when a predicate references an unknown field and when a result set
/// returns a column the model does not map.
#[derive(Debug)]
pub(super) struct UnknownColumnError {
    name: Box<str>,
}

impl std::error::Error for UnknownColumnError {}

impl core::fmt::Display for UnknownColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown column: {}", self.name)
    }
}

impl Error {
    /// Creates an unknown column error.
    pub fn unknown_column(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownColumn(UnknownColumnError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown column error.
    pub fn is_unknown_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownColumn(_))
    }
}
