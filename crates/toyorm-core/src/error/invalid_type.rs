use super::Error;

/// Error when a type cannot be used as a model.
///
/// This occurs when the type's schema descriptor:
/// - has no type name
/// - declares no fields
/// - declares two fields with the same name, or two fields that map to the
///   same column
#[derive(Debug)]
pub(super) struct InvalidTypeError {
    type_name: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidTypeError {}

impl core::fmt::Display for InvalidTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid model type `{}`: {}",
            self.type_name, self.reason
        )
    }
}

impl Error {
    /// Creates an invalid type error for the named type.
    pub fn invalid_type(type_name: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidType(InvalidTypeError {
            type_name: type_name.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid type error.
    pub fn is_invalid_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidType(_))
    }
}
