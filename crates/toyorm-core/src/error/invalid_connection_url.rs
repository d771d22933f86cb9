use super::Error;

/// Error when a connection URL cannot be parsed or names no known driver.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrlError {
    reason: Box<str>,
}

impl std::error::Error for InvalidConnectionUrlError {}

impl core::fmt::Display for InvalidConnectionUrlError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid connection URL: {}", self.reason)
    }
}

impl Error {
    /// Creates an invalid connection URL error.
    ///
    /// Used by `Db::connect` when the scheme has no driver and by drivers
    /// that reject the rest of the URL.
    pub fn invalid_connection_url(reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(
            InvalidConnectionUrlError {
                reason: reason.into().into_boxed_str(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid connection URL error.
    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }
}
