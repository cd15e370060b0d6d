use super::Error;

/// Error when the input document is not an acceptable schema.
///
/// This occurs when:
/// - The document fails to parse as GraphQL SDL
/// - A type name is defined more than once
/// - The document contains `schema` definitions or type extensions
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid
    /// schema error.
    pub fn is_invalid_schema(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InvalidSchema(_)))
    }
}
