use super::Error;

/// Error when a directive is applied where it is not allowed.
///
/// This occurs when:
/// - `@model` is applied to something other than an object type
/// - `@connection` is declared on a field that takes arguments
/// - A directive is applied at a location its definition does not list
/// - A directive argument has the wrong shape
#[derive(Debug)]
pub(super) struct DirectiveMisuse {
    message: Box<str>,
}

impl std::error::Error for DirectiveMisuse {}

impl core::fmt::Display for DirectiveMisuse {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "directive misuse: {}", self.message)
    }
}

impl Error {
    /// Creates a directive misuse error.
    pub fn directive_misuse(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DirectiveMisuse(DirectiveMisuse {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a directive
    /// misuse error.
    pub fn is_directive_misuse(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::DirectiveMisuse(_)))
    }
}
