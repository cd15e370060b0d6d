use super::Error;

/// Error when a type referenced by name cannot be resolved.
///
/// Raised for references to undefined types in the input document, for
/// `@connection` targets that are not models, and for foreign keys whose
/// owning type or input type is missing.
#[derive(Debug)]
pub(super) struct TypeResolution {
    message: Box<str>,
}

impl std::error::Error for TypeResolution {}

impl core::fmt::Display for TypeResolution {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "type resolution failed: {}", self.message)
    }
}

impl Error {
    /// Creates a type resolution error.
    pub fn type_resolution(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeResolution(TypeResolution {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a type
    /// resolution error.
    pub fn is_type_resolution(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::TypeResolution(_)))
    }
}
