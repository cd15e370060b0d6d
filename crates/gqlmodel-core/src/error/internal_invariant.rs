use super::Error;

/// Error when the transformed schema fails its final consistency check.
///
/// This indicates a bug in the transform rather than in the input: every
/// generated type reference must resolve before the schema is printed.
#[derive(Debug)]
pub(super) struct InternalInvariant {
    message: Box<str>,
}

impl std::error::Error for InternalInvariant {}

impl core::fmt::Display for InternalInvariant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "internal invariant violated: {}", self.message)
    }
}

impl Error {
    /// Creates an internal invariant error.
    pub fn internal_invariant(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InternalInvariant(InternalInvariant {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an internal
    /// invariant error.
    pub fn is_internal_invariant(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InternalInvariant(_)))
    }
}
