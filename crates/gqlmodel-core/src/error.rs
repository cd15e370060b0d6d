mod adhoc;
mod directive_misuse;
mod internal_invariant;
mod invalid_schema;
mod type_resolution;

use adhoc::AdhocError;
use directive_misuse::DirectiveMisuse;
use internal_invariant::InternalInvariant;
use invalid_schema::InvalidSchema;
use std::sync::Arc;
use type_resolution::TypeResolution;

/// Builds an ad-hoc error from format arguments.
///
/// Mostly used as the consequent passed to [`Error::context`].
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while transforming a schema.
///
/// Every error is fatal for the transform invocation that produced it: no
/// partial schema is returned alongside an error.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        match err.inner.as_mut().and_then(Arc::get_mut) {
            Some(inner) if inner.cause.is_none() => inner.cause = Some(self),
            // The consequent is shared or already chained; wrap instead of mutating it.
            _ => {
                return Error {
                    inner: Some(Arc::new(ErrorInner {
                        kind: ErrorKind::Adhoc(AdhocError::new(err.to_string())),
                        cause: Some(self),
                    })),
                }
            }
        }

        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns `true` if any error in the chain satisfies `f`.
    fn any_in_chain(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .as_ref()
            .and_then(|inner| inner.cause.as_ref())
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    DirectiveMisuse(DirectiveMisuse),
    TypeResolution(TypeResolution),
    InternalInvariant(InternalInvariant),
    InvalidSchema(InvalidSchema),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            DirectiveMisuse(err) => core::fmt::Display::fmt(err, f),
            TypeResolution(err) => core::fmt::Display::fmt(err, f),
            InternalInvariant(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown gqlmodel error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
