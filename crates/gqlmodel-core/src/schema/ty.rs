use std::fmt;

/// A reference to a type as written in a field, argument or input field
/// position.
///
/// Wrappers are kept structurally, the same way they appear in SDL:
///
/// ```text
/// String      →  Named("String")
/// [Post]      →  List(Named("Post"))
/// [Post!]!    →  NonNull(List(NonNull(Named("Post"))))
/// ```
///
/// The named type at the core of a reference is not required to exist when
/// the reference is built. References are resolved against a
/// [`TypeGraph`](super::TypeGraph) by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> TypeRef {
        TypeRef::Named(name.into())
    }

    pub fn list(self) -> TypeRef {
        TypeRef::List(Box::new(self))
    }

    /// Wraps `self` in a non-null wrapper. Already non-null references are
    /// returned unchanged.
    pub fn non_null(self) -> TypeRef {
        match self {
            TypeRef::NonNull(_) => self,
            ty => TypeRef::NonNull(Box::new(ty)),
        }
    }

    /// Returns the reference with a single outer non-null wrapper removed.
    pub fn nullable(&self) -> &TypeRef {
        match self {
            TypeRef::NonNull(inner) => inner,
            ty => ty,
        }
    }

    pub fn into_nullable(self) -> TypeRef {
        match self {
            TypeRef::NonNull(inner) => *inner,
            ty => ty,
        }
    }

    /// Returns `true` if the reference is a list once an outer non-null
    /// wrapper is removed.
    pub fn is_list(&self) -> bool {
        matches!(self.nullable(), TypeRef::List(_))
    }

    /// Returns the named type at the core of the reference.
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_sdl() {
        let ty = TypeRef::named("Post").non_null().list().non_null();
        assert_eq!(ty.to_string(), "[Post!]!");
        assert_eq!(ty.nullable().to_string(), "[Post!]");
        assert_eq!(ty.named_type(), "Post");
    }

    #[test]
    fn non_null_is_not_doubled() {
        let ty = TypeRef::named("ID").non_null().non_null();
        assert_eq!(ty.to_string(), "ID!");
    }

    #[test]
    fn is_list_looks_through_non_null() {
        assert!(TypeRef::named("Post").list().non_null().is_list());
        assert!(!TypeRef::named("Post").non_null().is_list());
    }
}
