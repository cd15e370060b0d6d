//! Identifier helpers used when deriving generated type and field names.
//!
//! Both helpers only touch the first character or append a suffix.

/// Lower-cases the first character: `PostBlogId` becomes `postBlogId`.
pub fn camel_case(src: &str) -> String {
    let mut chars = src.chars();

    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Naive plural: appends `s`.
///
/// `Category` becomes `Categorys`; generated operation names such as
/// `listCategorys` depend on this.
pub fn pluralize(singular: &str) -> String {
    format!("{singular}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_lowers_first_char_only() {
        assert_eq!(camel_case("PostBlogId"), "postBlogId");
        assert_eq!(camel_case("URLLink"), "uRLLink");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn pluralize_appends_suffix() {
        assert_eq!(pluralize("Blog"), "Blogs");
        assert_eq!(pluralize("Category"), "Categorys");
    }
}
