/// Substitutes `{{name}}` placeholders in `template`.
///
/// Templates are static text; a placeholder left without a value is a bug in
/// the caller.
pub(crate) fn render(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = template.trim().to_string();

    for (name, value) in params {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }

    debug_assert!(!out.contains("{{"), "unsubstituted placeholder in\n{out}");
    out
}
