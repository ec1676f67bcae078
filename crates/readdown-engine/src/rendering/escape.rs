use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'` so the text is safe both between tags
/// and inside a double-quoted attribute.
///
/// Borrows when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}
