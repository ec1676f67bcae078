//! URL safety filter for link and image targets.

/// Whether a link or image target may be emitted as an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSafety {
    Safe,
    Unsafe,
}

impl UrlSafety {
    #[must_use]
    pub fn is_safe(self) -> bool {
        matches!(self, UrlSafety::Safe)
    }
}

/// Prefixes accepted without further inspection.
const ALLOWED_PREFIXES: [&str; 4] = ["#", "http://", "https://", "mailto:"];

/// Classifies a link or image target.
///
/// Fragments, `http`, `https` and `mailto` are safe. Anything else whose text
/// before the first `:` is all letters looks like a scheme (`javascript:`,
/// `data:`, `file:`) and is unsafe. Relative paths are safe.
///
/// Classification only: callers emit the target in its original case.
pub fn classify_url(url: &str) -> UrlSafety {
    let normalized = normalize(url);

    if ALLOWED_PREFIXES.iter().any(|p| normalized.starts_with(p)) {
        return UrlSafety::Safe;
    }

    match normalized.split_once(':') {
        Some((scheme, _)) if scheme.chars().all(char::is_alphabetic) => UrlSafety::Unsafe,
        _ => UrlSafety::Safe,
    }
}

/// Lower-cases and trims the target the way a browser reads a scheme:
/// leading/trailing whitespace and control characters are ignored, and tabs
/// and newlines are ignored anywhere.
fn normalize(url: &str) -> String {
    url.trim_matches(|c: char| c.is_whitespace() || c.is_control())
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .flat_map(char::to_lowercase)
        .collect()
}
