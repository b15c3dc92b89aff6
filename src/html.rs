//! Charset declarations in HTML documents and Content-Type values.
//!
//! Neither function validates the extracted label against the alias
//! table; callers pass it to [`Charset::for_label`](crate::Charset::for_label)
//! or [`decode_to_string`](crate::decode_to_string) and handle the
//! unsupported-charset error there.

use std::sync::LazyLock;

use regex::Regex;

/// Matches the charset attribute of an HTML `<meta>` tag, in both the
/// HTML 4.01 (`http-equiv` + `content="...; charset=..."`) and HTML 5
/// (`<meta charset="...">`) forms.  Compiled once, reused by every call.
static META_TAG_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta.*charset="?\s*(?P<charset>[a-zA-Z0-9_.:-]+)\s*"?"#)
        .expect("meta charset pattern is valid")
});

/// Looks for a charset declared in an HTML `<meta>` tag.
///
/// Returns the first declaration's value verbatim -- original case, not
/// validated.  `None` if the document declares nothing.
///
/// This is a single regular-expression scan over raw text, not an HTML
/// parser: a declaration-shaped substring inside a comment or a script
/// will also match.  That imprecision is accepted; the caller's charset
/// lookup is the real gatekeeper.
///
/// ```
/// let html = "<html><head><meta charset=\"ISO-8859-1\"></head>";
/// assert_eq!(mailcharset::find_charset_in_html(html), Some("ISO-8859-1"));
/// assert_eq!(mailcharset::find_charset_in_html("<html><head></head>"), None);
/// ```
pub fn find_charset_in_html(html: &str) -> Option<&str> {
    META_TAG_CHARSET
        .captures(html)
        .and_then(|caps| caps.name("charset"))
        .map(|m| m.as_str())
}

/// Extracts the `charset` parameter from a `Content-Type` header value.
///
/// The value is returned verbatim, with optional straight double quotes
/// stripped.  `None` when the parameter is absent or empty.
///
/// ```
/// use mailcharset::charset_in_content_type;
///
/// assert_eq!(charset_in_content_type("text/html; charset=utf-8"), Some("utf-8"));
/// assert_eq!(charset_in_content_type("text/html; charset=\"UTF-8\""), Some("UTF-8"));
/// assert_eq!(charset_in_content_type("application/json"), None);
/// ```
pub fn charset_in_content_type(content_type: &str) -> Option<&str> {
    let lower = content_type.to_ascii_lowercase();
    let idx = lower.find("charset=")?;
    let value = content_type.get(idx + 8..)?;
    let value = value.trim_start_matches('"');
    let end = value
        .find(|c: char| c == '"' || c == ';' || c.is_ascii_whitespace())
        .unwrap_or(value.len());
    if end == 0 {
        return None;
    }
    value.get(..end)
}
