//! Sanitizers that turn untrusted strings into display- or filesystem-safe ones.

/// Escape HTML-reserved characters in `text`.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;` and
/// `&#x27;`. Absent or empty input yields an empty string.
///
/// Escaping twice double-escapes (`&lt;` becomes `&amp;lt;`), so escape once
/// right before rendering.
///
/// # Examples
///
/// ```
/// use sample_app::input::sanitize_input;
///
/// assert_eq!(
///     sanitize_input(Some("<script>alert('xss')</script>")),
///     "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
/// );
/// assert_eq!(sanitize_input(None), "");
/// ```
pub fn sanitize_input(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Reduce `text` to a bare, safe filename.
///
/// Everything up to the last `/` or `\` is dropped, then any character
/// outside `[A-Za-z0-9._-]` is removed.
///
/// # Examples
///
/// ```
/// use sample_app::input::sanitize_filename;
///
/// assert_eq!(sanitize_filename("../../../etc/passwd"), "passwd");
/// assert_eq!(sanitize_filename("file with spaces.txt"), "filewithspaces.txt");
/// ```
pub fn sanitize_filename(text: &str) -> String {
    let last_segment = text.rsplit(['/', '\\']).next().unwrap_or_default();

    last_segment
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}
