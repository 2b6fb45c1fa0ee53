//! Markup escaping for untrusted upstream text.
//!
//! Usernames, status text, and activity titles all come from accounts we
//! do not control; every one of them is escaped before it is embedded in
//! the SVG output.

/// Escapes `& < > " '` to their named entities. All other characters pass
/// through unchanged; `None` and empty input yield an empty string.
///
/// Single-pass only: applying this twice re-escapes entities (`&amp;`
/// becomes `&amp;amp;`), so callers must escape exactly once.
pub fn escape(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
