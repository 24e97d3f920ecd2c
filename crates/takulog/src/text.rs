//! String helpers: escaping, presence normalization, placeholders.

/// Placeholder for a missing inline value.
pub const DASH: &str = "—";
/// Placeholder for an unfilled sheet section.
pub const UNREGISTERED: &str = "未登録";

/// Escapes the five HTML-significant characters.
///
/// Every data-derived string that ends up inside raw markup (multiline
/// bodies rendered through `inner_html`) must pass through here; there is
/// no sanitizer beyond this.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

/// Normalizes an optional field to "present": trimmed and non-empty.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Escapes a free-form text block and turns line breaks into `<br>`.
///
/// Sheets imported from spreadsheets carry both `\r\n` and the literal
/// two-character sequence `\n`, so both are normalized first.
pub fn multiline_html(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace("\\n", "\n");
    escape_html(&normalized).replace('\n', "<br>")
}
