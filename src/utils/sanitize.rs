/// Trims leading/trailing whitespace, then escapes markup-significant
/// characters so the value can be re-embedded in HTML, including inside
/// quoted attributes.
///
/// Not idempotent: escaping an already-escaped string escapes the ampersands
/// again. Callers apply it exactly once per field per request.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
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
