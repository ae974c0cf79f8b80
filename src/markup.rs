//! String helpers for building HTML fragments.
//!
//! Everything inserted into `innerHTML` by this crate passes through
//! [`escape_html`], whether it lands in text or in a quoted attribute value.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

/// Escape `&`, `<`, `>`, `"` and `'` so the result is inert in text and in
/// double- or single-quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const ENTITIES: [(&str, char); 5] = [("&amp;", '&'), ("&lt;", '<'), ("&gt;", '>'), ("&quot;", '"'), ("&#39;", '\'')];

/// Inverse of [`escape_html`]. Unknown entities are left as-is.
pub fn unescape_html(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Turn heading text into a fragment identifier.
///
/// Lowercases and trims, drops anything that is not an ASCII word character,
/// whitespace or `-`, then collapses each whitespace run into a single `-`.
/// Trimming happens before stripping, so `"Hello !"` becomes `"hello-"`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_space = false;
    for ch in lowered.trim().chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
            continue;
        }
        // Dropped characters do not end a whitespace run.
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            slug.push(ch);
            in_space = false;
        }
    }
    slug
}
