//! In-page table of contents built from `h2` / `h3` headings.

#[cfg(test)]
#[path = "toc_test.rs"]
mod toc_test;

use std::collections::HashSet;

use crate::markup::{escape_html, slugify};

/// Placeholder shown when the page has no sections.
pub const EMPTY_TOC_HTML: &str = r#"<p class="toc-empty">No sections on this page.</p>"#;

/// A heading as scanned from the content container, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 2 for `h2`, 3 for `h3`.
    pub level: u8,
    pub text: String,
    /// Existing `id` attribute; empty strings count as missing.
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    pub depth: u8,
    /// The heading had no id and `id` was derived here.
    pub derived: bool,
}

/// Build entries for every level-2/3 heading, deriving ids where missing.
///
/// Existing ids are kept verbatim. Derived ids come from [`slugify`] and are
/// suffixed `-2`, `-3`, ... when already taken by a heading; a heading whose
/// text slugifies to nothing gets `section-N` (its 1-based position).
pub fn build_toc(headings: &[Heading]) -> Vec<TocEntry> {
    build_toc_reserving(headings, &HashSet::new())
}

/// [`build_toc`], but derived ids also skip `reserved`: ids held by other
/// elements on the page, such as the TOC mount or the content container.
pub fn build_toc_reserving(headings: &[Heading], reserved: &HashSet<String>) -> Vec<TocEntry> {
    let mut used: HashSet<String> = reserved.clone();
    used.extend(headings.iter().filter_map(existing_id).map(str::to_owned));

    headings
        .iter()
        .filter(|heading| matches!(heading.level, 2 | 3))
        .enumerate()
        .map(|(index, heading)| {
            let text = heading.text.trim().to_owned();
            if let Some(id) = existing_id(heading) {
                return TocEntry { id: id.to_owned(), text, depth: heading.level, derived: false };
            }
            let mut base = slugify(&text);
            if base.is_empty() {
                base = format!("section-{}", index + 1);
            }
            let id = unique_id(&base, &used);
            used.insert(id.clone());
            TocEntry { id, text, depth: heading.level, derived: true }
        })
        .collect()
}

fn existing_id(heading: &Heading) -> Option<&str> {
    heading.id.as_deref().filter(|id| !id.is_empty())
}

fn unique_id(base: &str, used: &HashSet<String>) -> String {
    if !used.contains(base) {
        return base.to_owned();
    }
    (2_usize..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or_else(|| base.to_owned())
}

/// Render entries as a jump list, or the placeholder when there are none.
pub fn render_toc(entries: &[TocEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_TOC_HTML.to_owned();
    }
    let mut html = String::from(r#"<ul class="toc-list">"#);
    for entry in entries {
        html.push_str(&format!(
            r##"<li class="toc-item toc-depth-{depth}"><a href="#{id}" data-depth="{depth}">{text}</a></li>"##,
            depth = entry.depth,
            id = escape_html(&entry.id),
            text = escape_html(&entry.text),
        ));
    }
    html.push_str("</ul>");
    html
}

/// Scan the content headings, persist derived ids, and render the TOC.
///
/// The mount is resolved before any heading id changes, and derived ids
/// avoid every id already in the document.
#[cfg(feature = "hydrate")]
pub fn install(document: &web_sys::Document, config: &crate::config::UiConfig) -> Result<(), crate::error::UiError> {
    use wasm_bindgen::JsCast;
    use web_sys::Element;

    let Some(content) = document.get_element_by_id(&config.content_id) else {
        log::debug!("no #{} on page; table of contents disabled", config.content_id);
        return Ok(());
    };
    let mount = document.get_element_by_id(&config.toc_id);

    let elements = |list: web_sys::NodeList| -> Vec<Element> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect()
    };
    let mut reserved: HashSet<String> = elements(document.query_selector_all("[id]")?)
        .iter()
        .map(Element::id)
        .filter(|id| !id.is_empty())
        .collect();
    reserved.extend(config.element_ids().into_iter().map(str::to_owned));

    let heading_elements = elements(content.query_selector_all("h2, h3")?);
    let headings: Vec<Heading> = heading_elements
        .iter()
        .map(|el| Heading {
            level: if el.tag_name().eq_ignore_ascii_case("h2") { 2 } else { 3 },
            text: el.text_content().unwrap_or_default(),
            id: Some(el.id()),
        })
        .collect();

    let entries = build_toc_reserving(&headings, &reserved);
    for (el, entry) in heading_elements.iter().zip(&entries) {
        if entry.derived {
            el.set_id(&entry.id);
        }
    }

    match mount {
        Some(mount) => mount.set_inner_html(&render_toc(&entries)),
        None => log::debug!("no #{} on page; heading ids assigned without a list", config.toc_id),
    }
    Ok(())
}
