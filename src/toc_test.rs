use super::*;

fn h(level: u8, text: &str) -> Heading {
    Heading { level, text: text.into(), id: None }
}

fn h_with_id(level: u8, text: &str, id: &str) -> Heading {
    Heading { level, text: text.into(), id: Some(id.into()) }
}

fn ids(entries: &[TocEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.id.as_str()).collect()
}

// =============================================================
// build_toc
// =============================================================

#[test]
fn build_toc_slugifies_missing_ids() {
    let entries = build_toc(&[h(2, "Getting Started!")]);
    assert_eq!(
        entries,
        vec![TocEntry { id: "getting-started".into(), text: "Getting Started!".into(), depth: 2, derived: true }]
    );
}

#[test]
fn build_toc_keeps_document_order_and_depth() {
    let entries = build_toc(&[h(2, "Install"), h(3, "From source"), h(3, "From crates"), h(2, "Usage")]);
    assert_eq!(ids(&entries), ["install", "from-source", "from-crates", "usage"]);
    let depths: Vec<u8> = entries.iter().map(|entry| entry.depth).collect();
    assert_eq!(depths, [2, 3, 3, 2]);
}

#[test]
fn build_toc_keeps_existing_ids() {
    let entries = build_toc(&[h_with_id(2, "Overview", "intro"), h(2, "Details")]);
    assert_eq!(ids(&entries), ["intro", "details"]);
    assert!(!entries[0].derived);
    assert!(entries[1].derived);
}

#[test]
fn build_toc_treats_empty_id_as_missing() {
    let entries = build_toc(&[h_with_id(2, "Overview", "")]);
    assert_eq!(ids(&entries), ["overview"]);
    assert!(entries[0].derived);
}

#[test]
fn build_toc_deduplicates_derived_ids() {
    let entries = build_toc(&[h(2, "Example"), h(3, "Example"), h(3, "Example")]);
    assert_eq!(ids(&entries), ["example", "example-2", "example-3"]);
}

#[test]
fn build_toc_avoids_ids_already_on_the_page() {
    let entries = build_toc(&[h(2, "Usage"), h_with_id(2, "Later", "usage")]);
    assert_eq!(ids(&entries), ["usage-2", "usage"]);
}

#[test]
fn build_toc_falls_back_when_slug_is_empty() {
    let entries = build_toc(&[h(2, "Intro"), h(2, "???")]);
    assert_eq!(ids(&entries), ["intro", "section-2"]);
}

#[test]
fn build_toc_trims_text_and_ignores_other_levels() {
    let entries = build_toc(&[h(1, "Title"), h(2, "  Spaced  "), h(4, "Deep")]);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Spaced");
    assert_eq!(entries[0].id, "spaced");
}

#[test]
fn build_toc_empty_input() {
    assert!(build_toc(&[]).is_empty());
}

// =============================================================
// render_toc
// =============================================================

#[test]
fn render_toc_placeholder_when_empty() {
    assert_eq!(render_toc(&[]), EMPTY_TOC_HTML);
    assert!(!render_toc(&[]).contains("<ul"));
}

#[test]
fn render_toc_links_each_entry_with_depth() {
    let html = render_toc(&build_toc(&[h(2, "Install"), h(3, "From source")]));
    assert_eq!(
        html,
        concat!(
            r#"<ul class="toc-list">"#,
            r##"<li class="toc-item toc-depth-2"><a href="#install" data-depth="2">Install</a></li>"##,
            r##"<li class="toc-item toc-depth-3"><a href="#from-source" data-depth="3">From source</a></li>"##,
            "</ul>",
        )
    );
}

#[test]
fn render_toc_escapes_text_and_ids() {
    let html = render_toc(&build_toc(&[h_with_id(2, "<T> & \"U\"", "a\"b")]));
    assert!(html.contains(r##"href="#a&quot;b""##));
    assert!(html.contains("&lt;T&gt; &amp; &quot;U&quot;"));
    assert!(!html.contains("<T>"));
}

// =============================================================
// reserved page ids
// =============================================================

fn page_ids() -> HashSet<String> {
    crate::config::UiConfig::default().element_ids().into_iter().map(str::to_owned).collect()
}

#[test]
fn derived_ids_skip_page_element_ids() {
    let entries = build_toc_reserving(&[h(2, "TOC"), h(2, "Content"), h(3, "Topbar")], &page_ids());
    assert_eq!(ids(&entries), ["toc-2", "content-2", "topbar-2"]);
}

#[test]
fn reserved_ids_do_not_rename_existing_heading_ids() {
    let entries = build_toc_reserving(&[h_with_id(2, "Contents", "toc")], &page_ids());
    assert_eq!(ids(&entries), ["toc"]);
    assert!(!entries[0].derived);
}

#[test]
fn build_toc_reserves_nothing_beyond_headings() {
    assert_eq!(ids(&build_toc(&[h(2, "TOC")])), ["toc"]);
}
