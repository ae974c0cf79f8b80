use super::*;

// =============================================================
// escape_html
// =============================================================

#[test]
fn escape_html_replaces_all_special_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
}

#[test]
fn escape_html_leaves_plain_text_alone() {
    assert_eq!(escape_html("Getting Started"), "Getting Started");
    assert_eq!(escape_html(""), "");
    assert_eq!(escape_html("naïve café ✓"), "naïve café ✓");
}

#[test]
fn escape_html_output_has_no_raw_markup_characters() {
    let samples = [
        "<script>alert('x')</script>",
        "a && b",
        "\"quoted\"",
        "&amp; already escaped",
        "<<>>''\"\"&&",
        "/docs/?a=1&b=<2>",
    ];
    for sample in samples {
        let escaped = escape_html(sample);
        assert!(!escaped.contains('<'), "{escaped}");
        assert!(!escaped.contains('>'), "{escaped}");
        assert!(!escaped.contains('"'), "{escaped}");
        assert!(!escaped.contains('\''), "{escaped}");
        for (pos, _) in escaped.match_indices('&') {
            let tail = &escaped[pos..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                    .iter()
                    .any(|entity| tail.starts_with(entity)),
                "bare ampersand in {escaped}"
            );
        }
        assert_eq!(unescape_html(&escaped), sample);
    }
}

#[test]
fn escape_html_double_escapes_existing_entities() {
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
}

// =============================================================
// unescape_html
// =============================================================

#[test]
fn unescape_html_keeps_unknown_entities() {
    assert_eq!(unescape_html("&nbsp;&amp;"), "&nbsp;&");
    assert_eq!(unescape_html("trailing &"), "trailing &");
}

// =============================================================
// slugify
// =============================================================

#[test]
fn slugify_strips_punctuation_and_hyphenates() {
    assert_eq!(slugify("Getting Started!"), "getting-started");
}

#[test]
fn slugify_trims_and_collapses_whitespace() {
    assert_eq!(slugify("  Install   the  CLI \n"), "install-the-cli");
    assert_eq!(slugify("Tabs\tand\nnewlines"), "tabs-and-newlines");
}

#[test]
fn slugify_keeps_word_characters_and_hyphens() {
    assert_eq!(slugify("snake_case and kebab-case"), "snake_case-and-kebab-case");
    assert_eq!(slugify("Step 2: Configure"), "step-2-configure");
}

#[test]
fn slugify_does_not_split_runs_on_dropped_characters() {
    assert_eq!(slugify("Q & A"), "q-a");
}

#[test]
fn slugify_strips_after_trimming() {
    assert_eq!(slugify("Hello !"), "hello-");
}

#[test]
fn slugify_drops_non_ascii_letters() {
    assert_eq!(slugify("Café Menu"), "caf-menu");
    assert_eq!(slugify("!!!"), "");
}
