//! Accordion navigation tree for the mobile drawer.
//!
//! ARCHITECTURE
//! ============
//! [`render_nav`] is a pure function from the nav tree to an HTML string; the
//! browser shell only assigns that string to the drawer mount and installs a
//! single delegated click listener. Each branch pairs its toggle button and
//! panel through a shared `acc-<hash>` id derived from the branch URL.
//!
//! Sections toggle independently. Opening one never closes its siblings.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use serde::Deserialize;

use crate::error::UiError;
use crate::markup::escape_html;

/// One page or section in the site hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavNode {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub children: Vec<NavNode>,
}

impl NavNode {
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Decode the nav tree global (a JSON array of nodes).
///
/// # Errors
///
/// Returns [`UiError::NavTree`] if `json` is not an array of nodes.
pub fn parse_nav_tree(json: &str) -> Result<Vec<NavNode>, UiError> {
    serde_json::from_str(json).map_err(UiError::NavTree)
}

/// Order-dependent 31-multiplier hash over UTF-16 code units, wrapping at 32 bits.
pub fn url_hash(url: &str) -> i32 {
    url.encode_utf16()
        .fold(0_i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Id pairing a branch's toggle button with its panel.
pub fn accordion_id(url: &str) -> String {
    format!("acc-{}", url_hash(url).unsigned_abs())
}

/// Render the whole tree, top-level nodes at depth 0.
pub fn render_nav(nodes: &[NavNode]) -> String {
    let mut html = String::new();
    for node in nodes {
        render_node(&mut html, node, 0);
    }
    html
}

fn render_node(html: &mut String, node: &NavNode, depth: usize) {
    let nested = if depth > 0 { " nav-nested" } else { "" };
    let title = escape_html(&node.title);
    let url = escape_html(&node.url);

    if !node.is_branch() {
        html.push_str(&format!(r#"<a class="nav-link{nested}" href="{url}">{title}</a>"#));
        return;
    }

    let id = escape_html(&accordion_id(&node.url));
    html.push_str(&format!(
        concat!(
            r#"<div class="nav-section{nested}">"#,
            r#"<button type="button" class="nav-toggle" data-accordion-toggle="{id}" aria-expanded="false">{title}</button>"#,
            r#"<div class="nav-panel" data-accordion-panel="{id}" data-expanded="false">"#,
            r#"<a class="nav-link nav-overview" href="{url}">Overview</a>"#,
        ),
        nested = nested,
        id = id,
        title = title,
        url = url,
    ));
    for child in &node.children {
        render_node(html, child, depth + 1);
    }
    html.push_str("</div></div>");
}

/// Next value for an `aria-expanded` / `data-expanded` attribute.
pub fn flip_expanded(current: Option<&str>) -> &'static str {
    if current == Some("true") { "false" } else { "true" }
}

/// Render the nav tree global into the drawer and wire the accordion toggles.
#[cfg(feature = "hydrate")]
pub fn install(document: &web_sys::Document, config: &crate::config::UiConfig) -> Result<(), UiError> {
    use wasm_bindgen::JsCast;
    use web_sys::{Element, Event};

    let Some(mount) = document.get_element_by_id(&config.drawer_nav_id) else {
        log::debug!("no #{} on page; nav tree not rendered", config.drawer_nav_id);
        return Ok(());
    };
    let Some(json) = crate::boot::global_json(&config.nav_global) else {
        log::debug!("no {} global; nav tree not rendered", config.nav_global);
        return Ok(());
    };
    let nodes = parse_nav_tree(&json)?;
    mount.set_inner_html(&render_nav(&nodes));

    let scope = mount.clone();
    crate::boot::listen(&mount, "click", move |event: Event| {
        let Some(target) = event.target() else {
            return;
        };
        let Some(target) = target.dyn_ref::<Element>() else {
            return;
        };
        let Some(button) = closest(target, "[data-accordion-toggle]") else {
            return;
        };
        let Some(id) = button.get_attribute("data-accordion-toggle") else {
            return;
        };
        let next = flip_expanded(button.get_attribute("aria-expanded").as_deref());
        if let Err(err) = button.set_attribute("aria-expanded", next) {
            log::warn!("accordion toggle not updated: {err:?}");
        }
        let selector = format!(r#"[data-accordion-panel="{id}"]"#);
        match scope.query_selector(&selector) {
            Ok(Some(panel)) => {
                if let Err(err) = panel.set_attribute("data-expanded", next) {
                    log::warn!("accordion panel not updated: {err:?}");
                }
            }
            Ok(None) => log::debug!("accordion {id} has no panel"),
            Err(err) => log::warn!("accordion panel lookup failed: {err:?}"),
        }
    })
}

#[cfg(feature = "hydrate")]
fn closest(el: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    match el.closest(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("closest({selector}) failed: {err:?}");
            None
        }
    }
}
