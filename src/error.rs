//! Error type for the fallible boot steps.
//!
//! None of these reach the user. `boot` logs them and moves on to the next
//! feature, so a broken widget never takes the rest of the page with it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// No global `window` (not running in a browser main thread).
    #[error("window is not available")]
    MissingWindow,

    /// The window has no `document`.
    #[error("document is not available")]
    MissingDocument,

    /// An element expected to be an `HTMLElement` is something else (SVG, MathML).
    #[error("#{0} is not an HTML element")]
    NotHtmlElement(String),

    /// A DOM call threw.
    #[error("javascript error: {0}")]
    Js(String),

    /// The nav-tree global did not decode as a list of nodes.
    #[error("nav tree decode failed: {0}")]
    NavTree(#[source] serde_json::Error),

    /// The config override global did not decode.
    #[error("config decode failed: {0}")]
    Config(#[source] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
