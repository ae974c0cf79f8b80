//! Keeps `--topbar-height` on `<html>` equal to the rendered top bar height.

#[cfg(test)]
#[path = "topbar_test.rs"]
mod topbar_test;

pub const TOPBAR_HEIGHT_PROPERTY: &str = "--topbar-height";

/// CSS value for a measured height; negative readings clamp to zero.
pub fn height_value(height_px: i32) -> String {
    format!("{}px", height_px.max(0))
}

/// Measure now and again on every window resize.
#[cfg(feature = "hydrate")]
pub fn install(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &crate::config::UiConfig,
) -> Result<(), crate::error::UiError> {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    let Some(topbar) = document.get_element_by_id(&config.topbar_id) else {
        log::debug!("no #{} on page; top bar height not tracked", config.topbar_id);
        return Ok(());
    };
    let Some(root) = document.document_element() else {
        return Err(crate::error::UiError::MissingDocument);
    };
    let (Some(topbar), Some(root)) = (topbar.dyn_ref::<HtmlElement>().cloned(), root.dyn_ref::<HtmlElement>().cloned())
    else {
        log::debug!("top bar or root is not an HTML element; height not tracked");
        return Ok(());
    };

    let sync = move || {
        let value = height_value(topbar.offset_height());
        if let Err(err) = root.style().set_property(TOPBAR_HEIGHT_PROPERTY, &value) {
            log::warn!("{TOPBAR_HEIGHT_PROPERTY} not updated: {err:?}");
        }
    };
    sync();
    crate::boot::listen(window, "resize", move |_event| sync())
}
