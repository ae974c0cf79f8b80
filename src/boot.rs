//! WASM entry point and the small amount of glue every feature shares.
//!
//! Each feature installs independently. A failure is logged and the next
//! feature still installs, so one missing widget never disables the rest.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::{drawer, menu, nav, theme, toc, topbar};

/// Register `handler` for `event` on `target` for the lifetime of the page.
///
/// # Errors
///
/// Returns [`UiError::Js`] if `addEventListener` throws.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    // Listeners live as long as the page; there is no teardown.
    callback.forget();
    Ok(())
}

/// Read a global by name and re-serialize it as JSON.
///
/// Returns `None` when the global is missing, `undefined`, or not
/// serializable.
pub fn global_json(name: &str) -> Option<String> {
    let value = match js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name)) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("reading global {name} failed: {err:?}");
            return None;
        }
    };
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match js_sys::JSON::stringify(&value) {
        Ok(json) => json.as_string(),
        Err(err) => {
            log::warn!("global {name} is not JSON-serializable: {err:?}");
            None
        }
    }
}

fn report(feature: &str, result: Result<(), UiError>) {
    if let Err(err) = result {
        log::warn!("{feature} disabled: {err}");
    }
}

/// Install every feature against the current page.
///
/// # Errors
///
/// Returns [`UiError::MissingWindow`] or [`UiError::MissingDocument`] when not
/// running in a browser page. Individual feature failures are only logged.
pub fn install_all(config: &UiConfig) -> Result<(), UiError> {
    let window = web_sys::window().ok_or(UiError::MissingWindow)?;
    let document = window.document().ok_or(UiError::MissingDocument)?;

    if let Some(theme) = theme::apply_stored_theme(config) {
        log::debug!("stored theme applied: {}", theme.as_str());
    }
    report("theme toggle", theme::install(&document, config));
    report("drawer", drawer::install(&window, &document, config));
    report("nav tree", nav::install(&document, config));
    report("table of contents", toc::install(&document, config));
    report("hover menu", menu::install(&window, &document, config));
    report("top bar", topbar::install(&window, &document, config));
    Ok(())
}

/// Module start: logging, panic hook, then every feature.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger not installed: {err}")));
    }

    let config = UiConfig::from_page();
    if let Err(err) = install_all(&config) {
        log::warn!("docsite-ui not started: {err}");
    }
}
