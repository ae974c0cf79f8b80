//! Color theme initialization and toggle.
//!
//! Reads the stored preference from `localStorage` and applies it as a
//! `data-theme` attribute on the `<html>` element. Toggling flips that
//! attribute and writes the new value back. Storage is best effort: failures
//! are logged and otherwise ignored, and without the `hydrate` feature every
//! browser call is a no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::UiConfig;

#[cfg(feature = "hydrate")]
const THEME_ATTR: &str = "data-theme";

/// The two site themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value. Only the exact strings `light` and `dark` count.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Interpret the current `data-theme` attribute; anything but `dark` is light.
    pub fn from_attribute(value: Option<&str>) -> Self {
        if value == Some("dark") { Self::Dark } else { Self::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Apply the persisted theme, if there is a valid one.
///
/// Returns the applied theme, or `None` when nothing usable was stored and
/// the document default stays in effect.
pub fn apply_stored_theme(config: &UiConfig) -> Option<Theme> {
    let theme = read_stored(config).as_deref().and_then(Theme::parse)?;
    apply(theme);
    Some(theme)
}

/// Flip the active theme, apply it, persist it, and return it.
pub fn toggle_theme(config: &UiConfig) -> Theme {
    let next = current_theme().toggled();
    apply(next);
    persist(config, next);
    next
}

/// The theme currently set on the document element.
pub fn current_theme() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let value = document_element().and_then(|el| el.get_attribute(THEME_ATTR));
        Theme::from_attribute(value.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::from_attribute(None)
    }
}

/// Set `data-theme` on `<html>`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = document_element() {
            if let Err(err) = el.set_attribute(THEME_ATTR, theme.as_str()) {
                log::warn!("could not set {THEME_ATTR}: {err:?}");
            }
        }
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn read_stored(config: &UiConfig) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        match local_storage()?.get_item(&config.theme_storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme preference unreadable: {err:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn persist(config: &UiConfig, theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.set_item(&config.theme_storage_key, theme.as_str()) {
                log::warn!("theme preference not saved: {err:?}");
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn document_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage is unavailable: {err:?}");
            None
        }
    }
}

/// Wire the theme toggle button, if the page has one.
#[cfg(feature = "hydrate")]
pub fn install(document: &web_sys::Document, config: &UiConfig) -> Result<(), crate::error::UiError> {
    let Some(button) = document.get_element_by_id(&config.theme_toggle_id) else {
        log::debug!("no #{} on page; theme toggle disabled", config.theme_toggle_id);
        return Ok(());
    };
    sync_pressed(&button, current_theme());

    let config = config.clone();
    let target = button.clone();
    crate::boot::listen(&button, "click", move |_event| {
        let theme = toggle_theme(&config);
        sync_pressed(&target, theme);
    })
}

#[cfg(feature = "hydrate")]
fn sync_pressed(button: &web_sys::Element, theme: Theme) {
    let pressed = if theme == Theme::Dark { "true" } else { "false" };
    if let Err(err) = button.set_attribute("aria-pressed", pressed) {
        log::warn!("could not set aria-pressed: {err:?}");
    }
}
