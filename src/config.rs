//! Page-level configuration for the UI glue.
//!
//! Defaults describe the DOM contract the site templates follow. A page may
//! override any subset of fields by defining a `DOCSITE_UI_CONFIG` global
//! object before the wasm module starts; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;

/// Name of the global the config override is read from.
pub const CONFIG_GLOBAL: &str = "DOCSITE_UI_CONFIG";

/// Viewport width in CSS pixels at which the layout switches to desktop.
pub const DEFAULT_DESKTOP_MIN_WIDTH_PX: u32 = 981;

/// Delay before a hover menu closes after the pointer leaves it.
pub const DEFAULT_MENU_CLOSE_DELAY_MS: u32 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub theme_storage_key: String,
    pub theme_toggle_id: String,
    pub nav_global: String,
    pub menu_toggle_id: String,
    pub menu_close_id: String,
    pub drawer_id: String,
    pub drawer_nav_id: String,
    pub content_id: String,
    pub toc_id: String,
    pub topbar_id: String,
    pub menubar_selector: String,
    /// Class marking top-level menubar items that own a submenu.
    pub submenu_item_class: String,
    pub submenu_selector: String,
    pub trigger_selector: String,
    pub desktop_min_width_px: u32,
    pub menu_close_delay_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".into(),
            theme_toggle_id: "theme-toggle".into(),
            nav_global: "NAV_TREE".into(),
            menu_toggle_id: "menu-toggle".into(),
            menu_close_id: "menu-close".into(),
            drawer_id: "mobile-drawer".into(),
            drawer_nav_id: "drawer-nav".into(),
            content_id: "content".into(),
            toc_id: "toc".into(),
            topbar_id: "topbar".into(),
            menubar_selector: ".menubar".into(),
            submenu_item_class: "has-submenu".into(),
            submenu_selector: ".submenu".into(),
            trigger_selector: ".menu-trigger".into(),
            desktop_min_width_px: DEFAULT_DESKTOP_MIN_WIDTH_PX,
            menu_close_delay_ms: DEFAULT_MENU_CLOSE_DELAY_MS,
        }
    }
}

impl UiConfig {
    /// Parse a JSON config override.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when `json` is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self, UiError> {
        serde_json::from_str(json).map_err(UiError::Config)
    }

    /// Media query that matches desktop viewports.
    pub fn desktop_media_query(&self) -> String {
        format!("(min-width: {}px)", self.desktop_min_width_px)
    }

    /// Every element id the page contract names. Derived heading ids must
    /// never take one of these.
    pub fn element_ids(&self) -> [&str; 8] {
        [
            &self.theme_toggle_id,
            &self.menu_toggle_id,
            &self.menu_close_id,
            &self.drawer_id,
            &self.drawer_nav_id,
            &self.content_id,
            &self.toc_id,
            &self.topbar_id,
        ]
    }

    /// Whether a viewport `width` counts as desktop.
    pub fn is_wide(&self, width: f64) -> bool {
        width >= f64::from(self.desktop_min_width_px)
    }

    /// Read the config override global, falling back to defaults.
    #[cfg(feature = "hydrate")]
    pub fn from_page() -> Self {
        let Some(json) = crate::boot::global_json(CONFIG_GLOBAL) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring {CONFIG_GLOBAL}: {err}");
                Self::default()
            }
        }
    }
}
