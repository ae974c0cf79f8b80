//! # docsite-ui
//!
//! Browser-side glue for the static documentation site, compiled to
//! WebAssembly. It attaches to server-rendered pages and adds the theme
//! toggle, the mobile navigation drawer, the accordion nav tree, the table of
//! contents, the desktop hover menu, and top bar height tracking.
//!
//! Every feature is a pure core (state machine or renderer, tested natively)
//! plus a thin `hydrate`-only shell that binds it to the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`markup`] | HTML escaping and heading slugs |
//! | [`config`] | DOM contract defaults and page overrides |
//! | [`error`] | Error type for boot steps |
//! | [`theme`] | Light/dark theme persisted in `localStorage` |
//! | [`drawer`] | Mobile drawer open/close state machine |
//! | [`nav`] | Nav tree model and accordion renderer |
//! | [`toc`] | Table of contents from `h2`/`h3` headings |
//! | [`menu`] | Desktop hover menu with deferred close |
//! | [`topbar`] | `--topbar-height` CSS property |
//! | `boot` | WASM start function (`hydrate` only) |

#[cfg(feature = "hydrate")]
pub mod boot;
pub mod config;
pub mod drawer;
pub mod error;
pub mod markup;
pub mod menu;
pub mod nav;
pub mod theme;
pub mod toc;
pub mod topbar;
