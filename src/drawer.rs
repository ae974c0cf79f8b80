//! Mobile navigation drawer.
//!
//! [`DrawerCore`] is the open/closed state machine; it decides, the shell
//! applies. Opening reveals the drawer, marks the toggle expanded and locks
//! page scroll. Closing reverses all three.

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Inputs the drawer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    /// The menu toggle button was pressed.
    TogglePressed,
    /// The explicit close button was pressed.
    ClosePressed,
    /// A click landed inside the drawer. `on_container` is true only when the
    /// target is the drawer element itself (its backdrop), not a descendant.
    Click { on_container: bool },
    /// Escape was pressed anywhere on the page.
    Escape,
    /// The viewport was resized; `wide` is true at or above the desktop breakpoint.
    Resized { wide: bool },
}

/// DOM changes for one drawer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerView {
    pub hidden: bool,
    pub expanded: bool,
    /// `Some(true)` locks page scroll, `Some(false)` releases it, `None`
    /// leaves the page's own `overflow` alone.
    pub scroll_lock: Option<bool>,
}

/// Drawer state machine, independent of the DOM.
#[derive(Debug, Default)]
pub struct DrawerCore {
    state: DrawerState,
}

impl DrawerCore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    /// View applied at install. The page may set its own `overflow`, so the
    /// scroll lock is left untouched until the first transition.
    pub fn initial_view(&self) -> DrawerView {
        DrawerView { hidden: !self.is_open(), expanded: self.is_open(), scroll_lock: None }
    }

    /// View applied after [`handle`](Self::handle) reports a change.
    pub fn transition_view(&self) -> DrawerView {
        DrawerView { scroll_lock: Some(self.state == DrawerState::Open), ..self.initial_view() }
    }

    /// Feed one event. Returns the new state only if it changed.
    pub fn handle(&mut self, event: DrawerEvent) -> Option<DrawerState> {
        let next = match event {
            DrawerEvent::TogglePressed => match self.state {
                DrawerState::Open => DrawerState::Closed,
                DrawerState::Closed => DrawerState::Open,
            },
            DrawerEvent::ClosePressed
            | DrawerEvent::Click { on_container: true }
            | DrawerEvent::Escape
            | DrawerEvent::Resized { wide: true } => DrawerState::Closed,
            DrawerEvent::Click { on_container: false } | DrawerEvent::Resized { wide: false } => self.state,
        };
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

#[cfg(feature = "hydrate")]
pub use shell::install;

#[cfg(feature = "hydrate")]
mod shell {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Window};

    use super::{DrawerCore, DrawerEvent, DrawerView};
    use crate::boot::listen;
    use crate::config::UiConfig;
    use crate::error::UiError;

    struct Drawer {
        core: DrawerCore,
        panel: HtmlElement,
        toggle: Element,
        body: Option<HtmlElement>,
    }

    impl Drawer {
        fn dispatch(&mut self, event: DrawerEvent) {
            if self.core.handle(event).is_some() {
                log::debug!("drawer {:?} after {event:?}", self.core.state());
                self.render(self.core.transition_view());
            }
        }

        fn render(&self, view: DrawerView) {
            self.panel.set_hidden(view.hidden);
            if let Err(err) = self.toggle.set_attribute("aria-expanded", if view.expanded { "true" } else { "false" }) {
                log::warn!("drawer toggle aria-expanded not updated: {err:?}");
            }
            let (Some(locked), Some(body)) = (view.scroll_lock, &self.body) else {
                return;
            };
            let style = body.style();
            let result = if locked {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_previous| ())
            };
            if let Err(err) = result {
                log::warn!("page scroll lock not updated: {err:?}");
            }
        }
    }

    /// Wire the drawer toggle, close button, backdrop, Escape and resize.
    pub fn install(window: &Window, document: &Document, config: &UiConfig) -> Result<(), UiError> {
        let (Some(toggle), Some(panel)) = (
            document.get_element_by_id(&config.menu_toggle_id),
            document.get_element_by_id(&config.drawer_id),
        ) else {
            log::debug!("drawer elements missing; drawer disabled");
            return Ok(());
        };
        let panel: HtmlElement = panel.dyn_into().map_err(|el: Element| UiError::NotHtmlElement(el.id()))?;
        let drawer = Rc::new(RefCell::new(Drawer {
            core: DrawerCore::new(),
            panel: panel.clone(),
            toggle: toggle.clone(),
            body: document.body(),
        }));
        {
            let drawer = drawer.borrow();
            drawer.render(drawer.core.initial_view());
        }

        let state = Rc::clone(&drawer);
        listen(&toggle, "click", move |_event| {
            state.borrow_mut().dispatch(DrawerEvent::TogglePressed);
        })?;

        if let Some(close) = document.get_element_by_id(&config.menu_close_id) {
            let state = Rc::clone(&drawer);
            listen(&close, "click", move |_event| {
                state.borrow_mut().dispatch(DrawerEvent::ClosePressed);
            })?;
        }

        let state = Rc::clone(&drawer);
        let container = JsValue::from(panel.clone());
        listen(&panel, "click", move |event: Event| {
            let on_container = event.target().is_some_and(|target| JsValue::from(target) == container);
            state.borrow_mut().dispatch(DrawerEvent::Click { on_container });
        })?;

        let state = Rc::clone(&drawer);
        listen(document, "keydown", move |event: Event| {
            let escape = event.dyn_ref::<KeyboardEvent>().is_some_and(|key| key.key() == "Escape");
            let open = state.borrow().core.is_open();
            if escape && open {
                state.borrow_mut().dispatch(DrawerEvent::Escape);
            }
        })?;

        let state = Rc::clone(&drawer);
        let resize_window = window.clone();
        let config = config.clone();
        listen(window, "resize", move |_event| {
            let width = match resize_window.inner_width() {
                Ok(width) => width.as_f64().unwrap_or(0.0),
                Err(err) => {
                    log::warn!("viewport width unavailable: {err:?}");
                    return;
                }
            };
            state.borrow_mut().dispatch(DrawerEvent::Resized { wide: config.is_wide(width) });
        })
    }
}
