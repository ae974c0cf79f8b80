//! Desktop hover menu: one open top-level item at a time, closed after a short
//! grace delay once the pointer leaves both the trigger and its submenu.
//!
//! ARCHITECTURE
//! ============
//! [`HoverMenuCore`] owns which item is open and which item a pending close
//! belongs to. It turns events into [`MenuAction`]s and never touches the
//! DOM or a clock. The browser shell owns the single close timer and the
//! elements, and performs the actions in order.
//!
//! INVARIANTS
//! ==========
//! - At most one item is open; opening an item closes the previous one first.
//! - At most one close is pending; `CancelClose` always precedes a new
//!   `ScheduleClose` when one is outstanding.
//! - A fired close only affects the item it was scheduled for, and only if
//!   that item is still the open one.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Index of a submenu-owning item within the menubar.
pub type ItemIndex = usize;

/// Inputs the hover menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Pointer entered the item (trigger area).
    ItemEnter(ItemIndex),
    /// Pointer left the item; `into_submenu` when it moved into the item's own submenu.
    ItemLeave { item: ItemIndex, into_submenu: bool },
    /// Pointer entered the item's submenu.
    SubmenuEnter(ItemIndex),
    /// Pointer left the submenu; `into_item` when it moved back into the parent item.
    SubmenuLeave { item: ItemIndex, into_item: bool },
    /// Pointer went down somewhere outside the whole menubar.
    PointerDownOutside,
    /// Escape was pressed.
    Escape,
    /// The viewport crossed the desktop/mobile breakpoint.
    BreakpointChanged,
    /// The scheduled close delay elapsed.
    CloseTimerFired,
}

/// Effects for the shell to carry out, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open(ItemIndex),
    Close(ItemIndex),
    /// Start the close timer.
    ScheduleClose,
    /// Drop the outstanding close timer.
    CancelClose,
}

#[derive(Debug, Default)]
pub struct HoverMenuCore {
    active: Option<ItemIndex>,
    pending_close: Option<ItemIndex>,
}

impl HoverMenuCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently open item.
    pub fn active(&self) -> Option<ItemIndex> {
        self.active
    }

    pub fn has_pending_close(&self) -> bool {
        self.pending_close.is_some()
    }

    /// Feed one event.
    ///
    /// `desktop` is whether the desktop media query matches right now. Pointer
    /// and key events are ignored off desktop; breakpoint changes and timer
    /// expiry are handled in either mode so nothing stays stuck open.
    pub fn handle(&mut self, event: MenuEvent, desktop: bool) -> Vec<MenuAction> {
        let mut actions = Vec::new();
        match event {
            MenuEvent::BreakpointChanged => self.close_now(&mut actions),
            MenuEvent::CloseTimerFired => {
                if let Some(item) = self.pending_close.take() {
                    if self.active == Some(item) {
                        self.active = None;
                        actions.push(MenuAction::Close(item));
                    }
                }
            }
            _ if !desktop => {}
            MenuEvent::ItemEnter(item) | MenuEvent::SubmenuEnter(item) => self.open(item, &mut actions),
            MenuEvent::ItemLeave { into_submenu: true, .. } | MenuEvent::SubmenuLeave { into_item: true, .. } => {}
            MenuEvent::ItemLeave { item, .. } | MenuEvent::SubmenuLeave { item, .. } => {
                self.schedule_close(item, &mut actions);
            }
            MenuEvent::PointerDownOutside | MenuEvent::Escape => self.close_now(&mut actions),
        }
        actions
    }

    fn cancel_close(&mut self, actions: &mut Vec<MenuAction>) {
        if self.pending_close.take().is_some() {
            actions.push(MenuAction::CancelClose);
        }
    }

    fn open(&mut self, item: ItemIndex, actions: &mut Vec<MenuAction>) {
        self.cancel_close(actions);
        if self.active == Some(item) {
            return;
        }
        if let Some(previous) = self.active.replace(item) {
            actions.push(MenuAction::Close(previous));
        }
        actions.push(MenuAction::Open(item));
    }

    fn schedule_close(&mut self, item: ItemIndex, actions: &mut Vec<MenuAction>) {
        self.cancel_close(actions);
        self.pending_close = Some(item);
        actions.push(MenuAction::ScheduleClose);
    }

    fn close_now(&mut self, actions: &mut Vec<MenuAction>) {
        self.cancel_close(actions);
        if let Some(item) = self.active.take() {
            actions.push(MenuAction::Close(item));
        }
    }
}

#[cfg(feature = "hydrate")]
pub use shell::install;

#[cfg(feature = "hydrate")]
mod shell {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, Event, KeyboardEvent, MediaQueryList, MouseEvent, Node, Window};

    use super::{HoverMenuCore, ItemIndex, MenuAction, MenuEvent};
    use crate::boot::listen;
    use crate::config::UiConfig;
    use crate::error::UiError;

    struct MenuItem {
        root: Element,
        trigger: Option<Element>,
        submenu: Element,
    }

    struct HoverMenu {
        core: HoverMenuCore,
        items: Vec<MenuItem>,
        desktop: MediaQueryList,
        close_delay_ms: u32,
        close_timer: Option<Timeout>,
        this: Weak<RefCell<HoverMenu>>,
    }

    impl HoverMenu {
        fn dispatch(&mut self, event: MenuEvent) {
            let desktop = self.desktop.matches();
            for action in self.core.handle(event, desktop) {
                self.perform(action);
            }
            log::debug!(
                "menu after {event:?}: active={:?} pending_close={}",
                self.core.active(),
                self.core.has_pending_close()
            );
        }

        fn perform(&mut self, action: MenuAction) {
            match action {
                MenuAction::Open(item) => self.set_open(item, true),
                MenuAction::Close(item) => self.set_open(item, false),
                // Dropping a gloo `Timeout` clears it.
                MenuAction::CancelClose => self.close_timer = None,
                MenuAction::ScheduleClose => {
                    let menu = Weak::clone(&self.this);
                    self.close_timer = Some(Timeout::new(self.close_delay_ms, move || {
                        if let Some(menu) = menu.upgrade() {
                            menu.borrow_mut().dispatch(MenuEvent::CloseTimerFired);
                        }
                    }));
                }
            }
        }

        fn set_open(&self, item: ItemIndex, open: bool) {
            let Some(entry) = self.items.get(item) else {
                return;
            };
            let classes = entry.root.class_list();
            let result = if open { classes.add_1("is-open") } else { classes.remove_1("is-open") };
            if let Err(err) = result {
                log::warn!("menu item {item} class not updated: {err:?}");
            }
            if let Some(trigger) = &entry.trigger {
                if let Err(err) = trigger.set_attribute("aria-expanded", if open { "true" } else { "false" }) {
                    log::warn!("menu trigger {item} aria-expanded not updated: {err:?}");
                }
            }
        }
    }

    /// Whether the pointer's destination (`relatedTarget`) lies inside `container`.
    fn moving_into(event: &Event, container: &Element) -> bool {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return false;
        };
        let Some(related) = mouse.related_target() else {
            return false;
        };
        container.contains(related.dyn_ref::<Node>())
    }

    fn collect_items(menubar: &Element, config: &UiConfig) -> Result<Vec<MenuItem>, UiError> {
        let nodes = menubar.query_selector_all(&format!(".{}", config.submenu_item_class))?;
        let mut items = Vec::new();
        for i in 0..nodes.length() {
            let Some(root) = nodes.get(i).and_then(|node| node.dyn_ref::<Element>().cloned()) else {
                continue;
            };
            let Some(submenu) = root.query_selector(&config.submenu_selector)? else {
                log::debug!("menu item {i} has no submenu; skipped");
                continue;
            };
            let trigger = root.query_selector(&config.trigger_selector)?;
            items.push(MenuItem { root, trigger, submenu });
        }
        Ok(items)
    }

    /// Wire hover, outside-press, Escape and breakpoint handling for the menubar.
    pub fn install(window: &Window, document: &Document, config: &UiConfig) -> Result<(), UiError> {
        let Some(menubar) = document.query_selector(&config.menubar_selector)? else {
            log::debug!("no {} on page; hover menu disabled", config.menubar_selector);
            return Ok(());
        };
        let Some(desktop) = window.match_media(&config.desktop_media_query())? else {
            log::debug!("matchMedia unsupported; hover menu disabled");
            return Ok(());
        };
        let items = collect_items(&menubar, config)?;
        if items.is_empty() {
            return Ok(());
        }

        let menu = Rc::new_cyclic(|this| {
            RefCell::new(HoverMenu {
                core: HoverMenuCore::new(),
                items,
                desktop: desktop.clone(),
                close_delay_ms: config.menu_close_delay_ms,
                close_timer: None,
                this: Weak::clone(this),
            })
        });

        let elements: Vec<(Element, Element)> = menu
            .borrow()
            .items
            .iter()
            .map(|item| (item.root.clone(), item.submenu.clone()))
            .collect();
        for (index, (root, submenu)) in elements.into_iter().enumerate() {
            let state = Rc::clone(&menu);
            listen(&root, "mouseenter", move |_event| {
                state.borrow_mut().dispatch(MenuEvent::ItemEnter(index));
            })?;

            let state = Rc::clone(&menu);
            let own_submenu = submenu.clone();
            listen(&root, "mouseleave", move |event: Event| {
                let into_submenu = moving_into(&event, &own_submenu);
                state.borrow_mut().dispatch(MenuEvent::ItemLeave { item: index, into_submenu });
            })?;

            let state = Rc::clone(&menu);
            listen(&submenu, "mouseenter", move |_event| {
                state.borrow_mut().dispatch(MenuEvent::SubmenuEnter(index));
            })?;

            let state = Rc::clone(&menu);
            let parent = root.clone();
            listen(&submenu, "mouseleave", move |event: Event| {
                let into_item = moving_into(&event, &parent);
                state.borrow_mut().dispatch(MenuEvent::SubmenuLeave { item: index, into_item });
            })?;
        }

        let state = Rc::clone(&menu);
        listen(document, "pointerdown", move |event: Event| {
            let inside = event.target().is_some_and(|target| menubar.contains(target.dyn_ref::<Node>()));
            if !inside {
                state.borrow_mut().dispatch(MenuEvent::PointerDownOutside);
            }
        })?;

        let state = Rc::clone(&menu);
        listen(document, "keydown", move |event: Event| {
            if event.dyn_ref::<KeyboardEvent>().is_some_and(|key| key.key() == "Escape") {
                state.borrow_mut().dispatch(MenuEvent::Escape);
            }
        })?;

        let state = Rc::clone(&menu);
        listen(&desktop, "change", move |_event| {
            state.borrow_mut().dispatch(MenuEvent::BreakpointChanged);
        })
    }
}
