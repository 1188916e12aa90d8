use crate::constants::*;
use crate::dom;
use ink_core::focus::{trap_tab, NavDrawer};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Off-canvas navigation: toggle button, drawer and optional backdrop.
#[derive(Clone)]
pub struct Nav {
    state: Rc<RefCell<NavDrawer>>,
    document: web::Document,
    toggle: web::Element,
    drawer: web::Element,
}

impl Nav {
    pub fn find(document: &web::Document) -> Option<Self> {
        let toggle = document.query_selector(NAV_TOGGLE_SELECTOR).ok().flatten()?;
        let drawer = document.get_element_by_id(NAV_DRAWER_ID)?;
        let nav = Self {
            state: Rc::new(RefCell::new(NavDrawer::default())),
            document: document.clone(),
            toggle,
            drawer,
        };
        nav.render();
        Some(nav)
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    fn render(&self) {
        let state = *self.state.borrow();
        _ = self
            .toggle
            .set_attribute("aria-expanded", state.aria_expanded());
        _ = self.drawer.set_attribute("aria-hidden", state.aria_hidden());
        let body = self.document.body();
        if state.is_open() {
            _ = self.drawer.class_list().add_1(NAV_OPEN_CLASS);
            if let Some(b) = &body {
                _ = b.class_list().add_1(BODY_NAV_OPEN_CLASS);
            }
        } else {
            _ = self.drawer.class_list().remove_1(NAV_OPEN_CLASS);
            if let Some(b) = &body {
                _ = b.class_list().remove_1(BODY_NAV_OPEN_CLASS);
            }
        }
    }

    pub fn open(&self) {
        if self.state.borrow_mut().set_open(true) {
            self.render();
            if let Some(first) = self.focusables().first() {
                dom::focus(first);
            }
        }
    }

    pub fn close(&self) {
        if self.state.borrow_mut().set_open(false) {
            self.render();
            dom::focus(&self.toggle);
        }
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    fn focusables(&self) -> Vec<web::Element> {
        dom::query_all_in(&self.drawer, FOCUSABLE_SELECTOR)
    }

    /// Keep Tab inside the open drawer. Returns `true` if focus was moved and
    /// the browser default must be suppressed.
    pub fn trap_tab(&self, backwards: bool) -> bool {
        if !self.is_open() {
            return false;
        }
        let items = self.focusables();
        let active = self.document.active_element();
        let current = active
            .as_ref()
            .and_then(|a| items.iter().position(|el| el == a));
        match trap_tab(current, items.len(), backwards) {
            Some(i) => {
                dom::focus(&items[i]);
                true
            }
            None => false,
        }
    }
}

pub fn wire_nav(document: &web::Document) -> Option<Nav> {
    let nav = Nav::find(document)?;

    let n = nav.clone();
    dom::on_click(&nav.toggle, move || n.toggle());

    for link in dom::query_all_in(&nav.drawer, "a[href]") {
        let n = nav.clone();
        dom::on_click(&link, move || n.close());
    }

    for backdrop in dom::query_all(document, NAV_BACKDROP_SELECTOR) {
        let n = nav.clone();
        dom::on_click(&backdrop, move || n.close());
    }

    Some(nav)
}
