use crate::constants::{READY_STATE_COMPLETE, REDUCED_MOTION_QUERY};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub fn on_click(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn on_input(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One-shot timer. Failures to schedule are dropped.
pub fn set_timeout(delay_ms: u64, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms.min(i32::MAX as u64) as i32,
        );
    }
}

/// Resolves once the window `load` event has fired (immediately if it already has).
pub async fn window_loaded() {
    let Some(window) = web::window() else { return };
    let Some(document) = window.document() else {
        return;
    };
    if document.ready_state() == READY_STATE_COMPLETE {
        return;
    }
    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject: js_sys::Function| {
        _ = window.add_event_listener_with_callback("load", &resolve);
    });
    _ = JsFuture::from(promise).await;
}

/// Read on every call; the user can flip the preference at any time.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

pub fn element_center(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (rect.left() + rect.width() / 2.0) as f32,
        (rect.top() + rect.height() / 2.0) as f32,
    )
}

/// All elements matching `selector`, skipping non-element nodes.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn input_by_id(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

/// Set one inline style property on an HTML or SVG element, leaving the rest
/// of its `style` alone.
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    let style = if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        h.style()
    } else if let Some(s) = el.dyn_ref::<web::SvgElement>() {
        s.style()
    } else {
        return;
    };
    _ = style.set_property(property, value);
}

pub fn focus(el: &web::Element) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.focus();
    }
}
