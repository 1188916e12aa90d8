use crate::ink::Ink;
use glam::Vec2;
use ink_core::EmitOptions;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Splash default ink wherever the page is clicked.
pub fn wire_click_splash(document: &web::Document, ink: &Ink) {
    let ink = ink.clone();
    let options = EmitOptions::default();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let origin = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        ink.emit(origin, &options);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
