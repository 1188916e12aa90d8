use crate::nav::Nav;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, nav: &Nav) {
    match ev.key().as_str() {
        "Escape" | "Esc" => {
            if nav.is_open() {
                nav.close();
                log::debug!("[keys] nav closed via escape");
            }
        }
        "Tab" => {
            if nav.trap_tab(ev.shift_key()) {
                ev.prevent_default();
            }
        }
        _ => {}
    }
}

pub fn wire_global_keydown(document: &web::Document, nav: Nav) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &nav);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
