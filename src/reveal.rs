use crate::constants::{HEADLINE_SELECTOR, INVIEW_CLASS};
use crate::dom;
use ink_core::HEADLINE_REVEAL_THRESHOLD;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Mark each drip headline `inview` the first time it scrolls into view.
pub fn wire_headline_reveal(document: &web::Document) {
    let headlines = dom::query_all(document, HEADLINE_SELECTOR);
    if headlines.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    _ = entry.target().class_list().add_1(INVIEW_CLASS);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(HEADLINE_REVEAL_THRESHOLD));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();

    for el in &headlines {
        observer.observe(el);
    }
    log::debug!("[reveal] observing {} headlines", headlines.len());
}
