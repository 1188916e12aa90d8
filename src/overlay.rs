use crate::constants::{HIDDEN_CLASS, LOADING_ID};
use crate::dom;
use ink_core::LOADING_HIDE_DELAY_MS;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(LOADING_ID)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(false)
}

/// Fade the loading overlay out a little after window load.
pub fn schedule_hide(document: &web::Document) {
    let document = document.clone();
    dom::set_timeout(LOADING_HIDE_DELAY_MS, move || {
        if !is_hidden(&document) {
            hide(&document);
            log::info!("[overlay] loading overlay hidden");
        }
    });
}
