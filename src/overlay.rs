use crate::constants::{HIDDEN_CLASS, OPTIONS_ID, TOGGLE_OPTIONS_ID};
use crate::dom;
use web_sys as web;

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(OPTIONS_ID)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OPTIONS_ID) {
        dom::toggle_class(&el, HIDDEN_CLASS);
        log::debug!("[overlay] options hidden={}", is_hidden(document));
    }
}

/// The options button shows and hides the parameter panel.
pub fn wire_options_toggle(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, TOGGLE_OPTIONS_ID, move || toggle(&doc));
}
