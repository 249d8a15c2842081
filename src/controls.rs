use crate::core::field::FIELD_PARAMS;
use crate::core::{AppState, ParamControl};
use crate::dom;
use crate::url;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An `<input>` mirroring one parameter.
struct InputControl(web::HtmlInputElement);

impl ParamControl for InputControl {
    fn show(&self, text: &str) {
        self.0.set_value(text);
    }
}

/// Bind each field parameter that has an `<input id=name>` on the page.
/// Edits update the state and the URL, then call `on_change(name)`.
pub fn bind_field_params(
    document: &web::Document,
    state: &Rc<RefCell<AppState>>,
    on_change: Rc<dyn Fn(&str)>,
) {
    for decl in FIELD_PARAMS.iter() {
        let Some(input) = document
            .get_element_by_id(decl.name)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        else {
            continue;
        };
        _ = state
            .borrow_mut()
            .registry
            .bind_control(decl.name, Box::new(InputControl(input.clone())));

        let name = decl.name;
        let state = state.clone();
        let on_change = on_change.clone();
        let input_for_read = input.clone();
        dom::add_listener(&input, "input", move || {
            let raw = input_for_read.value();
            let pairs = {
                let mut s = state.borrow_mut();
                if let Err(e) = s.apply_control_input(name, &raw) {
                    log::warn!("[controls] {}", e);
                    return;
                }
                s.query_pairs()
            };
            url::sync(&pairs);
            on_change(name);
        });
    }
}
