use crate::modal;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

// Escape closes the detail modal
pub fn wire_modal_dismiss(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if is_dismiss_key(&ev.key()) && !modal::is_hidden(&doc) {
                    modal::hide(&doc);
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
