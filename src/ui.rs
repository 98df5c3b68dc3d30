use crate::callback::CallbackSlot;
use crate::modal;
use artifact_core::SelectionSink;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    // Optional page-level listener registered through `onArtifactSelect`.
    static SELECT_CALLBACK: CallbackSlot<js_sys::Function> = const { CallbackSlot::new() };
}

/// Register a JS function called as `callback(title, description)` whenever an
/// artifact is selected. Passing a non-function clears it.
#[wasm_bindgen(js_name = onArtifactSelect)]
pub fn on_artifact_select(callback: JsValue) {
    let f = callback.dyn_into::<js_sys::Function>().ok();
    SELECT_CALLBACK.with(|cb| cb.set(f));
}

/// Shows the detail modal and forwards the selection to the JS listener.
pub struct ModalSink {
    document: web::Document,
}

impl ModalSink {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl SelectionSink for ModalSink {
    fn on_select(&mut self, title: &str, description: &str) {
        modal::show(&self.document, title, description);
        // The listener may call `onArtifactSelect` again
        let Some(f) = SELECT_CALLBACK.with(|cb| cb.get()) else {
            return;
        };
        if let Err(e) = f.call2(
            &JsValue::NULL,
            &JsValue::from_str(title),
            &JsValue::from_str(description),
        ) {
            log::warn!("[select] onArtifactSelect callback threw: {:?}", e);
        }
    }
}
