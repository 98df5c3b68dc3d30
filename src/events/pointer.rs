use crate::input;
use artifact_core::InputQueue;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub queue: Rc<RefCell<InputQueue>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_click(&w);
}

// Pointer moves only overwrite the latest position; picking happens in the
// frame loop so a still pointer over a moving artifact keeps hovering.
fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.canvas.is_connected() {
            return;
        }
        let pointer = input::pointer_ndc(&ev, &w.canvas);
        w.queue.borrow_mut().record_pointer(pointer);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pointer = input::pointer_ndc(&ev, &w.canvas);
        let mut queue = w.queue.borrow_mut();
        queue.record_pointer(pointer);
        queue.record_click();
        log::debug!("[click] queued at ({:.2},{:.2})", pointer.x, pointer.y);
    }) as Box<dyn FnMut(_)>);

    _ = canvas_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
