#![cfg(target_arch = "wasm32")]
use artifact_core::{
    build_scene, AnimationLoop, Camera, CameraParams, GeometryLibrary, InputQueue, MotionParams,
    ParticleField, ParticleParams, DEFAULT_PROJECTS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod callback;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod modal;
mod render;
mod ui;

pub use ui::on_artifact_select;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_modal_close(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, constants::MODAL_CLOSE_ID, move || {
        modal::hide(&doc);
    });
    events::wire_modal_dismiss(document);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("artifact-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Registry problems are fatal: surface them before any frame runs
    let mut geometry = GeometryLibrary::new();
    let registry = build_scene(DEFAULT_PROJECTS, &mut geometry)?;
    let particles = ParticleField::generate(&ParticleParams::default(), &mut StdRng::from_entropy());
    log::info!(
        "[init] {} artifacts, {} particles",
        registry.len(),
        particles.positions.len()
    );

    let gpu = frame::init_gpu(&canvas, &geometry, &particles).await;
    if gpu.is_none() {
        log::warn!("[init] running without a renderer; interaction still updates");
    }

    let camera = Camera::new(&CameraParams::default(), canvas.width(), canvas.height());
    let scene = AnimationLoop::new(registry, geometry, particles, MotionParams::default());

    // Input shared between DOM listeners and the frame loop
    let queue = Rc::new(RefCell::new(InputQueue::default()));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        queue: queue.clone(),
    });
    wire_modal_close(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        camera,
        input: queue,
        canvas,
        document: document.clone(),
        sink: ui::ModalSink::new(document),
        gpu,
        clock: frame::FrameClock::new(),
        hovering: false,
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);

    Ok(())
}
