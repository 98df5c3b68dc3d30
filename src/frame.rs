use crate::constants::{CURSOR_DEFAULT, CURSOR_HOVER, FPS_LOG_INTERVAL_FRAMES};
use crate::dom;
use crate::render;
use crate::ui::ModalSink;
use artifact_core::{AnimationLoop, Camera, GeometryLibrary, Headless, InputQueue};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Frame interval bookkeeping for diagnostics. Never feeds the animation,
/// which advances by fixed per-frame steps.
pub struct FrameClock {
    window_start: Instant,
    frames: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        if self.frames >= FPS_LOG_INTERVAL_FRAMES {
            let secs = self.window_start.elapsed().as_secs_f32();
            if secs > 0.0 {
                log::debug!("[frame] {:.1} fps over {} frames", self.frames as f32 / secs, self.frames);
            }
            self.window_start = Instant::now();
            self.frames = 0;
        }
    }
}

pub struct FrameContext {
    pub scene: AnimationLoop<GeometryLibrary>,
    pub camera: Camera,
    pub input: Rc<RefCell<InputQueue>>,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub sink: ModalSink,

    pub gpu: Option<render::GpuState>,
    pub clock: FrameClock,
    pub hovering: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Follow the canvas backing size every frame so picking and drawing
        // never use a stale aspect ratio after a resize.
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.camera.resize(w, h);
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
        }

        let input = self.input.borrow_mut().drain();
        let report = match &mut self.gpu {
            Some(g) => self.scene.frame(input, &self.camera, g, &mut self.sink),
            None => self
                .scene
                .frame(input, &self.camera, &mut Headless, &mut self.sink),
        };

        if report.is_hovering() != self.hovering {
            self.hovering = report.is_hovering();
            let cursor = if self.hovering { CURSOR_HOVER } else { CURSOR_DEFAULT };
            dom::set_body_cursor(&self.document, cursor);
        }
        self.clock.tick();
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    geometry: &GeometryLibrary,
    particles: &artifact_core::ParticleField,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, geometry, particles).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
