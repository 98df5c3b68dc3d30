//! Per-frame driver.
//!
//! One call to [`AnimationLoop::frame`] is one display refresh. The host
//! supplies the suspension point (requestAnimationFrame on the web) and
//! calls `frame` once per refresh; there is no terminal state.
//!
//! Motion uses fixed per-frame increments with no delta-time scaling, so the
//! animation speed follows the display refresh rate.

use crate::camera::Camera;
use crate::constants::{IDLE_SPIN_PER_FRAME, PARTICLE_DRIFT_PER_FRAME};
use crate::error::SceneError;
use crate::input::FrameInput;
use crate::interaction::{Amplification, AmplificationParams, InteractionEvent, InteractionStateMachine};
use crate::picker::{Intersect, Picker};
use crate::registry::{advance_angle, ObjectId, Registry};
use crate::scene::ParticleField;
use smallvec::SmallVec;
use std::fmt;

/// What the renderer gets to draw each frame.
pub struct SceneView<'a> {
    pub registry: &'a Registry,
    pub particles: &'a ParticleField,
}

pub trait Renderer {
    type Error: fmt::Display;

    fn draw(&mut self, scene: &SceneView<'_>, camera: &Camera) -> Result<(), Self::Error>;
}

/// Renderer that draws nothing; used when no GPU is available.
#[derive(Debug, Default)]
pub struct Headless;

impl Renderer for Headless {
    type Error = std::convert::Infallible;

    fn draw(&mut self, _scene: &SceneView<'_>, _camera: &Camera) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Receiver of `Selected` notifications (detail panel, JS callback, ...).
pub trait SelectionSink {
    fn on_select(&mut self, title: &str, description: &str);
}

impl<F: FnMut(&str, &str)> SelectionSink for F {
    fn on_select(&mut self, title: &str, description: &str) {
        self(title, description)
    }
}

#[derive(Clone, Debug)]
pub struct MotionParams {
    pub idle_spin: f32,
    pub particle_drift: f32,
    pub amplification: AmplificationParams,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            idle_spin: IDLE_SPIN_PER_FRAME,
            particle_drift: PARTICLE_DRIFT_PER_FRAME,
            amplification: AmplificationParams::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct FrameReport {
    pub events: SmallVec<[InteractionEvent; 4]>,
    pub faults: SmallVec<[SceneError; 1]>,
    pub hovered: Option<ObjectId>,
    pub drawn: bool,
}

impl FrameReport {
    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }
}

/// Phase one: every object back to its base scale, idle spin applied.
pub fn baseline_pass(registry: &mut Registry, idle_spin: f32) {
    for object in registry.all_mut() {
        object.transform.scale = object.base_scale;
        let r = &mut object.transform.rotation;
        r.x = advance_angle(r.x, idle_spin);
        r.y = advance_angle(r.y, idle_spin);
    }
}

/// Phase two: boost the hovered object. Must run after `baseline_pass` in the
/// same frame; it overrides the scale the baseline just restored.
pub fn amplify_pass(registry: &mut Registry, amp: Amplification) -> Result<(), SceneError> {
    let object = registry.get_mut(amp.target)?;
    object.transform.scale = object.base_scale * amp.scale_multiplier;
    let r = &mut object.transform.rotation;
    r.x = advance_angle(r.x, amp.spin_boost);
    r.y = advance_angle(r.y, amp.spin_boost);
    Ok(())
}

pub struct AnimationLoop<I> {
    registry: Registry,
    picker: Picker<I>,
    interaction: InteractionStateMachine,
    particles: ParticleField,
    params: MotionParams,
    frame_index: u64,
}

impl<I: Intersect> AnimationLoop<I> {
    /// Takes ownership of the registry and seals it.
    pub fn new(
        mut registry: Registry,
        intersector: I,
        particles: ParticleField,
        params: MotionParams,
    ) -> Self {
        registry.seal();
        let interaction = InteractionStateMachine::new(params.amplification.clone());
        Self {
            registry,
            picker: Picker::new(intersector),
            interaction,
            particles,
            params,
            frame_index: 0,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Run one frame. Faults are logged and recorded in the report; they
    /// never stop the loop.
    pub fn frame<R, S>(
        &mut self,
        input: FrameInput,
        camera: &Camera,
        renderer: &mut R,
        ui: &mut S,
    ) -> FrameReport
    where
        R: Renderer,
        S: SelectionSink,
    {
        let mut report = FrameReport::default();

        if let Some(pointer) = input.pointer {
            self.interaction.pointer_moved(pointer);
        }
        // Clicks select whatever was hovered when the user clicked, i.e. the
        // state left by the previous frame.
        for _ in 0..input.clicks {
            match self.interaction.select(&self.registry) {
                Ok(Some(event)) => {
                    if let InteractionEvent::Selected {
                        id,
                        title,
                        description,
                    } = &event
                    {
                        log::info!("[select] {} '{}'", id, title);
                        ui.on_select(title, description);
                    }
                    report.events.push(event);
                }
                Ok(None) => {}
                Err(e) => self.fault(&mut report, e),
            }
        }

        self.particles.advance(self.params.particle_drift);

        baseline_pass(&mut self.registry, self.params.idle_spin);

        let picked = self
            .picker
            .pick(&self.registry, camera, self.interaction.pointer());
        match self.interaction.update_hover(picked, &self.registry) {
            Ok(transitions) => {
                for event in transitions {
                    log::debug!("[pick] {:?}", event);
                    report.events.push(event);
                }
            }
            Err(e) => self.fault(&mut report, e),
        }

        if let Some(amp) = self.interaction.amplification() {
            if let Err(e) = amplify_pass(&mut self.registry, amp) {
                self.fault(&mut report, e);
            }
        }

        self.registry
            .set_group_rotation(self.interaction.parallax().euler());

        let view = SceneView {
            registry: &self.registry,
            particles: &self.particles,
        };
        match renderer.draw(&view, camera) {
            Ok(()) => report.drawn = true,
            Err(e) => log::error!("[frame] render error: {}", e),
        }

        report.hovered = self.interaction.state().hovered();
        self.frame_index += 1;
        report
    }

    fn fault(&self, report: &mut FrameReport, e: SceneError) {
        log::error!("[frame] frame {} skipped update: {}", self.frame_index, e);
        report.faults.push(e);
    }
}
