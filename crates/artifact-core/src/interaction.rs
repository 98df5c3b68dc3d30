//! Hover/selection state machine and pointer parallax.
//!
//! The machine only ever learns about objects through picker results. It
//! validates every picked id against the registry so that a stale or foreign
//! id surfaces as `SceneError::NotFound` instead of a silent no-op.

use crate::constants::{HOVER_SCALE_MULTIPLIER, HOVER_SPIN_BOOST_PER_FRAME, PARALLAX_STRENGTH};
use crate::error::SceneError;
use crate::input::PointerState;
use crate::registry::{ObjectId, Registry};
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(ObjectId),
}

impl HoverState {
    pub fn hovered(&self) -> Option<ObjectId> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering(id) => Some(*id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
    Enter(ObjectId),
    Leave(ObjectId),
    Selected {
        id: ObjectId,
        title: String,
        description: String,
    },
}

/// A leave/enter pair at most.
pub type Transitions = SmallVec<[InteractionEvent; 2]>;

/// Visual boost for the hovered object, consumed by the animation loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Amplification {
    pub target: ObjectId,
    pub scale_multiplier: f32,
    pub spin_boost: f32,
}

/// Group rotation derived from the pointer. Pure function of the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxTransform {
    pub pitch: f32,
    pub yaw: f32,
}

impl ParallaxTransform {
    pub fn from_pointer(pointer: PointerState, strength: f32) -> Self {
        Self {
            pitch: -pointer.y * strength,
            yaw: pointer.x * strength,
        }
    }

    /// Euler XYZ rotation for the artifact group.
    #[inline]
    pub fn euler(&self) -> Vec3 {
        Vec3::new(self.pitch, self.yaw, 0.0)
    }
}

#[derive(Clone, Debug)]
pub struct AmplificationParams {
    pub scale_multiplier: f32,
    pub spin_boost: f32,
    pub parallax_strength: f32,
}

impl Default for AmplificationParams {
    fn default() -> Self {
        Self {
            scale_multiplier: HOVER_SCALE_MULTIPLIER,
            spin_boost: HOVER_SPIN_BOOST_PER_FRAME,
            parallax_strength: PARALLAX_STRENGTH,
        }
    }
}

#[derive(Debug, Default)]
pub struct InteractionStateMachine {
    state: HoverState,
    pointer: PointerState,
    parallax: ParallaxTransform,
    params: AmplificationParams,
}

impl InteractionStateMachine {
    pub fn new(params: AmplificationParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn parallax(&self) -> ParallaxTransform {
        self.parallax
    }

    /// Store the latest pointer and recompute parallax. Independent of hover.
    pub fn pointer_moved(&mut self, pointer: PointerState) {
        self.pointer = pointer;
        self.parallax = ParallaxTransform::from_pointer(pointer, self.params.parallax_strength);
    }

    /// Feed one picker result. Emits `Leave` before `Enter` when the target
    /// changes; an unknown id leaves the state untouched and returns an error.
    pub fn update_hover(
        &mut self,
        picked: Option<ObjectId>,
        registry: &Registry,
    ) -> Result<Transitions, SceneError> {
        let mut out = Transitions::new();
        if let Some(id) = picked {
            if !registry.contains(id) {
                return Err(SceneError::NotFound(id));
            }
        }
        match (self.state, picked) {
            (HoverState::Idle, None) => {}
            (HoverState::Hovering(cur), Some(id)) if cur == id => {}
            (HoverState::Idle, Some(id)) => {
                out.push(InteractionEvent::Enter(id));
                self.state = HoverState::Hovering(id);
            }
            (HoverState::Hovering(cur), Some(id)) => {
                out.push(InteractionEvent::Leave(cur));
                out.push(InteractionEvent::Enter(id));
                self.state = HoverState::Hovering(id);
            }
            (HoverState::Hovering(cur), None) => {
                out.push(InteractionEvent::Leave(cur));
                self.state = HoverState::Idle;
            }
        }
        Ok(out)
    }

    /// Discrete click/tap. Yields `Selected` for the hovered object; nothing
    /// while idle. Hover state is not changed.
    pub fn select(&self, registry: &Registry) -> Result<Option<InteractionEvent>, SceneError> {
        let HoverState::Hovering(id) = self.state else {
            return Ok(None);
        };
        let object = registry.get(id)?;
        Ok(Some(InteractionEvent::Selected {
            id,
            title: object.info.title.clone(),
            description: object.info.description.clone(),
        }))
    }

    pub fn amplification(&self) -> Option<Amplification> {
        self.state.hovered().map(|target| Amplification {
            target,
            scale_multiplier: self.params.scale_multiplier,
            spin_boost: self.params.spin_boost,
        })
    }
}
