//! Fixed set of pickable artifacts and their per-frame transform state.
//!
//! Objects are registered once while the scene is built. `seal` freezes the
//! set; from then on the animation loop only mutates transforms.

use crate::error::SceneError;
use crate::geometry::GeometryHandle;
use fnv::FnvHashMap;
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::TAU;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position, Euler XYZ rotation (radians) and scale of one object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, euler_xyz(self.rotation), self.position)
    }
}

/// Advance an angle and keep it in `[0, TAU)` so small per-frame steps are
/// never rounded away on a long-running page.
#[inline]
pub fn advance_angle(angle: f32, step: f32) -> f32 {
    (angle + step).rem_euclid(TAU)
}

#[inline]
pub(crate) fn euler_xyz(r: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
}

/// Text shown by the UI when an artifact is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactInfo {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub id: ObjectId,
    pub geometry: GeometryHandle,
    pub transform: Transform,
    pub base_scale: Vec3,
    pub info: ArtifactInfo,
    pub color: [f32; 4],
}

impl SceneObject {
    pub fn new(id: ObjectId, geometry: GeometryHandle, position: Vec3, info: ArtifactInfo) -> Self {
        Self {
            id,
            geometry,
            transform: Transform::at(position),
            base_scale: Vec3::ONE,
            info,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn with_base_scale(mut self, scale: Vec3) -> Self {
        self.base_scale = scale;
        self.transform.scale = scale;
        self
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    objects: Vec<SceneObject>,
    index: FnvHashMap<ObjectId, usize>,
    // Orientation (Euler XYZ) of the whole artifact group; driven by parallax.
    group_rotation: Vec3,
    sealed: bool,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, object: SceneObject) -> Result<(), SceneError> {
        if self.sealed {
            return Err(SceneError::config(format!(
                "cannot register {} after the scene started",
                object.id
            )));
        }
        if self.index.contains_key(&object.id) {
            return Err(SceneError::config(format!("duplicate object id {}", object.id)));
        }
        let s = object.base_scale;
        if !s.is_finite() || s.min_element() <= 0.0 {
            return Err(SceneError::config(format!(
                "object {} has invalid base scale {:?}",
                object.id, s
            )));
        }
        log::debug!("[registry] register {} '{}'", object.id, object.info.title);
        self.index.insert(object.id, self.objects.len());
        self.objects.push(object);
        Ok(())
    }

    /// Freeze the object set. Called when the animation loop takes ownership.
    pub fn seal(&mut self) {
        if !self.sealed {
            log::info!("[registry] sealed with {} objects", self.objects.len());
        }
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Objects in registration order.
    pub fn all(&self) -> &[SceneObject] {
        &self.objects
    }

    pub(crate) fn all_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    pub fn get(&self, id: ObjectId) -> Result<&SceneObject, SceneError> {
        self.index
            .get(&id)
            .map(|&i| &self.objects[i])
            .ok_or(SceneError::NotFound(id))
    }

    pub(crate) fn get_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject, SceneError> {
        match self.index.get(&id) {
            Some(&i) => Ok(&mut self.objects[i]),
            None => Err(SceneError::NotFound(id)),
        }
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn group_rotation(&self) -> Vec3 {
        self.group_rotation
    }

    pub fn set_group_rotation(&mut self, rotation: Vec3) {
        self.group_rotation = rotation;
    }

    #[inline]
    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_quat(euler_xyz(self.group_rotation))
    }

    /// Object-to-world matrix including the group orientation.
    #[inline]
    pub fn world_matrix(&self, object: &SceneObject) -> Mat4 {
        self.group_matrix() * object.transform.matrix()
    }
}
