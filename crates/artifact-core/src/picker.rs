//! Pointer-to-object hit testing.

use crate::camera::{Camera, Ray};
use crate::input::PointerState;
use crate::registry::{ObjectId, Registry, SceneObject};
use glam::Mat4;

/// Ray test against an object's geometry, provided by whoever owns the
/// geometry. Returns the distance along `ray` to the nearest hit.
pub trait Intersect {
    fn intersect(&self, ray: &Ray, object: &SceneObject, world: &Mat4) -> Option<f32>;
}

impl<T: Intersect + ?Sized> Intersect for &T {
    fn intersect(&self, ray: &Ray, object: &SceneObject, world: &Mat4) -> Option<f32> {
        (**self).intersect(ray, object, world)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub id: ObjectId,
    pub index: usize,
    pub distance: f32,
}

pub struct Picker<I> {
    intersector: I,
}

impl<I: Intersect> Picker<I> {
    pub fn new(intersector: I) -> Self {
        Self { intersector }
    }

    /// Id of the nearest object under the pointer, if any.
    pub fn pick(&self, registry: &Registry, camera: &Camera, pointer: PointerState) -> Option<ObjectId> {
        self.pick_ray(registry, &camera.cast_ray(pointer)).map(|h| h.id)
    }

    /// Nearest positive hit along `ray`. Objects are visited in registration
    /// order and only a strictly closer hit replaces the current best, so equal
    /// distances resolve to the lower registry index.
    pub fn pick_ray(&self, registry: &Registry, ray: &Ray) -> Option<Hit> {
        let group = registry.group_matrix();
        let mut best: Option<Hit> = None;
        for (index, object) in registry.all().iter().enumerate() {
            let world = group * object.transform.matrix();
            let Some(distance) = self.intersector.intersect(ray, object, &world) else {
                continue;
            };
            if !(distance.is_finite() && distance > 0.0) {
                continue;
            }
            match best {
                Some(b) if distance >= b.distance => {}
                _ => {
                    best = Some(Hit {
                        id: object.id,
                        index,
                        distance,
                    })
                }
            }
        }
        best
    }
}
