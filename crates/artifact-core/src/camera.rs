//! Perspective camera and screen-to-world ray construction.
//!
//! Platform-free: the web frontend owns one `Camera`, updates its aspect on
//! resize, and hands it to the picker and renderer every frame.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};
use crate::input::PointerState;
use glam::{Mat4, Vec3, Vec4};

/// Half-line in world space. `direction` is unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraParams {
    pub fovy_degrees: f32,
    pub eye: Vec3,
    pub target: Vec3,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fovy_degrees: CAMERA_FOV_DEG,
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(params: &CameraParams, width: u32, height: u32) -> Self {
        let mut camera = Self {
            eye: params.eye,
            target: params.target,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: params.fovy_degrees.to_radians(),
            znear: params.znear,
            zfar: params.zfar,
        };
        camera.resize(width, height);
        camera
    }

    /// Recompute the aspect ratio from viewport dimensions in pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a pointer position.
    ///
    /// The pointer's NDC is unprojected at the near (z=0) and far (z=1) clip
    /// planes; the ray starts at the eye and points from the near point to the
    /// far point. Uses the camera's current aspect, so callers must resize the
    /// camera before picking after a viewport change.
    pub fn cast_ray(&self, pointer: PointerState) -> Ray {
        let inv = self.view_projection().inverse();
        let near = unproject(inv, pointer.x, pointer.y, 0.0);
        let far = unproject(inv, pointer.x, pointer.y, 1.0);
        Ray::new(self.eye, far - near)
    }
}

#[inline]
fn unproject(inv_view_proj: Mat4, x: f32, y: f32, z: f32) -> Vec3 {
    let p = inv_view_proj * Vec4::new(x, y, z, 1.0);
    p.truncate() / p.w
}
