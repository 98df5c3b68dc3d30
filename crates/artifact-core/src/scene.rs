//! Scene construction from the fixed project list, plus the background
//! particle field.

use crate::constants::{BASE_SCALE, PARTICLE_COUNT, PARTICLE_SPREAD, RING_RADIUS};
use crate::error::SceneError;
use crate::geometry::{GeometryLibrary, Mesh, Shape};
use crate::registry::{advance_angle, ArtifactInfo, ObjectId, Registry, SceneObject};
use glam::{Mat4, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub color: u32, // 0xRRGGBB
    pub shape: Shape,
}

pub const DEFAULT_PROJECTS: &[Project] = &[
    Project {
        title: "Project Alpha",
        description: "A high-performance C++ compiler designed for custom architecture.",
        color: 0xff0055,
        shape: Shape::Icosahedron { radius: 0.8 },
    },
    Project {
        title: "Deep Mind",
        description: "Neural Network visualization tool built with Python and WebGL.",
        color: 0x00ffaa,
        shape: Shape::TorusKnot {
            radius: 0.5,
            tube: 0.2,
            tubular_segments: 100,
            radial_segments: 16,
            p: 2,
            q: 3,
        },
    },
    Project {
        title: "System Zero",
        description: "Kernel level anti-cheat system for competitive gaming.",
        color: 0x5500ff,
        shape: Shape::Octahedron { radius: 0.8 },
    },
];

#[inline]
pub fn hex_to_rgba(hex: u32) -> [f32; 4] {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    [r, g, b, 1.0]
}

/// Position of the `index`-th of `count` artifacts on the layout ring.
#[inline]
pub fn ring_position(index: usize, count: usize, radius: f32) -> Vec3 {
    let angle = index as f32 / count.max(1) as f32 * TAU;
    Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
}

/// Build meshes and the registry for `projects`. Ids start at 1 in list order.
pub fn build_scene(
    projects: &[Project],
    geometry: &mut GeometryLibrary,
) -> Result<Registry, SceneError> {
    if projects.is_empty() {
        return Err(SceneError::config("project list is empty"));
    }
    let mut registry = Registry::new();
    for (i, project) in projects.iter().enumerate() {
        let mesh = Mesh::from_shape(project.shape);
        if mesh.triangles.is_empty() {
            return Err(SceneError::config(format!(
                "project '{}' produced an empty mesh",
                project.title
            )));
        }
        let handle = geometry.insert(mesh);
        let object = SceneObject::new(
            ObjectId(i as u32 + 1),
            handle,
            ring_position(i, projects.len(), RING_RADIUS),
            ArtifactInfo {
                title: project.title.to_string(),
                description: project.description.to_string(),
            },
        )
        .with_color(hex_to_rgba(project.color))
        .with_base_scale(Vec3::splat(BASE_SCALE));
        registry.register(object)?;
    }
    Ok(registry)
}

#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub count: usize,
    pub spread: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            spread: PARTICLE_SPREAD,
        }
    }
}

/// Static star positions spinning slowly about the Y axis.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub rotation_y: f32,
}

impl ParticleField {
    pub fn generate<R: Rng>(params: &ParticleParams, rng: &mut R) -> Self {
        let half = params.spread * 0.5;
        if !half.is_finite() || half <= 0.0 {
            return Self {
                positions: vec![Vec3::ZERO; params.count],
                rotation_y: 0.0,
            };
        }
        let positions = (0..params.count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        Self {
            positions,
            rotation_y: 0.0,
        }
    }

    pub fn advance(&mut self, step: f32) {
        self.rotation_y = advance_angle(self.rotation_y, step);
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }
}
