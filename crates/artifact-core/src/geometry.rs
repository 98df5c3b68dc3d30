//! CPU-side artifact meshes.
//!
//! The renderer uploads the wireframe edges; the picker tests rays against
//! the triangles. Meshes are centred on the origin in object space.

use crate::camera::Ray;
use crate::picker::Intersect;
use crate::registry::SceneObject;
use fnv::FnvHashSet;
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Opaque reference to a mesh held by a `GeometryLibrary`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeometryHandle(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Icosahedron {
        radius: f32,
    },
    Octahedron {
        radius: f32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
    pub bounding_radius: f32,
}

impl Mesh {
    pub fn new(positions: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Self {
        let bounding_radius = positions.iter().map(|p| p.length()).fold(0.0, f32::max);
        Self {
            positions,
            triangles,
            bounding_radius,
        }
    }

    pub fn from_shape(shape: Shape) -> Self {
        match shape {
            Shape::Icosahedron { radius } => icosahedron(radius),
            Shape::Octahedron { radius } => octahedron(radius),
            Shape::TorusKnot {
                radius,
                tube,
                tubular_segments,
                radial_segments,
                p,
                q,
            } => torus_knot(radius, tube, tubular_segments, radial_segments, p, q),
        }
    }

    /// Unique undirected edges, in first-seen order.
    pub fn edges(&self) -> Vec<[u32; 2]> {
        let mut seen = FnvHashSet::default();
        let mut out = Vec::with_capacity(self.triangles.len() * 3 / 2);
        for tri in &self.triangles {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    out.push([key.0, key.1]);
                }
            }
        }
        out
    }

    /// Line-list vertex positions for wireframe drawing.
    pub fn wireframe_vertices(&self) -> Vec<Vec3> {
        self.edges()
            .iter()
            .flat_map(|[a, b]| [self.positions[*a as usize], self.positions[*b as usize]])
            .collect()
    }

    /// Nearest positive hit of an object-space ray against the triangles.
    /// `dir` need not be unit length; the result is in units of `dir`.
    pub fn raycast_local(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        let mut best: Option<f32> = None;
        for tri in &self.triangles {
            let a = self.positions[tri[0] as usize];
            let b = self.positions[tri[1] as usize];
            let c = self.positions[tri[2] as usize];
            if let Some(t) = ray_triangle(origin, dir, a, b, c) {
                if best.map_or(true, |bt| t < bt) {
                    best = Some(t);
                }
            }
        }
        best
    }
}

// Rays through a shared edge or vertex must not slip between triangles.
const BARY_EPS: f32 = 1e-6;

/// Möller–Trumbore, double sided.
#[inline]
pub fn ray_triangle(origin: Vec3, dir: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let e1 = b - a;
    let e2 = c - a;
    let p = dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < 1e-9 {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = origin - a;
    let u = s.dot(p) * inv_det;
    if !(-BARY_EPS..=1.0 + BARY_EPS).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = dir.dot(q) * inv_det;
    if v < -BARY_EPS || u + v > 1.0 + BARY_EPS {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t > 1e-6).then_some(t)
}

/// Distance along a unit-direction ray to the first sphere hit in front of
/// the origin. Misses when the origin is inside the sphere.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

// True when the ray passes through the sphere anywhere ahead of (or around)
// its origin. Used as a cheap reject before triangle tests.
#[inline]
fn ray_touches_sphere(ray: &Ray, center: Vec3, radius: f32) -> bool {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    disc >= 0.0 && -b + disc.sqrt() >= 0.0
}

#[inline]
pub(crate) fn max_axis_scale(world: &Mat4) -> f32 {
    world
        .x_axis
        .truncate()
        .length()
        .max(world.y_axis.truncate().length())
        .max(world.z_axis.truncate().length())
}

/// Meshes addressed by `GeometryHandle`. Implements exact mesh picking.
#[derive(Debug, Default)]
pub struct GeometryLibrary {
    meshes: Vec<Mesh>,
}

impl GeometryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mesh: Mesh) -> GeometryHandle {
        self.meshes.push(mesh);
        GeometryHandle(self.meshes.len() - 1)
    }

    pub fn get(&self, handle: GeometryHandle) -> Option<&Mesh> {
        self.meshes.get(handle.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GeometryHandle, &Mesh)> {
        self.meshes
            .iter()
            .enumerate()
            .map(|(i, m)| (GeometryHandle(i), m))
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl Intersect for GeometryLibrary {
    fn intersect(&self, ray: &Ray, object: &SceneObject, world: &Mat4) -> Option<f32> {
        let mesh = self.get(object.geometry)?;
        let center = world.transform_point3(Vec3::ZERO);
        if !ray_touches_sphere(ray, center, mesh.bounding_radius * max_axis_scale(world)) {
            return None;
        }
        // Object space keeps the world ray parameter: origin + t*dir maps to
        // the same t because the direction is transformed without normalizing.
        let inv = world.inverse();
        let origin = inv.transform_point3(ray.origin);
        let dir = inv.transform_vector3(ray.direction);
        mesh.raycast_local(origin, dir)
    }
}

/// Coarse picking against a sphere of fixed radius around each object,
/// scaled with the object.
#[derive(Clone, Copy, Debug)]
pub struct ProxySpheres {
    pub radius: f32,
}

impl Intersect for ProxySpheres {
    fn intersect(&self, ray: &Ray, _object: &SceneObject, world: &Mat4) -> Option<f32> {
        let center = world.transform_point3(Vec3::ZERO);
        ray_sphere(
            ray.origin,
            ray.direction,
            center,
            self.radius * max_axis_scale(world),
        )
    }
}

fn icosahedron(radius: f32) -> Mesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let triangles = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    let positions = raw
        .iter()
        .map(|p| Vec3::from_array(*p).normalize() * radius)
        .collect();
    Mesh::new(positions, triangles)
}

fn octahedron(radius: f32) -> Mesh {
    let positions = vec![
        Vec3::X * radius,
        Vec3::NEG_X * radius,
        Vec3::Y * radius,
        Vec3::NEG_Y * radius,
        Vec3::Z * radius,
        Vec3::NEG_Z * radius,
    ];
    let triangles = vec![
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    Mesh::new(positions, triangles)
}

fn torus_knot(radius: f32, tube: f32, tubular: u32, radial: u32, p: u32, q: u32) -> Mesh {
    let tubular = tubular.max(3);
    let radial = radial.max(3);
    let (p, q) = (p.max(1) as f32, q as f32);
    let curve = |u: f32| {
        let qu_over_p = q / p * u;
        let cs = qu_over_p.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * qu_over_p.sin() * 0.5,
        )
    };

    let mut positions = Vec::with_capacity(((tubular + 1) * (radial + 1)) as usize);
    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * p * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);
        // Frenet-like frame along the curve
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n).normalize();
        let n = b.cross(t).normalize();
        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            positions.push(p1 + n * cx + b * cy);
        }
    }

    let stride = radial + 1;
    let mut triangles = Vec::with_capacity((tubular * radial * 2) as usize);
    for j in 1..=tubular {
        for i in 1..=radial {
            let a = stride * (j - 1) + (i - 1);
            let b = stride * j + (i - 1);
            let c = stride * j + i;
            let d = stride * (j - 1) + i;
            triangles.push([a, b, d]);
            triangles.push([b, c, d]);
        }
    }
    Mesh::new(positions, triangles)
}
