// Shared scene/interaction tuning constants used by the core and the web frontend.

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_Z: f32 = 5.0; // eye distance from the artifact ring
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Scene layout
pub const RING_RADIUS: f32 = 2.5; // artifacts sit on a ring in the XY plane
pub const BASE_SCALE: f32 = 1.0; // idle artifact size

// Per-frame motion (radians per frame, not per second)
pub const IDLE_SPIN_PER_FRAME: f32 = 0.005;
pub const PARTICLE_DRIFT_PER_FRAME: f32 = 0.001;

// Hover amplification
pub const HOVER_SCALE_MULTIPLIER: f32 = 1.2;
pub const HOVER_SPIN_BOOST_PER_FRAME: f32 = 0.05; // added on top of the idle spin

// Parallax: group rotation (radians) per unit of normalized pointer offset
pub const PARALLAX_STRENGTH: f32 = 0.1;

// Background particles
pub const PARTICLE_COUNT: usize = 700;
pub const PARTICLE_SPREAD: f32 = 15.0; // edge length of the cube the stars fill

// Distance fog (exp2)
pub const FOG_DENSITY: f32 = 0.02;
