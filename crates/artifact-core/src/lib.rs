pub mod animation;
pub mod camera;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod picker;
pub mod registry;
pub mod scene;

pub use animation::*;
pub use camera::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use interaction::*;
pub use picker::*;
pub use registry::*;
pub use scene::*;

// Wireframe/point shader shared by the web renderer
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
