// Web frontend constants: DOM hooks, clear colour and diagnostics.
// Scene tuning lives in `artifact_core`; these only concern the page and the
// GPU surface.

// DOM element ids expected in index.html
pub const CANVAS_ID: &str = "scene-canvas";
pub const MODAL_ID: &str = "modal";
pub const MODAL_TITLE_ID: &str = "modal-title";
pub const MODAL_DESC_ID: &str = "modal-desc";
pub const MODAL_CLOSE_ID: &str = "close-btn";
pub const HIDDEN_CLASS: &str = "hidden";

// Cursor styles while idle / hovering an artifact
pub const CURSOR_DEFAULT: &str = "default";
pub const CURSOR_HOVER: &str = "pointer";

// Clear colour doubles as fog colour (black)
pub const CLEAR_RGB: [f32; 3] = [0.0, 0.0, 0.0];

// Particle tint and opacity
pub const PARTICLE_RGBA: [f32; 4] = [1.0, 1.0, 1.0, 0.8];

// Log average frame rate every N frames (debug level)
pub const FPS_LOG_INTERVAL_FRAMES: u32 = 600;
