/// Pointer position in normalized device coordinates: x and y in [-1, 1],
/// y pointing up, (0, 0) at the viewport centre.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    /// Normalize a pixel position (origin top-left, y down) against the
    /// current viewport size.
    pub fn from_pixels(px: f32, py: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 || !px.is_finite() || !py.is_finite() {
            return Self::default();
        }
        Self::new((px / width) * 2.0 - 1.0, 1.0 - (py / height) * 2.0)
    }
}

/// What the frame driver consumes at the start of a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: Option<PointerState>,
    pub clicks: u32,
}

/// Input collected between frames. Pointer moves overwrite (last value wins);
/// clicks are counted and drained together on the next frame.
#[derive(Debug, Default)]
pub struct InputQueue {
    pointer: Option<PointerState>,
    clicks: u32,
}

impl InputQueue {
    pub fn record_pointer(&mut self, pointer: PointerState) {
        self.pointer = Some(pointer);
    }

    pub fn record_click(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
    }

    pub fn pending_clicks(&self) -> u32 {
        self.clicks
    }

    pub fn drain(&mut self) -> FrameInput {
        FrameInput {
            pointer: self.pointer.take(),
            clicks: std::mem::take(&mut self.clicks),
        }
    }
}
