//! Ephemeral view state owned by the frontend's event handlers.
//!
//! Nothing here reaches the URL. The frame loop only reads it.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneState {
    /// Pointer is over the polar diagram.
    pub polar_hover: bool,
    /// Field canvas backing size in device pixels.
    pub canvas_size: [u32; 2],
    /// Corner quad in canvas-centered pixels:
    /// (+x,+y) (-x,+y) (+x,-y) (-x,-y), matching the fullscreen strip order.
    pub bounds: [f32; 8],
    /// Last pointer position normalized to the field canvas.
    pub pointer_uv: [f32; 2],
}

impl SceneState {
    pub fn new(width: u32, height: u32) -> Self {
        let mut s = Self {
            pointer_uv: [0.5, 0.5],
            ..Self::default()
        };
        s.set_canvas_size(width, height);
        s
    }

    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.canvas_size = [width, height];
        self.bounds = corner_bounds(width as f32, height as f32);
    }

    #[inline]
    pub fn resolution(&self) -> [f32; 2] {
        [self.canvas_size[0] as f32, self.canvas_size[1] as f32]
    }
}

pub fn corner_bounds(width: f32, height: f32) -> [f32; 8] {
    let hw = width / 2.0;
    let hh = height / 2.0;
    [hw, hh, -hw, hh, hw, -hh, -hw, -hh]
}
