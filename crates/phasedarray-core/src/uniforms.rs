//! GPU-facing uniform layout for the field shader.
//!
//! Must match `Uniforms` in `shaders/field.wgsl`: resolution, mouse, time,
//! padding to 16 bytes, then `array<vec4<f32>, 4>` of parameter lanes.

use crate::constants::UNIFORM_SLOTS;

/// Scalar lane in the shader's parameter table, used as the registry's
/// location handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniformSlot(pub u8);

impl UniformSlot {
    #[inline]
    pub fn lane(self) -> Option<(usize, usize)> {
        let i = self.0 as usize;
        (i < UNIFORM_SLOTS).then_some((i / 4, i % 4))
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FieldUniforms {
    pub resolution: [f32; 2],
    pub mouse: [f32; 2],
    pub time: f32,
    pub _pad: [f32; 3],
    pub params: [[f32; 4]; UNIFORM_SLOTS / 4],
}

impl FieldUniforms {
    pub fn new(resolution: [f32; 2], mouse: [f32; 2], time: f32) -> Self {
        Self {
            resolution,
            mouse,
            time,
            ..Self::default()
        }
    }

    /// Out-of-range slots are ignored.
    pub fn set_slot(&mut self, slot: UniformSlot, value: f32) {
        if let Some((row, col)) = slot.lane() {
            self.params[row][col] = value;
        }
    }

    pub fn slot(&self, slot: UniformSlot) -> Option<f32> {
        slot.lane().map(|(row, col)| self.params[row][col])
    }

    pub fn fill_params<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = (&'a UniformSlot, f32)>,
    {
        for (slot, value) in values {
            self.set_slot(*slot, value);
        }
    }
}
