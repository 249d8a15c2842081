pub use phasedarray_core::*;

// Shaders bundled as string constants
pub static FIELD_WGSL: &str = include_str!("../../shaders/field.wgsl");
