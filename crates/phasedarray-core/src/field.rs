//! The field simulation's parameter table.
//!
//! Slot numbers are the lanes `field.wgsl` reads; keep both in step.

use crate::constants::DEFAULT_LUT_STEPS;
use crate::directivity::Directivity;
use crate::params::ParameterRegistry;
use crate::uniforms::UniformSlot;

pub const N_SOURCES: &str = "n_sources";
pub const ATTENUATION: &str = "attenuation";
pub const PHASE_VELOCITY: &str = "phase_velocity";
pub const PHASE_DELAY: &str = "phase_delay";
pub const POWER: &str = "power";
pub const FREQUENCY: &str = "frequency";
pub const K_NOISE: &str = "k_noise";
pub const K_ALPHA: &str = "k_alpha";
pub const RP_TYPE: &str = "rp_type";
pub const RP_DIRECTION: &str = "rp_direction";
pub const LUT_STEPS: &str = "lut_steps";

#[derive(Clone, Copy, Debug)]
pub struct ParamDecl {
    pub name: &'static str,
    pub default: f32,
    /// Shader lane, `None` for values consumed on the CPU only.
    pub slot: Option<u8>,
}

const fn decl(name: &'static str, default: f32, slot: Option<u8>) -> ParamDecl {
    ParamDecl {
        name,
        default,
        slot,
    }
}

pub const FIELD_PARAMS: [ParamDecl; 11] = [
    decl(N_SOURCES, 30.0, Some(0)),
    decl(ATTENUATION, 0.0, Some(1)),
    decl(PHASE_VELOCITY, 100.0, Some(2)),
    decl(PHASE_DELAY, 0.0, Some(3)),
    decl(POWER, 500.0, Some(4)),
    decl(FREQUENCY, 2.0, Some(5)),
    decl(K_NOISE, 0.04, Some(6)),
    decl(K_ALPHA, 0.01, Some(7)),
    decl(RP_TYPE, Directivity::Cardioid.id(), Some(8)),
    decl(RP_DIRECTION, 0.0, Some(9)),
    decl(LUT_STEPS, DEFAULT_LUT_STEPS, None),
];

/// Declare every field parameter and bind its shader slot. Safe to call
/// again; values already present are kept.
pub fn declare_field_params(registry: &mut ParameterRegistry<UniformSlot>) {
    for d in FIELD_PARAMS.iter() {
        registry.declare(d.name, d.default);
        if let Some(slot) = d.slot {
            // declared on the line above
            _ = registry.bind_location(d.name, UniformSlot(slot));
        }
    }
}
