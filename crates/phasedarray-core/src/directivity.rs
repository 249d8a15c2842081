//! Emitter directivity (radiation) patterns.
//!
//! Steering is baked into the amplitude: the cardioid lobe is
//! `1 + sin(azimuth - steering)`, identical to the expression in
//! `field.wgsl`, so the polar diagram and the field agree.

use crate::constants::POLAR_SAMPLES;
use glam::Vec2;
use std::f32::consts::TAU;

/// Relative radiated amplitude as a function of azimuth (radians) and
/// steering direction (radians). Implementations return values >= 0.
pub trait RadiationPattern {
    fn amplitude(&self, azimuth: f32, steering: f32) -> f32;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Directivity {
    Uniform,
    #[default]
    Cardioid,
}

impl Directivity {
    /// Numeric id stored in the `rp_type` parameter and read by the shader.
    pub const fn id(self) -> f32 {
        match self {
            Directivity::Uniform => 0.0,
            Directivity::Cardioid => 1.0,
        }
    }

    /// Unknown or non-finite ids fall back to `Uniform`.
    pub fn from_id(id: f32) -> Self {
        match id.round() as i32 {
            1 => Directivity::Cardioid,
            _ => Directivity::Uniform,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Directivity::Uniform => Directivity::Cardioid,
            Directivity::Cardioid => Directivity::Uniform,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Directivity::Uniform => "uniform",
            Directivity::Cardioid => "cardioid",
        }
    }
}

impl RadiationPattern for Directivity {
    #[inline]
    fn amplitude(&self, azimuth: f32, steering: f32) -> f32 {
        match self {
            Directivity::Uniform => 1.0,
            Directivity::Cardioid => 1.0 + (azimuth - steering).sin(),
        }
    }
}

/// `rp_direction` is stored in turns.
#[inline]
pub fn steering_radians(turns: f32) -> f32 {
    turns * TAU
}

/// Sample azimuths for the display contour: `POLAR_SAMPLES` equal steps
/// over \[0, 2π), starting at 0.
pub fn sample_azimuths() -> impl Iterator<Item = f32> {
    (0..POLAR_SAMPLES).map(|i| TAU * i as f32 / POLAR_SAMPLES as f32)
}

/// Open contour of the pattern scaled by `radius`; the first point is at
/// azimuth 0 and the caller closes the path back to it.
pub fn contour<P: RadiationPattern + ?Sized>(pattern: &P, steering: f32, radius: f32) -> Vec<Vec2> {
    sample_azimuths()
        .map(|theta| {
            let r = radius * pattern.amplitude(theta, steering);
            Vec2::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}
