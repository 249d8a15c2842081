//! Application state shared between UI handlers and the frame loop.
//!
//! Handlers mutate it through the methods below; the frame loop only reads.
//! LUT changes bump `lut_revision` so the loop knows when to re-upload the
//! texture without having to mutate anything.

use crate::color::ColorStops;
use crate::constants::{LUT_MAX_STEPS, STEERING_WHEEL_STEP};
use crate::directivity::Directivity;
use crate::field::{declare_field_params, LUT_STEPS, RP_DIRECTION, RP_TYPE};
use crate::lut::LutRaster;
use crate::params::{ParamError, ParameterRegistry};
use crate::polar::PolarView;
use crate::presets::default_stops;
use crate::query::Hydrated;
use crate::scene::SceneState;
use crate::uniforms::{FieldUniforms, UniformSlot};

pub struct AppState {
    pub registry: ParameterRegistry<UniformSlot>,
    pub scene: SceneState,
    stops: ColorStops,
    lut_revision: u64,
}

impl AppState {
    /// Hydrate from `query` first so URL values pre-seed the declarations.
    pub fn from_query<I, K, V>(query: I, scene: SceneState) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut registry = ParameterRegistry::new();
        let Hydrated { stops, .. } = registry.hydrate_from_query(query);
        declare_field_params(&mut registry);
        for (key, _) in registry.pending_seeds() {
            log::debug!("[state] ignoring unknown query key {}", key);
        }
        Self {
            registry,
            scene,
            stops: stops.unwrap_or_else(default_stops),
            lut_revision: 0,
        }
    }

    pub fn stops(&self) -> &ColorStops {
        &self.stops
    }

    pub fn lut_revision(&self) -> u64 {
        self.lut_revision
    }

    pub fn select_stops(&mut self, stops: ColorStops) {
        self.stops = stops;
        self.lut_revision += 1;
    }

    /// `lut_steps` as a band count; NaN or out-of-range values clamp into
    /// `1..=LUT_MAX_STEPS`.
    pub fn lut_steps(&self) -> usize {
        let raw = self.registry.number(LUT_STEPS).unwrap_or(1.0);
        if raw.is_nan() {
            return 1;
        }
        (raw.round().max(1.0) as usize).min(LUT_MAX_STEPS)
    }

    pub fn lut_raster(&self, width: usize, height: usize) -> LutRaster {
        LutRaster::build(&self.stops, width, height, self.lut_steps())
    }

    pub fn directivity(&self) -> Directivity {
        Directivity::from_id(self.registry.number(RP_TYPE).unwrap_or(0.0))
    }

    pub fn steering_turns(&self) -> f32 {
        self.registry.number(RP_DIRECTION).unwrap_or(0.0)
    }

    pub fn polar_view(&self) -> PolarView {
        PolarView {
            pattern: self.directivity(),
            steering_turns: self.steering_turns(),
            hovered: self.scene.polar_hover,
        }
    }

    /// A control edit. Editing `lut_steps` invalidates the LUT.
    pub fn apply_control_input(&mut self, name: &str, raw: &str) -> Result<(), ParamError> {
        self.registry.apply_control_input(name, raw)?;
        if name == LUT_STEPS {
            self.lut_revision += 1;
        }
        Ok(())
    }

    /// One wheel notch over the polar diagram; scrolling up (`delta_y < 0`)
    /// steers counter-clockwise.
    pub fn steer_by_wheel(&mut self, delta_y: f64) -> Result<(), ParamError> {
        let step = if delta_y < 0.0 {
            STEERING_WHEEL_STEP
        } else {
            -STEERING_WHEEL_STEP
        };
        let turns = self.steering_turns() + step;
        self.registry.set_number(RP_DIRECTION, turns)
    }

    pub fn toggle_directivity(&mut self) -> Result<Directivity, ParamError> {
        let next = self.directivity().toggled();
        self.registry.set_number(RP_TYPE, next.id())?;
        Ok(next)
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.registry.serialize_to_query(&self.stops)
    }

    pub fn field_uniforms(&self, time: f32) -> FieldUniforms {
        let mut u = FieldUniforms::new(self.scene.resolution(), self.scene.pointer_uv, time);
        u.fill_params(self.registry.uniforms());
        u
    }
}
