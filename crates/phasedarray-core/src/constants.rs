// Shared tuning constants for the core and the web frontend.

// LUT raster geometry
pub const LUT_WIDTH: usize = 256; // texels per ramp row
pub const LUT_RAMP_HEIGHT: usize = 20; // rows in the on-page ramp previews
pub const LUT_MAX_STEPS: usize = 256;
pub const DEFAULT_LUT_STEPS: f32 = 5.0;

// Polar diagram, in logical units with the origin at the center
pub const POLAR_SIZE: f32 = 100.0;
pub const POLAR_HALF_EXTENT: f32 = POLAR_SIZE / 2.0;
pub const POLAR_RADIUS_SCALE: f32 = 25.0; // display radius of amplitude 1
pub const POLAR_SAMPLES: usize = 72; // 5 degree steps
pub const POLAR_GRID_RADII: [f32; 4] = [12.5, 25.0, 37.5, 50.0];
pub const POLAR_GRID_ALPHA: f32 = 0.25;
pub const POLAR_GRID_LINE_WIDTH: f32 = 1.0;
pub const POLAR_CURVE_ALPHA_HOVER: f32 = 1.0;
pub const POLAR_CURVE_ALPHA_IDLE: f32 = 0.5;
pub const POLAR_CURVE_LINE_WIDTH: f32 = 2.0;

// Interaction
pub const STEERING_WHEEL_STEP: f32 = 0.01; // turns per wheel notch

// GPU parameter table: 4 x vec4<f32> in the field shader
pub const UNIFORM_SLOTS: usize = 16;
