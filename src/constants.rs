/// DOM element ids the front-end looks up in `index.html`.
///
/// Parameter inputs are looked up by the parameter name itself
/// (`<input id="frequency">`), so they have no entry here.
pub const FIELD_CANVAS_ID: &str = "field_canvas";
pub const POLAR_CANVAS_ID: &str = "rp_canvas";
pub const RAMP_CANVAS_ID: &str = "ramp";
pub const LUT_LIST_ID: &str = "lut_list";
pub const OPTIONS_ID: &str = "options";
pub const TOGGLE_OPTIONS_ID: &str = "toggle_options";

// CSS classes toggled on panels
pub const HIDDEN_CLASS: &str = "hidden";
pub const OPEN_CLASS: &str = "open";

// Preset list items carry their stops here, in list form (`#rrggbb,...`)
pub const COLORS_ATTR: &str = "data-colors";

/// Minimum backing size for the field canvas; WebGPU rejects 0x0 surfaces.
pub const MIN_CANVAS_PX: u32 = 1;

/// Shader time wraps after this many seconds to keep `f32` precision.
pub const TIME_WRAP_SECS: f64 = 3600.0;
