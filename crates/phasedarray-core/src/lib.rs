pub mod color;
pub mod constants;
pub mod directivity;
pub mod field;
pub mod lut;
pub mod params;
pub mod polar;
pub mod presets;
pub mod query;
pub mod scene;
pub mod state;
pub mod uniforms;

pub use color::*;
pub use constants::*;
pub use directivity::*;
pub use lut::LutRaster;
pub use params::*;
pub use polar::*;
pub use presets::*;
pub use query::*;
pub use scene::*;
pub use state::*;
pub use uniforms::*;
