//! Color lookup tables built from [`ColorStops`].
//!
//! [`continuous`] and [`discretized`] produce a single row of colors.
//! [`LutRaster::build`] is the entry point used by every consumer. It picks
//! the continuous ramp for `steps <= 1` and expands the row into RGBA8 pixels.

use crate::color::{ColorStops, Rgb};
use crate::constants::LUT_MAX_STEPS;

/// One gradient row, `width` columns. Column 0 is exactly the first stop and
/// column `width - 1` exactly the last.
pub fn continuous(stops: &ColorStops, width: usize) -> Vec<Rgb> {
    if width <= 1 {
        return vec![stops.first(); width];
    }
    let denom = (width - 1) as f32;
    (0..width)
        .map(|x| stops.sample(x as f32 / denom))
        .collect()
}

/// `steps` equal-width bands (the last absorbs the remainder), each filled
/// with the gradient color at its center.
///
/// Callers wanting the continuous ramp for `steps == 1` go through
/// [`LutRaster::build`]; here a single step yields one flat band.
pub fn discretized(stops: &ColorStops, width: usize, steps: usize) -> Vec<Rgb> {
    if width == 0 {
        return Vec::new();
    }
    let steps = steps.clamp(1, width);
    let band = width / steps;
    let mut row = vec![Rgb::default(); width];
    for k in 0..steps {
        let start = k * band;
        let end = if k + 1 == steps { width } else { start + band };
        let center = (start + end) as f32 * 0.5 / width as f32;
        row[start..end].fill(stops.sample(center));
    }
    row
}

/// RGBA8 pixel buffer, row-major, every row identical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LutRaster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl LutRaster {
    pub fn build(stops: &ColorStops, width: usize, height: usize, steps: usize) -> Self {
        let steps = steps.min(LUT_MAX_STEPS);
        let row = if steps <= 1 {
            continuous(stops, width)
        } else {
            discretized(stops, width, steps)
        };
        Self::from_row(&row, height)
    }

    pub fn from_row(row: &[Rgb], height: usize) -> Self {
        let height = height.max(1);
        let mut pixels = Vec::with_capacity(row.len() * height * 4);
        for _ in 0..height {
            pixels.extend(row.iter().flat_map(|c| c.to_rgba()));
        }
        Self {
            width: row.len(),
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn bytes_per_row(&self) -> usize {
        self.width * 4
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }
}
