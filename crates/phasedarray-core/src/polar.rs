//! Polar diagram of the active directivity pattern.
//!
//! Drawing goes through [`PolarSurface`] so the same routine paints a
//! Canvas 2D context in the browser and a recorder in tests. Coordinates are
//! logical units on a `POLAR_SIZE` square with the origin at its center.

use crate::constants::*;
use crate::directivity::{contour, steering_radians, Directivity};
use glam::Vec2;

pub trait PolarSurface {
    fn save(&mut self);
    fn restore(&mut self);
    /// Opaque fill of the square `[-half_extent, half_extent]²`.
    fn fill_background(&mut self, half_extent: f32);
    fn set_stroke(&mut self, alpha: f32, line_width: f32);
    fn begin_path(&mut self);
    /// Full circle around the origin as a new subpath.
    fn circle(&mut self, radius: f32);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn close_path(&mut self);
    fn stroke(&mut self);
}

/// Inputs for one redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarView {
    pub pattern: Directivity,
    /// Steering direction in turns (the `rp_direction` parameter).
    pub steering_turns: f32,
    pub hovered: bool,
}

pub fn draw_polar_diagram<S: PolarSurface + ?Sized>(surface: &mut S, view: &PolarView) {
    surface.save();
    surface.set_stroke(1.0, POLAR_GRID_LINE_WIDTH);
    surface.fill_background(POLAR_HALF_EXTENT);
    draw_grid(surface);

    let alpha = if view.hovered {
        POLAR_CURVE_ALPHA_HOVER
    } else {
        POLAR_CURVE_ALPHA_IDLE
    };
    surface.set_stroke(alpha, POLAR_CURVE_LINE_WIDTH);
    surface.begin_path();
    let steering = steering_radians(view.steering_turns);
    let points = contour(&view.pattern, steering, POLAR_RADIUS_SCALE);
    let mut points = points.into_iter();
    if let Some(first) = points.next() {
        surface.move_to(first);
        for p in points {
            surface.line_to(p);
        }
        surface.close_path();
    }
    surface.stroke();
    surface.restore();
}

fn draw_grid<S: PolarSurface + ?Sized>(surface: &mut S) {
    let h = POLAR_HALF_EXTENT;
    surface.set_stroke(POLAR_GRID_ALPHA, POLAR_GRID_LINE_WIDTH);
    surface.begin_path();
    for r in POLAR_GRID_RADII {
        surface.circle(r);
    }
    let diameters = [
        (Vec2::new(-h, 0.0), Vec2::new(h, 0.0)),
        (Vec2::new(0.0, -h), Vec2::new(0.0, h)),
        (Vec2::new(-h, -h), Vec2::new(h, h)),
        (Vec2::new(-h, h), Vec2::new(h, -h)),
    ];
    for (a, b) in diameters {
        surface.move_to(a);
        surface.line_to(b);
    }
    surface.stroke();
}
