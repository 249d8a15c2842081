// Pure pointer and sizing math; no web-sys so root tests can include it.

/// Client rectangle of an element in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CssRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Pointer position normalized to `rect`, clamped to `[0, 1]`.
/// A degenerate rectangle maps to the center.
#[inline]
pub fn pointer_uv(rect: CssRect, client_x: f32, client_y: f32) -> [f32; 2] {
    if rect.width > 0.0 && rect.height > 0.0 {
        let u = ((client_x - rect.left) / rect.width).clamp(0.0, 1.0);
        let v = ((client_y - rect.top) / rect.height).clamp(0.0, 1.0);
        [u, v]
    } else {
        [0.5, 0.5]
    }
}

/// Canvas backing size for a CSS size and device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64, min_px: u32) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_width * dpr).max(0.0) as u32;
    let h = (css_height * dpr).max(0.0) as u32;
    (w.max(min_px), h.max(min_px))
}

/// Seconds elapsed as `f32`, wrapped so long sessions keep shader precision.
#[inline]
pub fn shader_time(elapsed_secs: f64, wrap_secs: f64) -> f32 {
    if wrap_secs > 0.0 {
        (elapsed_secs % wrap_secs) as f32
    } else {
        elapsed_secs as f32
    }
}
