//! Colors and ordered color-stop lists.
//!
//! A [`ColorStops`] list always holds at least two colors; construction
//! rejects anything shorter so ramp builders never see a degenerate list.

use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color `{0}` (expected #rrggbb)")]
    InvalidHex(String),
    #[error("a color ramp needs at least 2 stops, got {0}")]
    MissingStops(usize),
}

/// 8-bit sRGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear blend, `t` in \[0, 1\]. `t == 0` and `t == 1`
    /// return the endpoints exactly.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let mix = |a: u8, b: u8| {
            let a = a as f32;
            let b = b as f32;
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, u8::MAX]
    }

    /// Lowercase hex digits without the leading `#`.
    pub fn hex_digits(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidHex(s.to_string()))
        };
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex_digits())
    }
}

/// Evenly spaced gradient stops, first stop at 0 and last at 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorStops(SmallVec<[Rgb; 8]>);

impl ColorStops {
    pub fn new(stops: impl IntoIterator<Item = Rgb>) -> Result<Self, ColorError> {
        let stops: SmallVec<[Rgb; 8]> = stops.into_iter().collect();
        if stops.len() < 2 {
            return Err(ColorError::MissingStops(stops.len()));
        }
        Ok(Self(stops))
    }

    /// Compile-time sized list; fewer than two stops fails to build.
    pub fn from_array<const N: usize>(stops: [Rgb; N]) -> Self {
        const { assert!(N >= 2, "a color ramp needs at least 2 stops") };
        Self(stops.into_iter().collect())
    }

    /// Parse the comma-joined list form, e.g. `#0000ff,#000000,#ff0000`.
    pub fn parse_list(list: &str) -> Result<Self, ColorError> {
        let stops = list
            .split(',')
            .map(str::parse::<Rgb>)
            .collect::<Result<SmallVec<[Rgb; 8]>, _>>()?;
        Self::new(stops)
    }

    pub fn to_list_string(&self) -> String {
        self.0
            .iter()
            .map(Rgb::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// URL form: hex digits without `#`, joined with `-`.
    pub fn encode_query(&self) -> String {
        self.0
            .iter()
            .map(|c| c.hex_digits())
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn decode_query(value: &str) -> Result<Self, ColorError> {
        let stops = value
            .split('-')
            .map(|segment| format!("#{segment}").parse::<Rgb>())
            .collect::<Result<SmallVec<[Rgb; 8]>, _>>()?;
        Self::new(stops)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Rgb] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Rgb {
        self.0[0]
    }

    #[inline]
    pub fn last(&self) -> Rgb {
        self.0[self.0.len() - 1]
    }

    /// Sample the piecewise-linear gradient at `t` in \[0, 1\].
    pub fn sample(&self, t: f32) -> Rgb {
        let segments = self.0.len() - 1;
        let p = t.clamp(0.0, 1.0) * segments as f32;
        let i = (p.floor() as usize).min(segments - 1);
        let frac = p - i as f32;
        self.0[i].lerp(self.0[i + 1], frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_upper_and_lower_case_hex() {
        let a: Rgb = "#FF8000".parse().unwrap();
        let b: Rgb = "ff8000".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Rgb::new(255, 128, 0));
        assert_eq!(a.to_string(), "#ff8000");
    }

    #[test]
    fn rejects_short_and_non_hex_colors() {
        assert!(matches!("#fff".parse::<Rgb>(), Err(ColorError::InvalidHex(_))));
        assert!(matches!("#gg0000".parse::<Rgb>(), Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn single_stop_list_is_rejected() {
        assert_eq!(
            ColorStops::parse_list("#ff0000"),
            Err(ColorError::MissingStops(1))
        );
    }

    #[test]
    fn lerp_hits_endpoints_exactly() {
        let a = Rgb::new(10, 200, 33);
        let b = Rgb::new(250, 0, 34);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}
