use crate::color::{ColorError, ColorStops, Rgb};

/// Named stop list offered in the LUT panel.
#[derive(Clone, Copy, Debug)]
pub struct LutPreset {
    pub name: &'static str,
    pub colors: &'static [Rgb],
}

impl LutPreset {
    pub fn stops(&self) -> Result<ColorStops, ColorError> {
        ColorStops::new(self.colors.iter().copied())
    }
}

const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xff);
const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);
const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

pub fn default_stops() -> ColorStops {
    ColorStops::from_array([BLUE, BLACK, RED])
}

pub const LUT_PRESETS: &[LutPreset] = &[
    LutPreset {
        name: "diverging",
        colors: &[BLUE, BLACK, RED],
    },
    LutPreset {
        name: "gray",
        colors: &[BLACK, WHITE],
    },
    LutPreset {
        name: "fire",
        colors: &[BLACK, RED, Rgb::new(0xff, 0xff, 0x00), WHITE],
    },
    LutPreset {
        name: "ice",
        colors: &[BLACK, Rgb::new(0x1e, 0x3c, 0x8c), Rgb::new(0x5a, 0xc8, 0xff), WHITE],
    },
    LutPreset {
        name: "viridis",
        colors: &[
            Rgb::new(0x44, 0x01, 0x54),
            Rgb::new(0x3b, 0x52, 0x8b),
            Rgb::new(0x21, 0x91, 0x8c),
            Rgb::new(0x5e, 0xc9, 0x62),
            Rgb::new(0xfd, 0xe7, 0x25),
        ],
    },
];

pub fn preset(name: &str) -> Option<&'static LutPreset> {
    LUT_PRESETS.iter().find(|p| p.name == name)
}
