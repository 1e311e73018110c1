use crate::color::Color;

/// One named color of the built-in catalog. The `hex` and `color` fields
/// always describe the same value.
#[derive(Debug, Clone, Copy)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: Color,
    pub hex: &'static str,
}

/// Background group: warm base tones.
pub const BACKGROUNDS: [PaletteEntry; 3] = [
    PaletteEntry {
        name: "Deep Red",
        color: Color::from_rgb8(174, 45, 39),
        hex: "#ae2d27",
    },
    PaletteEntry {
        name: "Sandy Beige",
        color: Color::from_rgb8(223, 180, 146),
        hex: "#dfb492",
    },
    PaletteEntry {
        name: "Bright Yellow",
        color: Color::from_rgb8(255, 201, 52),
        hex: "#ffc934",
    },
];

/// Element group: saturated accents meant to sit on the backgrounds.
pub const ELEMENTS: [PaletteEntry; 3] = [
    PaletteEntry {
        name: "Vibrant Green",
        color: Color::from_rgb8(30, 213, 95),
        hex: "#1ed55f",
    },
    PaletteEntry {
        name: "Neon Yellow",
        color: Color::from_rgb8(255, 255, 3),
        hex: "#ffff03",
    },
    PaletteEntry {
        name: "Bold Red",
        color: Color::from_rgb8(235, 38, 47),
        hex: "#eb262f",
    },
];

/// Every catalog entry, backgrounds first, order preserved.
pub fn all_entries() -> Vec<PaletteEntry> {
    BACKGROUNDS.iter().chain(ELEMENTS.iter()).copied().collect()
}

/// The color 180 degrees across the wheel, saturation and lightness kept.
pub fn complementary(base: Color) -> Color {
    let hsl = base.to_hsl();
    Color::from_hsl(hsl.hue + 180.0, hsl.saturation, hsl.lightness)
}

/// The two neighbors 30 degrees to either side, ordered [+30, -30].
/// Hue wraps, so a base near 0 degrees lands on the far end of the wheel.
pub fn analogous(base: Color) -> [Color; 2] {
    let hsl = base.to_hsl();
    [
        Color::from_hsl(hsl.hue + 30.0, hsl.saturation, hsl.lightness),
        Color::from_hsl(hsl.hue - 30.0, hsl.saturation, hsl.lightness),
    ]
}
