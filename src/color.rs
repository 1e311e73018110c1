// File: ./src/color.rs
// Hex <-> RGB <-> HSL conversion engine
use std::fmt;

/// An RGBA color. Channels are stored normalized in [0.0, 1.0].
///
/// Integer views (0-255) are always derived by scaling and truncating,
/// never rounding, so they stay consistent with the hex output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// HSL view of a color: hue in degrees [0, 360), saturation, lightness
/// and alpha as percentages [0, 100]. Derived from RGB, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Color {
    /// Opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses a hex color string. Every character that is not a hex digit
    /// is discarded first (so "#ae2d27", "ae2d27" and "ae 2d 27" all work),
    /// then the digit count selects the shape:
    /// - 3 digits: 4-bit shorthand, each nibble replicated (0xF -> 255), opaque
    /// - 6 digits: RRGGBB, opaque
    /// - 8 digits: AARRGGBB (alpha is the FIRST byte)
    ///
    /// Anything else decodes to the near-transparent fallback
    /// (r = g = b = 1/255, alpha = 0). This never fails.
    pub fn from_hex(input: &str) -> Self {
        let digits: String = input.chars().filter(|c| c.is_ascii_hexdigit()).collect();
        let n = u32::from_str_radix(&digits, 16).unwrap_or(0);

        let (a, r, g, b) = match digits.len() {
            3 => (255, (n >> 8 & 0xF) * 17, (n >> 4 & 0xF) * 17, (n & 0xF) * 17),
            6 => (255, n >> 16 & 0xFF, n >> 8 & 0xFF, n & 0xFF),
            8 => (n >> 24, n >> 16 & 0xFF, n >> 8 & 0xFF, n & 0xFF),
            _ => (0, 1, 1, 1),
        };

        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Formats as uppercase "#RRGGBB". Alpha is dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r8(), self.g8(), self.b8())
    }

    // 8-bit channel views. Truncation, not rounding: the bias is part of
    // the round-trip contract with from_hex/to_hex.
    pub fn r8(&self) -> u8 {
        (self.r * 255.0) as u8
    }
    pub fn g8(&self) -> u8 {
        (self.g * 255.0) as u8
    }
    pub fn b8(&self) -> u8 {
        (self.b * 255.0) as u8
    }
    pub fn a8(&self) -> u8 {
        (self.a * 255.0) as u8
    }

    /// Standard RGB -> HSL transform.
    pub fn to_hsl(&self) -> Hsl {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let lightness = (max + min) / 2.0;

        // Achromatic: hue and saturation are zero by definition
        if max == min {
            return Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness: lightness * 100.0,
                alpha: self.a * 100.0,
            };
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = if max == self.r {
            (self.g - self.b) / delta + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };

        Hsl {
            hue: hue / 6.0 * 360.0,
            saturation: saturation * 100.0,
            lightness: lightness * 100.0,
            alpha: self.a * 100.0,
        }
    }

    /// Builds an opaque color from hue in degrees and saturation/lightness
    /// in percent. Hue wraps modularly, so negative and >= 360 inputs are
    /// fine. This is the construction path used for harmony derivation.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0);
        let s = saturation / 100.0;
        let l = lightness / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if (0.0..60.0).contains(&h) {
            (c, x, 0.0)
        } else if (60.0..120.0).contains(&h) {
            (x, c, 0.0)
        } else if (120.0..180.0).contains(&h) {
            (0.0, c, x)
        } else if (180.0..240.0).contains(&h) {
            (0.0, x, c)
        } else if (240.0..300.0).contains(&h) {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self {
            r: r + m,
            g: g + m,
            b: b + m,
            a: 1.0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
