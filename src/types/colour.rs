//! Colour values and hex parsing.

use std::fmt;

use palette::{LinSrgb, Mix};

/// A validated six-digit hex colour.
///
/// Only constructible from well-formed input, so it always displays as
/// lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColour {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColour {
    /// Create a hex colour from its channel bytes.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Muted teal used when the primary colour is unusable.
    pub const PRIMARY_FALLBACK: Self = Self::from_rgb(0x5a, 0x91, 0x8a);

    /// Default page background.
    pub const BACKGROUND_FALLBACK: Self = Self::from_rgb(0xff, 0xff, 0xff);

    /// Default body text colour.
    pub const TEXT_FALLBACK: Self = Self::from_rgb(0x0f, 0x17, 0x2a);

    /// Parse `#rrggbb` or `rrggbb` (any case, surrounding whitespace ignored).
    ///
    /// Returns `None` for anything else, including the short `#rgb` form.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let hex = value.strip_prefix('#').unwrap_or(value);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        Some(Self {
            r: parse_hex_byte(&hex[0..2])?,
            g: parse_hex_byte(&hex[2..4])?,
            b: parse_hex_byte(&hex[4..6])?,
        })
    }

    /// Channel bytes as `[r, g, b]`.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for HexColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// An RGB colour with fractional channels.
///
/// Blending keeps full precision; rounding to bytes happens only when the
/// colour is written out as hex or as an RGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Colour {
    /// Create a colour from channel values on the 0-255 scale.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// White.
    pub const WHITE: Self = Self::rgb(255.0, 255.0, 255.0);

    /// Linear blend toward `target`: `self + (target - self) * ratio`.
    ///
    /// `ratio` is clamped to `[0, 1]`.
    pub fn mix(self, target: Colour, ratio: f64) -> Colour {
        // Channels are blended as stored, without any transfer function.
        let base: LinSrgb<f64> = LinSrgb::new(self.r, self.g, self.b);
        let target: LinSrgb<f64> = LinSrgb::new(target.r, target.g, target.b);
        let mixed = base.mix(target, ratio.clamp(0.0, 1.0));
        Colour::rgb(mixed.red, mixed.green, mixed.blue)
    }

    /// Rounded and clamped channel bytes.
    pub fn to_bytes(self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        HexColour::from_rgb(r, g, b).to_string()
    }

    /// Space-separated channel triplet, as used inside `rgb(var(...))`.
    pub fn rgb_triplet(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("{} {} {}", r, g, b)
    }
}

impl From<HexColour> for Colour {
    fn from(hex: HexColour) -> Self {
        let [r, g, b] = hex.to_rgb();
        Colour::rgb(f64::from(r), f64::from(g), f64::from(b))
    }
}

/// Round half up, then clamp into a byte.
fn to_byte(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_hash() {
        let c = HexColour::parse("#5A918A").unwrap();
        assert_eq!(c.to_rgb(), [0x5a, 0x91, 0x8a]);
        assert_eq!(c.to_string(), "#5a918a");
    }

    #[test]
    fn test_parse_without_hash() {
        let c = HexColour::parse("  ff0000 ").unwrap();
        assert_eq!(c.to_string(), "#ff0000");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(HexColour::parse("").is_none());
        assert!(HexColour::parse("#fff").is_none());
        assert!(HexColour::parse("#12345").is_none());
        assert!(HexColour::parse("#1234567").is_none());
        assert!(HexColour::parse("##123456").is_none());
        assert!(HexColour::parse("#gg0000").is_none());
        assert!(HexColour::parse("#ééé").is_none());
        assert!(HexColour::parse("not-a-color").is_none());
    }

    #[test]
    fn test_mix_endpoints() {
        let base = Colour::rgb(90.0, 145.0, 138.0);
        assert_eq!(base.mix(Colour::WHITE, 0.0), base);
        assert_eq!(base.mix(Colour::WHITE, 1.0), Colour::WHITE);
        assert_eq!(base.mix(Colour::BLACK, 1.0), Colour::BLACK);
    }

    #[test]
    fn test_mix_clamps_ratio() {
        let base = Colour::rgb(10.0, 20.0, 30.0);
        assert_eq!(base.mix(Colour::WHITE, 1.5), Colour::WHITE);
        assert_eq!(base.mix(Colour::WHITE, -0.5), base);
    }

    #[test]
    fn test_mix_is_fractional() {
        let mixed = Colour::rgb(0.0, 0.0, 0.0).mix(Colour::rgb(255.0, 255.0, 255.0), 0.5);
        assert_eq!(mixed.r, 127.5);
        assert_eq!(mixed.to_bytes(), [128, 128, 128]);
    }

    #[test]
    fn test_serialization_clamps() {
        let c = Colour::rgb(-3.2, 255.7, 12.49);
        assert_eq!(c.to_bytes(), [0, 255, 12]);
        assert_eq!(c.to_hex(), "#00ff0c");
        assert_eq!(c.rgb_triplet(), "0 255 12");
    }

    #[test]
    fn test_from_hex_colour() {
        let c = Colour::from(HexColour::PRIMARY_FALLBACK);
        assert_eq!(c, Colour::rgb(90.0, 145.0, 138.0));
    }
}
