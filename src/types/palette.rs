//! The ten-step copper palette derived from a single primary colour.

use std::fmt;

use serde::Serialize;

use super::{Colour, HexColour};

/// A named point on the copper ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl Shade {
    /// Every shade, lightest first.
    pub const ALL: [Shade; 10] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    /// The numeric token used in class names and custom properties.
    pub const fn token(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
        }
    }

    /// Look up a shade by its numeric token.
    pub fn from_token(token: u16) -> Option<Shade> {
        Shade::ALL.into_iter().find(|s| s.token() == token)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.token(), f)
    }
}

/// How a shade is derived from the primary colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Blend {
    /// Blend toward white by the given ratio.
    Tint(f64),
    /// The primary colour itself.
    Identity,
    /// Blend toward black by the given ratio.
    Shade(f64),
}

impl Blend {
    /// Apply this blend to a base colour.
    pub fn apply(self, base: Colour) -> Colour {
        match self {
            Blend::Tint(ratio) => base.mix(Colour::WHITE, ratio),
            Blend::Identity => base,
            Blend::Shade(ratio) => base.mix(Colour::BLACK, ratio),
        }
    }
}

/// Blend applied to each shade, in `Shade::ALL` order.
///
/// These ratios are fixed; rendered pages depend on the exact values.
pub const COPPER_RAMP: [Blend; 10] = [
    Blend::Tint(0.86),
    Blend::Tint(0.74),
    Blend::Tint(0.54),
    Blend::Tint(0.34),
    Blend::Tint(0.18),
    Blend::Identity,
    Blend::Shade(0.13),
    Blend::Shade(0.27),
    Blend::Shade(0.41),
    Blend::Shade(0.58),
];

/// A fully resolved copper palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopperPalette {
    primary: HexColour,
    colours: [Colour; 10],
}

impl CopperPalette {
    /// Derive every shade from `primary` using `ramp`.
    pub fn from_primary(primary: HexColour, ramp: &[Blend; 10]) -> Self {
        let base = Colour::from(primary);
        let mut colours = [base; 10];
        for (colour, blend) in colours.iter_mut().zip(ramp) {
            *colour = blend.apply(base);
        }
        Self { primary, colours }
    }

    /// The normalized primary colour the palette was built from.
    pub fn primary(&self) -> HexColour {
        self.primary
    }

    /// Get the colour for a shade.
    pub fn get(&self, shade: Shade) -> Colour {
        self.colours[shade.index()]
    }

    /// Iterate over `(shade, colour)` pairs, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, Colour)> + '_ {
        Shade::ALL.into_iter().zip(self.colours.iter().copied())
    }

    /// Hex form of a shade.
    pub fn hex(&self, shade: Shade) -> String {
        self.get(shade).to_hex()
    }

    /// RGB triplet form of a shade.
    pub fn rgb_triplet(&self, shade: Shade) -> String {
        self.get(shade).rgb_triplet()
    }

    /// Serializable summary of the palette.
    pub fn report(&self) -> PaletteReport {
        PaletteReport {
            primary: self.primary.to_string(),
            shades: self
                .iter()
                .map(|(shade, colour)| ShadeReport {
                    shade: shade.token(),
                    hex: colour.to_hex(),
                    rgb: colour.to_bytes(),
                })
                .collect(),
        }
    }
}

/// JSON-friendly view of a palette.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteReport {
    pub primary: String,
    pub shades: Vec<ShadeReport>,
}

/// One entry of a [`PaletteReport`].
#[derive(Debug, Clone, Serialize)]
pub struct ShadeReport {
    pub shade: u16,
    pub hex: String,
    pub rgb: [u8; 3],
}
