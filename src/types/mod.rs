//! Core value types.
//!
//! - `HexColour` - validated `#rrggbb` colours
//! - `Colour` - fractional RGB used while blending
//! - `CopperPalette` - the ten-shade ramp built from one primary colour

mod colour;
mod palette;

pub use colour::{Colour, HexColour};
pub use palette::{Blend, CopperPalette, PaletteReport, Shade, ShadeReport, COPPER_RAMP};
