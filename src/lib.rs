//! copper - Theme stylesheet generator
//!
//! Derives a ten-shade "copper" palette from one primary colour and emits
//! the CSS custom properties, body/button styling and utility classes that
//! site markup references. Generation is pure and never fails: malformed
//! settings fall back to the default theme.

pub mod cli;
pub mod error;
pub mod output;
pub mod settings;
pub mod theme;
pub mod types;

pub use error::{CopperError, Result};
pub use settings::{GeneralSettings, StyleSettings};
pub use theme::{
    build_copper_palette, build_copper_theme_css, build_copper_theme_css_with, normalize_button_style,
    normalize_font_choice, normalize_hex_colour, ButtonStyle, FontChoice, OpacityStep, ThemeTables,
};
pub use types::{Colour, CopperPalette, HexColour, Shade};
