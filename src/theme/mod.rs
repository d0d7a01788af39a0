//! Copper theme generation.
//!
//! The pipeline is strictly linear and pure:
//! - `normalize` - defang admin-supplied colours, fonts and button styles
//! - palette building - ten shades from one primary colour
//! - `rules` - utility classes for every shade and opacity step
//! - `stylesheet` - root variables, body/button CSS and rules in one string
//!
//! # Example
//!
//! ```
//! use copper::settings::StyleSettings;
//! use copper::theme::build_copper_theme_css;
//!
//! let css = build_copper_theme_css(Some("#5A918A"), &StyleSettings::default());
//! assert!(css.contains("--color-copper-500:#5a918a;"));
//! ```

mod normalize;
mod rules;
mod stylesheet;

use crate::types::{Blend, CopperPalette, HexColour, COPPER_RAMP};

pub use normalize::{
    normalize_button_style, normalize_font_choice, normalize_hex_colour, ButtonStyle, FontChoice,
};
pub use rules::{
    class_with_opacity, colour_expr, synthesize_rules, Declaration, OpacityStep, RuleFamily,
    OPACITY_STEPS, STATE_FAMILIES, STATIC_FAMILIES,
};
pub use stylesheet::{
    base_css, build_copper_theme_css, build_copper_theme_css_with, button_css, root_variables,
};

/// Constant tables driving generation.
///
/// `Default` yields the standard copper ramp and opacity steps.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTables {
    /// Blend per shade, in `Shade::ALL` order.
    pub ramp: [Blend; 10],
    pub opacity_steps: Vec<OpacityStep>,
}

impl Default for ThemeTables {
    fn default() -> Self {
        Self {
            ramp: COPPER_RAMP,
            opacity_steps: OPACITY_STEPS.to_vec(),
        }
    }
}

impl ThemeTables {
    /// Build a palette from a possibly malformed primary colour.
    pub fn palette(&self, primary_color: Option<&str>) -> CopperPalette {
        let primary = normalize_hex_colour(primary_color, HexColour::PRIMARY_FALLBACK);
        CopperPalette::from_primary(primary, &self.ramp)
    }
}

/// Build the copper palette for a primary colour, falling back to `#5a918a`.
pub fn build_copper_palette(primary_color: Option<&str>) -> CopperPalette {
    ThemeTables::default().palette(primary_color)
}
