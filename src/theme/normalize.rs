//! Total normalizers for admin-supplied theme values.
//!
//! Nothing here can fail: unusable input falls back to a default.

use std::fmt;

use crate::types::HexColour;

/// Normalize a hex colour, substituting `fallback` for anything malformed.
pub fn normalize_hex_colour(value: Option<&str>, fallback: HexColour) -> HexColour {
    value.and_then(HexColour::parse).unwrap_or(fallback)
}

/// Selectable body font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontChoice {
    #[default]
    Inter,
    Poppins,
    Montserrat,
    Georgia,
}

impl FontChoice {
    /// Every font option, in table order.
    pub const ALL: [FontChoice; 4] = [
        FontChoice::Inter,
        FontChoice::Poppins,
        FontChoice::Montserrat,
        FontChoice::Georgia,
    ];

    /// Settings key for this font.
    pub const fn key(self) -> &'static str {
        match self {
            FontChoice::Inter => "inter",
            FontChoice::Poppins => "poppins",
            FontChoice::Montserrat => "montserrat",
            FontChoice::Georgia => "georgia",
        }
    }

    /// CSS `font-family` stack.
    pub const fn stack(self) -> &'static str {
        match self {
            FontChoice::Inter => {
                "Inter, ui-sans-serif, system-ui, sans-serif, Apple Color Emoji, Segoe UI Emoji, Segoe UI Symbol"
            }
            FontChoice::Poppins => {
                "Poppins, Inter, ui-sans-serif, system-ui, sans-serif, Apple Color Emoji, Segoe UI Emoji, Segoe UI Symbol"
            }
            FontChoice::Montserrat => {
                "Montserrat, Inter, ui-sans-serif, system-ui, sans-serif, Apple Color Emoji, Segoe UI Emoji, Segoe UI Symbol"
            }
            FontChoice::Georgia => "Georgia, Cambria, Times New Roman, Times, serif",
        }
    }

    /// Exact key lookup (already lowercased and trimmed).
    fn from_key(key: &str) -> Option<FontChoice> {
        FontChoice::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Normalize a font name; unknown names become `inter`.
pub fn normalize_font_choice(value: Option<&str>) -> FontChoice {
    value
        .map(|v| v.trim().to_lowercase())
        .and_then(|key| FontChoice::from_key(&key))
        .unwrap_or_default()
}

/// How gradient call-to-action buttons are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonStyle {
    #[default]
    Solid,
    Gradient,
}

impl ButtonStyle {
    /// Settings key for this style.
    pub const fn key(self) -> &'static str {
        match self {
            ButtonStyle::Solid => "solid",
            ButtonStyle::Gradient => "gradient",
        }
    }
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Normalize a button style; only `gradient` is recognised, everything else is `solid`.
pub fn normalize_button_style(value: Option<&str>) -> ButtonStyle {
    match value.map(|v| v.trim().to_lowercase()) {
        Some(v) if v == "gradient" => ButtonStyle::Gradient,
        _ => ButtonStyle::Solid,
    }
}
