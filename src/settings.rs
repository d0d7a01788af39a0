//! General settings documents (`copper.yaml` / `copper.json`).
//!
//! Settings are stored the way the site's admin saves them: a primary colour
//! plus a `styles` block. Values are read leniently. Any scalar becomes text
//! and anything else is treated as missing, so the theme normalizers decide
//! the fallbacks rather than the parser.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CopperError, Result};
use crate::theme::{
    build_copper_palette, build_copper_theme_css, normalize_button_style, normalize_font_choice,
    normalize_hex_colour, ButtonStyle, FontChoice,
};
use crate::types::{CopperPalette, HexColour};

/// Default settings file name.
pub const SETTINGS_FILENAME: &str = "copper.yaml";

/// Body and button styling options.
///
/// The default value has every field unset, which renders the fallback theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSettings {
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub button_style: Option<String>,
}

impl StyleSettings {
    /// Normalized page background.
    pub fn background(&self) -> HexColour {
        normalize_hex_colour(self.background_color.as_deref(), HexColour::BACKGROUND_FALLBACK)
    }

    /// Normalized body text colour.
    pub fn text(&self) -> HexColour {
        normalize_hex_colour(self.text_color.as_deref(), HexColour::TEXT_FALLBACK)
    }

    /// Normalized font choice.
    pub fn font_family(&self) -> FontChoice {
        normalize_font_choice(self.font_family.as_deref())
    }

    /// Normalized button style.
    pub fn button_style(&self) -> ButtonStyle {
        normalize_button_style(self.button_style.as_deref())
    }
}

/// The theme-related part of the site's general settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralSettings {
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    pub styles: StyleSettings,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            primary_color: Some(HexColour::PRIMARY_FALLBACK.to_string()),
            styles: StyleSettings {
                background_color: Some(HexColour::BACKGROUND_FALLBACK.to_string()),
                text_color: Some(HexColour::TEXT_FALLBACK.to_string()),
                font_family: Some(FontChoice::Inter.key().to_string()),
                button_style: Some(ButtonStyle::Solid.key().to_string()),
            },
        }
    }
}

impl GeneralSettings {
    /// Load settings from a file. `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CopperError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::parse_json(&content),
            _ => Self::parse_yaml(&content),
        }
    }

    /// Parse settings from YAML. An empty document yields the defaults.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| CopperError::Parse {
            message: format!("Invalid settings: {}", e),
            help: Some("Quote hex colours in YAML: primaryColor: \"#5a918a\"".to_string()),
        })
    }

    /// Parse settings from JSON.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| CopperError::Parse {
            message: format!("Invalid settings: {}", e),
            help: Some("Check the JSON syntax".to_string()),
        })
    }

    /// Render as a YAML document.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| CopperError::Build {
            message: format!("Failed to serialize settings: {}", e),
            help: None,
        })
    }

    /// Normalized primary colour.
    pub fn primary(&self) -> HexColour {
        normalize_hex_colour(self.primary_color.as_deref(), HexColour::PRIMARY_FALLBACK)
    }

    /// Palette for the configured primary colour.
    pub fn palette(&self) -> CopperPalette {
        build_copper_palette(self.primary_color.as_deref())
    }

    /// Full theme stylesheet for these settings.
    pub fn theme_css(&self) -> String {
        build_copper_theme_css(self.primary_color.as_deref(), &self.styles)
    }

    /// Describe every value that is set but will be replaced by a fallback.
    pub fn fallbacks(&self) -> Vec<String> {
        let mut notes = Vec::new();

        let colours = [
            ("primaryColor", &self.primary_color, self.primary()),
            ("backgroundColor", &self.styles.background_color, self.styles.background()),
            ("textColor", &self.styles.text_color, self.styles.text()),
        ];
        for (key, raw, resolved) in colours {
            if let Some(raw) = raw {
                if HexColour::parse(raw).is_none() {
                    notes.push(format!("{} `{}` is not a #rrggbb colour, using {}", key, raw, resolved));
                }
            }
        }

        if let Some(raw) = &self.styles.font_family {
            let font = self.styles.font_family();
            if !raw.trim().eq_ignore_ascii_case(font.key()) {
                notes.push(format!("fontFamily `{}` is not a known font, using {}", raw, font));
            }
        }

        if let Some(raw) = &self.styles.button_style {
            let style = self.styles.button_style();
            if !raw.trim().eq_ignore_ascii_case(style.key()) {
                notes.push(format!("buttonStyle `{}` is not recognised, using {}", raw, style));
            }
        }

        notes
    }
}

/// Any scalar a settings editor might have saved.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Other(serde::de::IgnoredAny),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Bool(true) => Some("true".to_string()),
            Scalar::Int(n) => Some(n.to_string()),
            Scalar::Float(f) => Some(f.to_string()),
            Scalar::Bool(false) | Scalar::Other(_) => None,
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = GeneralSettings::default();
        assert_eq!(settings.primary().to_string(), "#5a918a");
        assert_eq!(settings.styles.background().to_string(), "#ffffff");
        assert_eq!(settings.styles.text().to_string(), "#0f172a");
        assert_eq!(settings.styles.font_family(), FontChoice::Inter);
        assert_eq!(settings.styles.button_style(), ButtonStyle::Solid);
    }

    #[test]
    fn test_default_output_matches_empty_styles() {
        let defaults = GeneralSettings::default();
        let bare = GeneralSettings {
            primary_color: None,
            styles: StyleSettings::default(),
        };
        assert_eq!(defaults.theme_css(), bare.theme_css());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r##"
primaryColor: "#B87333"
styles:
  backgroundColor: "#fdfaf6"
  fontFamily: Poppins
  buttonStyle: gradient
"##;
        let settings = GeneralSettings::parse_yaml(yaml).unwrap();
        assert_eq!(settings.primary_color.as_deref(), Some("#B87333"));
        assert_eq!(settings.primary().to_string(), "#b87333");
        assert_eq!(settings.styles.background().to_string(), "#fdfaf6");
        assert_eq!(settings.styles.text_color, None);
        assert_eq!(settings.styles.font_family(), FontChoice::Poppins);
        assert_eq!(settings.styles.button_style(), ButtonStyle::Gradient);
    }

    #[test]
    fn test_parse_yaml_lenient_values() {
        // Unquoted `#...` is a YAML comment, so the value is null
        let yaml = "primaryColor: #5a918a\nstyles:\n  textColor: 123456\n  fontFamily: [inter]\n  buttonStyle: false\n";
        let settings = GeneralSettings::parse_yaml(yaml).unwrap();
        assert_eq!(settings.primary_color, None);
        assert_eq!(settings.styles.text_color.as_deref(), Some("123456"));
        assert_eq!(settings.styles.text().to_string(), "#123456");
        assert_eq!(settings.styles.font_family, None);
        assert_eq!(settings.styles.button_style, None);
    }

    #[test]
    fn test_parse_yaml_missing_fields_use_defaults() {
        let settings = GeneralSettings::parse_yaml("unrelated: true\n").unwrap();
        assert_eq!(settings, GeneralSettings::default());

        let settings = GeneralSettings::parse_yaml("").unwrap();
        assert_eq!(settings, GeneralSettings::default());
    }

    #[test]
    fn test_parse_json() {
        let json = r##"{"primaryColor":"#336699","styles":{"fontFamily":"georgia","buttonStyle":"solid"},"siteName":"x"}"##;
        let settings = GeneralSettings::parse_json(json).unwrap();
        assert_eq!(settings.primary().to_string(), "#336699");
        assert_eq!(settings.styles.font_family(), FontChoice::Georgia);
        assert_eq!(settings.styles.background_color, None);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(GeneralSettings::parse_yaml("primaryColor: [unclosed").is_err());
        assert!(GeneralSettings::parse_json("{").is_err());
    }

    #[test]
    fn test_yaml_round_trip_of_defaults() {
        let yaml = GeneralSettings::default().to_yaml().unwrap();
        assert!(yaml.contains("primaryColor:"));
        assert!(yaml.contains("#5a918a"));
        assert!(yaml.contains("fontFamily: inter"));
        let parsed = GeneralSettings::parse_yaml(&yaml).unwrap();
        assert_eq!(parsed, GeneralSettings::default());
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempdir().unwrap();

        let json_path = dir.path().join("settings.json");
        std::fs::write(&json_path, r##"{"primaryColor":"#aabbcc"}"##).unwrap();
        let settings = GeneralSettings::load(&json_path).unwrap();
        assert_eq!(settings.primary().to_string(), "#aabbcc");

        let yaml_path = dir.path().join(SETTINGS_FILENAME);
        std::fs::write(&yaml_path, "primaryColor: 'ccbbaa'\n").unwrap();
        let settings = GeneralSettings::load(&yaml_path).unwrap();
        assert_eq!(settings.primary().to_string(), "#ccbbaa");
    }

    #[test]
    fn test_fallbacks() {
        assert!(GeneralSettings::default().fallbacks().is_empty());

        let settings = GeneralSettings {
            primary_color: Some("teal".to_string()),
            styles: StyleSettings {
                background_color: Some("FFFFFF".to_string()),
                text_color: None,
                font_family: Some("Comic".to_string()),
                button_style: Some(" Gradient".to_string()),
            },
        };
        assert_eq!(
            settings.fallbacks(),
            vec![
                "primaryColor `teal` is not a #rrggbb colour, using #5a918a".to_string(),
                "fontFamily `Comic` is not a known font, using inter".to_string(),
            ]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = GeneralSettings::load(&dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(CopperError::Io { .. })));
    }
}
