//! Css command implementation.
//!
//! Resolves settings (file, then flag overrides) and writes the stylesheet.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{CopperError, Result};
use crate::output::{display_path, plural, Printer};
use crate::settings::GeneralSettings;
use crate::theme::{OPACITY_STEPS, STATE_FAMILIES, STATIC_FAMILIES};
use crate::types::Shade;

/// Generate the theme stylesheet
#[derive(Args, Debug, Default)]
pub struct CssArgs {
    /// Settings file (YAML or JSON); defaults to ./copper.yaml when present
    #[arg(long, short)]
    pub settings: Option<PathBuf>,

    /// Primary colour (#rrggbb)
    #[arg(long)]
    pub primary: Option<String>,

    /// Page background colour (#rrggbb)
    #[arg(long)]
    pub background: Option<String>,

    /// Body text colour (#rrggbb)
    #[arg(long)]
    pub text: Option<String>,

    /// Body font: inter, poppins, montserrat or georgia
    #[arg(long)]
    pub font: Option<String>,

    /// Gradient button rendering: solid or gradient
    #[arg(long)]
    pub button_style: Option<String>,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Wrap the stylesheet in a <style> element
    #[arg(long)]
    pub style_tag: bool,
}

impl CssArgs {
    /// Apply command-line overrides on top of loaded settings.
    fn apply(&self, settings: &mut GeneralSettings) {
        let overrides = [
            (&self.primary, &mut settings.primary_color),
            (&self.background, &mut settings.styles.background_color),
            (&self.text, &mut settings.styles.text_color),
            (&self.font, &mut settings.styles.font_family),
            (&self.button_style, &mut settings.styles.button_style),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = Some(value.clone());
            }
        }
    }
}

pub fn run(args: CssArgs, printer: &Printer) -> Result<()> {
    let mut settings = super::load_settings(args.settings.as_deref(), printer)?;
    args.apply(&mut settings);
    super::warn_fallbacks(&settings, printer);

    printer.status(
        "Generating",
        &format!(
            "theme from {} ({} buttons, {})",
            printer.cyan(&settings.primary().to_string()),
            settings.styles.button_style(),
            settings.styles.font_family()
        ),
    );

    let css = render(&settings, args.style_tag);

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| CopperError::Io {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create output directory: {}", e),
                })?;
            }
            fs::write(path, &css).map_err(|e| CopperError::Io {
                path: path.clone(),
                message: format!("Failed to write stylesheet: {}", e),
            })?;

            let families = STATIC_FAMILIES.len() + STATE_FAMILIES.len();
            let rules = Shade::ALL.len() * OPACITY_STEPS.len() * families;
            printer.success(
                "Wrote",
                &format!("{} ({})", display_path(path), plural(rules, "utility rule", "utility rules")),
            );
        }
        None => print!("{}", css),
    }

    Ok(())
}

/// Stylesheet text, optionally wrapped for direct inclusion in a page.
pub fn render(settings: &GeneralSettings, style_tag: bool) -> String {
    let css = settings.theme_css();
    if style_tag {
        format!("<style>\n{}\n</style>\n", css)
    } else {
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_overrides_replace_file_values() {
        let mut settings = GeneralSettings::default();
        let args = CssArgs {
            primary: Some("#B87333".to_string()),
            button_style: Some("gradient".to_string()),
            ..CssArgs::default()
        };
        args.apply(&mut settings);

        assert_eq!(settings.primary_color.as_deref(), Some("#B87333"));
        assert_eq!(settings.styles.button_style.as_deref(), Some("gradient"));
        // Untouched values keep their loaded state
        assert_eq!(settings.styles.font_family.as_deref(), Some("inter"));
    }

    #[test]
    fn test_render_style_tag() {
        let settings = GeneralSettings::default();
        let wrapped = render(&settings, true);
        assert!(wrapped.starts_with("<style>\n:root{"));
        assert!(wrapped.ends_with("\n</style>\n"));
        assert_eq!(render(&settings, false), settings.theme_css());
    }

    #[test]
    fn test_run_writes_file() {
        let dir = tempdir().unwrap();
        let settings_path = dir.path().join("site.json");
        fs::write(&settings_path, r##"{"primaryColor":"#336699"}"##).unwrap();
        let output = dir.path().join("public/theme.css");

        let args = CssArgs {
            settings: Some(settings_path),
            output: Some(output.clone()),
            ..CssArgs::default()
        };
        run(args, &Printer::plain()).unwrap();

        let css = fs::read_to_string(&output).unwrap();
        assert!(css.contains("--color-copper-500:#336699;"));
    }

    #[test]
    fn test_run_missing_settings_file() {
        let dir = tempdir().unwrap();
        let args = CssArgs {
            settings: Some(dir.path().join("missing.yaml")),
            ..CssArgs::default()
        };
        assert!(run(args, &Printer::plain()).is_err());
    }
}
