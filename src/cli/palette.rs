use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{CopperError, Result};
use crate::output::Printer;
use crate::theme::build_copper_palette;
use crate::types::CopperPalette;

/// Output format for palette listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PaletteFormat {
    #[default]
    Text,
    Json,
}

/// Print the copper palette for a primary colour
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Primary colour (#rrggbb); overrides the settings file
    pub primary: Option<String>,

    /// Settings file (YAML or JSON); defaults to ./copper.yaml when present
    #[arg(long, short)]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = PaletteFormat::Text)]
    pub format: PaletteFormat,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let mut settings = super::load_settings(args.settings.as_deref(), printer)?;
    if let Some(primary) = args.primary {
        settings.primary_color = Some(primary);
    }
    super::warn_fallbacks(&settings, printer);

    let palette = build_copper_palette(settings.primary_color.as_deref());
    printer.info("Palette", &printer.cyan(&palette.primary().to_string()));

    println!("{}", format_palette(&palette, args.format)?);
    Ok(())
}

/// Render a palette as text lines or pretty JSON.
pub fn format_palette(palette: &CopperPalette, format: PaletteFormat) -> Result<String> {
    match format {
        PaletteFormat::Text => Ok(palette
            .iter()
            .map(|(shade, colour)| {
                format!("copper-{:<4} {}  {}", shade.token(), colour.to_hex(), colour.rgb_triplet())
            })
            .collect::<Vec<_>>()
            .join("\n")),
        PaletteFormat::Json => {
            serde_json::to_string_pretty(&palette.report()).map_err(|e| CopperError::Build {
                message: format!("Failed to serialize palette: {}", e),
                help: None,
            })
        }
    }
}
