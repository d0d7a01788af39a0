pub mod completions;
pub mod css;
pub mod init;
pub mod palette;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::settings::{GeneralSettings, SETTINGS_FILENAME};

/// copper - Theme stylesheet generator
#[derive(Parser, Debug)]
#[command(name = "copper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the theme stylesheet
    Css(css::CssArgs),

    /// Print the copper palette for a primary colour
    Palette(palette::PaletteArgs),

    /// Write a default copper.yaml settings file
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load settings from `path`, or from `copper.yaml` in the working directory,
/// or fall back to the built-in defaults.
pub(crate) fn load_settings(path: Option<&Path>, printer: &Printer) -> Result<GeneralSettings> {
    if let Some(path) = path {
        printer.status("Loading", &display_path(path));
        return GeneralSettings::load(path);
    }

    let local = Path::new(SETTINGS_FILENAME);
    if local.is_file() {
        printer.status("Loading", SETTINGS_FILENAME);
        return GeneralSettings::load(local);
    }

    Ok(GeneralSettings::default())
}

/// Report values that will be replaced by fallbacks.
pub(crate) fn warn_fallbacks(settings: &GeneralSettings, printer: &Printer) {
    for note in settings.fallbacks() {
        printer.warning("Fallback", &note);
    }
}
