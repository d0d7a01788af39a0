//! Init command implementation.
//!
//! Writes a `copper.yaml` holding the default general settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{CopperError, Result};
use crate::output::{display_path, Printer};
use crate::settings::{GeneralSettings, SETTINGS_FILENAME};

/// Write a default copper.yaml settings file
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create the settings file in (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing copper.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let settings_path = args.path.join(SETTINGS_FILENAME);

    if settings_path.exists() && !args.force {
        return Err(CopperError::Build {
            message: format!("{} already exists", SETTINGS_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    if !args.path.exists() {
        fs::create_dir_all(&args.path).map_err(|e| CopperError::Io {
            path: args.path.clone(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    let yaml = GeneralSettings::default().to_yaml()?;
    fs::write(&settings_path, &yaml).map_err(|e| CopperError::Io {
        path: settings_path.clone(),
        message: format!("Failed to write settings: {}", e),
    })?;

    printer.success("Created", &display_path(&settings_path));

    Ok(())
}
