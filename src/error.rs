use miette::Diagnostic;
use thiserror::Error;

/// Main error type for copper operations.
///
/// Theme generation itself never fails; these cover settings files and CLI output.
#[derive(Error, Diagnostic, Debug)]
pub enum CopperError {
    #[error("IO error: {0}")]
    #[diagnostic(code(copper::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(copper::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(copper::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(copper::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, CopperError>;
