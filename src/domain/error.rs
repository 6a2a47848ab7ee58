use std::io;

use thiserror::Error;

/// Library-wide error type for menv operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Malformed user input or malformed persisted state.
    #[error("{0}")]
    Validation(String),

    /// A required external binary is absent from PATH.
    #[error("'{tool}' not found. Please ensure {tool} is installed.")]
    ToolMissing { tool: String },

    /// A required external binary exited non-zero.
    #[error("'{tool}' failed with exit code {code}")]
    ToolFailed { tool: String, code: i32 },

    /// HTTPS fetch or response parse failure during the update check.
    #[error("Version check failed: {0}")]
    Network(String),

    /// Keyboard interrupt while waiting on a child process.
    #[error("Interrupted by user")]
    Interrupted,

    /// Parse error for a packaged or persisted document.
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },

    /// TOML parse error in the identity file.
    #[error("Invalid identity file: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// Exit code the CLI adapter maps this error to.
    ///
    /// Child exit codes propagate verbatim; an interrupt maps to 130;
    /// everything else is a generic failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Interrupted => 130,
            AppError::ToolFailed { code, .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}
