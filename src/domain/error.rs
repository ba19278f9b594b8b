use std::io;

use thiserror::Error;

/// Library-wide error type for wpdev operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// I/O failure on a specific file.
    #[error("{action} '{path}': {source}")]
    FileIo {
        action: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    /// Malformed configuration file.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Template could not be loaded, parsed, or executed.
    #[error("Failed to render template '{template}': {details}")]
    RenderError { template: String, details: String },

    /// External command could not be spawned or exited non-zero.
    #[error("Command '{command}' failed: {details}")]
    SubprocessError { command: String, details: String },

    /// Configuration is well-formed but unusable for the requested operation.
    #[error("{0}")]
    Validation(String),

    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// Interactive prompt could not be read.
    #[error("Failed to read input for '{label}': {details}")]
    PromptFailed { label: String, details: String },
}

impl AppError {
    pub fn file_io(action: &'static str, path: &std::path::Path, source: io::Error) -> Self {
        AppError::FileIo { action, path: path.display().to_string(), source }
    }

    pub fn subprocess<C: Into<String>, D: Into<String>>(command: C, details: D) -> Self {
        AppError::SubprocessError { command: command.into(), details: details.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers that classify failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::FileIo { source, .. } => source.kind(),
            AppError::ParseError { .. }
            | AppError::RenderError { .. }
            | AppError::Validation(_)
            | AppError::Usage(_) => io::ErrorKind::InvalidInput,
            AppError::SubprocessError { .. } | AppError::PromptFailed { .. } => {
                io::ErrorKind::Other
            }
        }
    }

    /// True for any file-system level failure.
    pub fn is_io(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::FileIo { .. })
    }
}
