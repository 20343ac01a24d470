use std::io;

use thiserror::Error;

use super::{DocumentId, TemplateId};

/// Library-wide error type for template synchronization.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The remote service has no template with this id.
    #[error("Template '{0}' not found")]
    NotFound(String),

    /// A required field was missing before any request was sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request never produced an HTTP response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote service answered with a non-success status.
    #[error("Remote error ({status}): {body}")]
    Remote { status: u16, body: String },

    /// A success response whose body could not be read as the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Save was requested for a document that was not opened from a template.
    #[error("Document '{0}' is not bound to a remote template")]
    NotBound(DocumentId),

    /// The editor no longer holds the buffer.
    #[error("Document '{0}' is no longer open")]
    DocumentUnavailable(DocumentId),

    /// Template identifier is empty or malformed.
    #[error("Invalid template identifier '{0}'")]
    InvalidTemplateId(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    pub(crate) fn not_found(id: &TemplateId) -> Self {
        AppError::NotFound(id.to_string())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParse(_)
            | AppError::Validation(_)
            | AppError::InvalidTemplateId(_)
            | AppError::NotBound(_) => io::ErrorKind::InvalidInput,
            AppError::NotFound(_) | AppError::DocumentUnavailable(_) => io::ErrorKind::NotFound,
            AppError::Transport(_) => io::ErrorKind::ConnectionAborted,
            AppError::MalformedResponse(_) => io::ErrorKind::InvalidData,
            AppError::Remote { .. } => io::ErrorKind::Other,
        }
    }
}
