//! Error types for configuration loading and resolution

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lintrc operations
#[derive(Debug, Error)]
pub enum LintrcError {
    /// A fragment assigns a global a mode outside {readonly, writable, off}
    #[error("Invalid fragment #{index}: global '{key}' has unrecognized mode '{value}'")]
    InvalidFragment {
        index: usize,
        key: String,
        value: String,
    },

    /// A preset reference is empty or malformed
    #[error("Invalid preset in fragment #{index} at position {position}: '{reference}'")]
    InvalidPreset {
        index: usize,
        position: usize,
        reference: String,
    },

    /// A configuration source is missing or unreadable
    #[error("Failed to load '{source_id}': {reason}")]
    LoadError { source_id: String, reason: String },

    /// A configuration source has structurally invalid content
    #[error("Failed to parse '{source_id}': {message}")]
    ParseError { source_id: String, message: String },

    /// Configuration handling errors outside of loading and merging
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFragment,
    InvalidPreset,
    Load,
    Parse,
    Config,
    Io,
}

impl LintrcError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LintrcError::InvalidFragment { .. } => ErrorKind::InvalidFragment,
            LintrcError::InvalidPreset { .. } => ErrorKind::InvalidPreset,
            LintrcError::LoadError { .. } => ErrorKind::Load,
            LintrcError::ParseError { .. } => ErrorKind::Parse,
            LintrcError::ConfigError { .. } => ErrorKind::Config,
            LintrcError::IoError { .. } => ErrorKind::Io,
        }
    }

    /// Check if the error was raised while merging already-loaded fragments
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidFragment | ErrorKind::InvalidPreset
        )
    }

    /// Create an invalid fragment error
    pub fn invalid_fragment(index: usize, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFragment {
            index,
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an invalid preset error
    pub fn invalid_preset(index: usize, position: usize, reference: impl Into<String>) -> Self {
        Self::InvalidPreset {
            index,
            position,
            reference: reference.into(),
        }
    }

    /// Create a load error
    pub fn load_error(source_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LoadError {
            source_id: source_id.into(),
            reason: reason.into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(source_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            source_id: source_id.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for LintrcError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}
