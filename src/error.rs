//! Error types for the generator
//!
//! One error enum covers every failure a generation run can report. Extraction
//! itself never fails, so everything here is either bad configuration or the
//! file system refusing to cooperate.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for generator operations
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Namespace, class name, targets or output directory are unusable
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// IO errors (reading assets, creating directories, writing files)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file parsing errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Emitted C# did not parse cleanly
    #[error("Generated source for '{class_name}' has a syntax error at {line}:{column}")]
    SyntaxCheck {
        class_name: String,
        line: usize,
        column: usize,
    },

    /// Tree-sitter language setup errors
    #[error("Failed to set up tree-sitter language: {message}")]
    TreeSitterLanguage { message: String },

    /// Asset path has no usable file name
    #[error("Asset path {path:?} has no file name")]
    MissingAssetName { path: PathBuf },
}

impl GeneratorError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        GeneratorError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Result type alias for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> GeneratorResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> GeneratorResult<T> {
        self.map_err(|e| GeneratorError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Helper trait for converting JSON errors with context
pub trait JsonContext<T> {
    fn with_json_context(self, message: &str) -> GeneratorResult<T>;
}

impl<T> JsonContext<T> for Result<T, serde_json::Error> {
    fn with_json_context(self, message: &str) -> GeneratorResult<T> {
        self.map_err(|e| GeneratorError::Json {
            message: message.to_string(),
            source: e,
        })
    }
}
