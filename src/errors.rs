/*!
 * Error types for the mdnarrate application.
 *
 * Only file access and configuration can fail. Every pipeline rule is a
 * no-op when its target is absent, so text processing itself never errors.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a document to narration text
#[derive(Error, Debug)]
pub enum NarrationError {
    /// The input document could not be opened or read
    #[error("Failed to read input file {path:?}: {source}")]
    InputAccess {
        /// Path of the input document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input document is not valid UTF-8
    #[error("Input file {path:?} is not valid UTF-8")]
    InvalidEncoding {
        /// Path of the input document
        path: PathBuf,
    },

    /// The output destination could not be written
    #[error("Failed to write output file {path:?}: {source}")]
    OutputAccess {
        /// Path of the output document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration is inconsistent
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A configured pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl NarrationError {
    /// Whether the error comes from reading the input document
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InputAccess { .. } | Self::InvalidEncoding { .. })
    }

    /// Whether the error comes from writing the output document
    pub fn is_output_error(&self) -> bool {
        matches!(self, Self::OutputAccess { .. })
    }
}

/// Result alias used across the library
pub type NarrationResult<T> = std::result::Result<T, NarrationError>;
