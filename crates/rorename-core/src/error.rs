//! Error types for the rorename-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the rorename library.
#[derive(Error, Debug)]
pub enum RorenameError {
    /// PDF text extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// File rename error.
    #[error("rename error: {0}")]
    Rename(#[from] RenameError),

    /// Summary report could not be written.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while turning a document into per-page text.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors raised by the renamer.
#[derive(Error, Debug)]
pub enum RenameError {
    /// The scan type carries no suffix, so there is no target name.
    #[error("scan type is not eligible for renaming")]
    NotEligible,

    /// The document path has no file name or parent directory.
    #[error("invalid document path: {}", .0.display())]
    InvalidPath(PathBuf),

    /// The target name is already taken and overwriting is disabled.
    #[error("target already exists: {}", .0.display())]
    TargetExists(PathBuf),

    /// The filesystem rename failed.
    #[error("failed to rename {} to {}: {source}", from.display(), to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while writing the summary report.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Summary entries could not be serialized.
    #[error("failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Summary file could not be written.
    #[error("failed to write summary to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the rorename library.
pub type Result<T> = std::result::Result<T, RorenameError>;
