//! PDF text extraction module.

mod extractor;
#[cfg(test)]
pub(crate) mod fixtures;

pub use extractor::{PdfExtractor, PdfTextSource};

use std::path::Path;

use crate::error::ExtractionError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Source of per-page document text used by the batch pipeline.
///
/// Implementations must not keep any per-document state alive between calls.
pub trait TextSource {
    /// Return the ordered per-page text of the document at `path`.
    fn pages(&self, path: &Path) -> Result<Vec<String>>;
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn pages(&self, path: &Path) -> Result<Vec<String>> {
        (**self).pages(path)
    }
}
