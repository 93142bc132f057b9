//! PDF text extraction using lopdf and pdf-extract.

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::{Result, TextSource};
use crate::error::ExtractionError;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Read and load a PDF from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|source| ExtractionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut extractor = Self::new();
        extractor.load(&data)?;
        Ok(extractor)
    }

    /// Load a PDF from bytes.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| ExtractionError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(ExtractionError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract works on bytes, so keep the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| ExtractionError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(ExtractionError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    /// Number of pages in the loaded document, 0 when nothing is loaded.
    pub fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    /// Text of every page, in page order.
    ///
    /// pdf-extract is tried first. It panics on some documents lopdf accepts
    /// (text shown before any font is selected, broken font programs), so a
    /// panic is contained here and treated like an extraction error: both fall
    /// back to lopdf's own text decoder.
    pub fn extract_pages(&self) -> Result<Vec<String>> {
        self.document()?;

        let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
        }));

        match extracted {
            Ok(Ok(pages)) => {
                trace!("pdf-extract returned {} pages", pages.len());
                Ok(pages)
            }
            Ok(Err(e)) => {
                warn!("pdf-extract failed ({}), falling back to lopdf text extraction", e);
                self.extract_pages_lopdf()
            }
            Err(_) => {
                warn!("pdf-extract panicked, falling back to lopdf text extraction");
                self.extract_pages_lopdf()
            }
        }
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or(ExtractionError::Parse("No document loaded".to_string()))
    }

    /// Per-page text straight from lopdf's content stream decoder.
    fn extract_pages_lopdf(&self) -> Result<Vec<String>> {
        let doc = self.document()?;
        doc.get_pages()
            .keys()
            .map(|&page| {
                panic::catch_unwind(AssertUnwindSafe(|| doc.extract_text(&[page])))
                    .map_err(|_| ExtractionError::TextExtraction(format!("decoder panicked on page {}", page)))?
                    .map_err(|e| ExtractionError::TextExtraction(e.to_string()))
            })
            .collect()
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Production [`TextSource`] backed by [`PdfExtractor`].
///
/// Each call opens its own extractor, which is dropped before returning.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>> {
        let extractor = PdfExtractor::open(path)?;
        let pages = extractor.extract_pages()?;
        debug!("Extracted {} pages from {}", pages.len(), path.display());
        Ok(pages)
    }
}
