//! Core library for repair order PDF processing.
//!
//! This crate provides:
//! - PDF text extraction (per-page plain text)
//! - Field parsing (repair order number, vehicle/customer data, scan type)
//! - File renaming based on the extracted identifiers
//! - Folder batch processing with a JSON summary report

pub mod batch;
pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;
pub mod rename;

pub use batch::{
    BatchProcessor, BatchReport, BatchStats, Selection, default_report_path, is_candidate,
    scan_folder_and_process, select_documents, write_report,
};
pub use error::{ExtractionError, PersistenceError, RenameError, RorenameError, Result};
pub use extract::{ExtractedFields, FieldExtractor};
pub use models::config::RorenameConfig;
pub use models::summary::{Status, SummaryEntry};
pub use models::vehicle::{ScanType, VehicleInfo};
pub use pdf::{PdfExtractor, PdfTextSource, TextSource};
pub use rename::{CollisionPolicy, rename_document};
