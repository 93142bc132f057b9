//! Folder batch processing and the JSON summary report.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{PersistenceError, Result};
use crate::extract::ExtractedFields;
use crate::models::config::RorenameConfig;
use crate::models::summary::{Status, SummaryEntry};
use crate::pdf::{PdfTextSource, TextSource};
use crate::rename::{CollisionPolicy, rename_document};

/// Marker that selects a file for processing.
pub const TMP_MARKER: &str = "~~tmp~~";

/// Extension of processed files.
pub const PDF_EXTENSION: &str = ".pdf";

/// Whether a file name is selected for processing (case-sensitive).
pub fn is_candidate(file_name: &str) -> bool {
    file_name.contains(TMP_MARKER) && file_name.ends_with(PDF_EXTENSION)
}

/// Counters logged at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    /// Directory entries seen.
    pub total_files: usize,
    /// Entries matching the selection rule.
    pub matching_files: usize,
    /// Documents that went through the pipeline.
    pub processed_files: usize,
}

/// Result of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One entry per selected document, in processing order.
    pub entries: Vec<SummaryEntry>,
    pub stats: BatchStats,
}

impl BatchReport {
    pub fn renamed(&self) -> usize {
        self.count(Status::Renamed)
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.renamed()
    }

    pub fn count(&self, status: Status) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }
}

/// Documents selected from a folder.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Directory entries seen, selected or not.
    pub total_files: usize,
    /// Selected documents, sorted by file name.
    pub documents: Vec<PathBuf>,
}

/// List the documents of `folder` matching [`is_candidate`]. Not recursive.
pub fn select_documents(folder: &Path) -> std::io::Result<Selection> {
    let mut total_files = 0;
    let mut documents = Vec::new();

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        total_files += 1;

        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            debug!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };

        if is_candidate(name) && path.is_file() {
            documents.push(path);
        }
    }

    documents.sort();
    debug!(
        "Selected {} of {} entries in {}",
        documents.len(),
        total_files,
        folder.display()
    );

    Ok(Selection {
        total_files,
        documents,
    })
}

/// Sequential batch processor.
pub struct BatchProcessor<S> {
    source: S,
    on_collision: CollisionPolicy,
}

impl<S: TextSource> BatchProcessor<S> {
    /// Create a processor reading document text from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            on_collision: CollisionPolicy::default(),
        }
    }

    /// Set the rename collision policy.
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.on_collision = policy;
        self
    }

    /// Extract, parse and rename one document.
    ///
    /// Never fails: every problem ends up in the entry's status.
    pub fn process_file(&self, path: &Path) -> SummaryEntry {
        let original_filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let fields = match self.source.pages(path) {
            Ok(pages) => ExtractedFields::from_pages(&original_filename, &pages),
            Err(e) => {
                warn!("Error processing {}: {}", path.display(), e);
                ExtractedFields::none()
            }
        };

        let (new_filename, status) = match fields.rename_key() {
            Some((number, _)) => {
                match rename_document(path, number, fields.scan_type, self.on_collision) {
                    Ok(name) => (Some(name), Status::Renamed),
                    // Already logged by the renamer
                    Err(_) => (None, Status::RenameFailed),
                }
            }
            None => (None, Status::ExtractionFailed),
        };

        SummaryEntry {
            original_filename,
            new_filename,
            repair_order_number: fields.repair_order_number,
            vehicle_info: fields.vehicle_info,
            status,
        }
    }

    /// Process selected documents in order, calling `on_file` after each one.
    pub fn process_selection<F>(&self, selection: &Selection, mut on_file: F) -> BatchReport
    where
        F: FnMut(&Path, &SummaryEntry),
    {
        let mut entries = Vec::with_capacity(selection.documents.len());

        for path in &selection.documents {
            let entry = self.process_file(path);
            on_file(path, &entry);
            entries.push(entry);
        }

        let stats = BatchStats {
            total_files: selection.total_files,
            matching_files: selection.documents.len(),
            processed_files: entries.len(),
        };

        BatchReport { entries, stats }
    }

    /// Select and process every matching document of `folder`.
    pub fn process_folder(&self, folder: &Path) -> Result<BatchReport> {
        let selection = select_documents(folder)?;
        Ok(self.process_selection(&selection, |_, _| {}))
    }
}

/// Write the summary entries as a pretty JSON array.
///
/// The file is written to a temporary sibling first and moved into place, so
/// `path` either holds the full report or is left untouched.
pub fn write_report(path: &Path, entries: &[SummaryEntry]) -> std::result::Result<(), PersistenceError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries.serialize(&mut serializer)?;

    let write_err = |source: std::io::Error| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    };

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory).map_err(write_err)?;
    file.write_all(&buf).map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    debug!("Wrote {} summary entries to {}", entries.len(), path.display());
    Ok(())
}

/// Default report location: `<folder>/<prefix>_<YYYYmmdd_HHMMSS>.json`.
pub fn default_report_path(folder: &Path, prefix: &str, now: DateTime<Local>) -> PathBuf {
    folder.join(format!("{}_{}.json", prefix, now.format("%Y%m%d_%H%M%S")))
}

/// Process `folder` with the PDF text source and write the report to `report_path`.
pub fn scan_folder_and_process(
    folder: &Path,
    report_path: &Path,
    config: &RorenameConfig,
) -> Result<BatchReport> {
    let processor = BatchProcessor::new(PdfTextSource).with_collision_policy(config.batch.on_collision);
    let report = processor.process_folder(folder)?;

    write_report(report_path, &report.entries)?;
    log_stats(&report.stats);

    Ok(report)
}

/// Log the run counters.
pub fn log_stats(stats: &BatchStats) {
    info!("Total files found: {}", stats.total_files);
    info!("Matching PDF files found: {}", stats.matching_files);
    info!("Total files processed: {}", stats.processed_files);
}
