//! Per-document summary records written to the batch report.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::vehicle::VehicleInfo;

/// Outcome of processing one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Successfully renamed")]
    Renamed,
    #[serde(rename = "Error during renaming")]
    RenameFailed,
    #[serde(rename = "Failed to extract required information")]
    ExtractionFailed,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Renamed => "Successfully renamed",
            Status::RenameFailed => "Error during renaming",
            Status::ExtractionFailed => "Failed to extract required information",
        }
    }

    pub fn is_success(self) -> bool {
        self == Status::Renamed
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the batch report.
///
/// All keys are always serialized; missing values become `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// File name before processing.
    pub original_filename: String,

    /// File name after a successful rename.
    pub new_filename: Option<String>,

    /// Extracted repair order number.
    pub repair_order_number: Option<String>,

    /// Extracted vehicle and customer details.
    pub vehicle_info: Option<VehicleInfo>,

    /// Processing outcome.
    pub status: Status,
}
