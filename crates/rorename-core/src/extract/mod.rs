//! Field extraction from repair order text.

pub mod patterns;
mod repair_order;
mod scan_type;
mod vehicle;

pub use repair_order::{RepairOrderExtractor, parse_repair_order_number};
pub use scan_type::determine_scan_type;
pub use vehicle::{VehicleExtractor, parse_vehicle_and_customer};

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::vehicle::{ScanType, VehicleInfo};

/// Trait for single-page field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from one page of text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract from per-page text, first page with a hit wins.
    fn extract_pages<S: AsRef<str>>(&self, pages: &[S]) -> Option<Self::Output> {
        pages.iter().find_map(|page| self.extract(page.as_ref()))
    }
}

/// Everything extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub repair_order_number: Option<String>,
    pub vehicle_info: Option<VehicleInfo>,
    pub scan_type: ScanType,
}

impl ExtractedFields {
    /// Empty result, used when the document text could not be read.
    pub fn none() -> Self {
        Self {
            repair_order_number: None,
            vehicle_info: None,
            scan_type: ScanType::Unknown,
        }
    }

    /// Run every parser over the pages of `document`, logging each outcome.
    pub fn from_pages<S: AsRef<str>>(document: &str, pages: &[S]) -> Self {
        let repair_order_number = parse_repair_order_number(pages);
        match &repair_order_number {
            Some(number) => debug!("Repair order number {} found in {}", number, document),
            None => warn!("Repair order number not found in {}", document),
        }

        let vehicle_info = parse_vehicle_and_customer(pages);
        match &vehicle_info {
            Some(info) => {
                if info.year.is_none() {
                    warn!("Vehicle information not found in {}", document);
                }
                if info.vin.is_none() {
                    warn!("VIN information not found in {}", document);
                }
                if info.customer_name.is_none() {
                    warn!("Customer information not found in {}", document);
                }
                debug!("Vehicle information for {}: {:?}", document, info);
            }
            None => warn!("No vehicle or customer information found in {}", document),
        }

        let scan_type = determine_scan_type(pages);
        match scan_type {
            ScanType::Unknown => warn!("No pre-scan report found in {}", document),
            other => debug!("Scan type of {}: {}", document, other),
        }

        Self {
            repair_order_number,
            vehicle_info,
            scan_type,
        }
    }

    /// Repair order number and filename suffix, when both are available.
    pub fn rename_key(&self) -> Option<(&str, &'static str)> {
        let number = self.repair_order_number.as_deref()?;
        let suffix = self.scan_type.suffix()?;
        Some((number, suffix))
    }
}
