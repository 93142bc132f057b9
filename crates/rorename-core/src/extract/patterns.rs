//! Regex patterns for repair order documents.

use lazy_static::lazy_static;
use regex::Regex;

/// Marker of a pre-scan report.
pub const PRE_SCAN_MARKER: &str = "Pre-scan Report";

/// Marker of a post-scan report.
pub const POST_SCAN_MARKER: &str = "Post-scan Report";

lazy_static! {
    pub static ref REPAIR_ORDER_NUMBER: Regex = Regex::new(
        r"Repair Order Number\s*:\s*(\d+)"
    ).unwrap();

    // Year\Make\Model block followed by the odometer
    pub static ref VEHICLE_BLOCK: Regex = Regex::new(
        r"Vehicle Information\s*(\d{4})\\(\w+)\\([\w\s-]+)\s*Odometer Reading:\s*([\d,]+)\s*Miles"
    ).unwrap();

    // VIN excludes I, O and Q
    pub static ref VIN_BLOCK: Regex = Regex::new(
        r"VIN:\s*([A-HJ-NPR-Z0-9]{17})\s*License Plate:\s*(\w+)"
    ).unwrap();

    // Name run; where it ends is decided in `vehicle::customer_name`
    pub static ref CUSTOMER_BLOCK: Regex = Regex::new(
        r"Customer Information\s*Name:\s*([\w\s]+)"
    ).unwrap();

    pub static ref TELEPHONE: Regex = Regex::new(
        r"Tel:\s*([\d\-+()\s]+)"
    ).unwrap();
}
