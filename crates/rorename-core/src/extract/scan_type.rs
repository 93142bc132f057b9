//! Scan report classification.

use super::patterns::{POST_SCAN_MARKER, PRE_SCAN_MARKER};
use crate::models::vehicle::ScanType;

/// Classify a document by the scan reports it contains.
///
/// Both markers are looked for across every page before deciding.
pub fn determine_scan_type<S: AsRef<str>>(pages: &[S]) -> ScanType {
    let mut pre_scan = false;
    let mut post_scan = false;

    for page in pages {
        let text = page.as_ref();
        if text.contains(PRE_SCAN_MARKER) {
            pre_scan = true;
        }
        if text.contains(POST_SCAN_MARKER) {
            post_scan = true;
        }
    }

    ScanType::from_flags(pre_scan, post_scan)
}
