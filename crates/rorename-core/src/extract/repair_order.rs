//! Repair order number extraction.

use super::FieldExtractor;
use super::patterns::REPAIR_ORDER_NUMBER;

/// Repair order number extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct RepairOrderExtractor;

impl FieldExtractor for RepairOrderExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        REPAIR_ORDER_NUMBER
            .captures(text)
            .map(|caps| caps[1].to_string())
    }
}

/// Extract the repair order number from per-page text. First page with a hit wins.
pub fn parse_repair_order_number<S: AsRef<str>>(pages: &[S]) -> Option<String> {
    RepairOrderExtractor.extract_pages(pages)
}
