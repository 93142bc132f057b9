//! Vehicle and customer information extraction.

use tracing::trace;

use super::FieldExtractor;
use super::patterns::{CUSTOMER_BLOCK, TELEPHONE, VEHICLE_BLOCK, VIN_BLOCK};
use crate::models::vehicle::VehicleInfo;

/// Extracts [`VehicleInfo`] from a single page.
///
/// The vehicle block, the VIN block, the customer block and the telephone are
/// matched independently. A page yields a record as soon as any of the four
/// matched; unmatched fields stay `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct VehicleExtractor;

impl FieldExtractor for VehicleExtractor {
    type Output = VehicleInfo;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let mut info = VehicleInfo::default();
        let mut matched = false;

        if let Some(caps) = VEHICLE_BLOCK.captures(text) {
            trace!("Vehicle block matched: {:?}", &caps[0]);
            info.year = Some(caps[1].to_string());
            info.make = Some(caps[2].to_string());
            info.model = Some(caps[3].trim().to_string());
            info.odometer_reading = Some(strip_commas(&caps[4]));
            matched = true;
        }

        if let Some(caps) = VIN_BLOCK.captures(text) {
            trace!("VIN block matched: {:?}", &caps[0]);
            info.vin = Some(caps[1].to_string());
            info.license_plate = Some(caps[2].to_string());
            matched = true;
        }

        if let Some(name) = customer_name(text) {
            trace!("Customer name matched: {:?}", name);
            info.customer_name = Some(name);
            matched = true;
        }

        if let Some(caps) = TELEPHONE.captures(text) {
            let telephone = caps[1].trim();
            trace!("Telephone matched: {:?}", telephone);
            info.telephone = Some(telephone.to_string());
            matched = true;
        }

        matched.then_some(info)
    }
}

/// Extract vehicle and customer data from per-page text.
///
/// Returns the record of the first page where anything matched, even if that
/// record is incomplete; later pages are not consulted. Pages where nothing
/// matched are skipped, and a document with no match on any page has no record.
pub fn parse_vehicle_and_customer<S: AsRef<str>>(pages: &[S]) -> Option<VehicleInfo> {
    VehicleExtractor.extract_pages(pages)
}

/// Odometer readings are printed with thousands separators.
fn strip_commas(value: &str) -> String {
    value.chars().filter(|&c| c != ',').collect()
}

/// Customer name after `Customer Information ... Name:`.
///
/// The name is the longest run of word/space characters that is followed by
/// whitespace plus `Tel`, or by the end of the text (a single trailing newline
/// is allowed). When a block has no such run the search resumes one character
/// past the block start, so a later block inside the rejected run still counts.
fn customer_name(text: &str) -> Option<String> {
    let mut start = 0;
    while let Some(caps) = CUSTOMER_BLOCK.captures_at(text, start) {
        let (Some(block), Some(run)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        let end = (run.start() + 1..=run.end())
            .rev()
            .filter(|&i| text.is_char_boundary(i))
            .find(|&i| name_ends_at(&text[i..]));

        if let Some(end) = end {
            let name = text[run.start()..end].trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }

        start = text[block.start()..]
            .chars()
            .next()
            .map_or(text.len(), |c| block.start() + c.len_utf8());
    }
    None
}

fn name_ends_at(rest: &str) -> bool {
    if rest.is_empty() || rest == "\n" {
        return true;
    }
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str().starts_with("Tel"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL_PAGE: &str = "Repair Order Number: 123456\n\
        Vehicle Information 2019\\Honda\\Civic LX Odometer Reading: 45,678 Miles\n\
        VIN: 1HGCM82633A004352 License Plate: ABC123\n\
        Customer Information Name: John Smith Tel: (555) 123-4567\n";

    #[test]
    fn test_full_page() {
        let info = parse_vehicle_and_customer(&[FULL_PAGE]).unwrap();

        assert_eq!(
            info,
            VehicleInfo {
                year: Some("2019".to_string()),
                make: Some("Honda".to_string()),
                model: Some("Civic LX".to_string()),
                odometer_reading: Some("45678".to_string()),
                vin: Some("1HGCM82633A004352".to_string()),
                license_plate: Some("ABC123".to_string()),
                customer_name: Some("John Smith".to_string()),
                telephone: Some("(555) 123-4567".to_string()),
            }
        );
    }

    #[test]
    fn test_odometer_commas_stripped() {
        let page = "Vehicle Information 2021\\Ford\\F-150 Odometer Reading: 12,345 Miles";
        let info = parse_vehicle_and_customer(&[page]).unwrap();
        assert_eq!(info.odometer_reading.as_deref(), Some("12345"));
        assert_eq!(info.model.as_deref(), Some("F-150"));
    }

    #[test]
    fn test_large_odometer_reading() {
        let page = "Vehicle Information 2005\\Toyota\\Camry\nOdometer Reading: 1,234,567 Miles";
        let info = parse_vehicle_and_customer(&[page]).unwrap();
        assert_eq!(info.odometer_reading.as_deref(), Some("1234567"));
        assert_eq!(info.model.as_deref(), Some("Camry"));
    }

    #[test]
    fn test_missing_vin_keeps_other_fields() {
        let page = "Vehicle Information 2019\\Honda\\Civic Odometer Reading: 100 Miles\n\
            Customer Information Name: Jane Doe Tel: 555-0000";
        let info = parse_vehicle_and_customer(&[page]).unwrap();

        assert_eq!(info.vin, None);
        assert_eq!(info.license_plate, None);
        assert_eq!(info.year.as_deref(), Some("2019"));
        assert_eq!(info.customer_name.as_deref(), Some("Jane Doe"));
        assert_eq!(info.telephone.as_deref(), Some("555-0000"));
    }

    #[test]
    fn test_missing_telephone_is_null() {
        let page = "VIN: 1HGCM82633A004352 License Plate: XYZ789";
        let info = parse_vehicle_and_customer(&[page]).unwrap();

        assert_eq!(info.telephone, None);
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"telephone\":null"));
        assert!(!json.contains("\"year\""));
    }

    #[test]
    fn test_vin_rejects_excluded_letters() {
        // Contains an O, which never appears in a VIN
        let page = "VIN: 1HGCM82633O004352 License Plate: ABC123";
        assert_eq!(parse_vehicle_and_customer(&[page]), None);
    }

    #[test]
    fn test_vin_requires_license_plate() {
        let page = "VIN: 1HGCM82633A004352";
        assert_eq!(parse_vehicle_and_customer(&[page]), None);
    }

    #[test]
    fn test_customer_name_at_end_of_text() {
        let page = "Customer Information\nName: Maria Garcia";
        let info = parse_vehicle_and_customer(&[page]).unwrap();
        assert_eq!(info.customer_name.as_deref(), Some("Maria Garcia"));
    }

    #[test]
    fn test_customer_name_before_newline_tel() {
        let page = "Customer Information\nName: Maria Garcia\nTel: 555 111 2222";
        let info = parse_vehicle_and_customer(&[page]).unwrap();
        assert_eq!(info.customer_name.as_deref(), Some("Maria Garcia"));
        assert_eq!(info.telephone.as_deref(), Some("555 111 2222"));
    }

    #[test]
    fn test_customer_name_without_terminator() {
        // Neither followed by "Tel" nor at the end of the text
        let page = "Customer Information Name: John Smith, Account 12";
        let info = parse_vehicle_and_customer(&[page]);
        assert_eq!(info, None);
    }

    #[test]
    fn test_first_page_with_any_match_wins() {
        let pages = [
            "Nothing relevant here",
            "Customer Information Name: First Page",
            "VIN: 1HGCM82633A004352 License Plate: ABC123",
        ];
        let info = parse_vehicle_and_customer(&pages).unwrap();

        assert_eq!(info.customer_name.as_deref(), Some("First Page"));
        assert_eq!(info.vin, None);
    }

    #[test]
    fn test_customer_block_inside_rejected_name() {
        let page = "Customer Information Name: Walk In Customer Information Name: Bob Stone";
        let info = parse_vehicle_and_customer(&[page]).unwrap();
        assert_eq!(info.customer_name.as_deref(), Some("Bob Stone"));
    }

    #[test]
    fn test_model_trailing_space_trimmed() {
        let page = "Vehicle Information 2019\\Honda\\Civic LX  Odometer Reading: 10 Miles";
        let info = parse_vehicle_and_customer(&[page]).unwrap();
        assert_eq!(info.model.as_deref(), Some("Civic LX"));
    }

    #[test]
    fn test_no_match_anywhere() {
        let pages = ["page one", "page two"];
        assert_eq!(parse_vehicle_and_customer(&pages), None);
    }

    #[test]
    fn test_strip_commas() {
        assert_eq!(strip_commas("12,345"), "12345");
        assert_eq!(strip_commas("999"), "999");
    }
}
