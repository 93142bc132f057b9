//! Vehicle, customer and scan classification models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Vehicle and customer details found on a repair order.
///
/// Every field is independently optional. Unmatched fields are omitted from
/// the JSON output, except `telephone`, which is written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    /// Model year (4 digits).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    /// Manufacturer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    /// Model name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Odometer reading in miles, digits only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer_reading: Option<String>,

    /// Vehicle identification number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,

    /// License plate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,

    /// Customer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    /// Customer telephone.
    #[serde(default)]
    pub telephone: Option<String>,
}

/// Which scan reports a document contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanType {
    /// Only a pre-scan report.
    PreScanOnly,
    /// Both pre-scan and post-scan reports.
    PreAndPostScan,
    /// No pre-scan report found.
    Unknown,
}

impl ScanType {
    /// Classify from the two report marker flags.
    pub fn from_flags(pre_scan: bool, post_scan: bool) -> Self {
        match (pre_scan, post_scan) {
            (true, true) => ScanType::PreAndPostScan,
            (true, false) => ScanType::PreScanOnly,
            _ => ScanType::Unknown,
        }
    }

    /// Filename suffix, `None` for [`ScanType::Unknown`].
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            ScanType::PreScanOnly => Some("p"),
            ScanType::PreAndPostScan => Some("pp"),
            ScanType::Unknown => None,
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanType::PreScanOnly => write!(f, "pre-scan only"),
            ScanType::PreAndPostScan => write!(f, "pre- and post-scan"),
            ScanType::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scan_type_from_flags() {
        assert_eq!(ScanType::from_flags(true, true), ScanType::PreAndPostScan);
        assert_eq!(ScanType::from_flags(true, false), ScanType::PreScanOnly);
        assert_eq!(ScanType::from_flags(false, true), ScanType::Unknown);
        assert_eq!(ScanType::from_flags(false, false), ScanType::Unknown);
    }

    #[test]
    fn test_scan_type_suffix() {
        assert_eq!(ScanType::PreScanOnly.suffix(), Some("p"));
        assert_eq!(ScanType::PreAndPostScan.suffix(), Some("pp"));
        assert_eq!(ScanType::Unknown.suffix(), None);
    }

    #[test]
    fn test_vehicle_info_serialization_keeps_null_telephone() {
        let info = VehicleInfo {
            vin: Some("1HGCM82633A004352".to_string()),
            license_plate: Some("ABC123".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(
            json,
            r#"{"vin":"1HGCM82633A004352","license_plate":"ABC123","telephone":null}"#
        );
    }

    #[test]
    fn test_vehicle_info_key_order() {
        let info = VehicleInfo {
            year: Some("2019".to_string()),
            make: Some("Honda".to_string()),
            model: Some("Civic".to_string()),
            odometer_reading: Some("12345".to_string()),
            vin: Some("1HGCM82633A004352".to_string()),
            license_plate: Some("XYZ789".to_string()),
            customer_name: Some("Jane Doe".to_string()),
            telephone: Some("555-1234".to_string()),
        };

        let json = serde_json::to_string(&info).unwrap();
        let positions: Vec<usize> = [
            "\"year\"",
            "\"make\"",
            "\"model\"",
            "\"odometer_reading\"",
            "\"vin\"",
            "\"license_plate\"",
            "\"customer_name\"",
            "\"telephone\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
