//! Candidate validation against the parsed registry
//!
//! Validation narrows the full registry by each searchable field present in
//! the candidate, in canonical field order, and reports every field whose
//! application left the set empty. It is advisory: the report says what was
//! not found, it does not abort anything.

use crate::record::DeviceRecord;
use crate::search::SearchField;
use std::collections::BTreeMap;

/// A field-to-value mapping to check against the registry.
///
/// Values are optional because generated YAML carries null for unfilled
/// fields (`label` in particular) and must round-trip through validation.
/// Keys outside the four searchable fields are ignored.
pub type Candidate = BTreeMap<String, Option<String>>;

/// One field whose value narrowed the candidate set to zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMiss {
    pub field: String,
    pub value: String,
}

/// Outcome of validating one candidate
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub misses: Vec<FieldMiss>,
}

impl ValidationReport {
    /// A candidate is valid when every searchable field it carries was found
    pub fn is_valid(&self) -> bool {
        self.misses.is_empty()
    }
}

/// Validate one candidate mapping against the registry.
///
/// Filters apply cumulatively: once a field narrows the set to zero, every
/// later field reports a miss as well (there is nothing left to match).
pub fn validate_candidate(records: &[DeviceRecord], candidate: &Candidate) -> ValidationReport {
    let mut filtered: Vec<&DeviceRecord> = records.iter().collect();
    let mut misses = Vec::new();

    for field in SearchField::ALL {
        let Some(Some(value)) = candidate.get(field.name()) else {
            continue;
        };

        filtered.retain(|record| field.matches(record, value));
        if filtered.is_empty() {
            misses.push(FieldMiss {
                field: field.name().to_string(),
                value: value.clone(),
            });
        }
    }

    ValidationReport { misses }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<DeviceRecord> {
        vec![
            DeviceRecord::from_registry(
                "0x1d6b".to_string(),
                "0x0002".to_string(),
                "2.0 root hub".to_string(),
                "Linux Foundation".to_string(),
            ),
            DeviceRecord::from_registry(
                "0x046d".to_string(),
                "0xc077".to_string(),
                "M105 Optical Mouse".to_string(),
                "Logitech, Inc.".to_string(),
            ),
        ]
    }

    fn candidate(entries: &[(&str, &str)]) -> Candidate {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect()
    }

    #[test]
    fn test_known_device_is_valid() {
        let report = validate_candidate(
            &records(),
            &candidate(&[("vendor_id", "0x1d6b"), ("product_id", "0x0002")]),
        );
        assert!(report.is_valid());
        assert!(report.misses.is_empty());
    }

    #[test]
    fn test_unknown_vendor_is_reported() {
        let report = validate_candidate(&records(), &candidate(&[("vendor_id", "0x9999")]));
        assert!(!report.is_valid());
        assert_eq!(report.misses.len(), 1);
        assert_eq!(report.misses[0].field, "vendor_id");
        assert_eq!(report.misses[0].value, "0x9999");
    }

    #[test]
    fn test_narrowing_is_cumulative() {
        // Vendor and product both exist, but not together: the product
        // belongs to the other vendor.
        let report = validate_candidate(
            &records(),
            &candidate(&[("vendor_id", "0x1d6b"), ("product_id", "0xc077")]),
        );
        assert!(!report.is_valid());
        assert_eq!(report.misses.len(), 1);
        assert_eq!(report.misses[0].field, "product_id");
    }

    #[test]
    fn test_later_fields_also_miss_once_set_is_empty() {
        let report = validate_candidate(
            &records(),
            &candidate(&[("vendor_id", "0x9999"), ("product_name", "root hub")]),
        );
        assert_eq!(report.misses.len(), 2);
    }

    #[test]
    fn test_unknown_keys_and_nulls_are_ignored() {
        let mut candidate = candidate(&[("vendor_id", "0x1d6b"), ("serial_number", "abcd")]);
        candidate.insert("label".to_string(), None);

        let report = validate_candidate(&records(), &candidate);
        assert!(report.is_valid());
    }

    #[test]
    fn test_substring_match_applies_to_free_text_fields() {
        let report = validate_candidate(&records(), &candidate(&[("manufacturer", "Logi")]));
        assert!(report.is_valid());
    }
}
