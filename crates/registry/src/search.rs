//! Record filtering
//!
//! Identifier fields match by exact equality, free-text fields by
//! case-sensitive substring containment. Filtering is stable: results keep
//! the relative order of the input sequence.

use crate::error::{Error, Result};
use crate::record::DeviceRecord;
use std::fmt;
use std::str::FromStr;

/// A searchable attribute of a [`DeviceRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    VendorId,
    ProductId,
    Manufacturer,
    ProductName,
}

impl SearchField {
    /// Canonical field order, used for deterministic cumulative narrowing
    pub const ALL: [SearchField; 4] = [
        SearchField::VendorId,
        SearchField::ProductId,
        SearchField::Manufacturer,
        SearchField::ProductName,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::VendorId => "vendor_id",
            Self::ProductId => "product_id",
            Self::Manufacturer => "manufacturer",
            Self::ProductName => "product_name",
        }
    }

    /// Whether a record's value for this field matches the queried value
    ///
    /// IDs have to be specified fully, names can be given partially.
    pub fn matches(&self, record: &DeviceRecord, value: &str) -> bool {
        match self {
            Self::VendorId => record.vendor_id == value,
            Self::ProductId => record.product_id == value,
            Self::Manufacturer => record.manufacturer.contains(value),
            Self::ProductName => record.product_name.contains(value),
        }
    }
}

impl FromStr for SearchField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "vendor_id" => Ok(Self::VendorId),
            "product_id" => Ok(Self::ProductId),
            "manufacturer" => Ok(Self::Manufacturer),
            "product_name" => Ok(Self::ProductName),
            _ => Err(Error::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Return the subsequence of `records` whose `field` matches `value`.
///
/// An unrecognized field name fails with [`Error::UnknownField`] rather than
/// returning an empty or full result.
pub fn search(records: &[DeviceRecord], field: &str, value: &str) -> Result<Vec<DeviceRecord>> {
    let field: SearchField = field.parse()?;
    Ok(records
        .iter()
        .filter(|record| field.matches(record, value))
        .cloned()
        .collect())
}
