//! USB device record model

use serde::{Deserialize, Serialize};

/// One vendor/product combination from the registry
///
/// The registry is a two-level hierarchy (vendor, then indented products);
/// a record flattens one product together with its owning vendor. The
/// `manufacturer` field is the vendor line's name, denormalized into every
/// child record.
///
/// The last four fields are `None` for parsed records and are filled by the
/// generation step. They always appear in serialized output (as null when
/// unset) so every emitted mapping carries the full key set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// USB Vendor ID, lowercase hex with `0x` prefix (e.g. "0x1d6b")
    pub vendor_id: String,
    /// USB Product ID, same format, unique only within its vendor
    pub product_id: String,
    /// Product name from the registry
    pub product_name: String,
    /// Vendor name from the owning vendor line
    pub manufacturer: String,
    /// 16-character lowercase hex serial, assigned during generation
    pub serial_number: Option<String>,
    /// File system label, assigned during generation
    pub file_system: Option<String>,
    /// Capacity label, assigned during generation
    pub size: Option<String>,
    pub label: Option<String>,
}

impl DeviceRecord {
    /// Create a record as parsed from the registry (generation fields unset)
    pub fn from_registry(
        vendor_id: String,
        product_id: String,
        product_name: String,
        manufacturer: String,
    ) -> Self {
        Self {
            vendor_id,
            product_id,
            product_name,
            manufacturer,
            serial_number: None,
            file_system: None,
            size: None,
            label: None,
        }
    }
}
