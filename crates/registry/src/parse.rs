//! usb.ids registry parser
//!
//! The registry is line-oriented: unindented lines name a vendor, tab-indented
//! lines name a product under the most recent vendor. The file ends with class
//! and protocol tables that are not device data; a sentinel comment marks
//! where they begin and the scan stops there.

use crate::error::{Error, Result};
use crate::record::DeviceRecord;
use tracing::debug;

/// Comment line that opens the trailing non-device section of usb.ids
const SENTINEL: &str = "# List of known device classes, subclasses and protocols";

/// Parse registry text into the full vendor x product record sequence,
/// in source order.
///
/// A product line before any vendor line fails with [`Error::Input`]: an
/// indented first data line means the registry is corrupt.
pub fn parse_records(source: &str) -> Result<Vec<DeviceRecord>> {
    let mut vendor: Option<(String, String)> = None;
    let mut records = Vec::new();

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            // The sentinel is itself a comment, so it is only reachable here.
            if line.starts_with(SENTINEL) {
                break;
            }
            continue;
        }

        if line.starts_with('\t') {
            let mut tokens = line.split_whitespace();
            let Some(product_id) = tokens.next() else {
                continue;
            };
            let product_name = tokens.collect::<Vec<_>>().join(" ");

            let Some((vendor_id, manufacturer)) = vendor.as_ref() else {
                return Err(Error::Input(
                    "product line appears before any vendor line".to_string(),
                ));
            };

            records.push(DeviceRecord::from_registry(
                format!("0x{vendor_id}"),
                format!("0x{product_id}"),
                product_name,
                manufacturer.clone(),
            ));
        } else {
            let mut tokens = line.split_whitespace();
            let Some(vendor_id) = tokens.next() else {
                continue;
            };
            let manufacturer = tokens.collect::<Vec<_>>().join(" ");
            vendor = Some((vendor_id.to_string(), manufacturer));
        }
    }

    debug!("Parsed {} device records from registry", records.len());
    Ok(records)
}
