//! Registry acquisition
//!
//! The registry lives in a plain text file. When the file is absent it is
//! fetched once from the public registry URL; there is no integrity check,
//! no version pinning and no retry. A fetch or read failure propagates to
//! the caller.

use crate::error::Result;
use crate::parse::parse_records;
use crate::record::DeviceRecord;
use std::fs;
use std::path::Path;
use tracing::info;

/// Canonical public location of the USB ID registry
pub const REGISTRY_URL: &str = "http://www.linux-usb.org/usb.ids";

/// Default on-disk name of the registry file
pub const REGISTRY_FILE: &str = "usb.ids";

/// Load and parse the registry, downloading it first if `path` is absent
pub fn load_or_fetch(path: &Path, url: &str) -> Result<Vec<DeviceRecord>> {
    if !path.exists() {
        download(url, path)?;
    }

    let text = fs::read_to_string(path)?;
    let records = parse_records(&text)?;
    info!(
        "Loaded {} device records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Fetch the registry from `url` and write it to `path`
pub fn download(url: &str, path: &Path) -> Result<()> {
    info!("Registry file {} not found, downloading from {}", path.display(), url);

    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, body)?;

    info!("Saved registry to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_existing_file_skips_download() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // An unreachable URL proves no fetch is attempted for an existing file.
        write!(file, "1d6b  Linux Foundation\n\t0002  2.0 root hub\n").unwrap();

        let records = load_or_fetch(file.path(), "http://registry.invalid/usb.ids").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].vendor_id, "0x1d6b");
    }

    #[test]
    fn test_malformed_file_propagates_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\t0002  orphan product\n").unwrap();

        let result = load_or_fetch(file.path(), "http://registry.invalid/usb.ids");
        assert!(matches!(result, Err(crate::error::Error::Input(_))));
    }
}
