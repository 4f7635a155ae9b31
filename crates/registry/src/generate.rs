//! Synthetic device generation
//!
//! Each generated device is a uniform draw (with replacement) from the
//! candidate set, with a fresh serial number, file system and size. The RNG
//! is injected so tests can fix a seed.

use crate::error::{Error, Result};
use crate::record::DeviceRecord;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

/// File systems a generated device can report
pub const FILE_SYSTEMS: [&str; 3] = ["fat32", "exfat", "ntfs"];

/// Capacities a generated device can report
pub const SIZES: [&str; 5] = ["128M", "256M", "512M", "1G", "2G"];

/// Generate `count` synthetic devices from the candidate set.
///
/// Draws are independent, so the same registry record can back several
/// generated devices. Fails with [`Error::NotFound`] when `candidates` is
/// empty.
pub fn generate<R: Rng + ?Sized>(
    candidates: &[DeviceRecord],
    count: usize,
    rng: &mut R,
) -> Result<Vec<DeviceRecord>> {
    if candidates.is_empty() {
        return Err(Error::NotFound);
    }

    (0..count)
        .map(|_| {
            let mut device = candidates.choose(rng).ok_or(Error::NotFound)?.clone();
            device.serial_number = Some(serial_number(rng));
            device.file_system = FILE_SYSTEMS.choose(rng).map(|fs| fs.to_string());
            device.size = SIZES.choose(rng).map(|size| size.to_string());
            Ok(device)
        })
        .collect()
}

/// 16 lowercase hex characters; collisions are possible but negligible
fn serial_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 8];
    rng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
