//! Result emission
//!
//! Generated devices go to stdout as a JSON array, or to a file as a YAML
//! sequence when an output path is given.

use anyhow::{Context, Result};
use registry::DeviceRecord;
use std::fs;
use std::path::Path;

/// Write the generated devices to `output`, or print them when it is `None`
pub fn emit(devices: &[DeviceRecord], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let yaml =
                serde_yaml::to_string(devices).context("Failed to serialize devices to YAML")?;
            fs::write(path, yaml)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            tracing::info!("Wrote {} device(s) to {}", devices.len(), path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(devices)
                .context("Failed to serialize devices to JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}
