//! USB ID registry parsing and synthetic device generation
//!
//! This crate holds the shared logic behind the usb-forge CLI: the flat
//! device record model, the usb.ids parser, attribute search, the generation
//! and validation steps, registry acquisition, and logging setup.

pub mod error;
pub mod generate;
pub mod logging;
pub mod parse;
pub mod record;
pub mod search;
pub mod source;
pub mod validate;

pub use error::{Error, Result};
pub use generate::{FILE_SYSTEMS, SIZES, generate};
pub use logging::setup_logging;
pub use parse::parse_records;
pub use record::DeviceRecord;
pub use search::{SearchField, search};
pub use source::{REGISTRY_FILE, REGISTRY_URL, load_or_fetch};
pub use validate::{Candidate, FieldMiss, ValidationReport, validate_candidate};
