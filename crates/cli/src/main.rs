//! usb-forge
//!
//! Generates and validates synthetic USB device descriptors against the
//! public usb.ids vendor/product registry.

mod config;
mod output;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Args, Parser, Subcommand};
use registry::{
    Candidate, DeviceRecord, SearchField, generate, load_or_fetch, setup_logging,
    validate_candidate,
};
use serde::Deserialize;
use std::fs;
use tracing::{debug, info};

use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "usb-forge")]
#[command(
    author,
    version,
    about = "Generate and validate synthetic USB device descriptors"
)]
#[command(long_about = "
Parses the public usb.ids vendor/product registry and either generates
synthetic USB device descriptors from it or validates descriptors against it.
The registry is downloaded automatically when the file is absent.

EXAMPLES:
    # Generate one device from the whole registry
    usb-forge generate

    # Generate five Logitech devices into a YAML file
    usb-forge generate -g 5 -m Logitech -o devices.yaml

    # Generate a device with a specific vendor ID
    usb-forge generate --vid 0x1d6b

    # Validate an inline descriptor
    usb-forge validate -i '{vendor_id: \"0x1d6b\", product_id: \"0x0002\"}'

    # Validate previously generated devices
    usb-forge validate -f devices.yaml

CONFIGURATION:
    The tool looks for configuration files in the following order:
    1. Path specified with --config
    2. ~/.config/usb-forge/config.toml
    3. /etc/usb-forge/config.toml
    4. Built-in defaults
")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<std::path::PathBuf>,

    /// Path to the usb.ids registry file (downloaded there when absent)
    #[arg(long, value_name = "PATH", global = true)]
    registry: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    /// Save default configuration to the default location and exit
    #[arg(long, global = true)]
    save_config: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the configuration of one or more synthetic USB devices
    Generate(GenerateArgs),
    /// Validate USB device descriptors against the registry
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of devices to generate
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    generate: usize,

    /// Output file path (prints to stdout when omitted)
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Keep only devices whose manufacturer contains this text
    #[arg(short, long, group = "filter")]
    manufacturer: Option<String>,

    /// Keep only devices whose product name contains this text
    #[arg(short, long, group = "filter")]
    product_name: Option<String>,

    /// Keep only devices with this exact vendor ID (e.g. 0x1d6b)
    #[arg(long, group = "filter")]
    vid: Option<String>,

    /// Keep only devices with this exact product ID (e.g. 0x0002)
    #[arg(long, group = "filter")]
    pid: Option<String>,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "file"])))]
struct ValidateArgs {
    /// Inline device mapping, e.g. '{vendor_id: "0x1d6b"}'
    #[arg(short, long, value_name = "MAPPING")]
    input: Option<String>,

    /// YAML file with one device mapping or a sequence of them
    #[arg(short, long, value_name = "PATH")]
    file: Option<String>,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Handle --save-config flag early (before loading config)
    if args.save_config {
        let config = AppConfig::default();
        let path = AppConfig::default_path();
        config.save(&path).context("Failed to save configuration")?;
        println!("Configuration saved to: {}", path.display());
        return Ok(());
    }

    // Load configuration first (to get log level from config if not specified)
    let config = if let Some(ref path) = args.config {
        AppConfig::load(Some(path.clone())).context("Failed to load configuration")?
    } else {
        AppConfig::load_or_default()
    };

    // Use CLI log level if specified, otherwise use config value
    let log_level = args.log_level.as_deref().unwrap_or(&config.forge.log_level);
    setup_logging(log_level).context("Failed to setup logging")?;

    info!("usb-forge v{}", env!("CARGO_PKG_VERSION"));

    let Some(command) = args.command else {
        bail!("no subcommand given; try `usb-forge generate` or `usb-forge validate`");
    };

    let registry_path = match args.registry.as_deref() {
        Some(path) => config::expand_path(path),
        None => config.registry.path.clone(),
    };
    let records = load_or_fetch(&registry_path, &config.registry.url).with_context(|| {
        format!(
            "Failed to load USB ID registry from {}",
            registry_path.display()
        )
    })?;

    match command {
        Commands::Generate(generate_args) => run_generate(&records, &generate_args),
        Commands::Validate(validate_args) => run_validate(&records, &validate_args),
    }
}

/// The (at most one) search filter requested on the command line
fn filter_for(args: &GenerateArgs) -> Option<(SearchField, &str)> {
    if let Some(manufacturer) = args.manufacturer.as_deref() {
        Some((SearchField::Manufacturer, manufacturer))
    } else if let Some(product_name) = args.product_name.as_deref() {
        Some((SearchField::ProductName, product_name))
    } else if let Some(vid) = args.vid.as_deref() {
        Some((SearchField::VendorId, vid))
    } else if let Some(pid) = args.pid.as_deref() {
        Some((SearchField::ProductId, pid))
    } else {
        None
    }
}

fn run_generate(records: &[DeviceRecord], args: &GenerateArgs) -> Result<()> {
    let filtered: Vec<DeviceRecord> = match filter_for(args) {
        Some((field, value)) => {
            let hits: Vec<DeviceRecord> = records
                .iter()
                .filter(|record| field.matches(record, value))
                .cloned()
                .collect();
            debug!(
                "Filter {}={} kept {} of {} records",
                field,
                value,
                hits.len(),
                records.len()
            );
            hits
        }
        None => records.to_vec(),
    };

    let mut rng = rand::rng();
    let devices = generate(&filtered, args.generate, &mut rng)?;

    let output = args.output.as_deref().map(config::expand_path);
    output::emit(&devices, output.as_deref())
}

fn run_validate(records: &[DeviceRecord], args: &ValidateArgs) -> Result<()> {
    let candidates = load_candidates(args)?;
    debug!("Validating {} candidate(s)", candidates.len());

    for candidate in &candidates {
        let report = validate_candidate(records, candidate);
        for miss in &report.misses {
            println!("{}: {} not found in usb.ids", miss.field, miss.value);
        }

        let rendered = serde_json::to_string(candidate)?;
        if report.is_valid() {
            println!("{rendered} is a valid USB device");
        } else {
            println!("{rendered} is not a valid USB device");
        }
    }

    Ok(())
}

/// A validate input is either a single mapping or a sequence of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Candidate),
    Many(Vec<Candidate>),
}

fn load_candidates(args: &ValidateArgs) -> Result<Vec<Candidate>> {
    let text = if let Some(file) = args.file.as_deref() {
        let path = config::expand_path(file);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?
    } else if let Some(inline) = args.input.as_deref() {
        inline.to_string()
    } else {
        bail!("validate requires --input or --file");
    };

    let parsed: OneOrMany =
        serde_yaml::from_str(&text).context("Failed to parse device mapping(s)")?;
    Ok(match parsed {
        OneOrMany::One(candidate) => vec![candidate],
        OneOrMany::Many(candidates) => candidates,
    })
}
