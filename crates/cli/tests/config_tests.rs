//! Integration tests for configuration and validate-input parsing
//!
//! The cli crate is binary-only, so these tests parse the on-disk formats
//! standalone: the TOML configuration file and the YAML candidate mappings
//! accepted by `usb-forge validate`.

use std::collections::BTreeMap;

type Candidate = BTreeMap<String, Option<String>>;

mod app_config {
    const MINIMAL_CONFIG: &str = r#"
[forge]
log_level = "info"

[registry]
"#;

    const FULL_CONFIG: &str = r#"
[forge]
log_level = "debug"

[registry]
path = "/var/cache/usb-forge/usb.ids"
url = "http://www.linux-usb.org/usb.ids"
"#;

    #[test]
    fn test_parse_minimal_config() {
        let config: toml::Value = toml::from_str(MINIMAL_CONFIG).unwrap();

        let forge = config.get("forge").unwrap();
        assert_eq!(forge.get("log_level").unwrap().as_str().unwrap(), "info");

        // [registry] may be empty; path and url have built-in defaults.
        assert!(config.get("registry").unwrap().as_table().unwrap().is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: toml::Value = toml::from_str(FULL_CONFIG).unwrap();

        let registry = config.get("registry").unwrap();
        assert_eq!(
            registry.get("path").unwrap().as_str().unwrap(),
            "/var/cache/usb-forge/usb.ids"
        );
        assert_eq!(
            registry.get("url").unwrap().as_str().unwrap(),
            "http://www.linux-usb.org/usb.ids"
        );
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        assert!(toml::from_str::<toml::Value>("[forge\nlog_level = ").is_err());
    }
}

mod validate_input {
    use super::Candidate;

    #[test]
    fn test_single_inline_mapping() {
        let candidate: Candidate =
            serde_yaml::from_str("{vendor_id: \"0x1d6b\", product_id: \"0x0002\"}").unwrap();

        assert_eq!(candidate.get("vendor_id").unwrap().as_deref(), Some("0x1d6b"));
        assert_eq!(candidate.get("product_id").unwrap().as_deref(), Some("0x0002"));
    }

    #[test]
    fn test_block_style_sequence() {
        let text = "\
- vendor_id: \"0x1d6b\"
  product_name: root hub
- manufacturer: Logitech
";
        let candidates: Vec<Candidate> = serde_yaml::from_str(text).unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(
            candidates[0].get("product_name").unwrap().as_deref(),
            Some("root hub")
        );
        assert_eq!(
            candidates[1].get("manufacturer").unwrap().as_deref(),
            Some("Logitech")
        );
    }

    #[test]
    fn test_generated_output_round_trips() {
        // The shape `usb-forge generate -o` writes, nulls included.
        let text = "\
- vendor_id: \"0x1d6b\"
  product_id: \"0x0002\"
  product_name: 2.0 root hub
  manufacturer: Linux Foundation
  serial_number: 00112233aabbccdd
  file_system: fat32
  size: 1G
  label: null
";
        let candidates: Vec<Candidate> = serde_yaml::from_str(text).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].get("label"), Some(&None));
        assert_eq!(
            candidates[0].get("serial_number").unwrap().as_deref(),
            Some("00112233aabbccdd")
        );
    }
}
