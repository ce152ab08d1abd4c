use std::fs;

use jailcheck_core::config::{load_catalog, load_rules, DataFormat, ResolverConfig};
use jailcheck_core::{ConfigError, JailbreakStatus, RuleSet};
use tempfile::tempdir;

const DEVICES_YAML: &str = r#"
- name: Test Phone
  identifiers: ["Test1,1"]
  chip: A11
  release_year: 2017
  storage_options: [64, 256]
  has_bootrom_exploit: true
- name: Test Tablet Pro
  chip: A17 Pro
  release_year: 2024
"#;

const RULES_JSON: &str = r#"[
  {
    "name": "Alpha",
    "tool_type": "semi-untethered",
    "tiers": [
      {
        "chips": { "kind": "bootrom_exploitable" },
        "windows": [{ "min": "15.0", "max": "16.6.1" }]
      }
    ]
  },
  {
    "name": "Beta",
    "tool_type": "tethered",
    "priority": { "kind": "fallback", "defers_to": "Alpha" },
    "notes": "Only when Alpha is out of range.",
    "tiers": [
      {
        "chips": { "kind": "at_or_before", "chip": "A17 Pro" },
        "windows": [{ "exact": "17.0" }]
      }
    ]
  }
]"#;

#[test]
fn config_with_relative_paths_builds_a_custom_resolver() {
    let dir = tempdir().expect("tempdir");
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).expect("data dir");
    fs::write(data_dir.join("devices.yaml"), DEVICES_YAML).expect("write devices");
    fs::write(data_dir.join("rules.json"), RULES_JSON).expect("write rules");
    let config_path = dir.path().join("jailcheck.yaml");
    fs::write(&config_path, "catalog: data/devices.yaml\nrules: data/rules.json\n").expect("write config");

    let config = ResolverConfig::load(&config_path).expect("load config");
    assert_eq!(config.config_version, "0.1.0");
    assert_eq!(config.catalog.as_deref(), Some(data_dir.join("devices.yaml").as_path()));

    let resolver = config.build_resolver().expect("build resolver");
    assert_eq!(resolver.catalog().len(), 2);
    assert_eq!(resolver.rules().len(), 2);

    let phone = resolver.resolve("Apple test phone", "16.0");
    assert_eq!(phone.tool_names(), ["Alpha"]);
    assert!(phone.has_bootrom_exploit);

    let phone_17 = resolver.resolve("Test Phone", "17.0");
    assert_eq!(phone_17.tool_names(), ["Beta"]);
    assert_eq!(phone_17.matched_tools[0].notes.as_deref(), Some("Only when Alpha is out of range."));

    let tablet = resolver.resolve("Test Tablet", "17.0");
    assert_eq!(tablet.tool_names(), ["Beta"]);
    assert_eq!(resolver.resolve("iPhone X", "14.3").status, JailbreakStatus::Unknown);
}

#[test]
fn default_config_uses_builtin_tables() {
    let config = ResolverConfig::default();
    assert_eq!(config.catalog_source(), "built-in");
    assert_eq!(config.rules_source(), "built-in");
    let resolver = config.build_resolver().expect("builtin resolver");
    assert_eq!(resolver.fingerprint(), jailcheck_core::Resolver::builtin().fingerprint());
}

#[test]
fn format_is_chosen_by_extension() {
    assert_eq!(DataFormat::from_path("a.JSON".as_ref()).ok(), Some(DataFormat::Json));
    assert_eq!(DataFormat::from_path("a.yml".as_ref()).ok(), Some(DataFormat::Yaml));
    assert!(matches!(
        DataFormat::from_path("a.toml".as_ref()),
        Err(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.yaml");
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn invalid_tables_surface_validation_errors() {
    let dir = tempdir().expect("tempdir");

    let devices = dir.path().join("devices.json");
    fs::write(
        &devices,
        r#"[{"name": "Bad", "chip": "A9", "release_year": 2015, "storage_options": [128, 16]}]"#,
    )
    .expect("write devices");
    assert!(matches!(load_catalog(&devices).unwrap_err(), ConfigError::Catalog(_)));

    let rules = dir.path().join("rules.yaml");
    fs::write(
        &rules,
        "- name: Lonely\n  tool_type: tethered\n  priority: { kind: fallback, defers_to: Nobody }\n  tiers:\n    - chips: { kind: chips, chips: [A9] }\n      windows: [{ exact: \"9.0\" }]\n",
    )
    .expect("write rules");
    assert!(matches!(load_rules(&rules).unwrap_err(), ConfigError::Rules(_)));
}

#[test]
fn malformed_documents_are_parse_errors() {
    let dir = tempdir().expect("tempdir");
    let json = dir.path().join("rules.json");
    fs::write(&json, "{ not json").expect("write");
    assert!(matches!(load_rules(&json).unwrap_err(), ConfigError::Json { .. }));

    let yaml = dir.path().join("devices.yaml");
    fs::write(&yaml, "- name: Phone\n  chip: Z99\n  release_year: 2020\n").expect("write");
    assert!(matches!(load_catalog(&yaml).unwrap_err(), ConfigError::Yaml { .. }));
}

#[test]
fn builtin_rules_survive_a_yaml_export() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("rules.yaml");
    let builtin = RuleSet::builtin();
    fs::write(&path, serde_yaml::to_string(builtin.rules()).expect("to yaml")).expect("write");

    let loaded = load_rules(&path).expect("reload builtin rules");
    assert_eq!(loaded, builtin);
}
