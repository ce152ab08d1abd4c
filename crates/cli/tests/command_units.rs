use jailcheck::commands::{
    describe_predicate, format_storage, format_windows, parse_chip, render_verdict, yes_no,
    DataInfo, VerdictReport,
};
use jailcheck::default_log_level;
use jailcheck_core::config::ResolverConfig;
use jailcheck_core::rules::ChipPredicate;
use jailcheck_core::version::VersionWindow;
use jailcheck_core::{Chip, CompatibilityVerdict, Resolver};

#[test]
fn parse_chip_accepts_loose_spelling_and_lists_choices_on_error() {
    assert_eq!(parse_chip("a17 pro").expect("chip"), Chip::A17Pro);
    let err = parse_chip("Z80").unwrap_err().to_string();
    assert!(err.contains("Invalid chip 'Z80'"));
    assert!(err.contains("A17 Pro"));
}

#[test]
fn format_windows_joins_ranges_and_exact_versions() {
    let windows = vec![VersionWindow::range("16.5.1", "16.6.1"), VersionWindow::exact("17.0")];
    assert_eq!(format_windows(&windows), "16.5.1-16.6.1, 17.0");
    assert_eq!(format_windows(&[]), "");
}

#[test]
fn format_storage_switches_to_terabytes() {
    assert_eq!(format_storage(&[]), "(unknown)");
    assert_eq!(format_storage(&[128, 512, 1024, 2048]), "128 GB, 512 GB, 1 TB, 2 TB");
}

#[test]
fn yes_no_is_plain() {
    assert_eq!(yes_no(true), "yes");
    assert_eq!(yes_no(false), "no");
}

#[test]
fn verbosity_maps_to_filter_levels() {
    assert_eq!(default_log_level(0), "warn");
    assert_eq!(default_log_level(1), "info");
    assert_eq!(default_log_level(2), "debug");
    assert_eq!(default_log_level(7), "trace");
}

#[test]
fn describe_predicate_covers_every_kind() {
    assert_eq!(describe_predicate(&ChipPredicate::Chips { chips: vec![Chip::A12, Chip::M1] }), "A12, M1");
    assert_eq!(describe_predicate(&ChipPredicate::AtOrBefore { chip: Chip::A4 }), "A4 and earlier");
    assert_eq!(describe_predicate(&ChipPredicate::Between { from: Chip::A7, to: Chip::A11 }), "A7 to A11");
    assert_eq!(describe_predicate(&ChipPredicate::BootromExploitable), "bootrom-exploitable chips");
}

#[test]
fn render_verdict_for_known_device() {
    let resolver = Resolver::builtin();
    let verdict = resolver.resolve("iPhone X", "16.0");
    let text = render_verdict(&verdict, "16.0");

    assert!(text.contains("Device: iPhone X (A11, 2017)"));
    assert!(text.contains("Storage: 64 GB, 256 GB"));
    assert!(text.contains("Status: JAILBREAKABLE"));
    assert!(text.contains("Bootrom exploit: yes"));
    assert!(text.contains("- palera1n [semi-tethered]"));
    assert!(text.contains("Note: "));
}

#[test]
fn render_verdict_for_unknown_device() {
    let verdict = CompatibilityVerdict::unknown("Galaxy S24");
    let text = render_verdict(&verdict, "14.0");

    assert!(text.contains("Device: (not in catalog)"));
    assert!(text.contains("Status: UNKNOWN"));
    assert!(text.contains("(none)"));
    assert!(text.contains("Galaxy S24"));
}

#[test]
fn verdict_report_carries_resolver_fingerprint() {
    let resolver = Resolver::builtin();
    let verdict = resolver.resolve("iPhone 13", "16.6");
    let report = VerdictReport::new(&resolver, &verdict);

    assert_eq!(report.fingerprint, resolver.fingerprint());
    let value = serde_json::to_value(&report).expect("serialize");
    assert_eq!(value["data"]["matched_tools"][0]["name"], "Serotonin");
}

#[test]
fn data_info_collects_builtin_counts() {
    let resolver = Resolver::builtin();
    let info = DataInfo::collect(&resolver, &ResolverConfig::default());

    assert_eq!(info.devices, resolver.catalog().len());
    assert_eq!(info.rules, resolver.rules().len());
    assert_eq!(info.catalog_source, "built-in");
    assert_eq!(info.rules_source, "built-in");
    assert_eq!(info.library_version, jailcheck_core::version());
}
