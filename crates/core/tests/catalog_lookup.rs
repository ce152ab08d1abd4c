use jailcheck_core::catalog::normalize::{canonicalize_generation, lookup_key, normalize_model};
use jailcheck_core::catalog::MatchStage;
use jailcheck_core::{CatalogError, Chip, DeviceCatalog, DeviceRecord};

fn record(name: &str, chip: Chip, has_bootrom_exploit: bool) -> DeviceRecord {
    DeviceRecord {
        name: name.to_string(),
        identifiers: vec![],
        model_numbers: vec![],
        chip,
        release_year: 2017,
        storage_options: vec![64, 256],
        has_bootrom_exploit,
    }
}

#[test]
fn generation_suffixes_collapse_to_one_form() {
    assert_eq!(canonicalize_generation("iPad (3rd Gen)"), "iPad (3 generation)");
    assert_eq!(canonicalize_generation("iPad (3 Gen)"), "iPad (3 generation)");
    assert_eq!(canonicalize_generation("iPad (3rd generation)"), "iPad (3 generation)");
    assert_eq!(normalize_model("Apple iPad (10th Gen)"), "iPad (10 generation)");
    assert_eq!(lookup_key("  apple   IPAD  (3rd   Gen) "), "ipad (3 generation)");
}

#[test]
fn exact_names_resolve_at_first_stage() {
    let catalog = DeviceCatalog::builtin();
    let (device, stage) = catalog.lookup_with_stage("iPhone 4").expect("iPhone 4");
    assert_eq!(device.name, "iPhone 4");
    assert_eq!(device.chip, Chip::A4);
    assert_eq!(stage, MatchStage::Exact);
}

#[test]
fn iphone_4_never_resolves_to_iphone_4s() {
    let catalog = DeviceCatalog::new(vec![record("iPhone 4S", Chip::A5, true)]).expect("catalog");
    assert!(catalog.lookup("iPhone 4").is_none());

    let builtin = DeviceCatalog::builtin();
    assert_eq!(builtin.lookup("iPhone 4").map(|d| d.name.as_str()), Some("iPhone 4"));
    assert_eq!(builtin.lookup("iPhone 4s").map(|d| d.name.as_str()), Some("iPhone 4S"));
}

#[test]
fn apple_prefix_and_case_are_ignored() {
    let catalog = DeviceCatalog::builtin();
    assert_eq!(catalog.lookup("Apple iPhone X").map(|d| d.name.as_str()), Some("iPhone X"));

    let (device, stage) = catalog.lookup_with_stage("apple iphone x").expect("iphone x");
    assert_eq!(device.name, "iPhone X");
    assert_eq!(stage, MatchStage::CaseInsensitive);
}

#[test]
fn generation_notation_styles_resolve_to_the_same_record() {
    let catalog = DeviceCatalog::builtin();
    for input in ["iPad (3rd Gen)", "iPad (3 Gen)", "ipad   (3rd generation)", "Apple iPad (3rd generation)"] {
        let device = catalog.lookup(input).unwrap_or_else(|| panic!("{input} should resolve"));
        assert_eq!(device.name, "iPad (3rd generation)", "input {input}");
        assert_eq!(device.chip, Chip::A5X);
    }
    assert_eq!(catalog.chip_for_model("iPhone SE (2nd Gen)"), Some(Chip::A13));
}

#[test]
fn bounded_prefix_matches_at_space_or_parenthesis() {
    let catalog = DeviceCatalog::builtin();
    let (device, stage) = catalog.lookup_with_stage("iPad Pro 11-inch").expect("prefix match");
    assert_eq!(device.name, "iPad Pro 11-inch (1st generation)");
    assert_eq!(stage, MatchStage::Prefix);

    let plus_only = DeviceCatalog::new(vec![record("iPhone 6s Plus", Chip::A9, true)]).expect("catalog");
    assert_eq!(plus_only.lookup("iPhone 6s").map(|d| d.name.as_str()), Some("iPhone 6s Plus"));
}

#[test]
fn exact_match_beats_longer_siblings() {
    let catalog = DeviceCatalog::builtin();
    assert_eq!(catalog.lookup("iPhone 6s").map(|d| d.name.as_str()), Some("iPhone 6s"));
    assert_eq!(catalog.lookup("iPhone 16").map(|d| d.name.as_str()), Some("iPhone 16"));
}

#[test]
fn unresolved_models_return_sentinels() {
    let catalog = DeviceCatalog::builtin();
    for input in ["Nonexistent Phone X9000", "", "   ", "Galaxy S23", "Lightning cable"] {
        assert!(catalog.lookup(input).is_none(), "{input:?} should not resolve");
    }
    assert_eq!(catalog.chip_for_model("Galaxy S23"), None);
    assert!(!catalog.bootrom_exploit_for_model("Galaxy S23"));
    assert!(catalog.storage_options_for_model("Galaxy S23").is_empty());
}

#[test]
fn accessors_project_the_resolved_record() {
    let catalog = DeviceCatalog::builtin();
    assert_eq!(catalog.chip_for_model("iPhone X"), Some(Chip::A11));
    assert!(catalog.bootrom_exploit_for_model("iPhone X"));
    assert!(!catalog.bootrom_exploit_for_model("iPhone XS"));
    assert_eq!(catalog.storage_options_for_model("iPhone X"), &[64, 256]);
}

#[test]
fn duplicate_display_names_keep_declaration_order() {
    let catalog = DeviceCatalog::builtin();
    let name = "iPod touch (2nd generation)";
    let revisions: Vec<_> = catalog.records().iter().filter(|r| r.name == name).collect();
    assert_eq!(revisions.len(), 2);
    assert_ne!(revisions[0].has_bootrom_exploit, revisions[1].has_bootrom_exploit);

    let first = catalog.lookup(name).expect("ipod touch 2");
    assert!(first.has_bootrom_exploit);
}

#[test]
fn identifiers_resolve_case_insensitively() {
    let catalog = DeviceCatalog::builtin();
    assert_eq!(catalog.find_by_identifier("iphone10,3").map(|d| d.name.as_str()), Some("iPhone X"));
    assert_eq!(catalog.find_by_identifier(" iPad6,3 ").map(|d| d.chip), Some(Chip::A9X));
    assert!(catalog.find_by_identifier("iPhone99,9").is_none());
}

#[test]
fn devices_with_chip_lists_every_revision() {
    let catalog = DeviceCatalog::builtin();
    let names: Vec<_> = catalog.devices_with_chip(Chip::A9X).iter().map(|d| d.name.clone()).collect();
    assert_eq!(names, ["iPad Pro 12.9-inch (1st generation)", "iPad Pro 9.7-inch"]);
}

#[test]
fn catalog_rejects_invalid_records() {
    let blank = DeviceCatalog::new(vec![record("  ", Chip::A11, true)]).unwrap_err();
    assert_eq!(blank, CatalogError::BlankName { index: 0 });

    let mut unsorted = record("Test Phone", Chip::A11, true);
    unsorted.storage_options = vec![256, 64];
    let err = DeviceCatalog::new(vec![unsorted]).unwrap_err();
    assert!(matches!(err, CatalogError::UnsortedStorage { .. }));
    assert!(err.to_string().contains("Test Phone"));
}
