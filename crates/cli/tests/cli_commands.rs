use predicates::prelude::*;

/// A known modern device on a covered version lists its tools.
#[test]
fn check_lists_matching_tools() {
    assert_cmd::cargo::cargo_bin_cmd!("jailcheck")
        .args(["check", "--model", "iPhone 13", "--ios", "16.6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: JAILBREAKABLE"))
        .stdout(predicate::str::contains("- Serotonin [semi-untethered]"))
        .stdout(predicate::str::contains("- nathanlr [semi-untethered]"));
}

/// An unknown model is still a successful run with an UNKNOWN verdict.
#[test]
fn check_unknown_model_succeeds_with_unknown_status() {
    assert_cmd::cargo::cargo_bin_cmd!("jailcheck")
        .args(["check", "--model", "Nokia 3310", "--ios", "16.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: UNKNOWN"))
        .stdout(predicate::str::contains("was not found in the catalog"));
}

#[test]
fn check_json_wraps_verdict_with_fingerprint() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("jailcheck")
        .args(["check", "--model", "iPhone X", "--ios", "16.0", "--json"])
        .output()
        .expect("run check");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["data"]["status"], "JAILBREAKABLE");
    assert_eq!(value["data"]["has_bootrom_exploit"], true);
    assert_eq!(value["fingerprint"].as_str().map(str::len), Some(64));
    assert!(value["generated_at"].is_string());

    let tools: Vec<&str> = value["data"]["matched_tools"]
        .as_array()
        .expect("tools array")
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert_eq!(tools, ["Dopamine", "palera1n"]);
}

#[test]
fn check_id_resolves_hardware_identifier() {
    assert_cmd::cargo::cargo_bin_cmd!("jailcheck")
        .args(["check-id", "--identifier", "iPhone10,6", "--ios", "14.8.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Device: iPhone X (A11, 2017)"))
        .stdout(predicate::str::contains("- checkra1n [semi-tethered]"));
}

#[test]
fn devices_filters_by_chip() {
    assert_cmd::cargo::cargo_bin_cmd!("jailcheck")
        .args(["devices", "--chip", "a11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iPhone X (chip: A11"))
        .stdout(predicate::str::contains("iPhone 13").not());
}

#[test]
fn device_info_reports_canonical_name_for_loose_input() {
    assert_cmd::cargo::cargo_bin_cmd!("jailcheck")
        .args(["device-info", "--model", "Apple iPhone SE (2nd gen)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Device: iPhone SE (2nd generation)"))
        .stdout(predicate::str::contains("Chip: A13"));
}

#[test]
fn tools_lists_fallback_relationship() {
    assert_cmd::cargo::cargo_bin_cmd!("jailcheck")
        .arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Serotonin (semi-untethered, fallback for Dopamine)"))
        .stdout(predicate::str::contains("- redsn0w (tethered)"));
}

#[test]
fn windows_shows_chip_specific_cutoff() {
    assert_cmd::cargo::cargo_bin_cmd!("jailcheck")
        .args(["windows", "--model", "iPhone 13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Dopamine [semi-untethered]: 15.0-16.5.1"))
        .stdout(predicate::str::contains("(only when Dopamine does not apply)"));
}

#[test]
fn data_info_reports_builtin_sources() {
    assert_cmd::cargo::cargo_bin_cmd!("jailcheck")
        .arg("data-info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Devices:"))
        .stdout(predicate::str::contains("(built-in)"))
        .stdout(predicate::str::contains("Fingerprint:"));
}
