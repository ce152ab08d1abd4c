use jailcheck_core::{resolve, version, JailbreakStatus};

#[test]
fn version_is_non_empty() {
    let v = version();
    assert!(!v.is_empty());
}

#[test]
fn shared_resolver_answers_without_setup() {
    let verdict = resolve("iPhone X", "14.3");
    assert_eq!(verdict.status, JailbreakStatus::Jailbreakable);
}
