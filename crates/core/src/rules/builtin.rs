//! Built-in tool table: modern tools, then bootrom tools, then the legacy
//! tail from newest to oldest. Declaration order is the display order.

use super::{ChipPredicate, EligibilityTier, RulePriority, ToolRule};
use crate::model::{Chip, ToolType};
use crate::version::VersionWindow;

use Chip::*;
use ToolType::*;

const ARM64E_PHONES_AND_M1: &[Chip] = &[A12, A12X, A12Z, A13, A14, M1];

fn chips(list: &[Chip]) -> ChipPredicate {
    ChipPredicate::Chips { chips: list.to_vec() }
}

fn between(from: Chip, to: Chip) -> ChipPredicate {
    ChipPredicate::Between { from, to }
}

fn at_or_before(chip: Chip) -> ChipPredicate {
    ChipPredicate::AtOrBefore { chip }
}

fn range(min: &str, max: &str) -> VersionWindow {
    VersionWindow::range(min, max)
}

fn exact(version: &str) -> VersionWindow {
    VersionWindow::exact(version)
}

fn tier(chips: ChipPredicate, windows: Vec<VersionWindow>) -> EligibilityTier {
    EligibilityTier { chips, windows, exclude: Vec::new() }
}

fn rule(name: &str, tool_type: ToolType, tiers: Vec<EligibilityTier>, notes: Option<&str>) -> ToolRule {
    ToolRule {
        name: name.to_string(),
        tool_type,
        tiers,
        priority: RulePriority::Primary,
        notes: notes.map(str::to_string),
    }
}

fn fallback(rule: ToolRule, defers_to: &str) -> ToolRule {
    ToolRule { priority: RulePriority::Fallback { defers_to: defers_to.to_string() }, ..rule }
}

pub(crate) fn rules() -> Vec<ToolRule> {
    let mut all = modern();
    all.extend(bootrom());
    all.extend(legacy());
    all
}

fn modern() -> Vec<ToolRule> {
    vec![
        // The PPL bypass Dopamine relies on stops at 16.5.1 on A15/A16/M2.
        rule(
            "Dopamine",
            SemiUntethered,
            vec![
                tier(chips(ARM64E_PHONES_AND_M1), vec![range("15.0", "16.6.1")]),
                tier(chips(&[A15, A16, M2]), vec![range("15.0", "16.5.1")]),
                tier(between(A8, A11), vec![range("15.0", "16.6.1")]),
            ],
            Some("Rootless. A15, A16 and M2 devices are limited to iOS 16.5.1."),
        ),
        fallback(
            rule(
                "Serotonin",
                SemiUntethered,
                vec![tier(
                    chips(&[A12, A12X, A12Z, A13, A14, A15, A16, M1, M2]),
                    vec![range("16.0", "16.6.1")],
                )],
                Some("Semi-jailbreak without kernel patches; tweak support is limited."),
            ),
            "Dopamine",
        ),
        rule(
            "nathanlr",
            SemiUntethered,
            vec![tier(
                chips(&[A12, A12X, A12Z, A13, A14, A15, A16, A17Pro, M1, M2]),
                vec![range("16.5.1", "16.6.1"), exact("17.0")],
            )],
            Some("Semi-jailbreak; rootless tweak injection only."),
        ),
    ]
}

fn bootrom() -> Vec<ToolRule> {
    vec![
        rule(
            "palera1n",
            SemiTethered,
            vec![tier(ChipPredicate::BootromExploitable, vec![range("15.0", "18.7")])],
            Some("A11 devices must disable the passcode on iOS 16 and later."),
        ),
        rule(
            "checkra1n",
            SemiTethered,
            vec![tier(ChipPredicate::BootromExploitable, vec![range("12.0", "14.8.1")])],
            Some("A11 devices must disable the passcode on iOS 14."),
        ),
    ]
}

fn legacy() -> Vec<ToolRule> {
    let mut unc0ver = rule(
        "unc0ver",
        SemiUntethered,
        vec![
            tier(chips(&[A12, A12X, A12Z, A13, A14]), vec![range("11.0", "14.8")]),
            tier(between(A7, A11), vec![range("11.0", "14.3")]),
        ],
        None,
    );
    for t in &mut unc0ver.tiers {
        t.exclude.push(exact("12.4.1"));
    }

    vec![
        rule(
            "XinaA15",
            SemiUntethered,
            vec![tier(chips(&[A12, A12X, A12Z, A13, A14, A15, M1]), vec![range("15.0", "15.1.1")])],
            Some("Rootless."),
        ),
        rule(
            "Fugu14",
            Untethered,
            vec![tier(chips(ARM64E_PHONES_AND_M1), vec![range("14.3", "14.5.1")])],
            Some("Untether installed from a computer; requires a signed IPA."),
        ),
        rule(
            "Taurine",
            SemiUntethered,
            vec![
                tier(chips(ARM64E_PHONES_AND_M1), vec![range("14.0", "14.8.1")]),
                tier(between(A7, A11), vec![range("14.0", "14.3")]),
            ],
            None,
        ),
        unc0ver,
        rule("Odyssey", SemiUntethered, vec![tier(between(A7, A13), vec![range("13.0", "13.7")])], None),
        rule(
            "Chimera",
            SemiUntethered,
            vec![
                tier(chips(&[A12, A12X]), vec![range("12.0", "12.2"), exact("12.4")]),
                tier(between(A7, A11), vec![range("12.0", "12.5.7")]),
            ],
            None,
        ),
        rule("Electra", SemiUntethered, vec![tier(between(A7, A11), vec![range("11.0", "11.4.1")])], None),
        rule("Meridian", SemiUntethered, vec![tier(between(A7, A10X), vec![range("10.0", "10.3.3")])], None),
        rule("doubleH3lix", SemiUntethered, vec![tier(between(A7, A9X), vec![range("10.0", "10.3.3")])], None),
        rule(
            "h3lix",
            SemiUntethered,
            vec![tier(between(A5, A6X), vec![range("10.0", "10.3.4")])],
            Some("32-bit devices only."),
        ),
        rule(
            "yalu102",
            SemiUntethered,
            vec![
                tier(between(A7, A9X), vec![range("10.0", "10.2")]),
                tier(chips(&[A10]), vec![range("10.1", "10.2")]),
            ],
            None,
        ),
        rule(
            "Phoenix",
            SemiUntethered,
            vec![tier(between(A5, A6X), vec![range("9.3.5", "9.3.6")])],
            Some("32-bit devices only."),
        ),
        rule("Home Depot", SemiUntethered, vec![tier(between(A5, A6X), vec![range("9.1", "9.3.4")])], None),
        rule("Pangu9.3", SemiUntethered, vec![tier(between(A7, A9X), vec![range("9.2", "9.3.3")])], None),
        rule("Pangu9", Untethered, vec![tier(at_or_before(A9X), vec![range("9.0", "9.1")])], None),
        rule("TaiG", Untethered, vec![tier(at_or_before(A8X), vec![range("8.0", "8.4")])], None),
        rule("Pangu8", Untethered, vec![tier(at_or_before(A8X), vec![range("8.0", "8.1")])], None),
        rule("Pangu7", Untethered, vec![tier(at_or_before(A7), vec![range("7.1", "7.1.2")])], None),
        rule("evasi0n7", Untethered, vec![tier(at_or_before(A7), vec![range("7.0", "7.0.6")])], None),
        rule("p0sixspwn", Untethered, vec![tier(at_or_before(A6X), vec![range("6.1.3", "6.1.6")])], None),
        rule("evasi0n", Untethered, vec![tier(at_or_before(A6X), vec![range("6.0", "6.1.2")])], None),
        rule("Absinthe", Untethered, vec![tier(at_or_before(A5X), vec![range("5.0.1", "5.1.1")])], None),
        rule("JailbreakMe 3.0", Untethered, vec![tier(at_or_before(A5), vec![range("4.3", "4.3.3")])], None),
        rule("greenpois0n", Untethered, vec![tier(between(S5L8920, A4), vec![exact("4.2.1")])], None),
        rule(
            "limera1n",
            Tethered,
            vec![tier(between(S5L8920, A4), vec![range("3.2.2", "4.1")])],
            Some("Bootrom exploit; needs a computer on every boot."),
        ),
        rule("JailbreakMe 2.0", Untethered, vec![tier(at_or_before(A4), vec![range("3.1.2", "4.0.1")])], None),
        rule(
            "redsn0w",
            Tethered,
            vec![tier(at_or_before(A4), vec![range("3.0", "6.1.6")])],
            Some("Tethered on A4 devices from iOS 4.3 onward."),
        ),
    ]
}
