use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// System-on-chip families, declared in lineage order (oldest first).
///
/// The derived `Ord` follows declaration order, which is what "at or before
/// generation X" rule predicates compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Chip {
    S5L8900,
    S5L8720,
    S5L8920,
    S5L8922,
    A4,
    A5,
    A5X,
    A6,
    A6X,
    A7,
    A8,
    A8X,
    A9,
    A9X,
    A10,
    A10X,
    A11,
    A12,
    A12X,
    A12Z,
    A13,
    A14,
    A15,
    A16,
    #[serde(rename = "A17 Pro", alias = "A17Pro")]
    A17Pro,
    A18,
    #[serde(rename = "A18 Pro", alias = "A18Pro")]
    A18Pro,
    A19,
    #[serde(rename = "A19 Pro", alias = "A19Pro")]
    A19Pro,
    M1,
    M2,
    M3,
    M4,
}

impl Chip {
    /// Every chip, oldest first.
    pub const LINEAGE: [Chip; 33] = [
        Chip::S5L8900,
        Chip::S5L8720,
        Chip::S5L8920,
        Chip::S5L8922,
        Chip::A4,
        Chip::A5,
        Chip::A5X,
        Chip::A6,
        Chip::A6X,
        Chip::A7,
        Chip::A8,
        Chip::A8X,
        Chip::A9,
        Chip::A9X,
        Chip::A10,
        Chip::A10X,
        Chip::A11,
        Chip::A12,
        Chip::A12X,
        Chip::A12Z,
        Chip::A13,
        Chip::A14,
        Chip::A15,
        Chip::A16,
        Chip::A17Pro,
        Chip::A18,
        Chip::A18Pro,
        Chip::A19,
        Chip::A19Pro,
        Chip::M1,
        Chip::M2,
        Chip::M3,
        Chip::M4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S5L8900 => "S5L8900",
            Self::S5L8720 => "S5L8720",
            Self::S5L8920 => "S5L8920",
            Self::S5L8922 => "S5L8922",
            Self::A4 => "A4",
            Self::A5 => "A5",
            Self::A5X => "A5X",
            Self::A6 => "A6",
            Self::A6X => "A6X",
            Self::A7 => "A7",
            Self::A8 => "A8",
            Self::A8X => "A8X",
            Self::A9 => "A9",
            Self::A9X => "A9X",
            Self::A10 => "A10",
            Self::A10X => "A10X",
            Self::A11 => "A11",
            Self::A12 => "A12",
            Self::A12X => "A12X",
            Self::A12Z => "A12Z",
            Self::A13 => "A13",
            Self::A14 => "A14",
            Self::A15 => "A15",
            Self::A16 => "A16",
            Self::A17Pro => "A17 Pro",
            Self::A18 => "A18",
            Self::A18Pro => "A18 Pro",
            Self::A19 => "A19",
            Self::A19Pro => "A19 Pro",
            Self::M1 => "M1",
            Self::M2 => "M2",
            Self::M3 => "M3",
            Self::M4 => "M4",
        }
    }

    /// Position in [`Chip::LINEAGE`].
    pub fn rank(&self) -> usize {
        *self as usize
    }

    /// A-series generation number (`A9X` -> 9). `None` for legacy ARM
    /// codes and M-series chips.
    pub fn a_series_generation(&self) -> Option<u8> {
        let name = self.as_str().strip_prefix('A')?;
        let digits: String = name.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }

    /// Chips with a permanent bootrom flaw usable by checkm8-class tools
    /// (A5 through A11).
    pub fn is_bootrom_exploitable(&self) -> bool {
        matches!(self.a_series_generation(), Some(5..=11))
    }

    pub fn is_at_or_before(&self, other: Chip) -> bool {
        *self <= other
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chip {
    type Err = String;

    /// Case-insensitive; spaces are ignored so `"a17pro"` and `"A17 Pro"` agree.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        Chip::LINEAGE
            .iter()
            .copied()
            .find(|chip| chip.as_str().replace(' ', "").eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown chip: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lineage_matches_declaration_order() {
        for (i, chip) in Chip::LINEAGE.iter().enumerate() {
            assert_eq!(chip.rank(), i);
        }
    }
}
