//! StatKey - The closed set of stats an item configuration can produce

use crate::types::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One slot of a [`StatVector`](super::StatVector).
///
/// Wire names are the short codes used by the reference data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatKey {
    #[serde(rename = "str")]
    Strength,
    #[serde(rename = "dex")]
    Dexterity,
    #[serde(rename = "int")]
    Intelligence,
    #[serde(rename = "luk")]
    Luck,
    #[serde(rename = "watk")]
    WeaponAttack,
    #[serde(rename = "matt")]
    MagicAttack,
    #[serde(rename = "def")]
    Defense,
    #[serde(rename = "hp")]
    HitPoints,
    #[serde(rename = "bossDmg")]
    BossDamage,
    #[serde(rename = "ied")]
    IgnoreDefense,
    #[serde(rename = "dmg")]
    Damage,
    /// All-stat percent bucket, kept apart from the primary stats
    #[serde(rename = "allStat")]
    AllStat,
    #[serde(rename = "hpPercent")]
    HpPercent,
    #[serde(rename = "mpPercent")]
    MpPercent,
}

impl StatKey {
    pub const COUNT: usize = 14;

    /// Every key, in canonical display order
    pub const ALL: [StatKey; StatKey::COUNT] = [
        StatKey::Strength,
        StatKey::Dexterity,
        StatKey::Intelligence,
        StatKey::Luck,
        StatKey::WeaponAttack,
        StatKey::MagicAttack,
        StatKey::Defense,
        StatKey::HitPoints,
        StatKey::BossDamage,
        StatKey::IgnoreDefense,
        StatKey::Damage,
        StatKey::AllStat,
        StatKey::HpPercent,
        StatKey::MpPercent,
    ];

    /// The four primary stats star force pays out equally
    pub const PRIMARY: [StatKey; 4] = [
        StatKey::Strength,
        StatKey::Dexterity,
        StatKey::Intelligence,
        StatKey::Luck,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Short code used in data files
    pub fn code(&self) -> &'static str {
        match self {
            StatKey::Strength => "str",
            StatKey::Dexterity => "dex",
            StatKey::Intelligence => "int",
            StatKey::Luck => "luk",
            StatKey::WeaponAttack => "watk",
            StatKey::MagicAttack => "matt",
            StatKey::Defense => "def",
            StatKey::HitPoints => "hp",
            StatKey::BossDamage => "bossDmg",
            StatKey::IgnoreDefense => "ied",
            StatKey::Damage => "dmg",
            StatKey::AllStat => "allStat",
            StatKey::HpPercent => "hpPercent",
            StatKey::MpPercent => "mpPercent",
        }
    }

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            StatKey::Strength => "STR",
            StatKey::Dexterity => "DEX",
            StatKey::Intelligence => "INT",
            StatKey::Luck => "LUK",
            StatKey::WeaponAttack => "WATK",
            StatKey::MagicAttack => "MATT",
            StatKey::Defense => "DEF",
            StatKey::HitPoints => "HP",
            StatKey::BossDamage => "Boss%",
            StatKey::IgnoreDefense => "IED%",
            StatKey::Damage => "Dmg%",
            StatKey::AllStat => "All%",
            StatKey::HpPercent => "HP%",
            StatKey::MpPercent => "MP%",
        }
    }

    /// Whether values of this stat are percentage points
    pub fn is_percent(&self) -> bool {
        matches!(
            self,
            StatKey::BossDamage
                | StatKey::IgnoreDefense
                | StatKey::Damage
                | StatKey::AllStat
                | StatKey::HpPercent
                | StatKey::MpPercent
        )
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StatKey {
    type Err = ParseEnumError;

    /// Parses the short data-file code (`str`, `bossDmg`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKey::ALL
            .iter()
            .copied()
            .find(|key| key.code() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "stat key",
                value: s.to_string(),
            })
    }
}
