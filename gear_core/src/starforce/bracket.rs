//! Character-level brackets that key the star-force tables

use crate::types::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Non-overlapping level ranges, each with its own table row.
/// Written as `"160-199"` in data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LevelBracket {
    Lv128To137,
    Lv138To149,
    Lv150To159,
    Lv160To199,
    Lv200To249,
}

impl LevelBracket {
    /// Brackets in ascending order of lower bound
    pub const ALL: [LevelBracket; 5] = [
        LevelBracket::Lv128To137,
        LevelBracket::Lv138To149,
        LevelBracket::Lv150To159,
        LevelBracket::Lv160To199,
        LevelBracket::Lv200To249,
    ];

    /// Bracket used when a category has no row for the requested one
    pub const FALLBACK: LevelBracket = LevelBracket::Lv160To199;

    pub fn lower_bound(&self) -> u32 {
        match self {
            LevelBracket::Lv128To137 => 128,
            LevelBracket::Lv138To149 => 138,
            LevelBracket::Lv150To159 => 150,
            LevelBracket::Lv160To199 => 160,
            LevelBracket::Lv200To249 => 200,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LevelBracket::Lv128To137 => "128-137",
            LevelBracket::Lv138To149 => "138-149",
            LevelBracket::Lv150To159 => "150-159",
            LevelBracket::Lv160To199 => "160-199",
            LevelBracket::Lv200To249 => "200-249",
        }
    }

    /// Highest bracket whose lower bound is at or below `level`.
    /// Levels below every bound land in the lowest bracket.
    pub fn for_level(level: u32) -> LevelBracket {
        LevelBracket::ALL
            .iter()
            .rev()
            .copied()
            .find(|bracket| bracket.lower_bound() <= level)
            .unwrap_or(LevelBracket::Lv128To137)
    }
}

impl fmt::Display for LevelBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LevelBracket {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LevelBracket::ALL
            .iter()
            .copied()
            .find(|bracket| bracket.label() == s.trim())
            .ok_or_else(|| ParseEnumError {
                kind: "level bracket",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for LevelBracket {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LevelBracket> for String {
    fn from(bracket: LevelBracket) -> Self {
        bracket.label().to_string()
    }
}
