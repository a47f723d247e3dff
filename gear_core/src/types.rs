//! Core enums shared by the catalogs and the engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failed to parse one of the closed enums from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        ParseEnumError {
            kind,
            value: value.to_string(),
        }
    }
}

/// Broad equipment category, which selects the star-force table family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipCategory {
    Weapon,
    /// Armor and accessories share one table family
    #[default]
    #[serde(alias = "accessory")]
    Armor,
}

impl EquipCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipCategory::Weapon => "weapon",
            EquipCategory::Armor => "armor",
        }
    }
}

impl fmt::Display for EquipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weapon" => Ok(EquipCategory::Weapon),
            "armor" | "accessory" => Ok(EquipCategory::Armor),
            _ => Err(ParseEnumError::new("equipment category", s)),
        }
    }
}

/// Equipment slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Hat,
    Overall,
    Top,
    Bottom,
    #[serde(alias = "shoe")]
    Shoes,
    #[serde(alias = "glove")]
    Gloves,
    Cape,
    Shoulder,
    Weapon,
    Ring,
    Pendant,
    Earrings,
    Belt,
    /// Face accessory
    Face,
    /// Eye accessory
    Eye,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Hat,
            EquipmentSlot::Overall,
            EquipmentSlot::Top,
            EquipmentSlot::Bottom,
            EquipmentSlot::Shoes,
            EquipmentSlot::Gloves,
            EquipmentSlot::Cape,
            EquipmentSlot::Shoulder,
            EquipmentSlot::Weapon,
            EquipmentSlot::Ring,
            EquipmentSlot::Pendant,
            EquipmentSlot::Earrings,
            EquipmentSlot::Belt,
            EquipmentSlot::Face,
            EquipmentSlot::Eye,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentSlot::Hat => "hat",
            EquipmentSlot::Overall => "overall",
            EquipmentSlot::Top => "top",
            EquipmentSlot::Bottom => "bottom",
            EquipmentSlot::Shoes => "shoes",
            EquipmentSlot::Gloves => "gloves",
            EquipmentSlot::Cape => "cape",
            EquipmentSlot::Shoulder => "shoulder",
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Ring => "ring",
            EquipmentSlot::Pendant => "pendant",
            EquipmentSlot::Earrings => "earrings",
            EquipmentSlot::Belt => "belt",
            EquipmentSlot::Face => "face",
            EquipmentSlot::Eye => "eye",
        }
    }

    /// Whether star force on this slot grants hit points.
    /// Gloves, shoes, face and eye accessories never do.
    pub fn grants_star_force_hit_points(&self) -> bool {
        !matches!(
            self,
            EquipmentSlot::Gloves | EquipmentSlot::Shoes | EquipmentSlot::Face | EquipmentSlot::Eye
        )
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentSlot {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let normalized = match lower.as_str() {
            "glove" => "gloves",
            "shoe" => "shoes",
            other => other,
        };
        EquipmentSlot::all()
            .iter()
            .copied()
            .find(|slot| slot.as_str() == normalized)
            .ok_or_else(|| ParseEnumError::new("equipment slot", s))
    }
}

/// Which star-force payout shape an item uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarForceVariant {
    #[default]
    Normal,
    /// Lower star cap, pays out all four primary stats equally
    Superior,
}

impl FromStr for StarForceVariant {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(StarForceVariant::Normal),
            "superior" => Ok(StarForceVariant::Superior),
            _ => Err(ParseEnumError::new("star force variant", s)),
        }
    }
}

/// Potential rarity rank. Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PotentialRank {
    Rare,
    Epic,
    #[default]
    Unique,
    Legendary,
}

impl PotentialRank {
    pub fn as_str(&self) -> &'static str {
        match self {
            PotentialRank::Rare => "rare",
            PotentialRank::Epic => "epic",
            PotentialRank::Unique => "unique",
            PotentialRank::Legendary => "legendary",
        }
    }
}

impl fmt::Display for PotentialRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PotentialRank {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rare" => Ok(PotentialRank::Rare),
            "epic" => Ok(PotentialRank::Epic),
            "unique" => Ok(PotentialRank::Unique),
            "legendary" => Ok(PotentialRank::Legendary),
            _ => Err(ParseEnumError::new("potential rank", s)),
        }
    }
}

impl TryFrom<String> for PotentialRank {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PotentialRank> for String {
    fn from(rank: PotentialRank) -> Self {
        rank.as_str().to_string()
    }
}
