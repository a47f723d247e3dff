//! Potential line catalog

use crate::types::{EquipCategory, PotentialRank};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One potential line and its value range per rarity rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotentialLineDef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Stat code the line adds to
    pub stat: String,
    #[serde(default)]
    pub percent: bool,
    /// `[low, high]` per rank
    #[serde(default)]
    pub ranks: HashMap<PotentialRank, [f64; 2]>,
}

impl PotentialLineDef {
    pub fn range(&self, rank: PotentialRank) -> Option<(f64, f64)> {
        self.ranks.get(&rank).map(|[low, high]| (*low, *high))
    }

    /// Arithmetic midpoint of the rank's range
    pub fn midpoint(&self, rank: PotentialRank) -> Option<f64> {
        self.range(rank).map(|(low, high)| (low + high) / 2.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PotentialLineGroup {
    #[serde(default)]
    pub lines: Vec<PotentialLineDef>,
}

/// Weapon and armor potential lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PotentialCatalog {
    #[serde(default)]
    pub weapon: PotentialLineGroup,
    #[serde(default)]
    pub armor: PotentialLineGroup,
}

impl PotentialCatalog {
    /// Find a line by id, weapon lines first
    pub fn find(&self, id: &str) -> Option<&PotentialLineDef> {
        self.weapon
            .lines
            .iter()
            .chain(self.armor.lines.iter())
            .find(|line| line.id == id)
    }

    pub fn lines_for(&self, category: EquipCategory) -> &[PotentialLineDef] {
        match category {
            EquipCategory::Weapon => &self.weapon.lines,
            EquipCategory::Armor => &self.armor.lines,
        }
    }

    pub fn len(&self) -> usize {
        self.weapon.lines.len() + self.armor.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
