//! Flame type catalog

use crate::types::EquipCategory;
use serde::{Deserialize, Serialize};

/// A stat a flame line can roll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlameType {
    pub id: String,
    /// Stat code, or a pseudo stat such as `intLuk`
    pub stat: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub percent: bool,
    /// Categories this flame can appear on
    #[serde(default)]
    pub equip_types: Vec<EquipCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlameCatalog {
    #[serde(default)]
    pub flame_types: Vec<FlameType>,
}

impl FlameCatalog {
    pub fn get(&self, id: &str) -> Option<&FlameType> {
        self.flame_types.iter().find(|f| f.id == id)
    }

    /// Whether flames on `stat` are entered as percentages.
    /// Unknown stats count as flat.
    pub fn is_percent(&self, stat: &str) -> bool {
        self.flame_types
            .iter()
            .find(|f| f.stat == stat)
            .map_or(false, |f| f.percent)
    }

    pub fn for_category(&self, category: EquipCategory) -> impl Iterator<Item = &FlameType> {
        self.flame_types
            .iter()
            .filter(move |f| f.equip_types.contains(&category))
    }
}
