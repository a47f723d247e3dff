//! Item definitions - static description of each piece of equipment

use crate::starforce::StarForceQuery;
use crate::stat_vector::{StatKey, StatVector};
use crate::types::{EquipCategory, EquipmentSlot, StarForceVariant};
use serde::{Deserialize, Serialize};

fn default_item_level() -> u32 {
    160
}

/// One piece of equipment as described by the gear data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Level requirement; selects the star-force bracket
    #[serde(default = "default_item_level")]
    pub level: u32,
    #[serde(rename = "equipType", default)]
    pub category: EquipCategory,
    pub slot: EquipmentSlot,
    #[serde(default)]
    pub base_stats: StatVector,
    /// Set this item belongs to, if any
    #[serde(rename = "set", default, skip_serializing_if = "Option::is_none")]
    pub set_id: Option<String>,
    /// Whether the item accepts flame bonuses
    #[serde(default)]
    pub flameable: bool,
    #[serde(rename = "starforceType", default)]
    pub star_force_variant: StarForceVariant,
    /// Item-specific star cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stars: Option<u32>,
    /// Job class restriction (`"all"` for everyone)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_class: Option<String>,
}

impl ItemDefinition {
    /// Set id, treating an empty string as no set
    pub fn set(&self) -> Option<&str> {
        self.set_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Star-force lookup parameters for this item at `star_count`
    pub fn star_force_query(&self, star_count: u32) -> StarForceQuery {
        StarForceQuery {
            level: self.level,
            star_count,
            category: self.category,
            has_weapon_attack: self.base_stats.get(StatKey::WeaponAttack) > 0.0,
            has_magic_attack: self.base_stats.get(StatKey::MagicAttack) > 0.0,
            slot: self.slot,
            variant: self.star_force_variant,
            max_stars_override: self.max_stars,
        }
    }

    /// Whether the item is usable by `job_class`
    pub fn usable_by(&self, job_class: &str) -> bool {
        match self.job_class.as_deref() {
            None | Some("all") => true,
            Some(own) => own == job_class,
        }
    }
}

/// All known items, in data-file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemCatalog {
    #[serde(rename = "gear", default)]
    items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(items: Vec<ItemDefinition>) -> Self {
        ItemCatalog { items }
    }

    /// Get an item by ID
    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items that fit `slot`
    pub fn for_slot(&self, slot: EquipmentSlot) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter().filter(move |item| item.slot == slot)
    }

    /// Items that fit `slot` and, when given, are usable by `job_class`
    pub fn for_slot_and_class<'a>(
        &'a self,
        slot: EquipmentSlot,
        job_class: Option<&'a str>,
    ) -> impl Iterator<Item = &'a ItemDefinition> {
        self.for_slot(slot)
            .filter(move |item| job_class.map_or(true, |job| item.usable_by(job)))
    }
}
