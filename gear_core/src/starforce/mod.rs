//! Star force - Level-bracketed cumulative upgrade tables

mod bracket;
mod defaults;

pub use bracket::LevelBracket;

use crate::stat_vector::{finite_or_zero, StatKey, StatVector};
use crate::types::{EquipCategory, EquipmentSlot, StarForceVariant};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_NORMAL_MAX_STARS: u32 = 30;
pub const DEFAULT_SUPERIOR_MAX_STARS: u32 = 15;

fn default_normal_max_stars() -> u32 {
    DEFAULT_NORMAL_MAX_STARS
}
fn default_superior_max_stars() -> u32 {
    DEFAULT_SUPERIOR_MAX_STARS
}

/// Hit points granted to armor by star force: a capped linear ramp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitPointRamp {
    /// Hit points at the first star
    #[serde(default = "default_hp_base")]
    pub base: f64,
    /// Additional hit points for every star after the first
    #[serde(default = "default_hp_per_star")]
    pub per_star: f64,
    /// Upper bound on the total
    #[serde(default = "default_hp_cap")]
    pub cap: f64,
}

impl Default for HitPointRamp {
    fn default() -> Self {
        HitPointRamp {
            base: 5.0,
            per_star: 25.0,
            cap: 255.0,
        }
    }
}

fn default_hp_base() -> f64 {
    5.0
}
fn default_hp_per_star() -> f64 {
    25.0
}
fn default_hp_cap() -> f64 {
    255.0
}

impl HitPointRamp {
    /// Hit points at `stars`; zero stars grant nothing
    pub fn at(&self, stars: u32) -> f64 {
        if stars == 0 {
            return 0.0;
        }
        (self.base + (stars - 1) as f64 * self.per_star).min(self.cap)
    }
}

/// Cumulative tables for one equipment category, one row per bracket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTables {
    /// Value granted to each of the four primary stats
    #[serde(default)]
    pub class_stats: BTreeMap<LevelBracket, Vec<f64>>,
    /// Value granted to weapon and/or magic attack
    #[serde(default)]
    pub attack: BTreeMap<LevelBracket, Vec<f64>>,
}

impl CategoryTables {
    fn class_stat(&self, bracket: LevelBracket, stars: u32) -> f64 {
        cumulative(&self.class_stats, bracket, stars)
    }

    fn attack(&self, bracket: LevelBracket, stars: u32) -> f64 {
        cumulative(&self.attack, bracket, stars)
    }
}

/// Row for `bracket`, falling back to the 160-199 row, then to nothing.
/// Indices past the end of a row are worth zero.
fn cumulative(rows: &BTreeMap<LevelBracket, Vec<f64>>, bracket: LevelBracket, stars: u32) -> f64 {
    let row = rows.get(&bracket).or_else(|| {
        tracing::debug!(%bracket, "no star force row for bracket, using fallback");
        rows.get(&LevelBracket::FALLBACK)
    });
    row.and_then(|values| values.get(stars as usize))
        .copied()
        .map(finite_or_zero)
        .unwrap_or(0.0)
}

/// Everything a star-force lookup needs to know about an item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarForceQuery {
    pub level: u32,
    pub star_count: u32,
    pub category: EquipCategory,
    /// Base weapon attack is above zero
    pub has_weapon_attack: bool,
    /// Base magic attack is above zero
    pub has_magic_attack: bool,
    pub slot: EquipmentSlot,
    pub variant: StarForceVariant,
    /// Item-specific star cap replacing the variant's default
    pub max_stars_override: Option<u32>,
}

/// The complete star-force reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarForceTables {
    #[serde(default = "default_normal_max_stars")]
    pub normal_max_stars: u32,
    #[serde(default = "default_superior_max_stars")]
    pub superior_max_stars: u32,
    #[serde(default)]
    pub hit_points: HitPointRamp,
    #[serde(default)]
    pub weapon: CategoryTables,
    #[serde(default)]
    pub armor: CategoryTables,
    /// Cumulative all-primary-stat value per star for superior items
    #[serde(default)]
    pub superior: Vec<f64>,
}

impl StarForceTables {
    /// Star cap for a variant, unless the item overrides it
    pub fn max_stars(&self, variant: StarForceVariant, override_max: Option<u32>) -> u32 {
        override_max.unwrap_or(match variant {
            StarForceVariant::Normal => self.normal_max_stars,
            StarForceVariant::Superior => self.superior_max_stars,
        })
    }

    fn category(&self, category: EquipCategory) -> &CategoryTables {
        match category {
            EquipCategory::Weapon => &self.weapon,
            EquipCategory::Armor => &self.armor,
        }
    }

    /// Stat contribution of `query.star_count` stars.
    ///
    /// The star count is clamped to the item's cap first. Never fails:
    /// missing rows and out-of-range indices contribute zero.
    pub fn lookup(&self, query: &StarForceQuery) -> StatVector {
        let stars = query
            .star_count
            .min(self.max_stars(query.variant, query.max_stars_override));

        if query.variant == StarForceVariant::Superior {
            let all_stats = self
                .superior
                .get(stars as usize)
                .copied()
                .map(finite_or_zero)
                .unwrap_or(0.0);
            return StatVector::zero().with_primary_stats(all_stats);
        }

        let bracket = LevelBracket::for_level(query.level);
        let tables = self.category(query.category);
        let class_stat = tables.class_stat(bracket, stars);
        let attack = tables.attack(bracket, stars);
        let stats = StatVector::zero().with_primary_stats(class_stat);

        match query.category {
            EquipCategory::Weapon => {
                let mut stats = stats;
                if query.has_weapon_attack {
                    stats = stats.with(StatKey::WeaponAttack, attack);
                }
                if query.has_magic_attack {
                    stats = stats.with(StatKey::MagicAttack, attack);
                }
                stats
            }
            EquipCategory::Armor => {
                let stats = stats
                    .with(StatKey::WeaponAttack, attack)
                    .with(StatKey::MagicAttack, attack);
                if query.slot.grants_star_force_hit_points() {
                    stats.with(StatKey::HitPoints, self.hit_points.at(stars))
                } else {
                    stats
                }
            }
        }
    }

    /// Rows too short to cover every star up to the normal cap.
    /// Lookups past the end still work (they read as zero); this only
    /// exists so loaders can warn about suspicious data.
    pub fn short_rows(&self) -> Vec<String> {
        let needed = self.normal_max_stars as usize + 1;
        let mut short = Vec::new();
        for (name, tables) in [("weapon", &self.weapon), ("armor", &self.armor)] {
            for (kind, rows) in [("class_stats", &tables.class_stats), ("attack", &tables.attack)] {
                for (bracket, values) in rows {
                    if values.len() < needed {
                        short.push(format!("{name}.{kind}[{bracket}] has {} of {needed}", values.len()));
                    }
                }
            }
        }
        if self.superior.len() < self.superior_max_stars as usize + 1 {
            short.push(format!("superior has {} of {}", self.superior.len(), self.superior_max_stars + 1));
        }
        short
    }
}
