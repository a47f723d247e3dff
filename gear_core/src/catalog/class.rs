//! Class profiles - which stats matter to which class

use crate::catalog::FlameCatalog;
use crate::stat_vector::StatKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Job class used to filter gear; `None` shows everything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_class: Option<String>,
    #[serde(default)]
    pub beneficial_stats: Vec<StatKey>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassCatalog {
    #[serde(default)]
    pub classes: Vec<ClassProfile>,
}

impl ClassCatalog {
    pub fn get(&self, id: &str) -> Option<&ClassProfile> {
        self.classes.iter().find(|c| c.id == id)
    }

    /// Stats worth showing for a class; every stat when the class is
    /// unknown or lists none
    pub fn stat_keys_for(&self, class_id: &str) -> Vec<StatKey> {
        match self.get(class_id) {
            Some(profile) if !profile.beneficial_stats.is_empty() => {
                profile.beneficial_stats.clone()
            }
            _ => StatKey::ALL.to_vec(),
        }
    }

    pub fn job_class_for(&self, class_id: &str) -> Option<&str> {
        self.get(class_id).and_then(|c| c.job_class.as_deref())
    }

    /// Flame stats a class would pick. All-stat is always allowed; the
    /// INT+LUK pseudo stat needs both INT and LUK to be beneficial.
    pub fn allowed_flame_stats(&self, class_id: &str, flames: &FlameCatalog) -> Vec<String> {
        let beneficial = self.stat_keys_for(class_id);
        flames
            .flame_types
            .iter()
            .filter(|flame| match flame.stat.as_str() {
                "allStat" => true,
                "intLuk" => {
                    beneficial.contains(&StatKey::Intelligence) && beneficial.contains(&StatKey::Luck)
                }
                other => other
                    .parse::<StatKey>()
                    .map_or(false, |key| beneficial.contains(&key)),
            })
            .map(|flame| flame.stat.clone())
            .collect()
    }
}
