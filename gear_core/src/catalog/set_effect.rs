//! Set bonus catalog

use crate::stat_vector::StatVector;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_MAX_SET_PIECES: u32 = 7;

/// One equipment set and its cumulative bonus per piece count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEffect {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pieces: Option<u32>,
    /// Cumulative bonus keyed by piece count (`"2"`, `"3"`, ...).
    /// Thresholds are sparse; counts without an entry grant nothing.
    #[serde(default)]
    pub cumulative: BTreeMap<String, StatVector>,
}

impl SetEffect {
    /// Piece cap, 7 when the data does not say or says 0
    pub fn effective_max_pieces(&self) -> u32 {
        self.max_pieces.filter(|n| *n > 0).unwrap_or(DEFAULT_MAX_SET_PIECES)
    }

    /// Cumulative bonus at exactly `pieces`
    pub fn at(&self, pieces: u32) -> Option<&StatVector> {
        self.cumulative.get(&pieces.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetCatalog {
    #[serde(default)]
    pub sets: HashMap<String, SetEffect>,
}

impl SetCatalog {
    pub fn get(&self, set_id: &str) -> Option<&SetEffect> {
        self.sets.get(set_id)
    }

    /// Piece cap for a set; 0 when there is no such set
    pub fn max_pieces(&self, set_id: Option<&str>) -> u32 {
        set_id
            .and_then(|id| self.get(id))
            .map_or(0, SetEffect::effective_max_pieces)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
