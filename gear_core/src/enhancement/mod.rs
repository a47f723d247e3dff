//! Enhancement configs and the flame / potential / set-bonus aggregators

pub mod flame;
pub mod potential;
pub mod set_bonus;

pub use flame::{FlameStat, MAX_FLAME_LINES};
pub use potential::MAX_POTENTIAL_LINES;

use crate::catalog::{ItemDefinition, ReferenceTables};
use crate::config::InputLimits;
use crate::types::PotentialRank;
use serde::{Deserialize, Deserializer, Serialize};

/// A user-entered flame: stat code plus value taken at face value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlameLine {
    pub stat: String,
    #[serde(default)]
    pub value: f64,
}

impl FlameLine {
    pub fn new(stat: impl Into<String>, value: f64) -> Self {
        FlameLine {
            stat: stat.into(),
            value,
        }
    }
}

/// A chosen potential line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialEntry {
    /// Entries without a line id are skipped
    #[serde(default)]
    pub line_id: String,
    /// Rarity rank as entered, any case; unique when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    /// Explicit value replacing the rank midpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl PotentialEntry {
    pub fn new(line_id: impl Into<String>) -> Self {
        PotentialEntry {
            line_id: line_id.into(),
            rank: None,
            value: None,
        }
    }

    pub fn with_rank(mut self, rank: PotentialRank) -> Self {
        self.rank = Some(rank.to_string());
        self
    }

    /// Rank this entry is valued at. Unique when unset or blank, `None`
    /// when the text names no known rank.
    pub fn potential_rank(&self) -> Option<PotentialRank> {
        match self.rank.as_deref().map(str::trim) {
            None | Some("") => Some(PotentialRank::default()),
            Some(text) => text.parse().ok(),
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

/// Per-configuration enhancement state of one item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementConfig {
    /// Star-force level; clamped to the item's cap when computed
    #[serde(rename = "stars", default, deserialize_with = "lenient_count")]
    pub star_count: u32,
    #[serde(default)]
    pub flame_lines: Vec<FlameLine>,
    #[serde(default)]
    pub pot_lines: Vec<PotentialEntry>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub set_piece_count: u32,
}

/// Read a count as any number: negatives and non-finite values become 0,
/// fractions are truncated
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = f64::deserialize(deserializer)?;
    if raw.is_finite() && raw > 0.0 {
        Ok(raw.min(u32::MAX as f64) as u32)
    } else {
        Ok(0)
    }
}

impl EnhancementConfig {
    pub fn with_stars(mut self, stars: u32) -> Self {
        self.star_count = stars;
        self
    }

    pub fn with_flame(mut self, line: FlameLine) -> Self {
        self.flame_lines.push(line);
        self
    }

    pub fn with_potential(mut self, entry: PotentialEntry) -> Self {
        self.pot_lines.push(entry);
        self
    }

    pub fn with_set_pieces(mut self, pieces: u32) -> Self {
        self.set_piece_count = pieces;
        self
    }

    /// Copy clamped to what `item` and `limits` allow.
    ///
    /// Stars and set pieces are clamped to the item's caps, flame values to
    /// the flat or percent range of their stat, explicit potential values
    /// to the potential range. Non-finite flame values are dropped, and line
    /// lists are cut to four flames and three potentials.
    pub fn sanitized(
        &self,
        item: &ItemDefinition,
        tables: &ReferenceTables,
        limits: &InputLimits,
    ) -> EnhancementConfig {
        let star_cap = tables.max_stars(item).min(limits.stars.max.max(0.0) as u32);
        let piece_cap = tables
            .max_set_pieces(item)
            .min(limits.set_pieces.max.max(0.0) as u32);

        let flame_lines = self
            .flame_lines
            .iter()
            .take(MAX_FLAME_LINES)
            .filter(|line| line.value.is_finite())
            .map(|line| {
                let range = if tables.flames.is_percent(&line.stat) {
                    limits.flame_percent
                } else {
                    limits.flame_flat
                };
                FlameLine::new(line.stat.clone(), range.clamp(line.value))
            })
            .collect();

        let pot_lines = self
            .pot_lines
            .iter()
            .take(MAX_POTENTIAL_LINES)
            .map(|entry| PotentialEntry {
                value: entry
                    .value
                    .filter(|v| v.is_finite())
                    .map(|v| limits.potential_percent.clamp(v)),
                ..entry.clone()
            })
            .collect();

        EnhancementConfig {
            star_count: self.star_count.min(star_cap),
            flame_lines,
            pot_lines,
            set_piece_count: self.set_piece_count.min(piece_cap),
        }
    }
}
