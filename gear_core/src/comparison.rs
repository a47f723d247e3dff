//! Comparison sessions - many slots edited at once, totalled into one diff

use crate::catalog::{ItemDefinition, ReferenceTables};
use crate::config::{self, ConfigError};
use crate::engine::{diff_optional, sum_diffs, StatDiff};
use crate::enhancement::EnhancementConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One equipment slot: the current gear (A) against a candidate (B)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSlot {
    /// Free-form label, usually the slot name
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear_a: Option<String>,
    #[serde(default)]
    pub config_a: EnhancementConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear_b: Option<String>,
    #[serde(default)]
    pub config_b: EnhancementConfig,
}

impl ComparisonSlot {
    fn resolve<'t>(
        &self,
        side: &str,
        gear_id: Option<&str>,
        tables: &'t ReferenceTables,
    ) -> Option<&'t ItemDefinition> {
        let id = gear_id.filter(|id| !id.is_empty())?;
        let item = tables.items.get(id);
        if item.is_none() {
            tracing::debug!(slot = %self.label, side, gear_id = id, "unknown gear id, slot contributes nothing");
        }
        item
    }

    /// Diff of this slot; the zero pair unless both sides resolve
    pub fn evaluate(&self, tables: &ReferenceTables) -> StatDiff {
        let item_a = self.resolve("a", self.gear_a.as_deref(), tables);
        let item_b = self.resolve("b", self.gear_b.as_deref(), tables);
        diff_optional(item_a, &self.config_a, item_b, &self.config_b, tables)
    }
}

/// A set of slot comparisons
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    #[serde(default)]
    pub slots: Vec<ComparisonSlot>,
}

/// Per-slot diffs plus their total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub slots: Vec<(String, StatDiff)>,
    pub total: StatDiff,
}

impl Comparison {
    /// Load a comparison from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        config::load_data(path)
    }

    pub fn evaluate(&self, tables: &ReferenceTables) -> ComparisonReport {
        let slots: Vec<(String, StatDiff)> = self
            .slots
            .iter()
            .map(|slot| (slot.label.clone(), slot.evaluate(tables)))
            .collect();
        let total = sum_diffs(slots.iter().map(|(_, diff)| *diff));
        tracing::debug!(slots = slots.len(), "evaluated comparison");
        ComparisonReport { slots, total }
    }
}
