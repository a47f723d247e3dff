//! Diff algebra - comparing two configurations and totalling many slots

use super::compose::{compose_stats, potential_stats};
use crate::catalog::{ItemDefinition, ReferenceTables};
use crate::enhancement::EnhancementConfig;
use crate::stat_vector::StatVector;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Change from configuration A to configuration B.
///
/// Headline stats and potential never mix: potential is percentage-based,
/// so it travels in its own vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatDiff {
    pub stat_diff: StatVector,
    pub potential_diff: StatVector,
}

impl StatDiff {
    pub fn zero() -> Self {
        StatDiff::default()
    }

    pub fn is_zero(&self) -> bool {
        self.stat_diff.is_zero() && self.potential_diff.is_zero()
    }
}

impl Add for StatDiff {
    type Output = StatDiff;

    fn add(self, rhs: StatDiff) -> StatDiff {
        StatDiff {
            stat_diff: self.stat_diff + rhs.stat_diff,
            potential_diff: self.potential_diff + rhs.potential_diff,
        }
    }
}

impl Sum for StatDiff {
    fn sum<I: Iterator<Item = StatDiff>>(iter: I) -> StatDiff {
        iter.fold(StatDiff::zero(), Add::add)
    }
}

impl<'a> Sum<&'a StatDiff> for StatDiff {
    fn sum<I: Iterator<Item = &'a StatDiff>>(iter: I) -> StatDiff {
        iter.copied().sum()
    }
}

/// B minus A, headline and potential separately
pub fn diff(
    item_a: &ItemDefinition,
    config_a: &EnhancementConfig,
    item_b: &ItemDefinition,
    config_b: &EnhancementConfig,
    tables: &ReferenceTables,
) -> StatDiff {
    StatDiff {
        stat_diff: compose_stats(item_b, config_b, tables) - compose_stats(item_a, config_a, tables),
        potential_diff: potential_stats(config_b, tables) - potential_stats(config_a, tables),
    }
}

/// Like [`diff`], but the zero pair when either side has no item
pub fn diff_optional(
    item_a: Option<&ItemDefinition>,
    config_a: &EnhancementConfig,
    item_b: Option<&ItemDefinition>,
    config_b: &EnhancementConfig,
    tables: &ReferenceTables,
) -> StatDiff {
    match (item_a, item_b) {
        (Some(a), Some(b)) => diff(a, config_a, b, config_b, tables),
        _ => StatDiff::zero(),
    }
}

/// Key-wise total of many diffs; the zero pair for none
pub fn sum_diffs<I>(diffs: I) -> StatDiff
where
    I: IntoIterator<Item = StatDiff>,
{
    diffs.into_iter().sum()
}
