//! Potential aggregation - up to three catalog lines valued by rank

use super::PotentialEntry;
use crate::catalog::PotentialCatalog;
use crate::stat_vector::{StatKey, StatVector};

/// Potential systems roll at most this many lines
pub const MAX_POTENTIAL_LINES: usize = 3;

/// Value a single entry contributes, with the stat it lands on.
///
/// `None` when the line id is unknown or its stat is not a stat key.
/// A rank the line has no range for, or text that names no rank, is worth
/// zero, explicit value or not.
pub fn resolve(entry: &PotentialEntry, catalog: &PotentialCatalog) -> Option<(StatKey, f64)> {
    if entry.line_id.is_empty() {
        return None;
    }
    let Some(def) = catalog.find(&entry.line_id) else {
        tracing::debug!(line_id = %entry.line_id, "skipping unknown potential line");
        return None;
    };
    let Ok(key) = def.stat.parse::<StatKey>() else {
        tracing::debug!(line_id = %def.id, stat = %def.stat, "potential line targets unknown stat");
        return None;
    };

    let Some(rank) = entry.potential_rank() else {
        tracing::debug!(line_id = %def.id, rank = ?entry.rank, "unknown potential rank, line is worth 0");
        return Some((key, 0.0));
    };
    let value = match def.midpoint(rank) {
        Some(midpoint) => entry.value.filter(|v| v.is_finite()).unwrap_or(midpoint),
        None => 0.0,
    };
    Some((key, value))
}

/// Sum the first three potential entries
pub fn aggregate(entries: &[PotentialEntry], catalog: &PotentialCatalog) -> StatVector {
    StatVector::from_pairs(
        entries
            .iter()
            .take(MAX_POTENTIAL_LINES)
            .filter_map(|entry| resolve(entry, catalog)),
    )
}
