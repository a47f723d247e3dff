//! Set bonus aggregation

use crate::catalog::SetCatalog;
use crate::stat_vector::StatVector;

/// Cumulative set bonus at `piece_count` pieces.
///
/// Zero when there is no set, fewer than two pieces, an unknown set, or no
/// table entry at the clamped count (thresholds are sparse, never
/// interpolated).
pub fn aggregate(set_id: Option<&str>, piece_count: u32, catalog: &SetCatalog) -> StatVector {
    let Some(set_id) = set_id.filter(|id| !id.is_empty()) else {
        return StatVector::zero();
    };
    if piece_count < 2 {
        return StatVector::zero();
    }
    let Some(set) = catalog.get(set_id) else {
        tracing::debug!(set_id, "unknown set, no bonus");
        return StatVector::zero();
    };

    let pieces = piece_count.min(set.effective_max_pieces());
    set.at(pieces).copied().unwrap_or_default()
}

/// Bonus change when going from `count_a` to `count_b` pieces
pub fn delta(set_id: Option<&str>, count_a: u32, count_b: u32, catalog: &SetCatalog) -> StatVector {
    aggregate(set_id, count_b, catalog) - aggregate(set_id, count_a, catalog)
}
