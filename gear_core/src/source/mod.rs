//! StatSource - Trait and implementations for the parts of an item's stats

mod base_stats;
mod enhancement;
mod starforce;

pub use base_stats::BaseStatsSource;
pub use enhancement::{FlameSource, PotentialSource, SetBonusSource};
pub use starforce::StarForceSource;

use crate::stat_vector::StatVector;

/// Trait for anything that contributes stats to an item configuration
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Ordering for breakdowns (lower = listed first).
    /// Default priority is 0.
    /// Suggested priorities:
    /// - Base stats: -100
    /// - Star force: 0
    /// - Flames: 50
    /// - Set bonus: 100
    /// - Potential: 200
    fn priority(&self) -> i32 {
        0
    }

    /// This source's stat contribution
    fn contribution(&self) -> StatVector;
}

/// Sum of every source's contribution
pub fn total(sources: &[Box<dyn StatSource + '_>]) -> StatVector {
    sources.iter().map(|source| source.contribution()).sum()
}
