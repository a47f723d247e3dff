//! BaseStatsSource - Stats printed on the item itself

use crate::catalog::ItemDefinition;
use crate::source::StatSource;
use crate::stat_vector::StatVector;

/// Base stats of an item definition
pub struct BaseStatsSource<'a> {
    pub item: &'a ItemDefinition,
}

impl<'a> BaseStatsSource<'a> {
    /// Create a new base stats source
    pub fn new(item: &'a ItemDefinition) -> Self {
        BaseStatsSource { item }
    }
}

impl StatSource for BaseStatsSource<'_> {
    fn id(&self) -> &str {
        "base"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats come first
    }

    fn contribution(&self) -> StatVector {
        self.item.base_stats
    }
}
