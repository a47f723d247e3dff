//! Enhancement sources - flames, set bonus, and potential

use crate::catalog::{PotentialCatalog, SetCatalog};
use crate::enhancement::{flame, potential, set_bonus, FlameLine, PotentialEntry};
use crate::source::StatSource;
use crate::stat_vector::StatVector;

/// Flame lines rolled on an item
pub struct FlameSource<'a> {
    pub lines: &'a [FlameLine],
}

impl<'a> FlameSource<'a> {
    pub fn new(lines: &'a [FlameLine]) -> Self {
        FlameSource { lines }
    }
}

impl StatSource for FlameSource<'_> {
    fn id(&self) -> &str {
        "flame"
    }

    fn priority(&self) -> i32 {
        50
    }

    fn contribution(&self) -> StatVector {
        flame::aggregate(self.lines)
    }
}

/// Cumulative set bonus at a given piece count
pub struct SetBonusSource<'a> {
    pub set_id: Option<&'a str>,
    pub piece_count: u32,
    pub catalog: &'a SetCatalog,
}

impl<'a> SetBonusSource<'a> {
    pub fn new(set_id: Option<&'a str>, piece_count: u32, catalog: &'a SetCatalog) -> Self {
        SetBonusSource {
            set_id,
            piece_count,
            catalog,
        }
    }
}

impl StatSource for SetBonusSource<'_> {
    fn id(&self) -> &str {
        "set_bonus"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn contribution(&self) -> StatVector {
        set_bonus::aggregate(self.set_id, self.piece_count, self.catalog)
    }
}

/// Potential lines, kept apart from the headline stats
pub struct PotentialSource<'a> {
    pub entries: &'a [PotentialEntry],
    pub catalog: &'a PotentialCatalog,
}

impl<'a> PotentialSource<'a> {
    pub fn new(entries: &'a [PotentialEntry], catalog: &'a PotentialCatalog) -> Self {
        PotentialSource { entries, catalog }
    }
}

impl StatSource for PotentialSource<'_> {
    fn id(&self) -> &str {
        "potential"
    }

    fn priority(&self) -> i32 {
        200 // Potential is always listed last
    }

    fn contribution(&self) -> StatVector {
        potential::aggregate(self.entries, self.catalog)
    }
}
