//! Reference data - loaded once, read-only afterwards

mod class;
mod flame;
mod item;
mod potential;
mod set_effect;

pub use class::{ClassCatalog, ClassProfile};
pub use flame::{FlameCatalog, FlameType};
pub use item::{ItemCatalog, ItemDefinition};
pub use potential::{PotentialCatalog, PotentialLineDef, PotentialLineGroup};
pub use set_effect::{SetCatalog, SetEffect, DEFAULT_MAX_SET_PIECES};

use crate::config::ConfigError;
use crate::starforce::StarForceTables;
use std::path::Path;

/// Every table the engine reads.
///
/// Passed by reference into each engine call; nothing in the crate
/// keeps a global copy, so independent table sets can coexist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTables {
    pub items: ItemCatalog,
    pub flames: FlameCatalog,
    pub potential: PotentialCatalog,
    pub sets: SetCatalog,
    pub classes: ClassCatalog,
    pub starforce: StarForceTables,
}

impl ReferenceTables {
    /// Load every table from a data directory.
    /// See [`crate::config::load_reference_tables`].
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        crate::config::load_reference_tables(dir)
    }

    /// Max stars for an item under these tables
    pub fn max_stars(&self, item: &ItemDefinition) -> u32 {
        self.starforce
            .max_stars(item.star_force_variant, item.max_stars)
    }

    /// Max set pieces for an item; 0 when it has no known set
    pub fn max_set_pieces(&self, item: &ItemDefinition) -> u32 {
        self.sets.max_pieces(item.set())
    }
}
