//! StarForceSource - Stats from the item's star-force level

use crate::catalog::ItemDefinition;
use crate::source::StatSource;
use crate::starforce::StarForceTables;
use crate::stat_vector::StatVector;

pub struct StarForceSource<'a> {
    pub item: &'a ItemDefinition,
    pub star_count: u32,
    pub tables: &'a StarForceTables,
}

impl<'a> StarForceSource<'a> {
    pub fn new(item: &'a ItemDefinition, star_count: u32, tables: &'a StarForceTables) -> Self {
        StarForceSource {
            item,
            star_count,
            tables,
        }
    }
}

impl StatSource for StarForceSource<'_> {
    fn id(&self) -> &str {
        "star_force"
    }

    fn contribution(&self) -> StatVector {
        self.tables
            .lookup(&self.item.star_force_query(self.star_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_vector::StatKey;

    #[test]
    fn test_zero_stars_contribute_nothing() {
        let item: ItemDefinition =
            serde_json::from_str(r#"{"id": "hat", "slot": "hat", "baseStats": {"matt": 40}}"#).unwrap();
        let tables = StarForceTables::default();
        assert!(StarForceSource::new(&item, 0, &tables).contribution().is_zero());
    }

    #[test]
    fn test_uses_item_level_and_slot() {
        let item: ItemDefinition = serde_json::from_str(
            r#"{"id": "shoe", "slot": "shoes", "level": 200, "baseStats": {"str": 40}}"#,
        )
        .unwrap();
        let tables = StarForceTables::default();
        let stats = StarForceSource::new(&item, 22, &tables).contribution();
        assert_eq!(stats.get(StatKey::Strength), 159.0);
        assert_eq!(stats.get(StatKey::WeaponAttack), 120.0);
        assert_eq!(stats.get(StatKey::HitPoints), 0.0);
    }
}
