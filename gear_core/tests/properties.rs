//! Property tests: composition and diff invariants over generated inputs

use gear_core::catalog::{PotentialCatalog, SetCatalog};
use gear_core::enhancement::{flame, set_bonus};
use gear_core::prelude::*;
use proptest::prelude::*;

fn slot_strategy() -> impl Strategy<Value = EquipmentSlot> {
    prop::sample::select(EquipmentSlot::all().to_vec())
}

fn stats_strategy() -> impl Strategy<Value = StatVector> {
    prop::collection::vec(0.0f64..500.0, StatKey::COUNT).prop_map(|values| {
        StatVector::from_pairs(StatKey::ALL.iter().copied().zip(values))
    })
}

prop_compose! {
    fn item_strategy()(
        level in 100u32..260,
        weapon in any::<bool>(),
        slot in slot_strategy(),
        base_stats in stats_strategy(),
        superior in any::<bool>(),
        flameable in any::<bool>(),
    ) -> ItemDefinition {
        ItemDefinition {
            id: "generated".to_string(),
            name: String::new(),
            level,
            category: if weapon { EquipCategory::Weapon } else { EquipCategory::Armor },
            slot,
            base_stats,
            set_id: Some("absolab".to_string()),
            flameable,
            star_force_variant: if superior { StarForceVariant::Superior } else { StarForceVariant::Normal },
            max_stars: None,
            job_class: None,
        }
    }
}

prop_compose! {
    fn config_strategy()(
        stars in 0u32..40,
        flames in prop::collection::vec((prop::sample::select(vec!["str", "luk", "watk", "allStat", "intLuk"]), 0.0f64..150.0), 0..6),
        pots in prop::collection::vec(prop::sample::select(vec!["a_luk", "w_boss", "missing"]), 0..4),
        pieces in 0u32..9,
    ) -> EnhancementConfig {
        let mut config = EnhancementConfig::default().with_stars(stars).with_set_pieces(pieces);
        for (stat, value) in flames {
            config = config.with_flame(FlameLine::new(stat, value));
        }
        for line in pots {
            config = config.with_potential(PotentialEntry::new(line));
        }
        config
    }
}

fn tables() -> ReferenceTables {
    let sets: SetCatalog = serde_json::from_str(
        r#"{ "sets": { "absolab": { "maxPieces": 5, "cumulative": {
            "2": { "hp": 1500 },
            "3": { "hp": 1500, "watk": 20, "matt": 20 },
            "5": { "hp": 1500, "watk": 55, "matt": 55, "bossDmg": 20 }
        } } } }"#,
    )
    .unwrap();
    let potential: PotentialCatalog = serde_json::from_str(
        r#"{
        "weapon": { "lines": [ { "id": "w_boss", "stat": "bossDmg", "percent": true, "ranks": { "Unique": [30, 30] } } ] },
        "armor": { "lines": [ { "id": "a_luk", "stat": "luk", "percent": true, "ranks": { "Unique": [7, 9] } } ] }
    }"#,
    )
    .unwrap();
    ReferenceTables {
        sets,
        potential,
        ..ReferenceTables::default()
    }
}

proptest! {
    #[test]
    fn zero_enhancement_is_identity(item in item_strategy()) {
        let stats = compose_stats(&item, &EnhancementConfig::default(), &tables());
        prop_assert_eq!(stats, item.base_stats);
    }

    #[test]
    fn star_count_clamped_to_cap(item in item_strategy(), extra in 0u32..50) {
        let tables = tables();
        let cap = tables.max_stars(&item);
        let at_cap = compose_stats(&item, &EnhancementConfig::default().with_stars(cap), &tables);
        let past_cap = compose_stats(&item, &EnhancementConfig::default().with_stars(cap + extra), &tables);
        prop_assert_eq!(at_cap, past_cap);
    }

    #[test]
    fn superior_grants_only_primary_stats(mut item in item_strategy(), stars in 0u32..20) {
        item.star_force_variant = StarForceVariant::Superior;
        let tables = tables();
        let stats = tables.starforce.lookup(&item.star_force_query(stars));
        let expected = StatVector::zero().with_primary_stats(stats.get(StatKey::Strength));
        prop_assert_eq!(stats, expected);
    }

    #[test]
    fn hp_exempt_slots_gain_no_hp(mut item in item_strategy(), stars in 0u32..31) {
        item.category = EquipCategory::Armor;
        item.star_force_variant = StarForceVariant::Normal;
        item.slot = exempt_slot(stars);
        let stats = tables().starforce.lookup(&item.star_force_query(stars));
        prop_assert_eq!(stats.get(StatKey::HitPoints), 0.0);
    }

    #[test]
    fn self_diff_is_zero(item in item_strategy(), config in config_strategy()) {
        let result = diff(&item, &config, &item, &config, &tables());
        prop_assert!(result.stat_diff.is_zero());
        prop_assert!(result.potential_diff.is_zero());
    }

    #[test]
    fn sum_diffs_is_linear(
        a in item_strategy(), config_a in config_strategy(),
        b in item_strategy(), config_b in config_strategy(),
    ) {
        let tables = tables();
        let first = diff(&a, &config_a, &b, &config_b, &tables);
        let second = diff(&b, &config_b, &a, &config_a, &tables);
        let total = sum_diffs([first, second]);
        prop_assert_eq!(total.stat_diff, first.stat_diff + second.stat_diff);
        prop_assert_eq!(total.potential_diff, first.potential_diff + second.potential_diff);
    }

    #[test]
    fn flames_use_at_most_four_lines(config in config_strategy()) {
        let capped: Vec<FlameLine> = config.flame_lines.iter().take(4).cloned().collect();
        prop_assert_eq!(flame::aggregate(&config.flame_lines), flame::aggregate(&capped));
    }

    #[test]
    fn set_bonus_below_two_pieces_is_zero(pieces in 0u32..2) {
        prop_assert!(set_bonus::aggregate(Some("absolab"), pieces, &tables().sets).is_zero());
    }

    #[test]
    fn compositions_stay_finite(item in item_strategy(), config in config_strategy()) {
        let stats = compose_stats_with_potential(&item, &config, &tables());
        prop_assert!(stats.iter().all(|(_, value)| value.is_finite()));
    }
}

fn exempt_slot(seed: u32) -> EquipmentSlot {
    const EXEMPT: [EquipmentSlot; 4] = [
        EquipmentSlot::Gloves,
        EquipmentSlot::Shoes,
        EquipmentSlot::Face,
        EquipmentSlot::Eye,
    ];
    EXEMPT[seed as usize % EXEMPT.len()]
}

#[test]
fn hit_point_ramp_examples() {
    let tables = tables();
    let hat = |stars: u32| {
        let item = ItemDefinition {
            id: "hat".to_string(),
            name: String::new(),
            level: 160,
            category: EquipCategory::Armor,
            slot: EquipmentSlot::Hat,
            base_stats: StatVector::zero(),
            set_id: None,
            flameable: false,
            star_force_variant: StarForceVariant::Normal,
            max_stars: None,
            job_class: None,
        };
        compose_stats(&item, &EnhancementConfig::default().with_stars(stars), &tables)
            .get(StatKey::HitPoints)
    };
    assert_eq!(hat(0), 0.0);
    assert_eq!(hat(1), 5.0);
    assert_eq!(hat(11), 255.0);
    assert_eq!(hat(30), 255.0);
}

#[test]
fn unknown_potential_line_contributes_nothing() {
    let config = EnhancementConfig::default().with_potential(PotentialEntry::new("missing"));
    assert!(gear_core::potential_stats(&config, &tables()).is_zero());
}
