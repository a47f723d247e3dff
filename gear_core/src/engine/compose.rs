//! Composition - summing every stat source of one item configuration

use crate::catalog::{ItemDefinition, ReferenceTables};
use crate::enhancement::EnhancementConfig;
use crate::source::{
    self, BaseStatsSource, FlameSource, PotentialSource, SetBonusSource, StarForceSource, StatSource,
};
use crate::stat_vector::StatVector;

/// Sources behind the headline stats, in priority order
fn headline_sources<'a>(
    item: &'a ItemDefinition,
    config: &'a EnhancementConfig,
    tables: &'a ReferenceTables,
) -> Vec<Box<dyn StatSource + 'a>> {
    let mut sources: Vec<Box<dyn StatSource + 'a>> = vec![
        Box::new(BaseStatsSource::new(item)),
        Box::new(StarForceSource::new(item, config.star_count, &tables.starforce)),
    ];
    if item.flameable && !config.flame_lines.is_empty() {
        sources.push(Box::new(FlameSource::new(&config.flame_lines)));
    }
    sources.push(Box::new(SetBonusSource::new(
        item.set(),
        config.set_piece_count,
        &tables.sets,
    )));
    sources
}

/// Headline stats of an item configuration, potential excluded.
///
/// Base stats plus star force, flames (only when the item accepts them)
/// and the set bonus at the configured piece count.
pub fn compose_stats(
    item: &ItemDefinition,
    config: &EnhancementConfig,
    tables: &ReferenceTables,
) -> StatVector {
    source::total(&headline_sources(item, config, tables))
}

/// Headline stats with the potential lines folded in
pub fn compose_stats_with_potential(
    item: &ItemDefinition,
    config: &EnhancementConfig,
    tables: &ReferenceTables,
) -> StatVector {
    compose_stats(item, config, tables) + potential_stats(config, tables)
}

/// Potential overlay of a configuration on its own
pub fn potential_stats(config: &EnhancementConfig, tables: &ReferenceTables) -> StatVector {
    PotentialSource::new(&config.pot_lines, &tables.potential).contribution()
}

/// Per-source contributions, ordered by source priority.
///
/// Every headline source is listed (a skipped flame source shows as zero)
/// and potential comes last. Summing all entries but the potential one gives
/// [`compose_stats`].
pub fn breakdown(
    item: &ItemDefinition,
    config: &EnhancementConfig,
    tables: &ReferenceTables,
) -> Vec<(&'static str, StatVector)> {
    let mut sources = headline_sources(item, config, tables);
    if !sources.iter().any(|source| source.id() == "flame") {
        sources.push(Box::new(FlameSource::new(&[])));
    }
    sources.push(Box::new(PotentialSource::new(&config.pot_lines, &tables.potential)));
    sources.sort_by_key(|source| source.priority());

    sources
        .iter()
        .map(|source| (source_label(source.id()), source.contribution()))
        .collect()
}

fn source_label(id: &str) -> &'static str {
    match id {
        "base" => "base",
        "star_force" => "star force",
        "flame" => "flame",
        "set_bonus" => "set bonus",
        "potential" => "potential",
        _ => "other",
    }
}
