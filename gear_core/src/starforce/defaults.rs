//! Built-in star-force tables (30-star normal, 15-star superior)
//!
//! Cumulative values indexed by star count. Class stats stop growing at 22
//! stars; from there on only attack keeps climbing.

use super::{CategoryTables, HitPointRamp, LevelBracket, StarForceTables};
use std::collections::BTreeMap;

#[rustfmt::skip]
const ARMOR_CLASS_STATS: [(LevelBracket, [f64; 31]); 5] = [
    (LevelBracket::Lv128To137, [0.,2.,4.,6.,8.,10.,13.,16.,19.,22.,25.,28.,31.,34.,37.,40.,47.,54.,61.,68.,75.,75.,75.,75.,75.,75.,75.,75.,75.,75.,75.]),
    (LevelBracket::Lv138To149, [0.,2.,4.,6.,8.,10.,13.,16.,19.,22.,25.,28.,31.,34.,37.,40.,49.,58.,67.,76.,85.,94.,103.,103.,103.,103.,103.,103.,103.,103.,103.]),
    (LevelBracket::Lv150To159, [0.,2.,4.,6.,8.,10.,13.,16.,19.,22.,25.,28.,31.,34.,37.,40.,47.,54.,61.,68.,75.,94.,103.,103.,103.,103.,103.,103.,103.,103.,103.]),
    (LevelBracket::Lv160To199, [0.,2.,4.,6.,8.,10.,13.,16.,19.,22.,25.,28.,31.,34.,37.,40.,53.,66.,79.,92.,105.,130.,145.,145.,145.,145.,145.,145.,145.,145.,145.]),
    (LevelBracket::Lv200To249, [0.,2.,4.,6.,8.,10.,13.,16.,19.,22.,25.,28.,31.,34.,37.,40.,55.,70.,85.,100.,115.,142.,159.,159.,159.,159.,159.,159.,159.,159.,159.]),
];

#[rustfmt::skip]
const ARMOR_ATTACK: [(LevelBracket, [f64; 31]); 5] = [
    (LevelBracket::Lv128To137, [0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,7.,15.,24.,34.,45.,45.,45.,45.,45.,45.,157.,180.,204.,229.,255.]),
    (LevelBracket::Lv138To149, [0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,8.,17.,27.,38.,50.,63.,78.,95.,114.,135.,168.,192.,217.,243.,270.]),
    (LevelBracket::Lv150To159, [0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,7.,15.,24.,34.,45.,63.,78.,95.,114.,135.,179.,204.,230.,257.,285.]),
    (LevelBracket::Lv160To199, [0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,10.,21.,33.,46.,60.,87.,106.,127.,150.,175.,201.,228.,256.,285.,315.]),
    (LevelBracket::Lv200To249, [0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,12.,25.,39.,54.,70.,99.,120.,143.,168.,195.,223.,252.,282.,313.,345.]),
];

#[rustfmt::skip]
const WEAPON_CLASS_STATS: [(LevelBracket, [f64; 31]); 5] = [
    (LevelBracket::Lv128To137, [0.,2.,4.,6.,8.,10.,13.,16.,19.,22.,25.,28.,31.,34.,37.,40.,47.,54.,61.,68.,75.,75.,75.,75.,75.,75.,75.,75.,75.,75.,75.]),
    (LevelBracket::Lv138To149, [0.,2.,4.,6.,8.,10.,13.,16.,19.,22.,25.,28.,31.,34.,37.,40.,49.,58.,67.,76.,85.,94.,103.,103.,103.,103.,103.,103.,103.,103.,103.]),
    (LevelBracket::Lv150To159, [0.,2.,4.,6.,8.,10.,13.,16.,19.,22.,25.,28.,31.,34.,37.,40.,51.,62.,73.,84.,95.,118.,131.,131.,131.,131.,131.,131.,131.,131.,131.]),
    (LevelBracket::Lv160To199, [0.,2.,4.,6.,8.,10.,13.,16.,19.,22.,25.,28.,31.,34.,37.,40.,53.,66.,79.,92.,105.,130.,145.,145.,145.,145.,145.,145.,145.,145.,145.]),
    (LevelBracket::Lv200To249, [0.,2.,4.,6.,8.,10.,13.,16.,19.,22.,25.,28.,31.,34.,37.,40.,55.,70.,85.,100.,115.,142.,159.,159.,159.,159.,159.,159.,159.,159.,159.]),
];

#[rustfmt::skip]
const WEAPON_ATTACK: [(LevelBracket, [f64; 31]); 5] = [
    (LevelBracket::Lv128To137, [0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,6.,13.,20.,28.,37.,37.,37.,37.,37.,37.,157.,180.,204.,229.,255.]),
    (LevelBracket::Lv138To149, [0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,7.,15.,24.,34.,45.,56.,68.,81.,95.,110.,168.,192.,217.,243.,270.]),
    (LevelBracket::Lv150To159, [0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,8.,17.,26.,36.,47.,64.,78.,95.,110.,125.,179.,204.,230.,257.,285.]),
    (LevelBracket::Lv160To199, [0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,9.,18.,28.,39.,51.,85.,102.,136.,171.,207.,233.,260.,288.,317.,347.]),
    (LevelBracket::Lv200To249, [0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,0.,13.,26.,40.,54.,69.,102.,120.,143.,168.,195.,223.,252.,282.,313.,345.]),
];

const SUPERIOR_ALL_STATS: [f64; 16] = [
    0., 19., 39., 61., 86., 115., 140., 165., 190., 215., 240., 265., 290., 315., 340., 365.,
];

fn rows(table: &[(LevelBracket, [f64; 31])]) -> BTreeMap<LevelBracket, Vec<f64>> {
    table
        .iter()
        .map(|(bracket, values)| (*bracket, values.to_vec()))
        .collect()
}

impl Default for StarForceTables {
    fn default() -> Self {
        StarForceTables {
            normal_max_stars: super::DEFAULT_NORMAL_MAX_STARS,
            superior_max_stars: super::DEFAULT_SUPERIOR_MAX_STARS,
            hit_points: HitPointRamp::default(),
            weapon: CategoryTables {
                class_stats: rows(&WEAPON_CLASS_STATS),
                attack: rows(&WEAPON_ATTACK),
            },
            armor: CategoryTables {
                class_stats: rows(&ARMOR_CLASS_STATS),
                attack: rows(&ARMOR_ATTACK),
            },
            superior: SUPERIOR_ALL_STATS.to_vec(),
        }
    }
}
