//! gear_core - Stat composition engine for enhanceable equipment
//!
//! This library provides:
//! - StatVector: Fixed-shape stat record with key-wise arithmetic
//! - StarForceTables: Cumulative star-force bonuses by level bracket
//! - Flame, potential and set-bonus aggregators
//! - Composition: headline stats of one item configuration
//! - Diff algebra: comparing configurations and totalling many slots

pub mod catalog;
pub mod comparison;
pub mod config;
pub mod engine;
pub mod enhancement;
pub mod prelude;
pub mod source;
pub mod starforce;
pub mod stat_vector;
pub mod types;

// Re-export core types for convenience
pub use catalog::{ItemDefinition, ReferenceTables};
pub use comparison::{Comparison, ComparisonReport, ComparisonSlot};
pub use config::{ConfigError, InputLimits};
pub use engine::{
    breakdown, compose_stats, compose_stats_with_potential, diff, diff_optional, potential_stats,
    sum_diffs, StatDiff,
};
pub use enhancement::{EnhancementConfig, FlameLine, PotentialEntry};
pub use source::StatSource;
pub use starforce::{LevelBracket, StarForceQuery, StarForceTables};
pub use stat_vector::{StatKey, StatVector};
pub use types::{EquipCategory, EquipmentSlot, PotentialRank, StarForceVariant};
