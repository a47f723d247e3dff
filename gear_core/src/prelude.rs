//! Prelude module for convenient imports
//!
//! ```rust
//! use gear_core::prelude::*;
//! ```

// Core types
pub use crate::stat_vector::{StatKey, StatVector};
pub use crate::types::{EquipCategory, EquipmentSlot, PotentialRank, StarForceVariant};

// Reference data
pub use crate::catalog::{ItemDefinition, ReferenceTables};
pub use crate::starforce::StarForceTables;

// Enhancements
pub use crate::enhancement::{EnhancementConfig, FlameLine, PotentialEntry};

// Engine
pub use crate::engine::{compose_stats, compose_stats_with_potential, diff, sum_diffs, StatDiff};
pub use crate::comparison::Comparison;

// Sources
pub use crate::source::StatSource;

// Config
pub use crate::config::{ConfigError, InputLimits};
