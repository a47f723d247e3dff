//! Composition engine - per-item stat totals and the diff algebra

mod compose;
mod diff;

pub use compose::{breakdown, compose_stats, compose_stats_with_potential, potential_stats};
pub use diff::{diff, diff_optional, sum_diffs, StatDiff};
