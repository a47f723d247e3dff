//! Flame aggregation - user-entered flat/percent bonuses, no tier lookup

use super::FlameLine;
use crate::stat_vector::{StatKey, StatVector};

/// Flames beyond this many lines are ignored
pub const MAX_FLAME_LINES: usize = 4;

/// Where a flame line's value lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlameStat {
    Single(StatKey),
    /// Adds the value to both INT and LUK
    IntLuk,
}

impl FlameStat {
    /// Parse a flame stat code; `None` for unknown codes
    pub fn parse(code: &str) -> Option<FlameStat> {
        match code {
            "intLuk" => Some(FlameStat::IntLuk),
            other => other.parse::<StatKey>().ok().map(FlameStat::Single),
        }
    }

    fn apply(self, stats: StatVector, value: f64) -> StatVector {
        match self {
            FlameStat::Single(key) => stats.plus(key, value),
            FlameStat::IntLuk => stats
                .plus(StatKey::Intelligence, value)
                .plus(StatKey::Luck, value),
        }
    }
}

/// Sum up to four flame lines.
///
/// `allStat` accumulates in its own bucket, not the primary stats.
/// Unknown stat codes and non-finite values are skipped.
pub fn aggregate(lines: &[FlameLine]) -> StatVector {
    lines
        .iter()
        .take(MAX_FLAME_LINES)
        .fold(StatVector::zero(), |stats, line| {
            if !line.value.is_finite() {
                return stats;
            }
            match FlameStat::parse(&line.stat) {
                Some(target) => target.apply(stats, line.value),
                None => {
                    tracing::debug!(stat = %line.stat, "ignoring flame line with unknown stat");
                    stats
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(stat: &str, value: f64) -> FlameLine {
        FlameLine {
            stat: stat.to_string(),
            value,
        }
    }

    #[test]
    fn test_sums_lines() {
        let stats = aggregate(&[line("str", 40.0), line("str", 20.0), line("watk", 9.0)]);
        assert_eq!(stats.get(StatKey::Strength), 60.0);
        assert_eq!(stats.get(StatKey::WeaponAttack), 9.0);
    }

    #[test]
    fn test_int_luk_hits_both() {
        let stats = aggregate(&[line("intLuk", 36.0)]);
        assert_eq!(stats.get(StatKey::Intelligence), 36.0);
        assert_eq!(stats.get(StatKey::Luck), 36.0);
        assert_eq!(stats.get(StatKey::Strength), 0.0);
    }

    #[test]
    fn test_all_stat_uses_own_bucket() {
        let stats = aggregate(&[line("allStat", 6.0)]);
        assert_eq!(stats.get(StatKey::AllStat), 6.0);
        for key in StatKey::PRIMARY {
            assert_eq!(stats.get(key), 0.0);
        }
    }

    #[test]
    fn test_unknown_and_non_finite_ignored() {
        let stats = aggregate(&[line("speed", 10.0), line("dex", f64::NAN), line("luk", 12.0)]);
        assert_eq!(stats.get(StatKey::Dexterity), 0.0);
        assert_eq!(stats.get(StatKey::Luck), 12.0);
    }

    #[test]
    fn test_only_first_four_lines_count() {
        let lines: Vec<FlameLine> = (0..6).map(|_| line("def", 100.0)).collect();
        assert_eq!(aggregate(&lines).get(StatKey::Defense), 400.0);
    }

    #[test]
    fn test_empty_is_zero() {
        assert!(aggregate(&[]).is_zero());
    }
}
