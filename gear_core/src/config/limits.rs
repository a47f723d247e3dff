//! Input limits for user-edited enhancement configs

use serde::{Deserialize, Serialize};

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Range { min, max }
    }

    /// Clamp into the range; non-finite input becomes `min`
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.min
        }
    }
}

/// Tunable bounds applied when sanitizing an enhancement config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputLimits {
    /// Star count bound when no item is known
    #[serde(default = "default_stars")]
    pub stars: Range,
    /// Set piece bound when no set is known
    #[serde(default = "default_set_pieces")]
    pub set_pieces: Range,
    /// Flame values on flat stats
    #[serde(default = "default_flame_flat")]
    pub flame_flat: Range,
    /// Flame values on percent stats
    #[serde(default = "default_flame_percent")]
    pub flame_percent: Range,
    /// Explicit potential values
    #[serde(default = "default_potential_percent")]
    pub potential_percent: Range,
}

impl Default for InputLimits {
    fn default() -> Self {
        InputLimits {
            stars: default_stars(),
            set_pieces: default_set_pieces(),
            flame_flat: default_flame_flat(),
            flame_percent: default_flame_percent(),
            potential_percent: default_potential_percent(),
        }
    }
}

fn default_stars() -> Range {
    Range::new(0.0, 30.0)
}
fn default_set_pieces() -> Range {
    Range::new(0.0, 7.0)
}
fn default_flame_flat() -> Range {
    Range::new(0.0, 9999.0)
}
fn default_flame_percent() -> Range {
    Range::new(0.0, 100.0)
}
fn default_potential_percent() -> Range {
    Range::new(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = InputLimits::default();
        assert!((limits.stars.max - 30.0).abs() < f64::EPSILON);
        assert!((limits.flame_flat.max - 9999.0).abs() < f64::EPSILON);
        assert!((limits.potential_percent.max - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_partial_limits() {
        let toml = r#"
[flame_flat]
min = 0
max = 500
"#;
        let limits: InputLimits = toml::from_str(toml).unwrap();
        assert!((limits.flame_flat.max - 500.0).abs() < f64::EPSILON);
        assert!((limits.flame_percent.max - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_range_clamp() {
        let range = Range::new(0.0, 100.0);
        assert_eq!(range.clamp(150.0), 100.0);
        assert_eq!(range.clamp(-5.0), 0.0);
        assert_eq!(range.clamp(f64::NAN), 0.0);
        assert_eq!(range.clamp(42.5), 42.5);
    }
}
