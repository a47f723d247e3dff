//! StatVector - The normalized stat record every component produces

mod key;
mod ops;
mod serde_impl;

pub use key::StatKey;

/// Coerce a possibly non-finite number to a usable value
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Fixed-shape stat record over the closed [`StatKey`] set.
///
/// Every key is always present (0 by default) and every value is finite.
/// The type is `Copy`; all operations return a new vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatVector {
    values: [f64; StatKey::COUNT],
}

impl StatVector {
    /// The zero vector
    pub fn zero() -> Self {
        StatVector::default()
    }

    /// Build from (key, value) pairs; repeated keys accumulate
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (StatKey, f64)>,
    {
        pairs
            .into_iter()
            .fold(StatVector::zero(), |acc, (key, value)| acc.plus(key, value))
    }

    /// Value for a key
    pub fn get(&self, key: StatKey) -> f64 {
        self.values[key.index()]
    }

    /// Copy with `key` replaced by `value`
    pub fn with(mut self, key: StatKey, value: f64) -> Self {
        self.values[key.index()] = finite_or_zero(value);
        self
    }

    /// Copy with `value` added to `key`
    pub fn plus(mut self, key: StatKey, value: f64) -> Self {
        let slot = &mut self.values[key.index()];
        *slot = finite_or_zero(*slot + finite_or_zero(value));
        self
    }

    /// Copy with `value` set on STR, DEX, INT and LUK
    pub fn with_primary_stats(self, value: f64) -> Self {
        StatKey::PRIMARY
            .iter()
            .fold(self, |acc, key| acc.with(*key, value))
    }

    /// All (key, value) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (StatKey, f64)> + '_ {
        StatKey::ALL.iter().map(move |key| (*key, self.get(*key)))
    }

    /// Pairs whose value is not zero
    pub fn non_zero(&self) -> impl Iterator<Item = (StatKey, f64)> + '_ {
        self.iter().filter(|(_, value)| *value != 0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|value| *value == 0.0)
    }
}
