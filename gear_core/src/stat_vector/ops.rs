//! Key-wise arithmetic on StatVector

use super::{finite_or_zero, StatVector};
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

impl StatVector {
    fn zip_with(self, other: StatVector, f: impl Fn(f64, f64) -> f64) -> StatVector {
        let mut out = StatVector::zero();
        for (i, slot) in out.values.iter_mut().enumerate() {
            *slot = finite_or_zero(f(self.values[i], other.values[i]));
        }
        out
    }
}

impl Add for StatVector {
    type Output = StatVector;

    fn add(self, rhs: StatVector) -> StatVector {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for StatVector {
    type Output = StatVector;

    fn sub(self, rhs: StatVector) -> StatVector {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Neg for StatVector {
    type Output = StatVector;

    fn neg(self) -> StatVector {
        StatVector::zero() - self
    }
}

impl Sum for StatVector {
    fn sum<I: Iterator<Item = StatVector>>(iter: I) -> StatVector {
        iter.fold(StatVector::zero(), Add::add)
    }
}

impl<'a> Sum<&'a StatVector> for StatVector {
    fn sum<I: Iterator<Item = &'a StatVector>>(iter: I) -> StatVector {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::stat_vector::{StatKey, StatVector};

    #[test]
    fn test_add_is_key_wise() {
        let a = StatVector::zero().with(StatKey::Strength, 10.0).with(StatKey::HitPoints, 5.0);
        let b = StatVector::zero().with(StatKey::Strength, 2.0).with(StatKey::Damage, 7.0);
        let sum = a + b;
        assert_eq!(sum.get(StatKey::Strength), 12.0);
        assert_eq!(sum.get(StatKey::HitPoints), 5.0);
        assert_eq!(sum.get(StatKey::Damage), 7.0);
    }

    #[test]
    fn test_sub_then_add_restores() {
        let a = StatVector::zero().with(StatKey::WeaponAttack, 33.0);
        let b = StatVector::zero().with(StatKey::WeaponAttack, 50.0).with(StatKey::Luck, 8.0);
        assert_eq!((b - a) + a, b);
    }

    #[test]
    fn test_self_difference_is_zero() {
        let a = StatVector::zero().with(StatKey::IgnoreDefense, 30.0);
        assert!((a - a).is_zero());
    }

    #[test]
    fn test_neg() {
        let a = StatVector::zero().with(StatKey::BossDamage, 30.0);
        assert_eq!((-a).get(StatKey::BossDamage), -30.0);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: StatVector = Vec::<StatVector>::new().into_iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_overflow_is_coerced() {
        let big = StatVector::zero().with(StatKey::HitPoints, f64::MAX);
        assert_eq!((big + big).get(StatKey::HitPoints), 0.0);
    }
}
