//! Fixed-point money stored as whole cents.

use std::fmt;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub const fn from_cents(cents: i64) -> Self {
        Money { cents }
    }

    /// Currency units to cents, rounded to the nearest cent.
    pub fn from_units(units: f64) -> Self {
        Money {
            cents: (units * 100.0).round() as i64,
        }
    }

    pub const fn as_cents(self) -> i64 {
        self.cents
    }

    pub fn as_f64(self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl From<i64> for Money {
    fn from(cents: i64) -> Self {
        Money::from_cents(cents)
    }
}

impl From<f64> for Money {
    fn from(units: f64) -> Self {
        Money::from_units(units)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_cents(self.cents + rhs.cents)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money::from_cents(self.cents - rhs.cents)
    }
}

// Scaling drops fractional cents (truncates toward zero).
impl Mul<f64> for Money {
    type Output = Money;

    fn mul(self, factor: f64) -> Money {
        Money::from_cents((self.cents as f64 * factor) as i64)
    }
}

impl Mul<Money> for f64 {
    type Output = Money;

    fn mul(self, money: Money) -> Money {
        money * self
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn units_and_cents_agree() {
        assert_eq!(Money::from_units(1.0), Money::from_cents(100));
        assert_eq!(Money::from_units(0.2).as_cents(), 20);
        assert_eq!(Money::from(0.29).as_cents(), 29);
        assert_eq!(Money::from(250_i64).as_f64(), 2.5);
    }

    #[test]
    fn scaling_truncates_fractional_cents() {
        let price = Money::from_cents(120) * 1.19;
        assert_eq!(price.as_cents(), 142);
        assert_eq!(1.19 * Money::from_cents(120), price);
    }

    #[test]
    fn display_shows_units() {
        assert_eq!(Money::from_cents(142).to_string(), "1.42");
        assert_eq!(Money::from_cents(100).to_string(), "1");
        assert_eq!(Money::ZERO.to_string(), "0");
    }

    #[test]
    fn ordering_follows_cents() {
        assert!(Money::from_cents(99) < Money::from_units(1.0));
        assert_ne!(Money::from_cents(1), Money::ZERO);
    }

    proptest! {
        #[test]
        fn add_then_sub_restores(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let (a, b) = (Money::from_cents(a), Money::from_cents(b));
            prop_assert_eq!((a + b) - b, a);
        }

        #[test]
        fn identity_factor_keeps_value(cents in -1_000_000i64..1_000_000) {
            prop_assert_eq!(Money::from_cents(cents) * 1.0, Money::from_cents(cents));
        }
    }
}
