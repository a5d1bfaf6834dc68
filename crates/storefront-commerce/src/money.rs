//! Money type for representing prices and totals.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues in monetary calculations. Display formatting is
//! always two decimals (`$49.99`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// A monetary value in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money { cents: 0 };

    /// Create a Money value from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal dollar amount, rounding to the
    /// nearest cent.
    pub fn from_dollars(dollars: f64) -> Self {
        Self {
            cents: (dollars * 100.0).round() as i64,
        }
    }

    /// The amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// The amount as a decimal dollar value.
    pub fn to_dollars(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Multiply by a quantity, saturating at the numeric bounds rather
    /// than wrapping.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money {
            cents: self.cents.saturating_mul(factor),
        }
    }

    /// Add another amount, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money {
            cents: self.cents.saturating_add(other.cents),
        }
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("${:.2}", self.to_dollars())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = self.saturating_add(other);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money {
            cents: self.cents.saturating_sub(other.cents),
        }
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(4999);
        assert_eq!(m.cents(), 4999);
    }

    #[test]
    fn test_from_dollars_rounds_to_cent() {
        assert_eq!(Money::from_dollars(49.99).cents(), 4999);
        assert_eq!(Money::from_dollars(20.0).cents(), 2000);
        assert_eq!(Money::from_dollars(0.005).cents(), 1);
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Money::from_cents(4999).display(), "$49.99");
        assert_eq!(Money::from_cents(4000).display(), "$40.00");
        assert_eq!(Money::ZERO.display(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!(a.saturating_mul(3).cents(), 3000);
    }

    #[test]
    fn test_saturation() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.saturating_mul(2).cents(), i64::MAX);
        assert_eq!(max.saturating_add(Money::from_cents(1)).cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let total: Money = [2000, 1500, 500]
            .iter()
            .map(|c| Money::from_cents(*c))
            .sum();
        assert_eq!(total.cents(), 4000);
    }
}
