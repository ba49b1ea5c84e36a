//! Money as an integer count of minor units.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All arithmetic happens on whole minor units (cents) stored in an `i64`;
//! `rust_decimal::Decimal` appears only at the parse/display/serde boundary.
//! Integer division plus remainder distribution is exact, so split math never
//! needs a floating-point reconciliation tolerance.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of decimal places in one whole currency unit (cents).
pub const MINOR_UNIT_SCALE: u32 = 2;

/// A signed monetary amount in minor units (cents).
///
/// Negative values are meaningful for balances (a member who owes money).
/// Serializes as a 2-decimal-place string, e.g. `"33.34"`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(i64);

/// Errors converting boundary decimals into minor units.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The value has digits below one minor unit (e.g. `10.005`).
    #[error("Amount {0} has sub-cent precision")]
    SubUnitPrecision(Decimal),

    /// The value does not fit in an `i64` count of minor units.
    #[error("Amount {0} is outside the representable range")]
    OutOfRange(Decimal),

    /// The value is not a decimal number at all.
    #[error("Amount '{0}' is not a valid decimal number")]
    Unparseable(String),
}

impl Money {
    /// Zero minor units.
    pub const ZERO: Self = Self(0);

    /// Creates a Money from a raw count of minor units.
    #[must_use]
    pub const fn from_minor_units(units: i64) -> Self {
        Self(units)
    }

    /// Returns the raw count of minor units.
    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Converts a boundary decimal into minor units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::SubUnitPrecision`] if the value carries digits
    /// below one minor unit, or [`MoneyError::OutOfRange`] if it does not fit.
    pub fn from_decimal(value: Decimal) -> Result<Self, MoneyError> {
        let scaled = value
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(MoneyError::OutOfRange(value))?;
        if !scaled.is_integer() {
            return Err(MoneyError::SubUnitPrecision(value));
        }
        scaled
            .to_i64()
            .map(Self)
            .ok_or(MoneyError::OutOfRange(value))
    }

    /// Returns the amount as a decimal with exactly two fractional digits.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, MINOR_UNIT_SCALE)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl std::ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl std::ops::Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.to_decimal()
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Decimal = s
            .parse()
            .map_err(|_| MoneyError::Unparseable(s.to_string()))?;
        Self::from_decimal(value)
    }
}
