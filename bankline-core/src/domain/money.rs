//! Money primitives
//!
//! Balances and amounts are fixed-point decimals with exactly two fractional
//! digits (minor units). Anything finer than a cent is rejected instead of
//! rounded, so no value drifts between operations.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// Number of fractional digits carried by every monetary value
pub const MINOR_UNIT_SCALE: u32 = 2;

/// A signed monetary value (balances, ceilings, limits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Largest representable value, used where a sum saturates
    pub const MAX: Money = Money(Decimal::MAX);

    /// Create money from a decimal, rejecting sub-cent precision
    pub fn new(value: Decimal) -> Result<Self> {
        if value.normalize().scale() > MINOR_UNIT_SCALE {
            return Err(Error::invalid(format!(
                "{} has more than {} decimal places",
                value, MINOR_UNIT_SCALE
            )));
        }
        Ok(Self::rescaled(value))
    }

    /// Create money from an integer count of minor units (cents)
    pub fn from_minor(minor: i64) -> Self {
        Self::rescaled(Decimal::new(minor, MINOR_UNIT_SCALE))
    }

    /// Create money from whole major units
    pub fn from_major(major: i64) -> Self {
        Self::rescaled(Decimal::from(major))
    }

    fn rescaled(mut value: Decimal) -> Self {
        value.rescale(MINOR_UNIT_SCALE);
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        Self(value)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn checked_add(self, other: Money) -> Result<Money> {
        self.0
            .checked_add(other.0)
            .map(Self::rescaled)
            .ok_or_else(|| Error::invalid(format!("{} + {} overflows", self, other)))
    }

    /// Sum that stops at `Money::MAX` instead of failing
    pub fn saturating_add(self, other: Money) -> Money {
        self.0
            .checked_add(other.0)
            .map(Self::rescaled)
            .unwrap_or(Money::MAX)
    }

    pub fn checked_sub(self, other: Money) -> Result<Money> {
        self.0
            .checked_sub(other.0)
            .map(Self::rescaled)
            .ok_or_else(|| Error::invalid(format!("{} - {} overflows", self, other)))
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Self::rescaled(-self.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| Error::invalid(format!("'{}' is not a valid amount", s)))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        let mut value = money.0;
        value.rescale(MINOR_UNIT_SCALE);
        value
    }
}

/// A strictly positive quantity of money moved by one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Money);

impl Amount {
    /// Wrap money as an operation amount; zero and negative values are rejected
    pub fn new(money: Money) -> Result<Self> {
        if money <= Money::ZERO {
            return Err(Error::invalid(format!(
                "amount must be positive, got {}",
                money
            )));
        }
        Ok(Self(money))
    }

    pub fn from_minor(minor: i64) -> Result<Self> {
        Self::new(Money::from_minor(minor))
    }

    pub fn from_major(major: i64) -> Result<Self> {
        Self::new(Money::from_major(major))
    }

    pub fn money(&self) -> Money {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.parse()?)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(Money::new(value)?)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Decimal {
        amount.0.into()
    }
}

impl From<Amount> for Money {
    fn from(amount: Amount) -> Money {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_is_normalized_to_cents() {
        let money: Money = "12.5".parse().unwrap();
        assert_eq!(money.to_string(), "12.50");
        assert_eq!(Money::from_major(100).to_string(), "100.00");
        assert_eq!(Money::from_minor(-4000).to_string(), "-40.00");
    }

    #[test]
    fn test_sub_cent_precision_is_rejected() {
        assert!("12.505".parse::<Money>().unwrap_err().is_invalid_argument());
        // Trailing zeros are not extra precision
        assert!("12.500".parse::<Money>().is_ok());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!("twelve".parse::<Money>().is_err());
        assert!("".parse::<Amount>().is_err());
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert!(Amount::from_minor(0).unwrap_err().is_invalid_argument());
        assert!(Amount::from_minor(-1).unwrap_err().is_invalid_argument());
        assert!("-5".parse::<Amount>().is_err());
        assert_eq!(Amount::from_minor(1).unwrap().to_string(), "0.01");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_major(100);
        let b = Money::from_major(140);
        assert_eq!(a.checked_sub(b).unwrap(), Money::from_major(-40));
        assert_eq!(a.checked_add(b).unwrap(), Money::from_major(240));
        assert!(Money::new(Decimal::MAX).unwrap().checked_add(a).is_err());
    }

    #[test]
    fn test_zero_has_no_sign() {
        let zero = Money::from_major(10).checked_sub(Money::from_major(10)).unwrap();
        assert_eq!(zero.to_string(), "0.00");
        assert_eq!((-Money::ZERO).to_string(), "0.00");
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(serde_json::to_string(&Money::ZERO).unwrap(), "\"0.00\"");
    }

    #[test]
    fn test_serde_uses_decimal_strings() {
        let amount = Amount::from_minor(1250).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"12.50\"");

        let parsed: Amount = serde_json::from_str("\"7.25\"").unwrap();
        assert_eq!(parsed, Amount::from_minor(725).unwrap());

        assert!(serde_json::from_str::<Amount>("\"0\"").is_err());
        assert!(serde_json::from_str::<Money>("\"1.001\"").is_err());
    }
}
