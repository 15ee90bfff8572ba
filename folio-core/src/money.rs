//! Currency amounts and billing periods
//!
//! All prices are held as whole cents so that derived figures such as
//! `monthly × 12 − annual` are exact. Arithmetic saturates at the `i64`
//! bounds instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::Error;

/// An amount of money in cents
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero cents
    pub const ZERO: Money = Money(0);

    /// Create an amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole dollars, saturating at the `i64` bounds
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars.saturating_mul(100))
    }

    /// The amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whether the amount is exactly zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Reduce the amount by a whole-number percentage
    ///
    /// Percentages above 100 are treated as 100. The result is rounded to the
    /// nearest cent, halves away from zero.
    pub fn percent_off(&self, percent: u8) -> Money {
        let keep = 100 - i128::from(percent.min(100));
        let scaled = i128::from(self.0) * keep;
        // |result| <= |self|, so this always fits back into i64
        Money(((scaled + 50 * scaled.signum()) / 100) as i64)
    }

    /// Format with a currency symbol other than `$`
    ///
    /// Whole amounts drop the cents (`$10`), others show two places (`$10.50`).
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (whole, cents) = (abs / 100, abs % 100);
        if cents == 0 {
            format!("{}{}{}", sign, symbol, whole)
        } else {
            format!("{}{}{}.{:02}", sign, symbol, whole, cents)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, rhs: i64) -> Money {
        Money(self.0.saturating_mul(rhs))
    }
}

/// How often a plan is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    #[serde(alias = "yearly")]
    Annual,
}

impl BillingPeriod {
    /// Short name used in config files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Annual => "annual",
        }
    }

    /// Number of months covered by one payment
    pub fn months(&self) -> i64 {
        match self {
            BillingPeriod::Monthly => 1,
            BillingPeriod::Annual => 12,
        }
    }

    /// Suffix for price labels, e.g. `$10/mo`
    pub fn suffix(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/mo",
            BillingPeriod::Annual => "/yr",
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for BillingPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" => Ok(BillingPeriod::Monthly),
            "annual" | "annually" | "yearly" | "year" => Ok(BillingPeriod::Annual),
            _ => Err(Error::UnknownPeriod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_and_fractional() {
        assert_eq!(Money::from_dollars(10).to_string(), "$10");
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_dollars(-5).to_string(), "-$5");
        assert_eq!(Money::ZERO.to_string(), "$0");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1999).format_with("€"), "€19.99");
    }

    #[test]
    fn test_arithmetic() {
        let monthly = Money::from_dollars(10);
        let annual = Money::from_dollars(110);
        assert_eq!(monthly * 12 - annual, Money::from_dollars(10));
        assert_eq!(monthly + monthly, Money::from_dollars(20));
    }

    #[test]
    fn test_percent_off() {
        assert_eq!(Money::from_dollars(10).percent_off(50), Money::from_dollars(5));
        // 50% of $0.15 is 7.5 cents, rounded away from zero
        assert_eq!(Money::from_cents(15).percent_off(50), Money::from_cents(8));
        assert_eq!(Money::from_dollars(10).percent_off(0), Money::from_dollars(10));
        assert_eq!(Money::from_dollars(10).percent_off(250), Money::ZERO);
    }

    #[test]
    fn test_large_amounts_saturate() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max * 12, max);
        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(
            Money::from_cents(i64::MIN) - Money::from_cents(1),
            Money::from_cents(i64::MIN)
        );
        assert_eq!(Money::from_dollars(i64::MAX), max);

        assert_eq!(max.percent_off(0), max);
        assert_eq!(max.percent_off(100), Money::ZERO);
        assert_eq!(max.percent_off(50), Money::from_cents(i64::MAX / 2 + 1));
        assert_eq!(
            Money::from_cents(i64::MIN).percent_off(50),
            Money::from_cents(i64::MIN / 2)
        );
    }

    #[test]
    fn test_period_parse() {
        assert_eq!("monthly".parse::<BillingPeriod>().unwrap(), BillingPeriod::Monthly);
        assert_eq!("Annual".parse::<BillingPeriod>().unwrap(), BillingPeriod::Annual);
        assert_eq!("yearly".parse::<BillingPeriod>().unwrap(), BillingPeriod::Annual);
        assert!(matches!(
            "weekly".parse::<BillingPeriod>(),
            Err(Error::UnknownPeriod(_))
        ));
    }

    #[test]
    fn test_period_serde() {
        let json = serde_json::to_string(&BillingPeriod::Annual).unwrap();
        assert_eq!(json, "\"annual\"");
        let parsed: BillingPeriod = serde_json::from_str("\"yearly\"").unwrap();
        assert_eq!(parsed, BillingPeriod::Annual);
    }
}
