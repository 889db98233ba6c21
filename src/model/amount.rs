//! Amount type for monetary values entered as free text.
//!
//! This module provides the `Amount` type which wraps `Decimal` and handles parsing values that
//! may or may not include a dollar sign and commas.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::iter::Sum;
use std::str::FromStr;
use tracing::warn;

/// Represents how dollar amounts should be written.
///
/// # Examples
///  - `AmountFormat{ dollar: true, commas: true }` -> `-$60,000.00`
///  - `AmountFormat{ dollar: false, commas: true }` -> `-60,000.00`
///  - `AmountFormat{ dollar: false, commas: false }` -> `-60000.00`
///  - `AmountFormat{ dollar: true, commas: false }` -> `-$60000.00`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AmountFormat {
    /// Whether a dollar sign is written.
    #[serde(default = "yes")]
    dollar: bool,
    /// Whether commas are written as thousands separators.
    #[serde(default)]
    commas: bool,
}

fn yes() -> bool {
    true
}

impl Default for AmountFormat {
    fn default() -> Self {
        DEFAULT_FORMAT
    }
}

impl AmountFormat {
    pub const fn new(dollar: bool, commas: bool) -> Self {
        Self { dollar, commas }
    }

    pub fn dollar(&self) -> bool {
        self.dollar
    }

    pub fn commas(&self) -> bool {
        self.commas
    }
}

/// The default format has a dollar sign and no commas, always two decimal places: `$1234.50`.
const DEFAULT_FORMAT: AmountFormat = AmountFormat {
    dollar: true,
    commas: false,
};

/// Represents a dollar amount.
///
/// Parsing is strict through `FromStr`. User-entered text goes through [`Amount::coerce`]
/// instead, which never fails: anything that is not a number counts as zero.
///
/// # Examples
///
/// ```
/// # use expense_tracker::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("$1,250.5").unwrap();
/// assert_eq!(amount.to_string(), "$1250.50");
/// assert_eq!(Amount::coerce("lunch"), Amount::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `None` when the sum does not fit in a `Decimal`.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// `None` when the difference does not fit in a `Decimal`.
    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    pub fn saturating_add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }

    /// Parses user input, treating anything unparseable as zero.
    pub fn coerce(text: &str) -> Self {
        match Amount::from_str(text) {
            Ok(amount) => amount,
            Err(e) => {
                warn!("Amount '{text}' is not a number ({e}), counting it as zero");
                Amount::ZERO
            }
        }
    }

    /// Writes the amount with two decimal places using `format`.
    pub fn format(&self, format: AmountFormat) -> String {
        let mut num = self.0.abs().round_dp(2);
        num.rescale(2);
        let sign = if self.0.is_sign_negative() && !num.is_zero() {
            "-"
        } else {
            ""
        };
        let dol = if format.dollar { "$" } else { "" };
        if format.commas {
            format!(
                "{sign}{dol}{}",
                format_num::format_num!(",.2", num.to_f64().unwrap_or_default())
            )
        } else {
            format!("{sign}{dol}{num}")
        }
    }
}

/// An error that can occur when parsing strings into `Decimal` values.
pub struct AmountError(rust_decimal::Error);

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for AmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Amount::ZERO);
        }

        // "-$50.00", "$50.00", "-50.00" and "50.00" are all accepted
        let without_dollar = match trimmed.strip_prefix('-') {
            Some(rest) => format!("-{}", rest.strip_prefix('$').unwrap_or(rest)),
            None => trimmed.strip_prefix('$').unwrap_or(trimmed).to_string(),
        };
        let without_commas = without_dollar.replace(',', "");

        Decimal::from_str(&without_commas)
            .map(Amount)
            .map_err(AmountError)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_FORMAT))
    }
}

/// Serialized as a plain decimal string that keeps the scale it was entered with, e.g. `"12.50"`.
impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Saturates at the largest or smallest representable amount instead of overflowing.
impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Amount::saturating_add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_plain() {
        let amount = Amount::from_str("12.50").unwrap();
        assert_eq!(amount.value(), dec("12.5"));
    }

    #[test]
    fn test_parse_dollar_and_commas() {
        let amount = Amount::from_str("  -$1,234,567.89 ").unwrap();
        assert_eq!(amount.value(), dec("-1234567.89"));
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert_eq!(Amount::from_str("   ").unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(Amount::from_str("12abc").is_err());
        assert!(Amount::from_str("lunch").is_err());
    }

    #[test]
    fn test_coerce_garbage_is_zero() {
        assert_eq!(Amount::coerce("abc"), Amount::ZERO);
        assert_eq!(Amount::coerce("4.25").value(), dec("4.25"));
    }

    #[test]
    fn test_display_two_places() {
        assert_eq!(Amount::new(dec("15")).to_string(), "$15.00");
        assert_eq!(Amount::new(dec("0.125")).to_string(), "$0.12");
        assert_eq!(Amount::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Amount::new(dec("-50")).to_string(), "-$50.00");
    }

    #[test]
    fn test_format_variants() {
        let amount = Amount::new(dec("-60000"));
        assert_eq!(amount.format(AmountFormat::new(true, true)), "-$60,000.00");
        assert_eq!(amount.format(AmountFormat::new(false, true)), "-60,000.00");
        assert_eq!(amount.format(AmountFormat::new(false, false)), "-60000.00");
    }

    #[test]
    fn test_serialize_keeps_scale() {
        let amount = Amount::from_str("12.50").unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"12.50\"");
        let back: Amount = serde_json::from_str("\"$12.50\"").unwrap();
        assert_eq!(back, amount);
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let amounts = ["10", "20.5", "-0.5"].map(Amount::coerce);
        let total: Amount = amounts.iter().sum();
        assert_eq!(total.value(), dec("30"));
        let running = Amount::ZERO
            .checked_add(amounts[0])
            .and_then(|a| a.checked_sub(amounts[2]))
            .unwrap();
        assert_eq!(running.value(), dec("10.5"));
    }

    #[test]
    fn test_overflow_is_checked() {
        let max = Amount::new(Decimal::MAX);
        let min = Amount::new(Decimal::MIN);
        assert_eq!(max.checked_add(Amount::coerce("1")), None);
        assert_eq!(min.checked_sub(Amount::coerce("1")), None);
        assert_eq!(max.saturating_add(max), max);
        let total: Amount = [max, max, min].into_iter().sum();
        assert_eq!(total, Amount::ZERO);
    }

    #[test]
    fn test_format_deserialize_defaults() {
        let format: AmountFormat = serde_json::from_str("{}").unwrap();
        assert_eq!(format, AmountFormat::default());
        assert!(format.dollar());
        assert!(!format.commas());
    }
}
