//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation (paise for INR) to avoid
//! floating-point precision issues in price calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Currencies the store quotes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., paise
/// for INR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "₹499.00").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }

    /// Format as a display string without symbol (e.g., "499.00").
    pub fn display_amount(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", decimal)
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents + other.amount_cents,
            self.currency,
        ))
    }

    /// Multiply by a scalar.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Sum an iterator of Money values in a single currency.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| {
            Money::new(acc.amount_cents.saturating_add(m.amount_cents), currency)
        })
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
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
    fn test_money_from_minor_units() {
        let m = Money::new(49900, Currency::INR);
        assert_eq!(m.amount_cents, 49900);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(499.0, Currency::INR);
        assert_eq!(m.amount_cents, 49900);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(49900, Currency::INR);
        assert!((m.to_decimal() - 499.0).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(49900, Currency::INR);
        assert_eq!(m.display(), "\u{20b9}499.00");

        let m = Money::new(500, Currency::USD);
        assert_eq!(m.display(), "$5.00");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::INR);
        let b = Money::new(500, Currency::INR);
        let c = a.try_add(&b).unwrap();
        assert_eq!(c.amount_cents, 1500);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(49900, Currency::INR);
        let tripled = m.multiply(3);
        assert_eq!(tripled.amount_cents, 149700);
    }

    #[test]
    fn test_money_sum() {
        let values = vec![
            Money::new(1000, Currency::INR),
            Money::new(2000, Currency::INR),
            Money::new(500, Currency::INR),
        ];
        let total = Money::sum(values.iter(), Currency::INR);
        assert_eq!(total.amount_cents, 3500);
    }

    #[test]
    fn test_money_currency_mismatch() {
        let inr = Money::new(1000, Currency::INR);
        let usd = Money::new(1000, Currency::USD);
        assert!(inr.try_add(&usd).is_none());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
