//! Currency formatting
//!
//! Locale-aware rendering of catalog prices. Formatting is pure: the same
//! value and options always produce the same string.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Formatter, Money, Params, Position, iso};
use thiserror::Error;

/// Errors from currency formatting
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyFormatError {
    /// Input did not parse as a decimal number
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Currency code is not a known ISO code
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Grouping and symbol-placement conventions for a formatting locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Spanish (Uruguay): dot grouping, comma decimals, spaced symbol
    #[default]
    EsUy,
    /// English (US): comma grouping, dot decimals, attached symbol
    EnUs,
}

impl Locale {
    fn params(self, symbol: &'static str) -> Params {
        match self {
            Locale::EsUy => Params {
                digit_separator: '.',
                exponent_separator: ',',
                positions: vec![
                    Position::Sign,
                    Position::Symbol,
                    Position::Space,
                    Position::Amount,
                ],
                symbol: Some(symbol),
                ..Default::default()
            },
            Locale::EnUs => Params {
                symbol: Some(symbol),
                ..Default::default()
            },
        }
    }
}

/// Options for [`format_currency`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyOptions {
    pub locale: Locale,
    /// ISO 4217 currency code
    pub currency: &'static str,
    pub min_decimals: u32,
    pub max_decimals: u32,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            locale: Locale::EsUy,
            currency: "UYU",
            min_decimals: 2,
            max_decimals: 2,
        }
    }
}

/// Format a numeric string as a currency amount
///
/// The value is rounded to `max_decimals` (half-up) and padded to
/// `min_decimals`, then rendered with the locale's grouping separators and
/// symbol placement.
pub fn format_currency(value: &str, options: &CurrencyOptions) -> Result<String, MoneyFormatError> {
    let currency = iso::find(options.currency)
        .ok_or_else(|| MoneyFormatError::UnknownCurrency(options.currency.to_string()))?;

    let mut amount: Decimal = value
        .trim()
        .parse()
        .map_err(|_| MoneyFormatError::InvalidAmount(value.to_string()))?;

    if amount.scale() > options.max_decimals {
        amount =
            amount.round_dp_with_strategy(options.max_decimals, RoundingStrategy::MidpointAwayFromZero);
    }
    if amount.scale() < options.min_decimals {
        amount.rescale(options.min_decimals);
    }

    let money = Money::from_decimal(amount, currency);
    Ok(Formatter::money(&money, options.locale.params(currency.symbol)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_group_and_pad_to_two_decimals() {
        let formatted = format_currency("1234.5", &CurrencyOptions::default()).unwrap();
        assert!(formatted.ends_with("1.234,50"), "got {formatted}");
    }

    #[test]
    fn rounds_excess_decimals_half_up() {
        let formatted = format_currency("19.995", &CurrencyOptions::default()).unwrap();
        assert!(formatted.ends_with("20,00"), "got {formatted}");
    }

    #[test]
    fn en_us_locale_uses_comma_grouping() {
        let options = CurrencyOptions {
            locale: Locale::EnUs,
            currency: "USD",
            ..CurrencyOptions::default()
        };
        let formatted = format_currency("1234567.8", &options).unwrap();
        assert!(formatted.ends_with("1,234,567.80"), "got {formatted}");
    }

    #[test]
    fn same_input_same_output() {
        let options = CurrencyOptions::default();
        assert_eq!(
            format_currency("99.9", &options),
            format_currency("99.9", &options)
        );
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        assert_eq!(
            format_currency("abc", &CurrencyOptions::default()),
            Err(MoneyFormatError::InvalidAmount("abc".to_string()))
        );
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let options = CurrencyOptions {
            currency: "ZZZ",
            ..CurrencyOptions::default()
        };
        assert_eq!(
            format_currency("1", &options),
            Err(MoneyFormatError::UnknownCurrency("ZZZ".to_string()))
        );
    }
}
