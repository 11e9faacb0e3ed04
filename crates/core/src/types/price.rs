//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are formatted the way each currency's home locale writes money:
//! Brazilian Real as `R$ 1.234,56`, US dollars as `$1,234.56`, euros as
//! `1.234,56 €`. The space between symbol and amount is a no-break space
//! (U+00A0) so a price never wraps across lines.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// No-break space used between a currency symbol and the amount.
const NBSP: char = '\u{a0}';

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Format for display, e.g. `R$ 179,90`.
    ///
    /// The amount is rounded half away from zero to two decimal places.
    #[must_use]
    pub fn display(&self) -> String {
        let style = self.currency_code.style();

        let mut rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let digits = rounded.abs().to_string();
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        let number = format!(
            "{}{}{fraction}",
            group_thousands(integer, style.group),
            style.decimal
        );

        let sign = if negative { "-" } else { "" };
        let symbol = self.currency_code.symbol();
        match style.symbol {
            SymbolPlacement::Before { spaced: true } => format!("{sign}{symbol}{NBSP}{number}"),
            SymbolPlacement::Before { spaced: false } => format!("{sign}{symbol}{number}"),
            SymbolPlacement::After => format!("{sign}{number}{NBSP}{symbol}"),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Insert `separator` between every group of three digits, counted from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPlacement {
    Before { spaced: bool },
    After,
}

/// Separators and symbol placement of a currency's home locale.
#[derive(Debug, Clone, Copy)]
struct MoneyStyle {
    group: char,
    decimal: char,
    symbol: SymbolPlacement,
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Currency symbol as written in its home locale.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BRL => "BRL",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }

    const fn style(self) -> MoneyStyle {
        match self {
            // pt-BR
            Self::BRL => MoneyStyle {
                group: '.',
                decimal: ',',
                symbol: SymbolPlacement::Before { spaced: true },
            },
            // de-DE
            Self::EUR => MoneyStyle {
                group: '.',
                decimal: ',',
                symbol: SymbolPlacement::After,
            },
            // en-US, en-GB, en-CA, en-AU
            Self::USD | Self::GBP | Self::CAD | Self::AUD => MoneyStyle {
                group: ',',
                decimal: '.',
                symbol: SymbolPlacement::Before { spaced: false },
            },
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Currency code not supported by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Self::BRL),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn brl(amount: &str) -> String {
        Price::new(amount.parse().unwrap(), CurrencyCode::BRL).display()
    }

    #[test]
    fn test_brl_formats_like_pt_br() {
        assert_eq!(brl("179.9"), "R$\u{a0}179,90");
        assert_eq!(brl("0"), "R$\u{a0}0,00");
        assert_eq!(brl("1234.5"), "R$\u{a0}1.234,50");
        assert_eq!(brl("1234567.891"), "R$\u{a0}1.234.567,89");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(brl("0.005"), "R$\u{a0}0,01");
        assert_eq!(brl("2.994"), "R$\u{a0}2,99");
        assert_eq!(brl("999.995"), "R$\u{a0}1.000,00");
    }

    #[test]
    fn test_negative_amounts_put_sign_first() {
        assert_eq!(brl("-1"), "-R$\u{a0}1,00");
        // Rounds to zero, so no sign
        assert_eq!(brl("-0.001"), "R$\u{a0}0,00");
    }

    #[test]
    fn test_other_currencies_use_their_home_locale() {
        let amount: Decimal = "1234.5".parse().unwrap();
        assert_eq!(Price::new(amount, CurrencyCode::USD).display(), "$1,234.50");
        assert_eq!(Price::new(amount, CurrencyCode::GBP).display(), "£1,234.50");
        assert_eq!(
            Price::new(amount, CurrencyCode::EUR).display(),
            "1.234,50\u{a0}€"
        );
    }

    #[test]
    fn test_same_price_same_string() {
        let a = Price::new("139.9".parse().unwrap(), CurrencyCode::BRL);
        let b = Price::new("139.90".parse().unwrap(), CurrencyCode::BRL);
        assert_eq!(a.display(), b.display());
        assert_eq!(a.to_string(), a.display());
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", '.'), "1");
        assert_eq!(group_thousands("123", '.'), "123");
        assert_eq!(group_thousands("1234", '.'), "1.234");
        assert_eq!(group_thousands("123456", ','), "123,456");
        assert_eq!(group_thousands("1234567", ','), "1,234,567");
    }

    #[test]
    fn test_currency_code_from_str() {
        assert_eq!("brl".parse::<CurrencyCode>().unwrap(), CurrencyCode::BRL);
        assert_eq!(" USD ".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        let err = "XYZ".parse::<CurrencyCode>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported currency code: XYZ");
    }

    #[test]
    fn test_default_currency_is_brl() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::BRL);
        assert_eq!(CurrencyCode::BRL.to_string(), "BRL");
    }
}
