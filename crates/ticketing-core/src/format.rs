//! # Format Module
//!
//! Locale-aware display strings for minor-unit amounts.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Money(-123456), "pt-BR"                                                │
//! │        │                                                                │
//! │        ├── Currency::for_locale("pt-BR")  → BRL  ("R$")                 │
//! │        ├── conventions_for("pt-BR")       → ',' '.' prefix + NBSP       │
//! │        ├── major 1234 → "1.234"   minor 56 → "56"                       │
//! │        ▼                                                                │
//! │  "-R$ 1.234,56"                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Digits come straight from the integer amount, so the output is always the
//! exact cent value with two fraction digits.

use crate::currency::Currency;
use crate::locale::{conventions_for, Conventions, SymbolPosition, DEFAULT_LOCALE, NBSP};
use crate::money::Money;

/// Formats `minor` for display in `locale` (default `pt-BR`).
///
/// ## Example
/// ```rust
/// use ticketing_core::format::format_currency;
/// use ticketing_core::money::Money;
///
/// assert_eq!(format_currency(Money::from_cents(1050), Some("en-US")), "$10.50");
/// assert_eq!(format_currency(Money::from_cents(1050), None), "R$\u{a0}10,50");
/// assert_eq!(format_currency(Money::from_cents(-500), Some("en-US")), "-$5.00");
/// ```
pub fn format_currency(minor: Money, locale: Option<&str>) -> String {
    let tag = locale.unwrap_or(DEFAULT_LOCALE);
    render(minor, Currency::for_locale(tag), conventions_for(tag))
}

/// Renders an amount with explicit currency and conventions.
pub fn render(minor: Money, currency: Currency, conventions: &Conventions) -> String {
    let symbol = currency.symbol(conventions);
    let number = format!(
        "{}{}{:02}",
        group_digits(minor.major_part(), conventions.group_separator),
        conventions.decimal_separator,
        minor.minor_part()
    );

    let mut out = String::with_capacity(number.len() + symbol.len() + 4);
    if minor.is_negative() {
        out.push('-');
    }
    match conventions.symbol_position {
        SymbolPosition::Prefix => {
            out.push_str(symbol);
            if conventions.symbol_spacing {
                out.push(NBSP);
            }
            out.push_str(&number);
        }
        SymbolPosition::Suffix => {
            out.push_str(&number);
            if conventions.symbol_spacing {
                out.push(NBSP);
            }
            out.push_str(symbol);
        }
    }
    out
}

/// Inserts `separator` every three digits from the right.
fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

impl Money {
    /// Shorthand for [`format_currency`].
    pub fn format(&self, locale: Option<&str>) -> String {
        format_currency(*self, locale)
    }
}

// =============================================================================
// Currency Formatter
// =============================================================================

/// Formats with a configured default locale instead of `pt-BR`.
///
/// ## Example
/// ```rust
/// use ticketing_core::format::CurrencyFormatter;
/// use ticketing_core::money::Money;
///
/// let formatter = CurrencyFormatter::new("en-US");
/// assert_eq!(formatter.format(Money::from_cents(250), None), "$2.50");
/// assert_eq!(formatter.format(Money::from_cents(250), Some("pt-BR")), "R$\u{a0}2,50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    default_locale: String,
}

impl CurrencyFormatter {
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Formats with `locale`, or the configured default when `None`.
    pub fn format(&self, minor: Money, locale: Option<&str>) -> String {
        format_currency(minor, Some(locale.unwrap_or(self.default_locale.as_str())))
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(cents: i64, locale: &str) -> String {
        format_currency(Money::from_cents(cents), Some(locale))
    }

    #[test]
    fn test_pt_br_uses_brl() {
        assert_eq!(fmt(1050, "pt-BR"), "R$\u{a0}10,50");
        assert_eq!(fmt(123456, "pt-BR"), "R$\u{a0}1.234,56");
        assert_eq!(fmt(-500, "pt-BR"), "-R$\u{a0}5,00");
    }

    #[test]
    fn test_en_us_uses_usd() {
        assert_eq!(fmt(1050, "en-US"), "$10.50");
        assert_eq!(fmt(123456789, "en-US"), "$1,234,567.89");
        assert_eq!(fmt(-500, "en-US"), "-$5.00");
    }

    #[test]
    fn test_default_locale_is_pt_br() {
        assert_eq!(
            format_currency(Money::from_cents(1050), None),
            fmt(1050, "pt-BR")
        );
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(fmt(0, "pt-BR"), "R$\u{a0}0,00");
        assert_eq!(fmt(0, "en-US"), "$0.00");
        assert_eq!(fmt(0, "xx-YY"), "$0.00");
    }

    #[test]
    fn test_sub_unit_amounts_keep_sign() {
        assert_eq!(fmt(5, "en-US"), "$0.05");
        assert_eq!(fmt(-5, "en-US"), "-$0.05");
        assert_eq!(fmt(-99, "pt-BR"), "-R$\u{a0}0,99");
    }

    #[test]
    fn test_other_locales_use_usd_with_own_conventions() {
        assert_eq!(fmt(123456, "de-DE"), "1.234,56\u{a0}$");
        assert_eq!(fmt(-500, "de-DE"), "-5,00\u{a0}$");
        assert_eq!(fmt(1050, "en-GB"), "US$10.50");
        // Case variant gets pt-BR conventions but not BRL
        assert_eq!(fmt(1050, "pt-br"), "US$\u{a0}10,50");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        assert_eq!(fmt(1050, "ja-JP"), "$10.50");
        assert_eq!(fmt(1050, "garbage!"), "$10.50");
    }

    #[test]
    fn test_extreme_amounts() {
        assert_eq!(fmt(i64::MAX, "en-US"), "$92,233,720,368,547,758.07");
        assert_eq!(fmt(i64::MIN, "en-US"), "-$92,233,720,368,547,758.08");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0, ','), "0");
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1000, ','), "1,000");
        assert_eq!(group_digits(100000, '.'), "100.000");
        assert_eq!(group_digits(1234567, '.'), "1.234.567");
    }

    #[test]
    fn test_money_format_shorthand() {
        assert_eq!(Money::from_cents(1050).format(Some("en-US")), "$10.50");
    }

    #[test]
    fn test_formatter_default_locale() {
        let formatter = CurrencyFormatter::default();
        assert_eq!(formatter.default_locale(), "pt-BR");
        assert_eq!(formatter.format(Money::from_cents(1050), None), "R$\u{a0}10,50");

        let formatter = CurrencyFormatter::new("de-DE");
        assert_eq!(formatter.format(Money::from_cents(1050), None), "10,50\u{a0}$");
        assert_eq!(formatter.format(Money::from_cents(1050), Some("en-US")), "$10.50");
    }
}
