//! # Locale Module
//!
//! Locale tags and the number formatting conventions they select.
//!
//! ## Lookup Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "PT_br"  ──parse──►  pt-BR  ──exact match?──► pt-BR conventions        │
//! │  "pt"     ──parse──►  pt     ──language match──► pt-BR conventions      │
//! │  "ja-JP"  ──parse──►  ja-JP  ──no match──────► en-US conventions        │
//! │  "!!"     ──parse fails ─────────────────────► en-US conventions        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsing is lenient about case and `_`; the currency choice in
//! [`crate::currency::Currency::for_locale`] is not.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::ValidationError;

/// Locale used when a caller passes none.
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// No-break space placed between a currency symbol and the digits.
pub const NBSP: char = '\u{a0}';

// =============================================================================
// Conventions
// =============================================================================

/// Where the currency symbol goes relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Number and currency rendering rules for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conventions {
    /// Canonical tag, e.g. `pt-BR`.
    pub tag: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
    pub symbol_position: SymbolPosition,
    /// Whether an NBSP separates symbol and digits.
    pub symbol_spacing: bool,
    /// How this locale spells the US dollar sign.
    pub usd_symbol: &'static str,
}

/// Known locales. The first entry for a language is its default region.
static CONVENTIONS: [Conventions; 4] = [
    Conventions {
        tag: "pt-BR",
        decimal_separator: ',',
        group_separator: '.',
        symbol_position: SymbolPosition::Prefix,
        symbol_spacing: true,
        usd_symbol: "US$",
    },
    Conventions {
        tag: "en-US",
        decimal_separator: '.',
        group_separator: ',',
        symbol_position: SymbolPosition::Prefix,
        symbol_spacing: false,
        usd_symbol: "$",
    },
    Conventions {
        tag: "en-GB",
        decimal_separator: '.',
        group_separator: ',',
        symbol_position: SymbolPosition::Prefix,
        symbol_spacing: false,
        usd_symbol: "US$",
    },
    Conventions {
        tag: "de-DE",
        decimal_separator: ',',
        group_separator: '.',
        symbol_position: SymbolPosition::Suffix,
        symbol_spacing: true,
        usd_symbol: "$",
    },
];

/// Index of the en-US entry, used for unknown tags.
const FALLBACK: usize = 1;

impl Conventions {
    /// All locales with dedicated conventions.
    pub fn known() -> &'static [Conventions] {
        &CONVENTIONS
    }

    /// Conventions used for unrecognized tags (en-US).
    pub fn fallback() -> &'static Conventions {
        &CONVENTIONS[FALLBACK]
    }

    fn language(&self) -> &'static str {
        self.tag.split('-').next().unwrap_or(self.tag)
    }
}

// =============================================================================
// Locale Tag
// =============================================================================

/// A parsed `language[-REGION]` tag in canonical case.
///
/// ## Example
/// ```rust
/// use ticketing_core::locale::Locale;
///
/// let locale: Locale = "pt_br".parse().unwrap();
/// assert_eq!(locale.to_string(), "pt-BR");
/// assert_eq!(locale.conventions().decimal_separator, ',');
///
/// assert!("".parse::<Locale>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns the conventions for this locale, falling back to the
    /// language's default region, then to en-US.
    pub fn conventions(&self) -> &'static Conventions {
        let tag = self.to_string();
        CONVENTIONS
            .iter()
            .find(|c| c.tag == tag)
            .or_else(|| CONVENTIONS.iter().find(|c| c.language() == self.language))
            .unwrap_or_else(|| {
                debug!(locale = %tag, "No formatting conventions for locale, using en-US");
                Conventions::fallback()
            })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

/// Accepts `ll`, `lll`, `ll-RR`, `ll-999` with `-` or `_`, any case.
impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.is_empty() {
            return Err(ValidationError::Required {
                field: "locale".to_string(),
            });
        }

        let invalid = || ValidationError::InvalidFormat {
            field: "locale".to_string(),
            reason: format!("'{}' is not a language[-REGION] tag", s),
        };

        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        let region = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let region = match region {
            None => None,
            Some(r) if r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic()) => {
                Some(r.to_ascii_uppercase())
            }
            Some(r) if r.len() == 3 && r.chars().all(|c| c.is_ascii_digit()) => Some(r.to_string()),
            Some(_) => return Err(invalid()),
        };

        Ok(Locale {
            language: language.to_ascii_lowercase(),
            region,
        })
    }
}

/// Resolves conventions for a raw tag. Never fails: malformed tags get en-US.
pub fn conventions_for(tag: &str) -> &'static Conventions {
    match tag.parse::<Locale>() {
        Ok(locale) => locale.conventions(),
        Err(err) => {
            debug!(locale = %tag, error = %err, "Unparseable locale, using en-US conventions");
            Conventions::fallback()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
