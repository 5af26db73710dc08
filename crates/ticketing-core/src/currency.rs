//! # Currency Module
//!
//! The currencies the platform displays and the rule that picks one from a
//! locale tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::locale::Conventions;

/// Display currency.
///
/// Both currencies have two minor digits, which is what
/// [`crate::money::MINOR_PER_MAJOR`] assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Currency {
    /// Brazilian real.
    Brl,
    /// US dollar.
    Usd,
}

impl Currency {
    /// `pt-BR` means BRL; every other tag means USD.
    ///
    /// The comparison is exact: `pt-br` or `pt_BR` select USD.
    ///
    /// ## Example
    /// ```rust
    /// use ticketing_core::currency::Currency;
    ///
    /// assert_eq!(Currency::for_locale("pt-BR"), Currency::Brl);
    /// assert_eq!(Currency::for_locale("en-US"), Currency::Usd);
    /// assert_eq!(Currency::for_locale("pt-PT"), Currency::Usd);
    /// ```
    pub fn for_locale(tag: &str) -> Self {
        if tag == "pt-BR" {
            Currency::Brl
        } else {
            Currency::Usd
        }
    }

    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Brl => "BRL",
            Currency::Usd => "USD",
        }
    }

    pub const fn minor_digits(&self) -> u32 {
        2
    }

    /// Symbol as spelled under the given conventions.
    pub fn symbol(&self, conventions: &Conventions) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Usd => conventions.usd_symbol,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
