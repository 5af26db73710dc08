//! # ticketing-core: Slug Resolution and Money Normalization
//!
//! The pure logic behind the ticketing front-end's event and organization
//! pages: reading entity ids out of URL slugs, and turning integer cents
//! into decimal values and display strings.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Ticketing Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser Front-end                            │   │
//! │  │   /events/summer-fest-317 ──► Event page ──► Checkout           │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │ slug                         │ price_cents           │
//! │  ┌──────────────▼──────────────────────────────▼───────────────────┐   │
//! │  │             ★ ticketing-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   slug    │  │   money   │  │  format   │  │  locale   │  │   │
//! │  │   │ resolve_id│  │ to_minor  │  │ format_   │  │ currency  │  │   │
//! │  │   │ build_slug│  │ to_major  │  │ currency  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STATE • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                 │ EntityId                     │ "R$ 10,50"            │
//! │                 ▼                              ▼                        │
//! │         API gateway requests              Rendered pages               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`slug`] - Trailing id extraction and slug building
//! - [`money`] - `Money` (minor units) and minor/major conversion
//! - [`format`] - Locale-aware currency strings
//! - [`locale`] - Locale tags and formatting conventions
//! - [`currency`] - BRL/USD and the locale -> currency rule
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use ticketing_core::{format_currency, resolve_id, to_minor};
//!
//! assert_eq!(resolve_id("summer-fest-2024-317"), Some("317"));
//!
//! let price = to_minor(10.50).unwrap();
//! assert_eq!(format_currency(price, Some("en-US")), "$10.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod format;
pub mod locale;
pub mod money;
pub mod slug;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use crate::currency::Currency;
pub use crate::error::{CoreError, CoreResult, ValidationError};
pub use crate::format::{format_currency, CurrencyFormatter};
pub use crate::locale::{Locale, DEFAULT_LOCALE};
pub use crate::money::{to_major, to_minor, Money};
pub use crate::slug::{build_slug, resolve_entity_id, resolve_id, EntityId, EntityKind};
