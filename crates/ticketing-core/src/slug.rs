//! # Slug Module
//!
//! Resolves the numeric entity id embedded at the end of a URL slug, and
//! builds such slugs for links.
//!
//! ## Slug Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   summer-fest-2024-317                                                  │
//! │   └──────┬───────┘ └┬┘                                                  │
//! │        title        id   ← only a hyphen + digits at the very END       │
//! │                                                                         │
//! │   "summer-fest-2024-317"  → Some("317")                                 │
//! │   "event-42-extra"        → None   (digits not at the end)              │
//! │   "event42"               → None   (no hyphen before the digits)        │
//! │   "free-entry-0"          → Some("0")  (zero is a real id)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ticketing_core::slug::{build_slug, resolve_id, EntityId, EntityKind};
//!
//! assert_eq!(resolve_id("my-cool-event-42"), Some("42"));
//! assert_eq!(resolve_id("about"), None);
//!
//! let slug = build_slug("Rock in Rio", EntityId::new(7), EntityKind::Event);
//! assert_eq!(slug, "rock-in-rio-7");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};

/// Hyphen followed by ASCII digits, anchored at end of input.
///
/// `$` in the regex crate only matches at the end of the haystack, so a
/// trailing newline is not tolerated.
static TRAILING_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-([0-9]+)$").expect("trailing id pattern is valid"));

// =============================================================================
// Entity Id
// =============================================================================

/// Numeric identifier of an event or organization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct EntityId(u64);

impl EntityId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        EntityId(id)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        EntityId(id)
    }
}

/// Parses a bare digit run, as captured from a slug.
///
/// Signs, whitespace and non-ASCII digits are rejected. Leading zeros are
/// accepted (`"007"` is id 7).
impl FromStr for EntityId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "id".to_string(),
            }
            .into());
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "id".to_string(),
                reason: "must contain only digits".to_string(),
            }
            .into());
        }

        // Only overflow can fail past the digit check
        s.parse::<u64>()
            .map(EntityId)
            .map_err(|_| CoreError::IdOutOfRange {
                digits: s.to_string(),
            })
    }
}

// =============================================================================
// Entity Kind
// =============================================================================

/// What a slug points at. Only used to name slugs whose title is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EntityKind {
    Event,
    Organization,
}

impl EntityKind {
    /// Title used when the real title has no sluggable characters.
    pub const fn fallback_title(&self) -> &'static str {
        match self {
            EntityKind::Event => "event",
            EntityKind::Organization => "organization",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fallback_title())
    }
}

impl FromStr for EntityKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "event" | "events" => Ok(EntityKind::Event),
            "organization" | "organisation" | "org" => Ok(EntityKind::Organization),
            other => Err(ValidationError::InvalidFormat {
                field: "kind".to_string(),
                reason: format!("unknown entity kind '{}'; expected event or organization", other),
            }),
        }
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Returns the digit run at the end of `slug`, or `None` when the slug does
/// not end in `-<digits>`.
///
/// The returned slice borrows from the input. Callers that need a number use
/// [`resolve_entity_id`].
///
/// ## Example
/// ```rust
/// use ticketing_core::slug::resolve_id;
///
/// assert_eq!(resolve_id("summer-fest-2024-317"), Some("317"));
/// assert_eq!(resolve_id("ticket-0"), Some("0"));
/// assert_eq!(resolve_id("my-event-"), None);
/// assert_eq!(resolve_id(""), None);
/// ```
pub fn resolve_id(slug: &str) -> Option<&str> {
    TRAILING_ID
        .captures(slug)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Resolves the trailing id and parses it.
///
/// `Ok(None)` means the slug carries no id. A digit run too long for `u64`
/// is an error, not absence.
///
/// ## Example
/// ```rust
/// use ticketing_core::slug::{resolve_entity_id, EntityId};
///
/// assert_eq!(resolve_entity_id("expo-007").unwrap(), Some(EntityId::new(7)));
/// assert_eq!(resolve_entity_id("about").unwrap(), None);
/// assert!(resolve_entity_id("x-99999999999999999999999").is_err());
/// ```
pub fn resolve_entity_id(slug: &str) -> CoreResult<Option<EntityId>> {
    resolve_id(slug).map(str::parse::<EntityId>).transpose()
}

/// Builds `<slugified-title>-<id>`.
///
/// The output always resolves back to `id`: the slugified title never
/// ends in a hyphen, and an empty title is replaced by the kind's name.
///
/// ## Example
/// ```rust
/// use ticketing_core::slug::{build_slug, resolve_id, EntityId, EntityKind};
///
/// let slug = build_slug("Summer Fest 2024", EntityId::new(317), EntityKind::Event);
/// assert_eq!(slug, "summer-fest-2024-317");
/// assert_eq!(resolve_id(&slug), Some("317"));
///
/// let slug = build_slug("???", EntityId::new(5), EntityKind::Organization);
/// assert_eq!(slug, "organization-5");
/// ```
pub fn build_slug(title: &str, id: EntityId, kind: EntityKind) -> String {
    let base = ::slug::slugify(title);
    let base = if base.is_empty() {
        kind.fallback_title().to_string()
    } else {
        base
    };
    format!("{}-{}", base, id)
}

// =============================================================================
// Unit Tests
// =============================================================================
