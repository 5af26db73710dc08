//! # Error Types
//!
//! Domain-specific error types for ticketing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ticketing-core errors (this file)                                     │
//! │  ├── CoreError        - Conversion / id parsing failures               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  ticketing-cli errors (app crate)                                      │
//! │  └── ConfigError      - Config file / env failures                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A slug without an id is NOT an error: it is `None`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the conversion and id parsing functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A major amount was NaN or infinite.
    ///
    /// ## When This Occurs
    /// - A price field arrived as `NaN` after a failed parse upstream
    /// - A division by zero produced `inf` before conversion
    #[error("Amount must be a finite number, got {value}")]
    NonFiniteAmount { value: f64 },

    /// A major amount converts to more cents than can be represented exactly.
    #[error("Amount {value} is outside the representable range")]
    AmountOutOfRange { value: f64 },

    /// The digit run in a slug does not fit an entity id.
    #[error("Entity id '{digits}' is out of range")]
    IdOutOfRange { digits: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., malformed locale tag, non-digit id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
