//! # Error Types
//!
//! Validation error taxonomy for tabsplit-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  compute_split(input)                                               │
//! │       │                                                             │
//! │       ├── n < 1?            → InvalidParticipantCount               │
//! │       ├── Σpercent ≠ 100?   → UnbalancedPercentage { sum }          │
//! │       ├── Σshares ≤ 0?      → NonPositiveShares                     │
//! │       ├── Σorders ≤ 0?      → NonPositiveOrders                     │
//! │       │                                                             │
//! │       └── OK → AllocationResult                                     │
//! │                                                                     │
//! │  Every variant is recoverable: the caller renders it as a           │
//! │  correction prompt, never as a crash.                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to a user-facing message
//! 4. Only `UnbalancedPercentage` has an automated repair
//!    ([`auto_fix_percentages`](crate::resolver::auto_fix_percentages)) —
//!    and the engine never applies it on its own

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Split Error
// =============================================================================

/// Validation failures produced by the resolver and the engine.
///
/// All variants are **validation** errors: recoverable by construction,
/// never an indication of engine malfunction. The engine returns the first
/// applicable error and performs no partial computation.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SplitError {
    /// The bill has no participants.
    #[error("Enter a valid number of people (at least 1)")]
    InvalidParticipantCount,

    /// Percentage weights do not total 100.
    ///
    /// The offending sum is carried so the caller can show it and offer
    /// the auto-fix action. The engine never renormalizes silently.
    #[error("Percentages add up to {sum}%. They must total 100%")]
    UnbalancedPercentage { sum: f64 },

    /// Share units sum to zero or less.
    #[error("Total shares must be greater than 0")]
    NonPositiveShares,

    /// Order subtotals sum to zero or less.
    #[error("Please enter at least one order amount (per person)")]
    NonPositiveOrders,
}

impl SplitError {
    /// Whether the caller should offer the percentage auto-fix action
    /// for this error.
    #[inline]
    pub const fn is_auto_fixable(&self) -> bool {
        matches!(self, SplitError::UnbalancedPercentage { .. })
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with SplitError.
pub type SplitResult<T> = Result<T, SplitError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SplitError::UnbalancedPercentage { sum: 99.0 };
        assert_eq!(
            err.to_string(),
            "Percentages add up to 99%. They must total 100%"
        );

        let err = SplitError::NonPositiveShares;
        assert_eq!(err.to_string(), "Total shares must be greater than 0");
    }

    #[test]
    fn test_only_unbalanced_percentage_is_auto_fixable() {
        assert!(SplitError::UnbalancedPercentage { sum: 101.0 }.is_auto_fixable());
        assert!(!SplitError::InvalidParticipantCount.is_auto_fixable());
        assert!(!SplitError::NonPositiveShares.is_auto_fixable());
        assert!(!SplitError::NonPositiveOrders.is_auto_fixable());
    }

    #[test]
    fn test_error_serializes_with_kind_tag() {
        let err = SplitError::UnbalancedPercentage { sum: 99.0 };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "unbalanced_percentage");
        assert_eq!(json["sum"], 99.0);
    }
}
