//! # Domain Types
//!
//! Core domain types used throughout Tabsplit.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────┐  │
//! │  │    BillInput    │   │   Participant   │   │ AllocationResult │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────  │  │
//! │  │  policy         │   │  name (opt)     │   │  amounts         │  │
//! │  │  participants   │   │  value (f64)    │   │  adjusted_total  │  │
//! │  │  declared_total │   └─────────────────┘   │  rounded         │  │
//! │  │  tax_*          │                         └──────────────────┘  │
//! │  │  rounding       │   ┌─────────────────┐                         │
//! │  └─────────────────┘   │     Policy      │                         │
//! │                        │  Equal          │                         │
//! │                        │  Percentage     │                         │
//! │                        │  Share          │                         │
//! │                        │  Order          │                         │
//! │                        └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The meaning of `Participant::value` depends on the selected [`Policy`]:
//! percentage points, share units, or an order subtotal. It is unused for
//! [`Policy::Equal`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::DEFAULT_TAX_PERCENT;

// =============================================================================
// Policy
// =============================================================================

/// The allocation strategy selected by the user.
///
/// Determines how per-person weights are derived and how the bill total
/// is sourced: [`Policy::Order`] derives the total from the order
/// subtotals, every other policy uses [`BillInput::declared_total`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Everyone pays the same amount.
    Equal,
    /// Per-person percentages of the total (must sum to 100).
    Percentage,
    /// Proportional to per-person share units.
    Share,
    /// Proportional to what each person ordered; total is the sum of orders.
    Order,
}

impl Policy {
    /// Whether this policy reads [`BillInput::declared_total`].
    ///
    /// [`Policy::Order`] ignores the declared total: the effective total is
    /// the sum of the order subtotals, with tax applied on top.
    #[inline]
    pub const fn uses_declared_total(&self) -> bool {
        !matches!(self, Policy::Order)
    }
}

// =============================================================================
// Participant
// =============================================================================

/// One person on the bill.
///
/// Participants are identified by position (`0..n-1`) in
/// [`BillInput::participants`]; results come back in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Participant {
    /// Optional display name. Falls back to "Person <i+1>" when absent.
    pub name: Option<String>,

    /// Policy-dependent numeric input: percentage points, share units,
    /// or order subtotal. Unused for the Equal policy.
    pub value: f64,
}

impl Participant {
    /// Creates an unnamed participant with the given policy value.
    #[inline]
    pub fn new(value: f64) -> Self {
        Participant { name: None, value }
    }

    /// Creates a named participant.
    pub fn named(name: impl Into<String>, value: f64) -> Self {
        Participant {
            name: Some(name.into()),
            value,
        }
    }

    /// Display name for the participant at `index`.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::Participant;
    ///
    /// assert_eq!(Participant::named("Ana", 50.0).display_name(0), "Ana");
    /// assert_eq!(Participant::new(50.0).display_name(1), "Person 2");
    /// ```
    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Person {}", index + 1),
        }
    }
}

// =============================================================================
// Bill Input
// =============================================================================

/// Everything the engine needs for one `compute_split` invocation.
///
/// Constructed fresh per calculation; the engine holds no state between
/// calls. Mutable form state (text fields, dialogs) belongs to the caller,
/// never to this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BillInput {
    /// How the bill is divided.
    pub policy: Policy,

    /// The people splitting the bill, in display order.
    pub participants: Vec<Participant>,

    /// Bill total for Equal/Percentage/Share. Ignored for Order.
    /// `None` is treated as 0 (the caller coerces empty input upstream).
    pub declared_total: Option<f64>,

    /// Whether the tax surcharge is applied.
    pub tax_enabled: bool,

    /// Tax surcharge in percent. Not range-validated: any numeric value
    /// is accepted, matching the observed behavior this engine preserves.
    pub tax_percent: f64,

    /// Whether per-person amounts are rounded to whole currency units
    /// and reconciled against the rounded total.
    pub rounding_enabled: bool,
}

impl BillInput {
    /// Creates a bill with the default modifiers: tax off (at the default
    /// rate, ready to be enabled), rounding on.
    pub fn new(policy: Policy, participants: Vec<Participant>) -> Self {
        BillInput {
            policy,
            participants,
            declared_total: None,
            tax_enabled: false,
            tax_percent: DEFAULT_TAX_PERCENT,
            rounding_enabled: true,
        }
    }

    /// Sets the declared bill total.
    pub fn with_total(mut self, total: f64) -> Self {
        self.declared_total = Some(total);
        self
    }

    /// Enables the tax surcharge at the given percent.
    pub fn with_tax(mut self, percent: f64) -> Self {
        self.tax_enabled = true;
        self.tax_percent = percent;
        self
    }

    /// Disables rounding; exact fractional amounts are returned.
    pub fn without_rounding(mut self) -> Self {
        self.rounding_enabled = false;
        self
    }

    /// Number of participants on the bill.
    #[inline]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

// =============================================================================
// Allocation Result
// =============================================================================

/// The reconciled per-person amounts for one bill.
///
/// Immutable output: recalculation replaces the whole result, it is never
/// edited in place. Amounts are in participant order and sum exactly to
/// the (rounded) tax-adjusted total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AllocationResult {
    /// Per-person amounts, same order and length as the input participants.
    pub amounts: Vec<f64>,

    /// The tax-adjusted total before rounding. When `rounded` is true the
    /// amounts sum to `round(adjusted_total)` instead.
    pub adjusted_total: f64,

    /// Whether rounding reconciliation was applied.
    pub rounded: bool,
}

impl AllocationResult {
    /// Sum of the per-person amounts.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::{compute_split, BillInput, Participant, Policy};
    ///
    /// let input = BillInput::new(
    ///     Policy::Equal,
    ///     vec![Participant::new(0.0); 3],
    /// )
    /// .with_total(100.0);
    ///
    /// let result = compute_split(&input).unwrap();
    /// assert_eq!(result.total(), 100.0);
    /// ```
    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }

    /// Number of per-person amounts.
    #[inline]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// True when the result holds no amounts.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Policy::Percentage).unwrap(),
            "\"percentage\""
        );
        let policy: Policy = serde_json::from_str("\"order\"").unwrap();
        assert_eq!(policy, Policy::Order);
    }

    #[test]
    fn test_uses_declared_total() {
        assert!(Policy::Equal.uses_declared_total());
        assert!(Policy::Percentage.uses_declared_total());
        assert!(Policy::Share.uses_declared_total());
        assert!(!Policy::Order.uses_declared_total());
    }

    #[test]
    fn test_display_name_fallback() {
        let named = Participant::named("Ana", 50.0);
        assert_eq!(named.display_name(0), "Ana");

        let unnamed = Participant::new(50.0);
        assert_eq!(unnamed.display_name(0), "Person 1");
        assert_eq!(unnamed.display_name(4), "Person 5");

        // Blank names fall back too
        let blank = Participant::named("   ", 50.0);
        assert_eq!(blank.display_name(2), "Person 3");
    }

    #[test]
    fn test_bill_input_defaults() {
        let input = BillInput::new(Policy::Equal, vec![Participant::new(0.0); 2]);
        assert_eq!(input.participant_count(), 2);
        assert_eq!(input.declared_total, None);
        assert!(!input.tax_enabled);
        assert_eq!(input.tax_percent, DEFAULT_TAX_PERCENT);
        assert!(input.rounding_enabled);
    }

    #[test]
    fn test_bill_input_builders() {
        let input = BillInput::new(Policy::Share, vec![Participant::new(1.0); 2])
            .with_total(250.0)
            .with_tax(10.0)
            .without_rounding();

        assert_eq!(input.declared_total, Some(250.0));
        assert!(input.tax_enabled);
        assert_eq!(input.tax_percent, 10.0);
        assert!(!input.rounding_enabled);
    }

    #[test]
    fn test_bill_input_round_trips_through_json() {
        let input = BillInput::new(
            Policy::Order,
            vec![Participant::named("Ana", 30.0), Participant::new(70.0)],
        )
        .with_tax(12.0);

        let json = serde_json::to_string(&input).unwrap();
        let back: BillInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}
