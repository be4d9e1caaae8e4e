//! # Rounding Module
//!
//! Whole-currency-unit rounding and reconciliation.
//!
//! ## Why Reconciliation?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE INDEPENDENT ROUNDING PROBLEM                                   │
//! │                                                                     │
//! │  Split 100 three ways: 33.33 / 33.33 / 33.33                        │
//! │  Round each independently: 33 + 33 + 33 = 99   → Lost 1 unit!       │
//! │                                                                     │
//! │  OUR SOLUTION: reconcile against the rounded total                  │
//! │    diff = round(total) − Σ(rounded amounts)                         │
//! │    last participant absorbs the whole diff: 33 / 33 / 34            │
//! │                                                                     │
//! │  The diff goes to ONE fix-up point, never spread across people.     │
//! │  That keeps the outputs stable and easy to explain at the table.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In pathological cases the last participant can deviate by up to `n-1`
//! units from their proportional share. Documented behavior, not corrected
//! further.

// =============================================================================
// Rounding
// =============================================================================

/// Rounds to the nearest whole currency unit, half away from zero.
///
/// ## Example
/// ```rust
/// use tabsplit_core::rounding::round_currency;
///
/// assert_eq!(round_currency(32.4), 32.0);
/// assert_eq!(round_currency(32.5), 33.0);
/// assert_eq!(round_currency(-32.5), -33.0);
/// ```
#[inline]
pub fn round_currency(amount: f64) -> f64 {
    // f64::round is round-half-away-from-zero, which is exactly the
    // granularity contract for displayed amounts.
    amount.round()
}

// =============================================================================
// Reconciliation
// =============================================================================

/// Rounds each raw amount and corrects the last one so the rounded
/// amounts sum exactly to the rounded total.
///
/// ## Algorithm
/// ```text
/// raw amounts ──► round each independently
///      │
///      ▼
/// diff = round(adjusted_total) − Σ(rounded)
///      │
///      ▼
/// rounded[last] += diff       (single fix-up point)
/// ```
///
/// ## Example
/// ```rust
/// use tabsplit_core::rounding::reconcile;
///
/// let raw = [33.333, 33.333, 33.333];
/// let amounts = reconcile(&raw, 100.0);
/// assert_eq!(amounts, vec![33.0, 33.0, 34.0]);
/// assert_eq!(amounts.iter().sum::<f64>(), 100.0);
/// ```
pub fn reconcile(raw: &[f64], adjusted_total: f64) -> Vec<f64> {
    let mut amounts: Vec<f64> = raw.iter().copied().map(round_currency).collect();

    if let Some(last) = amounts.last_mut() {
        let rounded_total = round_currency(adjusted_total);
        let rounded_sum: f64 = raw.iter().copied().map(round_currency).sum();
        *last += rounded_total - rounded_sum;
    }

    amounts
}

// =============================================================================
// Unit Tests
// =============================================================================
