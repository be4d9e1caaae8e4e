//! # Policy Resolver
//!
//! Maps a [`Policy`] plus raw per-person inputs to the normalized weight
//! vector consumed by the allocation engine.
//!
//! ## Resolution Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Policy      Weights              Validation                        │
//! │  ──────      ─────────────────    ───────────────────────────────   │
//! │  Equal       uniform (1.0 × n)    none (length is all that counts)  │
//! │  Percentage  values as-is         Σ must equal 100 exactly          │
//! │  Share       values as-is         Σ must be > 0                     │
//! │  Order       values as-is         Σ must be > 0                     │
//! │                                   (Σ also becomes the bill total)   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Percentages are never auto-normalized here. The caller may offer
//! [`auto_fix_percentages`] as an explicit, user-invoked repair when it
//! receives [`SplitError::UnbalancedPercentage`].

use crate::error::{SplitError, SplitResult};
use crate::types::{Participant, Policy};
use crate::{BALANCED_PERCENT_SUM, PERCENT_SUM_TOLERANCE};

// =============================================================================
// Resolved Weights
// =============================================================================

/// Output of weight resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWeights {
    /// Per-person weights, same order and length as the participants.
    pub weights: Vec<f64>,

    /// For the Order policy: the derived bill total (sum of subtotals),
    /// which overrides any declared total. `None` for other policies.
    pub derived_total: Option<f64>,
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolves per-person weights for the given policy.
///
/// Pure function: no side effects, no state.
///
/// ## Example
/// ```rust
/// use tabsplit_core::{resolve_weights, Participant, Policy, SplitError};
///
/// let people = vec![Participant::new(60.0), Participant::new(40.0)];
/// let resolved = resolve_weights(Policy::Percentage, &people).unwrap();
/// assert_eq!(resolved.weights, vec![60.0, 40.0]);
///
/// let people = vec![Participant::new(60.0), Participant::new(39.0)];
/// assert_eq!(
///     resolve_weights(Policy::Percentage, &people),
///     Err(SplitError::UnbalancedPercentage { sum: 99.0 }),
/// );
/// ```
pub fn resolve_weights(policy: Policy, participants: &[Participant]) -> SplitResult<ResolvedWeights> {
    let values: Vec<f64> = participants.iter().map(|p| p.value).collect();
    let sum: f64 = values.iter().sum();

    match policy {
        Policy::Equal => Ok(ResolvedWeights {
            // Only the length matters downstream; the engine divides the
            // total by n directly.
            weights: vec![1.0; participants.len()],
            derived_total: None,
        }),

        Policy::Percentage => {
            if (sum - BALANCED_PERCENT_SUM).abs() > PERCENT_SUM_TOLERANCE {
                return Err(SplitError::UnbalancedPercentage { sum });
            }
            Ok(ResolvedWeights {
                weights: values,
                derived_total: None,
            })
        }

        Policy::Share => {
            if sum <= 0.0 {
                return Err(SplitError::NonPositiveShares);
            }
            Ok(ResolvedWeights {
                weights: values,
                derived_total: None,
            })
        }

        Policy::Order => {
            if sum <= 0.0 {
                return Err(SplitError::NonPositiveOrders);
            }
            Ok(ResolvedWeights {
                weights: values,
                derived_total: Some(sum),
            })
        }
    }
}

// =============================================================================
// Percentage Repair
// =============================================================================

/// An even integer split of 100 percentage points across `n` people.
///
/// Integer division with the remainder handed to the first `rem`
/// participants, one extra point each. Used both to seed percentage
/// forms and as the zero-sum branch of [`auto_fix_percentages`].
///
/// ## Example
/// ```rust
/// use tabsplit_core::resolver::equal_percentages;
///
/// assert_eq!(equal_percentages(3), vec![34.0, 33.0, 33.0]);
/// assert_eq!(equal_percentages(4), vec![25.0, 25.0, 25.0, 25.0]);
/// ```
pub fn equal_percentages(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let base = 100 / n as i64;
    let rem = 100 - base * n as i64;
    (0..n as i64)
        .map(|i| if i < rem { (base + 1) as f64 } else { base as f64 })
        .collect()
}

/// Repairs unbalanced percentages so they total exactly 100.
///
/// User-invoked recovery for [`SplitError::UnbalancedPercentage`]; the
/// engine never calls this on its own.
///
/// ## Policy
/// - Current sum is 0: distribute 100 as evenly as possible
///   ([`equal_percentages`]).
/// - Otherwise: scale each value to `value/sum*100`, round to the nearest
///   integer, then add the residual entirely to the **last** participant.
///
/// Names are preserved; only values change.
///
/// ## Example
/// ```rust
/// use tabsplit_core::{auto_fix_percentages, Participant};
///
/// let people = vec![Participant::new(50.0), Participant::new(49.0)];
/// let fixed = auto_fix_percentages(&people);
/// let sum: f64 = fixed.iter().map(|p| p.value).sum();
/// assert_eq!(sum, 100.0);
/// ```
pub fn auto_fix_percentages(participants: &[Participant]) -> Vec<Participant> {
    let sum: f64 = participants.iter().map(|p| p.value).sum();

    let fixed: Vec<f64> = if sum == 0.0 {
        equal_percentages(participants.len())
    } else {
        let mut scaled: Vec<f64> = participants
            .iter()
            .map(|p| (p.value / sum * 100.0).round())
            .collect();
        let scaled_sum: f64 = scaled.iter().sum();
        if let Some(last) = scaled.last_mut() {
            *last += 100.0 - scaled_sum;
        }
        scaled
    };

    participants
        .iter()
        .zip(fixed)
        .map(|(p, value)| Participant {
            name: p.name.clone(),
            value,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
