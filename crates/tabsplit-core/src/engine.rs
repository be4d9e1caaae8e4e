//! # Allocation Engine
//!
//! The core computation: validate, resolve weights, apply tax, allocate,
//! reconcile.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  compute_split(input)                                               │
//! │                                                                     │
//! │  validate n ≥ 1                                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  resolve_weights(policy, participants)   ──► validation error?      │
//! │       │                                       (propagated as-is)    │
//! │       ▼                                                             │
//! │  base_total = declared total │ Σorders (Order policy)               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  adjusted_total = base_total × (1 + tax/100)   [if tax enabled]     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  raw_i = weight_i / Σweights × adjusted_total                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  reconcile to whole units              [if rounding enabled]        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  AllocationResult (participant order)                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stateless per call: same input, same output. The only "state machine"
//! is the caller re-invoking the engine after each edit and discarding
//! the previous result.

use crate::error::{SplitError, SplitResult};
use crate::resolver::resolve_weights;
use crate::rounding;
use crate::types::{AllocationResult, BillInput, Policy};

// =============================================================================
// Compute Split
// =============================================================================

/// Splits the bill described by `input` into per-person amounts.
///
/// The first applicable validation error is returned and no partial
/// computation is performed. Every success value satisfies the sum
/// invariant: amounts total `adjusted_total` exactly (to float
/// precision), or `round(adjusted_total)` when rounding is enabled.
///
/// ## Example
/// ```rust
/// use tabsplit_core::{compute_split, BillInput, Participant, Policy};
///
/// // Orders of 30 and 70 with a 10% service charge
/// let input = BillInput::new(
///     Policy::Order,
///     vec![Participant::named("Ana", 30.0), Participant::named("Ben", 70.0)],
/// )
/// .with_tax(10.0);
///
/// let result = compute_split(&input).unwrap();
/// assert_eq!(result.amounts, vec![33.0, 77.0]);
/// assert_eq!(result.total(), 110.0);
/// ```
pub fn compute_split(input: &BillInput) -> SplitResult<AllocationResult> {
    let n = input.participants.len();
    if n < 1 {
        return Err(SplitError::InvalidParticipantCount);
    }

    let resolved = resolve_weights(input.policy, &input.participants)?;

    // Order derives its total from the subtotals; everyone else declares
    // one. A missing declared total is coerced to 0 at the boundary.
    let base_total = match resolved.derived_total {
        Some(derived) => derived,
        None => input.declared_total.unwrap_or(0.0),
    };

    // tax_percent is deliberately not range-validated.
    let adjusted_total = if input.tax_enabled {
        base_total * (1.0 + input.tax_percent / 100.0)
    } else {
        base_total
    };

    let raw: Vec<f64> = match input.policy {
        Policy::Equal => vec![adjusted_total / n as f64; n],
        _ => {
            // Resolver guarantees Σweights is 100 (Percentage) or > 0
            // (Share/Order), so the division is safe.
            let weight_sum: f64 = resolved.weights.iter().sum();
            resolved
                .weights
                .iter()
                .map(|w| w / weight_sum * adjusted_total)
                .collect()
        }
    };

    let (amounts, rounded) = if input.rounding_enabled {
        (rounding::reconcile(&raw, adjusted_total), true)
    } else {
        (raw, false)
    };

    Ok(AllocationResult {
        amounts,
        adjusted_total,
        rounded,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
