//! # tabsplit-core: Pure Allocation Logic for Tabsplit
//!
//! This crate is the **heart** of Tabsplit. It contains the whole
//! bill-splitting computation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Tabsplit Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │            Presentation (CLI / web frontend)                  │  │
//! │  │   collect inputs ──► render amounts ──► offer auto-fix        │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │             ★ tabsplit-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │   ┌─────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐      │  │
//! │  │   │  types  │  │ resolver │  │  engine  │  │ rounding │      │  │
//! │  │   │ Policy  │  │ weights  │  │ compute_ │  │reconcile │      │  │
//! │  │   │ BillIn… │  │ auto-fix │  │ split    │  │          │      │  │
//! │  │   └─────────┘  └──────────┘  └──────────┘  └──────────┘      │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Policy, Participant, BillInput, AllocationResult)
//! - [`error`] - Validation error taxonomy
//! - [`resolver`] - Policy Resolver: weights from raw inputs, percentage repair
//! - [`engine`] - The allocation engine itself
//! - [`rounding`] - Whole-unit rounding and reconciliation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system, network, terminal access is FORBIDDEN here
//! 3. **Explicit Errors**: All failures are typed variants, never strings or panics
//! 4. **No Silent Repair**: Unbalanced percentages fail; fixing them is a
//!    user decision the caller forwards to [`auto_fix_percentages`]
//!
//! ## Example Usage
//!
//! ```rust
//! use tabsplit_core::{compute_split, BillInput, Participant, Policy};
//!
//! // Three people, 100 total, rounding on (the default)
//! let input = BillInput::new(
//!     Policy::Equal,
//!     vec![Participant::new(0.0); 3],
//! )
//! .with_total(100.0);
//!
//! let result = compute_split(&input).unwrap();
//!
//! // Last participant absorbs the rounding remainder
//! assert_eq!(result.amounts, vec![33.0, 33.0, 34.0]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod resolver;
pub mod rounding;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tabsplit_core::Policy` instead of
// `use tabsplit_core::types::Policy`

pub use engine::compute_split;
pub use error::{SplitError, SplitResult};
pub use resolver::{auto_fix_percentages, resolve_weights, ResolvedWeights};
pub use types::{AllocationResult, BillInput, Participant, Policy};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The sum percentage weights must reach before the engine will compute.
///
/// ## Why a constant?
/// The resolver, the repair action, and the tests all reason against the
/// same target; a stray `100.0` literal in one of them is a bug waiting
/// to happen.
pub const BALANCED_PERCENT_SUM: f64 = 100.0;

/// Absolute tolerance for the percentage-sum check.
///
/// Percentages arrive as `f64`, so three thirds of 100 sum to something
/// like 100.00000000000001. Anything further from 100 than this is a
/// genuine user error, not float noise.
pub const PERCENT_SUM_TOLERANCE: f64 = 1e-9;

/// Default tax surcharge percent offered by callers before the user
/// edits it.
pub const DEFAULT_TAX_PERCENT: f64 = 12.0;
