//! Range validation for array writes.
//!
//! Shared by 1-D and 2-D writes. The decision only concerns the cell value:
//! the caller replaces the tag whatever the decision is.

use tally_ir::Bounds;

use crate::errors::RangeViolation;
use crate::store_mode::WriteMode;

/// What a write does to the cell value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WriteDecision {
    /// No value supplied; keep the current one.
    Skip,
    /// Value within bounds; store it.
    Accept(f64),
    /// Value outside bounds; keep the current one and report.
    Reject(f64),
}

/// Decide what a write of `payload` does to a cell of an array with `bounds`.
pub fn validate_write(bounds: Bounds, payload: Option<f64>, mode: WriteMode) -> WriteDecision {
    match payload {
        None => WriteDecision::Skip,
        Some(value) if value == 0.0 && mode.zero_is_absent() => WriteDecision::Skip,
        Some(value) if bounds.contains(value) => WriteDecision::Accept(value),
        Some(value) => WriteDecision::Reject(value),
    }
}

/// Result of an array write that did not fail hard.
#[derive(Clone, Debug, PartialEq)]
pub enum WriteOutcome {
    /// The value was stored and the tag replaced.
    Stored,
    /// No value was supplied; only the tag was replaced.
    Unchanged,
    /// The value was out of range; only the tag was replaced.
    Rejected(RangeViolation),
    /// The array is not declared; nothing happened.
    Unbound,
}

impl WriteOutcome {
    /// Whether the cell value was replaced.
    #[inline]
    pub fn stored(&self) -> bool {
        matches!(self, Self::Stored)
    }

    /// The range violation, if the value was rejected.
    pub fn violation(&self) -> Option<&RangeViolation> {
        match self {
            Self::Rejected(violation) => Some(violation),
            _ => None,
        }
    }
}
