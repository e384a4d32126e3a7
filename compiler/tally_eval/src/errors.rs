//! Error types for the value store.
//!
//! Only `StoreError` interrupts the caller. Unbound reads and range
//! rejections are recovered where they happen: reads fall back to `0.0` and a
//! rejected write comes back as a `RangeViolation` inside its `WriteOutcome`.

use std::fmt;

use tally_ir::{ArrayShape, Bounds};

/// Result of a store operation that can fail hard.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a store operation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// Access with an index outside the declared dimensions.
    #[error("index {index:?} out of range for `{name}{shape}`")]
    IndexOutOfRange {
        name: String,
        index: Vec<usize>,
        shape: ArrayShape,
    },

    /// Tag query against a name bound in neither array namespace.
    ///
    /// The message is the one printed to the diagnostic channel.
    #[error("Array '{name}' not found.")]
    NameNotFound { name: String },

    /// Declaration with `min > max` (or NaN) under `DeclarePolicy::Strict`.
    #[error("`{name}` declared with unordered bounds {bounds}")]
    InvalidBounds { name: String, bounds: Bounds },

    /// Declaration whose cell count does not fit in `usize`.
    #[error("`{name}{shape}` has too many cells")]
    TooLarge { name: String, shape: ArrayShape },
}

impl StoreError {
    pub(crate) fn index_out_of_range(name: &str, index: &[usize], shape: ArrayShape) -> Self {
        StoreError::IndexOutOfRange {
            name: name.to_owned(),
            index: index.to_vec(),
            shape,
        }
    }

    pub(crate) fn name_not_found(name: &str) -> Self {
        StoreError::NameNotFound {
            name: name.to_owned(),
        }
    }
}

/// A write rejected because its value fell outside the array's bounds.
///
/// The cell's value is left as it was; its tag is still replaced.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeViolation {
    pub name: String,
    pub bounds: Bounds,
    pub value: f64,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} range is MIN={} and MAX={}. You have assigned={}.",
            self.name,
            Fixed2(self.bounds.min),
            Fixed2(self.bounds.max),
            Fixed2(self.value)
        )
    }
}

/// A number printed with two decimals, spelling non-finite values as
/// `nan`, `-nan`, `inf` and `-inf`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Fixed2(pub(crate) f64);

impl fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let sign = if value.is_sign_negative() { "-" } else { "" };
        if value.is_nan() {
            write!(f, "{sign}nan")
        } else if value.is_infinite() {
            write!(f, "{sign}inf")
        } else {
            write!(f, "{value:.2}")
        }
    }
}
