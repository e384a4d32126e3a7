//! Admissible value range of an array.

use std::fmt;

/// Inclusive `[min, max]` range every value written to an array must satisfy.
///
/// One pair per array binding. Cells never carry their own bounds.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Create a bound pair. Ordering is not checked here.
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Bounds { min, max }
    }

    /// Whether `value` lies inside the inclusive range.
    ///
    /// Unordered bounds (`min > max`) contain nothing; NaN is never contained.
    #[inline]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether `min <= max` with neither side NaN.
    #[inline]
    pub fn is_ordered(self) -> bool {
        self.min <= self.max
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.min, self.max)
    }
}
