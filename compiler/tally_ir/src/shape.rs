//! Declared array dimensions.

use std::fmt;

/// Fixed dimensions of an array binding.
///
/// Cells are stored flat in row-major order; the shape maps source indices to
/// flat offsets and is the only place bounds checking happens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrayShape {
    /// `name[len]`
    OneD { len: usize },
    /// `name[rows][cols]`
    TwoD { rows: usize, cols: usize },
}

impl ArrayShape {
    /// Number of indices an access must supply.
    #[inline]
    pub const fn rank(self) -> usize {
        match self {
            Self::OneD { .. } => 1,
            Self::TwoD { .. } => 2,
        }
    }

    /// Total number of cells, or `None` if `rows * cols` overflows.
    #[inline]
    pub fn cell_count(self) -> Option<usize> {
        match self {
            Self::OneD { len } => Some(len),
            Self::TwoD { rows, cols } => rows.checked_mul(cols),
        }
    }

    /// Row-major flat offset for `indices`.
    ///
    /// Returns `None` if the number of indices does not match the rank or any
    /// index is outside its dimension.
    pub fn flat_index(self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.rank() {
            return None;
        }
        match (self, indices) {
            (Self::OneD { len }, &[i]) if i < len => Some(i),
            (Self::TwoD { rows, cols }, &[i, j]) if i < rows && j < cols => {
                i.checked_mul(cols)?.checked_add(j)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ArrayShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneD { len } => write!(f, "[{len}]"),
            Self::TwoD { rows, cols } => write!(f, "[{rows}][{cols}]"),
        }
    }
}
