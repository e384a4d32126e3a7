//! Array bindings.

use tally_ir::{ArrayShape, Bounds};

use crate::cell::Cell;

/// A declared array: its shape, its bounds, and its cells in row-major order.
#[derive(Clone, Debug)]
pub(super) struct ArrayBinding {
    pub(super) shape: ArrayShape,
    pub(super) bounds: Bounds,
    pub(super) cells: Vec<Cell>,
}

impl ArrayBinding {
    /// Allocate `cell_count` default cells.
    pub(super) fn new(shape: ArrayShape, bounds: Bounds, cell_count: usize) -> Self {
        ArrayBinding {
            shape,
            bounds,
            cells: vec![Cell::default(); cell_count],
        }
    }

    #[inline]
    pub(super) fn cell(&self, index: &[usize]) -> Option<&Cell> {
        self.cells.get(self.shape.flat_index(index)?)
    }

    #[inline]
    pub(super) fn cell_mut(&mut self, index: &[usize]) -> Option<&mut Cell> {
        let offset = self.shape.flat_index(index)?;
        self.cells.get_mut(offset)
    }
}
