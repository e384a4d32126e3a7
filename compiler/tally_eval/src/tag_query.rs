//! Tag-filtered traversal of an array.

use std::iter::FusedIterator;
use std::slice;

use crate::cell::Cell;

/// Values of the cells whose tag equals a query tag, in storage order.
///
/// Storage order is index order for 1-D arrays and row-major order for 2-D
/// arrays. The iterator borrows the store, so it always reflects the state
/// at the time of the query and cannot outlive the next mutation.
#[derive(Clone, Debug)]
pub struct TagMatches<'a> {
    cells: slice::Iter<'a, Cell>,
    tag: &'a str,
}

impl<'a> TagMatches<'a> {
    pub(crate) fn new(cells: &'a [Cell], tag: &'a str) -> Self {
        TagMatches {
            cells: cells.iter(),
            tag,
        }
    }

    /// The tag being matched.
    pub fn tag(&self) -> &'a str {
        self.tag
    }
}

impl Iterator for TagMatches<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let tag = self.tag;
        self.cells.find(|cell| cell.has_tag(tag)).map(Cell::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.cells.size_hint().1)
    }
}

impl FusedIterator for TagMatches<'_> {}
