//! Array cells.

/// One addressable slot of an array: its current value and classification tag.
///
/// A freshly declared cell holds `0.0` and the empty tag. The admissible range
/// belongs to the owning array, not to the cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    pub(crate) value: f64,
    pub(crate) tag: String,
}

impl Cell {
    /// Current value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current tag (empty if never tagged).
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether the tag equals `tag` exactly.
    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Replace the tag, reusing the existing allocation.
    #[inline]
    pub(crate) fn retag(&mut self, tag: &str) {
        self.tag.clear();
        self.tag.push_str(tag);
    }
}
