//! The binding store.
//!
//! Three independent namespaces map names to bindings: scalars, 1-D arrays
//! and 2-D arrays. The same identifier may be bound in more than one of them;
//! keeping them apart is the evaluator's job.
//!
//! Scalars come into existence on first write. Arrays are declared with fixed
//! dimensions and an inclusive value range; re-declaring a name replaces the
//! previous binding outright. Reads of unbound names yield `0.0`.

use rustc_hash::FxHashMap;
use tally_ir::{ArrayShape, Bounds};
use tracing::{debug, trace};

use crate::cell::Cell;
use crate::errors::{Fixed2, RangeViolation, StoreError, StoreResult};
use crate::print_handler::SharedPrintHandler;
use crate::range::{validate_write, WriteDecision, WriteOutcome};
use crate::store_mode::{DeclarePolicy, WriteMode};
use crate::tag_query::TagMatches;

mod binding;
mod builder;

use binding::ArrayBinding;
pub use builder::EnvironmentBuilder;

/// Selects one of the two array namespaces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Rank {
    One,
    Two,
}

/// Runtime value store for one program run.
#[derive(Debug)]
pub struct Environment {
    scalars: FxHashMap<String, f64>,
    arrays_1d: FxHashMap<String, ArrayBinding>,
    arrays_2d: FxHashMap<String, ArrayBinding>,
    write_mode: WriteMode,
    declare_policy: DeclarePolicy,
    print_handler: SharedPrintHandler,
}

impl Environment {
    /// Create an empty store with the default policies, printing to stdout.
    pub fn new() -> Self {
        EnvironmentBuilder::new().build()
    }

    /// Start configuring a store.
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::new()
    }

    /// How array write payloads are interpreted.
    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// How array declarations are validated.
    pub fn declare_policy(&self) -> DeclarePolicy {
        self.declare_policy
    }

    /// Where diagnostics are written.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    // Scalars

    /// Store `value` under `name`, creating the binding if needed.
    pub fn set_scalar(&mut self, name: &str, value: f64) {
        trace!(scalar = name, value, "set scalar");
        if let Some(slot) = self.scalars.get_mut(name) {
            *slot = value;
        } else {
            self.scalars.insert(name.to_owned(), value);
        }
    }

    /// Value of scalar `name`, or `0.0` if it was never set.
    pub fn get_scalar(&self, name: &str) -> f64 {
        self.scalars.get(name).copied().unwrap_or(0.0)
    }

    // Declarations

    /// Declare (or re-declare) a 1-D array of `size` cells.
    ///
    /// Every cell starts at `0.0` with an empty tag. Writes must fall inside
    /// `[min, max]` to take effect.
    pub fn declare_array_1d(
        &mut self,
        name: &str,
        size: usize,
        min: f64,
        max: f64,
    ) -> StoreResult<()> {
        self.declare(
            Rank::One,
            name,
            ArrayShape::OneD { len: size },
            Bounds::new(min, max),
        )
    }

    /// Declare (or re-declare) a `rows` x `cols` 2-D array.
    pub fn declare_array_2d(
        &mut self,
        name: &str,
        rows: usize,
        cols: usize,
        min: f64,
        max: f64,
    ) -> StoreResult<()> {
        self.declare(
            Rank::Two,
            name,
            ArrayShape::TwoD { rows, cols },
            Bounds::new(min, max),
        )
    }

    fn declare(
        &mut self,
        rank: Rank,
        name: &str,
        shape: ArrayShape,
        bounds: Bounds,
    ) -> StoreResult<()> {
        if self.declare_policy.requires_ordered_bounds() && !bounds.is_ordered() {
            return Err(StoreError::InvalidBounds {
                name: name.to_owned(),
                bounds,
            });
        }
        let cell_count = shape.cell_count().ok_or_else(|| StoreError::TooLarge {
            name: name.to_owned(),
            shape,
        })?;

        debug!(array = name, %shape, %bounds, "declare array");
        let binding = ArrayBinding::new(shape, bounds, cell_count);
        let arrays = match rank {
            Rank::One => &mut self.arrays_1d,
            Rank::Two => &mut self.arrays_2d,
        };
        arrays.insert(name.to_owned(), binding);
        Ok(())
    }

    // Array writes

    /// Write `value` and `tag` to `name[index]`.
    ///
    /// The tag is replaced whenever the array exists and the index is valid,
    /// even if the value is skipped or rejected. See [`validate_write`] for
    /// when the value itself is stored. Writing to an undeclared array does
    /// nothing and reports [`WriteOutcome::Unbound`].
    pub fn set_array_1d(
        &mut self,
        name: &str,
        index: usize,
        value: impl Into<Option<f64>>,
        tag: &str,
    ) -> StoreResult<WriteOutcome> {
        self.write(Rank::One, name, &[index], value.into(), tag)
    }

    /// Write `value` and `tag` to `name[i][j]`. Same contract as
    /// [`set_array_1d`](Self::set_array_1d).
    pub fn set_array_2d(
        &mut self,
        name: &str,
        i: usize,
        j: usize,
        value: impl Into<Option<f64>>,
        tag: &str,
    ) -> StoreResult<WriteOutcome> {
        self.write(Rank::Two, name, &[i, j], value.into(), tag)
    }

    fn write(
        &mut self,
        rank: Rank,
        name: &str,
        index: &[usize],
        payload: Option<f64>,
        tag: &str,
    ) -> StoreResult<WriteOutcome> {
        let arrays = match rank {
            Rank::One => &mut self.arrays_1d,
            Rank::Two => &mut self.arrays_2d,
        };
        let Some(binding) = arrays.get_mut(name) else {
            trace!(array = name, "write to undeclared array ignored");
            return Ok(WriteOutcome::Unbound);
        };

        let (shape, bounds) = (binding.shape, binding.bounds);
        let cell = binding
            .cell_mut(index)
            .ok_or_else(|| StoreError::index_out_of_range(name, index, shape))?;

        let outcome = match validate_write(bounds, payload, self.write_mode) {
            WriteDecision::Skip => WriteOutcome::Unchanged,
            WriteDecision::Accept(value) => {
                cell.value = value;
                WriteOutcome::Stored
            }
            WriteDecision::Reject(value) => {
                debug!(array = name, value, %bounds, "array write out of range");
                let violation = RangeViolation {
                    name: name.to_owned(),
                    bounds,
                    value,
                };
                self.print_handler.println(&violation.to_string());
                WriteOutcome::Rejected(violation)
            }
        };
        cell.retag(tag);

        trace!(array = name, ?index, ?outcome, "array write");
        Ok(outcome)
    }

    // Array reads

    /// Value of `name[index]`, or `0.0` if the array is undeclared.
    pub fn get_array_1d(&self, name: &str, index: usize) -> StoreResult<f64> {
        Ok(self.cell_1d(name, index)?.map_or(0.0, Cell::value))
    }

    /// Value of `name[i][j]`, or `0.0` if the array is undeclared.
    pub fn get_array_2d(&self, name: &str, i: usize, j: usize) -> StoreResult<f64> {
        Ok(self.cell_2d(name, i, j)?.map_or(0.0, Cell::value))
    }

    /// Cell `name[index]`, or `None` if the array is undeclared.
    pub fn cell_1d(&self, name: &str, index: usize) -> StoreResult<Option<&Cell>> {
        self.cell(Rank::One, name, &[index])
    }

    /// Cell `name[i][j]`, or `None` if the array is undeclared.
    pub fn cell_2d(&self, name: &str, i: usize, j: usize) -> StoreResult<Option<&Cell>> {
        self.cell(Rank::Two, name, &[i, j])
    }

    fn cell(&self, rank: Rank, name: &str, index: &[usize]) -> StoreResult<Option<&Cell>> {
        let arrays = match rank {
            Rank::One => &self.arrays_1d,
            Rank::Two => &self.arrays_2d,
        };
        let Some(binding) = arrays.get(name) else {
            return Ok(None);
        };
        binding
            .cell(index)
            .map(Some)
            .ok_or_else(|| StoreError::index_out_of_range(name, index, binding.shape))
    }

    // Array metadata

    /// The array bound to `name`, checking 1-D before 2-D.
    fn array(&self, name: &str) -> Option<&ArrayBinding> {
        self.arrays_1d
            .get(name)
            .or_else(|| self.arrays_2d.get(name))
    }

    /// Declared bounds of array `name` (1-D namespace first).
    pub fn bounds(&self, name: &str) -> Option<Bounds> {
        self.array(name).map(|binding| binding.bounds)
    }

    /// Declared shape of array `name` (1-D namespace first).
    pub fn shape(&self, name: &str) -> Option<ArrayShape> {
        self.array(name).map(|binding| binding.shape)
    }

    // Tag queries

    /// Values of the cells of array `name` tagged exactly `tag`.
    ///
    /// 1-D arrays are scanned in index order, 2-D arrays in row-major order.
    /// If `name` is bound in both array namespaces the 1-D array wins.
    pub fn filter_by_tag<'a>(&'a self, name: &str, tag: &'a str) -> StoreResult<TagMatches<'a>> {
        trace!(array = name, tag, "tag query");
        let binding = self
            .array(name)
            .ok_or_else(|| StoreError::name_not_found(name))?;
        Ok(TagMatches::new(&binding.cells, tag))
    }

    /// Print the values matched by [`filter_by_tag`](Self::filter_by_tag), one
    /// per line with two decimals, and return how many were printed.
    ///
    /// An unknown array prints `Array '<name>' not found.` and returns
    /// [`StoreError::NameNotFound`].
    pub fn report_by_tag(&self, name: &str, tag: &str) -> StoreResult<usize> {
        match self.filter_by_tag(name, tag) {
            Ok(matches) => {
                let mut printed = 0;
                for value in matches {
                    self.print_handler.println(&Fixed2(value).to_string());
                    printed += 1;
                }
                Ok(printed)
            }
            Err(err) => {
                self.print_handler.println(&err.to_string());
                Err(err)
            }
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
