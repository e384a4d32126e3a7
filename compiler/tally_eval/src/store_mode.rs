//! Store policies.
//!
//! Two knobs select between the legacy behavior programs were written
//! against and the stricter behavior a new evaluator can opt into. Both are
//! plain enums consulted through policy methods, set once on the
//! `EnvironmentBuilder`.

/// How an array write's payload is interpreted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WriteMode {
    /// A payload of exactly `0.0` means "no value supplied": the cell value is
    /// kept and only the tag is replaced.
    #[default]
    Legacy,
    /// Only a missing payload (`None`) skips the value. `Some(0.0)` is range
    /// checked and stored like any other value.
    Explicit,
}

impl WriteMode {
    /// Whether `0.0` is indistinguishable from a missing payload.
    #[inline]
    pub fn zero_is_absent(self) -> bool {
        matches!(self, Self::Legacy)
    }
}

/// How array declarations are validated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeclarePolicy {
    /// Accept every declaration, including empty arrays and unordered bounds.
    #[default]
    Permissive,
    /// Reject declarations whose bounds are unordered or NaN.
    Strict,
}

impl DeclarePolicy {
    /// Whether declarations must carry ordered bounds.
    #[inline]
    pub fn requires_ordered_bounds(self) -> bool {
        matches!(self, Self::Strict)
    }
}
