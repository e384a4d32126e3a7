//! Tally IR - Shared vocabulary types for the Tally runtime.
//!
//! This crate contains the small, dependency-free types shared between the
//! evaluator and the value store:
//! - `BinaryOp` for arithmetic dispatch
//! - `ArrayShape` for declared array dimensions
//! - `Bounds` for the admissible range attached to an array
//!
//! # Serialization
//!
//! With the `cache` feature every type derives `serde::Serialize` and
//! `serde::Deserialize`, so declarations can be snapshotted by tooling.

mod bounds;
mod operators;
mod shape;

pub use bounds::Bounds;
pub use operators::BinaryOp;
pub use shape::ArrayShape;
