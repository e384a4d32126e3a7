//! Tally Eval - Runtime value store for the Tally interpreter.
//!
//! The evaluator (parser and tree walker live elsewhere) calls into this crate
//! every time a program reads or writes a variable or evaluates arithmetic.
//!
//! # Architecture
//!
//! - `Environment`: three independent namespaces (scalars, 1-D arrays, 2-D arrays)
//! - `validate_write`: range check shared by 1-D and 2-D array writes
//! - `evaluate_binary` / `apply`: stateless arithmetic dispatch
//! - `TagMatches`: lazy tag-filtered traversal of one array
//! - `PrintHandler`: destination for user-visible diagnostics
//!
//! # Re-exports
//!
//! `BinaryOp`, `ArrayShape` and `Bounds` are re-exported from `tally_ir`.

mod cell;
mod environment;
pub mod errors;
mod operators;
mod print_handler;
mod range;
mod shared;
mod store_mode;
mod tag_query;

#[cfg(test)]
mod tests;

use std::sync::Once;

pub use tally_ir::{ArrayShape, BinaryOp, Bounds};

pub use cell::Cell;
pub use environment::{Environment, EnvironmentBuilder};
pub use errors::{RangeViolation, StoreError, StoreResult};
pub use operators::{apply, evaluate_binary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandler,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use range::{validate_write, WriteDecision, WriteOutcome};
pub use shared::SharedEnvironment;
pub use store_mode::{DeclarePolicy, WriteMode};
pub use tag_query::TagMatches;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tally_eval=debug` or `RUST_LOG=tally_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
