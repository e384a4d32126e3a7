//! Crate-level tests that exercise several modules at once.
