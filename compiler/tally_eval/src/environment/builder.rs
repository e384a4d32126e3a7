//! Builder for `Environment`.

use rustc_hash::FxHashMap;

use super::Environment;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::store_mode::{DeclarePolicy, WriteMode};

/// Configures the policies and diagnostic destination of a new `Environment`.
#[derive(Debug, Default)]
pub struct EnvironmentBuilder {
    write_mode: WriteMode,
    declare_policy: DeclarePolicy,
    print_handler: Option<SharedPrintHandler>,
}

impl EnvironmentBuilder {
    /// Create a builder with legacy writes, permissive declarations and stdout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how array write payloads are interpreted.
    #[must_use]
    pub fn write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    /// Set how array declarations are validated.
    #[must_use]
    pub fn declare_policy(mut self, policy: DeclarePolicy) -> Self {
        self.declare_policy = policy;
        self
    }

    /// Set where diagnostics are written.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Build an empty environment.
    pub fn build(self) -> Environment {
        Environment {
            scalars: FxHashMap::default(),
            arrays_1d: FxHashMap::default(),
            arrays_2d: FxHashMap::default(),
            write_mode: self.write_mode,
            declare_policy: self.declare_policy,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
