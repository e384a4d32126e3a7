//! Shared access to one environment from several evaluators.
//!
//! The store itself is single-threaded. Evaluators that must share it go
//! through this handle, which serializes every operation behind one
//! read-write lock.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::environment::Environment;

/// Cloneable, lock-guarded handle to an `Environment`.
pub struct SharedEnvironment(Arc<RwLock<Environment>>);

impl SharedEnvironment {
    /// Wrap an environment for shared use.
    pub fn new(env: Environment) -> Self {
        SharedEnvironment(Arc::new(RwLock::new(env)))
    }

    /// Read access. Concurrent readers are allowed.
    pub fn read(&self) -> RwLockReadGuard<'_, Environment> {
        self.0.read()
    }

    /// Exclusive access for declarations and writes.
    pub fn write(&self) -> RwLockWriteGuard<'_, Environment> {
        self.0.write()
    }
}

impl Clone for SharedEnvironment {
    fn clone(&self) -> Self {
        SharedEnvironment(Arc::clone(&self.0))
    }
}

impl fmt::Debug for SharedEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_read() {
            Some(env) => write!(f, "SharedEnvironment({:?})", &*env),
            None => f.write_str("SharedEnvironment(<locked>)"),
        }
    }
}
