//! Environment table abstraction.
//!
//! Data sources never read `std::env` directly. They go through the
//! [`EnvTable`] trait so that production code uses the real process
//! environment while tests inject a fixed table, without mutating global
//! process state.

use std::collections::HashMap;
use std::env;
use std::fmt;

/// Read-only view of an environment-variable table.
///
/// Implementations must be thread-safe. An unset variable and a variable set
/// to the empty string are both reported as-is; callers decide how to treat
/// emptiness.
pub trait EnvTable: Send + Sync + fmt::Debug {
    /// Look up a variable by name.
    fn get(&self, name: &str) -> Option<String>;
}

/// [`EnvTable`] backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Create a new ProcessEnv instance
    pub fn new() -> Self {
        Self
    }
}

impl EnvTable for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// In-memory [`EnvTable`] with a fixed set of variables.
///
/// Used by tests to exercise resolution deterministically.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the table
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvTable for StaticEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
