use std::collections::HashMap;
use std::env as stdenv;
use std::ffi::OsString;

/// Read-only view of the process environment used by the interpreter.
///
/// The view consists of:
/// - `vars`: overrides that take precedence over the process environment. A `None`
///   value hides a variable that the process environment defines.
/// - `inherit`: whether lookups that miss `vars` fall through to the live process
///   environment.
///
/// Nothing is snapshotted: every lookup that falls through re-reads the process
/// environment, so a `PATH` change is visible to the next command.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Variables that shadow the process environment (e.g., PATH in tests).
    pub vars: HashMap<String, Option<OsString>>,
    /// Fall back to `std::env` when a key is not in `vars`.
    pub inherit: bool,
}

impl Environment {
    /// A view backed by the live process environment.
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
            inherit: true,
        }
    }

    /// A view that only sees variables set through [`Environment::set_var`].
    pub fn isolated() -> Self {
        Self {
            vars: HashMap::new(),
            inherit: false,
        }
    }

    /// Get the value of an environment variable.
    ///
    /// Looks up the key in `self.vars` first, falling back to `std::env::var_os`
    /// when the view inherits from the process.
    pub fn get_var(&self, key: &str) -> Option<OsString> {
        match self.vars.get(key) {
            Some(value) => value.clone(),
            None if self.inherit => stdenv::var_os(key),
            None => None,
        }
    }

    /// Set or override an environment variable.
    pub fn set_var(&mut self, key: impl Into<String>, val: impl Into<OsString>) {
        self.vars.insert(key.into(), Some(val.into()));
    }

    /// Hide a variable, even if the process environment defines it.
    pub fn remove_var(&mut self, key: impl Into<String>) {
        self.vars.insert(key.into(), None);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
