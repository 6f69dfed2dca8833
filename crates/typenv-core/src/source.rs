//! Where raw values come from.
//!
//! [`ProcessEnv`] reads `std::env` on every call, so external changes to the
//! process environment are visible immediately. [`MapEnv`] is an in-memory
//! table for tests and for callers that already hold a snapshot.

use std::collections::BTreeMap;
use std::env::{self, VarError};

use crate::error::{EnvError, Result};

/// A read-only name → string lookup.
pub trait EnvSource {
    /// `Ok(None)` when the variable is unset.
    fn var(&self, name: &str) -> Result<Option<String>>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, name: &str) -> Result<Option<String>> {
        (**self).var(name)
    }
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Result<Option<String>> {
        match env::var(name) {
            Ok(v) => Ok(Some(v)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode {
                name: name.to_string(),
            }),
        }
    }
}

/// In-memory environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Result<Option<String>> {
        Ok(self.vars.get(name).cloned())
    }
}

// ─── process environment mutation ──────────────────────────────────────────
//
// All writes to the process environment go through these helpers so the
// `unsafe` stays in one place.
//
// SAFETY: callers must ensure no other thread reads or writes the
// environment concurrently (i.e. call before spawning threads, or in tests
// that use variable names private to the test).

/// Set a single environment variable.
#[allow(unsafe_code)]
pub fn set_env_var(key: &str, value: &str) {
    unsafe { env::set_var(key, value) };
}

/// Remove a single environment variable.
#[allow(unsafe_code)]
pub fn remove_env_var(key: &str) {
    unsafe { env::remove_var(key) };
}

/// RAII guard: sets a variable and restores the previous state on drop.
#[derive(Debug)]
pub struct ScopedEnvGuard {
    key: String,
    previous: Option<std::ffi::OsString>,
}

impl ScopedEnvGuard {
    /// Set `key` to `value` for the lifetime of the guard.
    pub fn set(key: impl Into<String>, value: &str) -> Self {
        let key = key.into();
        let previous = env::var_os(&key);
        set_env_var(&key, value);
        Self { key, previous }
    }

    /// Unset `key` for the lifetime of the guard.
    pub fn unset(key: impl Into<String>) -> Self {
        let key = key.into();
        let previous = env::var_os(&key);
        remove_env_var(&key);
        Self { key, previous }
    }
}

impl Drop for ScopedEnvGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        match self.previous.take() {
            Some(v) => unsafe { env::set_var(&self.key, v) },
            None => remove_env_var(&self.key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with("A", "1");
        assert_eq!(env.var("A").unwrap(), Some("1".to_string()));
        assert_eq!(env.var("B").unwrap(), None);
    }

    #[test]
    fn test_map_env_from_iter() {
        let env: MapEnv = [("A", "x"), ("B", "y")].into_iter().collect();
        assert_eq!(env.var("B").unwrap().as_deref(), Some("y"));
    }

    #[test]
    fn test_process_env_reads_live_state() {
        let key = "TYPENV_SOURCE_TEST_LIVE";
        assert_eq!(ProcessEnv.var(key).unwrap(), None);
        {
            let _g = ScopedEnvGuard::set(key, "first");
            assert_eq!(ProcessEnv.var(key).unwrap().as_deref(), Some("first"));
            set_env_var(key, "second");
            assert_eq!(ProcessEnv.var(key).unwrap().as_deref(), Some("second"));
        }
        assert_eq!(ProcessEnv.var(key).unwrap(), None);
    }

    #[test]
    fn test_scoped_guard_restores_previous_value() {
        let key = "TYPENV_SOURCE_TEST_RESTORE";
        set_env_var(key, "outer");
        {
            let _g = ScopedEnvGuard::unset(key);
            assert_eq!(ProcessEnv.var(key).unwrap(), None);
        }
        assert_eq!(ProcessEnv.var(key).unwrap().as_deref(), Some("outer"));
        remove_env_var(key);
    }

    #[cfg(unix)]
    #[test]
    fn test_process_env_not_unicode() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let key = "TYPENV_SOURCE_TEST_NOT_UNICODE";
        #[allow(unsafe_code)]
        unsafe {
            env::set_var(key, OsStr::from_bytes(&[0x66, 0x6f, 0x80]))
        };
        let err = ProcessEnv.var(key).unwrap_err();
        assert!(matches!(err, EnvError::NotUnicode { ref name } if name == key));
        remove_env_var(key);
    }
}
