//! Configuration structs loaded from the environment.

use super::env_keys::observability as obv_keys;
use super::loader::{env_bool_from, env_optional_from};
use crate::error::Result;
use crate::source::{EnvSource, ProcessEnv};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Only warnings and errors
    pub quiet: bool,
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output
    pub log_json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            log_level: obv_keys::DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source<S: EnvSource>(source: &S) -> Result<Self> {
        Ok(Self {
            quiet: env_bool_from(source, obv_keys::TYPENV_QUIET, &[], false)?,
            log_level: env_optional_from(
                source,
                obv_keys::TYPENV_LOG_LEVEL,
                obv_keys::LOG_LEVEL_ALIASES,
            )?
            .unwrap_or_else(|| obv_keys::DEFAULT_LOG_LEVEL.to_string()),
            log_json: env_bool_from(source, obv_keys::TYPENV_LOG_JSON, &[], false)?,
        })
    }

    /// The `EnvFilter` directive to use when `RUST_LOG` is not set.
    pub fn filter_directive(&self) -> &str {
        if self.quiet {
            "warn"
        } else {
            &self.log_level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MapEnv;

    #[test]
    fn test_defaults_when_unset() {
        let cfg = ObservabilityConfig::from_source(&MapEnv::new()).unwrap();
        assert_eq!(cfg, ObservabilityConfig::default());
        assert_eq!(cfg.filter_directive(), "warn");
    }

    #[test]
    fn test_reads_keys_and_alias() {
        let env = MapEnv::new()
            .with("LOG_LEVEL", "typenv_core=debug")
            .with("TYPENV_LOG_JSON", "1");
        let cfg = ObservabilityConfig::from_source(&env).unwrap();
        assert_eq!(cfg.log_level, "typenv_core=debug");
        assert!(cfg.log_json);
        assert_eq!(cfg.filter_directive(), "typenv_core=debug");
    }

    #[test]
    fn test_quiet_overrides_level() {
        let env = MapEnv::new()
            .with("TYPENV_LOG_LEVEL", "trace")
            .with("TYPENV_QUIET", "true");
        let cfg = ObservabilityConfig::from_source(&env).unwrap();
        assert_eq!(cfg.filter_directive(), "warn");
    }

    #[test]
    fn test_invalid_flag_is_error() {
        let env = MapEnv::new().with("TYPENV_LOG_JSON", "sure");
        assert!(ObservabilityConfig::from_source(&env).is_err());
    }
}
