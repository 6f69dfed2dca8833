//! Primary-name + alias-chain helpers.
//!
//! Thin wrappers over [`EnvVariable`](crate::EnvVariable) for call sites that
//! only need a one-off read. Empty values count as unset; [`env_optional`]
//! additionally treats a whitespace-only value as unset.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::Result;
use crate::source::{EnvSource, ProcessEnv};
use crate::variable::{bool_var, parse_var, string_var};

/// Read the primary name or the first set alias; `default` when none is set.
pub fn env_or<F>(primary: &str, aliases: &[&str], default: F) -> Result<String>
where
    F: FnOnce() -> String,
{
    Ok(env_optional(primary, aliases)?.unwrap_or_else(default))
}

/// Like [`env_or`] but returns `None` when unset; the value is trimmed and a
/// whitespace-only value reads as `None`.
pub fn env_optional(primary: &str, aliases: &[&str]) -> Result<Option<String>> {
    env_optional_from(&ProcessEnv, primary, aliases)
}

pub fn env_optional_from<S: EnvSource>(
    source: &S,
    primary: &str,
    aliases: &[&str],
) -> Result<Option<String>> {
    let var = string_var(primary, "").aliases(aliases.iter().copied());
    Ok(var
        .raw_from(source)?
        .map(|(_, raw)| raw.trim().to_string())
        .filter(|v| !v.is_empty()))
}

/// Boolean with the default token sets (1/true/yes/on, 0/false/no/off ...).
pub fn env_bool(primary: &str, aliases: &[&str], default: bool) -> Result<bool> {
    env_bool_from(&ProcessEnv, primary, aliases, default)
}

pub fn env_bool_from<S: EnvSource>(
    source: &S,
    primary: &str,
    aliases: &[&str],
    default: bool,
) -> Result<bool> {
    bool_var(primary, default)
        .aliases(aliases.iter().copied())
        .value_from(source)
}

/// Any `FromStr` type.
pub fn env_parse<T>(primary: &str, aliases: &[&str], default: T) -> Result<T>
where
    T: FromStr + Clone,
    T::Err: Display,
{
    parse_var(primary, default)
        .aliases(aliases.iter().copied())
        .value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnvError;
    use crate::source::{MapEnv, ScopedEnvGuard};

    #[test]
    fn test_env_optional_trims_and_follows_aliases() {
        let env = MapEnv::new().with("OLD_NAME", "  value ");
        assert_eq!(
            env_optional_from(&env, "NEW_NAME", &["OLD_NAME"]).unwrap(),
            Some("value".to_string())
        );
        assert_eq!(env_optional_from(&env, "OTHER", &[]).unwrap(), None);

        let blank = MapEnv::new().with("BLANK", "  ");
        assert_eq!(env_optional_from(&blank, "BLANK", &[]).unwrap(), None);
    }

    #[test]
    fn test_env_bool_strict() {
        let env = MapEnv::new().with("ON", "Yes").with("BAD", "sometimes");
        assert!(env_bool_from(&env, "ON", &[], false).unwrap());
        assert!(env_bool_from(&env, "UNSET", &[], true).unwrap());
        let err = env_bool_from(&env, "BAD", &[], false).unwrap_err();
        assert!(matches!(err, EnvError::Convert { .. }));
    }

    #[test]
    fn test_process_env_helpers() {
        let _g = ScopedEnvGuard::set("TYPENV_LOADER_TEST_PORT", " 9000 ");
        assert_eq!(
            env_parse("TYPENV_LOADER_TEST_PORT", &[], 80_u16).unwrap(),
            9000
        );
        assert_eq!(
            env_or("TYPENV_LOADER_TEST_UNSET", &["TYPENV_LOADER_TEST_PORT"], String::new).unwrap(),
            "9000"
        );
        assert_eq!(
            env_or("TYPENV_LOADER_TEST_UNSET", &[], || "fallback".to_string()).unwrap(),
            "fallback"
        );
    }
}
