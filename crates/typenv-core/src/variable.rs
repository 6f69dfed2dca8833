//! Typed environment variable accessor.
//!
//! An [`EnvVariable`] is a name (plus optional aliases), a default and a
//! converter. Reading it looks up the name, then each alias in order; the
//! first value that is set and not empty goes through the converter. When
//! nothing is found the default is returned as-is, without conversion.
//! A whitespace-only value counts as present: strings keep it verbatim,
//! other converters reject it.
//!
//! ```
//! use typenv_core::{bool_var, list_var, MapEnv};
//!
//! let env = MapEnv::new().with("APP_HOSTS", "a, b ,c");
//! let hosts = list_var("APP_HOSTS", vec![]).value_from(&env).unwrap();
//! assert_eq!(hosts, vec!["a", "b", "c"]);
//!
//! let debug = bool_var("APP_DEBUG", false).value_from(&env).unwrap();
//! assert!(!debug);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::convert::{
    from_fn, BoolConverter, CollectionConverter, Converter, DateTimeConverter, DateTimeValue,
    FnConverter, MapConverter, ParseConverter, StringConverter,
};
use crate::error::{EnvError, Result};
use crate::source::{EnvSource, ProcessEnv};

/// A named, typed environment variable with a default.
pub struct EnvVariable<C: Converter> {
    name: String,
    aliases: Vec<String>,
    default: C::Output,
    converter: C,
}

impl<C: Converter> EnvVariable<C> {
    pub fn new(name: impl Into<String>, default: C::Output, converter: C) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            default,
            converter,
        }
    }

    /// Fallback name consulted when the primary name (and earlier aliases)
    /// are unset or empty.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Swap the converter, keeping name, aliases and default.
    pub fn converter(mut self, converter: C) -> Self {
        self.converter = converter;
        self
    }

    /// Reconfigure the converter in place, e.g.
    /// `list_var(..).map_converter(|c| c.delimiter(';'))`.
    pub fn map_converter<F>(mut self, f: F) -> Self
    where
        F: FnOnce(C) -> C,
    {
        self.converter = f(self.converter);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias_names(&self) -> &[String] {
        &self.aliases
    }

    pub fn default_value(&self) -> &C::Output {
        &self.default
    }

    /// First `(name, raw value)` that is set and not empty.
    pub fn raw_from<S: EnvSource>(&self, source: &S) -> Result<Option<(&str, String)>> {
        for name in std::iter::once(&self.name).chain(self.aliases.iter()) {
            if let Some(raw) = source.var(name)? {
                if !raw.is_empty() {
                    return Ok(Some((name.as_str(), raw)));
                }
            }
        }
        Ok(None)
    }

    pub fn is_set_in<S: EnvSource>(&self, source: &S) -> Result<bool> {
        Ok(self.raw_from(source)?.is_some())
    }

    /// Whether the process environment holds a usable value.
    pub fn is_set(&self) -> Result<bool> {
        self.is_set_in(&ProcessEnv)
    }

    /// Single lookup + conversion: `(name read, converted value)`, or `None`
    /// when unset or empty. The default is not consulted.
    pub fn resolve_from<S: EnvSource>(&self, source: &S) -> Result<Option<(&str, C::Output)>> {
        let Some((name, raw)) = self.raw_from(source)? else {
            return Ok(None);
        };
        match self.converter.convert(&raw) {
            Ok(v) => {
                tracing::debug!(name = %name, "env var converted");
                Ok(Some((name, v)))
            }
            Err(err) => Err(EnvError::Convert {
                name: name.to_string(),
                value: raw,
                source: err,
            }),
        }
    }

    /// Read from `source`; default when unset or empty.
    pub fn value_from<S: EnvSource>(&self, source: &S) -> Result<C::Output>
    where
        C::Output: Clone,
    {
        match self.resolve_from(source)? {
            Some((_, v)) => Ok(v),
            None => {
                tracing::debug!(name = %self.name, "env var unset or empty, using default");
                Ok(self.default.clone())
            }
        }
    }

    /// Read from the live process environment.
    pub fn value(&self) -> Result<C::Output>
    where
        C::Output: Clone,
    {
        self.value_from(&ProcessEnv)
    }
}

impl<C> Clone for EnvVariable<C>
where
    C: Converter + Clone,
    C::Output: Clone,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            aliases: self.aliases.clone(),
            default: self.default.clone(),
            converter: self.converter.clone(),
        }
    }
}

impl<C> fmt::Debug for EnvVariable<C>
where
    C: Converter + fmt::Debug,
    C::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVariable")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("default", &self.default)
            .field("converter", &self.converter)
            .finish()
    }
}

// ─── constructors per target type ──────────────────────────────────────────

/// Raw string, untrimmed.
pub fn string_var(
    name: impl Into<String>,
    default: impl Into<String>,
) -> EnvVariable<StringConverter> {
    EnvVariable::new(name, default.into(), StringConverter)
}

/// Any integer type.
pub fn integer_var<T>(name: impl Into<String>, default: T) -> EnvVariable<ParseConverter<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    EnvVariable::new(name, default, ParseConverter::new())
}

/// Any float type; integral input such as `"1234"` is accepted.
pub fn float_var<T>(name: impl Into<String>, default: T) -> EnvVariable<ParseConverter<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    EnvVariable::new(name, default, ParseConverter::new())
}

/// Any `FromStr` type (paths, addresses, enums with a parser ...).
pub fn parse_var<T>(name: impl Into<String>, default: T) -> EnvVariable<ParseConverter<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    EnvVariable::new(name, default, ParseConverter::new())
}

pub fn bool_var(name: impl Into<String>, default: bool) -> EnvVariable<BoolConverter> {
    EnvVariable::new(name, default, BoolConverter::new())
}

/// Comma-separated strings.
pub fn list_var(
    name: impl Into<String>,
    default: Vec<String>,
) -> EnvVariable<CollectionConverter> {
    EnvVariable::new(name, default, CollectionConverter::new())
}

/// Comma-separated elements converted by `item`.
pub fn list_var_of<C: Converter>(
    name: impl Into<String>,
    default: Vec<C::Output>,
    item: C,
) -> EnvVariable<CollectionConverter<C>> {
    EnvVariable::new(name, default, CollectionConverter::new().item(item))
}

/// `key:value` pairs separated by commas.
pub fn map_var(
    name: impl Into<String>,
    default: BTreeMap<String, String>,
) -> EnvVariable<MapConverter> {
    EnvVariable::new(name, default, MapConverter::new())
}

pub fn datetime_var(
    name: impl Into<String>,
    default: DateTimeValue,
) -> EnvVariable<DateTimeConverter> {
    EnvVariable::new(name, default, DateTimeConverter::new())
}

/// Caller-supplied conversion; `target` names the type in error messages.
pub fn custom_var<F, T, E>(
    name: impl Into<String>,
    default: T,
    target: impl Into<String>,
    f: F,
) -> EnvVariable<FnConverter<F, T, E>>
where
    F: Fn(&str) -> std::result::Result<T, E>,
    E: fmt::Display,
{
    EnvVariable::new(name, default, from_fn(target, f))
}
