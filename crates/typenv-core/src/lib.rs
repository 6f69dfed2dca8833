//! Typed access to environment variables with default fallback.
//!
//! Look up a name, run the raw string through a converter, return the typed
//! value, or return the caller's default untouched when the variable is unset
//! or empty. A value that is present but unparsable is an error, never
//! silently defaulted. Nothing is cached: every read consults the current
//! environment.

pub mod config;
pub mod convert;
pub mod error;
pub mod observability;
pub mod source;
pub mod variable;

pub use convert::{
    from_fn, BoolConverter, CollectionConverter, Converter, DateTimeConverter, DateTimeValue,
    Delimiter, FnConverter, MapConverter, ParseConverter, StringConverter,
};
pub use error::{ConvertError, EnvError, Result};
pub use source::{remove_env_var, set_env_var, EnvSource, MapEnv, ProcessEnv, ScopedEnvGuard};
pub use variable::{
    bool_var, custom_var, datetime_var, float_var, integer_var, list_var, list_var_of, map_var,
    parse_var, string_var, EnvVariable,
};
