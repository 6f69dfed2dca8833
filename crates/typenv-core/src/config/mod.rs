//! typenv's own configuration.
//!
//! The library reads a handful of variables for itself (log level, JSON
//! logs, quiet mode). They go through the same accessors it exports.
//!
//! - `env_keys`: key constants
//! - `loader`: env_or, env_optional, env_bool, env_parse
//! - `schema`: ObservabilityConfig

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, env_parse};
pub use schema::ObservabilityConfig;
