//! Environment variable key constants.

/// Logging
pub mod observability {
    pub const TYPENV_QUIET: &str = "TYPENV_QUIET";

    /// tracing `EnvFilter` directive, e.g. `info` or `typenv_core=debug`.
    /// `RUST_LOG` takes precedence when set.
    pub const TYPENV_LOG_LEVEL: &str = "TYPENV_LOG_LEVEL";
    pub const LOG_LEVEL_ALIASES: &[&str] = &["LOG_LEVEL"];

    pub const TYPENV_LOG_JSON: &str = "TYPENV_LOG_JSON";

    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}
