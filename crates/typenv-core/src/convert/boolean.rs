//! Booleans from configurable truthy / falsy token sets.

use super::Converter;
use crate::error::ConvertError;

pub const DEFAULT_TRUTHY: &[&str] = &["true", "t", "yes", "y", "on", "1"];
pub const DEFAULT_FALSY: &[&str] = &["false", "f", "no", "n", "off", "0"];

/// Case-insensitive token match after trimming.
///
/// Truthy tokens are checked first, so a token listed in both sets reads as
/// `true`. Anything outside both sets is a conversion error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolConverter {
    truthy: Vec<String>,
    falsy: Vec<String>,
}

impl Default for BoolConverter {
    fn default() -> Self {
        Self {
            truthy: DEFAULT_TRUTHY.iter().map(|s| s.to_string()).collect(),
            falsy: DEFAULT_FALSY.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BoolConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the truthy token set.
    pub fn truthy<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.truthy = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the falsy token set.
    pub fn falsy<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.falsy = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub fn truthy_tokens(&self) -> &[String] {
        &self.truthy
    }

    pub fn falsy_tokens(&self) -> &[String] {
        &self.falsy
    }
}

impl Converter for BoolConverter {
    type Output = bool;

    fn convert(&self, raw: &str) -> Result<bool, ConvertError> {
        let cleaned = raw.trim();
        if self.truthy.iter().any(|t| t.eq_ignore_ascii_case(cleaned)) {
            return Ok(true);
        }
        if self.falsy.iter().any(|t| t.eq_ignore_ascii_case(cleaned)) {
            return Ok(false);
        }
        Err(ConvertError::new(
            "bool",
            raw,
            format!(
                "expected one of [{}] or [{}]",
                self.truthy.join(", "),
                self.falsy.join(", ")
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_truthy() {
        let c = BoolConverter::new();
        for v in ["TRUE", "True", "true", "yes", "YES", "1", "  t", "on"] {
            assert!(c.convert(v).unwrap(), "{v} should be true");
        }
    }

    #[test]
    fn test_default_falsy() {
        let c = BoolConverter::new();
        for v in ["false", "   False   ", " false ", "0", "no", "NO", "off", "f"] {
            assert!(!c.convert(v).unwrap(), "{v} should be false");
        }
    }

    #[test]
    fn test_unknown_token_is_error() {
        let c = BoolConverter::new();
        let err = c.convert("maybe").unwrap_err();
        assert_eq!(err.target, "bool");
        assert_eq!(err.value, "maybe");
        assert!(c.convert("2").is_err());
        assert!(c.convert("truee").is_err());
    }

    #[test]
    fn test_custom_truthy_replaces_defaults() {
        let c = BoolConverter::new().truthy(["true", "1"]);
        assert!(c.convert("TRUE").unwrap());
        assert!(c.convert("1").unwrap());
        assert!(c.convert("t").is_err());
        assert!(c.convert("yes").is_err());
        // falsy set untouched
        assert!(!c.convert("no").unwrap());
    }

    #[test]
    fn test_custom_falsy_replaces_defaults() {
        let c = BoolConverter::new().falsy(["nope"]);
        assert!(!c.convert("Nope").unwrap());
        assert!(c.convert("0").is_err());
    }

    #[test]
    fn test_overlapping_token_reads_true() {
        let c = BoolConverter::new().truthy(["x"]).falsy(["x"]);
        assert!(c.convert("x").unwrap());
    }
}
