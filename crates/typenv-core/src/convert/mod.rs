//! Converters: raw string → typed value.
//!
//! - `StringConverter`: the value verbatim
//! - `ParseConverter<T>`: any `FromStr` type (integers, floats, custom types)
//! - `BoolConverter`: configurable truthy / falsy tokens
//! - `CollectionConverter`, `MapConverter`: delimited lists and key/value pairs
//! - `DateTimeConverter`: dates, times and timestamps via chrono
//! - `FnConverter`: a caller-supplied closure

mod boolean;
mod collection;
mod datetime;

pub use boolean::{BoolConverter, DEFAULT_FALSY, DEFAULT_TRUTHY};
pub use collection::{CollectionConverter, Delimiter, MapConverter};
pub use datetime::{DateTimeConverter, DateTimeValue};

use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::ConvertError;

/// Turns the raw value of a present, non-empty variable into `Output`.
pub trait Converter {
    type Output;

    fn convert(&self, raw: &str) -> Result<Self::Output, ConvertError>;
}

impl<C: Converter + ?Sized> Converter for &C {
    type Output = C::Output;

    fn convert(&self, raw: &str) -> Result<Self::Output, ConvertError> {
        (**self).convert(raw)
    }
}

impl<C: Converter + ?Sized> Converter for Box<C> {
    type Output = C::Output;

    fn convert(&self, raw: &str) -> Result<Self::Output, ConvertError> {
        (**self).convert(raw)
    }
}

/// Returns the value unchanged (surrounding whitespace included).
#[derive(Debug, Clone, Copy, Default)]
pub struct StringConverter;

impl Converter for StringConverter {
    type Output = String;

    fn convert(&self, raw: &str) -> Result<String, ConvertError> {
        Ok(raw.to_string())
    }
}

/// Trims the value and parses it with `FromStr`.
///
/// `"42"` as `i64` is `42`; `"1234"` as `f64` is `1234.0`; `"1234.0"` as
/// `i64` and `"12 34"` as anything numeric fail.
pub struct ParseConverter<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> ParseConverter<T> {
    pub fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Default for ParseConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ParseConverter<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for ParseConverter<T> {}

impl<T> std::fmt::Debug for ParseConverter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParseConverter<{}>", type_label::<T>())
    }
}

impl<T> Converter for ParseConverter<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Output = T;

    fn convert(&self, raw: &str) -> Result<T, ConvertError> {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConvertError::new(type_label::<T>(), raw, e.to_string()))
    }
}

/// Wraps a closure `Fn(&str) -> Result<T, E>` as a converter.
pub struct FnConverter<F, T, E> {
    f: F,
    target: String,
    _sig: PhantomData<fn() -> (T, E)>,
}

/// Build a converter from a closure; `target` names the type in errors.
pub fn from_fn<F, T, E>(target: impl Into<String>, f: F) -> FnConverter<F, T, E>
where
    F: Fn(&str) -> Result<T, E>,
    E: Display,
{
    FnConverter {
        f,
        target: target.into(),
        _sig: PhantomData,
    }
}

impl<F: Clone, T, E> Clone for FnConverter<F, T, E> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            target: self.target.clone(),
            _sig: PhantomData,
        }
    }
}

impl<F, T, E> std::fmt::Debug for FnConverter<F, T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnConverter")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl<F, T, E> Converter for FnConverter<F, T, E>
where
    F: Fn(&str) -> Result<T, E>,
    E: Display,
{
    type Output = T;

    fn convert(&self, raw: &str) -> Result<T, ConvertError> {
        (self.f)(raw).map_err(|e| ConvertError::new(self.target.clone(), raw, e.to_string()))
    }
}

/// Last path segment of a type name: `alloc::string::String` → `String`.
pub(crate) fn type_label<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    // Generic names such as `Vec<i64>` keep their arguments.
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
