//! Delimited lists and key/value maps.
//!
//! Both converters accept one optional bracket pair around the whole value
//! (`[a, b]`, `(a, b)`, `{a, b}`), trim every element and skip empty ones.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use super::{Converter, StringConverter};
use crate::error::ConvertError;

const BRACKET_PAIRS: &[(char, char)] = &[('[', ']'), ('(', ')'), ('{', '}')];

/// How a value is split into elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Char(char),
    /// Any run of whitespace.
    Whitespace,
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Char(',')
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        Delimiter::Char(c)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Char(c) => write!(f, "{:?}", c),
            Delimiter::Whitespace => f.write_str("whitespace"),
        }
    }
}

fn strip_brackets(raw: &str) -> &str {
    let trimmed = raw.trim();
    for (open, close) in BRACKET_PAIRS {
        if let Some(inner) = trimmed
            .strip_prefix(*open)
            .and_then(|s| s.strip_suffix(*close))
        {
            return inner;
        }
    }
    trimmed
}

/// Trimmed, non-empty elements in order.
fn split_items(raw: &str, delimiter: Delimiter) -> Vec<&str> {
    let inner = strip_brackets(raw);
    let parts: Vec<&str> = match delimiter {
        Delimiter::Char(c) => inner.split(c).collect(),
        Delimiter::Whitespace => inner.split_whitespace().collect(),
    };
    parts
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Remove one pair of matching single or double quotes.
fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits a value into elements and converts each with an item converter.
///
/// The result is collected into `B`: a `Vec` keeps input order, a
/// `BTreeSet` / `HashSet` de-duplicates.
pub struct CollectionConverter<C = StringConverter, B = Vec<<C as Converter>::Output>>
where
    C: Converter,
{
    delimiter: Delimiter,
    item: C,
    _collect: PhantomData<fn() -> B>,
}

impl CollectionConverter {
    /// Comma-separated strings.
    pub fn new() -> Self {
        Self {
            delimiter: Delimiter::default(),
            item: StringConverter,
            _collect: PhantomData,
        }
    }
}

impl Default for CollectionConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Converter, B> CollectionConverter<C, B> {
    pub fn delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Convert each element with `item` instead of keeping strings.
    pub fn item<C2: Converter>(self, item: C2) -> CollectionConverter<C2, Vec<C2::Output>> {
        CollectionConverter {
            delimiter: self.delimiter,
            item,
            _collect: PhantomData,
        }
    }

    /// Collect into a different container.
    pub fn collect_into<B2: FromIterator<C::Output>>(self) -> CollectionConverter<C, B2> {
        CollectionConverter {
            delimiter: self.delimiter,
            item: self.item,
            _collect: PhantomData,
        }
    }
}

impl<C: Converter + Clone, B> Clone for CollectionConverter<C, B> {
    fn clone(&self) -> Self {
        Self {
            delimiter: self.delimiter,
            item: self.item.clone(),
            _collect: PhantomData,
        }
    }
}

impl<C: Converter + fmt::Debug, B> fmt::Debug for CollectionConverter<C, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionConverter")
            .field("delimiter", &self.delimiter)
            .field("item", &self.item)
            .finish()
    }
}

impl<C, B> Converter for CollectionConverter<C, B>
where
    C: Converter,
    B: FromIterator<C::Output>,
{
    type Output = B;

    fn convert(&self, raw: &str) -> Result<B, ConvertError> {
        split_items(raw, self.delimiter)
            .into_iter()
            .enumerate()
            .map(|(idx, elem)| {
                self.item.convert(unquote(elem)).map_err(|e| ConvertError {
                    reason: format!("element {}: {}", idx, e.reason),
                    ..e
                })
            })
            .collect()
    }
}

/// `key<separator>value` entries, e.g. `host:db, port:5432`.
///
/// Keys are trimmed and unquoted; values go through the value converter.
/// A later duplicate key replaces an earlier one.
#[derive(Debug, Clone)]
pub struct MapConverter<C = StringConverter> {
    delimiter: Delimiter,
    separator: char,
    value: C,
}

impl MapConverter {
    pub fn new() -> Self {
        Self {
            delimiter: Delimiter::default(),
            separator: ':',
            value: StringConverter,
        }
    }
}

impl Default for MapConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Converter> MapConverter<C> {
    /// Entry delimiter (default `,`).
    pub fn delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Key/value separator (default `:`).
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn value<C2: Converter>(self, value: C2) -> MapConverter<C2> {
        MapConverter {
            delimiter: self.delimiter,
            separator: self.separator,
            value,
        }
    }
}

impl<C: Converter> Converter for MapConverter<C> {
    type Output = BTreeMap<String, C::Output>;

    fn convert(&self, raw: &str) -> Result<Self::Output, ConvertError> {
        let mut out = BTreeMap::new();
        for entry in split_items(raw, self.delimiter) {
            let Some((key, value)) = entry.split_once(self.separator) else {
                return Err(ConvertError::new(
                    "map",
                    entry,
                    format!("missing key separator {:?}", self.separator),
                ));
            };
            let key = unquote(key.trim());
            if key.is_empty() {
                return Err(ConvertError::new("map", entry, "empty key"));
            }
            let value = self.value.convert(unquote(value.trim())).map_err(|e| ConvertError {
                reason: format!("key {}: {}", key, e.reason),
                ..e
            })?;
            out.insert(key.to_string(), value);
        }
        Ok(out)
    }
}
