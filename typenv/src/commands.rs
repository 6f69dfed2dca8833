//! `get` / `check` implementations.
//!
//! Every converter is wrapped so its output becomes a `serde_json::Value`;
//! that lets the JSON `--default` ride through `EnvVariable` unconverted.

use serde::Serialize;
use serde_json::Value;
use typenv_core::{
    BoolConverter, CollectionConverter, ConvertError, Converter, DateTimeConverter, Delimiter,
    EnvSource, EnvVariable, MapConverter, ParseConverter, StringConverter,
};

use crate::cli::{ScalarKind, ValueKind, VarArgs};

type JsonConverter = Box<dyn Converter<Output = Value>>;

/// Adapts a converter to JSON output.
struct ToJson<C>(C);

impl<C> Converter for ToJson<C>
where
    C: Converter,
    C::Output: Serialize,
{
    type Output = Value;

    fn convert(&self, raw: &str) -> Result<Value, ConvertError> {
        let v = self.0.convert(raw)?;
        match serde_json::to_value(v) {
            // serde_json maps NaN and the infinities to null
            Ok(Value::Null) => Err(ConvertError::new(
                "json",
                raw,
                "not representable as JSON (non-finite number)",
            )),
            Ok(json) => Ok(json),
            Err(e) => Err(ConvertError::new("json", raw, e.to_string())),
        }
    }
}

fn boxed<C>(c: C) -> JsonConverter
where
    C: Converter + 'static,
    C::Output: Serialize,
{
    Box::new(ToJson(c))
}

fn bool_converter(args: &VarArgs) -> BoolConverter {
    let mut c = BoolConverter::new();
    if let Some(tokens) = &args.truthy {
        c = c.truthy(tokens.iter().cloned());
    }
    if let Some(tokens) = &args.falsy {
        c = c.falsy(tokens.iter().cloned());
    }
    c
}

fn scalar_converter(kind: ScalarKind, args: &VarArgs) -> JsonConverter {
    match kind {
        ScalarKind::String => boxed(StringConverter),
        ScalarKind::Int => boxed(ParseConverter::<i64>::new()),
        ScalarKind::Float => boxed(ParseConverter::<f64>::new()),
        ScalarKind::Bool => boxed(bool_converter(args)),
    }
}

fn delimiter(args: &VarArgs) -> Delimiter {
    if args.whitespace {
        Delimiter::Whitespace
    } else {
        args.delimiter.map(Delimiter::Char).unwrap_or_default()
    }
}

/// Build the converter described by the command-line options.
pub fn converter_for(args: &VarArgs) -> JsonConverter {
    match args.kind {
        ValueKind::String => scalar_converter(ScalarKind::String, args),
        ValueKind::Int => scalar_converter(ScalarKind::Int, args),
        ValueKind::Float => scalar_converter(ScalarKind::Float, args),
        ValueKind::Bool => scalar_converter(ScalarKind::Bool, args),
        ValueKind::List => boxed(
            CollectionConverter::new()
                .delimiter(delimiter(args))
                .item(scalar_converter(args.item, args)),
        ),
        ValueKind::Map => boxed(
            MapConverter::new()
                .delimiter(delimiter(args))
                .separator(args.separator.unwrap_or(':'))
                .value(scalar_converter(args.item, args)),
        ),
        ValueKind::Datetime => {
            let mut c = DateTimeConverter::new();
            if let Some(fmt) = &args.format {
                c = c.format(fmt.clone());
            }
            boxed(c)
        }
    }
}

pub fn variable_for(args: &VarArgs) -> EnvVariable<JsonConverter> {
    EnvVariable::new(
        args.name.clone(),
        args.default.clone().unwrap_or(Value::Null),
        converter_for(args),
    )
    .aliases(args.aliases.iter().cloned())
}

/// Typed value as JSON; the `--default` literal when unset or empty.
pub fn get<S: EnvSource>(args: &VarArgs, source: &S) -> typenv_core::Result<Value> {
    variable_for(args).value_from(source)
}

/// Outcome of `check`, printed to stdout on success.
#[derive(Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Set and convertible; carries the name that was read.
    Valid(String),
    Unset,
}

pub fn check<S: EnvSource>(args: &VarArgs, source: &S) -> typenv_core::Result<CheckOutcome> {
    let var = variable_for(args);
    Ok(match var.resolve_from(source)? {
        Some((name, _)) => CheckOutcome::Valid(name.to_string()),
        None => CheckOutcome::Unset,
    })
}
