//! Line formats for formatter sinks
//!
//! - Json: one object per line, keys in call order, duplicates kept
//! - Logfmt: `key=value` pairs separated by spaces
//!
//! Both layouts start with the built-in keys (`ts` when enabled, `logger`,
//! `level`, `msg`, and `error` when a cause was given), followed by values
//! bound with `with_values`, then the pairs of the call itself.

use super::error::Result;
use super::field::{Field, FieldValue};
use super::log_level::Verbosity;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Output format for formatter sinks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Example: `{"logger":"","level":0,"msg":"ping","i":1}`
    #[default]
    Json,

    /// Example: `logger="" level=0 msg="ping" i=1`
    Logfmt,
}

/// Timestamp already rendered by the sink.
#[derive(Debug, Clone)]
pub struct RenderedTimestamp {
    pub text: String,
    pub numeric: bool,
}

/// Everything that goes into one output line.
#[derive(Debug, Clone)]
pub struct LineEntry<'a> {
    pub timestamp: Option<RenderedTimestamp>,
    pub logger: &'a str,
    pub level: Verbosity,
    pub message: &'a str,
    pub error: Option<String>,
    pub values: &'a [Field],
    pub fields: &'a [Field],
}

impl OutputFormat {
    pub fn format(&self, entry: &LineEntry<'_>) -> Result<String> {
        match self {
            OutputFormat::Json => format_json(entry),
            OutputFormat::Logfmt => format_logfmt(entry),
        }
    }
}

// Written by hand rather than through serde_json's `SerializeMap`: floats
// render with `Display` (`1`, not `1.0`), and keys keep call order with
// duplicates. serde_json is only used to escape strings.
fn format_json(entry: &LineEntry<'_>) -> Result<String> {
    let mut out = String::with_capacity(64 + 16 * (entry.values.len() + entry.fields.len()));
    out.push('{');

    let mut first = true;
    let mut key = |out: &mut String, name: &str| -> Result<()> {
        if !first {
            out.push(',');
        }
        first = false;
        push_json_str(out, name)?;
        out.push(':');
        Ok(())
    };

    if let Some(ts) = &entry.timestamp {
        key(&mut out, "ts")?;
        if ts.numeric {
            out.push_str(&ts.text);
        } else {
            push_json_str(&mut out, &ts.text)?;
        }
    }

    key(&mut out, "logger")?;
    push_json_str(&mut out, entry.logger)?;
    key(&mut out, "level")?;
    let _ = write!(out, "{}", entry.level);
    key(&mut out, "msg")?;
    push_json_str(&mut out, entry.message)?;

    if let Some(error) = &entry.error {
        key(&mut out, "error")?;
        push_json_str(&mut out, error)?;
    }

    for field in entry.values.iter().chain(entry.fields) {
        key(&mut out, &field.key)?;
        push_json_value(&mut out, &field.value)?;
    }

    out.push('}');
    Ok(out)
}

fn push_json_str(out: &mut String, s: &str) -> Result<()> {
    out.push_str(&serde_json::to_string(s)?);
    Ok(())
}

fn push_json_value(out: &mut String, value: &FieldValue) -> Result<()> {
    match value {
        FieldValue::String(s) => push_json_str(out, s)?,
        FieldValue::Int(i) => {
            let _ = write!(out, "{}", i);
        }
        FieldValue::Uint(u) => {
            let _ = write!(out, "{}", u);
        }
        FieldValue::Float(f) => push_float(out, *f, true),
        FieldValue::Bool(b) => {
            let _ = write!(out, "{}", b);
        }
        FieldValue::Null => out.push_str("null"),
        FieldValue::Group(fields) => {
            out.push('{');
            for (idx, field) in fields.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                push_json_str(out, &field.key)?;
                out.push(':');
                push_json_value(out, &field.value)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

/// Whole numbers render without a fractional part (`1`, not `1.0`). JSON has
/// no representation for NaN or infinities, so those become strings.
fn push_float(out: &mut String, f: f64, quote_special: bool) {
    let special = if f.is_nan() {
        "NaN"
    } else if f == f64::INFINITY {
        "+Inf"
    } else if f == f64::NEG_INFINITY {
        "-Inf"
    } else {
        let _ = write!(out, "{}", f);
        return;
    };

    if quote_special {
        let _ = write!(out, "\"{}\"", special);
    } else {
        out.push_str(special);
    }
}

fn format_logfmt(entry: &LineEntry<'_>) -> Result<String> {
    let mut out = String::with_capacity(64 + 16 * (entry.values.len() + entry.fields.len()));

    if let Some(ts) = &entry.timestamp {
        push_logfmt_key(&mut out, "", "ts")?;
        if ts.numeric {
            out.push_str(&ts.text);
        } else {
            push_json_str(&mut out, &ts.text)?;
        }
    }

    push_logfmt_key(&mut out, "", "logger")?;
    push_json_str(&mut out, entry.logger)?;
    push_logfmt_key(&mut out, "", "level")?;
    let _ = write!(out, "{}", entry.level);
    push_logfmt_key(&mut out, "", "msg")?;
    push_json_str(&mut out, entry.message)?;

    if let Some(error) = &entry.error {
        push_logfmt_key(&mut out, "", "error")?;
        push_json_str(&mut out, error)?;
    }

    for field in entry.values.iter().chain(entry.fields) {
        push_logfmt_field(&mut out, "", field)?;
    }

    Ok(out)
}

fn push_logfmt_field(out: &mut String, prefix: &str, field: &Field) -> Result<()> {
    match &field.value {
        FieldValue::Group(members) => {
            let prefix = if prefix.is_empty() {
                field.key.clone()
            } else {
                format!("{}.{}", prefix, field.key)
            };
            for member in members {
                push_logfmt_field(out, &prefix, member)?;
            }
        }
        FieldValue::String(s) => {
            push_logfmt_key(out, prefix, &field.key)?;
            push_json_str(out, s)?;
        }
        FieldValue::Float(f) => {
            push_logfmt_key(out, prefix, &field.key)?;
            push_float(out, *f, false);
        }
        other => {
            push_logfmt_key(out, prefix, &field.key)?;
            let _ = write!(out, "{}", other);
        }
    }
    Ok(())
}

/// Keys made of letters, digits, `_`, `-`, `.` and `/` are written bare;
/// anything else is quoted.
fn push_logfmt_key(out: &mut String, prefix: &str, key: &str) -> Result<()> {
    if !out.is_empty() {
        out.push(' ');
    }

    let full;
    let key = if prefix.is_empty() {
        key
    } else {
        full = format!("{}.{}", prefix, key);
        &full
    };

    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '/'));
    if bare {
        out.push_str(key);
    } else {
        push_json_str(out, key)?;
    }
    out.push('=');
    Ok(())
}
