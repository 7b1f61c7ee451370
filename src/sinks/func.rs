//! Formatter sink writing one line per message
//!
//! [`FuncSink`] renders each call as a JSON object or logfmt line and hands
//! the line to an output function or an [`std::io::Write`].
//!
//! # Example
//!
//! ```
//! use rust_logr_bridge::prelude::*;
//! use std::sync::Arc;
//!
//! let lines = Arc::new(parking_lot::Mutex::new(Vec::new()));
//! let out = Arc::clone(&lines);
//! let logger = Logger::new(Arc::new(FuncSink::new(move |line| {
//!     out.lock().push(line.to_string())
//! })));
//!
//! logger.with_name("api").info("started", &[Field::new("port", 8080)]);
//!
//! assert_eq!(
//!     lines.lock()[0],
//!     r#"{"logger":"api","level":0,"msg":"started","port":8080}"#
//! );
//! ```

use crate::core::{
    Context, ContextKey, Field, FieldValue, LineEntry, LogSink, LoggerError, OutputFormat,
    RenderedTimestamp, Result, TimestampFormat, Verbosity,
};
use chrono::Utc;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Receives each rendered line, without a trailing newline.
pub type OutputFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Separator between names added with [`LogSink::with_name`].
pub const NAME_SEPARATOR: &str = "/";

/// Formatter settings. Every field has a default, so partial configuration
/// files are fine.
///
/// ```
/// use rust_logr_bridge::sinks::FuncSinkOptions;
/// use rust_logr_bridge::OutputFormat;
///
/// let options = FuncSinkOptions::from_json(r#"{"output_format":"logfmt","verbosity":2}"#)
///     .unwrap();
/// assert_eq!(options.output_format, OutputFormat::Logfmt);
/// assert_eq!(options.verbosity, 2);
/// assert!(!options.log_timestamp);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuncSinkOptions {
    pub output_format: OutputFormat,
    /// Highest verbosity that is written.
    pub verbosity: Verbosity,
    /// Prefix every line with a `ts` key.
    pub log_timestamp: bool,
    pub timestamp_format: TimestampFormat,
}

impl FuncSinkOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| LoggerError::config("FuncSink", e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        self.timestamp_format.validate()
    }
}

type Extractor = Arc<dyn Fn(&Context) -> Option<FieldValue> + Send + Sync>;

/// Context value copied into a sink's bound values when a logger is
/// retrieved from a [`Context`].
#[derive(Clone)]
pub struct ContextField {
    name: String,
    extract: Extractor,
}

impl ContextField {
    pub fn new<K>(name: impl Into<String>) -> Self
    where
        K: ContextKey,
        K::Value: Into<FieldValue>,
    {
        Self {
            name: name.into(),
            extract: Arc::new(|ctx: &Context| ctx.value::<K>().cloned().map(Into::into)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for ContextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextField")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct FuncSink {
    output: OutputFn,
    options: Arc<FuncSinkOptions>,
    context_fields: Arc<[ContextField]>,
    name: String,
    values: Vec<Field>,
}

impl FuncSink {
    /// JSON sink with default options.
    pub fn new<F>(output: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        FuncSinkBuilder::new().build(output)
    }

    #[must_use]
    pub fn builder() -> FuncSinkBuilder {
        FuncSinkBuilder::new()
    }

    pub fn options(&self) -> &FuncSinkOptions {
        &self.options
    }

    fn derive(&self, name: String, values: Vec<Field>) -> FuncSink {
        FuncSink {
            output: Arc::clone(&self.output),
            options: Arc::clone(&self.options),
            context_fields: Arc::clone(&self.context_fields),
            name,
            values,
        }
    }

    fn render(
        &self,
        level: Verbosity,
        error: Option<String>,
        message: &str,
        fields: &[Field],
    ) -> Result<String> {
        let timestamp = if self.options.log_timestamp {
            Some(RenderedTimestamp {
                text: self.options.timestamp_format.format(&Utc::now())?,
                numeric: self.options.timestamp_format.is_numeric(),
            })
        } else {
            None
        };

        let entry = LineEntry {
            timestamp,
            logger: &self.name,
            level,
            message,
            error,
            values: &self.values,
            fields,
        };
        self.options.output_format.format(&entry)
    }

    fn emit(&self, level: Verbosity, error: Option<String>, message: &str, fields: &[Field]) {
        match self.render(level, error, message, fields) {
            Ok(line) => (self.output)(&line),
            Err(e) => eprintln!("[LOGGER ERROR] Failed to format log line: {}", e),
        }
    }
}

impl LogSink for FuncSink {
    fn enabled(&self, level: Verbosity) -> bool {
        level <= self.options.verbosity
    }

    fn info(&self, level: Verbosity, message: &str, fields: &[Field]) {
        self.emit(level, None, message, fields);
    }

    fn error(&self, err: Option<&(dyn Error + 'static)>, message: &str, fields: &[Field]) {
        self.emit(0, err.map(|e| e.to_string()), message, fields);
    }

    fn with_values(self: Arc<Self>, fields: &[Field]) -> Arc<dyn LogSink> {
        if fields.is_empty() {
            return self;
        }
        let mut values = self.values.clone();
        values.extend_from_slice(fields);
        Arc::new(self.derive(self.name.clone(), values))
    }

    fn with_name(self: Arc<Self>, name: &str) -> Arc<dyn LogSink> {
        let name = if self.name.is_empty() {
            name.to_string()
        } else {
            format!("{}{}{}", self.name, NAME_SEPARATOR, name)
        };
        Arc::new(self.derive(name, self.values.clone()))
    }

    fn with_context(&self, ctx: &Context) -> Option<Arc<dyn LogSink>> {
        let mut values = self.values.clone();
        let before = values.len();
        for field in self.context_fields.iter() {
            if let Some(value) = (field.extract)(ctx) {
                values.push(Field {
                    key: field.name.clone(),
                    value,
                });
            }
        }

        if values.len() == before {
            return None;
        }
        Some(Arc::new(self.derive(self.name.clone(), values)))
    }
}

impl fmt::Debug for FuncSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncSink")
            .field("options", &self.options)
            .field("context_fields", &self.context_fields)
            .field("name", &self.name)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

/// Builder for [`FuncSink`]
///
/// # Example
///
/// ```
/// use rust_logr_bridge::prelude::*;
///
/// let sink = FuncSink::builder()
///     .output_format(OutputFormat::Logfmt)
///     .verbosity(3)
///     .log_timestamp(true)
///     .timestamp_format(TimestampFormat::Iso8601)
///     .build_writer(std::io::stderr());
///
/// assert!(sink.enabled(3));
/// assert!(!sink.enabled(4));
/// ```
#[derive(Debug, Default)]
pub struct FuncSinkBuilder {
    options: FuncSinkOptions,
    context_fields: Vec<ContextField>,
}

impl FuncSinkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options at once, e.g. with ones loaded from a file
    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: FuncSinkOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.options.output_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.options.verbosity = verbosity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_timestamp(mut self, enabled: bool) -> Self {
        self.options.log_timestamp = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.options.timestamp_format = format;
        self
    }

    /// Copy the value bound under `K` into every logger retrieved from a
    /// context carrying it, under the key `name`.
    #[must_use = "builder methods return a new value"]
    pub fn context_field<K>(mut self, name: impl Into<String>) -> Self
    where
        K: ContextKey,
        K::Value: Into<FieldValue>,
    {
        self.context_fields.push(ContextField::new::<K>(name));
        self
    }

    pub fn build<F>(self, output: F) -> FuncSink
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        FuncSink {
            output: Arc::new(output),
            options: Arc::new(self.options),
            context_fields: self.context_fields.into(),
            name: String::new(),
            values: Vec::new(),
        }
    }

    /// Sink writing newline-terminated lines to `writer`.
    pub fn build_writer<W>(self, writer: W) -> FuncSink
    where
        W: Write + Send + 'static,
    {
        let writer = Mutex::new(writer);
        self.build(move |line| {
            if let Err(e) = write_line(&mut *writer.lock(), line) {
                eprintln!("[LOGGER ERROR] Failed to write log line: {}", e);
            }
        })
    }
}

fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    writeln!(writer, "{}", line)?;
    writer.flush()?;
    Ok(())
}
