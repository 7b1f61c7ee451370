//! Handler implementation writing into a facade sink

use super::flatten::{add_group_prefix, flatten_into};
use super::severity::{baseline_from_verbosity, verbosity_from_level};
use crate::core::{Field, Handler, Level, LogSink, Logger, Record, Result};
use std::sync::Arc;

/// Exposes a [`LogSink`] as a [`Handler`].
///
/// Records at [`Level::ERROR`] or above are written with [`LogSink::error`]
/// no matter how verbose the originating logger was. Everything else is
/// written with [`LogSink::info`], its level reduced by the baseline
/// captured from the logger, so a handler built from `logger.v(4)` writes an
/// `INFO` record at verbosity 4.
///
/// # Example
///
/// ```
/// use rust_logr_bridge::prelude::*;
/// use std::sync::Arc;
///
/// let lines = Arc::new(parking_lot::Mutex::new(Vec::new()));
/// let out = Arc::clone(&lines);
/// let logger = Logger::new(Arc::new(
///     FuncSink::builder().verbosity(4).build(move |line| out.lock().push(line.to_string())),
/// ));
///
/// let attrs = AttrLogger::new(Arc::new(logger.v(2).to_handler()));
/// attrs.with_group("req").info("served", &[Field::new("status", 200)]);
///
/// assert_eq!(
///     lines.lock()[0],
///     r#"{"logger":"","level":2,"msg":"served","req.status":200}"#
/// );
/// ```
#[derive(Clone)]
pub struct SinkHandler {
    sink: Option<Arc<dyn LogSink>>,
    group_prefix: String,
    level: Level,
}

impl SinkHandler {
    pub fn new(logger: &Logger) -> Self {
        Self::from_sink(
            logger.sink().cloned(),
            baseline_from_verbosity(logger.verbosity()),
        )
    }

    pub fn from_sink(sink: Option<Arc<dyn LogSink>>, baseline: Level) -> Self {
        Self {
            sink,
            group_prefix: String::new(),
            level: baseline,
        }
    }

    pub fn group_prefix(&self) -> &str {
        &self.group_prefix
    }

    pub fn baseline(&self) -> Level {
        self.level
    }

    fn flatten<'a>(&self, attrs: impl IntoIterator<Item = &'a Field>, hint: usize) -> Vec<Field> {
        let mut fields = Vec::with_capacity(hint);
        flatten_into(&mut fields, &self.group_prefix, attrs);
        fields
    }
}

impl Handler for SinkHandler {
    fn enabled(&self, level: Level) -> bool {
        match &self.sink {
            Some(sink) => level.is_error() || sink.enabled(verbosity_from_level(level, self.level)),
            None => false,
        }
    }

    fn handle(&self, record: &Record) -> Result<()> {
        // Only reached after enabled() returned true, so no level check here.
        let Some(sink) = &self.sink else {
            return Ok(());
        };

        let fields = self.flatten(record.attrs(), record.num_attrs());
        if record.level.is_error() {
            sink.error(None, &record.message, &fields);
        } else {
            let level = verbosity_from_level(record.level, self.level);
            sink.info(level, &record.message, &fields);
        }
        Ok(())
    }

    fn with_attrs(self: Arc<Self>, attrs: &[Field]) -> Arc<dyn Handler> {
        if attrs.is_empty() {
            return self;
        }
        let Some(sink) = self.sink.clone() else {
            return self;
        };

        let fields = self.flatten(attrs, attrs.len());
        Arc::new(SinkHandler {
            sink: Some(sink.with_values(&fields)),
            group_prefix: self.group_prefix.clone(),
            level: self.level,
        })
    }

    fn with_group(self: Arc<Self>, name: &str) -> Arc<dyn Handler> {
        if self.sink.is_none() {
            return self;
        }

        Arc::new(SinkHandler {
            sink: self.sink.clone(),
            group_prefix: add_group_prefix(&self.group_prefix, name),
            level: self.level,
        })
    }
}
