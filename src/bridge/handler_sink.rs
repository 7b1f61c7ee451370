//! Facade sink writing into a handler

use super::severity::level_from_verbosity;
use crate::core::{Field, Handler, Level, LogSink, Record, Verbosity};
use std::error::Error;
use std::sync::Arc;

/// Attribute key carrying the logger name.
pub const NAME_KEY: &str = "logger";
/// Attribute key carrying the error passed to [`LogSink::error`].
pub const ERR_KEY: &str = "err";
/// Separator between logger names added with [`LogSink::with_name`].
pub const NAME_SEPARATOR: &str = "/";

/// Exposes a [`Handler`] as a [`LogSink`].
///
/// Verbosity `n` becomes level `INFO - n`; errors are always written at
/// [`Level::ERROR`].
#[derive(Clone)]
pub struct HandlerSink {
    handler: Arc<dyn Handler>,
    name: String,
}

impl HandlerSink {
    pub fn new(handler: Arc<dyn Handler>) -> Self {
        Self {
            handler,
            name: String::new(),
        }
    }

    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    fn log(
        &self,
        err: Option<&(dyn Error + 'static)>,
        level: Level,
        message: &str,
        fields: &[Field],
    ) {
        let mut attrs = Vec::with_capacity(fields.len() + 2);
        if !self.name.is_empty() {
            attrs.push(Field::new(NAME_KEY, self.name.as_str()));
        }
        if let Some(err) = err {
            attrs.push(Field::new(ERR_KEY, err.to_string()));
        }
        attrs.extend_from_slice(fields);

        let record = Record::new(level, message).with_attrs(attrs);
        if let Err(e) = self.handler.handle(&record) {
            eprintln!("[LOGGER ERROR] Handler failed to write record: {}", e);
        }
    }
}

impl LogSink for HandlerSink {
    fn enabled(&self, level: Verbosity) -> bool {
        self.handler.enabled(level_from_verbosity(level))
    }

    fn info(&self, level: Verbosity, message: &str, fields: &[Field]) {
        self.log(None, level_from_verbosity(level), message, fields);
    }

    fn error(&self, err: Option<&(dyn Error + 'static)>, message: &str, fields: &[Field]) {
        if !self.handler.enabled(Level::ERROR) {
            return;
        }
        self.log(err, Level::ERROR, message, fields);
    }

    fn with_values(self: Arc<Self>, fields: &[Field]) -> Arc<dyn LogSink> {
        if fields.is_empty() {
            return self;
        }
        Arc::new(HandlerSink {
            handler: Arc::clone(&self.handler).with_attrs(fields),
            name: self.name.clone(),
        })
    }

    fn with_name(self: Arc<Self>, name: &str) -> Arc<dyn LogSink> {
        let name = if self.name.is_empty() {
            name.to_string()
        } else {
            format!("{}{}{}", self.name, NAME_SEPARATOR, name)
        };
        Arc::new(HandlerSink {
            handler: Arc::clone(&self.handler),
            name,
        })
    }
}
