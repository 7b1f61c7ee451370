//! Front-end for attribute/level based handlers

use super::field::Field;
use super::handler::Handler;
use super::log_level::Level;
use super::record::Record;
use crate::bridge::DiscardHandler;
use std::sync::Arc;

/// Logger that builds [`Record`]s and hands them to a [`Handler`].
///
/// # Example
///
/// ```
/// use rust_logr_bridge::prelude::*;
/// use std::sync::Arc;
///
/// let logger = AttrLogger::new(Arc::new(Logger::discard().to_handler()));
/// logger
///     .with_group("db")
///     .with(&[Field::new("table", "users")])
///     .warn("slow query", &[Field::new("ms", 1200)]);
/// ```
#[derive(Clone)]
pub struct AttrLogger {
    handler: Arc<dyn Handler>,
}

impl AttrLogger {
    pub fn new(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    pub fn discard() -> Self {
        Self::new(Arc::new(DiscardHandler))
    }

    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    pub fn log(&self, level: Level, message: &str, attrs: &[Field]) {
        if !self.handler.enabled(level) {
            return;
        }

        let record = Record::new(level, message).with_attrs(attrs.iter().cloned());
        if let Err(e) = self.handler.handle(&record) {
            eprintln!("[LOGGER ERROR] Handler failed to write record: {}", e);
        }
    }

    #[inline]
    pub fn debug(&self, message: &str, attrs: &[Field]) {
        self.log(Level::DEBUG, message, attrs);
    }

    #[inline]
    pub fn info(&self, message: &str, attrs: &[Field]) {
        self.log(Level::INFO, message, attrs);
    }

    #[inline]
    pub fn warn(&self, message: &str, attrs: &[Field]) {
        self.log(Level::WARN, message, attrs);
    }

    #[inline]
    pub fn error(&self, message: &str, attrs: &[Field]) {
        self.log(Level::ERROR, message, attrs);
    }

    /// Logger whose records all carry `attrs`.
    #[must_use]
    pub fn with(&self, attrs: &[Field]) -> Self {
        Self::new(Arc::clone(&self.handler).with_attrs(attrs))
    }

    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        Self::new(Arc::clone(&self.handler).with_group(name))
    }
}
