//! Sink that drops everything

use crate::core::{Field, LogSink, Verbosity};
use std::error::Error;
use std::sync::Arc;

/// Disabled at every verbosity. Used wherever a logger is needed but no
/// backend was configured, so call sites never check for "no logger".
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl LogSink for DiscardSink {
    fn enabled(&self, _level: Verbosity) -> bool {
        false
    }

    fn info(&self, _level: Verbosity, _message: &str, _fields: &[Field]) {}

    fn error(&self, _err: Option<&(dyn Error + 'static)>, _message: &str, _fields: &[Field]) {}

    fn with_values(self: Arc<Self>, _fields: &[Field]) -> Arc<dyn LogSink> {
        self
    }

    fn with_name(self: Arc<Self>, _name: &str) -> Arc<dyn LogSink> {
        self
    }
}
