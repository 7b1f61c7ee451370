//! LogSink trait: the facade's backend contract

use super::context::Context;
use super::field::Field;
use super::log_level::Verbosity;
use std::error::Error;
use std::sync::Arc;

/// Backend behind a [`crate::Logger`].
///
/// Implementations must be safe for concurrent use. Methods that derive a new
/// sink take `self: Arc<Self>` so an implementation with nothing to change can
/// hand back the receiver.
pub trait LogSink: Send + Sync {
    /// Whether a message at `level` would be written.
    fn enabled(&self, level: Verbosity) -> bool;

    /// Write a non-error message. Callers check [`LogSink::enabled`] first.
    fn info(&self, level: Verbosity, message: &str, fields: &[Field]);

    /// Write an error message, independent of verbosity.
    fn error(&self, err: Option<&(dyn Error + 'static)>, message: &str, fields: &[Field]);

    /// Sink that includes `fields` in every subsequent message.
    fn with_values(self: Arc<Self>, fields: &[Field]) -> Arc<dyn LogSink>;

    /// Sink with `name` appended to its logger name.
    fn with_name(self: Arc<Self>, name: &str) -> Arc<dyn LogSink>;

    /// Sink that has captured whatever it wants from `ctx`, or `None` to keep
    /// using this one.
    fn with_context(&self, _ctx: &Context) -> Option<Arc<dyn LogSink>> {
        None
    }
}
