//! Facade logger
//!
//! [`Logger`] is the value application code holds and passes around. It pairs
//! a [`LogSink`] with the verbosity accumulated through [`Logger::v`]. Every
//! derivation (`v`, `with_values`, `with_name`) returns a new logger; the
//! receiver keeps its behavior.

use super::{
    context::{Context, ContextKey},
    error::{LoggerError, Result},
    field::Field,
    handler::Handler,
    log_level::Verbosity,
    sink::LogSink,
};
use crate::bridge::{HandlerSink, SinkHandler};
use crate::sinks::DiscardSink;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct Logger {
    sink: Option<Arc<dyn LogSink>>,
    level: Verbosity,
}

impl Logger {
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink: Some(sink),
            level: 0,
        }
    }

    /// Logger that drops everything.
    #[must_use]
    pub fn discard() -> Self {
        Self::new(Arc::new(DiscardSink))
    }

    /// Logger writing to an attribute/level based handler.
    ///
    /// Verbosity is negated on the way out, so `V(4)` arrives as
    /// [`crate::Level::DEBUG`].
    #[must_use]
    pub fn from_handler(handler: Arc<dyn Handler>) -> Self {
        Self::new(Arc::new(HandlerSink::new(handler)))
    }

    /// Handler writing through this logger's sink. Records below
    /// [`crate::Level::ERROR`] have their level reduced by this logger's
    /// verbosity.
    #[must_use]
    pub fn to_handler(&self) -> SinkHandler {
        SinkHandler::new(self)
    }

    pub fn sink(&self) -> Option<&Arc<dyn LogSink>> {
        self.sink.as_ref()
    }

    pub fn verbosity(&self) -> Verbosity {
        self.level
    }

    /// Logger at a higher verbosity. Levels add up and saturate.
    #[must_use]
    pub fn v(&self, level: Verbosity) -> Self {
        Self {
            sink: self.sink.clone(),
            level: self.level.saturating_add(level),
        }
    }

    pub fn enabled(&self) -> bool {
        self.sink
            .as_ref()
            .is_some_and(|sink| sink.enabled(self.level))
    }

    pub fn info(&self, message: &str, fields: &[Field]) {
        if let Some(sink) = &self.sink {
            if sink.enabled(self.level) {
                sink.info(self.level, message, fields);
            }
        }
    }

    /// Errors are written regardless of verbosity.
    pub fn error(&self, err: Option<&(dyn Error + 'static)>, message: &str, fields: &[Field]) {
        if let Some(sink) = &self.sink {
            sink.error(err, message, fields);
        }
    }

    #[must_use]
    pub fn with_values(&self, fields: &[Field]) -> Self {
        match &self.sink {
            Some(sink) if !fields.is_empty() => Self {
                sink: Some(Arc::clone(sink).with_values(fields)),
                level: self.level,
            },
            _ => self.clone(),
        }
    }

    #[must_use]
    pub fn with_name(&self, name: &str) -> Self {
        match &self.sink {
            Some(sink) => Self {
                sink: Some(Arc::clone(sink).with_name(name)),
                level: self.level,
            },
            None => self.clone(),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("has_sink", &self.sink.is_some())
            .field("level", &self.level)
            .finish()
    }
}

struct LoggerKey;

impl ContextKey for LoggerKey {
    type Value = Logger;
}

impl Context {
    /// Derive a context carrying `logger`.
    #[must_use]
    pub fn with_logger(&self, logger: Logger) -> Context {
        self.with_value::<LoggerKey>(logger)
    }
}

impl Logger {
    /// Logger bound to `ctx`, with the sink given a chance to pick up values
    /// from the context.
    pub fn from_context(ctx: &Context) -> Result<Logger> {
        let logger = ctx
            .value::<LoggerKey>()
            .ok_or(LoggerError::LoggerNotInContext)?;

        let sink = match &logger.sink {
            Some(sink) => sink.with_context(ctx).or_else(|| Some(Arc::clone(sink))),
            None => None,
        };

        Ok(Logger {
            sink,
            level: logger.level,
        })
    }

    /// Like [`Logger::from_context`], falling back to [`Logger::discard`].
    #[must_use]
    pub fn from_context_or_discard(ctx: &Context) -> Logger {
        Self::from_context(ctx).unwrap_or_else(|_| Logger::discard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use parking_lot::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Info(Verbosity, String, Vec<Field>),
        Error(Option<String>, String, Vec<Field>),
    }

    #[derive(Default)]
    struct RecordingSink {
        max_level: Verbosity,
        values: Vec<Field>,
        name: String,
        calls: Arc<Mutex<Vec<Call>>>,
    }

    impl RecordingSink {
        fn fields(&self, fields: &[Field]) -> Vec<Field> {
            let mut all = self.values.clone();
            if !self.name.is_empty() {
                all.insert(0, Field::new("logger", self.name.as_str()));
            }
            all.extend_from_slice(fields);
            all
        }
    }

    impl LogSink for RecordingSink {
        fn enabled(&self, level: Verbosity) -> bool {
            level <= self.max_level
        }

        fn info(&self, level: Verbosity, message: &str, fields: &[Field]) {
            self.calls
                .lock()
                .push(Call::Info(level, message.to_string(), self.fields(fields)));
        }

        fn error(&self, err: Option<&(dyn Error + 'static)>, message: &str, fields: &[Field]) {
            self.calls.lock().push(Call::Error(
                err.map(|e| e.to_string()),
                message.to_string(),
                self.fields(fields),
            ));
        }

        fn with_values(self: Arc<Self>, fields: &[Field]) -> Arc<dyn LogSink> {
            let mut values = self.values.clone();
            values.extend_from_slice(fields);
            Arc::new(RecordingSink {
                max_level: self.max_level,
                values,
                name: self.name.clone(),
                calls: Arc::clone(&self.calls),
            })
        }

        fn with_name(self: Arc<Self>, name: &str) -> Arc<dyn LogSink> {
            Arc::new(RecordingSink {
                max_level: self.max_level,
                values: self.values.clone(),
                name: name.to_string(),
                calls: Arc::clone(&self.calls),
            })
        }
    }

    fn recording(max_level: Verbosity) -> (Logger, Arc<Mutex<Vec<Call>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingSink {
            max_level,
            calls: Arc::clone(&calls),
            ..Default::default()
        };
        (Logger::new(Arc::new(sink)), calls)
    }

    #[test]
    fn test_info_respects_verbosity() {
        let (logger, calls) = recording(1);

        logger.info("v0", &[]);
        logger.v(1).info("v1", &[]);
        logger.v(2).info("v2", &[]);

        let calls = calls.lock();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], Call::Info(1, "v1".to_string(), vec![]));
    }

    #[test]
    fn test_error_ignores_verbosity() {
        let (logger, calls) = recording(0);
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");

        logger.v(5).error(Some(&err), "failed", &[Field::new("attempt", 3)]);

        let calls = calls.lock();
        assert_eq!(
            calls[0],
            Call::Error(
                Some("boom".to_string()),
                "failed".to_string(),
                vec![Field::new("attempt", 3)]
            )
        );
    }

    #[test]
    fn test_v_accumulates_and_saturates() {
        let logger = Logger::discard().v(2).v(3);
        assert_eq!(logger.verbosity(), 5);
        assert_eq!(logger.v(Verbosity::MAX).verbosity(), Verbosity::MAX);
    }

    #[test]
    fn test_with_values_leaves_parent_untouched() {
        let (parent, calls) = recording(0);
        let child = parent.with_values(&[Field::new("request", "abc")]);

        parent.info("parent", &[]);
        child.info("child", &[]);

        let calls = calls.lock();
        assert_eq!(calls[0], Call::Info(0, "parent".to_string(), vec![]));
        assert_eq!(
            calls[1],
            Call::Info(0, "child".to_string(), vec![Field::new("request", "abc")])
        );
    }

    #[test]
    fn test_with_name() {
        let (logger, calls) = recording(0);
        logger.with_name("db").info("connected", &[]);

        let calls = calls.lock();
        match &calls[0] {
            Call::Info(_, _, fields) => {
                assert_eq!(fields[0].value, FieldValue::String("db".into()))
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_zero_logger_is_inert() {
        let logger = Logger::default();
        assert!(!logger.enabled());
        assert!(logger.sink().is_none());

        logger.info("nothing", &[]);
        logger.error(None, "nothing", &[]);
        assert!(logger.with_values(&[Field::new("a", 1)]).sink().is_none());
        assert!(logger.with_name("x").sink().is_none());
    }

    #[test]
    fn test_context_round_trip() {
        let (logger, calls) = recording(0);
        let ctx = Context::background().with_logger(logger.v(0));

        let found = Logger::from_context(&ctx).unwrap();
        found.info("from context", &[]);

        assert_eq!(calls.lock().len(), 1);
    }

    #[test]
    fn test_context_missing_logger() {
        let ctx = Context::background();

        assert!(matches!(
            Logger::from_context(&ctx),
            Err(LoggerError::LoggerNotInContext)
        ));

        let logger = Logger::from_context_or_discard(&ctx);
        for level in [0, 1, 10, Verbosity::MAX] {
            assert!(!logger.v(level).enabled());
        }
    }
}
