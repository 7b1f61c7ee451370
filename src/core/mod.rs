//! Core types and traits

pub mod attr_logger;
pub mod context;
pub mod error;
pub mod field;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod output_format;
pub mod record;
pub mod sink;
pub mod timestamp;

pub use attr_logger::AttrLogger;
pub use context::{Context, ContextKey};
pub use error::{LoggerError, Result};
pub use field::{Field, FieldValue};
pub use handler::Handler;
pub use log_level::{Level, Verbosity};
pub use logger::Logger;
pub use output_format::{LineEntry, OutputFormat, RenderedTimestamp};
pub use record::Record;
pub use sink::LogSink;
pub use timestamp::TimestampFormat;
