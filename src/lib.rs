//! # Rust Logr Bridge
//!
//! A minimal structured-logging facade, plus adapters that translate between
//! it and an attribute/level based handler API.
//!
//! ## Features
//!
//! - **Small facade**: [`Logger`] over a [`LogSink`] with verbosity levels,
//!   bound values and names
//! - **Both directions**: [`bridge::SinkHandler`] exposes a facade sink as a
//!   [`Handler`]; [`bridge::HandlerSink`] exposes a handler as a sink
//! - **Always usable**: [`Logger::discard`] and
//!   [`Logger::from_context_or_discard`] mean call sites never check for a
//!   missing logger
//! - **Formatter sink**: [`sinks::FuncSink`] writes JSON or logfmt lines
//!
//! ## Example
//!
//! ```
//! use rust_logr_bridge::prelude::*;
//! use std::sync::Arc;
//!
//! let logger = Logger::new(Arc::new(FuncSink::builder().build_writer(std::io::stderr())));
//!
//! // Handler-based code writes through the same sink.
//! let attrs = AttrLogger::new(Arc::new(logger.to_handler()));
//! attrs.with_group("http").info("request", &[Field::new("path", "/")]);
//!
//! // And facade code can write to any handler.
//! let facade = Logger::from_handler(Arc::new(logger.to_handler()));
//! facade.v(1).info("verbose detail", &[]);
//! ```

pub mod bridge;
pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::bridge::{DiscardHandler, HandlerSink, SinkHandler};
    pub use crate::core::{
        AttrLogger, Context, ContextKey, Field, FieldValue, Handler, Level, LogSink, Logger,
        LoggerError, OutputFormat, Record, Result, TimestampFormat, Verbosity,
    };
    pub use crate::sinks::{DiscardSink, FuncSink, FuncSinkBuilder, FuncSinkOptions};
}

pub use bridge::{DiscardHandler, HandlerSink, SinkHandler};
pub use core::{
    AttrLogger, Context, ContextKey, Field, FieldValue, Handler, Level, LogSink, Logger,
    LoggerError, OutputFormat, Record, Result, TimestampFormat, Verbosity,
};
pub use sinks::{DiscardSink, FuncSink, FuncSinkBuilder, FuncSinkOptions};
