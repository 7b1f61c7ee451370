//! Sink implementations

pub mod discard;
pub mod func;

pub use discard::DiscardSink;
pub use func::{ContextField, FuncSink, FuncSinkBuilder, FuncSinkOptions, OutputFn};

// Re-export the trait for convenience
pub use crate::core::LogSink;
