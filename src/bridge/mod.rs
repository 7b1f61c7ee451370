//! Adapters between the facade and attribute/level based handlers
//!
//! - [`SinkHandler`] turns a [`crate::Logger`]'s sink into a [`crate::Handler`].
//! - [`HandlerSink`] turns a [`crate::Handler`] into a [`crate::LogSink`].
//! - [`DiscardHandler`] is the handler-side no-op.

pub mod discard_handler;
pub mod flatten;
pub mod handler_sink;
pub mod severity;
pub mod sink_handler;

pub use discard_handler::DiscardHandler;
pub use flatten::{add_group_prefix, flatten, flatten_into, GROUP_SEPARATOR};
pub use handler_sink::{HandlerSink, ERR_KEY, NAME_KEY, NAME_SEPARATOR};
pub use severity::{baseline_from_verbosity, level_from_verbosity, verbosity_from_level};
pub use sink_handler::SinkHandler;
