//! Handler that drops every record

use crate::core::{Field, Handler, Level, Record, Result};
use std::sync::Arc;

/// Reports every level as disabled and accepts records without doing
/// anything with them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardHandler;

impl Handler for DiscardHandler {
    fn enabled(&self, _level: Level) -> bool {
        false
    }

    fn handle(&self, _record: &Record) -> Result<()> {
        Ok(())
    }

    fn with_attrs(self: Arc<Self>, _attrs: &[Field]) -> Arc<dyn Handler> {
        self
    }

    fn with_group(self: Arc<Self>, _name: &str) -> Arc<dyn Handler> {
        self
    }
}
