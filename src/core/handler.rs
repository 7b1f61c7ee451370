//! Handler trait: the attribute/severity based backend contract

use super::error::Result;
use super::field::Field;
use super::log_level::Level;
use super::record::Record;
use std::sync::Arc;

/// Attribute and severity based log handler.
///
/// `handle` is only called after `enabled` returned true for the record's
/// level.
pub trait Handler: Send + Sync {
    fn enabled(&self, level: Level) -> bool;

    fn handle(&self, record: &Record) -> Result<()>;

    /// Handler whose records all carry `attrs`.
    fn with_attrs(self: Arc<Self>, attrs: &[Field]) -> Arc<dyn Handler>;

    /// Handler that qualifies all subsequent attribute keys with `name`.
    fn with_group(self: Arc<Self>, name: &str) -> Arc<dyn Handler>;
}
