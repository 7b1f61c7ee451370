//! Handler-side log record

use super::field::Field;
use super::log_level::Level;
use chrono::{DateTime, Utc};

/// A single log event as seen by a [`crate::Handler`].
///
/// Attributes keep their insertion order and may repeat keys.
#[derive(Debug, Clone)]
pub struct Record {
    pub level: Level,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    attrs: Vec<Field>,
}

impl Record {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attrs<I>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        self.attrs.extend(attrs);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn attrs(&self) -> impl Iterator<Item = &Field> {
        self.attrs.iter()
    }

    pub fn num_attrs(&self) -> usize {
        self.attrs.len()
    }
}
