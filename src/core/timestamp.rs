//! Timestamp formatting for formatter sinks

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format used when a sink is configured to log timestamps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45.123456`
    #[default]
    DateTimeMicros,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Any strftime-compatible format string
    Custom(String),
}

impl TimestampFormat {
    /// Reject custom format strings chrono cannot render.
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(format_str) => {
                if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                    return Err(LoggerError::config(
                        "TimestampFormat",
                        format!("invalid strftime format '{}'", format_str),
                    ));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let text = match self {
            TimestampFormat::DateTimeMicros => {
                datetime.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
            }
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut text = String::new();
                write!(text, "{}", datetime.format(format_str)).map_err(|_| {
                    LoggerError::formatter(
                        "timestamp",
                        format!("cannot render '{}'", format_str),
                    )
                })?;
                text
            }
        };
        Ok(text)
    }

    /// Numeric formats are written unquoted.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }
}
