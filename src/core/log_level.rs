//! Severity and verbosity definitions
//!
//! Two leveling models meet in this crate:
//!
//! - [`Verbosity`] is used by the facade ([`crate::LogSink`]): `0` is the most
//!   important output and larger values are increasingly chatty.
//! - [`Level`] is the signed severity scale used by [`crate::Handler`]
//!   implementations, with [`Level::INFO`] as the baseline and
//!   [`Level::ERROR`] as the threshold for error records.

use super::error::LoggerError;
use std::fmt;
use std::str::FromStr;

/// Facade verbosity. `0` is always the most important level.
pub type Verbosity = u32;

/// Signed severity. Values between the named constants are valid and order
/// naturally, e.g. `Level(2)` is more severe than `INFO` but less than `WARN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(pub i32);

impl Level {
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);

    #[inline]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Whether records at this level take the error path.
    #[inline]
    pub const fn is_error(self) -> bool {
        self.0 >= Level::ERROR.0
    }

    /// Name of the closest named level at or below this one.
    pub fn to_str(&self) -> &'static str {
        self.base().0
    }

    fn base(&self) -> (&'static str, Level) {
        if *self < Level::INFO {
            ("DEBUG", Level::DEBUG)
        } else if *self < Level::WARN {
            ("INFO", Level::INFO)
        } else if *self < Level::ERROR {
            ("WARN", Level::WARN)
        } else {
            ("ERROR", Level::ERROR)
        }
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, base) = self.base();
        let offset = i64::from(self.0) - i64::from(base.0);
        if offset == 0 {
            write!(f, "{}", name)
        } else {
            write!(f, "{}{:+}", name, offset)
        }
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    /// Parses `INFO`, `warn`, `DEBUG-2`, `ERROR+4` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LoggerError::InvalidLevel(s.to_string());
        let (name, offset) = match s.find(|c: char| c == '+' || c == '-') {
            Some(idx) => {
                let offset: i64 = s[idx..].parse().map_err(|_| invalid())?;
                (&s[..idx], offset)
            }
            None => (s, 0),
        };

        let base = match name.to_uppercase().as_str() {
            "DEBUG" => Level::DEBUG,
            "INFO" => Level::INFO,
            "WARN" | "WARNING" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => return Err(invalid()),
        };

        i32::try_from(i64::from(base.0) + offset)
            .map(Level)
            .map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_levels_display() {
        assert_eq!(Level::DEBUG.to_string(), "DEBUG");
        assert_eq!(Level::INFO.to_string(), "INFO");
        assert_eq!(Level::WARN.to_string(), "WARN");
        assert_eq!(Level::ERROR.to_string(), "ERROR");
    }

    #[test]
    fn test_offset_levels_display() {
        assert_eq!(Level(2).to_string(), "INFO+2");
        assert_eq!(Level(-5).to_string(), "DEBUG-1");
        assert_eq!(Level(12).to_string(), "ERROR+4");
        assert_eq!(Level(i32::MIN).to_str(), "DEBUG");
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::INFO);
        assert_eq!("Warning".parse::<Level>().unwrap(), Level::WARN);
        assert_eq!("DEBUG-2".parse::<Level>().unwrap(), Level(-6));
        assert_eq!("ERROR+4".parse::<Level>().unwrap(), Level(12));
        assert!("LOUD".parse::<Level>().is_err());
        assert!("INFO+x".parse::<Level>().is_err());
    }

    #[test]
    fn test_error_threshold() {
        assert!(!Level::WARN.is_error());
        assert!(!Level(7).is_error());
        assert!(Level::ERROR.is_error());
        assert!(Level(i32::MAX).is_error());
    }

    #[test]
    fn test_ordering() {
        assert!(Level::DEBUG < Level::INFO);
        assert!(Level::INFO < Level::WARN);
        assert!(Level::WARN < Level::ERROR);
    }
}
