//! Macros for building key-value pairs at log call sites.
//!
//! # Examples
//!
//! ```
//! use rust_logr_bridge::prelude::*;
//! use rust_logr_bridge::{error, info};
//!
//! let logger = Logger::discard();
//!
//! info!(logger, "Server started");
//! info!(logger.v(2), "Listening", "port" => 8080, "tls" => false);
//!
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "refused");
//! error!(logger, Some(&err), "Connect failed", "host" => "db");
//! ```

/// Build an array of [`Field`](crate::Field)s from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_logr_bridge::{fields, Field};
///
/// let pairs = fields!["user" => "alice", "id" => 42];
/// assert_eq!(pairs[1], Field::new("id", 42));
/// ```
#[macro_export]
macro_rules! fields {
    ($($key:expr => $value:expr),* $(,)?) => {
        [$($crate::Field::new($key, $value)),*]
    };
}

/// Log a non-error message through a [`Logger`](crate::Logger).
#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.info(
            ::core::convert::AsRef::<str>::as_ref(&$msg),
            &$crate::fields![$($key => $value),*],
        )
    };
}

/// Log an error through a [`Logger`](crate::Logger). The second argument is
/// the optional cause.
#[macro_export]
macro_rules! error {
    ($logger:expr, $err:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.error(
            $err,
            ::core::convert::AsRef::<str>::as_ref(&$msg),
            &$crate::fields![$($key => $value),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Field, Logger};
    use crate::sinks::FuncSink;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn capture() -> (Logger, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let out = Arc::clone(&lines);
        let sink = FuncSink::builder()
            .verbosity(1)
            .build(move |line| out.lock().push(line.to_string()));
        (Logger::new(Arc::new(sink)), lines)
    }

    #[test]
    fn test_fields_macro() {
        let pairs = fields!["a" => 1, "b" => "two",];
        assert_eq!(pairs, [Field::new("a", 1), Field::new("b", "two")]);
    }

    #[test]
    fn test_info_macro() {
        let (logger, lines) = capture();
        info!(logger, "plain");
        info!(logger.v(1), String::from("owned"), "k" => 1.5);
        info!(logger.v(2), "suppressed");

        let lines = lines.lock();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], r#"{"logger":"","level":1,"msg":"owned","k":1.5}"#);
    }

    #[test]
    fn test_error_macro() {
        let (logger, lines) = capture();
        error!(logger.v(9), None, "failed", "code" => 500);

        assert_eq!(
            lines.lock()[0],
            r#"{"logger":"","level":0,"msg":"failed","code":500}"#
        );
    }
}
