//! # Error Types
//!
//! This module defines all error types for the chordsheet layout engine.
//!
//! The engine degrades gracefully almost everywhere: malformed chord symbols are
//! passed through, unknown blocks are skipped, and empty content simply renders
//! nothing. The variants below cover the few places where the caller has to act.
//!
//! ## Error Types
//! - `ParseError` - Song or listing JSON that could not be deserialized
//! - `InvalidConfiguration` - Layout requested with an impossible setup (e.g. zero columns)
//! - `UnknownViewport` - A viewport name that is not `mobile`, `tablet`, `desktop` or `print`
//!
//! ## Usage
//! ```rust
//! use chordsheet::{layout_song, SheetError, ViewportClass};
//!
//! let json = r#"{"artist": "A", "title": "T", "originalKey": "C", "content": []}"#;
//!
//! match layout_song(json, ViewportClass::Desktop, 0) {
//!     Ok(layout) => println!("{} columns", layout.columns.len()),
//!     Err(SheetError::ParseError { line, column, message }) => {
//!         eprintln!("Bad song file at {}:{}: {}", line, column, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    /// Song data could not be deserialized.
    ///
    /// Line and column point into the JSON source as reported by `serde_json`.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::SheetError;
    /// let err = SheetError::ParseError {
    ///     line: 3,
    ///     column: 14,
    ///     message: "expected `,` or `}`".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid song data at line 3, column 14: expected `,` or `}`");
    /// ```
    #[error("Invalid song data at line {line}, column {column}: {message}")]
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Layout was requested with a configuration that cannot be satisfied.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::SheetError;
    /// let err = SheetError::InvalidConfiguration("column count must be at least 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: column count must be at least 1");
    /// ```
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unknown viewport '{0}' (expected mobile, tablet, desktop or print)")]
    UnknownViewport(String),
}

impl From<serde_json::Error> for SheetError {
    fn from(e: serde_json::Error) -> Self {
        SheetError::ParseError {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}
