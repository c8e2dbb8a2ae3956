//! Error types for parsing and typed deserialization.
//!
//! Every parse failure is terminal: the first error aborts the whole
//! [`parse`](crate::parse) call and no partial tree is returned.
//!
//! ## Error Categories
//!
//! - **Grammar errors**: [`Error::InvalidSyntax`], [`Error::InvalidValue`],
//!   [`Error::UnexpectedCharacter`] and [`Error::UnexpectedEof`]
//! - **Numeric conversion errors**: [`Error::Overflow`] and
//!   [`Error::InvalidCharacter`]
//! - **Boundary errors**: I/O failures from the reader helpers and type
//!   mismatches from typed deserialization
//!
//! Parse errors carry the 1-based line and column of the cursor at the point
//! the failure was detected.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tinytoml::{parse, ErrorKind};
//!
//! let err = parse("a 1").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidSyntax);
//! assert!(err.to_string().contains("line 1"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Grammar violation: missing `=`, empty key, bad escape, malformed
    /// array-of-tables closer.
    #[error("Invalid syntax at line {line}, column {col}: {msg}")]
    InvalidSyntax { line: usize, col: usize, msg: String },

    /// A value production saw a character it cannot start from.
    #[error("Invalid value at line {line}, column {col}: {msg}")]
    InvalidValue { line: usize, col: usize, msg: String },

    /// A separator or terminator was expected but something else was found.
    #[error("Unexpected character {found:?} at line {line}, column {col}, expected {expected}")]
    UnexpectedCharacter {
        line: usize,
        col: usize,
        found: char,
        expected: String,
    },

    /// Input ended in the middle of a production.
    #[error("Unexpected end of input at line {line}, column {col}\nExpected: {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
    },

    /// A numeric literal does not fit in 64 bits.
    #[error("Numeric overflow at line {line}, column {col}: {literal}")]
    Overflow {
        line: usize,
        col: usize,
        literal: String,
    },

    /// A numeric literal could not be converted.
    #[error("Invalid numeric literal at line {line}, column {col}: {literal}")]
    InvalidCharacter {
        line: usize,
        col: usize,
        literal: String,
    },

    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Type mismatch during typed deserialization
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

/// The kind of an [`Error`], without position or message details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidSyntax,
    InvalidValue,
    UnexpectedCharacter,
    UnexpectedEof,
    Overflow,
    InvalidCharacter,
    Io,
    TypeMismatch,
    Custom,
}

impl Error {
    /// Creates an invalid syntax error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tinytoml::Error;
    ///
    /// let err = Error::invalid_syntax(3, 7, "expected '=' after key");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn invalid_syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::InvalidSyntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(line: usize, col: usize, msg: &str) -> Self {
        Error::InvalidValue {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an unexpected character error.
    pub fn unexpected_character(line: usize, col: usize, found: char, expected: &str) -> Self {
        Error::UnexpectedCharacter {
            line,
            col,
            found,
            expected: expected.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    /// Creates a numeric overflow error for the literal text.
    pub fn overflow(line: usize, col: usize, literal: &str) -> Self {
        Error::Overflow {
            line,
            col,
            literal: literal.to_string(),
        }
    }

    /// Creates an invalid numeric literal error.
    pub fn invalid_character(line: usize, col: usize, literal: &str) -> Self {
        Error::InvalidCharacter {
            line,
            col,
            literal: literal.to_string(),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tinytoml::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidSyntax { .. } => ErrorKind::InvalidSyntax,
            Error::InvalidValue { .. } => ErrorKind::InvalidValue,
            Error::UnexpectedCharacter { .. } => ErrorKind::UnexpectedCharacter,
            Error::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
            Error::Overflow { .. } => ErrorKind::Overflow,
            Error::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Error::Io(_) => ErrorKind::Io,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns the `(line, column)` of a parse error, if it has one.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::InvalidSyntax { line, col, .. }
            | Error::InvalidValue { line, col, .. }
            | Error::UnexpectedCharacter { line, col, .. }
            | Error::UnexpectedEof { line, col, .. }
            | Error::Overflow { line, col, .. }
            | Error::InvalidCharacter { line, col, .. } => Some((*line, *col)),
            Error::Io(_) | Error::TypeMismatch { .. } | Error::Custom(_) => None,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    fn invalid_type(unexp: serde::de::Unexpected, exp: &dyn serde::de::Expected) -> Self {
        Error::TypeMismatch {
            expected: exp.to_string(),
            found: unexp.to_string(),
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
