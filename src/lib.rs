//! # serde_tinytoml
//!
//! A small, strict parser and in-memory data model for a reduced TOML-style
//! configuration format: nested tables of typed key/value pairs, arrays,
//! inline tables and array-of-tables sequences.
//!
//! ## The Format
//!
//! ```text
//! # comments run to the end of the line
//! title = "example"
//! retries = 3
//! ratio = 0.75
//! enabled = true
//! started = 2024-01-01T00:00:00Z
//! ports = [80, 443,]
//! limits = { cpu = 2, mem = "1G" }
//!
//! [server]
//! host = "localhost"
//!
//! [[worker]]
//! name = "a"
//!
//! [[worker]]
//! name = "b"
//! ```
//!
//! The grammar is deliberately reduced:
//!
//! - Keys are bare text up to `=`; header names such as `[a.b]` are flat keys
//! - Strings are `"..."` with the escapes `\n`, `\t`, `\\` and `\"` only
//! - Numbers are `i64` unless they contain a `.`, in which case they are `f64`
//! - A literal starting with `19` or `20` and a `-` in fifth position is a
//!   date-time, stored verbatim without validation
//! - A later assignment to the same key replaces the earlier one
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_tinytoml::{get, parse, Value};
//!
//! let root = parse("[server]\nport = 8080\n[[worker]]\nid = 1\n[[worker]]\nid = 2").unwrap();
//!
//! assert_eq!(get(&root, &["server", "port"]), Some(&Value::Integer(8080)));
//! assert_eq!(root.get("worker").and_then(|v| v.as_array()).map(Vec::len), Some(2));
//! assert_eq!(get(&root, &["server", "missing"]), None);
//! ```
//!
//! ### Typed Configuration
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_tinytoml::from_str;
//!
//! #[derive(Deserialize)]
//! struct Config { name: String, ports: Vec<u16> }
//!
//! let config: Config = from_str("name = \"svc\"\nports = [80, 443]").unwrap();
//! assert_eq!(config.ports, vec![80, 443]);
//! ```
//!
//! ## Errors
//!
//! Parsing stops at the first error; see [`Error`] for the kinds and the
//! position information they carry.
//!
//! ## Logging
//!
//! The parser emits `trace` records for every header and assignment and a
//! `debug` summary per parse through the [`log`] facade. Install any logger
//! to see them.

pub mod de;
pub mod error;
pub mod macros;
pub mod options;
pub mod parser;
pub mod render;
pub mod table;
pub mod value;

pub use de::{from_reader, from_slice, from_str, from_value, ValueDeserializer};
pub use error::{Error, ErrorKind, Result};
pub use options::RenderOptions;
pub use parser::{parse, Parser};
pub use render::{to_string, to_string_pretty, to_string_with_options};
pub use table::Table;
pub use value::{Datetime, Value};

/// Resolves a sequence of key segments from `root` through nested tables.
///
/// Returns `None` if any segment is missing or an intermediate value is not
/// a table. This is a lookup miss, never an error.
///
/// # Examples
///
/// ```rust
/// use serde_tinytoml::{get, parse};
///
/// let root = parse("a = { b = [1, 2, 3] }").unwrap();
/// assert_eq!(get(&root, &["a", "b"]).and_then(|v| v.as_array()).map(Vec::len), Some(3));
/// assert!(get(&root, &["a", "b", "c"]).is_none());
/// ```
#[must_use]
pub fn get<'t, S: AsRef<str>>(root: &'t Table, path: &[S]) -> Option<&'t Value> {
    root.get_path(path)
}
