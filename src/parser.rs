//! Single-pass parser for the configuration grammar.
//!
//! This module provides [`Parser`], a cursor over an immutable input buffer
//! that builds the root [`Table`] directly, without a token stream.
//!
//! ## Overview
//!
//! - **Top-level loop**: skips blank space and `#` comments, then dispatches
//!   to table-header parsing on `[` or to key/value parsing otherwise
//! - **Active table**: key/value lines are written into the root until the
//!   first header, then into the table (or array-of-tables element) that the
//!   most recent header introduced
//! - **Value dispatch**: one character of lookahead selects the production;
//!   digits and signs go through a date-time heuristic first
//! - **Nesting**: open arrays and inline tables are kept on a heap stack, so
//!   deeply nested input does not grow the call stack
//! - **No recovery**: the first error aborts the whole parse
//!
//! ## Usage
//!
//! ```rust
//! use serde_tinytoml::{parse, Value};
//!
//! let root = parse("[[pt]]\nx = 1\n[[pt]]\nx = 2").unwrap();
//! let points = root.get("pt").and_then(|v| v.as_array()).unwrap();
//! assert_eq!(points.len(), 2);
//! assert_eq!(points[1].get_path(&["x"]), Some(&Value::Integer(2)));
//! ```
//!
//! Header names are flat keys: `[a.b]` is stored under the literal key
//! `"a.b"`, not as a table `a` containing a table `b`.

use crate::{Datetime, Error, Result, Table, Value};
use std::num::IntErrorKind;

/// Parses a complete input buffer into its root table.
///
/// # Examples
///
/// ```rust
/// use serde_tinytoml::{parse, ErrorKind};
///
/// let root = parse("a = 1\na = 2").unwrap();
/// assert_eq!(root.get("a").and_then(|v| v.as_integer()), Some(2));
///
/// assert_eq!(parse("a = x").unwrap_err().kind(), ErrorKind::InvalidValue);
/// ```
///
/// # Errors
///
/// Returns the first grammar or numeric-conversion error encountered. No
/// partial tree is returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Table> {
    Parser::new(input).parse()
}

/// Where key/value lines are currently written.
#[derive(Debug, Clone, PartialEq)]
enum ActiveTable {
    Root,
    /// The table stored in the root under this name by `[name]`.
    Table(String),
    /// The last element of the array stored in the root by `[[name]]`.
    ArrayElement(String),
}

/// An array or inline table whose closing bracket has not been read yet.
#[derive(Debug)]
enum OpenContainer {
    Array {
        line: usize,
        col: usize,
        elements: Vec<Value>,
    },
    /// `key` holds the key of the entry currently being read.
    InlineTable {
        line: usize,
        col: usize,
        table: Table,
        key: String,
    },
}

impl OpenContainer {
    fn push(&mut self, value: Value) {
        match self {
            OpenContainer::Array { elements, .. } => elements.push(value),
            OpenContainer::InlineTable { table, key, .. } => {
                table.insert(std::mem::take(key), value);
            }
        }
    }

    fn into_value(self) -> Value {
        match self {
            OpenContainer::Array { elements, .. } => Value::Array(elements),
            OpenContainer::InlineTable { table, .. } => Value::Table(table),
        }
    }
}

/// The parser state for one call.
///
/// Created via [`Parser::new`] and consumed by [`Parser::parse`]. Each parser
/// owns its cursor, its root table and its active-table selector, so
/// independent parses never interfere.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    root: Table,
    active: ActiveTable,
    open: Vec<OpenContainer>,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
            root: Table::new(),
            active: ActiveTable::Root,
            open: Vec::new(),
        }
    }

    /// Runs the top-level loop to the end of input and returns the root table.
    ///
    /// # Errors
    ///
    /// See [`parse`].
    pub fn parse(mut self) -> Result<Table> {
        loop {
            self.skip_whitespace_and_comments();
            match self.peek_char() {
                None => break,
                Some('[') => self.parse_table_header()?,
                Some(_) => {
                    let key = self.parse_key()?;
                    let value = self.parse_value()?;
                    self.skip_rest_of_line();
                    log::trace!("assign {:?} ({}) in {:?}", key, value.type_str(), self.active);
                    self.active_table_mut()?.insert(key, value);
                }
            }
        }

        log::debug!(
            "parsed {} lines into a root table with {} keys",
            self.line,
            self.root.len()
        );
        Ok(self.root)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_char_after_blanks(&self) -> Option<char> {
        self.input[self.position..]
            .chars()
            .find(|ch| *ch != ' ' && *ch != '\t')
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some(ch) = self.peek_char() {
            self.position += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    /// Skips spaces and tabs on the current line.
    fn skip_blanks(&mut self) {
        while let Some(' ' | '\t') = self.peek_char() {
            self.next_char();
        }
    }

    /// Skips up to, but not including, the next newline.
    fn skip_rest_of_line(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.next_char();
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.next_char();
                }
                Some('#') => self.skip_rest_of_line(),
                _ => break,
            }
        }
    }

    fn active_table_mut(&mut self) -> Result<&mut Table> {
        let (line, col) = (self.line, self.column);
        let missing = || Error::invalid_syntax(line, col, "active table is no longer a table");
        match &self.active {
            ActiveTable::Root => Ok(&mut self.root),
            ActiveTable::Table(name) => match self.root.get_mut(name) {
                Some(Value::Table(table)) => Ok(table),
                _ => Err(missing()),
            },
            ActiveTable::ArrayElement(name) => match self.root.get_mut(name) {
                Some(Value::Array(elements)) => match elements.last_mut() {
                    Some(Value::Table(table)) => Ok(table),
                    _ => Err(missing()),
                },
                _ => Err(missing()),
            },
        }
    }

    fn parse_table_header(&mut self) -> Result<()> {
        let (line, col) = (self.line, self.column);
        self.next_char(); // consume '['
        let is_array = self.peek_char() == Some('[');
        if is_array {
            self.next_char();
        }

        let start = self.position;
        loop {
            match self.peek_char() {
                None => {
                    return Err(Error::unexpected_eof(
                        self.line,
                        self.column,
                        "']' to close the table header",
                    ))
                }
                Some(']') => break,
                Some('\n' | '\r') => {
                    return Err(Error::invalid_syntax(
                        self.line,
                        self.column,
                        "table header must be closed on the same line",
                    ))
                }
                Some(_) => {
                    self.next_char();
                }
            }
        }
        let name = self.input[start..self.position]
            .trim_end_matches([' ', '\t'])
            .to_string();
        self.next_char(); // consume ']'

        if is_array {
            if self.peek_char() != Some(']') {
                return Err(Error::invalid_syntax(
                    self.line,
                    self.column,
                    "expected ']]' to close the array-of-tables header",
                ));
            }
            self.next_char();
        }

        if name.is_empty() {
            return Err(Error::invalid_syntax(line, col, "empty table name"));
        }

        self.skip_blanks();
        match self.peek_char() {
            None | Some('\n' | '\r' | '#') => {}
            Some(ch) => {
                return Err(Error::unexpected_character(
                    self.line,
                    self.column,
                    ch,
                    "end of line after the table header",
                ))
            }
        }

        if is_array {
            if let Some(Value::Array(elements)) = self.root.get_mut(&name) {
                elements.push(Value::Table(Table::new()));
                log::trace!("[[{}]] element {}", name, elements.len());
            } else {
                self.root
                    .insert(name.clone(), Value::Array(vec![Value::Table(Table::new())]));
                log::trace!("[[{}]] element 1", name);
            }
            self.active = ActiveTable::ArrayElement(name);
        } else {
            log::trace!("[{}]", name);
            self.root.insert(name.clone(), Value::Table(Table::new()));
            self.active = ActiveTable::Table(name);
        }
        Ok(())
    }

    /// Scans a bare key and consumes the `=` that follows it.
    ///
    /// Blanks inside the key are kept unless only blanks separate them from
    /// the `=`.
    fn parse_key(&mut self) -> Result<String> {
        let (line, col) = (self.line, self.column);
        let start = self.position;
        let end = loop {
            match self.peek_char() {
                None | Some('\n' | '\r') => {
                    return Err(Error::invalid_syntax(
                        self.line,
                        self.column,
                        "expected '=' after key",
                    ))
                }
                Some('=') => break self.position,
                Some(' ' | '\t') => {
                    let blanks_start = self.position;
                    let followed_by_equals = self.peek_char_after_blanks() == Some('=');
                    self.skip_blanks();
                    if followed_by_equals {
                        break blanks_start;
                    }
                }
                Some(_) => {
                    self.next_char();
                }
            }
        };
        self.next_char(); // consume '='

        let key = &self.input[start..end];
        if key.is_empty() {
            return Err(Error::invalid_syntax(line, col, "empty key"));
        }
        Ok(key.to_string())
    }

    /// Reads one complete value, nested arrays and inline tables included.
    ///
    /// Containers are tracked on the `open` stack rather than the call stack,
    /// so nesting depth is limited by memory only.
    fn parse_value(&mut self) -> Result<Value> {
        loop {
            let mut finished = self.parse_value_start()?;
            while let Some(value) = finished {
                match self.open.last_mut() {
                    None => return Ok(value),
                    Some(container) => container.push(value),
                }
                finished = self.finish_entry()?;
            }
        }
    }

    /// Reads a scalar, or opens a container and returns `None` when an entry
    /// of that container has to be read next.
    fn parse_value_start(&mut self) -> Result<Option<Value>> {
        loop {
            self.skip_blanks();
            let (line, col) = (self.line, self.column);
            match self.peek_char() {
                None => return Err(Error::unexpected_eof(line, col, "a value")),
                Some('"') => return self.parse_string().map(|s| Some(Value::String(s))),
                Some('t' | 'f') => return self.parse_bool().map(|b| Some(Value::Boolean(b))),
                Some('[') => {
                    self.next_char();
                    self.open.push(OpenContainer::Array {
                        line,
                        col,
                        elements: Vec::new(),
                    });
                    return self.begin_entry();
                }
                Some('{') => {
                    self.next_char();
                    self.open.push(OpenContainer::InlineTable {
                        line,
                        col,
                        table: Table::new(),
                        key: String::new(),
                    });
                    return self.begin_entry();
                }
                Some(ch) if ch.is_ascii_digit() || ch == '+' || ch == '-' => {
                    return if self.looks_like_datetime() {
                        Ok(Some(self.parse_datetime()))
                    } else {
                        self.parse_number().map(Some)
                    };
                }
                Some('\n' | '\r') => {
                    return Err(Error::invalid_value(line, col, "missing value before end of line"))
                }
                Some('#') => {
                    self.skip_rest_of_line();
                    self.skip_whitespace_and_comments();
                }
                Some(ch) => {
                    return Err(Error::invalid_value(
                        line,
                        col,
                        &format!("a value cannot start with {:?}", ch),
                    ))
                }
            }
        }
    }

    /// Moves to the next entry of the innermost open container. For an
    /// inline table the entry's key is read here. Returns the finished
    /// container if its closer comes first.
    fn begin_entry(&mut self) -> Result<Option<Value>> {
        self.skip_whitespace_and_comments();
        let (closer, line, col, keyed) = self.innermost()?;
        match self.peek_char() {
            None => Err(Error::unexpected_eof(line, col, closing_message(closer))),
            Some(ch) if ch == closer => {
                self.next_char();
                Ok(self.open.pop().map(OpenContainer::into_value))
            }
            Some(_) => {
                if keyed {
                    let key = self.parse_key()?;
                    if let Some(OpenContainer::InlineTable { key: slot, .. }) = self.open.last_mut() {
                        *slot = key;
                    }
                }
                Ok(None)
            }
        }
    }

    /// Consumes the separator after an entry of the innermost open container.
    fn finish_entry(&mut self) -> Result<Option<Value>> {
        self.skip_whitespace_and_comments();
        let (closer, line, col, _) = self.innermost()?;
        match self.peek_char() {
            Some(',') => {
                self.next_char();
                self.begin_entry()
            }
            Some(ch) if ch == closer => {
                self.next_char();
                Ok(self.open.pop().map(OpenContainer::into_value))
            }
            Some(ch) => Err(Error::unexpected_character(
                self.line,
                self.column,
                ch,
                if closer == ']' { "',' or ']'" } else { "',' or '}'" },
            )),
            None => Err(Error::unexpected_eof(line, col, closing_message(closer))),
        }
    }

    /// Closing character, opening position and keyedness of the innermost
    /// open container.
    fn innermost(&self) -> Result<(char, usize, usize, bool)> {
        match self.open.last() {
            Some(OpenContainer::Array { line, col, .. }) => Ok((']', *line, *col, false)),
            Some(OpenContainer::InlineTable { line, col, .. }) => Ok(('}', *line, *col, true)),
            None => Err(Error::invalid_syntax(self.line, self.column, "no open array or inline table")),
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        let (line, col) = (self.line, self.column);
        self.next_char(); // consume opening quote
        let mut result = String::new();

        loop {
            match self.next_char() {
                None => return Err(Error::unexpected_eof(line, col, "closing '\"'")),
                Some('"') => return Ok(result),
                Some('\\') => match self.next_char() {
                    Some('n') => result.push('\n'),
                    Some('t') => result.push('\t'),
                    Some('\\') => result.push('\\'),
                    Some('"') => result.push('"'),
                    Some(other) => {
                        return Err(Error::invalid_syntax(
                            self.line,
                            self.column,
                            &format!("unsupported escape sequence '\\{}'", other),
                        ))
                    }
                    None => return Err(Error::unexpected_eof(line, col, "closing '\"'")),
                },
                Some(ch) => result.push(ch),
            }
        }
    }

    fn parse_bool(&mut self) -> Result<bool> {
        let (line, col) = (self.line, self.column);
        let rest = &self.input[self.position..];
        let (value, len) = if rest.starts_with("true") {
            (true, 4)
        } else if rest.starts_with("false") {
            (false, 5)
        } else {
            return Err(Error::invalid_value(line, col, "expected 'true' or 'false'"));
        };
        if rest[len..]
            .chars()
            .next()
            .is_some_and(|ch| ch.is_alphanumeric() || ch == '_' || ch == '-')
        {
            return Err(Error::invalid_value(line, col, "expected 'true' or 'false'"));
        }
        for _ in 0..len {
            self.next_char();
        }
        Ok(value)
    }

    /// A value starting with a `19` or `20` century and a `-` in fifth
    /// position is a date-time; anything else starting with a digit or sign
    /// is a number.
    fn looks_like_datetime(&self) -> bool {
        let rest = self.input[self.position..].as_bytes();
        rest.len() >= 5 && (rest.starts_with(b"19") || rest.starts_with(b"20")) && rest[4] == b'-'
    }

    fn parse_datetime(&mut self) -> Value {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() || matches!(ch, '-' | ':' | 'T' | 'Z' | '+' | '.') {
                self.next_char();
            } else {
                break;
            }
        }
        Value::Datetime(Datetime::new(&self.input[start..self.position]))
    }

    fn parse_number(&mut self) -> Result<Value> {
        let (line, col) = (self.line, self.column);
        let start = self.position;
        let mut has_decimal = false;
        while let Some(ch) = self.peek_char() {
            match ch {
                '0'..='9' | '+' | '-' | 'e' | 'E' => {}
                '.' => has_decimal = true,
                _ => break,
            }
            self.next_char();
        }

        let literal = &self.input[start..self.position];
        if has_decimal {
            match literal.parse::<f64>() {
                Ok(float) if float.is_finite() => Ok(Value::Float(float)),
                Ok(_) => Err(Error::overflow(line, col, literal)),
                Err(_) => Err(Error::invalid_character(line, col, literal)),
            }
        } else {
            literal
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|e| match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        Error::overflow(line, col, literal)
                    }
                    _ => Error::invalid_character(line, col, literal),
                })
        }
    }
}

fn closing_message(closer: char) -> &'static str {
    if closer == ']' {
        "']' to close the array"
    } else {
        "'}' to close the inline table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn value_of(input: &str) -> Value {
        let root = parse(input).unwrap();
        root.get("v").cloned().unwrap()
    }

    fn kind_of(input: &str) -> ErrorKind {
        parse(input).unwrap_err().kind()
    }

    #[test]
    fn test_empty_and_comment_only_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("  \n\t\r\n# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn test_key_whitespace_lookahead() {
        let root = parse("a   =\t1\nmy key = 2\n").unwrap();
        assert_eq!(root.get("a"), Some(&Value::Integer(1)));
        assert_eq!(root.get("my key"), Some(&Value::Integer(2)));
    }

    #[test]
    fn test_key_errors() {
        assert_eq!(kind_of("a 1"), ErrorKind::InvalidSyntax);
        assert_eq!(kind_of("= 1"), ErrorKind::InvalidSyntax);
        assert_eq!(kind_of("a\n= 1"), ErrorKind::InvalidSyntax);
        assert_eq!(kind_of("a\r= 1"), ErrorKind::InvalidSyntax);
        assert_eq!(kind_of("lonely"), ErrorKind::InvalidSyntax);
    }

    #[test]
    fn test_trailing_comment_and_garbage_discarded() {
        let root = parse("a = 1 # one\nb = \"x\"   trailing\n").unwrap();
        assert_eq!(root.get("a"), Some(&Value::Integer(1)));
        assert_eq!(root.get("b"), Some(&Value::from("x")));
    }

    #[test]
    fn test_strings_and_escapes() {
        assert_eq!(value_of(r#"v = "a\tb\nc\\d\"e""#), Value::from("a\tb\nc\\d\"e"));
        assert_eq!(value_of(r#"v = """#), Value::from(""));
        assert_eq!(value_of("v = \"19\""), Value::from("19"));
        assert_eq!(kind_of(r#"v = "bad \q escape""#), ErrorKind::InvalidSyntax);
        assert_eq!(kind_of("v = \"unterminated"), ErrorKind::UnexpectedEof);
        assert_eq!(kind_of("v = \"trailing\\"), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_booleans() {
        assert_eq!(value_of("v = true"), Value::Boolean(true));
        assert_eq!(value_of("v = false # no"), Value::Boolean(false));
        assert_eq!(kind_of("v = tru"), ErrorKind::InvalidValue);
        assert_eq!(kind_of("v = falsey"), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_integers() {
        assert_eq!(value_of("v = 42"), Value::Integer(42));
        assert_eq!(value_of("v = -5"), Value::Integer(-5));
        assert_eq!(value_of("v = +17"), Value::Integer(17));
        assert_eq!(value_of("v = 0"), Value::Integer(0));
        assert_eq!(
            value_of("v = -9223372036854775808"),
            Value::Integer(i64::MIN)
        );
    }

    #[test]
    fn test_integer_conversion_failures() {
        assert_eq!(kind_of("v = 9223372036854775808"), ErrorKind::Overflow);
        assert_eq!(kind_of("v = -9223372036854775809"), ErrorKind::Overflow);
        assert_eq!(kind_of("v = 1e5"), ErrorKind::InvalidCharacter);
        assert_eq!(kind_of("v = 1-2"), ErrorKind::InvalidCharacter);
        assert_eq!(kind_of("v = -"), ErrorKind::InvalidCharacter);
    }

    #[test]
    fn test_floats() {
        assert_eq!(value_of("v = 3.25"), Value::Float(3.25));
        assert_eq!(value_of("v = -0.5"), Value::Float(-0.5));
        assert_eq!(value_of("v = 6.02e23"), Value::Float(6.02e23));
        assert_eq!(value_of("v = 1.5E-3"), Value::Float(1.5e-3));
        assert_eq!(kind_of("v = 1.2.3"), ErrorKind::InvalidCharacter);
    }

    #[test]
    fn test_float_out_of_range_overflows() {
        assert_eq!(kind_of("v = 1.0e999"), ErrorKind::Overflow);
        assert_eq!(kind_of("v = -1.5e400"), ErrorKind::Overflow);
        assert_eq!(value_of("v = 1.0e-999"), Value::Float(0.0));
    }

    #[test]
    fn test_datetime_heuristic() {
        assert_eq!(
            value_of("v = 2024-01-01T00:00:00Z"),
            Value::Datetime(Datetime::new("2024-01-01T00:00:00Z"))
        );
        assert_eq!(
            value_of("v = 1979-05-27T07:32:00.999-07:00"),
            Value::Datetime(Datetime::new("1979-05-27T07:32:00.999-07:00"))
        );
        assert_eq!(
            value_of("v = 1999-12-31"),
            Value::Datetime(Datetime::new("1999-12-31"))
        );
        // only the 19xx and 20xx centuries are recognised
        assert_eq!(kind_of("v = 2124-01-01"), ErrorKind::InvalidCharacter);
        assert_eq!(value_of("v = 2024"), Value::Integer(2024));
        assert_eq!(value_of("v = 19"), Value::Integer(19));
    }

    #[test]
    fn test_datetime_is_not_validated() {
        assert_eq!(
            value_of("v = 2024-99-99T99:99"),
            Value::Datetime(Datetime::new("2024-99-99T99:99"))
        );
    }

    #[test]
    fn test_value_dispatch_errors() {
        assert_eq!(kind_of("v = x"), ErrorKind::InvalidValue);
        assert_eq!(kind_of("v =\nw = 1"), ErrorKind::InvalidValue);
        assert_eq!(kind_of("v = "), ErrorKind::UnexpectedEof);
        assert_eq!(kind_of("v = 'single'"), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_comment_before_value_is_skipped() {
        assert_eq!(value_of("v = # the answer\n  42"), Value::Integer(42));
        assert_eq!(kind_of("v = # nothing follows"), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_arrays() {
        assert_eq!(value_of("v = []"), Value::Array(vec![]));
        assert_eq!(
            value_of("v = [1, 2, 3,]"),
            Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
        );
        assert_eq!(
            value_of("v = [\n  \"a\", # first\n  [true],\n  { k = 1.5 },\n]"),
            Value::Array(vec![
                Value::from("a"),
                Value::Array(vec![Value::Boolean(true)]),
                Value::Table(
                    vec![("k".to_string(), Value::Float(1.5))]
                        .into_iter()
                        .collect()
                ),
            ])
        );
    }

    #[test]
    fn test_array_errors() {
        assert_eq!(kind_of("v = [1, 2"), ErrorKind::UnexpectedEof);
        assert_eq!(kind_of("v = [1 2]"), ErrorKind::UnexpectedCharacter);
        assert_eq!(kind_of("v = [1,,2]"), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_inline_tables() {
        assert_eq!(value_of("v = {}"), Value::Table(Table::new()));
        let v = value_of("v = { a = 1, b c = \"x\", nested = { d = [] }, }");
        assert_eq!(v.get_path(&["a"]), Some(&Value::Integer(1)));
        assert_eq!(v.get_path(&["b c"]), Some(&Value::from("x")));
        assert_eq!(v.get_path(&["nested", "d"]), Some(&Value::Array(vec![])));
    }

    /// Unwraps `depth` levels of single-entry containers one at a time, so
    /// the tree is never dropped recursively.
    fn unwrap_nesting(mut value: Value, depth: usize) -> Value {
        for level in 0..depth {
            value = match value {
                Value::Array(mut elements) => {
                    assert_eq!(elements.len(), 1, "level {}", level);
                    elements.pop().unwrap()
                }
                Value::Table(mut table) => table.remove("a").unwrap(),
                other => panic!("expected a container at level {}, got {:?}", level, other),
            };
        }
        value
    }

    fn on_small_stack<F: FnOnce() + Send + 'static>(f: F) {
        std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(f)
            .unwrap()
            .join()
            .unwrap();
    }

    #[test]
    fn test_deeply_nested_arrays() {
        on_small_stack(|| {
            const DEPTH: usize = 50_000;
            let input = format!("v = {}1{}", "[".repeat(DEPTH), "]".repeat(DEPTH));
            let mut root = parse(&input).unwrap();
            let value = root.remove("v").unwrap();
            assert_eq!(unwrap_nesting(value, DEPTH), Value::Integer(1));
        });
    }

    #[test]
    fn test_deeply_nested_inline_tables() {
        on_small_stack(|| {
            const DEPTH: usize = 50_000;
            let input = format!("v = {}true{}", "{ a = ".repeat(DEPTH), " }".repeat(DEPTH));
            let mut root = parse(&input).unwrap();
            let value = root.remove("v").unwrap();
            assert_eq!(unwrap_nesting(value, DEPTH), Value::Boolean(true));
        });
    }

    #[test]
    fn test_deeply_nested_unclosed_input_fails() {
        on_small_stack(|| {
            let input = format!("v = {}", "[{ a = ".repeat(50_000));
            assert_eq!(kind_of(&input), ErrorKind::UnexpectedEof);
        });
    }

    #[test]
    fn test_inline_table_errors() {
        assert_eq!(kind_of("v = { a = 1"), ErrorKind::UnexpectedEof);
        assert_eq!(kind_of("v = { a = 1; b = 2 }"), ErrorKind::UnexpectedCharacter);
        assert_eq!(kind_of("v = { a }"), ErrorKind::InvalidSyntax);
    }

    #[test]
    fn test_table_header_names() {
        let root = parse("[server  \t]\nport = 1\n[a.b]\nc = 2").unwrap();
        assert_eq!(root.get_path(&["server", "port"]), Some(&Value::Integer(1)));
        assert_eq!(root.get_path(&["a.b", "c"]), Some(&Value::Integer(2)));
        assert!(root.get("a").is_none());
    }

    #[test]
    fn test_table_header_errors() {
        assert_eq!(kind_of("[server"), ErrorKind::UnexpectedEof);
        assert_eq!(kind_of("[[points]"), ErrorKind::InvalidSyntax);
        assert_eq!(kind_of("[[points]x"), ErrorKind::InvalidSyntax);
        assert_eq!(kind_of("[]"), ErrorKind::InvalidSyntax);
        assert_eq!(kind_of("[a\n]"), ErrorKind::InvalidSyntax);
        assert_eq!(kind_of("[a] b = 1"), ErrorKind::UnexpectedCharacter);
    }

    #[test]
    fn test_header_allows_trailing_comment() {
        let root = parse("[a] # section\nx = 1").unwrap();
        assert_eq!(root.get_path(&["a", "x"]), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_repeated_table_header_replaces_table() {
        let root = parse("[a]\nx = 1\n[a]\ny = 2").unwrap();
        let a = root.get("a").and_then(|v| v.as_table()).unwrap();
        assert!(a.get("x").is_none());
        assert_eq!(a.get("y"), Some(&Value::Integer(2)));
    }

    #[test]
    fn test_array_of_tables_after_plain_value() {
        let root = parse("pt = 5\n[[pt]]\nx = 1").unwrap();
        let pt = root.get("pt").and_then(|v| v.as_array()).unwrap();
        assert_eq!(pt.len(), 1);
        assert_eq!(pt[0].get_path(&["x"]), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_error_positions() {
        let err = parse("a = 1\nb = ?").unwrap_err();
        assert_eq!(err.position(), Some((2, 5)));

        let err = parse("a = \"open").unwrap_err();
        assert_eq!(err.position(), Some((1, 5)));
    }

    #[test]
    fn test_crlf_line_endings() {
        let root = parse("a = 1\r\n[t]\r\nb = \"x\"\r\n").unwrap();
        assert_eq!(root.get("a"), Some(&Value::Integer(1)));
        assert_eq!(root.get_path(&["t", "b"]), Some(&Value::from("x")));
    }
}
