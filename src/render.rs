//! Human-readable rendering of parsed trees.
//!
//! Rendering is a read-only walk of the value model. The output uses the
//! same grammar the parser accepts: strings are quoted and re-escaped,
//! date-times are printed bare, and floats always carry a `.` so they are
//! read back as floats.
//!
//! ```rust
//! use serde_tinytoml::{parse, to_string, to_string_pretty};
//!
//! let root = parse("name = \"a\\tb\"\nsrv = { port = 80, tags = [\"x\"] }").unwrap();
//!
//! assert_eq!(
//!     to_string(&root),
//!     "name = \"a\\tb\"\nsrv = { port = 80, tags = [\"x\"] }\n"
//! );
//! assert_eq!(
//!     to_string_pretty(&root),
//!     "name = \"a\\tb\"\nsrv = {\n  port = 80,\n  tags = [\"x\"],\n}\n"
//! );
//! ```

use crate::{RenderOptions, Table, Value};
use std::fmt;

/// Renders a root table as `key = value` lines.
#[must_use]
pub fn to_string(table: &Table) -> String {
    to_string_with_options(table, &RenderOptions::default())
}

/// Renders a root table with nested tables spread over multiple lines.
#[must_use]
pub fn to_string_pretty(table: &Table) -> String {
    to_string_with_options(table, &RenderOptions::pretty())
}

/// Renders a root table with custom options.
#[must_use]
pub fn to_string_with_options(table: &Table, options: &RenderOptions) -> String {
    let mut renderer = Renderer::new(options);
    for (key, value) in renderer.entries(table) {
        renderer.output.push_str(key);
        renderer.output.push_str(" = ");
        renderer.write_value(value);
        renderer.output.push('\n');
    }
    renderer.output
}

pub(crate) fn value_to_string(value: &Value, options: &RenderOptions) -> String {
    let mut renderer = Renderer::new(options);
    renderer.write_value(value);
    renderer.output
}

struct Renderer<'o> {
    output: String,
    options: &'o RenderOptions,
    indent_level: usize,
}

impl<'o> Renderer<'o> {
    fn new(options: &'o RenderOptions) -> Self {
        Renderer {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
        }
    }

    fn entries<'t>(&self, table: &'t Table) -> Vec<(&'t String, &'t Value)> {
        let mut entries: Vec<_> = table.iter().collect();
        if self.options.sort_keys {
            entries.sort_by(|a, b| a.0.cmp(b.0));
        }
        entries
    }

    fn write_indent(&mut self) {
        let width = self.indent_level * self.options.indent;
        self.output.extend(std::iter::repeat(' ').take(width));
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\t' => self.output.push_str("\\t"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }

    fn write_float(&mut self, f: f64) {
        let text = format!("{:?}", f);
        if !f.is_finite() || text.contains('.') {
            self.output.push_str(&text);
        } else if let Some(exp) = text.find(['e', 'E']) {
            self.output.push_str(&text[..exp]);
            self.output.push_str(".0");
            self.output.push_str(&text[exp..]);
        } else {
            self.output.push_str(&text);
            self.output.push_str(".0");
        }
    }

    fn write_value(&mut self, value: &Value) {
        match value {
            Value::String(s) => self.write_string(s),
            Value::Integer(i) => self.output.push_str(&i.to_string()),
            Value::Float(f) => self.write_float(*f),
            Value::Boolean(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Datetime(dt) => self.output.push_str(dt.as_str()),
            Value::Array(elements) => self.write_array(elements),
            Value::Table(table) => self.write_table(table),
        }
    }

    fn write_array(&mut self, elements: &[Value]) {
        let multiline = self.options.pretty && elements.iter().any(Value::is_table);
        if !multiline {
            self.output.push('[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                self.write_value(element);
            }
            self.output.push(']');
            return;
        }

        self.output.push_str("[\n");
        self.indent_level += 1;
        for element in elements {
            self.write_indent();
            self.write_value(element);
            self.output.push_str(",\n");
        }
        self.indent_level -= 1;
        self.write_indent();
        self.output.push(']');
    }

    fn write_table(&mut self, table: &Table) {
        if table.is_empty() {
            self.output.push_str("{}");
            return;
        }

        let entries = self.entries(table);
        if !self.options.pretty {
            self.output.push_str("{ ");
            for (i, (key, value)) in entries.into_iter().enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                self.output.push_str(key);
                self.output.push_str(" = ");
                self.write_value(value);
            }
            self.output.push_str(" }");
            return;
        }

        self.output.push_str("{\n");
        self.indent_level += 1;
        for (key, value) in entries {
            self.write_indent();
            self.output.push_str(key);
            self.output.push_str(" = ");
            self.write_value(value);
            self.output.push_str(",\n");
        }
        self.indent_level -= 1;
        self.write_indent();
        self.output.push('}');
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string(self))
    }
}
