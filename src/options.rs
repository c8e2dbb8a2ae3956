//! Configuration options for rendering parsed values back to text.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tinytoml::{parse, to_string_with_options, RenderOptions};
//!
//! let root = parse("b = 1\na = { x = true }").unwrap();
//!
//! let options = RenderOptions::new().with_sort_keys(true);
//! assert_eq!(
//!     to_string_with_options(&root, &options),
//!     "a = { x = true }\nb = 1\n"
//! );
//! ```

/// Controls how tables and values are printed.
///
/// # Examples
///
/// ```rust
/// use serde_tinytoml::RenderOptions;
///
/// // Default compact options
/// let options = RenderOptions::new();
/// assert!(!options.pretty);
///
/// // Multi-line nested tables with 4-space indentation
/// let options = RenderOptions::pretty().with_indent(4);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub indent: usize,
    pub pretty: bool,
    pub sort_keys: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent: 2,
            pretty: false,
            sort_keys: false,
        }
    }
}

impl RenderOptions {
    /// Creates default options (compact nested values, insertion order, 2-space indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that spread nested tables over multiple lines.
    #[must_use]
    pub fn pretty() -> Self {
        RenderOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Prints table keys in lexicographic order instead of insertion order.
    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}
