//! Key/value table container and path lookup.
//!
//! [`Table`] is a thin wrapper around [`IndexMap`]. Keys are unique and a
//! later insert under an existing key replaces the earlier value. Iteration
//! follows insertion order, which keeps rendering deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tinytoml::{Table, Value};
//!
//! let mut table = Table::new();
//! table.insert("name".to_string(), Value::from("Alice"));
//! table.insert("name".to_string(), Value::from("Bob"));
//!
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.get("name").and_then(|v| v.as_str()), Some("Bob"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// A mapping from string keys to [`Value`]s.
///
/// Tables are the only container that can hold further tables, either
/// directly or inside arrays.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table(IndexMap<String, Value>);

impl Table {
    /// Creates an empty `Table`.
    #[must_use]
    pub fn new() -> Self {
        Table(IndexMap::new())
    }

    /// Creates an empty `Table` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Table(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key/value pair into the table.
    ///
    /// If the table already contained this key, the old value is replaced and
    /// returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tinytoml::{Table, Value};
    ///
    /// let mut table = Table::new();
    /// assert!(table.insert("key".to_string(), Value::from(1)).is_none());
    /// assert_eq!(table.insert("key".to_string(), Value::from(2)), Some(Value::from(1)));
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the table contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key` from the table, returning its value.
    ///
    /// The relative order of the remaining entries is preserved.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Resolves a sequence of key segments through nested tables.
    ///
    /// `path[0]` is looked up in this table; every following segment must be
    /// looked up in a table value. A missing key, or a non-table value at an
    /// intermediate step, is a miss. An empty path is a miss.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tinytoml::parse;
    ///
    /// let root = parse("server = { port = 8080 }").unwrap();
    /// assert_eq!(root.get_path(&["server", "port"]).and_then(|v| v.as_integer()), Some(8080));
    /// assert!(root.get_path(&["server", "port", "x"]).is_none());
    /// ```
    #[must_use]
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.get(first.as_ref())?;
        for segment in rest {
            current = current.as_table()?.get(segment.as_ref())?;
        }
        Some(current)
    }

    /// Returns the number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for Table {
    fn from(map: HashMap<String, Value>) -> Self {
        Table(map.into_iter().collect())
    }
}

impl From<Table> for HashMap<String, Value> {
    fn from(table: Table) -> Self {
        table.0.into_iter().collect()
    }
}

impl IntoIterator for Table {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Table {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Table(IndexMap::from_iter(iter))
    }
}
