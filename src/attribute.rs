//! Attribute records produced by the parser
//!
//! An attribute is written in SQL as `#[Name(key: value, ...)]`. Parsing one
//! such span yields a [`SqlAttribute`]: the name plus its [`Arguments`].

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Ordered string map for attribute arguments.
///
/// Keys keep the position of their first insertion. Inserting a key that is
/// already present overwrites its value in place, so repeated keys in the
/// source resolve to the last value written.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    entries: Vec<(String, String)>,
}

impl Arguments {
    /// Create an empty argument map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair, returning the previous value if the key existed
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up the value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

// Mapping equality: same keys with the same values, order irrelevant.
impl PartialEq for Arguments {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for Arguments {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut arguments = Arguments::new();
        for (key, value) in iter {
            arguments.insert(key, value);
        }
        arguments
    }
}

/// Borrowing iterator over [`Arguments`] pairs
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Arguments {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Arguments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A single attribute found in SQL text, e.g. `#[MetaData(comment: "Users")]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlAttribute {
    /// Attribute name (e.g., "MetaData")
    pub name: String,
    /// Named arguments; empty when the attribute has no argument list
    pub arguments: Arguments,
}

impl SqlAttribute {
    pub fn new(name: impl Into<String>, arguments: Arguments) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Convenience lookup of a single argument value
    pub fn argument(&self, key: &str) -> Option<&str> {
        self.arguments.get(key)
    }
}

/// Quote a value so that parsing it back yields the same string.
///
/// Values holding a double quote are single-quoted. A value holding both
/// quote characters cannot be written back exactly.
fn quote_value(value: &str) -> String {
    if value.contains('"') && !value.contains('\'') {
        format!("'{}'", value)
    } else {
        format!("\"{}\"", value)
    }
}

/// Renders the attribute back in source form with every value quoted.
impl fmt::Display for SqlAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#[{}", self.name)?;
        if !self.arguments.is_empty() {
            let args = self
                .arguments
                .iter()
                .map(|(k, v)| format!("{}: {}", k, quote_value(v)))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "({})", args)?;
        }
        write!(f, "]")
    }
}
