//! Attribute reading entry points
//!
//! [`parse_all`] and [`parse_first`] read a single text; [`find_by_name`]
//! searches a labeled collection of texts for one attribute name. The same
//! operations are available behind the [`AttributeReader`] trait for callers
//! that want to inject a reader.

use crate::attribute::SqlAttribute;
use crate::parser::parse_attributes;

/// Read all attributes from `text`, in document order
pub fn parse_all(text: &str) -> Vec<SqlAttribute> {
    parse_attributes(text)
}

/// Read the first attribute found in `text`
pub fn parse_first(text: &str) -> Option<SqlAttribute> {
    parse_all(text).into_iter().next()
}

/// Search labeled texts for attributes called `name`.
///
/// Labels are kept alongside their matches in input order. A label whose text
/// holds no attribute with that name is left out, so every returned list is
/// non-empty. Sequences can be searched by their positions with
/// `find_by_name(name, texts.iter().enumerate())`.
pub fn find_by_name<K, S, I>(name: &str, inputs: I) -> Vec<(K, Vec<SqlAttribute>)>
where
    I: IntoIterator<Item = (K, S)>,
    S: AsRef<str>,
{
    search_with(parse_all, name, inputs)
}

/// Read each labeled text with `read` and keep the labels holding `name`
fn search_with<K, S, I, F>(read: F, name: &str, inputs: I) -> Vec<(K, Vec<SqlAttribute>)>
where
    I: IntoIterator<Item = (K, S)>,
    S: AsRef<str>,
    F: Fn(&str) -> Vec<SqlAttribute>,
{
    inputs
        .into_iter()
        .filter_map(|(label, text)| {
            let mut matches = read(text.as_ref());
            matches.retain(|attr| attr.name == name);
            (!matches.is_empty()).then_some((label, matches))
        })
        .collect()
}

/// Reads attributes out of SQL text
pub trait AttributeReader {
    /// Read all attributes found in `text`
    fn read(&self, text: &str) -> Vec<SqlAttribute>;

    /// Read the first attribute found in `text`
    fn read_single(&self, text: &str) -> Option<SqlAttribute> {
        self.read(text).into_iter().next()
    }

    /// Search labeled texts for attributes called `name`
    fn search<K, S, I>(&self, name: &str, inputs: I) -> Vec<(K, Vec<SqlAttribute>)>
    where
        Self: Sized,
        I: IntoIterator<Item = (K, S)>,
        S: AsRef<str>,
    {
        search_with(|text| self.read(text), name, inputs)
    }
}

/// The default reader, backed by [`parse_all`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlAttributeReader;

impl AttributeReader for SqlAttributeReader {
    fn read(&self, text: &str) -> Vec<SqlAttribute> {
        parse_all(text)
    }
}
