//! Attribute parsing

mod arguments;
mod span_locator;

pub use arguments::{parse_arguments, unquote};
pub use span_locator::{locate_spans, AttributeSpan};

use crate::attribute::SqlAttribute;

/// Parse every attribute in `text`, in document order.
///
/// Malformed candidates are dropped; this never fails.
pub fn parse_attributes(text: &str) -> Vec<SqlAttribute> {
    locate_spans(text).iter().map(build_attribute).collect()
}

/// Build the attribute record for one located span
pub fn build_attribute(span: &AttributeSpan<'_>) -> SqlAttribute {
    SqlAttribute::new(span.name, parse_arguments(span.args))
}
