//! Argument list decomposition
//!
//! Splits the raw content of an attribute's parentheses into `key: value`
//! pairs. Values may be double-quoted, single-quoted or bare:
//!
//! ```text
//! foo: a, comment: "Here, with: punctuation", label: 'quoted'
//! ```
//!
//! Quoted values keep their commas and colons; bare values run up to the next
//! comma. Escaped quotes inside quoted values are not recognised.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::attribute::Arguments;

static ARGUMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:,\s*)*(?P<key>\w+):\s*(?P<value>"[^"]*"|'[^']*'|[^,]+)"#)
        .expect("Invalid argument regex")
});

/// Parse a raw argument list into an ordered map.
///
/// Text that does not form a `key: value` pair is skipped. Repeated keys keep
/// their first position and take the last value.
pub fn parse_arguments(args: &str) -> Arguments {
    let mut arguments = Arguments::new();
    if args.is_empty() {
        return arguments;
    }

    for caps in ARGUMENT_RE.captures_iter(args) {
        let (Some(key), Some(value)) = (caps.name("key"), caps.name("value")) else {
            continue;
        };
        if let Some(previous) = arguments.insert(key.as_str(), unquote(value.as_str())) {
            log::trace!("Argument '{}' redefined, dropping '{}'", key.as_str(), previous);
        }
    }

    arguments
}

/// Strip one pair of matching wrapping quotes (`"..."` or `'...'`)
pub fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
