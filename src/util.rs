//! Shared utility helpers.

/// 1-based line and column (in characters) of a byte offset within `text`.
///
/// Offsets past the end are clamped; offsets inside a multi-byte character
/// are rounded down to the character start.
pub fn line_column_at(text: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |pos| pos + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Whether `path` has a `.sql` extension, ignoring case.
#[inline]
pub fn has_sql_extension(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("sql"))
}
