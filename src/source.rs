//! SQL source discovery and loading
//!
//! Inputs may be plain files, directories (walked recursively for `*.sql`)
//! or glob patterns such as `migrations/**/*.sql`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use encoding_rs::WINDOWS_1252;

use crate::error::SqlAttributesError;
use crate::util::has_sql_extension;

/// Resolve inputs into a de-duplicated list of SQL files.
///
/// Files are returned in input order; directory contents are sorted by path.
pub fn collect_sql_files<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<PathBuf>, SqlAttributesError> {
    let mut files = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        if input.is_file() {
            files.push(input.to_path_buf());
        } else if input.is_dir() {
            files.extend(walk_sql_files(input));
        } else if is_glob_pattern(input) {
            files.extend(expand_glob(input)?);
        } else {
            return Err(SqlAttributesError::SourceNotFound {
                path: input.to_path_buf(),
            });
        }
    }

    let mut seen = HashSet::new();
    files.retain(|file| seen.insert(file.clone()));

    log::debug!("Collected {} SQL files", files.len());
    Ok(files)
}

fn walk_sql_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && has_sql_extension(entry.path()))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

fn is_glob_pattern(input: &Path) -> bool {
    input
        .to_string_lossy()
        .contains(|c: char| matches!(c, '*' | '?' | '['))
}

fn expand_glob(pattern: &Path) -> Result<Vec<PathBuf>, SqlAttributesError> {
    let pattern = pattern.to_string_lossy().replace('\\', "/");
    let paths = glob::glob(&pattern).map_err(|source| SqlAttributesError::InvalidGlobPattern {
        pattern: pattern.clone(),
        source,
    })?;

    Ok(paths
        .filter_map(|p| p.ok())
        .filter(|p| p.is_file())
        .collect())
}

/// Read a SQL file, trying UTF-8 first, then Windows-1252 as fallback.
///
/// A leading UTF-8 byte order mark is removed.
pub fn read_sql_file(path: &Path) -> Result<String, SqlAttributesError> {
    let bytes = std::fs::read(path).map_err(|source| SqlAttributesError::SourceReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => {
            // Common for SQL scripts saved on Windows
            let bytes = err.into_bytes();
            let (decoded, _, had_errors) = WINDOWS_1252.decode(&bytes);
            if had_errors {
                return Err(SqlAttributesError::SourceReadError {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "File contains invalid characters",
                    ),
                });
            }
            log::debug!("Decoded {} as Windows-1252", path.display());
            decoded.into_owned()
        }
    };

    Ok(match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}
