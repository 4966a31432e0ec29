//! sql-attributes: extract `#[Name(key: value)]` attributes from SQL
//!
//! SQL sources often carry lightweight metadata in comments:
//!
//! ```sql
//! -- #[MetaData(comment: "Application users", owner: 'auth')]
//! CREATE TABLE users (id INT);
//! ```
//!
//! This library locates those attributes and turns them into
//! [`SqlAttribute`] records, either from any text ([`parse_all`]) or from
//! the comments of SQL files with source positions ([`scan_sources`]).

pub mod attribute;
pub mod comments;
pub mod error;
pub mod parser;
pub mod reader;
pub mod report;
pub mod source;
pub mod util;

use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;

pub use attribute::{Arguments, SqlAttribute};
pub use comments::{extract_comment_attributes, CommentAttribute, SqlDialect};
pub use error::SqlAttributesError;
pub use reader::{find_by_name, parse_all, parse_first, AttributeReader, SqlAttributeReader};
pub use report::{render_report, OutputFormat};

/// Minimum number of files to benefit from parallel processing.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

/// Options for scanning SQL sources
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Files, directories or glob patterns to scan
    pub inputs: Vec<PathBuf>,
    /// Only keep attributes with this name
    pub name_filter: Option<String>,
    /// Only read attributes from SQL comments (requires tokenizing)
    pub comments_only: bool,
    /// Dialect used to tokenize sources in comments-only mode
    pub dialect: SqlDialect,
}

/// An attribute together with where it was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatedAttribute {
    pub attribute: SqlAttribute,
    /// 1-based line of the attribute's leading `#`
    pub line: usize,
    /// Object documented by the enclosing comment (comments-only mode)
    pub target: Option<String>,
}

/// All attributes found in one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAttributes {
    pub path: PathBuf,
    pub attributes: Vec<LocatedAttribute>,
}

/// Scan SQL sources and collect their attributes.
///
/// Files without any (matching) attribute are left out of the result.
pub fn scan_sources(options: &ScanOptions) -> Result<Vec<FileAttributes>> {
    let files = source::collect_sql_files(&options.inputs)?;
    log::debug!("Scanning {} SQL files", files.len());

    let results: Vec<Result<Option<FileAttributes>>> = if files.len() >= PARALLEL_THRESHOLD {
        files
            .par_iter()
            .map(|file| scan_file(file, options))
            .collect()
    } else {
        files.iter().map(|file| scan_file(file, options)).collect()
    };

    // Combine results, propagating the first error if any
    let mut scanned = Vec::with_capacity(results.len());
    for result in results {
        if let Some(file_attributes) = result? {
            scanned.push(file_attributes);
        }
    }

    log::debug!(
        "Found attributes in {} of {} files",
        scanned.len(),
        files.len()
    );
    Ok(scanned)
}

/// Scan a single SQL file
pub fn scan_file(path: &Path, options: &ScanOptions) -> Result<Option<FileAttributes>> {
    let content = source::read_sql_file(path)?;
    let mut attributes = locate_attributes(&content, options).map_err(|err| match err {
        SqlAttributesError::Tokenize { line, column, message } => {
            SqlAttributesError::SqlFileTokenizeError {
                path: path.to_path_buf(),
                message: format!("{} at line {}, column {}", message, line, column),
            }
        }
        other => other,
    })?;

    if let Some(name) = &options.name_filter {
        attributes.retain(|located| &located.attribute.name == name);
    }

    if attributes.is_empty() {
        return Ok(None);
    }

    Ok(Some(FileAttributes {
        path: path.to_path_buf(),
        attributes,
    }))
}

/// Locate attributes in SQL text according to the scan mode
pub fn locate_attributes(
    content: &str,
    options: &ScanOptions,
) -> std::result::Result<Vec<LocatedAttribute>, SqlAttributesError> {
    if options.comments_only {
        let found = extract_comment_attributes(content, options.dialect)?;
        return Ok(found
            .into_iter()
            .map(|found| LocatedAttribute {
                attribute: found.attribute,
                line: found.line,
                target: found.target,
            })
            .collect());
    }

    Ok(parser::locate_spans(content)
        .iter()
        .map(|span| LocatedAttribute {
            attribute: parser::build_attribute(span),
            line: util::line_column_at(content, span.start).0,
            target: None,
        })
        .collect())
}
