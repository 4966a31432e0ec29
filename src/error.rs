//! Error types for sql-attributes
//!
//! Attribute parsing itself never fails; these errors come from reading
//! sources and tokenizing SQL for comment-scoped extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting or scanning SQL sources
#[derive(Error, Debug)]
pub enum SqlAttributesError {
    #[error("Source path not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidGlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read SQL file: {path}")]
    SourceReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SQL tokenize error at line {line}, column {column}: {message}")]
    Tokenize {
        line: u64,
        column: u64,
        message: String,
    },

    #[error("SQL tokenize error in {path}: {message}")]
    SqlFileTokenizeError { path: PathBuf, message: String },

    #[error("Failed to write report: {message}")]
    ReportError { message: String },
}

impl From<sqlparser::tokenizer::TokenizerError> for SqlAttributesError {
    fn from(err: sqlparser::tokenizer::TokenizerError) -> Self {
        SqlAttributesError::Tokenize {
            line: err.location.line,
            column: err.location.column,
            message: err.message,
        }
    }
}
