//! Comment-scoped attribute extraction
//!
//! Tokenizes SQL with sqlparser-rs and reads attributes from comments only,
//! so `#[...]` sequences inside string literals or code are ignored. Each
//! attribute is reported with its position and the object it documents:
//!
//! ```sql
//! -- #[MetaData(comment: "Application users")]
//! CREATE TABLE dbo.users (
//!     id INT,          -- #[MetaData(label: "Identifier")]
//!     -- #[MetaData(label: "Login")]
//!     login NVARCHAR(50)
//! );
//! ```
//!
//! yields targets `dbo.users`, `id` and `login`. A comment on its own line
//! documents the next token; a comment after code documents the first token
//! of its line.

use serde::Serialize;
use sqlparser::dialect::{Dialect, GenericDialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect};
use sqlparser::keywords::Keyword;
use sqlparser::tokenizer::{Token, TokenWithSpan, Tokenizer, Whitespace};

use crate::attribute::SqlAttribute;
use crate::error::SqlAttributesError;
use crate::parser::{build_attribute, locate_spans};
use crate::util::line_column_at;

/// Keywords skipped between CREATE/ALTER and the object name
const DDL_KEYWORDS: &[Keyword] = &[
    Keyword::OR,
    Keyword::REPLACE,
    Keyword::TABLE,
    Keyword::VIEW,
    Keyword::INDEX,
    Keyword::UNIQUE,
    Keyword::CLUSTERED,
    Keyword::IF,
    Keyword::NOT,
    Keyword::EXISTS,
    Keyword::TEMPORARY,
    Keyword::MATERIALIZED,
    Keyword::FUNCTION,
    Keyword::PROCEDURE,
    Keyword::TRIGGER,
    Keyword::SEQUENCE,
    Keyword::SCHEMA,
    Keyword::TYPE,
];

/// SQL dialect used to tokenize sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SqlDialect {
    Generic,
    #[value(name = "mssql")]
    MsSql,
    #[default]
    #[value(name = "mysql")]
    MySql,
    #[value(name = "postgresql")]
    PostgreSql,
}

impl SqlDialect {
    fn dialect(self) -> Box<dyn Dialect> {
        match self {
            SqlDialect::Generic => Box::new(GenericDialect {}),
            SqlDialect::MsSql => Box::new(MsSqlDialect {}),
            SqlDialect::MySql => Box::new(MySqlDialect {}),
            SqlDialect::PostgreSql => Box::new(PostgreSqlDialect {}),
        }
    }
}

/// An attribute found inside a SQL comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentAttribute {
    pub attribute: SqlAttribute,
    /// 1-based line of the attribute's leading `#`
    pub line: usize,
    /// 1-based column of the attribute's leading `#`
    pub column: usize,
    /// Object the comment documents (e.g., "dbo.users" or a column name)
    pub target: Option<String>,
}

/// Extract attributes from every comment in `sql`
pub fn extract_comment_attributes(
    sql: &str,
    dialect: SqlDialect,
) -> Result<Vec<CommentAttribute>, SqlAttributesError> {
    let dialect = dialect.dialect();
    let tokens = Tokenizer::new(dialect.as_ref(), sql).tokenize_with_location()?;

    let mut found = Vec::new();
    for (idx, token) in tokens.iter().enumerate() {
        let Some(text) = comment_text(&token.token) else {
            continue;
        };

        let spans = locate_spans(&text);
        if spans.is_empty() {
            continue;
        }

        let target = comment_target(&tokens, idx);
        let comment_line = token.span.start.line as usize;
        let comment_column = token.span.start.column as usize;

        for span in &spans {
            let (line_delta, column) = line_column_at(&text, span.start);
            let column = if line_delta == 1 {
                comment_column + column - 1
            } else {
                column
            };
            found.push(CommentAttribute {
                attribute: build_attribute(span),
                line: comment_line + line_delta - 1,
                column,
                target: target.clone(),
            });
        }
    }

    log::debug!("Found {} attributes in SQL comments", found.len());
    Ok(found)
}

/// Full source text of a comment token, including its opening marker
fn comment_text(token: &Token) -> Option<String> {
    match token {
        Token::Whitespace(Whitespace::SingleLineComment { comment, prefix }) => {
            Some(format!("{}{}", prefix, comment))
        }
        Token::Whitespace(Whitespace::MultiLineComment(comment)) => {
            Some(format!("/*{}*/", comment))
        }
        _ => None,
    }
}

fn is_line_break(token: &Token) -> bool {
    matches!(
        token,
        Token::Whitespace(Whitespace::Newline | Whitespace::SingleLineComment { .. })
    )
}

fn is_trivia(token: &Token) -> bool {
    matches!(token, Token::Whitespace(_))
}

/// Resolve the object documented by the comment at `idx`
fn comment_target(tokens: &[TokenWithSpan], idx: usize) -> Option<String> {
    // Walk back to the start of the line, remembering the first code token on it
    let mut line_start = None;
    for back in (0..idx).rev() {
        let token = &tokens[back].token;
        if is_line_break(token) {
            break;
        }
        if !is_trivia(token) {
            line_start = Some(back);
        }
    }

    let anchor = match line_start {
        Some(start) => start,
        None => next_significant(tokens, idx + 1)?,
    };
    resolve_target(tokens, anchor)
}

fn next_significant(tokens: &[TokenWithSpan], from: usize) -> Option<usize> {
    (from..tokens.len()).find(|&i| !is_trivia(&tokens[i].token))
}

fn resolve_target(tokens: &[TokenWithSpan], anchor: usize) -> Option<String> {
    let Token::Word(word) = &tokens[anchor].token else {
        return None;
    };

    if word.keyword != Keyword::CREATE && word.keyword != Keyword::ALTER {
        return Some(word.value.clone());
    }

    // CREATE [OR REPLACE] TABLE [IF NOT EXISTS] <name>
    let mut pos = next_significant(tokens, anchor + 1)?;
    while let Token::Word(w) = &tokens[pos].token {
        if w.quote_style.is_some() || !DDL_KEYWORDS.contains(&w.keyword) {
            break;
        }
        pos = next_significant(tokens, pos + 1)?;
    }

    qualified_name(tokens, pos)
}

/// Read a possibly dotted name (`schema.table`) starting at `pos`
fn qualified_name(tokens: &[TokenWithSpan], pos: usize) -> Option<String> {
    let Token::Word(first) = &tokens[pos].token else {
        return None;
    };

    let mut parts = vec![first.value.clone()];
    let mut pos = pos + 1;
    while let Some(Token::Period) = tokens.get(pos).map(|t| &t.token) {
        match tokens.get(pos + 1).map(|t| &t.token) {
            Some(Token::Word(part)) => {
                parts.push(part.value.clone());
                pos += 2;
            }
            _ => break,
        }
    }

    Some(parts.join("."))
}
