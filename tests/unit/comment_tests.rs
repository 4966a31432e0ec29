//! Tests for comment-scoped extraction on realistic DDL

use pretty_assertions::assert_eq;
use sql_attributes::{extract_comment_attributes, SqlDialect};

use crate::common::attr;

const SCHEMA_SQL: &str = r#"-- #[MetaData(comment: "Application users", owner: 'auth')]
CREATE TABLE IF NOT EXISTS app.users (
    id BIGINT NOT NULL, -- #[MetaData(label: "Identifier")]
    -- #[MetaData(label: "Login", unique: true)]
    login VARCHAR(50) NOT NULL,
    note VARCHAR(20) DEFAULT '#[NotAnAttribute]'
);

/*
 * #[Deprecated(since: "2.0")]
 */
CREATE OR REPLACE VIEW app.active_users AS SELECT id FROM app.users;
"#;

#[test]
fn test_schema_comments() {
    let found = extract_comment_attributes(SCHEMA_SQL, SqlDialect::Generic).unwrap();

    let summary: Vec<_> = found
        .iter()
        .map(|f| (f.attribute.clone(), f.line, f.target.as_deref()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (
                attr("MetaData", &[("comment", "Application users"), ("owner", "auth")]),
                1,
                Some("app.users")
            ),
            (attr("MetaData", &[("label", "Identifier")]), 3, Some("id")),
            (
                attr("MetaData", &[("label", "Login"), ("unique", "true")]),
                4,
                Some("login")
            ),
            (
                attr("Deprecated", &[("since", "2.0")]),
                10,
                Some("app.active_users")
            ),
        ]
    );
}

#[test]
fn test_postgres_dialect() {
    let sql = "-- #[MetaData(comment: \"Orders\")]\nCREATE TABLE public.orders (id SERIAL);";
    let found = extract_comment_attributes(sql, SqlDialect::PostgreSql).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].target.as_deref(), Some("public.orders"));
}

#[test]
fn test_no_comments() {
    let found = extract_comment_attributes("SELECT 1;", SqlDialect::MySql).unwrap();
    assert!(found.is_empty());
}
