//! Tests for searching labeled texts by attribute name

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use sql_attributes::{find_by_name, AttributeReader, SqlAttribute, SqlAttributeReader};

use crate::common::{metadata_greek, metadata_lower, metadata_upper};

fn search_list(texts: &[&str]) -> Vec<(usize, Vec<SqlAttribute>)> {
    find_by_name("MetaData", texts.iter().enumerate())
}

fn search_map(texts: &[(&'static str, &str)]) -> Vec<(&'static str, Vec<SqlAttribute>)> {
    find_by_name("MetaData", texts.iter().copied())
}

#[test]
fn test_no_match() {
    assert_eq!(search_list(&[""]), vec![]);
    assert_eq!(search_list(&["FooBar"]), vec![]);
    assert_eq!(search_list(&["#[FooBar"]), vec![]);
}

#[test]
fn test_all_match_list() {
    let found = search_list(&[
        "#[MetaData(foo: a, bar: b, baz: c)]",
        "#[MetaData(foo: A, bar: B, baz: C)]",
        "#[MetaData(foo: α, bar: β, baz: γ)]",
    ]);
    assert_eq!(
        found,
        vec![
            (0, vec![metadata_lower()]),
            (1, vec![metadata_upper()]),
            (2, vec![metadata_greek()]),
        ]
    );
}

#[test]
fn test_some_match_list_keeps_positions() {
    let found = search_list(&[
        "#[Unknown(foo: a, bar: b, baz: c)]",
        "#[MetaData(foo: A, bar: B, baz: C)]",
        "#[Unknown(foo: α, bar: β, baz: γ)]",
    ]);
    assert_eq!(found, vec![(1, vec![metadata_upper()])]);
}

#[test]
fn test_none_match_list() {
    let found = search_list(&[
        "#[Unknown(foo: a, bar: b, baz: c)]",
        "#[Unknown(foo: A, bar: B, baz: C)]",
    ]);
    assert!(found.is_empty());
}

#[test]
fn test_some_match_labeled() {
    let found = search_map(&[
        ("first", "#[Unknown(foo: a, bar: b, baz: c)]"),
        ("second", "#[MetaData(foo: A, bar: B, baz: C)]"),
        ("third", "#[Unknown(foo: α, bar: β, baz: γ)]"),
    ]);
    assert_eq!(found, vec![("second", vec![metadata_upper()])]);
}

#[test]
fn test_texts_with_multiple_attributes() {
    let many_keep_all = "#[MetaData(foo: a, bar: b, baz: c)]\n\
                         #[MetaData(foo: A, bar: B, baz: C)]\n\
                         #[MetaData(foo: α, bar: β, baz: γ)]";
    let many_keep_some = "#[Unknown(foo: a, bar: b, baz: c)]\n\
                          #[MetaData(foo: A, bar: B, baz: C)]\n\
                          #[Unknown(foo: α, bar: β, baz: γ)]";
    let many_keep_none = "#[Unknown(foo: a, bar: b, baz: c)]\n\
                          #[Unknown(foo: A, bar: B, baz: C)]";

    let found = search_map(&[
        ("one_not_filtered", "#[MetaData(foo: a, bar: b, baz: c)]"),
        ("one_filtered", "#[Unknown(foo: A, bar: B, baz: C)]"),
        ("many_keep_all", many_keep_all),
        ("many_keep_some", many_keep_some),
        ("many_keep_none", many_keep_none),
    ]);

    assert_eq!(
        found,
        vec![
            ("one_not_filtered", vec![metadata_lower()]),
            (
                "many_keep_all",
                vec![metadata_lower(), metadata_upper(), metadata_greek()]
            ),
            ("many_keep_some", vec![metadata_upper()]),
        ]
    );
}

#[test]
fn test_search_keyed_map_input() {
    let mut inputs = BTreeMap::new();
    inputs.insert("users.sql".to_string(), "-- #[MetaData(foo: a, bar: b, baz: c)]".to_string());
    inputs.insert("orders.sql".to_string(), "-- #[Unknown]".to_string());

    let found: BTreeMap<String, Vec<SqlAttribute>> =
        SqlAttributeReader.search("MetaData", inputs).into_iter().collect();

    assert_eq!(found.len(), 1);
    assert_eq!(found["users.sql"], vec![metadata_lower()]);
}

#[test]
fn test_name_match_is_exact() {
    let found = find_by_name("metadata", [("x", "#[MetaData]")]);
    assert!(found.is_empty());
}
