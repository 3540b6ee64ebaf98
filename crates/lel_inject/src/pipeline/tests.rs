#![allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]

use lel_lexer_core::TokenKind;
use pretty_assertions::assert_eq;

use super::*;

fn xml_sql() -> LanguageRegistry {
    LanguageRegistry::from_ids(["xml", "sql"]).unwrap()
}

fn summarize(source: &str) -> Vec<String> {
    find_injections(source, &xml_sql())
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn no_labels_no_injections() {
    assert_eq!(summarize("let a = \"<a/>\" + `b`;"), Vec::<String>::new());
}

#[test]
fn unknown_language_is_skipped() {
    assert_eq!(summarize("/*YAML*/ \"a: 1\""), Vec::<String>::new());
}

#[test]
fn label_in_slot_labels_nested_literal() {
    let source = "`<a>${ /*SQL*/ 'select 1' }</a>`";
    assert_eq!(summarize(source), vec!["sql 15..25 [16..24]"]);
}

#[test]
fn outer_and_nested_injections_in_offset_order() {
    let source = "/*XML*/ `<a>${ /*SQL*/ 'x' }</a>` /*XML*/ '<b/>'";
    let injections = find_injections(source, &xml_sql()).unwrap();
    let got: Vec<(&str, &str)> = injections
        .iter()
        .map(|i| (i.language.as_str(), i.literal.text(source)))
        .collect();
    assert_eq!(
        got,
        vec![
            ("xml", "`<a>${ /*SQL*/ 'x' }</a>`"),
            ("sql", "'x'"),
            ("xml", "'<b/>'"),
        ]
    );
}

#[test]
fn deeply_nested_slots() {
    let source = "`${ `${ `${ /*XML*/ \"<a/>\" }` }` }`";
    let injections = find_injections(source, &xml_sql()).unwrap();
    assert_eq!(injections.len(), 1);
    assert_eq!(injections[0].content(source), vec!["<a/>"]);
}

#[test]
fn very_deep_nesting_finds_innermost_label() {
    const DEPTH: usize = 100_000;
    let source = "`${".repeat(DEPTH) + "/*XML*/ '<a/>'" + &"}`".repeat(DEPTH);
    let injections = find_injections(&source, &xml_sql()).unwrap();
    assert_eq!(injections.len(), 1);
    assert_eq!(injections[0].language, "xml");
    assert_eq!(injections[0].content(&source), vec!["<a/>"]);
}

#[test]
fn scan_error_yields_no_injections() {
    let err = find_injections("/*XML*/ `<a>${b`", &xml_sql()).unwrap_err();
    assert_eq!(err.token_kind(), TokenKind::Template);
}

#[test]
fn many_keeps_input_order() {
    let sources = vec![
        "/*XML*/ \"<a/>\"".to_owned(),
        "\"unterminated".to_owned(),
        String::new(),
        "// SQL label\n'select 1'".to_owned(),
    ];
    let results = find_injections_many(&sources, &xml_sql());
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap()[0].language, "xml");
    assert_eq!(
        results[1],
        Err(ParseError::UnterminatedLiteral {
            token: TokenKind::String,
            offset: 0,
        })
    );
    assert_eq!(results[2], Ok(Vec::new()));
    assert_eq!(results[3].as_ref().unwrap()[0].language, "sql");
}

#[test]
fn many_matches_sequential() {
    let sources: Vec<String> = (0..32)
        .map(|i| format!("x{i} = /*XML*/ `<n{i}>${{v}}</n{i}>`;\n"))
        .collect();
    let registry = xml_sql();
    let parallel = find_injections_many(&sources, &registry);
    let sequential: Vec<_> = sources
        .iter()
        .map(|s| find_injections(s, &registry))
        .collect();
    assert_eq!(parallel, sequential);
}
