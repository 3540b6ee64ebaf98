//! End-to-end injection tests over realistic host sources.

#![allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]

use lel_inject::{find_injections, InjectionSpan, LanguageRegistry, ParseError, TokenKind};
use pretty_assertions::assert_eq;

const FIXTURE: &str = include_str!("fixtures/labels.js");

fn registry() -> LanguageRegistry {
    LanguageRegistry::from_ids(["XML"]).unwrap()
}

fn injections(source: &str) -> Vec<InjectionSpan> {
    find_injections(source, &registry()).unwrap()
}

fn contents(source: &str) -> Vec<Vec<&str>> {
    injections(source)
        .iter()
        .map(|injection| injection.content(source))
        .collect()
}

// === Label forms ===

#[test]
fn keyword_label_on_quoted_string_keeps_dollar_text() {
    let source = "let x = // XML label\n\t\"<tag a=${va}>text</tag>\";";
    let found = injections(source);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].language, "XML");
    assert_eq!(found[0].content(source), vec!["<tag a=${va}>text</tag>"]);
}

#[test]
fn keyword_label_on_template_excludes_slot() {
    let source = "let x = // XML label\n\t`<tag a=${va}>text</tag>`;";
    assert_eq!(contents(source), vec![vec!["<tag a=", ">text</tag>"]]);
}

#[test]
fn unlabeled_literal_has_no_injection() {
    assert!(injections("let x = \"<tag>text</tag>\";").is_empty());
}

#[test]
fn same_line_label_covers_whole_content() {
    let source = "let x = /*XML*/ \"<tag>text</tag>\";";
    let found = injections(source);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].language, "XML");
    assert_eq!(found[0].ranges.len(), 1);
    assert_eq!(found[0].ranges[0].start, found[0].literal.start + 1);
    assert_eq!(found[0].ranges[0].end, found[0].literal.end - 1);
}

#[test]
fn continuation_splits_ranges_per_line() {
    let source = "let x = /*XML*/ \"<a>\\\n  <b/>\\\r\n</a>\";";
    assert_eq!(contents(source), vec![vec!["<a>", "  <b/>", "</a>"]]);
}

#[test]
fn same_line_label_on_template_excludes_slot() {
    let source = "let x = /*XML*/ `<tag a=${va}>text</tag>`;";
    let found = injections(source);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].to_string(), "XML 16..41 [17..24, 29..40]");
}

#[test]
fn unterminated_string_is_an_error() {
    let source = "let x = \"<tag>";
    assert_eq!(
        find_injections(source, &registry()),
        Err(ParseError::UnterminatedLiteral {
            token: TokenKind::String,
            offset: 8,
        })
    );
}

#[test]
fn lowercase_tag_matches_configured_id() {
    let found = injections("/*xml*/ '<a/>'");
    assert_eq!(found[0].language, "XML");
}

#[test]
fn unresolved_tag_has_no_injection() {
    assert!(injections("/*html-xml*/ '<a/>'").is_empty());
    assert!(injections("// XML\n'<a/>'").is_empty());
}

#[test]
fn literal_with_only_slots_still_injects() {
    let found = injections("/*XML*/ `${a}${b}`");
    assert_eq!(found.len(), 1);
    assert!(found[0].ranges.is_empty());
}

// === Errors ===

#[test]
fn unterminated_comment_is_an_error() {
    let err = find_injections("let x = 1; /* XML", &registry()).unwrap_err();
    assert_eq!(err, ParseError::UnterminatedComment { offset: 11 });
    assert_eq!(err.token_kind(), TokenKind::Comment);
}

#[test]
fn unbalanced_interpolation_is_an_error() {
    let err = find_injections("/*XML*/ `<a>${ f({ x: 1 }` ", &registry()).unwrap_err();
    assert_eq!(err.token_kind(), TokenKind::Template);
    assert!(err.message().contains("offset"));
}

// === Fixture ===

#[test]
fn fixture_labels() {
    let found = injections(FIXTURE);
    let lines: Vec<usize> = found
        .iter()
        .map(|injection| 1 + FIXTURE[..injection.literal.start as usize].matches('\n').count())
        .collect();
    assert_eq!(lines, vec![2, 5, 7, 12, 15, 17]);
    assert!(found.iter().all(|injection| injection.language == "XML"));
}

#[test]
fn fixture_quoted_strings_keep_interpolation_text() {
    let found = injections(FIXTURE);
    let quoted = r#"<tag a=${va} b='${va}'>text \" ${va}</tag>"#;
    assert_eq!(found[0].content(FIXTURE), vec![quoted]);
    assert_eq!(found[1].content(FIXTURE), vec![quoted]);
    assert_eq!(found[2].content(FIXTURE), vec![format!("\t{quoted}").as_str()]);
}

#[test]
fn fixture_templates_exclude_slots() {
    let found = injections(FIXTURE);
    let parts = vec!["<tag a=", " b='", r#"'>text \" "#, "</tag>"];
    assert_eq!(found[3].content(FIXTURE), parts);
    assert_eq!(found[4].content(FIXTURE), parts);
    assert_eq!(
        found[5].content(FIXTURE),
        vec!["\n\t<tag a=", " b='", r#"'>text \" "#, "</tag>\n"]
    );
}
