//! Property tests over generated host sources.

#![allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]

use std::collections::HashSet;

use lel_inject::{annotate, content_ranges, find_injections, LanguageRegistry, Span};
use lel_lexer_core::{scan, Literal, Token};
use proptest::prelude::*;

/// Fragments that always scan cleanly when concatenated.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/*XML*/ ".to_owned()),
        Just("/* sql */".to_owned()),
        Just("// XML label\n".to_owned()),
        Just("// note\n".to_owned()),
        Just("let x = ".to_owned()),
        Just(";\n".to_owned()),
        Just("\r\n\t".to_owned()),
        Just("\"<a>\\\n</a>\"".to_owned()),
        Just("'it\\'s'".to_owned()),
        Just("`<b ${v}>${ /*SQL*/ 'q' }</b>`".to_owned()),
        Just("`${`${'x'}`}`".to_owned()),
        Just("{ f(\"${a}\") }".to_owned()),
        "[a-z ]{0,8}",
    ]
}

fn host_source() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..24).prop_map(|parts| parts.concat())
}

fn registry() -> LanguageRegistry {
    LanguageRegistry::from_ids(["xml", "sql"]).unwrap()
}

/// Every literal in a token tree, outer before inner.
fn literals(tokens: &[Token]) -> Vec<&Literal> {
    let mut found = Vec::new();
    let mut work = vec![tokens];
    while let Some(sequence) = work.pop() {
        for literal in sequence.iter().filter_map(Token::literal) {
            found.push(literal);
            work.extend(literal.slots.iter().map(|slot| slot.tokens.as_slice()));
        }
    }
    found
}

proptest! {
    #[test]
    fn rescan_is_identical(source in host_source()) {
        let registry = registry();
        let first = find_injections(&source, &registry).unwrap();
        let second = find_injections(&source, &registry).unwrap();
        prop_assert!(first.windows(2).all(|w| w[0].literal.start < w[1].literal.start));
        for injection in &first {
            let content = Span::new(injection.literal.start + 1, injection.literal.end - 1);
            prop_assert!(injection.ranges.iter().all(|range| content.contains_span(*range)));
        }
        prop_assert_eq!(first, second);
    }

    #[test]
    fn literal_pieces_tile_the_literal(source in host_source()) {
        let tokens = scan(&source).unwrap();
        for literal in literals(&tokens) {
            let mut pieces: Vec<Span> = content_ranges(literal);
            pieces.extend(literal.slots.iter().map(|slot| slot.span));
            pieces.extend(literal.continuations.iter().copied());
            pieces.push(Span::new(literal.span.start, literal.span.start + 1));
            pieces.push(Span::new(literal.span.end - 1, literal.span.end));
            pieces.sort_unstable();

            let mut at = literal.span.start;
            for piece in &pieces {
                prop_assert_eq!(piece.start, at, "gap or overlap in {:?}", pieces);
                prop_assert!(!piece.is_empty());
                at = piece.end;
            }
            prop_assert_eq!(at, literal.span.end);
        }
    }

    #[test]
    fn each_comment_labels_at_most_one_literal(source in host_source()) {
        let tokens = scan(&source).unwrap();
        let mut work: Vec<&[Token]> = vec![&tokens];
        let mut comments = HashSet::new();
        while let Some(sequence) = work.pop() {
            for annotation in annotate(sequence, &source) {
                prop_assert!(comments.insert(annotation.label.span.start));
                let literal = sequence[annotation.literal].span;
                prop_assert!(annotation.label.end() <= literal.start);
                prop_assert!(!annotation.label.span.overlaps(literal));
            }
            for literal in sequence.iter().filter_map(Token::literal) {
                work.extend(literal.slots.iter().map(|slot| slot.tokens.as_slice()));
            }
        }
    }
}
