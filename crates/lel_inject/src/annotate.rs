//! Comment-to-literal association.
//!
//! A comment becomes pending when scanned. Whitespace and newlines keep it
//! pending, any other code token drops it, and a later comment replaces it.
//! The first literal that sees a pending comment takes it.

use lel_lexer_core::{Tag, Token};
use tracing::trace;

use crate::label::CommentLabel;

/// A literal paired with the comment directly before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Annotation<'src> {
    /// Index of the literal in the token sequence passed to [`annotate`].
    pub literal: usize,
    pub label: CommentLabel<'src>,
}

#[derive(Clone, Copy)]
struct Pending {
    comment: usize,
    crossed_newline: bool,
}

/// Associate literals in one token sequence with their preceding comments.
///
/// Only `tokens` itself is walked. Interpolation slots hold their own
/// sequences and are annotated separately. Results are in token order.
pub fn annotate<'src>(tokens: &[Token], source: &'src str) -> Vec<Annotation<'src>> {
    let mut pending: Option<Pending> = None;
    let mut annotations = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        match token.tag {
            Tag::LineComment | Tag::BlockComment => {
                pending = Some(Pending {
                    comment: index,
                    crossed_newline: false,
                });
            }
            Tag::Whitespace => {}
            Tag::Newline => {
                if let Some(p) = &mut pending {
                    p.crossed_newline = true;
                }
            }
            Tag::Other => pending = None,
            Tag::SingleQuoted | Tag::DoubleQuoted | Tag::Template => {
                let Some(p) = pending.take() else {
                    continue;
                };
                let Some(label) =
                    CommentLabel::from_token(&tokens[p.comment], source, !p.crossed_newline)
                else {
                    continue;
                };
                trace!(
                    literal = token.span.start,
                    comment = label.span.start,
                    tag = label.tag(),
                    "annotated literal"
                );
                annotations.push(Annotation {
                    literal: index,
                    label,
                });
            }
        }
    }

    annotations
}
