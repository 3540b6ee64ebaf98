//! Injection spans for labeled embedded-language literals.
//!
//! Builds on `lel_lexer_core`: the scanner finds comments and literals, the
//! annotator attaches each literal to the label comment right before it, and
//! the resolver carves the literal into the byte ranges a sublanguage
//! grammar should see.
//!
//! ```text
//! let x = /*XML*/ `<tag a=${va}>text</tag>`;
//!                  ^^^^^^^     ^^^^^^^^^^^   <- injection ranges
//! ```
//!
//! Entry points are [`find_injections`] for one source and
//! [`find_injections_many`] for independent sources scanned in parallel.

mod annotate;
mod label;
mod languages;
mod pipeline;
mod resolve;

pub use annotate::{annotate, Annotation};
pub use label::{parse_label, CommentLabel, CommentStyle, LabelForm, LABEL_KEYWORD};
pub use languages::{ConfigError, LanguageRegistry};
pub use pipeline::{find_injections, find_injections_many};
pub use resolve::{content_ranges, resolve, InjectionSpan};

pub use lel_lexer_core::{ParseError, Span, TokenKind};
