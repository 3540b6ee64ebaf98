//! Host-language micro-lexer for labeled embedded literals.
//!
//! Scans just enough of a C-family host language (comments, quoted strings,
//! template literals with `${...}` interpolation) to locate literals and the
//! comments that precede them. Everything else is an opaque `Other` token.
//!
//! # Layers
//!
//! - [`SourceBuffer`] / [`Cursor`]: sentinel-terminated byte access with
//!   `memchr`-accelerated skipping.
//! - [`Scanner`]: state machine with an explicit frame stack for templates
//!   nested inside interpolations inside templates.
//! - [`Token`] / [`Literal`]: scan output. Template literals own the token
//!   sequences of their interpolation slots.
//!
//! This crate has no `lel_*` dependencies. The annotation and span
//! resolution layer lives in `lel_inject`.

mod cursor;
mod error;
mod line_table;
mod scanner;
mod source_buffer;
mod span;
mod tag;
mod token;

pub use cursor::Cursor;
pub use error::ParseError;
pub use line_table::LineOffsetTable;
pub use scanner::{scan, Scanner};
pub use source_buffer::SourceBuffer;
pub use span::Span;
pub use tag::{Tag, TokenKind};
pub use token::{Delimiter, InterpolationSlot, Literal, Token};
