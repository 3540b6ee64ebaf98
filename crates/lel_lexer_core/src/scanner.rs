//! Hand-written scanner producing [`Token`]s.
//!
//! The scanner tokenizes just enough host-language syntax to find comments
//! and literals. Everything else collapses into `Other` runs.
//!
//! # Design
//!
//! Code mode dispatches on the current byte. Quoted strings and comments are
//! scanned to completion in one call (neither can nest). Template literals
//! can: a `${` suspends the template and pushes an [`Interpolation`] frame
//! that owns it, and code mode resumes inside the slot. The matching `}`
//! pops the frame, records the slot on the suspended template, and resumes
//! its body. Tokens are always appended to the innermost open slot, or to
//! the top-level sequence when no slot is open.
//!
//! The frame stack replaces recursion, so nesting depth costs heap, not
//! call stack.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::{
    Delimiter, InterpolationSlot, LineOffsetTable, Literal, ParseError, SourceBuffer, Span, Tag,
    Token, TokenKind,
};

/// An open `${ ... }` slot and the template it interrupted.
#[derive(Debug)]
struct Interpolation {
    /// Template literal suspended at this slot.
    template: Literal,
    /// Offset of the `$`.
    start: u32,
    /// Unmatched `{` seen inside the slot.
    depth: u32,
    /// Tokens scanned inside the slot so far.
    tokens: Vec<Token>,
}

/// Scanner over a sentinel-terminated buffer.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    lines: LineOffsetTable,
    /// Open interpolation slots, innermost last.
    frames: Vec<Interpolation>,
    /// Top-level token sequence.
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner. `lines` must be built from the same source as
    /// the buffer behind `cursor`.
    pub fn new(cursor: Cursor<'a>, lines: LineOffsetTable) -> Self {
        Self {
            cursor,
            lines,
            frames: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// Scan to EOF and return the top-level token sequence.
    ///
    /// Stops at the first error; no partial literal is produced.
    pub fn run(mut self) -> Result<Vec<Token>, ParseError> {
        while self.code_token()? {}
        debug!(tokens = self.tokens.len(), "scan complete");
        Ok(self.tokens)
    }

    // ─── Code mode ──────────────────────────────────────────────────────

    /// Scan one host-language token. Returns `false` at a clean EOF.
    fn code_token(&mut self) -> Result<bool, ParseError> {
        let start = self.cursor.pos();
        let tag = match self.cursor.current() {
            0 if self.cursor.is_eof() => return self.eof_in_code(),
            b' ' | b'\t' => {
                self.cursor.eat_whitespace();
                Tag::Whitespace
            }
            b'\r' => {
                self.cursor.advance();
                if self.cursor.current() == b'\n' {
                    self.cursor.advance();
                }
                Tag::Newline
            }
            b'\n' => {
                self.cursor.advance();
                Tag::Newline
            }
            b'/' => self.slash_or_comment(start)?,
            b'"' => {
                self.quoted(start, Delimiter::DoubleQuote)?;
                return Ok(true);
            }
            b'\'' => {
                self.quoted(start, Delimiter::SingleQuote)?;
                return Ok(true);
            }
            b'`' => {
                self.cursor.advance(); // consume opening '`'
                self.template_body(Literal::open(Delimiter::Backtick, start))?;
                return Ok(true);
            }
            b'{' => {
                self.cursor.advance();
                if let Some(frame) = self.frames.last_mut() {
                    frame.depth += 1;
                }
                Tag::Other
            }
            b'}' => {
                self.cursor.advance();
                if self.frames.last().is_some_and(|frame| frame.depth == 0) {
                    // This `}` closes the slot; resume the template body
                    self.close_interpolation()?;
                    return Ok(true);
                }
                if let Some(frame) = self.frames.last_mut() {
                    frame.depth -= 1;
                }
                Tag::Other
            }
            _ => {
                self.cursor.eat_while(is_other);
                if self.cursor.pos() == start {
                    // Interior null byte
                    self.cursor.advance();
                }
                Tag::Other
            }
        };
        self.push(tag, start, None);
        Ok(true)
    }

    fn eof_in_code(&self) -> Result<bool, ParseError> {
        match self.frames.last() {
            Some(frame) => Err(ParseError::UnbalancedInterpolation {
                offset: frame.start,
            }),
            None => Ok(false),
        }
    }

    // ─── Comments ───────────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> Result<Tag, ParseError> {
        self.cursor.advance(); // consume first '/'
        match self.cursor.current() {
            b'/' => {
                // Line break is not part of the comment
                self.cursor.eat_until_newline_or_eof();
                Ok(Tag::LineComment)
            }
            b'*' => {
                self.cursor.advance();
                if self.cursor.eat_block_comment_body() {
                    Ok(Tag::BlockComment)
                } else {
                    Err(ParseError::UnterminatedComment { offset: start })
                }
            }
            _ => Ok(Tag::Other),
        }
    }

    // ─── Literals ───────────────────────────────────────────────────────

    fn quoted(&mut self, start: u32, delimiter: Delimiter) -> Result<(), ParseError> {
        let quote = delimiter.byte();
        let mut literal = Literal::open(delimiter, start);
        self.cursor.advance(); // consume opening quote
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                b'\\' => self.escape(&mut literal)?,
                b if b == quote => {
                    self.cursor.advance();
                    self.close_literal(literal);
                    return Ok(());
                }
                // Raw line break or EOF
                _ => {
                    return Err(ParseError::UnterminatedLiteral {
                        token: TokenKind::String,
                        offset: start,
                    })
                }
            }
        }
    }

    /// Scan a template body until it closes or opens a `${` slot.
    fn template_body(&mut self, mut literal: Literal) -> Result<(), ParseError> {
        loop {
            match self.cursor.skip_to_template_delim() {
                b'`' => {
                    self.cursor.advance();
                    self.close_literal(literal);
                    return Ok(());
                }
                b'$' => {
                    if self.cursor.peek() == b'{' {
                        let start = self.cursor.pos();
                        self.cursor.advance_n(2);
                        self.frames.push(Interpolation {
                            template: literal,
                            start,
                            depth: 0,
                            tokens: Vec::new(),
                        });
                        return Ok(());
                    }
                    // Lone `$` is template text
                    self.cursor.advance();
                }
                b'\\' => self.escape(&mut literal)?,
                _ => {
                    return Err(ParseError::UnterminatedLiteral {
                        token: TokenKind::Template,
                        offset: literal.span.start,
                    })
                }
            }
        }
    }

    fn close_interpolation(&mut self) -> Result<(), ParseError> {
        let Some(frame) = self.frames.pop() else {
            return Ok(());
        };
        let mut template = frame.template;
        template.slots.push(InterpolationSlot {
            span: Span::new(frame.start, self.cursor.pos()),
            tokens: frame.tokens,
        });
        self.template_body(template)
    }

    /// Consume a backslash escape inside a literal.
    ///
    /// A backslash before a line break is a continuation break; anything
    /// else is an escape of the following character.
    fn escape(&mut self, literal: &mut Literal) -> Result<(), ParseError> {
        let start = self.cursor.pos();
        self.cursor.advance(); // consume '\'
        match self.cursor.current() {
            b'\n' => {
                self.cursor.advance();
                literal
                    .continuations
                    .push(Span::new(start, self.cursor.pos()));
            }
            b'\r' => {
                self.cursor.advance();
                if self.cursor.current() == b'\n' {
                    self.cursor.advance();
                }
                literal
                    .continuations
                    .push(Span::new(start, self.cursor.pos()));
            }
            0 if self.cursor.is_eof() => {
                return Err(ParseError::UnterminatedLiteral {
                    token: literal.delimiter.tag().kind(),
                    offset: literal.span.start,
                });
            }
            _ => {
                self.cursor.advance_char(); // escaped char may be multi-byte
                literal.escapes.push(start);
            }
        }
        Ok(())
    }

    fn close_literal(&mut self, mut literal: Literal) {
        literal.span.end = self.cursor.pos();
        trace!(
            tag = %literal.delimiter.tag(),
            start = literal.span.start,
            end = literal.span.end,
            slots = literal.slots.len(),
            continuations = literal.continuations.len(),
            "literal"
        );
        let start = literal.span.start;
        self.push(literal.delimiter.tag(), start, Some(Box::new(literal)));
    }

    // ─── Emission ───────────────────────────────────────────────────────

    fn push(&mut self, tag: Tag, start: u32, literal: Option<Box<Literal>>) {
        let token = Token {
            tag,
            span: Span::new(start, self.cursor.pos()),
            line: self.lines.line_from_offset(start),
            literal,
        };
        match self.frames.last_mut() {
            Some(frame) => frame.tokens.push(token),
            None => self.tokens.push(token),
        }
    }
}

/// 256-byte lookup table for bytes that continue an `Other` run.
///
/// `false` for whitespace, line breaks, and every byte that can start a
/// comment, a literal, or change interpolation depth. The sentinel byte
/// (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_OTHER_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = !matches!(
            i as u8,
            0 | b' ' | b'\t' | b'\r' | b'\n' | b'/' | b'"' | b'\'' | b'`' | b'{' | b'}'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` continues an `Other` run.
#[inline]
fn is_other(b: u8) -> bool {
    IS_OTHER_TABLE[b as usize]
}

/// Tokenize a source string.
///
/// Rejects sources whose length does not fit the `u32` offset space.
pub fn scan(source: &str) -> Result<Vec<Token>, ParseError> {
    if u32::try_from(source.len()).is_err() {
        return Err(ParseError::SourceTooLarge { len: source.len() });
    }
    let buf = SourceBuffer::new(source);
    Scanner::new(buf.cursor(), LineOffsetTable::build(source)).run()
}
