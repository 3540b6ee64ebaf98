//! Byte cursor for the scanner.
//!
//! Reads never fail: past the content the buffer holds zeros, so `current`
//! and `peek` return `0` there. A `0` inside the content is just a byte;
//! [`Cursor::is_eof`] decides by position.
//!
//! The `skip_*` and `eat_*` helpers jump over literal and comment bodies
//! with `memchr` instead of stepping byte by byte.

use memchr::{memchr, memchr2, memchr3, memmem};

/// Position in a [`SourceBuffer`](crate::SourceBuffer).
///
/// `Copy`, so saving a position is a plain assignment.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Content plus zero padding.
    bytes: &'a [u8],
    pos: u32,
    /// End of the content; `bytes[end..]` is all zeros.
    end: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(bytes: &'a [u8], end: u32) -> Self {
        debug_assert!(
            bytes.len() >= end as usize + 2,
            "buffer must carry a terminator and one lookahead byte"
        );
        Cursor { bytes, pos: 0, end }
    }

    /// Byte under the cursor, `0` at the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.bytes[self.pos as usize]
    }

    /// Byte after the current one.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.bytes[self.pos as usize + 1]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// `true` once every content byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Byte offset into the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Step over one UTF-8 encoded character.
    ///
    /// The width comes from the lead byte; the source is a `&str`, so the
    /// continuation bytes are guaranteed to follow.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = match self.current() {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        self.pos += width;
    }

    /// Step while `pred` holds. `pred(0)` must be `false`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Spaces and tabs only; line breaks are tokens of their own.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t');
    }

    /// Line comment body: stop on the line break (not consumed) or at the end.
    pub fn eat_until_newline_or_eof(&mut self) {
        let hit = memchr2(b'\n', b'\r', self.rest());
        self.land(hit);
    }

    /// Block comment body: stop just past `*/`.
    ///
    /// Returns `false`, with the cursor at the end, if there is no `*/`.
    pub fn eat_block_comment_body(&mut self) -> bool {
        let hit = memmem::find(self.rest(), b"*/");
        let found = hit.is_some();
        self.land(hit);
        if found {
            self.pos += 2;
        }
        found
    }

    /// Quoted string body: stop on `quote`, `\`, `\n` or `\r`.
    ///
    /// Returns the byte stopped on, or `0` at the end.
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let rest = self.rest();
        let hit = match (memchr3(quote, b'\\', b'\n', rest), memchr(b'\r', rest)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.land(hit)
    }

    /// Template body: stop on `` ` ``, `$` or `\`. Line breaks are content.
    ///
    /// Returns the byte stopped on, or `0` at the end.
    pub fn skip_to_template_delim(&mut self) -> u8 {
        let hit = memchr3(b'`', b'$', b'\\', self.rest());
        self.land(hit)
    }

    /// Unconsumed content.
    #[inline]
    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos as usize..self.end as usize]
    }

    /// Move `hit` bytes forward (or to the end for `None`) and return the
    /// byte landed on.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "hit is an index into rest(), which is shorter than u32::MAX"
    )]
    fn land(&mut self, hit: Option<usize>) -> u8 {
        self.pos = match hit {
            Some(offset) => self.pos + offset as u32,
            None => self.end,
        };
        self.current()
    }
}
