//! Owned copy of the host source with a zero terminator.
//!
//! The scanner never checks bounds: every read past the content lands on a
//! `0x00` byte, and [`Cursor::is_eof`](crate::Cursor::is_eof) tells a real
//! NUL in the source apart from the terminator by position.

use crate::Cursor;

/// Storage is rounded up to a multiple of this many bytes.
const PAD_TO: usize = 64;

/// Host source bytes followed by at least two `0x00` bytes.
///
/// ```text
/// [content..., 0x00, 0x00...]
///              ^ offset `len()`, storage ends on a 64-byte multiple
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a zero-terminated buffer.
    ///
    /// Lengths past `u32::MAX` are clamped; [`scan`](crate::scan) refuses
    /// such sources before getting here.
    pub fn new(source: &str) -> Self {
        let content = source.as_bytes();
        // Room for the terminator and one byte of lookahead past it.
        let storage = ((content.len() + 1) / PAD_TO + 1) * PAD_TO;

        let mut bytes = vec![0u8; storage];
        bytes[..content.len()].copy_from_slice(content);

        SourceBuffer {
            bytes,
            len: u32::try_from(content.len()).unwrap_or(u32::MAX),
        }
    }

    /// Content bytes, terminator excluded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// A cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes, self.len)
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
