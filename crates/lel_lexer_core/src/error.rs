//! Scan errors.
//!
//! Every error is fatal to the scan that produced it. The scanner stops at
//! the first one and never synthesizes a partial literal.

use thiserror::Error;

use crate::TokenKind;

/// Fatal scan error.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// A quoted string or template literal is not closed before EOF, or a
    /// quoted string hits a raw line break.
    #[error("unterminated {token} literal starting at offset {offset}")]
    UnterminatedLiteral { token: TokenKind, offset: u32 },

    /// A `/*` block comment is not closed before EOF.
    #[error("unterminated block comment starting at offset {offset}")]
    UnterminatedComment { offset: u32 },

    /// A `${` interpolation never returns to brace depth zero.
    #[error("unbalanced interpolation starting at offset {offset}: `${{` is never closed")]
    UnbalancedInterpolation { offset: u32 },

    /// Offsets are `u32`; larger sources cannot be scanned.
    #[error("source is {len} bytes; the scanner supports at most 4 GiB")]
    SourceTooLarge { len: usize },
}

impl ParseError {
    /// Byte offset where the failing construct starts.
    pub fn offset(&self) -> u32 {
        match *self {
            ParseError::UnterminatedLiteral { offset, .. }
            | ParseError::UnterminatedComment { offset }
            | ParseError::UnbalancedInterpolation { offset } => offset,
            ParseError::SourceTooLarge { .. } => 0,
        }
    }

    /// Kind of the token being scanned when the error occurred.
    pub fn token_kind(&self) -> TokenKind {
        match *self {
            ParseError::UnterminatedLiteral { token, .. } => token,
            ParseError::UnterminatedComment { .. } => TokenKind::Comment,
            ParseError::UnbalancedInterpolation { .. } => TokenKind::Template,
            ParseError::SourceTooLarge { .. } => TokenKind::Other,
        }
    }

    /// Rendered message, same text as `Display`.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_and_kind_accessors() {
        let err = ParseError::UnterminatedLiteral {
            token: TokenKind::String,
            offset: 8,
        };
        assert_eq!(err.offset(), 8);
        assert_eq!(err.token_kind(), TokenKind::String);

        let err = ParseError::UnbalancedInterpolation { offset: 12 };
        assert_eq!(err.offset(), 12);
        assert_eq!(err.token_kind(), TokenKind::Template);

        let err = ParseError::UnterminatedComment { offset: 0 };
        assert_eq!(err.token_kind(), TokenKind::Comment);
    }

    #[test]
    fn messages() {
        let err = ParseError::UnterminatedLiteral {
            token: TokenKind::Template,
            offset: 3,
        };
        assert_eq!(
            err.message(),
            "unterminated template literal starting at offset 3"
        );
        assert_eq!(
            ParseError::UnbalancedInterpolation { offset: 5 }.to_string(),
            "unbalanced interpolation starting at offset 5: `${` is never closed"
        );
    }
}
