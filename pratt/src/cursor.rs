//! Lookahead over an ordered token sequence.
//!
//! [`TokenCursor`] hands tokens to a parser strictly in input order. It offers
//! one token of lookahead ([`peek`](TokenCursor::peek)) and consumption
//! ([`try_next`](TokenCursor::try_next)). Asking for a token past the end is a
//! caller error and is reported as [`CursorError::EndOfInput`].

use crate::Span;
use std::fmt::Debug;
use thiserror::Error;

/// A token that knows where it came from.
pub trait Spanned {
    /// Returns the source span covered by the token.
    fn span(&self) -> Span;
}

/// Errors raised by a [`TokenCursor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// [`TokenCursor::try_next`] was called after every token was consumed.
    ///
    /// `span` is an empty span at the end of the last consumed token, or
    /// `None` when the cursor never yielded anything.
    #[error("unexpected end of input")]
    EndOfInput { span: Option<Span> },
}

/// Counters collected while a cursor is being drained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorStats {
    pub peeks: usize,
    pub nexts: usize,
}

/// An index-based cursor over a token sequence.
///
/// Every token is yielded exactly once, in the order it appears in the
/// underlying vector.
///
/// # Example
/// ```rust
/// # use pratt::{CursorError, Span, Spanned, TokenCursor};
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Tok(char);
///
/// impl Spanned for Tok {
///     fn span(&self) -> Span {
///         Span::default()
///     }
/// }
///
/// let mut cursor = TokenCursor::new(vec![Tok('1'), Tok('+')]);
/// assert_eq!(cursor.peek(), Some(&Tok('1')));
/// assert_eq!(cursor.try_next().unwrap(), Tok('1'));
/// assert_eq!(cursor.try_next().unwrap(), Tok('+'));
/// assert!(matches!(cursor.try_next(), Err(CursorError::EndOfInput { .. })));
/// ```
#[derive(Debug, Clone)]
pub struct TokenCursor<T> {
    tokens: Vec<T>,
    pos: usize,
    stats: CursorStats,
}

impl<T> TokenCursor<T>
where
    T: Spanned + Clone + Debug,
{
    /// Creates a cursor positioned before the first token.
    pub fn new(tokens: Vec<T>) -> Self {
        Self {
            tokens,
            pos: 0,
            stats: CursorStats::default(),
        }
    }

    /// Returns the next unconsumed token without advancing.
    #[inline]
    pub fn peek(&mut self) -> Option<&T> {
        self.stats.peeks += 1;
        self.tokens.get(self.pos)
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    /// Returns [`CursorError::EndOfInput`] once the sequence is exhausted.
    pub fn try_next(&mut self) -> Result<T, CursorError> {
        let Some(token) = self.tokens.get(self.pos).cloned() else {
            let span = self.tokens.last().map(|t| Span::at(t.span().end));
            return Err(CursorError::EndOfInput { span });
        };
        log::trace!("NEXT: pos={}, token={:?}", self.pos, token);
        self.pos += 1;
        self.stats.nexts += 1;
        Ok(token)
    }

    /// Number of tokens consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total number of tokens, consumed or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the cursor was built over an empty sequence.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns `true` once every token has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn stats(&self) -> CursorStats {
        self.stats.clone()
    }
}
