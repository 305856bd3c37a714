//! Source-location types shared by lexers and parsers.
//!
//! A [`Position`] is a 0-based line/column pair and a [`Span`] is a half-open
//! range of positions. Tokens carry spans so that diagnostics can point at the
//! offending part of the input. The [`span!`](crate::span) macro builds a
//! `Span` inline, which keeps tests short.
//!
//! # Examples
//!
//! ```rust
//! # use pratt::{Position, Span, span};
//! let sp = Span::new(Position::new(0, 2), Position::new(0, 3));
//! assert!(!sp.is_empty());
//! assert_eq!(sp, span!(0, 2, 0, 3));
//! assert_eq!(sp.display(), "span 0:2 to 0:3");
//! ```

/// A 0-based line/column position in source text.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// 0-based line number.
    pub line: usize,
    /// 0-based column number (character position in the line).
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Moves past the character `c`.
    ///
    /// A newline starts the next line at column 0; any other character moves
    /// one column to the right.
    #[inline]
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

/// A half-open source range: `[start, end)`.
///
/// Invariants are not enforced here, but it is conventional for `start <= end`
/// in lexicographic `(line, column)` ordering.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Creates a new `Span`.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// An empty span located at `pos`.
    #[inline]
    pub const fn at(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Is this span empty (start == end)?
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Pretty-print for diagnostics (human-readable).
    #[inline]
    pub fn display(&self) -> String {
        format!(
            "span {}:{} to {}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}

/// Build a [`Span`] inline from 0-based line/column coordinates.
///
/// # Examples
///
/// ```rust
/// # use pratt::span;
/// let s = span!(0, 0, 1, 4);
/// assert_eq!(s.end.column, 4);
/// ```
#[macro_export]
macro_rules! span {
    ($line_start:expr, $col_start:expr, $line_end:expr, $col_end:expr) => {
        $crate::Span {
            start: $crate::Position {
                line: $line_start,
                column: $col_start,
            },
            end: $crate::Position {
                line: $line_end,
                column: $col_end,
            },
        }
    };
}
