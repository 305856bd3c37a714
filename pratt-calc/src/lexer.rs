//! # Calculator Lexer
//!
//! [`CalcLexer`] turns input text into [`CalcToken`]s, scanning one character
//! at a time from left to right:
//!
//! - space, tab, carriage return and newline are skipped;
//! - each decimal digit becomes its own [`Token::Integer`] (`12` is two
//!   tokens, not twelve);
//! - `+ - * /` become [`Token::Operator`];
//! - any other character is dropped without an error. Dropped characters are
//!   logged at `debug` level and counted in [`LexerStats::skipped`].
use crate::{CalcToken, Operator, Token};
use pratt::{Position, Span};
use std::str::Chars;

/// Counters collected while lexing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerStats {
    /// Characters read from the input.
    pub chars: usize,
    /// Tokens produced.
    pub tokens: usize,
    /// Unrecognized characters that were dropped.
    pub skipped: usize,
}

/// The calculator lexer.
///
/// `CalcLexer` is an [`Iterator`] over [`CalcToken`]s. It never fails:
/// anything that is not a digit, an operator or whitespace is skipped.
///
/// # Example
/// ```rust
/// # use pratt_calc::{CalcLexer, Operator, Token};
/// let mut lexer = CalcLexer::new("1 + x2");
/// let tokens: Vec<Token> = lexer.by_ref().map(|t| t.token).collect();
/// assert_eq!(
///     tokens,
///     [Token::Integer(1), Token::Operator(Operator::Plus), Token::Integer(2)]
/// );
/// assert_eq!(lexer.stats().skipped, 1);
/// ```
#[derive(Debug, Clone)]
pub struct CalcLexer<'a> {
    chars: Chars<'a>,
    pos: Position,
    stats: LexerStats,
}

impl<'a> CalcLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            pos: Position::default(),
            stats: LexerStats::default(),
        }
    }

    pub fn stats(&self) -> LexerStats {
        self.stats.clone()
    }
}

impl Iterator for CalcLexer<'_> {
    type Item = CalcToken;

    fn next(&mut self) -> Option<CalcToken> {
        for c in self.chars.by_ref() {
            self.stats.chars += 1;
            let start = self.pos;
            self.pos.advance(c);

            let token = match c {
                ' ' | '\t' | '\r' | '\n' => continue,
                '0'..='9' => Token::Integer(c as u8 - b'0'),
                _ => match Operator::try_from(c) {
                    Ok(op) => Token::Operator(op),
                    Err(c) => {
                        log::debug!(
                            "skipping unrecognized character {:?} at {}:{}",
                            c,
                            start.line,
                            start.column
                        );
                        self.stats.skipped += 1;
                        continue;
                    }
                },
            };

            self.stats.tokens += 1;
            return Some(CalcToken {
                token,
                span: Span::new(start, self.pos),
            });
        }
        None
    }
}

/// Tokenizes `input` in one go.
///
/// # Example
/// ```rust
/// # use pratt_calc::tokenize;
/// let tokens = tokenize("  \t\n");
/// assert!(tokens.is_empty());
/// ```
pub fn tokenize(input: &str) -> Vec<CalcToken> {
    CalcLexer::new(input).collect()
}
