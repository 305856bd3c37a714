//! # Calculator Tokens
//!
//! This module defines the token values produced by the calculator lexer:
//!
//! - [`Operator`]: one of the four arithmetic operator literals,
//! - [`Token`]: the tagged token value (a digit or an operator),
//! - [`CalcToken`]: a [`Token`] paired with the source [`Span`] it was read
//!   from, implementing [`pratt::Spanned`].
//!
//! Whether `+` or `-` acts as a prefix or an infix operator is not decided
//! here; the parser resolves it from the token's position.
use pratt::{Span, Spanned};
use std::fmt;

/// An arithmetic operator literal.
///
/// # Example
/// ```rust
/// # use pratt_calc::Operator;
/// let op = Operator::try_from('*').unwrap();
/// assert_eq!(op, Operator::Star);
/// assert_eq!(op.symbol(), '*');
/// assert!(Operator::try_from('%').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
}

impl Operator {
    /// Every operator, in the order the default binding power table lists
    /// them.
    pub const ALL: [Operator; 4] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Star,
        Operator::Slash,
    ];

    /// The source character of this operator.
    pub const fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Star => '*',
            Operator::Slash => '/',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    /// Maps an operator character to its [`Operator`]; any other character is
    /// handed back as the error.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Plus),
            '-' => Ok(Operator::Minus),
            '*' => Ok(Operator::Star),
            '/' => Ok(Operator::Slash),
            other => Err(other),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The value of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A single decimal digit, `0..=9`.
    Integer(u8),

    /// An operator literal.
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(d) => write!(f, "{d}"),
            Token::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// A token together with its location in the input.
///
/// # Example
/// ```rust
/// # use pratt_calc::{CalcToken, Token};
/// # use pratt::{Spanned, span};
/// let tok = CalcToken {
///     token: Token::Integer(7),
///     span: span!(0, 3, 0, 4),
/// };
/// assert_eq!(tok.span().start.column, 3);
/// assert_eq!(tok.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcToken {
    /// The token value.
    pub token: Token,
    /// Where the token occurs in the input.
    pub span: Span,
}

impl Spanned for CalcToken {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for CalcToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.token, f)
    }
}
