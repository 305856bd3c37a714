//! # pratt-calc
//!
//! A single-digit arithmetic calculator built on the `pratt` crate. The
//! pipeline has three stages:
//!
//! - [`lexer`] turns text into [`CalcToken`]s, one token per digit or
//!   operator, skipping whitespace and anything it does not recognize;
//! - [`parser`] builds an [`Expr`] tree by precedence climbing over the
//!   binding power table returned by [`calc_oper_defs`];
//! - [`eval`] reduces the tree to an `i64`.
//!
//! Supported operators are infix `+ - * /` and prefix `+ -`. Multiplication
//! and division bind tighter than addition and subtraction, all infix
//! operators are left associative, and prefix operators bind tighter than any
//! infix operator.
//!
//! ## Example
//!
//! ```rust
//! use pratt_calc::calc;
//!
//! assert_eq!(calc("1 + 2 * 3").unwrap(), 7);
//! assert_eq!(calc("2 - 1 - 1").unwrap(), 0);
//! assert_eq!(calc("-3 + 5").unwrap(), 2);
//! assert!(calc("5 / 0").is_err());
//! ```
pub mod error;
pub mod eval;
pub mod expr;
pub mod lexer;
pub mod parser;
pub mod token;

pub use error::{CalcError, EvalError, ParseError};
pub use eval::evaluate;
pub use expr::Expr;
pub use lexer::{CalcLexer, LexerStats, tokenize};
pub use parser::{CalcParser, MAX_DEPTH, ParserStats, calc_oper_defs, parse};
pub use token::{CalcToken, Operator, Token};

/// Tokenizes, parses and evaluates `input`.
///
/// # Errors
/// Returns [`CalcError::Parse`] if `input` is not a valid expression and
/// [`CalcError::Eval`] if it cannot be evaluated.
pub fn calc(input: &str) -> Result<i64, CalcError> {
    let expr = parse(tokenize(input))?;
    Ok(expr.eval()?)
}
