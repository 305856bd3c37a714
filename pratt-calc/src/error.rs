//! # Calculator Error Types
//!
//! - [`ParseError`]: the token sequence does not form an expression.
//! - [`EvalError`]: a well-formed tree cannot be reduced to an integer.
//! - [`CalcError`]: either of the above, with `#[from]` conversions so that
//!   `?` works across the tokenize → parse → evaluate pipeline.
//!
//! Unrecognized input characters are not an error; the lexer skips them.
use crate::{Operator, Token};
use pratt::{CursorError, Fixity, Span};
use thiserror::Error;

/// Syntax errors reported by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input produced no tokens at all.
    #[error("empty input: expected an expression")]
    EmptyInput,

    /// The tokens ran out in the middle of an expression, as in `1 +`.
    #[error("unexpected end of input{}", .span.map(|s| format!(" at {}", s.display())).unwrap_or_default())]
    UnexpectedEnd { span: Option<Span> },

    /// An expression started with something other than a digit or a prefix
    /// operator.
    #[error("expression cannot start with `{token}` at {}", .span.display())]
    UnexpectedLeadingToken { token: Token, span: Span },

    /// Two operands follow each other with no operator in between.
    #[error("expected an operator, found `{found}` at {}", .span.display())]
    MissingOperator { found: Token, span: Span },

    /// An operator has no binding power in the position it was used.
    #[error("no {fixity} binding power defined for `{op}` at {}", .span.display())]
    UnknownOperatorBindingPower {
        op: Operator,
        fixity: Fixity,
        span: Span,
    },

    /// The expression nests deeper than the parser's depth limit.
    #[error("expression nests deeper than {limit} levels at {}", .span.display())]
    TooDeep { limit: usize, span: Span },
}

impl From<CursorError> for ParseError {
    fn from(err: CursorError) -> Self {
        match err {
            CursorError::EndOfInput { span } => ParseError::UnexpectedEnd { span },
        }
    }
}

/// Failures while evaluating an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The result does not fit in an `i64`.
    #[error("arithmetic overflow in `{op}`")]
    Overflow { op: Operator },

    /// The tree applies an operator in a position the parser never produces.
    #[error("internal invariant violated: `{op}` is not a prefix operator")]
    InvariantViolation { op: Operator },
}

/// Represents all possible errors of the calculator pipeline.
///
/// # Example
/// ```rust
/// # use pratt_calc::{calc, CalcError, EvalError, ParseError};
/// assert!(matches!(calc(""), Err(CalcError::Parse(ParseError::EmptyInput))));
/// assert!(matches!(calc("5/0"), Err(CalcError::Eval(EvalError::DivisionByZero))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}
