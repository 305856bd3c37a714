//! # Expression Trees
//!
//! [`Expr`] is the parser's output and the evaluator's input. A tree owns its
//! subtrees outright; nothing is shared and nothing is mutated once built.
//!
//! Trees display as prefix S-expressions, which makes the shape chosen by the
//! parser easy to inspect:
//!
//! ```rust
//! # use pratt_calc::{Expr, Operator};
//! let e = Expr::binary(
//!     Operator::Plus,
//!     Expr::literal(1),
//!     Expr::binary(Operator::Star, Expr::literal(2), Expr::literal(3)),
//! );
//! assert_eq!(e.to_string(), "(+ 1 (* 2 3))");
//! ```
use crate::Operator;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal(i64),

    /// A prefix operator applied to one operand.
    UnaryOp { op: Operator, operand: Box<Expr> },

    /// An infix operator applied to two operands.
    BinaryOp {
        op: Operator,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(value: i64) -> Self {
        Expr::Literal(value)
    }

    pub fn unary(op: Operator, operand: Expr) -> Self {
        Expr::UnaryOp {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: Operator, lhs: Expr, rhs: Expr) -> Self {
        Expr::BinaryOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(v) => write!(f, "{v}"),
            Expr::UnaryOp { op, operand } => write!(f, "({op} {operand})"),
            Expr::BinaryOp { op, lhs, rhs } => write!(f, "({op} {lhs} {rhs})"),
        }
    }
}
