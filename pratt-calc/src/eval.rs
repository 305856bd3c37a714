//! # Evaluator
//!
//! Reduces an [`Expr`] to an `i64` by walking the tree. Evaluation is pure:
//! the tree is only read, so evaluating it again yields the same result.
//!
//! All arithmetic is checked. Division truncates toward zero; a zero divisor
//! is reported as [`EvalError::DivisionByZero`] rather than panicking.
use crate::{EvalError, Expr, Operator};

/// Evaluates `expr`.
///
/// # Example
/// ```rust
/// # use pratt_calc::{evaluate, parse, tokenize, EvalError};
/// let expr = parse(tokenize("7/2")).unwrap();
/// assert_eq!(evaluate(&expr), Ok(3));
///
/// let expr = parse(tokenize("5/0")).unwrap();
/// assert_eq!(evaluate(&expr), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(expr: &Expr) -> Result<i64, EvalError> {
    match expr {
        Expr::Literal(v) => Ok(*v),
        Expr::UnaryOp { op, operand } => {
            let v = evaluate(operand)?;
            match op {
                Operator::Plus => Ok(v),
                Operator::Minus => v.checked_neg().ok_or(EvalError::Overflow { op: *op }),
                Operator::Star | Operator::Slash => {
                    Err(EvalError::InvariantViolation { op: *op })
                }
            }
        }
        Expr::BinaryOp { op, lhs, rhs } => {
            let l = evaluate(lhs)?;
            let r = evaluate(rhs)?;
            let value = match op {
                Operator::Plus => l.checked_add(r),
                Operator::Minus => l.checked_sub(r),
                Operator::Star => l.checked_mul(r),
                Operator::Slash => {
                    if r == 0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    l.checked_div(r)
                }
            };
            value.ok_or(EvalError::Overflow { op: *op })
        }
    }
}

impl Expr {
    /// Evaluates this expression; see [`evaluate`].
    pub fn eval(&self) -> Result<i64, EvalError> {
        evaluate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, tokenize};
    use Operator::*;

    fn eval_str(input: &str) -> Result<i64, EvalError> {
        parse(tokenize(input)).unwrap().eval()
    }

    #[test]
    fn every_digit_evaluates_to_itself() {
        for n in 0..=9 {
            assert_eq!(eval_str(&n.to_string()), Ok(n));
        }
    }

    #[test]
    fn arithmetic_follows_precedence_and_associativity() {
        assert_eq!(eval_str("2-1-1"), Ok(0));
        assert_eq!(eval_str("1+2*3"), Ok(7));
        assert_eq!(eval_str("2*3+1"), Ok(7));
        assert_eq!(eval_str("8/4/2"), Ok(1));
        assert_eq!(eval_str("9 - 3 * 2 + 8 / 4"), Ok(5));
    }

    #[test]
    fn prefix_operators() {
        assert_eq!(eval_str("-3+5"), Ok(2));
        assert_eq!(eval_str("+7"), Ok(7));
        assert_eq!(eval_str("--3"), Ok(3));
        assert_eq!(eval_str("2*-3"), Ok(-6));
        assert_eq!(eval_str("4--2"), Ok(6));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(eval_str("7/2"), Ok(3));
        assert_eq!(eval_str("-7/2"), Ok(-3));
        assert_eq!(eval_str("7/-2"), Ok(-3));
        assert_eq!(eval_str("1/9"), Ok(0));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(eval_str("5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(eval_str("1+5/0*2"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn overflow_is_an_error() {
        let nines = vec!["9"; 21].join("*");
        assert_eq!(eval_str(&nines), Err(EvalError::Overflow { op: Star }));

        let min = Expr::binary(Minus, Expr::literal(i64::MIN), Expr::literal(1));
        assert_eq!(min.eval(), Err(EvalError::Overflow { op: Minus }));

        let neg = Expr::unary(Minus, Expr::literal(i64::MIN));
        assert_eq!(neg.eval(), Err(EvalError::Overflow { op: Minus }));

        let div = Expr::binary(Slash, Expr::literal(i64::MIN), Expr::literal(-1));
        assert_eq!(div.eval(), Err(EvalError::Overflow { op: Slash }));
    }

    #[test]
    fn non_prefix_operator_in_unary_position_violates_invariant() {
        let bad = Expr::unary(Star, Expr::literal(2));
        assert_eq!(bad.eval(), Err(EvalError::InvariantViolation { op: Star }));

        let nested = Expr::binary(Plus, Expr::literal(1), Expr::unary(Slash, Expr::literal(2)));
        assert_eq!(
            nested.eval(),
            Err(EvalError::InvariantViolation { op: Slash })
        );
    }

    #[test]
    fn evaluation_is_repeatable() {
        let expr = parse(tokenize("1 + 2 * 3 - -4 / 2")).unwrap();
        let first = evaluate(&expr);
        let second = evaluate(&expr);
        assert_eq!(first, Ok(9));
        assert_eq!(first, second);
    }
}
