//! # Calculator Parser
//!
//! [`CalcParser`] builds an [`Expr`] from a token sequence by precedence
//! climbing. The binding powers come from an [`OperDefs`] table; the default
//! one, [`calc_oper_defs`], is:
//!
//! | Operator | Left BP | Right BP | Associativity |
//! |---|---|---|---|
//! | `+` `-` (infix) | 1 | 2 | left |
//! | `*` `/` (infix) | 3 | 4 | left |
//! | `+` `-` (prefix) | | 5 | |
//!
//! Prefix operators bind tighter than any infix operator, so `-3+5` is
//! `(+ (- 3) 5)`.
//!
//! Trees are never taller than the parser's depth limit ([`MAX_DEPTH`] by
//! default). Both a long prefix chain (`---1`) and a long left-associative
//! chain (`1+1+1`) count toward it, and input beyond it is rejected with
//! [`ParseError::TooDeep`].
use crate::{CalcToken, Expr, Operator, ParseError, Token};
use once_cell::sync::Lazy;
use pratt::{Fixity, OperDef, OperDefs, Span, Spanned, TokenCursor};

static CALC_OPER_DEFS: Lazy<OperDefs<Operator>> = Lazy::new(|| {
    let mut defs = OperDefs::new();
    for (op, def) in [
        (Operator::Plus, OperDef::infix(1, 2)),
        (Operator::Minus, OperDef::infix(1, 2)),
        (Operator::Star, OperDef::infix(3, 4)),
        (Operator::Slash, OperDef::infix(3, 4)),
        (Operator::Plus, OperDef::prefix(5)),
        (Operator::Minus, OperDef::prefix(5)),
    ] {
        if let Err(e) = defs.define(op, def) {
            unreachable!("invalid built-in operator table: {e}");
        }
    }
    defs
});

/// Default limit on parser recursion and expression tree height.
pub const MAX_DEPTH: usize = 256;

/// The calculator's binding power table, built once per process.
pub fn calc_oper_defs() -> &'static OperDefs<Operator> {
    &CALC_OPER_DEFS
}

/// Counters collected while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    /// Tokens consumed.
    pub tokens: usize,
    /// Expression nodes built.
    pub nodes: usize,
    /// Deepest recursion level reached by [`CalcParser::parse_bp`].
    pub max_depth: usize,
}

/// A precedence-climbing parser over calculator tokens.
///
/// Each parser owns its [`TokenCursor`] and is used for a single expression.
///
/// # Example
/// ```rust
/// # use pratt_calc::{tokenize, CalcParser};
/// let mut parser = CalcParser::new(tokenize("2 - 1 - 1"));
/// let expr = parser.parse().unwrap();
/// assert_eq!(expr.to_string(), "(- (- 2 1) 1)");
/// assert_eq!(parser.stats().nodes, 5);
/// ```
pub struct CalcParser<'a> {
    cursor: TokenCursor<CalcToken>,
    opers: &'a OperDefs<Operator>,
    depth: usize,
    max_depth: usize,
    stats: ParserStats,
}

impl CalcParser<'static> {
    /// Creates a parser using the default binding power table.
    pub fn new(tokens: Vec<CalcToken>) -> Self {
        Self::with_opers(tokens, calc_oper_defs())
    }
}

impl<'a> CalcParser<'a> {
    /// Creates a parser using a caller-supplied binding power table.
    pub fn with_opers(tokens: Vec<CalcToken>, opers: &'a OperDefs<Operator>) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            opers,
            depth: 0,
            max_depth: MAX_DEPTH,
            stats: ParserStats::default(),
        }
    }

    /// Sets the depth limit; see [`MAX_DEPTH`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }

    /// Parses the whole token sequence as one expression.
    ///
    /// # Errors
    /// [`ParseError::EmptyInput`] when there are no tokens; otherwise any
    /// error of [`parse_bp`](Self::parse_bp).
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let (expr, _) = self.parse_node(0)?;
        log::trace!(
            "Accept {} (cursor {:?}, parser {:?})",
            expr,
            self.cursor.stats(),
            self.stats
        );
        Ok(expr)
    }

    /// Parses an expression whose infix operators all bind at least as
    /// strongly as `min_bp`.
    ///
    /// Stops, without consuming it, at the first operator whose left binding
    /// power is below `min_bp`; that operator belongs to an enclosing call.
    ///
    /// # Errors
    /// Besides the syntax errors, [`ParseError::TooDeep`] once recursion or
    /// the height of the tree being built exceeds the depth limit.
    pub fn parse_bp(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        self.parse_node(min_bp).map(|(expr, _)| expr)
    }

    /// Like [`parse_bp`](Self::parse_bp), also returning the tree height.
    fn parse_node(&mut self, min_bp: u8) -> Result<(Expr, usize), ParseError> {
        self.depth += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.depth);
        let result = self.parse_node_inner(min_bp);
        self.depth -= 1;
        result
    }

    fn parse_node_inner(&mut self, min_bp: u8) -> Result<(Expr, usize), ParseError> {
        let seed = self.next_token()?;
        if self.depth > self.max_depth {
            return Err(self.too_deep(seed.span()));
        }
        let (mut lhs, mut height) = match seed.token {
            Token::Integer(value) => {
                log::trace!("Literal {} (min_bp={})", value, min_bp);
                (self.node(Expr::literal(value.into())), 1)
            }
            Token::Operator(op) => {
                let Some(r_bp) = self.opers.prefix_bp(&op) else {
                    return Err(ParseError::UnexpectedLeadingToken {
                        token: seed.token,
                        span: seed.span(),
                    });
                };
                log::trace!("Prefix {} (r_bp={})", op, r_bp);
                let (operand, operand_height) = self.parse_node(r_bp)?;
                let height = self.check_height(operand_height + 1, seed.span())?;
                (self.node(Expr::unary(op, operand)), height)
            }
        };

        while let Some(&next) = self.cursor.peek() {
            let op = match next.token {
                Token::Operator(op) => op,
                found @ Token::Integer(_) => {
                    return Err(ParseError::MissingOperator {
                        found,
                        span: next.span(),
                    });
                }
            };
            let Some((l_bp, r_bp)) = self.opers.infix_bp(&op) else {
                return Err(ParseError::UnknownOperatorBindingPower {
                    op,
                    fixity: Fixity::Infix,
                    span: next.span(),
                });
            };
            if l_bp < min_bp {
                log::trace!("Yield {} (l_bp={} < min_bp={})", op, l_bp, min_bp);
                break;
            }
            self.next_token()?;
            log::trace!("Infix {} (l_bp={}, r_bp={})", op, l_bp, r_bp);
            let (rhs, rhs_height) = self.parse_node(r_bp)?;
            height = self.check_height(height.max(rhs_height) + 1, next.span())?;
            lhs = self.node(Expr::binary(op, lhs, rhs));
        }

        Ok((lhs, height))
    }

    fn check_height(&self, height: usize, span: Span) -> Result<usize, ParseError> {
        if height > self.max_depth {
            return Err(self.too_deep(span));
        }
        Ok(height)
    }

    fn too_deep(&self, span: Span) -> ParseError {
        log::debug!("Depth limit {} exceeded at {}", self.max_depth, span.display());
        ParseError::TooDeep {
            limit: self.max_depth,
            span,
        }
    }

    fn next_token(&mut self) -> Result<CalcToken, ParseError> {
        let token = self.cursor.try_next()?;
        self.stats.tokens += 1;
        Ok(token)
    }

    fn node(&mut self, expr: Expr) -> Expr {
        self.stats.nodes += 1;
        expr
    }
}

/// Parses `tokens` with the default binding power table.
///
/// # Example
/// ```rust
/// # use pratt_calc::{parse, tokenize};
/// let expr = parse(tokenize("1+2*3")).unwrap();
/// assert_eq!(expr.to_string(), "(+ 1 (* 2 3))");
/// ```
pub fn parse(tokens: Vec<CalcToken>) -> Result<Expr, ParseError> {
    CalcParser::new(tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;
    use pratt::{Assoc, span};

    fn shape(input: &str) -> String {
        let _ = env_logger::builder().is_test(true).try_init();
        parse(tokenize(input)).unwrap().to_string()
    }

    fn parse_err(input: &str) -> ParseError {
        let _ = env_logger::builder().is_test(true).try_init();
        parse(tokenize(input)).unwrap_err()
    }

    #[test]
    fn default_table_matches_documented_binding_powers() {
        let defs = calc_oper_defs();
        assert_eq!(defs.infix_bp(&Operator::Plus), Some((1, 2)));
        assert_eq!(defs.infix_bp(&Operator::Minus), Some((1, 2)));
        assert_eq!(defs.infix_bp(&Operator::Star), Some((3, 4)));
        assert_eq!(defs.infix_bp(&Operator::Slash), Some((3, 4)));
        assert_eq!(defs.prefix_bp(&Operator::Plus), Some(5));
        assert_eq!(defs.prefix_bp(&Operator::Minus), Some(5));
        assert_eq!(defs.prefix_bp(&Operator::Star), None);
        assert_eq!(defs.prefix_bp(&Operator::Slash), None);
        for op in Operator::ALL {
            let def = defs.get(&op)[Fixity::Infix].unwrap();
            assert_eq!(def.assoc(), Assoc::Left);
        }
    }

    #[test]
    fn single_digit_is_a_literal() {
        for n in 0..=9 {
            assert_eq!(shape(&n.to_string()), n.to_string());
        }
    }

    #[test]
    fn same_precedence_is_left_associative() {
        assert_eq!(shape("2-1-1"), "(- (- 2 1) 1)");
        assert_eq!(shape("8/4/2"), "(/ (/ 8 4) 2)");
        assert_eq!(shape("1+2-3+4"), "(+ (- (+ 1 2) 3) 4)");
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(shape("1+2*3"), "(+ 1 (* 2 3))");
        assert_eq!(shape("2*3+1"), "(+ (* 2 3) 1)");
        assert_eq!(shape("1-6/2*3+4"), "(+ (- 1 (* (/ 6 2) 3)) 4)");
    }

    #[test]
    fn prefix_binds_tighter_than_infix() {
        assert_eq!(shape("-3+5"), "(+ (- 3) 5)");
        assert_eq!(shape("-3*5"), "(* (- 3) 5)");
        assert_eq!(shape("2*-3"), "(* 2 (- 3))");
        assert_eq!(shape("2--3"), "(- 2 (- 3))");
        assert_eq!(shape("--3"), "(- (- 3))");
        assert_eq!(shape("+-+4"), "(+ (- (+ 4)))");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(parse_err(""), ParseError::EmptyInput);
        assert_eq!(parse_err("  \t\r\n"), ParseError::EmptyInput);
        assert_eq!(parse_err("@#$"), ParseError::EmptyInput);
    }

    #[test]
    fn dangling_operator_is_unexpected_end() {
        assert_eq!(
            parse_err("1 +"),
            ParseError::UnexpectedEnd {
                span: Some(span!(0, 3, 0, 3))
            }
        );
        assert_eq!(
            parse_err("-"),
            ParseError::UnexpectedEnd {
                span: Some(span!(0, 1, 0, 1))
            }
        );
    }

    #[test]
    fn infix_only_operator_cannot_lead() {
        assert_eq!(
            parse_err("*2"),
            ParseError::UnexpectedLeadingToken {
                token: Token::Operator(Operator::Star),
                span: span!(0, 0, 0, 1),
            }
        );
        assert_eq!(
            parse_err("1+/2"),
            ParseError::UnexpectedLeadingToken {
                token: Token::Operator(Operator::Slash),
                span: span!(0, 2, 0, 3),
            }
        );
    }

    #[test]
    fn adjacent_operands_need_an_operator() {
        assert_eq!(
            parse_err("12"),
            ParseError::MissingOperator {
                found: Token::Integer(2),
                span: span!(0, 1, 0, 2),
            }
        );
        assert_eq!(
            parse_err("1+2 3"),
            ParseError::MissingOperator {
                found: Token::Integer(3),
                span: span!(0, 4, 0, 5),
            }
        );
    }

    #[test]
    fn operator_without_infix_entry_is_reported() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut defs = OperDefs::new();
        defs.define(Operator::Plus, OperDef::infix(1, 2)).unwrap();
        defs.define(Operator::Minus, OperDef::prefix(5)).unwrap();

        let mut parser = CalcParser::with_opers(tokenize("1+-2"), &defs);
        assert_eq!(parser.parse().unwrap().to_string(), "(+ 1 (- 2))");

        let mut parser = CalcParser::with_opers(tokenize("1 * 2"), &defs);
        assert_eq!(
            parser.parse().unwrap_err(),
            ParseError::UnknownOperatorBindingPower {
                op: Operator::Star,
                fixity: Fixity::Infix,
                span: span!(0, 2, 0, 3),
            }
        );
    }

    #[test]
    fn custom_table_can_flip_associativity() {
        let mut defs = OperDefs::new();
        defs.define(Operator::Minus, OperDef::infix(2, 1)).unwrap();
        let mut parser = CalcParser::with_opers(tokenize("2-1-1"), &defs);
        assert_eq!(parser.parse().unwrap().to_string(), "(- 2 (- 1 1))");
    }

    #[test]
    fn long_prefix_chain_is_too_deep() {
        let _ = env_logger::builder().is_test(true).try_init();
        let input = format!("{}1", "-".repeat(200_000));
        let err = parse(tokenize(&input)).unwrap_err();
        assert_eq!(
            err,
            ParseError::TooDeep {
                limit: MAX_DEPTH,
                span: span!(0, MAX_DEPTH, 0, MAX_DEPTH + 1),
            }
        );
    }

    #[test]
    fn long_left_associative_chain_is_too_deep() {
        let _ = env_logger::builder().is_test(true).try_init();
        let input = format!("{}1", "1+".repeat(200_000));
        let err = parse(tokenize(&input)).unwrap_err();
        // The tree reaches the limit after MAX_DEPTH - 1 additions; the next
        // `+` is the first one to overflow it.
        let col = 2 * MAX_DEPTH - 1;
        assert_eq!(
            err,
            ParseError::TooDeep {
                limit: MAX_DEPTH,
                span: span!(0, col, 0, col + 1),
            }
        );
    }

    #[test]
    fn chains_up_to_the_limit_parse() {
        let prefix = format!("{}1", "-".repeat(MAX_DEPTH - 1));
        assert!(parse(tokenize(&prefix)).is_ok());

        let infix = format!("{}1", "1+".repeat(MAX_DEPTH - 1));
        assert!(parse(tokenize(&infix)).is_ok());

        let wide = format!("{}1", "1*1+".repeat(MAX_DEPTH - 3));
        assert!(parse(tokenize(&wide)).is_ok());
    }

    #[test]
    fn depth_limit_is_configurable() {
        let mut parser = CalcParser::new(tokenize("1+2*3")).with_max_depth(2);
        assert_eq!(
            parser.parse().unwrap_err(),
            ParseError::TooDeep {
                limit: 2,
                span: span!(0, 4, 0, 5),
            }
        );

        let mut parser = CalcParser::new(tokenize("--1")).with_max_depth(2);
        assert_eq!(
            parser.parse().unwrap_err(),
            ParseError::TooDeep {
                limit: 2,
                span: span!(0, 2, 0, 3),
            }
        );

        let mut parser = CalcParser::new(tokenize("-1+2")).with_max_depth(3);
        assert_eq!(parser.parse().unwrap().to_string(), "(+ (- 1) 2)");
    }

    #[test]
    fn stats_track_tokens_nodes_and_depth() {
        let mut parser = CalcParser::new(tokenize("1+2*3"));
        parser.parse().unwrap();
        let stats = parser.stats();
        assert_eq!(stats.tokens, 5);
        assert_eq!(stats.nodes, 5);
        assert_eq!(stats.max_depth, 3);
    }
}
