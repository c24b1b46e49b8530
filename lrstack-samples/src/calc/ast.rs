//! # Calculator AST
//!
//! Syntax tree for calculator input and the [`AstBuilder`] action that
//! constructs it. Subtrees are shared through [`Rc`], so building a node
//! never copies its children and a stack value can be cloned cheaply.
//!
//! The builder's stack value is [`Node`], a tagged union over the three
//! concrete argument types. Each [`Cast`] impl checks the tag and reports a
//! mismatch with [`contract_violation`]; a consistent table never triggers
//! one.

use super::{CalcAction, CalcParser, token};
use crate::{SampleError, feed};
use lrstack::{Cast, SemanticAction, contract_violation};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Add(Rc<Expr>, Rc<Term>),
    Sub(Rc<Expr>, Rc<Term>),
    Term(Rc<Term>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Mul(Rc<Term>, i64),
    Div(Rc<Term>, i64),
    Number(i64),
}

impl Expr {
    /// Evaluates the tree; `None` on division by zero or overflow.
    pub fn eval(&self) -> Option<i64> {
        match self {
            Expr::Add(lhs, rhs) => lhs.eval()?.checked_add(rhs.eval()?),
            Expr::Sub(lhs, rhs) => lhs.eval()?.checked_sub(rhs.eval()?),
            Expr::Term(term) => term.eval(),
        }
    }
}

impl Term {
    pub fn eval(&self) -> Option<i64> {
        match self {
            Term::Mul(lhs, rhs) => lhs.eval()?.checked_mul(*rhs),
            Term::Div(lhs, rhs) => lhs.eval()?.checked_div(*rhs),
            Term::Number(n) => Some(*n),
        }
    }
}

/// Fully parenthesised rendering, e.g. `((1 + (2 * 3)) - 4)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Term(term) => write!(f, "{}", term),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Term::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Term::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Stack value of the [`AstBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Node {
    /// Value of operator tokens and of the initial frame.
    #[default]
    None,
    Number(i64),
    Expr(Rc<Expr>),
    Term(Rc<Term>),
}

/// Builds an [`Expr`] tree.
#[derive(Debug, Default)]
pub struct AstBuilder {
    /// Number of tree nodes built so far.
    pub nodes: usize,
    pub syntax_errors: usize,
    pub stack_overflows: usize,
}

impl AstBuilder {
    fn expr(&mut self, expr: Expr) -> Rc<Expr> {
        self.nodes += 1;
        Rc::new(expr)
    }

    fn term(&mut self, term: Term) -> Rc<Term> {
        self.nodes += 1;
        Rc::new(term)
    }
}

impl SemanticAction for AstBuilder {
    type Value = Node;

    fn syntax_error(&mut self) {
        self.syntax_errors += 1;
    }

    fn stack_overflow(&mut self) {
        self.stack_overflows += 1;
    }
}

impl Cast<i64> for AstBuilder {
    fn downcast(&self, value: &Node) -> i64 {
        match value {
            Node::Number(n) => *n,
            other => contract_violation("Number", other),
        }
    }
    fn upcast(&self, value: i64) -> Node {
        Node::Number(value)
    }
}

impl Cast<Rc<Expr>> for AstBuilder {
    fn downcast(&self, value: &Node) -> Rc<Expr> {
        match value {
            Node::Expr(expr) => Rc::clone(expr),
            other => contract_violation("Expr", other),
        }
    }
    fn upcast(&self, value: Rc<Expr>) -> Node {
        Node::Expr(value)
    }
}

impl Cast<Rc<Term>> for AstBuilder {
    fn downcast(&self, value: &Node) -> Rc<Term> {
        match value {
            Node::Term(term) => Rc::clone(term),
            other => contract_violation("Term", other),
        }
    }
    fn upcast(&self, value: Rc<Term>) -> Node {
        Node::Term(value)
    }
}

impl CalcAction for AstBuilder {
    type Expr = Rc<Expr>;
    type Term = Rc<Term>;

    fn make_expr(&mut self, term: Rc<Term>) -> Rc<Expr> {
        self.expr(Expr::Term(term))
    }

    fn make_add(&mut self, lhs: Rc<Expr>, rhs: Rc<Term>) -> Rc<Expr> {
        self.expr(Expr::Add(lhs, rhs))
    }

    fn make_sub(&mut self, lhs: Rc<Expr>, rhs: Rc<Term>) -> Rc<Expr> {
        self.expr(Expr::Sub(lhs, rhs))
    }

    fn make_term(&mut self, number: i64) -> Rc<Term> {
        self.term(Term::Number(number))
    }

    fn make_mul(&mut self, lhs: Rc<Term>, rhs: i64) -> Rc<Term> {
        self.term(Term::Mul(lhs, rhs))
    }

    fn make_div(&mut self, lhs: Rc<Term>, rhs: i64) -> Rc<Term> {
        self.term(Term::Div(lhs, rhs))
    }
}

/// Parses `source` into an expression tree.
///
/// # Examples
/// ```rust
/// let expr = lrstack_samples::build_ast("1 + 2 * 3").unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
/// assert_eq!(expr.eval(), Some(7));
/// ```
pub fn build_ast(source: &str) -> Result<Rc<Expr>, SampleError> {
    let mut parser = CalcParser::new(AstBuilder::default());
    feed(&mut parser, source, token)?;
    parser
        .accept_as::<Rc<Expr>>()
        .ok_or(SampleError::Incomplete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::parser_data::TokenID;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn tree_shape_follows_precedence() {
        init_logger();
        let expr = build_ast("8 - 6 / 3 * 2 + 1").unwrap();
        assert_eq!(expr.to_string(), "((8 - ((6 / 3) * 2)) + 1)");
        assert_eq!(expr.eval(), Some(5));
    }

    #[test]
    fn single_number_is_wrapped_in_term_and_expr() {
        init_logger();
        let expr = build_ast("5").unwrap();
        assert_eq!(*expr, Expr::Term(Rc::new(Term::Number(5))));
    }

    #[test]
    fn builder_counts_nodes() {
        init_logger();
        let mut parser = CalcParser::new(AstBuilder::default());
        for (token_id, value) in [
            (TokenID::Number, Node::Number(3)),
            (TokenID::Add, Node::None),
            (TokenID::Number, Node::Number(4)),
        ] {
            assert!(!parser.post(token_id, value));
        }
        assert!(parser.post(TokenID::End, Node::None));
        // term(3), expr, term(4), add
        assert_eq!(parser.actions().nodes, 4);
        assert!(matches!(parser.accept(), Some(Node::Expr(_))));
    }

    #[test]
    fn eval_reports_division_by_zero() {
        init_logger();
        let expr = build_ast("4 / 0").unwrap();
        assert_eq!(expr.eval(), None);
    }

    #[test]
    #[should_panic(expected = "downcast contract violated: expected Expr, found Number(1)")]
    fn mismatched_tag_is_a_contract_violation() {
        let builder = AstBuilder::default();
        let _: Rc<Expr> = builder.downcast(&Node::Number(1));
    }
}
