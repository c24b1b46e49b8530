//! # Calculator Grammar
//!
//! Couples the calculator tables in [`parser_data`] with any semantic action
//! implementing [`CalcAction`]. The same tables drive two actions:
//!
//! - [`Evaluator`](eval::Evaluator) computes the integer value directly; its
//!   stack value is `i64` and every cast is the identity;
//! - [`AstBuilder`](ast::AstBuilder) builds a reference-counted tree; its
//!   stack value is the tagged [`Node`](ast::Node) and every cast checks the
//!   tag.
//!
//! Grammar:
//! ```text
//! Expr -> Expr + Term | Expr - Term | Term
//! Term -> Term * number | Term / number | number
//! ```
//!
//! Operators are left-associative and `*`, `/` bind tighter than `+`, `-`.

pub mod ast;
pub mod eval;
pub mod parser_data;

use crate::{Lexeme, SampleError};
use lrstack::{Args, Cast, Parser, ParserDriver, SemanticAction};
use parser_data::{ParData, ProdID, StateID, TokenID};

/// Production callbacks of the calculator grammar.
///
/// `Expr` and `Term` are the concrete types of the two nonterminals; number
/// literals are always `i64`. The stack value type must convert to and from
/// each of them through [`Cast`].
pub trait CalcAction: SemanticAction {
    type Expr;
    type Term;

    /// `Expr -> Term`
    fn make_expr(&mut self, term: Self::Term) -> Self::Expr;
    /// `Expr -> Expr + Term`
    fn make_add(&mut self, lhs: Self::Expr, rhs: Self::Term) -> Self::Expr;
    /// `Expr -> Expr - Term`
    fn make_sub(&mut self, lhs: Self::Expr, rhs: Self::Term) -> Self::Expr;
    /// `Term -> number`
    fn make_term(&mut self, number: i64) -> Self::Term;
    /// `Term -> Term * number`
    fn make_mul(&mut self, lhs: Self::Term, rhs: i64) -> Self::Term;
    /// `Term -> Term / number`
    fn make_div(&mut self, lhs: Self::Term, rhs: i64) -> Self::Term;
}

impl<A> ParserDriver<A> for ParData
where
    A: CalcAction + Cast<<A as CalcAction>::Expr> + Cast<<A as CalcAction>::Term> + Cast<i64>,
{
    fn reduce(actions: &mut A, prod_id: ProdID, args: Args<'_, StateID, A::Value>) -> A::Value {
        match prod_id {
            ProdID::Start => {
                // Start -> Expr
                // Accept - does not get reduced
                unreachable!()
            }
            ProdID::Expr1 => {
                // Expr -> Expr + Term
                let lhs = args.cast::<A::Expr, A>(actions, 0);
                let rhs = args.cast::<A::Term, A>(actions, 2);
                let expr = actions.make_add(lhs, rhs);
                <A as Cast<A::Expr>>::upcast(actions, expr)
            }
            ProdID::Expr2 => {
                // Expr -> Expr - Term
                let lhs = args.cast::<A::Expr, A>(actions, 0);
                let rhs = args.cast::<A::Term, A>(actions, 2);
                let expr = actions.make_sub(lhs, rhs);
                <A as Cast<A::Expr>>::upcast(actions, expr)
            }
            ProdID::Expr3 => {
                // Expr -> Term
                let term = args.cast::<A::Term, A>(actions, 0);
                let expr = actions.make_expr(term);
                <A as Cast<A::Expr>>::upcast(actions, expr)
            }
            ProdID::Term1 => {
                // Term -> Term * number
                let lhs = args.cast::<A::Term, A>(actions, 0);
                let rhs = args.cast::<i64, A>(actions, 2);
                let term = actions.make_mul(lhs, rhs);
                <A as Cast<A::Term>>::upcast(actions, term)
            }
            ProdID::Term2 => {
                // Term -> Term / number
                let lhs = args.cast::<A::Term, A>(actions, 0);
                let rhs = args.cast::<i64, A>(actions, 2);
                let term = actions.make_div(lhs, rhs);
                <A as Cast<A::Term>>::upcast(actions, term)
            }
            ProdID::Term3 => {
                // Term -> number
                let number = args.cast::<i64, A>(actions, 0);
                let term = actions.make_term(number);
                <A as Cast<A::Term>>::upcast(actions, term)
            }
        }
    }
}

/// Calculator parser over the action `A`.
pub type CalcParser<A> = Parser<ParData, A>;

/// Maps a scanned lexeme to a calculator token; number literals are upcast
/// into the action's value type.
pub fn token<A>(actions: &A, lexeme: Lexeme) -> Result<(TokenID, A::Value), SampleError>
where
    A: SemanticAction + Cast<i64>,
{
    let token_id = match lexeme {
        Lexeme::Plus => TokenID::Add,
        Lexeme::Minus => TokenID::Sub,
        Lexeme::Star => TokenID::Mul,
        Lexeme::Slash => TokenID::Div,
        Lexeme::Number(n) => return Ok((TokenID::Number, actions.upcast(n))),
        other => return Err(SampleError::UnexpectedToken(other.label())),
    };
    Ok((token_id, A::Value::default()))
}
