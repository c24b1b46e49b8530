//! # Automaton Tables
//!
//! Traits describing the static tables an external generator emits for a
//! grammar: state, token and production identifiers plus the combined
//! action/goto table. The engine only reads these tables; it never checks
//! them for LALR consistency.
//!
//! A table module usually looks like this:
//!
//! ```text
//! pub enum TokenID { Start, Expr, .., End, Plus, .., Error }
//! pub enum ProdID { Start, Expr1, .. }
//! pub struct StateID(u8);
//! pub struct ParData;
//! impl ParserData for ParData { .. TAB[state][token] .. }
//! ```
//!
//! Nonterminal columns of the table hold [`ParserAction::Goto`] entries,
//! terminal columns hold the remaining actions.

use std::fmt::Debug;

/// One entry of the action/goto table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserAction<US, UP>
where
    US: ParserStateID,
    UP: ParserProdID,
{
    /// The token is not acceptable in this state.
    Error,
    /// End of input in an accepting state.
    Accept,
    /// Consume the token and enter the given state.
    Shift(US),
    /// Reduce by the given production.
    Reduce(UP),
    /// State to enter after reducing to the nonterminal of this column.
    Goto(US),
}

pub trait ParserStateID: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;
}

pub trait ParserTokenID: Copy + Debug + Eq + Into<usize> {
    const COUNT_NONTERMINALS: usize;
    const COUNT_TERMINALS: usize;
    const COUNT: usize;

    /// The end-of-input terminal.
    const END: Self;

    fn label(&self) -> &'static str;
}

pub trait ParserProdID: Copy + Debug + Eq + Into<usize> {
    type TokenID: ParserTokenID;

    const COUNT: usize;

    fn label(&self) -> &'static str;

    /// Nonterminal on the left-hand side.
    fn lhs_token_id(&self) -> Self::TokenID;

    /// Number of right-hand side symbols (the reduce arity).
    fn size(&self) -> usize;
}

/// Static automaton for one grammar.
pub trait ParserData {
    type StateID: ParserStateID;
    type TokenID: ParserTokenID;
    type ProdID: ParserProdID<TokenID = Self::TokenID>;

    fn start_state() -> Self::StateID;

    fn lookup(
        state_id: Self::StateID,
        token_id: Self::TokenID,
    ) -> ParserAction<Self::StateID, Self::ProdID>;

    /// The grammar's `error` terminal, if it has recovery productions.
    fn error_token() -> Option<Self::TokenID> {
        None
    }
}
