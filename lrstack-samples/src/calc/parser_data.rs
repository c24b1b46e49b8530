// Tables for the calculator grammar:
//
//   Start -> Expr
//   expr1:  Expr -> Expr add Term
//   expr2:  Expr -> Expr sub Term
//   expr3:  Expr -> Term
//   term1:  Term -> Term mul number
//   term2:  Term -> Term div number
//   term3:  Term -> number

use lrstack::{ParserAction, ParserData, ParserProdID, ParserStateID, ParserTokenID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateID(u8);
impl ParserStateID for StateID {
    const COUNT: usize = 12;
}

impl From<StateID> for usize {
    fn from(s: StateID) -> Self {
        s.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProdID {
    Start = 0,
    Expr1 = 1,
    Expr2 = 2,
    Expr3 = 3,
    Term1 = 4,
    Term2 = 5,
    Term3 = 6,
}

impl ParserProdID for ProdID {
    type TokenID = TokenID;

    const COUNT: usize = 7;

    fn label(&self) -> &'static str {
        ProdID::LABELS[Into::<usize>::into(*self)]
    }
    fn lhs_token_id(&self) -> Self::TokenID {
        ProdID::LHS_TOKENS[Into::<usize>::into(*self)]
    }
    fn size(&self) -> usize {
        ProdID::SIZES[Into::<usize>::into(*self)]
    }
}

impl From<ProdID> for usize {
    fn from(p: ProdID) -> Self {
        p as usize
    }
}

impl ProdID {
    pub const LABELS: &'static [&str] = &[
        "start", // 0
        "expr1", // 1
        "expr2", // 2
        "expr3", // 3
        "term1", // 4
        "term2", // 5
        "term3", // 6
    ];

    pub const LHS_TOKENS: &[TokenID] = &[
        TokenID::Start, // 0
        TokenID::Expr,  // 1
        TokenID::Expr,  // 2
        TokenID::Expr,  // 3
        TokenID::Term,  // 4
        TokenID::Term,  // 5
        TokenID::Term,  // 6
    ];

    pub const SIZES: &[usize] = &[
        1,  // 0
        3,  // 1
        3,  // 2
        1,  // 3
        3,  // 4
        3,  // 5
        1,  // 6
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenID {
    // Nonterminals:
    Start = 0,
    Expr = 1,
    Term = 2,

    // Terminals:
    End = 3,
    Add = 4,
    Sub = 5,
    Mul = 6,
    Div = 7,
    Number = 8,

    // Error:
    Error = 9,
}

impl ParserTokenID for TokenID {
    const COUNT_NONTERMINALS: usize = 3;
    const COUNT_TERMINALS: usize = 6;
    const COUNT: usize = Self::COUNT_NONTERMINALS + Self::COUNT_TERMINALS + 1;
    const END: Self = TokenID::End;

    fn label(&self) -> &'static str {
        TokenID::LABELS[Into::<usize>::into(*self)]
    }
}

impl From<TokenID> for usize {
    fn from(t: TokenID) -> Self {
        t as usize
    }
}

impl TokenID {
    pub const LABELS: &'static [&str] = &[
        "Start",  // 0
        "Expr",   // 1
        "Term",   // 2
        "end",    // 3
        "add",    // 4
        "sub",    // 5
        "mul",    // 6
        "div",    // 7
        "number", // 8
        "error",  // 9
    ];
}

pub type Action = ParserAction<StateID, ProdID>;

pub struct ParData;
impl ParData {
    const TAB: &'static [[Action; TokenID::COUNT]] = &[
        /* STATE 0 */
        [
            Action::Error,             /* 0(Start) */
            Action::Goto(StateID(1)),  /* 1(Expr) */
            Action::Goto(StateID(2)),  /* 2(Term) */
            Action::Error,             /* 3(end) */
            Action::Error,             /* 4(add) */
            Action::Error,             /* 5(sub) */
            Action::Error,             /* 6(mul) */
            Action::Error,             /* 7(div) */
            Action::Shift(StateID(7)), /* 8(number) */
            Action::Error,             /* 9(error) */
        ],
        /* STATE 1 */
        [
            Action::Error,             /* 0(Start) */
            Action::Error,             /* 1(Expr) */
            Action::Error,             /* 2(Term) */
            Action::Accept,            /* 3(end) */
            Action::Shift(StateID(3)), /* 4(add) */
            Action::Shift(StateID(5)), /* 5(sub) */
            Action::Error,             /* 6(mul) */
            Action::Error,             /* 7(div) */
            Action::Error,             /* 8(number) */
            Action::Error,             /* 9(error) */
        ],
        /* STATE 2 */
        [
            Action::Error,                 /* 0(Start) */
            Action::Error,                 /* 1(Expr) */
            Action::Error,                 /* 2(Term) */
            Action::Reduce(ProdID::Expr3), /* 3(end) */
            Action::Reduce(ProdID::Expr3), /* 4(add) */
            Action::Reduce(ProdID::Expr3), /* 5(sub) */
            Action::Shift(StateID(8)),     /* 6(mul) */
            Action::Shift(StateID(10)),    /* 7(div) */
            Action::Error,                 /* 8(number) */
            Action::Error,                 /* 9(error) */
        ],
        /* STATE 3 */
        [
            Action::Error,             /* 0(Start) */
            Action::Error,             /* 1(Expr) */
            Action::Goto(StateID(4)),  /* 2(Term) */
            Action::Error,             /* 3(end) */
            Action::Error,             /* 4(add) */
            Action::Error,             /* 5(sub) */
            Action::Error,             /* 6(mul) */
            Action::Error,             /* 7(div) */
            Action::Shift(StateID(7)), /* 8(number) */
            Action::Error,             /* 9(error) */
        ],
        /* STATE 4 */
        [
            Action::Error,                 /* 0(Start) */
            Action::Error,                 /* 1(Expr) */
            Action::Error,                 /* 2(Term) */
            Action::Reduce(ProdID::Expr1), /* 3(end) */
            Action::Reduce(ProdID::Expr1), /* 4(add) */
            Action::Reduce(ProdID::Expr1), /* 5(sub) */
            Action::Shift(StateID(8)),     /* 6(mul) */
            Action::Shift(StateID(10)),    /* 7(div) */
            Action::Error,                 /* 8(number) */
            Action::Error,                 /* 9(error) */
        ],
        /* STATE 5 */
        [
            Action::Error,             /* 0(Start) */
            Action::Error,             /* 1(Expr) */
            Action::Goto(StateID(6)),  /* 2(Term) */
            Action::Error,             /* 3(end) */
            Action::Error,             /* 4(add) */
            Action::Error,             /* 5(sub) */
            Action::Error,             /* 6(mul) */
            Action::Error,             /* 7(div) */
            Action::Shift(StateID(7)), /* 8(number) */
            Action::Error,             /* 9(error) */
        ],
        /* STATE 6 */
        [
            Action::Error,                 /* 0(Start) */
            Action::Error,                 /* 1(Expr) */
            Action::Error,                 /* 2(Term) */
            Action::Reduce(ProdID::Expr2), /* 3(end) */
            Action::Reduce(ProdID::Expr2), /* 4(add) */
            Action::Reduce(ProdID::Expr2), /* 5(sub) */
            Action::Shift(StateID(8)),     /* 6(mul) */
            Action::Shift(StateID(10)),    /* 7(div) */
            Action::Error,                 /* 8(number) */
            Action::Error,                 /* 9(error) */
        ],
        /* STATE 7 */
        [
            Action::Error,                 /* 0(Start) */
            Action::Error,                 /* 1(Expr) */
            Action::Error,                 /* 2(Term) */
            Action::Reduce(ProdID::Term3), /* 3(end) */
            Action::Reduce(ProdID::Term3), /* 4(add) */
            Action::Reduce(ProdID::Term3), /* 5(sub) */
            Action::Reduce(ProdID::Term3), /* 6(mul) */
            Action::Reduce(ProdID::Term3), /* 7(div) */
            Action::Error,                 /* 8(number) */
            Action::Error,                 /* 9(error) */
        ],
        /* STATE 8 */
        [
            Action::Error,             /* 0(Start) */
            Action::Error,             /* 1(Expr) */
            Action::Error,             /* 2(Term) */
            Action::Error,             /* 3(end) */
            Action::Error,             /* 4(add) */
            Action::Error,             /* 5(sub) */
            Action::Error,             /* 6(mul) */
            Action::Error,             /* 7(div) */
            Action::Shift(StateID(9)), /* 8(number) */
            Action::Error,             /* 9(error) */
        ],
        /* STATE 9 */
        [
            Action::Error,                 /* 0(Start) */
            Action::Error,                 /* 1(Expr) */
            Action::Error,                 /* 2(Term) */
            Action::Reduce(ProdID::Term1), /* 3(end) */
            Action::Reduce(ProdID::Term1), /* 4(add) */
            Action::Reduce(ProdID::Term1), /* 5(sub) */
            Action::Reduce(ProdID::Term1), /* 6(mul) */
            Action::Reduce(ProdID::Term1), /* 7(div) */
            Action::Error,                 /* 8(number) */
            Action::Error,                 /* 9(error) */
        ],
        /* STATE 10 */
        [
            Action::Error,              /* 0(Start) */
            Action::Error,              /* 1(Expr) */
            Action::Error,              /* 2(Term) */
            Action::Error,              /* 3(end) */
            Action::Error,              /* 4(add) */
            Action::Error,              /* 5(sub) */
            Action::Error,              /* 6(mul) */
            Action::Error,              /* 7(div) */
            Action::Shift(StateID(11)), /* 8(number) */
            Action::Error,              /* 9(error) */
        ],
        /* STATE 11 */
        [
            Action::Error,                 /* 0(Start) */
            Action::Error,                 /* 1(Expr) */
            Action::Error,                 /* 2(Term) */
            Action::Reduce(ProdID::Term2), /* 3(end) */
            Action::Reduce(ProdID::Term2), /* 4(add) */
            Action::Reduce(ProdID::Term2), /* 5(sub) */
            Action::Reduce(ProdID::Term2), /* 6(mul) */
            Action::Reduce(ProdID::Term2), /* 7(div) */
            Action::Error,                 /* 8(number) */
            Action::Error,                 /* 9(error) */
        ],
    ];
}

impl ParserData for ParData {
    type StateID = StateID;
    type TokenID = TokenID;
    type ProdID = ProdID;

    #[inline]
    fn start_state() -> Self::StateID {
        StateID(0)
    }
    #[inline]
    fn lookup(state_id: StateID, token_id: TokenID) -> Action {
        Self::TAB[Into::<usize>::into(state_id)][Into::<usize>::into(token_id)]
    }
}
