// Tables for the test grammar:
//
//   Start -> Seq
//   cons:  Seq -> item Seq
//   one:   Seq -> item
//
// `stray` is a declared terminal that no state accepts.

use crate::{ParserAction, ParserData, ParserProdID, ParserStateID, ParserTokenID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateID(u8);
impl ParserStateID for StateID {
    const COUNT: usize = 4;
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
    Cons = 1,
    One = 2,
}

impl ParserProdID for ProdID {
    type TokenID = TokenID;

    const COUNT: usize = 3;

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
        "cons",  // 1
        "one",   // 2
    ];

    pub const LHS_TOKENS: &[TokenID] = &[
        TokenID::Start, // 0
        TokenID::Seq,   // 1
        TokenID::Seq,   // 2
    ];

    pub const SIZES: &[usize] = &[
        1, // 0
        2, // 1
        1, // 2
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenID {
    // Nonterminals:
    Start = 0,
    Seq = 1,

    // Terminals:
    End = 2,
    Item = 3,
    Stray = 4,

    // Error:
    Error = 5,
}

impl ParserTokenID for TokenID {
    const COUNT_NONTERMINALS: usize = 2;
    const COUNT_TERMINALS: usize = 3;
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
        "Start", // 0
        "Seq",   // 1
        "end",   // 2
        "item",  // 3
        "stray", // 4
        "error", // 5
    ];
}

pub type Action = ParserAction<StateID, ProdID>;

pub struct ParData;
impl ParData {
    const TAB: &'static [[Action; TokenID::COUNT]] = &[
        /* STATE 0 */
        [
            Action::Error,              /* 0(Start) */
            Action::Goto(StateID(1)),   /* 1(Seq) */
            Action::Error,              /* 2(end) */
            Action::Shift(StateID(2)),  /* 3(item) */
            Action::Error,              /* 4(stray) */
            Action::Error,              /* 5(error) */
        ],
        /* STATE 1 */
        [
            Action::Error,  /* 0(Start) */
            Action::Error,  /* 1(Seq) */
            Action::Accept, /* 2(end) */
            Action::Error,  /* 3(item) */
            Action::Error,  /* 4(stray) */
            Action::Error,  /* 5(error) */
        ],
        /* STATE 2 */
        [
            Action::Error,               /* 0(Start) */
            Action::Goto(StateID(3)),    /* 1(Seq) */
            Action::Reduce(ProdID::One), /* 2(end) */
            Action::Shift(StateID(2)),   /* 3(item) */
            Action::Error,               /* 4(stray) */
            Action::Error,               /* 5(error) */
        ],
        /* STATE 3 */
        [
            Action::Error,                /* 0(Start) */
            Action::Error,                /* 1(Seq) */
            Action::Reduce(ProdID::Cons), /* 2(end) */
            Action::Error,                /* 3(item) */
            Action::Error,                /* 4(stray) */
            Action::Error,                /* 5(error) */
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
