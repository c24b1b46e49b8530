// Tables for the hello-world grammar:
//
//   Start -> Greeting
//   greeting1:  Greeting -> hello world

use lrstack::{ParserAction, ParserData, ParserProdID, ParserStateID, ParserTokenID};

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
    Greeting1 = 1,
}

impl ParserProdID for ProdID {
    type TokenID = TokenID;

    const COUNT: usize = 2;

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
        "start",     // 0
        "greeting1", // 1
    ];

    pub const LHS_TOKENS: &[TokenID] = &[
        TokenID::Start,    // 0
        TokenID::Greeting, // 1
    ];

    pub const SIZES: &[usize] = &[
        1,  // 0
        2,  // 1
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenID {
    // Nonterminals:
    Start = 0,
    Greeting = 1,

    // Terminals:
    End = 2,
    Hello = 3,
    World = 4,

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
        "Start",    // 0
        "Greeting", // 1
        "end",      // 2
        "hello",    // 3
        "world",    // 4
        "error",    // 5
    ];
}

pub type Action = ParserAction<StateID, ProdID>;

pub struct ParData;
impl ParData {
    const TAB: &'static [[Action; TokenID::COUNT]] = &[
        /* STATE 0 */
        [
            Action::Error,             /* 0(Start) */
            Action::Goto(StateID(1)),  /* 1(Greeting) */
            Action::Error,             /* 2(end) */
            Action::Shift(StateID(2)), /* 3(hello) */
            Action::Error,             /* 4(world) */
            Action::Error,             /* 5(error) */
        ],
        /* STATE 1 */
        [
            Action::Error,  /* 0(Start) */
            Action::Error,  /* 1(Greeting) */
            Action::Accept, /* 2(end) */
            Action::Error,  /* 3(hello) */
            Action::Error,  /* 4(world) */
            Action::Error,  /* 5(error) */
        ],
        /* STATE 2 */
        [
            Action::Error,             /* 0(Start) */
            Action::Error,             /* 1(Greeting) */
            Action::Error,             /* 2(end) */
            Action::Error,             /* 3(hello) */
            Action::Shift(StateID(3)), /* 4(world) */
            Action::Error,             /* 5(error) */
        ],
        /* STATE 3 */
        [
            Action::Error,                     /* 0(Start) */
            Action::Error,                     /* 1(Greeting) */
            Action::Reduce(ProdID::Greeting1), /* 2(end) */
            Action::Error,                     /* 3(hello) */
            Action::Error,                     /* 4(world) */
            Action::Error,                     /* 5(error) */
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
