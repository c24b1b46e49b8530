// Tables for the list grammar with error recovery:
//
//   Start -> Document
//   document1:  Document -> lParen Items rParen
//   items1:     Items -> Item
//   items2:     Items -> Items comma Item
//   item1:      Item -> number
//   item2:      Item -> error

use lrstack::{ParserAction, ParserData, ParserProdID, ParserStateID, ParserTokenID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateID(u8);
impl ParserStateID for StateID {
    const COUNT: usize = 10;
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
    Document1 = 1,
    Items1 = 2,
    Items2 = 3,
    Item1 = 4,
    Item2 = 5,
}

impl ParserProdID for ProdID {
    type TokenID = TokenID;

    const COUNT: usize = 6;

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
        "document1", // 1
        "items1",    // 2
        "items2",    // 3
        "item1",     // 4
        "item2",     // 5
    ];

    pub const LHS_TOKENS: &[TokenID] = &[
        TokenID::Start,    // 0
        TokenID::Document, // 1
        TokenID::Items,    // 2
        TokenID::Items,    // 3
        TokenID::Item,     // 4
        TokenID::Item,     // 5
    ];

    pub const SIZES: &[usize] = &[
        1,  // 0
        3,  // 1
        1,  // 2
        3,  // 3
        1,  // 4
        1,  // 5
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenID {
    // Nonterminals:
    Start = 0,
    Document = 1,
    Items = 2,
    Item = 3,

    // Terminals:
    End = 4,
    LParen = 5,
    RParen = 6,
    Comma = 7,
    Number = 8,
    Star = 9,

    // Error:
    Error = 10,
}

impl ParserTokenID for TokenID {
    const COUNT_NONTERMINALS: usize = 4;
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
        "Start",    // 0
        "Document", // 1
        "Items",    // 2
        "Item",     // 3
        "end",      // 4
        "lParen",   // 5
        "rParen",   // 6
        "comma",    // 7
        "number",   // 8
        "star",     // 9
        "error",    // 10
    ];
}

pub type Action = ParserAction<StateID, ProdID>;

pub struct ParData;
impl ParData {
    const TAB: &'static [[Action; TokenID::COUNT]] = &[
        /* STATE 0 */
        [
            Action::Error,             /* 0(Start) */
            Action::Goto(StateID(1)),  /* 1(Document) */
            Action::Error,             /* 2(Items) */
            Action::Error,             /* 3(Item) */
            Action::Error,             /* 4(end) */
            Action::Shift(StateID(2)), /* 5(lParen) */
            Action::Error,             /* 6(rParen) */
            Action::Error,             /* 7(comma) */
            Action::Error,             /* 8(number) */
            Action::Error,             /* 9(star) */
            Action::Error,             /* 10(error) */
        ],
        /* STATE 1 */
        [
            Action::Error,  /* 0(Start) */
            Action::Error,  /* 1(Document) */
            Action::Error,  /* 2(Items) */
            Action::Error,  /* 3(Item) */
            Action::Accept, /* 4(end) */
            Action::Error,  /* 5(lParen) */
            Action::Error,  /* 6(rParen) */
            Action::Error,  /* 7(comma) */
            Action::Error,  /* 8(number) */
            Action::Error,  /* 9(star) */
            Action::Error,  /* 10(error) */
        ],
        /* STATE 2 */
        [
            Action::Error,             /* 0(Start) */
            Action::Error,             /* 1(Document) */
            Action::Goto(StateID(3)),  /* 2(Items) */
            Action::Goto(StateID(4)),  /* 3(Item) */
            Action::Error,             /* 4(end) */
            Action::Error,             /* 5(lParen) */
            Action::Error,             /* 6(rParen) */
            Action::Error,             /* 7(comma) */
            Action::Shift(StateID(5)), /* 8(number) */
            Action::Error,             /* 9(star) */
            Action::Shift(StateID(6)), /* 10(error) */
        ],
        /* STATE 3 */
        [
            Action::Error,             /* 0(Start) */
            Action::Error,             /* 1(Document) */
            Action::Error,             /* 2(Items) */
            Action::Error,             /* 3(Item) */
            Action::Error,             /* 4(end) */
            Action::Error,             /* 5(lParen) */
            Action::Shift(StateID(7)), /* 6(rParen) */
            Action::Shift(StateID(8)), /* 7(comma) */
            Action::Error,             /* 8(number) */
            Action::Error,             /* 9(star) */
            Action::Error,             /* 10(error) */
        ],
        /* STATE 4 */
        [
            Action::Error,                  /* 0(Start) */
            Action::Error,                  /* 1(Document) */
            Action::Error,                  /* 2(Items) */
            Action::Error,                  /* 3(Item) */
            Action::Error,                  /* 4(end) */
            Action::Error,                  /* 5(lParen) */
            Action::Reduce(ProdID::Items1), /* 6(rParen) */
            Action::Reduce(ProdID::Items1), /* 7(comma) */
            Action::Error,                  /* 8(number) */
            Action::Error,                  /* 9(star) */
            Action::Error,                  /* 10(error) */
        ],
        /* STATE 5 */
        [
            Action::Error,                 /* 0(Start) */
            Action::Error,                 /* 1(Document) */
            Action::Error,                 /* 2(Items) */
            Action::Error,                 /* 3(Item) */
            Action::Error,                 /* 4(end) */
            Action::Error,                 /* 5(lParen) */
            Action::Reduce(ProdID::Item1), /* 6(rParen) */
            Action::Reduce(ProdID::Item1), /* 7(comma) */
            Action::Error,                 /* 8(number) */
            Action::Error,                 /* 9(star) */
            Action::Error,                 /* 10(error) */
        ],
        /* STATE 6 */
        [
            Action::Error,                 /* 0(Start) */
            Action::Error,                 /* 1(Document) */
            Action::Error,                 /* 2(Items) */
            Action::Error,                 /* 3(Item) */
            Action::Error,                 /* 4(end) */
            Action::Error,                 /* 5(lParen) */
            Action::Reduce(ProdID::Item2), /* 6(rParen) */
            Action::Reduce(ProdID::Item2), /* 7(comma) */
            Action::Error,                 /* 8(number) */
            Action::Error,                 /* 9(star) */
            Action::Error,                 /* 10(error) */
        ],
        /* STATE 7 */
        [
            Action::Error,                     /* 0(Start) */
            Action::Error,                     /* 1(Document) */
            Action::Error,                     /* 2(Items) */
            Action::Error,                     /* 3(Item) */
            Action::Reduce(ProdID::Document1), /* 4(end) */
            Action::Error,                     /* 5(lParen) */
            Action::Error,                     /* 6(rParen) */
            Action::Error,                     /* 7(comma) */
            Action::Error,                     /* 8(number) */
            Action::Error,                     /* 9(star) */
            Action::Error,                     /* 10(error) */
        ],
        /* STATE 8 */
        [
            Action::Error,             /* 0(Start) */
            Action::Error,             /* 1(Document) */
            Action::Error,             /* 2(Items) */
            Action::Goto(StateID(9)),  /* 3(Item) */
            Action::Error,             /* 4(end) */
            Action::Error,             /* 5(lParen) */
            Action::Error,             /* 6(rParen) */
            Action::Error,             /* 7(comma) */
            Action::Shift(StateID(5)), /* 8(number) */
            Action::Error,             /* 9(star) */
            Action::Shift(StateID(6)), /* 10(error) */
        ],
        /* STATE 9 */
        [
            Action::Error,                  /* 0(Start) */
            Action::Error,                  /* 1(Document) */
            Action::Error,                  /* 2(Items) */
            Action::Error,                  /* 3(Item) */
            Action::Error,                  /* 4(end) */
            Action::Error,                  /* 5(lParen) */
            Action::Reduce(ProdID::Items2), /* 6(rParen) */
            Action::Reduce(ProdID::Items2), /* 7(comma) */
            Action::Error,                  /* 8(number) */
            Action::Error,                  /* 9(star) */
            Action::Error,                  /* 10(error) */
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
    #[inline]
    fn error_token() -> Option<TokenID> {
        Some(TokenID::Error)
    }
}
