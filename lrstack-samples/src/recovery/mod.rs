//! # List Grammar with Error Recovery
//!
//! Parenthesised, comma-separated lists of numbers:
//!
//! ```text
//! Document -> ( Items )
//! Items    -> Item | Items , Item
//! Item     -> number | error
//! ```
//!
//! The grammar declares an `error` terminal, so a malformed item does not end
//! the run. When a token is rejected inside a list the parser unwinds to the
//! state expecting an `Item`, shifts `error` there and drops the offending
//! tokens until one fits again. The `Item -> error` production then yields
//! `-1` in place of the bad item:
//!
//! ```rust
//! assert_eq!(lrstack_samples::parse_list("(1, *, 3)").unwrap(), vec![1, -1, 3]);
//! ```
//!
//! `*` is a terminal no list state accepts; it stands in for arbitrary junk.

pub mod parser_data;

use crate::{Lexeme, SampleError, feed};
use lrstack::{Args, Cast, Parser, ParserDriver, SemanticAction, contract_violation};
use parser_data::{ParData, ProdID, StateID, TokenID};

/// Value returned for an item that had to be recovered.
pub const ERROR_ITEM: i64 = -1;

/// Production callbacks of the list grammar.
pub trait ListAction: SemanticAction + Cast<i64> + Cast<Vec<i64>> {
    /// `Document -> ( Items )`
    fn pack_list(&mut self, items: Vec<i64>) -> Vec<i64>;
    /// `Items -> Item`
    fn make_list(&mut self, item: i64) -> Vec<i64>;
    /// `Items -> Items , Item`
    fn add_to_list(&mut self, items: Vec<i64>, item: i64) -> Vec<i64>;
    /// `Item -> number`
    fn make_item(&mut self, number: i64) -> i64;
    /// `Item -> error`
    fn item_error(&mut self) -> i64;
}

impl<A: ListAction> ParserDriver<A> for ParData {
    fn reduce(actions: &mut A, prod_id: ProdID, args: Args<'_, StateID, A::Value>) -> A::Value {
        match prod_id {
            ProdID::Start => {
                // Start -> Document
                // Accept - does not get reduced
                unreachable!()
            }
            ProdID::Document1 => {
                // Document -> ( Items )
                let items = args.cast::<Vec<i64>, A>(actions, 1);
                let list = actions.pack_list(items);
                <A as Cast<Vec<i64>>>::upcast(actions, list)
            }
            ProdID::Items1 => {
                // Items -> Item
                let item = args.cast::<i64, A>(actions, 0);
                let list = actions.make_list(item);
                <A as Cast<Vec<i64>>>::upcast(actions, list)
            }
            ProdID::Items2 => {
                // Items -> Items , Item
                let items = args.cast::<Vec<i64>, A>(actions, 0);
                let item = args.cast::<i64, A>(actions, 2);
                let list = actions.add_to_list(items, item);
                <A as Cast<Vec<i64>>>::upcast(actions, list)
            }
            ProdID::Item1 => {
                // Item -> number
                let number = args.cast::<i64, A>(actions, 0);
                let item = actions.make_item(number);
                <A as Cast<i64>>::upcast(actions, item)
            }
            ProdID::Item2 => {
                // Item -> error
                let item = actions.item_error();
                <A as Cast<i64>>::upcast(actions, item)
            }
        }
    }
}

/// Stack value of the [`ListBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListValue {
    /// Value of punctuation, of `error` and of the initial frame.
    #[default]
    None,
    Number(i64),
    List(Vec<i64>),
}

/// Collects the numbers of a list, with [`ERROR_ITEM`] for recovered items.
#[derive(Debug, Default)]
pub struct ListBuilder {
    pub syntax_errors: usize,
    pub stack_overflows: usize,
    /// Number of `Item -> error` reductions.
    pub errors_caught: usize,
}

impl SemanticAction for ListBuilder {
    type Value = ListValue;

    fn syntax_error(&mut self) {
        self.syntax_errors += 1;
    }

    fn stack_overflow(&mut self) {
        self.stack_overflows += 1;
    }
}

impl Cast<i64> for ListBuilder {
    fn downcast(&self, value: &ListValue) -> i64 {
        match value {
            ListValue::Number(n) => *n,
            other => contract_violation("Number", other),
        }
    }
    fn upcast(&self, value: i64) -> ListValue {
        ListValue::Number(value)
    }
}

impl Cast<Vec<i64>> for ListBuilder {
    fn downcast(&self, value: &ListValue) -> Vec<i64> {
        match value {
            ListValue::List(items) => items.clone(),
            other => contract_violation("List", other),
        }
    }
    fn upcast(&self, value: Vec<i64>) -> ListValue {
        ListValue::List(value)
    }
}

impl ListAction for ListBuilder {
    fn pack_list(&mut self, items: Vec<i64>) -> Vec<i64> {
        log::debug!("list: {:?}", items);
        items
    }

    fn make_list(&mut self, item: i64) -> Vec<i64> {
        vec![item]
    }

    fn add_to_list(&mut self, mut items: Vec<i64>, item: i64) -> Vec<i64> {
        items.push(item);
        items
    }

    fn make_item(&mut self, number: i64) -> i64 {
        number
    }

    fn item_error(&mut self) -> i64 {
        log::debug!("catching error");
        self.errors_caught += 1;
        ERROR_ITEM
    }
}

/// List parser over the action `A`.
pub type ListParser<A> = Parser<ParData, A>;

/// Maps a scanned lexeme to a list token.
pub fn token<A>(actions: &A, lexeme: Lexeme) -> Result<(TokenID, A::Value), SampleError>
where
    A: SemanticAction + Cast<i64>,
{
    let token_id = match lexeme {
        Lexeme::LParen => TokenID::LParen,
        Lexeme::RParen => TokenID::RParen,
        Lexeme::Comma => TokenID::Comma,
        Lexeme::Star => TokenID::Star,
        Lexeme::Number(n) => return Ok((TokenID::Number, actions.upcast(n))),
        other => return Err(SampleError::UnexpectedToken(other.label())),
    };
    Ok((token_id, A::Value::default()))
}

/// Parses a list, recovering from malformed items.
pub fn parse_list(source: &str) -> Result<Vec<i64>, SampleError> {
    let mut parser = ListParser::new(ListBuilder::default());
    feed(&mut parser, source, token)?;
    parser
        .accept_as::<Vec<i64>>()
        .ok_or(SampleError::Incomplete)
}
