//! Greeting grammar with two empty productions in front of `hello`:
//! `Greeting -> Empty0 Empty1 hello`, `Empty0 ->`, `Empty1 ->`.
//!
//! Both empty nonterminals are reduced on the lookahead `hello`, before it is
//! shifted, so a single post grows the stack by three frames.

pub mod parser_data;

use crate::SampleError;
use lrstack::{Args, Cast, Parser, ParserDriver, SemanticAction};
use parser_data::{ParData, ProdID, StateID, TokenID};

/// Production callbacks of the empty-production grammar.
pub trait EmptyHelloAction: SemanticAction + Cast<i64> {
    /// `Empty0 ->`
    fn empty0(&mut self) -> i64;
    /// `Empty1 ->`
    fn empty1(&mut self) -> i64;
    /// `Greeting -> Empty0 Empty1 hello`
    fn greeting(&mut self, empty0: i64, empty1: i64, hello: i64) -> i64;
}

impl<A: EmptyHelloAction> ParserDriver<A> for ParData {
    fn reduce(actions: &mut A, prod_id: ProdID, args: Args<'_, StateID, A::Value>) -> A::Value {
        match prod_id {
            ProdID::Start => {
                // Start -> Greeting
                // Accept - does not get reduced
                unreachable!()
            }
            ProdID::Greeting1 => {
                // Greeting -> Empty0 Empty1 hello
                let empty0 = args.cast::<i64, A>(actions, 0);
                let empty1 = args.cast::<i64, A>(actions, 1);
                let hello = args.cast::<i64, A>(actions, 2);
                let greeting = actions.greeting(empty0, empty1, hello);
                actions.upcast(greeting)
            }
            ProdID::Empty0 => {
                // Empty0 ->
                let value = actions.empty0();
                actions.upcast(value)
            }
            ProdID::Empty1 => {
                // Empty1 ->
                let value = actions.empty1();
                actions.upcast(value)
            }
        }
    }
}

pub type EmptyHelloParser<A> = Parser<ParData, A>;

/// Records the productions it runs, in order.
///
/// `Empty0` yields 1 and `Empty1` yields 2; the greeting weighs them as
/// hundreds and tens in front of the `hello` value.
#[derive(Debug, Default)]
pub struct Tally {
    pub calls: Vec<&'static str>,
    pub syntax_errors: usize,
    pub stack_overflows: usize,
}

impl SemanticAction for Tally {
    type Value = i64;

    fn syntax_error(&mut self) {
        self.syntax_errors += 1;
    }

    fn stack_overflow(&mut self) {
        self.stack_overflows += 1;
    }
}

impl Cast<i64> for Tally {
    fn downcast(&self, value: &i64) -> i64 {
        *value
    }
    fn upcast(&self, value: i64) -> i64 {
        value
    }
}

impl EmptyHelloAction for Tally {
    fn empty0(&mut self) -> i64 {
        self.calls.push("empty0");
        1
    }

    fn empty1(&mut self) -> i64 {
        self.calls.push("empty1");
        2
    }

    fn greeting(&mut self, empty0: i64, empty1: i64, hello: i64) -> i64 {
        self.calls.push("greeting");
        empty0 * 100 + empty1 * 10 + hello
    }
}

/// Posts `hello` and end of input, and returns the greeting value.
///
/// # Examples
/// ```rust
/// assert_eq!(lrstack_samples::greet_after_empties(5), Ok(125));
/// ```
pub fn greet_after_empties(hello: i64) -> Result<i64, SampleError> {
    let mut parser = EmptyHelloParser::new(Tally::default());
    parser.post(TokenID::Hello, hello);
    parser.post(TokenID::End, 0);
    if let Some(err) = parser.last_error() {
        return Err(err.clone().into());
    }
    parser.accept().ok_or(SampleError::Incomplete)
}
