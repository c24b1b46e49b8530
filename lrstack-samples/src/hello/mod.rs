//! Hello-world grammar: `Greeting -> hello world`, over string values.

pub mod parser_data;

use crate::SampleError;
use lrstack::{Args, Cast, Parser, ParserDriver, SemanticAction};
use parser_data::{ParData, ProdID, StateID, TokenID};
use smartstring::alias::String;

/// Production callbacks of the hello-world grammar.
pub trait HelloAction: SemanticAction + Cast<String> {
    /// `Greeting -> hello world`
    fn greet(&mut self, hello: String, world: String) -> String;
}

impl<A: HelloAction> ParserDriver<A> for ParData {
    fn reduce(actions: &mut A, prod_id: ProdID, args: Args<'_, StateID, A::Value>) -> A::Value {
        match prod_id {
            ProdID::Start => {
                // Start -> Greeting
                // Accept - does not get reduced
                unreachable!()
            }
            ProdID::Greeting1 => {
                // Greeting -> hello world
                let hello = args.cast::<String, A>(actions, 0);
                let world = args.cast::<String, A>(actions, 1);
                let greeting = actions.greet(hello, world);
                actions.upcast(greeting)
            }
        }
    }
}

/// Joins the two words of the greeting.
#[derive(Debug, Default)]
pub struct Greeter;

impl SemanticAction for Greeter {
    type Value = String;
}

impl Cast<String> for Greeter {
    fn downcast(&self, value: &String) -> String {
        value.clone()
    }
    fn upcast(&self, value: String) -> String {
        value
    }
}

impl HelloAction for Greeter {
    fn greet(&mut self, hello: String, world: String) -> String {
        let mut greeting = hello;
        greeting.push_str(&world);
        log::debug!("{}", greeting);
        greeting
    }
}

/// Posts `hello`, `world` and end of input, and returns the greeting.
///
/// # Examples
/// ```rust
/// let greeting = lrstack_samples::greet("Guten Tag, ", "Welt").unwrap();
/// assert_eq!(greeting.as_str(), "Guten Tag, Welt");
/// ```
pub fn greet(hello: &str, world: &str) -> Result<String, SampleError> {
    let mut parser = Parser::<ParData, _>::new(Greeter);
    parser.post(TokenID::Hello, hello.into());
    parser.post(TokenID::World, world.into());
    parser.post(TokenID::End, String::new());
    if let Some(err) = parser.last_error() {
        return Err(err.clone().into());
    }
    parser.accept_as::<String>().ok_or(SampleError::Incomplete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrstack::ParseError;

    #[test]
    fn greeting_is_the_concatenation() {
        assert_eq!(greet("Hello, ", "World").unwrap().as_str(), "Hello, World");
    }

    #[test]
    fn world_before_hello_is_rejected() {
        let mut parser = Parser::<ParData, _>::new(Greeter);
        assert!(parser.post(TokenID::World, "Welt".into()));
        assert_eq!(
            parser.last_error(),
            Some(&ParseError::Syntax {
                token: "world",
                state: 0
            })
        );
    }

    #[test]
    fn missing_world_is_rejected_at_end() {
        let mut parser = Parser::<ParData, _>::new(Greeter);
        assert!(!parser.post(TokenID::Hello, "Hi".into()));
        assert!(parser.post(TokenID::End, String::new()));
        assert!(parser.error());
        assert_eq!(parser.accept(), None);
    }
}
