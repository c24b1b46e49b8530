//! Terminal error conditions of a parse run.
//!
//! Syntax errors and stack overflows are reported to the semantic action
//! through its hooks and recorded on the parser as a [`ParseError`]; they
//! never unwind through the engine. Inconsistencies between a table and its
//! semantic action (a downcast that does not match, a missing goto entry)
//! are contract violations and panic instead.
//!
//! # Examples
//!
//! ```rust
//! # use lrstack::ParseError;
//! let err = ParseError::StackOverflow { capacity: 16 };
//! assert_eq!(err.to_string(), "stack overflow: all 16 frames in use");
//!
//! let err = ParseError::Syntax { token: "plus", state: 3 };
//! assert!(err.to_string().contains("unexpected plus"));
//! ```

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No action for the token in the current state, and no recovery
    /// resynchronised the parse.
    #[error("syntax error: unexpected {token} in state {state}")]
    Syntax {
        /// Label of the rejected token.
        token: &'static str,
        /// State on top of the stack when the token was rejected.
        state: usize,
    },

    /// A push found every frame of the fixed-size stack in use.
    #[error("stack overflow: all {capacity} frames in use")]
    StackOverflow {
        /// Capacity the parser was built with.
        capacity: usize,
    },
}
