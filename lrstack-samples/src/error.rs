//! # Sample Error Type
//!
//! [`SampleError`] is the single error surface of the sample entry points.
//! It covers the three ways a run can fail before or while the engine sees
//! the input:
//!
//! - the scanner meets text it has no lexeme for,
//! - a lexeme is valid but the grammar being parsed does not declare it,
//! - the engine itself ends the run in error ([`ParseError`]).
//!
//! Engine errors convert with `#[from]`, so `?` works on them directly.
use lrstack::ParseError;
use smartstring::alias::String;
use thiserror::Error;

/// Errors returned by [`evaluate`](crate::evaluate),
/// [`build_ast`](crate::build_ast), [`parse_list`](crate::parse_list) and
/// [`greet`](crate::greet).
///
/// # Examples
/// ```rust
/// # use lrstack::ParseError;
/// # use lrstack_samples::SampleError;
/// let err: SampleError = ParseError::StackOverflow { capacity: 8 }.into();
/// assert!(matches!(err, SampleError::Parse(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// Input text that no lexeme matches.
    #[error("unexpected input {text:?} at offset {offset}")]
    Scan { offset: usize, text: String },

    /// A lexeme the grammar has no terminal for.
    #[error("{0} is not a token of this grammar")]
    UnexpectedToken(&'static str),

    /// The calculator divided by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The input ended and the parser still wanted more.
    #[error("input ended before the parse finished")]
    Incomplete,

    /// The engine ended the run in error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}
