//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! # lrstack-samples
//!
//! Small grammars built on **lrstack**, each a thin instantiation of the same
//! engine with its own tables and semantic action:
//!
//! - [`calc`]: arithmetic over `+ - * /`, driven either by an integer
//!   [`Evaluator`] or by an [`AstBuilder`] over the same tables;
//! - [`hello`]: the two-token greeting grammar over string values;
//! - [`empty_hello`]: a greeting preceded by two empty productions;
//! - [`recovery`]: lists of numbers with an `Item -> error` recovery
//!   production;
//! - [`scanner`]: the `logos` token source the samples share.
//!
//! ## Example
//!
//! ```rust
//! use lrstack_samples::{SampleError, evaluate, parse_list};
//!
//! assert_eq!(evaluate("3 + 4"), Ok(7));
//! assert!(matches!(evaluate("3 + + 4"), Err(SampleError::Parse(_))));
//! assert_eq!(parse_list("(1, *, 3)"), Ok(vec![1, -1, 3]));
//! ```
pub mod calc;
pub mod empty_hello;
pub mod error;
pub mod hello;
pub mod recovery;
pub mod scanner;

pub use calc::ast::{AstBuilder, build_ast};
pub use calc::eval::{Evaluator, evaluate};
pub use empty_hello::greet_after_empties;
pub use error::SampleError;
pub use hello::greet;
pub use recovery::parse_list;
pub use scanner::{Lexeme, Scanner};

use lrstack::{Parser, ParserDriver, ParserStatus, ParserTokenID, SemanticAction};

/// Posts the lexemes of `source` until the run finishes, then end of input
/// if it has not. `token` maps each lexeme onto the grammar's terminals.
///
/// Returns `Ok` once the input has been accepted.
pub(crate) fn feed<D, A, F>(
    parser: &mut Parser<D, A>,
    source: &str,
    mut token: F,
) -> Result<(), SampleError>
where
    D: ParserDriver<A>,
    A: SemanticAction,
    F: FnMut(&A, Lexeme) -> Result<(D::TokenID, A::Value), SampleError>,
{
    for lexeme in Scanner::new(source) {
        let (token_id, value) = token(parser.actions(), lexeme?)?;
        if parser.post(token_id, value) {
            break;
        }
    }
    if !parser.is_done() {
        parser.post(D::TokenID::END, A::Value::default());
    }
    match parser.status() {
        ParserStatus::Accepted(_) => Ok(()),
        ParserStatus::Errored(err) => Err(err.clone().into()),
        ParserStatus::Running => Err(SampleError::Incomplete),
    }
}
