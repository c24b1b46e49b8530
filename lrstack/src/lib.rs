//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Runtime for table-driven shift-reduce parsers.
//!
//! `lrstack` executes an LALR-style automaton produced by an external
//! generator against a grammar-specific semantic action. The pieces are:
//!
//! - [`ValueStack`]: fixed-capacity stack with a committed and a temporary
//!   region, so that a reduce step either commits as a whole or leaves the
//!   stack untouched;
//! - [`ParserData`] and friends: the shape of the generated tables;
//! - [`SemanticAction`], [`Cast`] and [`ParserDriver`]: the bridge between
//!   the engine's generic value type and typed production callbacks;
//! - [`Parser`]: the executor that accepts one token per [`Parser::post`].
//!
//! The engine never grows its stack. Running out of frames is reported as
//! [`ParseError::StackOverflow`], just like a syntax error is reported as
//! [`ParseError::Syntax`]: through the action's hooks and the parser status.

mod action;
mod error;
mod parser;
mod stack;
mod table;

#[cfg(test)]
mod test_parser_data;

pub use crate::action::{Args, Cast, ParserDriver, SemanticAction, contract_violation};
pub use crate::error::ParseError;
pub use crate::parser::{DEFAULT_STACK_SIZE, Parser, ParserStats, ParserStatus};
pub use crate::stack::{StackFrame, ValueStack};
pub use crate::table::{ParserAction, ParserData, ParserProdID, ParserStateID, ParserTokenID};
