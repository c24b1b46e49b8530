//! # Automaton Executor
//!
//! [`Parser`] drives a grammar's action/goto table over tokens offered one
//! at a time through [`Parser::post`]. Each call opens a transaction on the
//! [`ValueStack`]: zero or more reductions followed by at most one shift are
//! applied to the temporary region and committed only if the token was
//! consumed (or the input accepted). A rejected token leaves the committed
//! stack exactly as it was before the call.
//!
//! A run ends in one of two terminal states, [`ParserStatus::Accepted`] or
//! [`ParserStatus::Errored`]; `post` returns `true` once either is reached.
//! Grammars that declare an `error` terminal get a chance to resynchronise
//! before a rejection becomes terminal (see [`Parser::post`]).

use crate::action::{Args, Cast, ParserDriver, SemanticAction};
use crate::error::ParseError;
use crate::stack::{StackFrame, ValueStack};
use crate::table::{ParserAction, ParserProdID, ParserTokenID};
use smartstring::alias::String;
use std::marker::PhantomData;

/// Stack capacity used by [`Parser::new`].
pub const DEFAULT_STACK_SIZE: usize = 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    pub tokens: usize,
    pub shifts: usize,
    pub reductions: usize,
    pub syntax_errors: usize,
    pub recoveries: usize,
    pub discarded: usize,
}

/// Progress of the current run.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserStatus<V> {
    /// Ready for the next token.
    Running,
    /// End of input was accepted; holds the value of the start symbol.
    Accepted(V),
    /// The run failed and only [`Parser::reset`] makes it usable again.
    Errored(ParseError),
}

/// Outcome of offering one token to the automaton.
enum Step<V> {
    Shifted,
    Accepted,
    Rejected(V),
    Overflow,
}

/// Table-driven shift-reduce parser over a fixed-capacity value stack.
///
/// `D` supplies the automaton and the production dispatch, `A` the semantic
/// action whose value type is stored on the stack. The parser owns `A`; use
/// [`Parser::actions`] or [`Parser::into_actions`] to get at it.
pub struct Parser<D, A>
where
    D: ParserDriver<A>,
    A: SemanticAction,
{
    actions: A,
    stack: ValueStack<StackFrame<D::StateID, A::Value>>,
    status: ParserStatus<A::Value>,
    last_error: Option<ParseError>,
    stats: ParserStats,
    _data: PhantomData<fn() -> D>,
}

impl<D, A> Parser<D, A>
where
    D: ParserDriver<A>,
    A: SemanticAction,
{
    /// Creates a parser with a stack of [`DEFAULT_STACK_SIZE`] frames.
    pub fn new(actions: A) -> Self {
        Self::with_capacity(actions, DEFAULT_STACK_SIZE)
    }

    /// Creates a parser whose stack holds at most `capacity` frames,
    /// including the initial one.
    pub fn with_capacity(actions: A, capacity: usize) -> Self {
        let mut parser = Self {
            actions,
            stack: ValueStack::with_capacity(capacity),
            status: ParserStatus::Running,
            last_error: None,
            stats: ParserStats::default(),
            _data: PhantomData,
        };
        parser.reset();
        parser
    }

    /// Discards the current run and starts over from the initial state.
    pub fn reset(&mut self) {
        self.status = ParserStatus::Running;
        self.last_error = None;
        self.stats = ParserStats::default();
        self.stack.clear();
        if self.push(D::start_state(), A::Value::default()) {
            self.stack.commit_tmp();
        }
    }

    /// Offers one token and its value to the automaton.
    ///
    /// Reductions enabled by the token run first, then the token is shifted
    /// or the input accepted. Returns `true` when the run has reached a
    /// terminal state and no more tokens should be posted.
    ///
    /// When the token is rejected the `syntax_error` hook fires and the
    /// step is rolled back. If the grammar declares an `error` terminal,
    /// frames are then popped until a state with an action for it is on top,
    /// `error` is posted in its place, and the rejected token is offered once
    /// more; if it is rejected again it is dropped. The run becomes
    /// [`ParserStatus::Errored`] only if no frame accepts `error`, or an
    /// end-of-input token cannot be placed even after recovery.
    ///
    /// Posting to a finished run changes nothing and returns `true`.
    pub fn post(&mut self, token_id: D::TokenID, value: A::Value) -> bool {
        if self.is_done() {
            log::debug!("Ignoring {} after the run has finished", token_id.label());
            return true;
        }
        self.stats.tokens += 1;
        self.stack.reset_tmp();
        if log::log_enabled!(log::Level::Trace) {
            self.dump_state(token_id);
        }
        match self.drive(token_id, value) {
            Step::Shifted | Step::Accepted => self.stack.commit_tmp(),
            Step::Overflow => self.stack.reset_tmp(),
            Step::Rejected(value) => self.reject(token_id, value),
        }
        self.is_done()
    }

    /// Returns the accepted value, or `None` if the run has not been
    /// accepted (including when it ended in error).
    pub fn accept(&self) -> Option<A::Value> {
        match &self.status {
            ParserStatus::Accepted(value) => Some(value.clone()),
            _ => None,
        }
    }

    /// Returns the accepted value narrowed to `T`.
    pub fn accept_as<T>(&self) -> Option<T>
    where
        A: Cast<T>,
    {
        match &self.status {
            ParserStatus::Accepted(value) => Some(self.actions.downcast(value)),
            _ => None,
        }
    }

    /// `true` once the run has failed.
    #[inline]
    pub fn error(&self) -> bool {
        matches!(self.status, ParserStatus::Errored(_))
    }

    /// `true` once end of input has been accepted.
    #[inline]
    pub fn accepted(&self) -> bool {
        matches!(self.status, ParserStatus::Accepted(_))
    }

    /// `true` once the run is accepted or errored.
    #[inline]
    pub fn is_done(&self) -> bool {
        !matches!(self.status, ParserStatus::Running)
    }

    pub fn status(&self) -> &ParserStatus<A::Value> {
        &self.status
    }

    /// The most recent error, including syntax errors that were recovered.
    pub fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }

    /// Number of frames on the committed stack, the initial frame included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// Frames of the committed stack, bottom first.
    pub fn frames(&self) -> impl Iterator<Item = &StackFrame<D::StateID, A::Value>> {
        self.stack.iter()
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut A {
        &mut self.actions
    }

    pub fn into_actions(self) -> A {
        self.actions
    }

    /// Logs the logical stack followed by the incoming token.
    pub fn dump_state(&self, incoming: D::TokenID) {
        let mut output = String::new();
        for frame in self.stack.iter() {
            output.push_str(&format!("<{:?}> {:?}  ", frame.state, frame.value));
        }
        log::trace!("{}<-  {}", output, incoming.label());
    }

    /// Runs the action handlers of successive top states until the token is
    /// shifted, the input accepted, the token rejected or the stack full.
    fn drive(&mut self, token_id: D::TokenID, value: A::Value) -> Step<A::Value> {
        loop {
            let state = self.top_state();
            match D::lookup(state, token_id) {
                ParserAction::Shift(new_state) => {
                    log::trace!("Shift {} -> {:?}", token_id.label(), new_state);
                    if !self.push(new_state, value) {
                        return Step::Overflow;
                    }
                    self.stats.shifts += 1;
                    return Step::Shifted;
                }

                ParserAction::Reduce(prod_id) => {
                    if !self.reduce(prod_id) {
                        return Step::Overflow;
                    }
                }

                ParserAction::Accept => {
                    log::trace!("Accept");
                    let value = match self.stack.get_arg(1, 0) {
                        Some(frame) => frame.value.clone(),
                        None => panic!("accept with an empty stack"),
                    };
                    self.status = ParserStatus::Accepted(value);
                    return Step::Accepted;
                }

                ParserAction::Error => return Step::Rejected(value),

                ParserAction::Goto(_) => panic!(
                    "goto entry for terminal {} in state {:?}",
                    token_id.label(),
                    state
                ),
            }
        }
    }

    /// Reduces by `prod_id` and pushes the result through the goto handler
    /// of the uncovered state. Returns `false` if that push overflows.
    fn reduce(&mut self, prod_id: D::ProdID) -> bool {
        let arity = prod_id.size();
        let lhs = prod_id.lhs_token_id();
        log::trace!(
            "Reduce {:?} ({} -> {} symbols)",
            prod_id,
            lhs.label(),
            arity
        );

        let value = <D as ParserDriver<A>>::reduce(
            &mut self.actions,
            prod_id,
            Args::new(&self.stack, arity),
        );
        self.stack.pop(arity);
        self.stats.reductions += 1;

        let state = self.top_state();
        let ParserAction::Goto(new_state) = D::lookup(state, lhs) else {
            panic!("no goto on {} in state {:?}", lhs.label(), state);
        };
        log::trace!("Goto {:?}", new_state);
        self.push(new_state, value)
    }

    /// Pushes a frame; on overflow notifies the action and ends the run.
    fn push(&mut self, state: D::StateID, value: A::Value) -> bool {
        if self.stack.push(StackFrame { state, value }) {
            return true;
        }
        let capacity = self.stack.capacity();
        log::warn!("Stack overflow: all {} frames in use", capacity);
        self.actions.stack_overflow();
        let err = ParseError::StackOverflow { capacity };
        self.last_error = Some(err.clone());
        self.status = ParserStatus::Errored(err);
        false
    }

    fn top_state(&self) -> D::StateID {
        match self.stack.top() {
            Some(frame) => frame.state,
            None => panic!("value stack is empty"),
        }
    }

    fn syntax_error(&self, token_id: D::TokenID) -> ParseError {
        ParseError::Syntax {
            token: token_id.label(),
            state: self.top_state().into(),
        }
    }

    fn reject(&mut self, token_id: D::TokenID, value: A::Value) {
        self.stack.reset_tmp();
        let err = self.syntax_error(token_id);
        log::debug!("{}", err);
        self.stats.syntax_errors += 1;
        self.actions.syntax_error();
        self.last_error = Some(err.clone());

        let recovered = match D::error_token() {
            Some(error_token) => self.recover(error_token),
            None => false,
        };
        if recovered {
            self.retry(token_id, value);
        } else if !self.is_done() {
            self.status = ParserStatus::Errored(err);
        }
    }

    /// Unwinds to the nearest state with an action for `error_token` and
    /// posts it there. On failure the committed stack is left untouched.
    fn recover(&mut self, error_token: D::TokenID) -> bool {
        loop {
            let Some(state) = self.stack.top().map(|frame| frame.state) else {
                log::debug!("No state accepts {}", error_token.label());
                self.stack.reset_tmp();
                return false;
            };
            if !matches!(D::lookup(state, error_token), ParserAction::Error) {
                log::debug!("Recovering in state {:?}", state);
                break;
            }
            self.stack.pop(1);
        }

        match self.drive(error_token, A::Value::default()) {
            Step::Shifted | Step::Accepted => {
                self.stack.commit_tmp();
                self.stats.recoveries += 1;
                true
            }
            Step::Overflow | Step::Rejected(_) => {
                self.stack.reset_tmp();
                false
            }
        }
    }

    /// Offers a rejected token again after recovery; drops it if the
    /// resynchronised state rejects it too.
    fn retry(&mut self, token_id: D::TokenID, value: A::Value) {
        if self.is_done() {
            return;
        }
        match self.drive(token_id, value) {
            Step::Shifted | Step::Accepted => self.stack.commit_tmp(),
            Step::Overflow => self.stack.reset_tmp(),
            Step::Rejected(_) => {
                self.stack.reset_tmp();
                if token_id == D::TokenID::END {
                    let err = self.syntax_error(token_id);
                    log::debug!("Giving up: {}", err);
                    self.last_error = Some(err.clone());
                    self.status = ParserStatus::Errored(err);
                } else {
                    log::debug!("Discarding {}", token_id.label());
                    self.stats.discarded += 1;
                }
            }
        }
    }
}
