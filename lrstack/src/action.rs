//! # Semantic Actions
//!
//! The capability interface between the engine and a grammar's semantic
//! code:
//!
//! - [`SemanticAction`] names the generic value type kept on the stack and
//!   receives the two engine notifications (syntax error, stack overflow);
//! - [`Cast`] is the generic value bridge: narrowing a stack value to the
//!   concrete type a production argument expects, and widening a result back;
//! - [`ParserDriver`] is the per-grammar glue the table generator emits. It
//!   maps each production to a call into the grammar's own action trait,
//!   fetching arguments through [`Args`].
//!
//! A reduce by a production of arity `K` therefore runs as: downcast each of
//! the `K` arguments, call the production method, upcast the result, then the
//! executor pops `K` frames and follows the goto entry.

use crate::stack::{StackFrame, ValueStack};
use crate::table::ParserData;
use std::fmt::Debug;

/// Hooks and value type shared by every grammar's semantic action.
pub trait SemanticAction {
    /// Generic value carried by every stack frame. `Default` is used for the
    /// initial frame and for the value of a posted `error` token.
    type Value: Clone + Default + Debug;

    /// Called once for each token rejected by the automaton.
    fn syntax_error(&mut self) {}

    /// Called when a push finds the stack full.
    fn stack_overflow(&mut self) {}
}

/// Narrowing and widening between the generic value and a concrete type.
///
/// The table guarantees that every argument it hands over has the type the
/// production expects, so `downcast` must not fail for a consistent
/// table/action pair. Implementations that cannot prove this statically
/// report the mismatch with [`contract_violation`].
pub trait Cast<T>: SemanticAction {
    fn downcast(&self, value: &Self::Value) -> T;
    fn upcast(&self, value: T) -> Self::Value;
}

/// Reports a downcast whose tag does not match the expected type.
#[cold]
#[track_caller]
pub fn contract_violation(expected: &str, found: &dyn Debug) -> ! {
    panic!("downcast contract violated: expected {expected}, found {found:?}")
}

/// Right-hand side arguments of the production being reduced.
///
/// Argument `0` is the leftmost symbol. Values are borrowed from the stack:
/// the frames they live in may belong to the committed region and must stay
/// intact until the step is committed.
pub struct Args<'a, S, V> {
    stack: &'a ValueStack<StackFrame<S, V>>,
    base: usize,
}

impl<'a, S, V> Args<'a, S, V> {
    pub(crate) fn new(stack: &'a ValueStack<StackFrame<S, V>>, base: usize) -> Self {
        Self { stack, base }
    }

    /// Arity of the production.
    #[inline]
    pub fn len(&self) -> usize {
        self.base
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base == 0
    }

    /// Returns argument `index`.
    ///
    /// # Panics
    /// Panics if `index` is not below the arity, or the stack is shallower
    /// than the production; both mean the table is inconsistent.
    pub fn get(&self, index: usize) -> &'a V {
        match self.stack.get_arg(self.base, index) {
            Some(frame) => &frame.value,
            None => panic!(
                "argument {index} out of range for a production of arity {} on a stack of depth {}",
                self.base,
                self.stack.len()
            ),
        }
    }

    /// Returns argument `index` narrowed through `actions`.
    #[inline]
    pub fn cast<T, A>(&self, actions: &A, index: usize) -> T
    where
        A: Cast<T> + SemanticAction<Value = V>,
    {
        actions.downcast(self.get(index))
    }
}

/// Binds a grammar's productions to a semantic action.
///
/// Implemented by the table type for every action type the grammar supports.
pub trait ParserDriver<A: SemanticAction>: ParserData {
    /// Runs the semantic action of `prod_id` and returns its upcast result.
    fn reduce(
        actions: &mut A,
        prod_id: Self::ProdID,
        args: Args<'_, Self::StateID, A::Value>,
    ) -> A::Value;
}
