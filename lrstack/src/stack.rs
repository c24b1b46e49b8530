//! # Value Stack
//!
//! A fixed-capacity stack whose slot buffer is allocated once and split into
//! two regions:
//!
//! - the **committed** region `[0, top)` at the front, holding the durable
//!   parse stack, and
//! - the **temporary** region at the far end of the buffer, growing downward
//!   from the last slot, holding frames pushed while the current token is
//!   being processed.
//!
//! `gap` marks where the committed region ends once the pending temporaries
//! are committed. Popping first cancels temporaries and then lowers `gap`
//! without touching committed slots, so an aborted step is undone by
//! [`ValueStack::reset_tmp`] and a completed one is finalized by
//! [`ValueStack::commit_tmp`], both in time proportional to the number of
//! frames the step touched.
//!
//! Invariants, outside of a method call:
//!
//! - `gap <= top` and `top + tmp <= capacity`;
//! - slots `[0, top)` and the `tmp` last slots are occupied, all others are
//!   empty;
//! - slots `[gap, top)` are logically popped and never read until a
//!   `reset_tmp` makes them visible again.
//!
//! ## Example
//! ```rust
//! # use lrstack::ValueStack;
//! let mut stack = ValueStack::with_capacity(4);
//! assert!(stack.push(1));
//! stack.commit_tmp();
//!
//! assert!(stack.push(2));
//! stack.pop(2);
//! assert!(stack.is_empty());
//!
//! // abandon the step: the committed frame is back
//! stack.reset_tmp();
//! assert_eq!(stack.top(), Some(&1));
//! ```

use std::fmt;

/// One entry of the parse stack: the automaton state the entry leads to and
/// the semantic value carried with it.
///
/// The state doubles as the handle to the per-state behaviour: the action
/// handler is `lookup(state, terminal)` and the goto handler is
/// `lookup(state, nonterminal)` in the grammar's table.
#[derive(Debug, Clone, PartialEq)]
pub struct StackFrame<S, V> {
    /// State entered when this frame was pushed.
    pub state: S,
    /// Value carried by the frame (a token's value or a reduction result).
    pub value: V,
}

/// A fixed-capacity, two-region transactional stack.
pub struct ValueStack<T> {
    slots: Box<[Option<T>]>,
    top: usize,
    gap: usize,
    tmp: usize,
}

impl<T> ValueStack<T> {
    /// Creates an empty stack able to hold `capacity` frames.
    ///
    /// This is the only allocation the stack ever performs.
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = std::iter::repeat_with(|| None).take(capacity).collect();
        Self {
            slots,
            top: 0,
            gap: 0,
            tmp: 0,
        }
    }

    /// Maximum number of frames, committed and temporary combined.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Logical depth: live committed frames plus pending temporaries.
    #[inline]
    pub fn len(&self) -> usize {
        self.gap + self.tmp
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of committed frames, including those popped by the current
    /// transaction.
    #[inline]
    pub fn committed_len(&self) -> usize {
        self.top
    }

    /// Number of frames pushed since the last commit or reset.
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.tmp
    }

    /// Pushes `value` into the next free temporary slot.
    ///
    /// Returns `false`, dropping `value`, when the committed and temporary
    /// regions together already fill the buffer.
    pub fn push(&mut self, value: T) -> bool {
        let capacity = self.capacity();
        if capacity <= self.top + self.tmp {
            return false;
        }
        let slot = capacity - 1 - self.tmp;
        debug_assert!(self.slots[slot].is_none());
        self.slots[slot] = Some(value);
        self.tmp += 1;
        true
    }

    /// Removes the `n` topmost logical entries.
    ///
    /// Pending temporaries are dropped first; the rest of the request lowers
    /// `gap`, leaving the committed frames in place until the transaction is
    /// committed.
    ///
    /// # Panics
    /// Panics if `n` exceeds the logical depth.
    pub fn pop(&mut self, n: usize) {
        assert!(
            n <= self.len(),
            "pop({n}) on a stack of depth {}",
            self.len()
        );
        let m = n.min(self.tmp);
        let newest = self.capacity() - self.tmp;
        for slot in &mut self.slots[newest..newest + m] {
            *slot = None;
        }
        self.tmp -= m;
        self.gap -= n - m;
    }

    /// Returns the logically topmost frame: the newest temporary if any,
    /// otherwise the last live committed frame.
    pub fn top(&self) -> Option<&T> {
        if self.tmp > 0 {
            self.slots[self.capacity() - self.tmp].as_ref()
        } else if self.gap > 0 {
            self.slots[self.gap - 1].as_ref()
        } else {
            None
        }
    }

    /// Returns argument `index` of a production whose `base` right-hand side
    /// frames are on top of the stack (`index` 0 is the deepest of them).
    ///
    /// Resolves into whichever region the frame currently lives in. Returns
    /// `None` if `index >= base` or the stack holds fewer than `base` frames.
    pub fn get_arg(&self, base: usize, index: usize) -> Option<&T> {
        if index >= base || base > self.len() {
            return None;
        }
        let depth = base - index;
        let slot = if depth <= self.tmp {
            self.capacity() - 1 - (self.tmp - depth)
        } else {
            self.gap - (depth - self.tmp)
        };
        self.slots[slot].as_ref()
    }

    /// Drops every temporary frame, newest first, and makes the frames popped
    /// since the last commit live again.
    pub fn reset_tmp(&mut self) {
        let capacity = self.capacity();
        for slot in &mut self.slots[capacity - self.tmp..] {
            *slot = None;
        }
        self.tmp = 0;
        self.gap = self.top;
    }

    /// Finalizes the current transaction.
    ///
    /// Every temporary frame is moved to its permanent slot right above
    /// `gap`, either replacing a committed frame popped by this transaction
    /// or filling a fresh slot. Popped frames that were not replaced are then
    /// dropped, and `top = gap = gap + tmp`.
    pub fn commit_tmp(&mut self) {
        let capacity = self.capacity();
        let (gap, tmp, top) = (self.gap, self.tmp, self.top);

        // Temporaries are stored newest-first. In push order every
        // destination is at or below its source, so moving them down oldest
        // first never clobbers one still waiting to move.
        self.slots[capacity - tmp..].reverse();
        for i in 0..tmp {
            let src = capacity - tmp + i;
            let dst = gap + i;
            if src != dst {
                let frame = self.slots[src].take();
                self.slots[dst] = frame;
            }
        }

        if gap + tmp < top {
            for slot in self.slots[gap + tmp..top].iter_mut().rev() {
                *slot = None;
            }
        }

        self.top = gap + tmp;
        self.gap = self.top;
        self.tmp = 0;
    }

    /// Drops every frame in both regions and resets all counters.
    pub fn clear(&mut self) {
        self.reset_tmp();
        for slot in self.slots[..self.top].iter_mut().rev() {
            *slot = None;
        }
        self.top = 0;
        self.gap = 0;
        self.tmp = 0;
    }

    /// Iterates over the logical stack from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let capacity = self.capacity();
        self.slots[..self.gap]
            .iter()
            .chain(self.slots[capacity - self.tmp..].iter().rev())
            .filter_map(Option::as_ref)
    }
}

impl<T> Drop for ValueStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueStack")
            .field("capacity", &self.capacity())
            .field("top", &self.top)
            .field("gap", &self.gap)
            .field("tmp", &self.tmp)
            .field("frames", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn frames<T: Clone>(stack: &ValueStack<T>) -> Vec<T> {
        stack.iter().cloned().collect()
    }

    /// Counts live instances through a shared counter.
    struct Tracked(Rc<Cell<isize>>);

    impl Tracked {
        fn new(live: &Rc<Cell<isize>>) -> Self {
            live.set(live.get() + 1);
            Self(live.clone())
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn new_stack_is_empty() {
        let stack = ValueStack::<u32>::with_capacity(8);
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), 8);
        assert_eq!(stack.top(), None);
        assert_eq!(stack.get_arg(1, 0), None);
    }

    #[test]
    fn push_goes_to_temporary_region_until_commit() {
        let mut stack = ValueStack::with_capacity(8);
        assert!(stack.push(1));
        assert!(stack.push(2));
        assert_eq!(stack.pending_len(), 2);
        assert_eq!(stack.committed_len(), 0);
        assert_eq!(stack.top(), Some(&2));

        stack.commit_tmp();
        assert_eq!(stack.pending_len(), 0);
        assert_eq!(stack.committed_len(), 2);
        assert_eq!(frames(&stack), vec![1, 2]);
    }

    #[test]
    fn reset_tmp_restores_popped_committed_frames() {
        let mut stack = ValueStack::with_capacity(8);
        for v in [10, 20, 30] {
            assert!(stack.push(v));
        }
        stack.commit_tmp();

        stack.pop(2);
        assert!(stack.push(99));
        assert_eq!(frames(&stack), vec![10, 99]);

        stack.reset_tmp();
        assert_eq!(frames(&stack), vec![10, 20, 30]);
        assert_eq!(stack.top(), Some(&30));
    }

    #[test]
    fn pop_spanning_both_regions() {
        let mut stack = ValueStack::with_capacity(8);
        for v in [1, 2, 3] {
            assert!(stack.push(v));
        }
        stack.commit_tmp();
        assert!(stack.push(4));
        assert!(stack.push(5));

        stack.pop(3);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pending_len(), 0);
        assert_eq!(stack.top(), Some(&2));

        stack.commit_tmp();
        assert_eq!(frames(&stack), vec![1, 2]);
        assert_eq!(stack.committed_len(), 2);
    }

    #[test]
    fn get_arg_resolves_in_either_region() {
        let mut stack = ValueStack::with_capacity(8);
        for v in ['a', 'b', 'c'] {
            assert!(stack.push(v));
        }
        stack.commit_tmp();
        assert!(stack.push('d'));
        assert!(stack.push('e'));

        // `c d e` are the three topmost: c committed, d and e temporary.
        assert_eq!(stack.get_arg(3, 0), Some(&'c'));
        assert_eq!(stack.get_arg(3, 1), Some(&'d'));
        assert_eq!(stack.get_arg(3, 2), Some(&'e'));
        assert_eq!(stack.get_arg(5, 0), Some(&'a'));
        assert_eq!(stack.get_arg(3, 3), None);
        assert_eq!(stack.get_arg(6, 0), None);

        // After a pop that lowers `gap`, arguments skip the dead slots.
        stack.pop(3);
        assert!(stack.push('x'));
        assert_eq!(stack.get_arg(2, 0), Some(&'b'));
        assert_eq!(stack.get_arg(2, 1), Some(&'x'));
    }

    #[test]
    fn empty_production_pops_nothing_and_pushes_one() {
        let mut stack = ValueStack::with_capacity(4);
        assert!(stack.push('a'));
        stack.commit_tmp();
        assert!(stack.push('b'));

        assert_eq!(stack.get_arg(0, 0), None);
        stack.pop(0);
        assert_eq!((stack.committed_len(), stack.pending_len()), (1, 1));
        assert!(stack.push('c'));
        assert_eq!(stack.top(), Some(&'c'));

        stack.commit_tmp();
        assert_eq!(stack.iter().copied().collect::<String>(), "abc");
    }

    #[test]
    fn commit_overwrites_popped_slots_and_drops_leftovers() {
        let mut stack = ValueStack::with_capacity(8);
        for v in [1, 2, 3, 4, 5] {
            assert!(stack.push(v));
        }
        stack.commit_tmp();

        // reduce 3 frames into 1
        stack.pop(3);
        assert!(stack.push(345));
        stack.commit_tmp();
        assert_eq!(frames(&stack), vec![1, 2, 345]);
        assert_eq!(stack.committed_len(), 3);

        // slots above the new top are free again
        for v in [6, 7, 8, 9, 10] {
            assert!(stack.push(v));
        }
        assert!(!stack.push(11));
    }

    #[test]
    fn commit_when_temporaries_reach_the_last_slot() {
        // destinations and sources cover the same slots in opposite order
        let mut stack = ValueStack::with_capacity(5);
        assert!(stack.push(1));
        assert!(stack.push(2));
        stack.commit_tmp();
        for v in [3, 4, 5] {
            assert!(stack.push(v));
        }
        assert!(!stack.push(6));
        stack.commit_tmp();
        assert_eq!(frames(&stack), vec![1, 2, 3, 4, 5]);
        assert_eq!(stack.get_arg(3, 0), Some(&3));
    }

    #[test]
    fn overflow_leaves_committed_frames_intact() {
        let mut stack = ValueStack::with_capacity(3);
        assert!(stack.push(1));
        assert!(stack.push(2));
        stack.commit_tmp();
        assert!(stack.push(3));
        assert!(!stack.push(4));
        assert!(!stack.push(4));

        stack.reset_tmp();
        assert_eq!(frames(&stack), vec![1, 2]);
    }

    #[test]
    fn popped_committed_frames_still_count_against_capacity() {
        let mut stack = ValueStack::with_capacity(3);
        for v in [1, 2, 3] {
            assert!(stack.push(v));
        }
        stack.commit_tmp();
        stack.pop(2);
        // the two popped frames stay live for rollback until committed
        assert!(!stack.push(9));
        stack.commit_tmp();
        assert!(stack.push(9));
        assert!(stack.push(10));
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut stack = ValueStack::with_capacity(0);
        assert!(!stack.push(()));
        stack.commit_tmp();
        stack.reset_tmp();
        assert!(stack.is_empty());
    }

    #[test]
    #[should_panic(expected = "pop(2) on a stack of depth 1")]
    fn pop_below_bottom_panics() {
        let mut stack = ValueStack::with_capacity(4);
        assert!(stack.push(1));
        stack.pop(2);
    }

    #[test]
    fn every_frame_is_dropped_exactly_once() {
        let live = Rc::new(Cell::new(0));
        {
            let mut stack = ValueStack::with_capacity(6);
            for _ in 0..4 {
                assert!(stack.push(Tracked::new(&live)));
            }
            stack.commit_tmp();
            assert_eq!(live.get(), 4);

            stack.pop(3);
            assert!(stack.push(Tracked::new(&live)));
            assert_eq!(live.get(), 5);
            stack.reset_tmp();
            assert_eq!(live.get(), 4);

            stack.pop(3);
            assert!(stack.push(Tracked::new(&live)));
            stack.commit_tmp();
            assert_eq!(live.get(), 2);

            assert!(stack.push(Tracked::new(&live)));
            assert_eq!(live.get(), 3);
            stack.clear();
            assert_eq!(live.get(), 0);

            assert!(stack.push(Tracked::new(&live)));
            stack.commit_tmp();
            assert!(stack.push(Tracked::new(&live)));
            assert_eq!(live.get(), 2);
        }
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn debug_lists_logical_frames() {
        let mut stack = ValueStack::with_capacity(4);
        assert!(stack.push(7));
        stack.commit_tmp();
        assert!(stack.push(8));
        let out = format!("{stack:?}");
        assert!(out.contains("frames: [7, 8]"), "{out}");
    }
}
