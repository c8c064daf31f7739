//! # Sequencing Primitives
//!
//! A review session is driven by two containers that trade items back and forth:
//!
//! - [`PendingQueue`]: FIFO of items still waiting for a decision. Its front is the
//!   *current* item.
//! - [`ReviewedStack`]: LIFO of items already decided. Its top is the *most recently
//!   reviewed* item.
//!
//! Both share the [`Sequence`] contract, differing only in which end is "active":
//!
//! | Operation               | Queue            | Stack              |
//! |-------------------------|------------------|--------------------|
//! | `insert`                | tail             | top                |
//! | `take`                  | front            | top                |
//! | `peek`                  | front            | top                |
//! | `insert_with_priority`  | front            | top                |
//!
//! `insert_with_priority` exists for undo: an item popped off the reviewed stack must become
//! the very next pending item, not land at the tail of the queue.
//!
//! Underflow is never an error. Taking from or peeking into an empty sequence yields `None`,
//! and removing an absent item is a no-op.

mod queue;
mod stack;

pub use queue::PendingQueue;
pub use stack::ReviewedStack;

/// Shared contract of the two review containers.
pub trait Sequence<T> {
    /// Insert at the passive end (queue tail / stack top).
    fn insert(&mut self, item: T);

    /// Remove and return the active end.
    fn take(&mut self) -> Option<T>;

    /// Borrow the active end.
    fn peek(&self) -> Option<&T>;

    /// Insert so that the next `take` returns `item`.
    fn insert_with_priority(&mut self, item: T);

    /// Remove the first element equal to `item`.
    fn remove(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Insert(u32),
        Take,
        Priority(u32),
        Remove(u32),
        Peek,
    }

    fn script() -> Vec<Op> {
        use Op::*;
        vec![
            Take,
            Remove(9),
            Peek,
            Insert(1),
            Insert(2),
            Priority(3),
            Remove(2),
            Remove(2),
            Take,
            Take,
            Take,
            Take,
            Insert(4),
            Priority(5),
            Peek,
            Remove(4),
            Take,
            Take,
        ]
    }

    /// Replays `script` against any sequence and checks `len` after each step.
    fn replay<S: Sequence<u32>>(mut seq: S, contents: impl Fn(&S) -> usize) {
        for op in script() {
            let before = seq.len();
            match op {
                Op::Insert(v) => {
                    seq.insert(v);
                    assert_eq!(seq.len(), before + 1);
                }
                Op::Priority(v) => {
                    seq.insert_with_priority(v);
                    assert_eq!(seq.len(), before + 1);
                    assert_eq!(seq.peek(), Some(&v));
                }
                Op::Take => {
                    let taken = seq.take();
                    let expected = if taken.is_some() { before - 1 } else { 0 };
                    assert_eq!(seq.len(), expected);
                }
                Op::Remove(v) => {
                    let removed = seq.remove(&v);
                    let expected = if removed.is_some() { before - 1 } else { before };
                    assert_eq!(seq.len(), expected);
                }
                Op::Peek => {
                    seq.peek();
                    assert_eq!(seq.len(), before);
                }
            }
            assert_eq!(seq.len(), contents(&seq));
        }
        assert!(seq.is_empty());
    }

    #[test]
    fn queue_len_tracks_contents_for_any_interleaving() {
        replay(PendingQueue::<u32>::new(), |q: &PendingQueue<u32>| {
            q.iter().count()
        });
    }

    #[test]
    fn stack_len_tracks_contents_for_any_interleaving() {
        replay(ReviewedStack::<u32>::new(), |s: &ReviewedStack<u32>| {
            s.iter().count()
        });
    }

    #[test]
    fn priority_insert_is_taken_next() {
        let mut queue: PendingQueue<u32> = [1, 2, 3].into_iter().collect();
        queue.insert_with_priority(7);
        assert_eq!(Sequence::take(&mut queue), Some(7));

        let mut stack: ReviewedStack<u32> = [1, 2, 3].into_iter().collect();
        stack.insert_with_priority(7);
        assert_eq!(Sequence::take(&mut stack), Some(7));
    }
}
