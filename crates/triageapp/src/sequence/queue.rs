use super::Sequence;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// FIFO of items awaiting a decision. The front is the current item.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQueue<T> {
    items: VecDeque<T>,
}

impl<T> Default for PendingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PendingQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Mutable access to the front, used to rewrite the current item's path in place.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
    }

    pub fn enqueue_with_priority(&mut self, item: T) {
        self.items.push_front(item);
    }

    pub fn remove(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let pos = self.items.iter().position(|candidate| candidate == item)?;
        self.items.remove(pos)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Front-to-back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Randomly permute the pending order in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.make_contiguous().shuffle(rng);
    }
}

impl<T> FromIterator<T> for PendingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Sequence<T> for PendingQueue<T> {
    fn insert(&mut self, item: T) {
        self.enqueue(item);
    }

    fn take(&mut self) -> Option<T> {
        self.dequeue()
    }

    fn peek(&self) -> Option<&T> {
        PendingQueue::peek(self)
    }

    fn insert_with_priority(&mut self, item: T) {
        self.enqueue_with_priority(item);
    }

    fn remove(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        PendingQueue::remove(self, item)
    }

    fn len(&self) -> usize {
        PendingQueue::len(self)
    }
}
