use super::Sequence;

/// LIFO of items already decided. The top is the most recently reviewed item.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewedStack<T> {
    items: Vec<T>,
}

impl<T> Default for ReviewedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReviewedStack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn remove(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        // Search from the top: the item being discarded is almost always the last one pushed.
        let pos = self.items.iter().rposition(|candidate| candidate == item)?;
        Some(self.items.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bottom-to-top, i.e. the order items were reviewed in.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for ReviewedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Sequence<T> for ReviewedStack<T> {
    fn insert(&mut self, item: T) {
        self.push(item);
    }

    fn take(&mut self) -> Option<T> {
        self.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.top()
    }

    // Pushing already makes the item the next one popped.
    fn insert_with_priority(&mut self, item: T) {
        self.push(item);
    }

    fn remove(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        ReviewedStack::remove(self, item)
    }

    fn len(&self) -> usize {
        ReviewedStack::len(self)
    }
}
