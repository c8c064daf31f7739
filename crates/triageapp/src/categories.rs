//! # Category Registry
//!
//! The registry is an unordered bag of `{name, path}` bindings attached to a task. It keeps
//! insertion order internally, but callers should treat it as unordered and ask for the
//! name-sorted projection ([`CategoryRegistry::list`] with `sorted_by_name`) for display.
//!
//! Adding never deduplicates: the same pair added twice is held twice. Removal matches on
//! *both* name and path and drops one entry per call.

use crate::matching;
use crate::model::Category;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<I>(&mut self, categories: I)
    where
        I: IntoIterator<Item = Category>,
    {
        self.categories.extend(categories);
    }

    /// Removes the first entry matching both `name` and `path`.
    pub fn remove(&mut self, target: &Category) -> Option<Category> {
        let pos = self
            .categories
            .iter()
            .position(|c| c.name == target.name && c.path == target.path)?;
        Some(self.categories.remove(pos))
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }

    pub fn list(&self, sorted_by_name: bool) -> Vec<&Category> {
        let mut view: Vec<&Category> = self.categories.iter().collect();
        if sorted_by_name {
            // Stable, so equal names keep their insertion order.
            view.sort_by(|a, b| a.name.cmp(&b.name));
        }
        view
    }

    /// Name-sorted categories whose name matches `query` word-by-word.
    pub fn filter(&self, query: &str) -> Vec<&Category> {
        self.list(true)
            .into_iter()
            .filter(|c| matching::matches(query, &c.name))
            .collect()
    }

    /// Every category bound to exactly `name`.
    pub fn find_by_name(&self, name: &str) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.name == name).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Insertion order, as persisted.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }
}

impl FromIterator<Category> for CategoryRegistry {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}
