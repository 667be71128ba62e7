//! Ordered file list backing both the pending and the converted lists.

use std::collections::HashMap;

use crate::error::CollectionError;
use crate::model::Identified;

/// An ordered list of files with the three edits the UI performs: append a
/// batch, remove one entry, and replace the whole order.
///
/// Every edit either succeeds completely or leaves the list as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified + Clone> OrderedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Copy of the current order, taken when an operation starts.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn append(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.items.len() {
            return Err(CollectionError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Replaces the order wholesale. `new_order` must hold exactly the current
    /// entries (compared by identity, duplicates counted).
    pub fn reorder(&mut self, new_order: Vec<T>) -> Result<(), CollectionError> {
        if !self.is_permutation(&new_order) {
            return Err(CollectionError::NotAPermutation {
                expected: self.items.len(),
                actual: new_order.len(),
            });
        }
        self.items = new_order;
        Ok(())
    }

    /// Moves the entry at `from` so that it ends up at `to`, the way a
    /// drag-and-drop gesture does. Both indices refer to the current order.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), CollectionError> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(CollectionError::OutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }
        let mut order = self.items.clone();
        let moved = order.remove(from);
        order.insert(to, moved);
        self.reorder(order)
    }

    fn is_permutation(&self, candidate: &[T]) -> bool {
        if candidate.len() != self.items.len() {
            return false;
        }
        let mut counts: HashMap<T::Id, isize> = HashMap::with_capacity(self.items.len());
        for item in &self.items {
            *counts.entry(item.identity()).or_default() += 1;
        }
        for item in candidate {
            match counts.get_mut(&item.identity()) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
