use crate::treap::iter::{TreapIter, TreapIterMut};
use crate::treap::tree::{self, Tree};

/// A handle to a contiguous range of a `TreapList<T>` that has been isolated into its own
/// subtree by `TreapList::apply`.
///
/// `reverse` and `assign` only tag the root of the subtree, so both run in constant time.
pub struct RangeMut<'a, T> {
    tree: &'a mut Tree<T>,
}

impl<'a, T> RangeMut<'a, T> {
    pub(crate) fn new(tree: &'a mut Tree<T>) -> Self {
        RangeMut { tree }
    }

    /// Returns the number of elements in the range.
    pub fn len(&self) -> usize {
        tree::len(&self.tree)
    }

    /// Returns `true` if the range holds no elements.
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Reverses the order of the elements in the range.
    pub fn reverse(&mut self) {
        if let Some(node) = self.tree.as_mut() {
            node.reverse();
        }
    }
}

impl<'a, T: Clone> RangeMut<'a, T> {
    /// Sets every element in the range to `value`.
    pub fn assign(&mut self, value: T) {
        if let Some(node) = self.tree.as_mut() {
            node.assign(value);
        }
    }

    /// Returns an iterator over the elements in the range.
    pub fn iter(&mut self) -> TreapIter<'_, T> {
        TreapIter::new(self.tree)
    }

    /// Returns a mutable iterator over the elements in the range.
    pub fn iter_mut(&mut self) -> TreapIterMut<'_, T> {
        TreapIterMut::new(self.tree)
    }
}
