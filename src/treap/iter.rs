use crate::treap::node::Node;
use crate::treap::tree::{self, Tree};

/// An iterator over a treap.
///
/// This iterator traverses the elements of the treap in-order and yields immutable references.
/// Pending tags are pushed down as the iterator descends, so it needs mutable access to the tree.
pub struct TreapIter<'a, T> {
    current: Option<&'a mut Node<T>>,
    stack: Vec<(&'a T, Option<&'a mut Node<T>>)>,
}

impl<'a, T> TreapIter<'a, T> {
    pub(crate) fn new(tree: &'a mut Tree<T>) -> Self {
        TreapIter {
            current: tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for TreapIter<'a, T>
where
    T: 'a + Clone,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let TreapIter { current, stack } = self;
        while let Some(node) = current.take() {
            node.push();
            let Node { value, left, right, .. } = node;
            *current = left.as_mut().map(|node| &mut **node);
            stack.push((&*value, right.as_mut().map(|node| &mut **node)));
        }
        stack.pop().map(|(value, right)| {
            *current = right;
            value
        })
    }
}

/// A mutable iterator over a treap.
///
/// This iterator traverses the elements of the treap in-order and yields mutable references.
pub struct TreapIterMut<'a, T> {
    current: Option<&'a mut Node<T>>,
    stack: Vec<(&'a mut T, Option<&'a mut Node<T>>)>,
}

impl<'a, T> TreapIterMut<'a, T> {
    pub(crate) fn new(tree: &'a mut Tree<T>) -> Self {
        TreapIterMut {
            current: tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for TreapIterMut<'a, T>
where
    T: 'a + Clone,
{
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let TreapIterMut { current, stack } = self;
        while let Some(node) = current.take() {
            node.push();
            let Node { value, left, right, .. } = node;
            *current = left.as_mut().map(|node| &mut **node);
            stack.push((value, right.as_mut().map(|node| &mut **node)));
        }
        stack.pop().map(|(value, right)| {
            *current = right;
            value
        })
    }
}

/// An owning iterator over a treap.
///
/// This iterator traverses the elements of the treap in-order and yields owned values.
pub struct TreapIntoIter<T> {
    current: Tree<T>,
    stack: Vec<Box<Node<T>>>,
}

impl<T> TreapIntoIter<T> {
    pub(crate) fn new(tree: Tree<T>) -> Self {
        TreapIntoIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<T: Clone> Iterator for TreapIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            node.push();
            self.current = node.left.take();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = *node;
            self.current = right;
            value
        })
    }
}

impl<T> Drop for TreapIntoIter<T> {
    fn drop(&mut self) {
        tree::deallocate(&mut self.current);
        for mut node in self.stack.drain(..) {
            tree::deallocate(&mut node.right);
        }
    }
}
