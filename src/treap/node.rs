use crate::treap::tree::{self, Tree};
use std::mem;

/// A struct representing an internal node of a lazily propagated treap.
///
/// `value` always holds the logical value of this node. The tags describe work that has not been
/// handed down to the children yet: `pending` is a value every node below this one has to take,
/// and `reversed` means the in-order sequence of each child has to be mirrored.
pub struct Node<T> {
    pub value: T,
    pub priority: u32,
    pub len: usize,
    pub reversed: bool,
    pub pending: Option<T>,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T, priority: u32) -> Self {
        Node {
            value,
            priority,
            len: 1,
            reversed: false,
            pending: None,
            left: None,
            right: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Recomputes the size of this subtree from its children.
    pub fn update(&mut self) {
        self.len = 1 + tree::len(&self.left) + tree::len(&self.right);
    }

    /// Mirrors the subtree. Only the child slots of this node are swapped; the children are
    /// swapped when the tag is pushed.
    pub fn reverse(&mut self) {
        self.reversed ^= true;
        mem::swap(&mut self.left, &mut self.right);
    }
}

impl<T: Clone> Node<T> {
    /// Overwrites every value in the subtree. An older pending value is discarded.
    pub fn assign(&mut self, value: T) {
        self.value = value.clone();
        self.pending = Some(value);
    }

    /// Hands the pending tags of this node down to its children. Must be called before the
    /// children are read or restructured.
    pub fn push(&mut self) {
        let Node {
            ref mut pending,
            ref mut reversed,
            ref mut left,
            ref mut right,
            ..
        } = self;
        if let Some(value) = pending.take() {
            if let Some(ref mut left_node) = left {
                left_node.assign(value.clone());
            }
            if let Some(ref mut right_node) = right {
                right_node.assign(value);
            }
        }
        if *reversed {
            if let Some(ref mut left_node) = left {
                left_node.reverse();
            }
            if let Some(ref mut right_node) = right {
                right_node.reverse();
            }
            *reversed = false;
        }
    }
}
