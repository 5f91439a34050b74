use crate::treap::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn len<T>(tree: &Tree<T>) -> usize {
    if let Some(ref node) = tree {
        node.len()
    } else {
        0
    }
}

/// Appends `r_tree` to `l_tree`. Every element of `l_tree` must precede every element of
/// `r_tree`. The root with the strictly smaller priority wins; ties go to `r_tree`.
pub fn merge<T: Clone>(l_tree: &mut Tree<T>, r_tree: Tree<T>) {
    match (l_tree.take(), r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            l_node.push();
            r_node.push();
            if l_node.priority < r_node.priority {
                merge(&mut l_node.right, Some(r_node));
                l_node.update();
                *l_tree = Some(l_node);
            } else {
                let mut new_tree = Some(l_node);
                merge(&mut new_tree, r_node.left.take());
                r_node.left = new_tree;
                r_node.update();
                *l_tree = Some(r_node);
            }
        },
        (new_tree, None) | (None, new_tree) => *l_tree = new_tree,
    }
}

/// Splits off the positions `[index, len)` and returns them. `tree` keeps `[0, index)`.
pub fn split<T: Clone>(tree: &mut Tree<T>, index: usize) -> Tree<T> {
    match tree.take() {
        Some(mut node) => {
            node.push();
            let left_len = len(&node.left);
            if index <= left_len {
                let res = split(&mut node.left, index);
                *tree = node.left.take();
                node.left = res;
                node.update();
                Some(node)
            } else {
                let ret = split(&mut node.right, index - left_len - 1);
                node.update();
                *tree = Some(node);
                ret
            }
        },
        None => None,
    }
}

/// Splits off the elements for which `goes_right` holds and returns them. The predicate has to
/// be monotone over the order of the tree: once it holds for an element, it holds for every
/// element after it.
pub fn split_by<T, F>(tree: &mut Tree<T>, goes_right: &mut F) -> Tree<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    match tree.take() {
        Some(mut node) => {
            node.push();
            if goes_right(&node.value) {
                let res = split_by(&mut node.left, goes_right);
                *tree = node.left.take();
                node.left = res;
                node.update();
                Some(node)
            } else {
                let ret = split_by(&mut node.right, goes_right);
                node.update();
                *tree = Some(node);
                ret
            }
        },
        None => None,
    }
}

pub fn insert<T: Clone>(tree: &mut Tree<T>, index: usize, new_node: Node<T>) {
    if tree.is_none() {
        *tree = Some(Box::new(new_node));
        return;
    }
    let right = split(tree, index);
    merge(tree, Some(Box::new(new_node)));
    merge(tree, right);
}

pub fn remove<T: Clone>(tree: &mut Tree<T>, index: usize) -> Option<T> {
    let mut mid = split(tree, index);
    let right = split(&mut mid, 1);
    merge(tree, right);
    mid.map(|node| node.value)
}

pub fn get_mut<T: Clone>(tree: &mut Tree<T>, mut index: usize) -> Option<&mut T> {
    let mut current = tree;
    while let Some(node) = current {
        node.push();
        let left_len = len(&node.left);
        match index.cmp(&left_len) {
            Ordering::Less => current = &mut node.left,
            Ordering::Greater => {
                index -= left_len + 1;
                current = &mut node.right;
            },
            Ordering::Equal => return Some(&mut node.value),
        }
    }
    None
}

/// Overwrites the value at `index` in place and returns the old one. The node keeps its
/// priority and its position.
pub fn replace<T: Clone>(tree: &mut Tree<T>, index: usize, value: T) -> Option<T> {
    get_mut(tree, index).map(|slot| mem::replace(slot, value))
}

pub fn get<T: Clone>(tree: &mut Tree<T>, index: usize) -> Option<&T> {
    get_mut(tree, index).map(|value| &*value)
}

enum Step<'a, T> {
    Enter(&'a Node<T>, bool, Option<&'a T>),
    Emit(&'a T),
}

/// Feeds every value to `f` in logical order without pushing any tags. Tags that have not been
/// pushed yet are resolved on the way down instead.
pub fn visit<'a, T, F>(tree: &'a Tree<T>, mut f: F)
where
    F: FnMut(&'a T),
{
    let mut stack = Vec::new();
    if let Some(ref node) = tree {
        stack.push(Step::Enter(&**node, false, None));
    }
    while let Some(step) = stack.pop() {
        match step {
            Step::Emit(value) => f(value),
            Step::Enter(node, reversed, assigned) => {
                let child_reversed = reversed ^ node.reversed;
                // Tags above `node` are newer than the ones on it.
                let child_assigned = assigned.or_else(|| node.pending.as_ref());
                let (first, second) = if reversed {
                    (&node.right, &node.left)
                } else {
                    (&node.left, &node.right)
                };
                if let Some(ref child) = second {
                    stack.push(Step::Enter(&**child, child_reversed, child_assigned));
                }
                stack.push(Step::Emit(assigned.unwrap_or(&node.value)));
                if let Some(ref child) = first {
                    stack.push(Step::Enter(&**child, child_reversed, child_assigned));
                }
            },
        }
    }
}

/// Replaces the tree with an empty tree and frees its nodes without recursing.
pub fn deallocate<T>(tree: &mut Tree<T>) {
    let mut stack = Vec::new();
    stack.extend(tree.take());
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Asserts the size and heap invariants of every node and returns the size of the tree.
#[cfg(test)]
pub fn assert_valid<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(ref node) => {
            for child in [&node.left, &node.right].iter() {
                if let Some(ref child_node) = child {
                    assert!(node.priority <= child_node.priority);
                }
            }
            let len = 1 + assert_valid(&node.left) + assert_valid(&node.right);
            assert_eq!(node.len, len);
            len
        },
        None => 0,
    }
}
