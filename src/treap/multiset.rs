use crate::error::{Error, Result};
use crate::treap::compare::{Comparator, Mode};
use crate::treap::iter::{TreapIntoIter, TreapIter};
use crate::treap::node::Node;
use crate::treap::tree::{self, Tree};
use log::{debug, trace};
use rand::{Rng, XorShiftRng};
use std::fmt;

/// An ordered multiset implemented using a treap whose order comes from a `Comparator<T, K>`.
///
/// Elements are never compared with each other. The multiset only asks the comparator whether an
/// element sorts after a key (`Mode::Greater`), or after or equal to it (`Mode::GreaterOrEqual`),
/// and splits the tree at the first element that answers `true`. Elements that compare equal to a
/// key are kept in insertion order.
///
/// # Examples
///
/// ```
/// use lazy_treap::treap::{Mode, TreapMultiset};
///
/// let by_key = |value: &(u32, char), key: &u32, mode: Mode| match mode {
///     Mode::Greater => value.0 > *key,
///     Mode::GreaterOrEqual => value.0 >= *key,
/// };
///
/// let mut set = TreapMultiset::new(by_key);
/// set.insert(&5, (5, 'e'));
/// set.insert(&1, (1, 'a'));
/// set.insert(&3, (3, 'c'));
/// set.insert(&3, (3, 'C'));
///
/// assert_eq!(set.count(&3), 2);
/// assert_eq!(set.remove(&3), 2);
/// assert_eq!(
///     set.iter().map(|value| value.1).collect::<Vec<char>>(),
///     vec!['a', 'e'],
/// );
/// ```
pub struct TreapMultiset<T, C, R = XorShiftRng> {
    tree: Tree<T>,
    comparator: C,
    rng: R,
}

impl<T, C> TreapMultiset<T, C> {
    /// Constructs a new, empty `TreapMultiset<T, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::{NaturalOrder, TreapMultiset};
    ///
    /// let set: TreapMultiset<u32, _> = TreapMultiset::new(NaturalOrder);
    /// ```
    pub fn new(comparator: C) -> Self {
        TreapMultiset {
            tree: None,
            comparator,
            rng: XorShiftRng::new_unseeded(),
        }
    }
}

impl<T, C, R> TreapMultiset<T, C, R> {
    /// Constructs a new, empty `TreapMultiset<T, C, R>` ordered by `comparator` that draws its
    /// priorities from `rng`.
    pub fn with_rng(comparator: C, rng: R) -> Self {
        TreapMultiset {
            tree: None,
            comparator,
            rng,
        }
    }

    /// Returns the number of elements in the multiset.
    pub fn len(&self) -> usize {
        tree::len(&self.tree)
    }

    /// Returns `true` if the multiset is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the multiset, removing all elements.
    pub fn clear(&mut self) {
        tree::deallocate(&mut self.tree);
    }

    /// Feeds every element of the multiset to `sink` in order.
    pub fn for_each<'a, F>(&'a self, sink: F)
    where
        F: FnMut(&'a T),
    {
        tree::visit(&self.tree, sink);
    }
}

impl<T, C, R> TreapMultiset<T, C, R>
where
    T: Clone,
    R: Rng,
{
    /// Isolates the elements that compare equal to `key` and returns the trees before and after
    /// them. `self.tree` is left holding the equal elements.
    fn isolate<K>(&mut self, key: &K) -> (Tree<T>, Tree<T>)
    where
        K: ?Sized,
        C: Comparator<T, K>,
    {
        let TreapMultiset {
            ref mut tree,
            ref comparator,
            ..
        } = self;
        let mut band = tree::split_by(tree, &mut |value: &T| {
            comparator.compare(value, key, Mode::GreaterOrEqual)
        });
        let right = tree::split_by(&mut band, &mut |value: &T| {
            comparator.compare(value, key, Mode::Greater)
        });
        let left = tree.take();
        *tree = band;
        (left, right)
    }

    fn reinstate(&mut self, left: Tree<T>, right: Tree<T>) {
        let band = self.tree.take();
        self.tree = left;
        tree::merge(&mut self.tree, band);
        tree::merge(&mut self.tree, right);
    }

    /// Inserts `value` after every element that does not exceed `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::{NaturalOrder, TreapMultiset};
    ///
    /// let mut set = TreapMultiset::new(NaturalOrder);
    /// set.insert(&2, 2);
    /// set.insert(&1, 1);
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// ```
    pub fn insert<K>(&mut self, key: &K, value: T)
    where
        K: ?Sized,
        C: Comparator<T, K>,
    {
        let TreapMultiset {
            ref mut tree,
            ref comparator,
            ref mut rng,
        } = self;
        let right = tree::split_by(tree, &mut |other: &T| {
            comparator.compare(other, key, Mode::Greater)
        });
        tree::merge(tree, Some(Box::new(Node::new(value, rng.next_u32()))));
        tree::merge(tree, right);
    }

    /// Inserts a value that is its own key.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::{NaturalOrder, TreapMultiset};
    ///
    /// let mut set = TreapMultiset::new(NaturalOrder);
    /// set.add(3);
    /// set.add(1);
    /// set.add(3);
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &3]);
    /// ```
    pub fn add(&mut self, value: T)
    where
        C: Comparator<T, T>,
    {
        let TreapMultiset {
            ref mut tree,
            ref comparator,
            ref mut rng,
        } = self;
        let right = tree::split_by(tree, &mut |other: &T| {
            comparator.compare(other, &value, Mode::Greater)
        });
        tree::merge(tree, Some(Box::new(Node::new(value, rng.next_u32()))));
        tree::merge(tree, right);
    }

    /// Removes every element that compares equal to `key` and returns how many were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::{NaturalOrder, TreapMultiset};
    ///
    /// let mut set = TreapMultiset::new(NaturalOrder);
    /// set.add(1);
    /// set.add(3);
    /// set.add(3);
    /// assert_eq!(set.remove(&3), 2);
    /// assert_eq!(set.remove(&3), 0);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<K>(&mut self, key: &K) -> usize
    where
        K: ?Sized,
        C: Comparator<T, K>,
    {
        let (left, right) = self.isolate(key);
        let removed = tree::len(&self.tree);
        trace!("removing a band of {} elements", removed);
        tree::deallocate(&mut self.tree);
        self.tree = left;
        tree::merge(&mut self.tree, right);
        removed
    }

    /// Returns the number of elements that compare equal to `key`.
    pub fn count<K>(&mut self, key: &K) -> usize
    where
        K: ?Sized,
        C: Comparator<T, K>,
    {
        let (left, right) = self.isolate(key);
        let ret = tree::len(&self.tree);
        self.reinstate(left, right);
        ret
    }

    /// Returns `true` if some element compares equal to `key`.
    pub fn contains<K>(&mut self, key: &K) -> bool
    where
        K: ?Sized,
        C: Comparator<T, K>,
    {
        self.count(key) > 0
    }

    /// Returns an immutable reference to the element with a particular rank.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the index is not less than the length of the multiset.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::{NaturalOrder, TreapMultiset};
    ///
    /// let mut set = TreapMultiset::new(NaturalOrder);
    /// set.add(5);
    /// set.add(2);
    /// assert_eq!(set.get(0), Ok(&2));
    /// assert!(set.get(2).is_err());
    /// ```
    pub fn get(&mut self, index: usize) -> Result<&T> {
        let len = self.len();
        tree::get(&mut self.tree, index).ok_or_else(|| {
            debug!("rejecting index {} for a treap of length {}", index, len);
            Error::OutOfRange { index, len }
        })
    }

    /// Returns an iterator over the multiset in order.
    pub fn iter(&mut self) -> TreapIter<'_, T> {
        TreapIter::new(&mut self.tree)
    }
}

impl<T, C, R> Drop for TreapMultiset<T, C, R> {
    fn drop(&mut self) {
        tree::deallocate(&mut self.tree);
    }
}

impl<T, C, R> IntoIterator for TreapMultiset<T, C, R>
where
    T: Clone,
{
    type IntoIter = TreapIntoIter<T>;
    type Item = T;

    fn into_iter(mut self) -> Self::IntoIter {
        TreapIntoIter::new(self.tree.take())
    }
}

impl<T, C, R> fmt::Debug for TreapMultiset<T, C, R>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.for_each(|value| {
            set.entry(value);
        });
        set.finish()
    }
}
