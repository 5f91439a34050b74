use crate::error::{Error, Result};
use crate::treap::iter::{TreapIntoIter, TreapIter, TreapIterMut};
use crate::treap::node::Node;
use crate::treap::range::RangeMut;
use crate::treap::tree::{self, Tree};
use log::{debug, trace};
use rand::{Rand, Rng, XorShiftRng};
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ops::Add;
use std::result;

/// A list implemented using an implicit treap with lazy range updates.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property.
/// Every node carries a randomly drawn priority that is no larger than the priorities of its
/// children, which keeps the expected height of the tree logarithmic in the number of elements.
/// In an implicit treap the position of a node is never stored; it is the number of nodes that
/// precede it in-order, derived from subtree sizes on the way down.
///
/// Every positional operation is a couple of splits, a local edit, and a couple of merges. Range
/// reversal and range assignment isolate the range into its own subtree and tag its root, so both
/// run in `O(log N)` regardless of the length of the range. The tags are pushed down lazily,
/// which is why reads such as `get` and `iter` take `&mut self`.
///
/// Priorities come from `R`, which defaults to an unseeded `XorShiftRng`, so the shape of a
/// default constructed list is reproducible. Use `with_rng` to supply another generator.
///
/// # Examples
///
/// ```
/// use lazy_treap::treap::TreapList;
///
/// let mut list = TreapList::new();
/// list.insert(0, 10);
/// list.insert(0, 20);
/// list.insert(1, 30);
/// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&20, &30, &10]);
///
/// list.reverse_range(0, 2).unwrap();
/// list.assign_range(1, 1, 99).unwrap();
/// assert_eq!(list.get(1), Ok(&99));
///
/// assert_eq!(list.remove(0), Some(10));
/// assert_eq!(list.into_iter().collect::<Vec<u32>>(), vec![99, 20]);
/// ```
pub struct TreapList<T, R = XorShiftRng> {
    tree: Tree<T>,
    rng: R,
}

fn out_of_range(index: usize, len: usize) -> Error {
    debug!("rejecting index {} for a treap of length {}", index, len);
    Error::OutOfRange { index, len }
}

impl<T> TreapList<T> {
    /// Constructs a new, empty `TreapList<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let list: TreapList<u32> = TreapList::new();
    /// ```
    pub fn new() -> Self {
        TreapList {
            tree: None,
            rng: XorShiftRng::new_unseeded(),
        }
    }
}

impl<T, R> TreapList<T, R> {
    /// Constructs a new, empty `TreapList<T, R>` that draws its priorities from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    /// use rand::{SeedableRng, XorShiftRng};
    ///
    /// let rng: XorShiftRng = SeedableRng::from_seed([1, 2, 3, 4]);
    /// let list: TreapList<u32, _> = TreapList::with_rng(rng);
    /// assert!(list.is_empty());
    /// ```
    pub fn with_rng(rng: R) -> Self {
        TreapList { tree: None, rng }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.insert(0, 1);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::len(&self.tree)
    }

    /// Returns `true` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let list: TreapList<u32> = TreapList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the list, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.insert(0, 1);
    /// list.insert(1, 2);
    /// list.clear();
    /// assert_eq!(list.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::deallocate(&mut self.tree);
    }

    /// Feeds every value of the list to `sink` in order. Unlike `iter`, this does not push any
    /// pending tags and only needs a shared reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// list.push_back(3);
    /// list.reverse_range(0, 2).unwrap();
    ///
    /// let mut values = Vec::new();
    /// list.for_each(|value| values.push(*value));
    /// assert_eq!(values, vec![3, 2, 1]);
    /// ```
    pub fn for_each<'a, F>(&'a self, sink: F)
    where
        F: FnMut(&'a T),
    {
        tree::visit(&self.tree, sink);
    }
}

impl<T, R> TreapList<T, R>
where
    T: Clone,
    R: Rng,
{
    /// Inserts a value into the list at a particular index, shifting elements one position to the
    /// right if needed. The index is not validated; an index past the end appends the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.insert(0, 1);
    /// list.insert(0, 2);
    /// assert_eq!(list.get(0), Ok(&2));
    /// assert_eq!(list.get(1), Ok(&1));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        let TreapList {
            ref mut tree,
            ref mut rng,
        } = self;
        tree::insert(tree, index, Node::new(value, rng.next_u32()));
    }

    /// Removes the value at a particular index from the list and returns it. Returns `None` if
    /// there is no value at the index.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.insert(0, 1);
    /// assert_eq!(list.remove(0), Some(1));
    /// assert_eq!(list.remove(0), None);
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        tree::remove(&mut self.tree, index)
    }

    /// Overwrites the value at a particular index without restructuring the list and returns the
    /// previous value. Returns `None` if there is no value at the index.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.insert(0, 1);
    /// assert_eq!(list.replace(0, 2), Some(1));
    /// assert_eq!(list.get(0), Ok(&2));
    /// ```
    pub fn replace(&mut self, index: usize, value: T) -> Option<T> {
        tree::replace(&mut self.tree, index, value)
    }

    /// Inserts a value at the front of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(list.get(0), Ok(&2));
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.insert(0, value);
    }

    /// Inserts a value at the back of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.get(0), Ok(&1));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let index = self.len();
        self.insert(index, value);
    }

    /// Removes a value at the front of the list. Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.pop_front(), Some(1));
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(0)
    }

    /// Removes a value at the back of the list. Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.pop_back(), Some(2));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        match self.len() {
            0 => None,
            len => self.remove(len - 1),
        }
    }

    /// Returns an immutable reference to the value at a particular index.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the index is not less than the length of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    /// use lazy_treap::Error;
    ///
    /// let mut list = TreapList::new();
    /// list.insert(0, 1);
    /// assert_eq!(list.get(0), Ok(&1));
    /// assert_eq!(list.get(1), Err(Error::OutOfRange { index: 1, len: 1 }));
    /// ```
    pub fn get(&mut self, index: usize) -> Result<&T> {
        let len = self.len();
        tree::get(&mut self.tree, index).ok_or_else(|| out_of_range(index, len))
    }

    /// Returns a mutable reference to the value at a particular index.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the index is not less than the length of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.insert(0, 1);
    /// *list.get_mut(0).unwrap() = 2;
    /// assert_eq!(list.get(0), Ok(&2));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        tree::get_mut(&mut self.tree, index).ok_or_else(|| out_of_range(index, len))
    }

    /// Isolates the elements at positions `start..=end` into their own subtree, hands it to `f`,
    /// and stitches the list back together. Returns whatever `f` returns.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if either bound is not less than the length of the list and
    /// `Error::InvalidRange` if `start > end`. The list is left untouched in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list: TreapList<u32> = (1..=5).collect();
    /// let sum = list.apply(1, 3, |range| range.iter().sum::<u32>());
    /// assert_eq!(sum, Ok(9));
    ///
    /// list.apply(0, 4, |range| range.reverse()).unwrap();
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&5, &4, &3, &2, &1]);
    /// ```
    pub fn apply<F, U>(&mut self, start: usize, end: usize, f: F) -> Result<U>
    where
        F: FnOnce(&mut RangeMut<'_, T>) -> U,
    {
        let len = self.len();
        if start >= len {
            return Err(out_of_range(start, len));
        }
        if end >= len {
            return Err(out_of_range(end, len));
        }
        if start > end {
            debug!("rejecting inverted range [{}, {}]", start, end);
            return Err(Error::InvalidRange { start, end });
        }
        trace!("isolating range [{}, {}] of a treap of length {}", start, end, len);

        let mut mid = tree::split(&mut self.tree, start);
        let right = tree::split(&mut mid, end - start + 1);
        let ret = f(&mut RangeMut::new(&mut mid));
        tree::merge(&mut self.tree, mid);
        tree::merge(&mut self.tree, right);
        Ok(ret)
    }

    /// Reverses the order of the elements at positions `start..=end`.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as `apply`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list: TreapList<u32> = (1..=4).collect();
    /// list.reverse_range(1, 3).unwrap();
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1, &4, &3, &2]);
    /// ```
    pub fn reverse_range(&mut self, start: usize, end: usize) -> Result<()> {
        self.apply(start, end, |range| range.reverse())
    }

    /// Sets every element at positions `start..=end` to `value`.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as `apply`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list: TreapList<u32> = (1..=4).collect();
    /// list.assign_range(0, 1, 0).unwrap();
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&0, &0, &3, &4]);
    /// ```
    pub fn assign_range(&mut self, start: usize, end: usize, value: T) -> Result<()> {
        self.apply(start, end, |range| range.assign(value))
    }

    /// Moves all the elements of `other` to the back of the list, leaving `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list: TreapList<u32> = (1..=2).collect();
    /// let mut other: TreapList<u32> = (3..=4).collect();
    /// list.append(&mut other);
    /// assert!(other.is_empty());
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3, &4]);
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        tree::merge(&mut self.tree, other.tree.take());
    }

    /// Returns an iterator over the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.insert(0, 1);
    /// list.insert(1, 2);
    ///
    /// let mut iterator = list.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&mut self) -> TreapIter<'_, T> {
        TreapIter::new(&mut self.tree)
    }

    /// Returns a mutable iterator over the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.insert(0, 1);
    /// list.insert(1, 2);
    ///
    /// for value in &mut list {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = list.iter();
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> TreapIterMut<'_, T> {
        TreapIterMut::new(&mut self.tree)
    }
}

impl<T, R> TreapList<T, R>
where
    T: Clone,
    R: Rng + Rand,
{
    /// Splits the list in two at a particular index. The returned list holds the elements at
    /// positions `index..`, and its generator is seeded from this list's generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_treap::treap::TreapList;
    ///
    /// let mut list: TreapList<u32> = (1..=4).collect();
    /// let mut other = list.split_off(1);
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1]);
    /// assert_eq!(other.iter().collect::<Vec<&u32>>(), vec![&2, &3, &4]);
    /// ```
    pub fn split_off(&mut self, index: usize) -> Self {
        let rng = self.rng.gen::<R>();
        TreapList {
            tree: tree::split(&mut self.tree, index),
            rng,
        }
    }
}

impl<T, R> Drop for TreapList<T, R> {
    fn drop(&mut self) {
        tree::deallocate(&mut self.tree);
    }
}

impl<T, R> IntoIterator for TreapList<T, R>
where
    T: Clone,
{
    type IntoIter = TreapIntoIter<T>;
    type Item = T;

    fn into_iter(mut self) -> Self::IntoIter {
        TreapIntoIter::new(self.tree.take())
    }
}

impl<'a, T, R> IntoIterator for &'a mut TreapList<T, R>
where
    T: 'a + Clone,
    R: Rng,
{
    type IntoIter = TreapIterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Default for TreapList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> Add for TreapList<T, R>
where
    T: Clone,
    R: Rng,
{
    type Output = TreapList<T, R>;

    fn add(mut self, mut other: TreapList<T, R>) -> TreapList<T, R> {
        self.append(&mut other);
        self
    }
}

impl<T, R> Extend<T> for TreapList<T, R>
where
    T: Clone,
    R: Rng,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Clone> FromIterator<T> for TreapList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = TreapList::new();
        list.extend(iter);
        list
    }
}

impl<T, R> fmt::Debug for TreapList<T, R>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.for_each(|value| {
            list.entry(value);
        });
        list.finish()
    }
}

impl<T, R> PartialEq for TreapList<T, R>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut lhs = Vec::with_capacity(self.len());
        let mut rhs = Vec::with_capacity(other.len());
        self.for_each(|value| lhs.push(value));
        other.for_each(|value| rhs.push(value));
        lhs == rhs
    }
}

impl<T, R> Eq for TreapList<T, R> where T: Eq {}

impl<T, R> Serialize for TreapList<T, R>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        let mut ret = Ok(());
        self.for_each(|value| {
            if ret.is_ok() {
                ret = seq.serialize_element(value);
            }
        });
        ret?;
        seq.end()
    }
}

struct TreapListVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for TreapListVisitor<T>
where
    T: Clone + Deserialize<'de>,
{
    type Value = TreapList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut list = TreapList::new();
        while let Some(value) = seq.next_element()? {
            list.push_back(value);
        }
        Ok(list)
    }
}

impl<'de, T> Deserialize<'de> for TreapList<T>
where
    T: Clone + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreapListVisitor {
            marker: PhantomData,
        })
    }
}
