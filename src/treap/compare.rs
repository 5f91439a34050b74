use std::cmp::Ordering;

/// The two questions a `TreapMultiset<T, C>` asks its comparator about an element and a key.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Does the element sort strictly after the key?
    Greater,
    /// Does the element sort after the key or compare equal to it?
    GreaterOrEqual,
}

/// Orders the elements of a `TreapMultiset<T, C>` against keys of type `K`.
///
/// The answers must come from a total order: for a fixed key and mode, the elements for which
/// `compare` returns `true` must form a suffix of the multiset, and an element answering `true`
/// for `Mode::Greater` must also answer `true` for `Mode::GreaterOrEqual`.
///
/// Any `Fn(&T, &K, Mode) -> bool` closure is a comparator.
///
/// # Examples
///
/// ```
/// use lazy_treap::treap::{Comparator, Mode};
///
/// struct ByLength;
///
/// impl Comparator<String, usize> for ByLength {
///     fn compare(&self, value: &String, key: &usize, mode: Mode) -> bool {
///         match mode {
///             Mode::Greater => value.len() > *key,
///             Mode::GreaterOrEqual => value.len() >= *key,
///         }
///     }
/// }
///
/// assert!(ByLength.compare(&String::from("abc"), &2, Mode::Greater));
/// ```
pub trait Comparator<T, K: ?Sized> {
    fn compare(&self, value: &T, key: &K, mode: Mode) -> bool;
}

impl<T, K, F> Comparator<T, K> for F
where
    K: ?Sized,
    F: Fn(&T, &K, Mode) -> bool,
{
    fn compare(&self, value: &T, key: &K, mode: Mode) -> bool {
        self(value, key, mode)
    }
}

/// Compares elements against keys of the same type with `Ord`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T, T> for NaturalOrder {
    fn compare(&self, value: &T, key: &T, mode: Mode) -> bool {
        match (value.cmp(key), mode) {
            (Ordering::Greater, _) | (Ordering::Equal, Mode::GreaterOrEqual) => true,
            _ => false,
        }
    }
}
