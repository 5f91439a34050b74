//! Probabilistic binary search trees where each node also maintains the heap invariant, with
//! lazily propagated range updates.

mod compare;
mod iter;
mod list;
mod multiset;
mod node;
mod range;
mod tree;

pub use self::compare::{Comparator, Mode, NaturalOrder};
pub use self::iter::{TreapIntoIter, TreapIter, TreapIterMut};
pub use self::list::TreapList;
pub use self::multiset::TreapMultiset;
pub use self::range::RangeMut;
