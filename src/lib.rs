//! Lazily propagated treaps.
//!
//! [`treap::TreapList`] is a sequence addressed by position that supports logarithmic insert,
//! remove, split, and merge, as well as range reversal and range assignment through lazy tags.
//! [`treap::TreapMultiset`] runs the same split and merge core, but orders its elements with a
//! host supplied [`treap::Comparator`] instead of by position.

pub mod error;
pub mod treap;

pub use crate::error::{Error, Result};
