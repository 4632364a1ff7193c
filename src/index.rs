//! Indexing support for [`GrowVec`].
//!
//! These impls mirror slice behavior: panics on out-of-bounds, every
//! standard range form supported, views restricted to the live prefix
//! `[0, len)`. [`GrowVec::at`] is the non-panicking alternative.

use core::ops::{Index, IndexMut};
use core::slice::SliceIndex;

use crate::vec::GrowVec;

impl<T, I: SliceIndex<[T]>> Index<I> for GrowVec<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowVec<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
