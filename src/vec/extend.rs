// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{growth_failed, DynamicArray};

impl<T: Default> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(err) = self.try_grow_for(self.len.saturating_add(lower)) {
            growth_failed(err)
        }
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        <Self as Extend<T>>::extend(self, iter.into_iter().copied());
    }
}

impl<T: Clone + Default> DynamicArray<T> {
    /// Clones and appends every element of `src`, in order.
    ///
    /// Grows at most once, using the same policy as [`push`](Self::push).
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        <Self as Extend<T>>::extend(self, src.iter().cloned());
    }
}
