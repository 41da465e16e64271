// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`DynamicArray`](crate::DynamicArray).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. It takes over the released
//!   block, so no element is cloned.
//! - `&DynamicArray` and `&mut DynamicArray` iterate as slices.

mod from_iterator;

// Crate imports
use crate::vec::DynamicArray;

// Alloc imports
use alloc::vec::{self, Vec};

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `DynamicArray::into_iter()`.
///
/// Yields the live elements by value from front to back; dead slots are
/// dropped without being yielded.
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: Vec::from(self).into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{dyn_array, DynamicArray};
    use alloc::{rc::Rc, vec, vec::Vec};

    #[test]
    fn test_double_ended_and_nth() {
        let v = dyn_array![10, 20, 30, 40];
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.nth(1), Some(30));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iter_nth_back_sequence() {
        let v = dyn_array![1, 2, 3, 4, 5];
        let mut it = v.into_iter();
        assert_eq!(it.nth_back(0), Some(5));
        assert_eq!(it.nth_back(1), Some(3)); // skip 1 from back, take 3
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iter_skips_dead_slots() {
        let mut v: DynamicArray<i32> = DynamicArray::with_capacity(8);
        v.extend_from_slice(&[1, 2, 3, 4]);
        v.truncate(2);
        let it = v.into_iter();
        assert_eq!(it.len(), 2);
        assert_eq!(it.collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn test_into_iter_moves_without_cloning() {
        let marker = Rc::new(());
        let v = DynamicArray::from(vec![Rc::clone(&marker), Rc::clone(&marker)]);
        assert_eq!(Rc::strong_count(&marker), 3);
        let collected: Vec<_> = v.into_iter().collect();
        assert_eq!(Rc::strong_count(&marker), 3);
        drop(collected);
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn test_into_iter_empty() {
        let v: DynamicArray<u8> = DynamicArray::new();
        let mut it = v.into_iter();
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_ref_iteration() {
        let mut v = dyn_array![1, 2, 3];
        let mut seen = Vec::new();
        for x in &v {
            seen.push(*x);
        }
        assert_eq!(seen, [1, 2, 3]);

        for x in &mut v {
            *x *= 10;
        }
        assert_eq!(v.as_slice(), &[10, 20, 30]);

        for x in v.iter_mut() {
            *x += 1;
        }
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), [11, 21, 31]);
    }

    #[test]
    fn test_collect_uses_exact_capacity() {
        let v: DynamicArray<i32> = (1..=5).collect();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(v.capacity(), 5);

        let odd: DynamicArray<i32> = (1..=10).filter(|x| x % 2 == 1).collect();
        assert_eq!(odd.as_slice(), &[1, 3, 5, 7, 9]);
    }
}
