// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynamicArray};

impl<T> DynamicArray<T> {
    /// Removes the element at `index`, shifting `(index, len)` one slot
    /// toward the head.
    ///
    /// Returns the index of the slot that now holds the element that followed
    /// the erased one; this equals `len()` when the last element was erased.
    /// The erased value is kept in the dead slot past `len` until that slot
    /// is overwritten or the buffer is freed.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.len;
        assert!(
            index < len,
            "erase index (is {index}) should be < len (is {len})"
        );
        // Shift left: [index+1..len) -> [index..len-1), erased value ends at len-1.
        self.as_mut_slice()[index..].rotate_left(1);
        self.len = len - 1;
        index
    }
}

impl<T: Default> DynamicArray<T> {
    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let out = core::mem::take(&mut self.buf[index]);
        self.erase(index);
        Some(out)
    }

    /// Fallible variant of [`remove`](Self::remove), returning
    /// [`Error::OutOfRange`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfRange)
    }
}
