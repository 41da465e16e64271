// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{growth_failed, DynamicArray},
};

impl<T: Default> DynamicArray<T> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot toward
    /// the tail, and returns a reference to the inserted element.
    ///
    /// `index == len` appends. Grows exactly like [`push`](Self::push).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, or if the allocation fails.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        match self.try_insert(index, value) {
            Ok(slot) => slot,
            Err(err) => growth_failed(err),
        }
    }

    /// Fallible form of [`insert`](Self::insert).
    ///
    /// - Returns [`Error::OutOfRange`] if `index > len`.
    /// - Returns [`Error::AllocFailed`] if growth fails.
    ///
    /// On error the array is unchanged.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, Error> {
        if index > self.len {
            return Err(Error::OutOfRange);
        }
        self.try_push(value)?;

        // Shift right: [index..len) -> [index+1..len+1), pushed value lands at index.
        let live = self.as_mut_slice();
        live[index..].rotate_right(1);
        Ok(&mut live[index])
    }
}
