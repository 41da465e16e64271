// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{growth_failed, DynamicArray},
};

impl<T: Default> DynamicArray<T> {
    /// Appends `value`, growing when `len == capacity`.
    ///
    /// Growing from capacity `0` yields capacity `1`; otherwise capacity at
    /// least doubles.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails. See [`try_push`](Self::try_push).
    #[inline]
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            growth_failed(err)
        }
    }

    /// Fallible form of [`push`](Self::push).
    ///
    /// On [`Error::AllocFailed`] the array is unchanged and `value` is dropped.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), Error> {
        self.try_grow_for(self.len + 1)?;
        let len = self.len;
        self.buf[len] = value;
        self.len = len + 1;
        Ok(())
    }
}
