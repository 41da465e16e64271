// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reallocation and the growth policy.
//!
//! Every path here allocates the replacement buffer before touching `self`,
//! so an `Err` always leaves length, capacity, and contents unchanged.

// Crate imports
use crate::{buffer::OwningBuffer, error::Error, vec::DynamicArray};

/// Panics with the growth error. Used by the infallible wrappers.
#[cold]
#[track_caller]
pub(crate) fn growth_failed(err: Error) -> ! {
    panic!("dynamic array growth failed: {err}")
}

impl<T: Default> DynamicArray<T> {
    /// Moves the live prefix into a fresh buffer of exactly `new_capacity`
    /// slots and adopts it.
    fn try_relocate(&mut self, new_capacity: usize) -> Result<(), Error> {
        debug_assert!(new_capacity >= self.len);
        let mut fresh = OwningBuffer::try_with_len(new_capacity)?;

        let len = self.len;
        fresh.as_mut_slice()[..len].swap_with_slice(&mut self.buf.as_mut_slice()[..len]);

        tracing::trace!(
            target: "dynamic_array",
            old_capacity = self.capacity,
            new_capacity,
            len,
            "relocated backing buffer"
        );
        // The old block (now holding defaults in its live prefix) drops with `fresh`.
        self.buf.swap(&mut fresh);
        self.capacity = new_capacity;
        Ok(())
    }

    /// Ensures room for `required` elements, growing to
    /// `max(capacity * 2, required)` when short.
    pub(crate) fn try_grow_for(&mut self, required: usize) -> Result<(), Error> {
        if required <= self.capacity {
            return Ok(());
        }
        let new_capacity = self.capacity.saturating_mul(2).max(required);
        self.try_relocate(new_capacity)
    }

    /// Reserves exactly `new_capacity` slots if that is more than the current
    /// capacity; otherwise a no-op. Never shrinks and never changes `len`.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails. See [`try_reserve`](Self::try_reserve).
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            growth_failed(err)
        }
    }

    /// Fallible form of [`reserve`](Self::reserve).
    ///
    /// Returns [`Error::AllocFailed`] and leaves `self` unchanged if the
    /// new buffer cannot be allocated.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity <= self.capacity {
            return Ok(());
        }
        self.try_relocate(new_capacity)
    }

    /// Resizes to `new_len`.
    ///
    /// - Shrinking only moves `len`; the cut values stay in their (now dead)
    ///   slots.
    /// - Growing within capacity overwrites `[len, new_len)` with
    ///   `T::default()`.
    /// - Growing past capacity reallocates to `max(capacity * 2, new_len)`;
    ///   the new tail holds defaults.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails. See [`try_resize`](Self::try_resize).
    pub fn resize(&mut self, new_len: usize) {
        if let Err(err) = self.try_resize(new_len) {
            growth_failed(err)
        }
    }

    /// Fallible form of [`resize`](Self::resize).
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), Error> {
        if new_len <= self.len {
            self.len = new_len;
            return Ok(());
        }
        if new_len > self.capacity {
            // Fresh slots past the moved prefix are already default.
            self.try_grow_for(new_len)?;
        } else {
            let len = self.len;
            self.buf.as_mut_slice()[len..new_len].fill_with(T::default);
        }
        self.len = new_len;
        Ok(())
    }
}
