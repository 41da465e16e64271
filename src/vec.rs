// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynamicArray` type and its inherent API.
//!
//! `DynamicArray<T>` is a growable vector built on an [`OwningBuffer`]. It
//! tracks a logical length separately from the allocated capacity; growth
//! allocates a larger buffer, moves the live prefix across, and swaps
//! ownership. Methods generally mirror `Vec`/slice semantics, with fallible
//! `try_*` variants where allocation can fail.

mod clone;
mod erase;
mod extend;
mod from;
mod grow;
mod insert;
mod new;
mod pop;
mod push;
mod retain;
mod slice;

pub(crate) use grow::growth_failed;

// Crate imports
use crate::{buffer::OwningBuffer, error::Error};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, contiguous, heap-backed array with exclusive ownership.
///
/// `DynamicArray<T>` owns one [`OwningBuffer<T>`] of `capacity` slots and
/// tracks a logical length `len` with `0 <= len <= capacity`:
///
/// - slots `[0, len)` are live and visible through safe APIs;
/// - slots `[len, capacity)` are allocated but dead: they hold some `T`
///   (usually `T::default()`) that carries no meaning;
/// - `capacity == 0` exactly when no block is allocated.
///
/// # Growth policy
///
/// When an operation needs `required > capacity` slots (via
/// [`push`](Self::push), [`insert`](Self::insert), or [`resize`](Self::resize)),
/// the new capacity is `max(capacity * 2, required)`. Pushing onto an empty,
/// unallocated array therefore yields capacity `1`. [`reserve`](Self::reserve)
/// allocates exactly what it is asked for and never shrinks.
///
/// Every growth allocates the new buffer first and only then moves the live
/// elements across, so a failed allocation (see the `try_*` methods) leaves
/// the array untouched. Elements are moved, never cloned, and keep their
/// positions.
///
/// # Element bounds
///
/// Any operation that creates slots fills them with `T::default()`, so
/// constructors from a length, growth, and value-extracting removals require
/// `T: Default`. Read-only access, `clear`, `truncate`, `erase`, and
/// ownership transfer have no bounds.
///
/// # Examples
///
/// ```rust
/// use dynamic_array::{dyn_array, DynamicArray};
///
/// let mut v: DynamicArray<i32> = DynamicArray::new();
/// v.push(1);
/// v.push(2);
/// v.push(3);
/// v.insert(1, 99);
/// assert_eq!(v.as_slice(), &[1, 99, 2, 3]);
///
/// v.erase(1);
/// assert_eq!(v, dyn_array![1, 2, 3]);
/// assert_eq!(v.pop(), Some(3));
/// assert!(v.at(2).is_err());
/// ```
pub struct DynamicArray<T> {
    pub(crate) buf: OwningBuffer<T>,
    pub(crate) len: usize,
    pub(crate) capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the element at `index`, or [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.get(index).ok_or(Error::OutOfRange)
    }

    /// Mutable form of [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.get_mut(index).ok_or(Error::OutOfRange)
    }

    /// Returns `Some(&T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns `Some(&mut T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Sets `len = 0`. Capacity and the stored values are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    ///
    /// Truncated slots become dead but are not dropped until overwritten or
    /// until the buffer is freed.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Exchanges length, capacity, and buffer with `other` in O(1).
    ///
    /// Named `swap_with` so it does not shadow the slice method `swap(a, b)`
    /// reachable through `Deref`.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        core::mem::swap(&mut self.len, &mut other.len);
        core::mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Moves the contents out, leaving `self` empty (`len == capacity == 0`,
    /// no block).
    #[inline]
    pub fn take(&mut self) -> Self {
        let mut out = Self::new();
        out.swap_with(self);
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for DynamicArray<T> {}
impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
