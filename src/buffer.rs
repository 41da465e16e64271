// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `OwningBuffer` type: a move-only owner of at most one heap block.
//!
//! `OwningBuffer<T>` knows nothing about a logical length. It only answers
//! "is a block owned, and how long is it", hands out indexed access into the
//! block, and transfers ownership (take, release, swap).
//!
//! A requested length of `0` never allocates: the buffer holds no block, so
//! [`OwningBuffer::is_allocated`] doubles as "was non-empty".
//!
//! The type is not `Clone`. Storage is only duplicated through
//! [`DynamicArray`](crate::DynamicArray)'s deep copy.

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::{
    fmt,
    ops::{Index, IndexMut},
};

/// Exclusive owner of zero or one contiguous heap block of `T`.
///
/// Every slot of an owned block holds a constructed `T`; dropping the buffer
/// drops all of them and frees the block.
///
/// # Examples
///
/// ```rust
/// use dynamic_array::OwningBuffer;
///
/// let mut a: OwningBuffer<u32> = OwningBuffer::with_len(3);
/// let mut b: OwningBuffer<u32> = OwningBuffer::new();
/// a[1] = 7;
///
/// a.swap(&mut b);
/// assert!(!a.is_allocated());
/// assert_eq!(b.as_slice(), &[0, 7, 0]);
///
/// let block = b.release().unwrap();
/// assert_eq!(&*block, &[0, 7, 0]);
/// assert!(!b.is_allocated());
/// ```
pub struct OwningBuffer<T> {
    block: Option<Box<[T]>>,
}

impl<T> OwningBuffer<T> {
    /// Constructs a buffer that owns no block.
    #[inline]
    pub const fn new() -> Self {
        Self { block: None }
    }

    /// Returns `true` if a block is currently owned.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.block.is_some()
    }

    /// Returns the length of the owned block, or `0` when there is none.
    #[inline]
    pub fn len(&self) -> usize {
        self.block.as_deref().map_or(0, <[T]>::len)
    }

    /// Returns `true` if no block is owned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.block.is_none()
    }

    /// Returns the whole block as a shared slice (empty if no block).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.block.as_deref().unwrap_or(&[])
    }

    /// Returns the whole block as a mutable slice (empty if no block).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.block.as_deref_mut() {
            Some(block) => block,
            None => &mut [],
        }
    }

    /// Gives up ownership of the block and returns it.
    ///
    /// The buffer holds no block afterwards.
    #[inline]
    #[must_use = "dropping the released block frees it immediately"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        let block = self.block.take();
        if let Some(b) = &block {
            tracing::trace!(target: "dynamic_array", len = b.len(), "released buffer block");
        }
        block
    }

    /// Exchanges blocks with `other`. No element is touched.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.block, &mut other.block);
    }

    /// Moves the block out into a new buffer, leaving `self` with no block.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            block: self.block.take(),
        }
    }
}

impl<T: Default> OwningBuffer<T> {
    /// Allocates a block of `len` default-constructed elements.
    ///
    /// `len == 0` allocates nothing.
    ///
    /// Aborts or panics on allocation failure, like `Vec`. See
    /// [`try_with_len`](Self::try_with_len) for a fallible form.
    pub fn with_len(len: usize) -> Self {
        if len == 0 {
            return Self::new();
        }
        let mut block = Vec::with_capacity(len);
        block.resize_with(len, T::default);
        Self {
            block: Some(block.into_boxed_slice()),
        }
    }

    /// Fallible form of [`with_len`](Self::with_len).
    ///
    /// Returns [`Error::AllocFailed`] if the allocator refuses the request or
    /// the byte size of the block would overflow.
    pub fn try_with_len(len: usize) -> Result<Self, Error> {
        if len == 0 {
            return Ok(Self::new());
        }
        let mut block = Vec::new();
        if block.try_reserve_exact(len).is_err() {
            tracing::debug!(target: "dynamic_array", len, "buffer allocation refused");
            return Err(Error::AllocFailed);
        }
        block.resize_with(len, T::default);
        Ok(Self {
            block: Some(block.into_boxed_slice()),
        })
    }
}

impl<T: Clone> OwningBuffer<T> {
    /// Allocates a block of `len` clones of `value`.
    ///
    /// `len == 0` allocates nothing.
    pub fn filled(len: usize, value: T) -> Self {
        if len == 0 {
            return Self::new();
        }
        Self {
            block: Some(alloc::vec![value; len].into_boxed_slice()),
        }
    }
}

impl<T> Default for OwningBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for OwningBuffer<T> {
    /// Adopts `block`. An empty block is dropped and the buffer holds nothing.
    fn from(block: Box<[T]>) -> Self {
        if block.is_empty() {
            Self::new()
        } else {
            Self { block: Some(block) }
        }
    }
}

impl<T> Index<usize> for OwningBuffer<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }
}

impl<T> IndexMut<usize> for OwningBuffer<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_slice()[i]
    }
}

impl<T: fmt::Debug> fmt::Debug for OwningBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwningBuffer")
            .field("block", &self.block.as_deref())
            .finish()
    }
}
